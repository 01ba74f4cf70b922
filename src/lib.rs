//! # Willi-Mako Rust SDK
//!
//! Client-SDK und CLI für die Willi-Mako-API, eine REST-Schnittstelle für
//! Marktkommunikation im deutschen Energiemarkt. Das schwere Geschütz —
//! EDIFACT-Analyse, Reasoning-Pipelines, strukturierte Datenabfragen — läuft
//! hinter der Remote-API; dieses Crate liefert typisierte Wrapper darum.
//!
//! ## Architektur
//!
//! - **`api`**: Trait + HTTP-Client + Mock für die Remote-Endpunkte
//!   (Login, Chat, Tool-Skript-Generierung, EDIFACT-Analyse)
//! - **`edifact`**: der einzige Teil mit echter lokaler Logik — ein
//!   toleranter Segment-Tokenizer und eine heuristische MSCONS-Stichprobe,
//!   aus der Kontext-Hinweise für Generierungs-Prompts gebaut werden
//! - **`tools`**: Prompt-Builder und Code-Block-Extraktion für den
//!   Generierungs-Workflow
//! - **`server`** (Feature `server`): Demo-HTTP-Server mit lokalem
//!   Hint-Endpunkt und Proxy zur Remote-Generierung
//!
//! ## Beispiel
//!
//! ```rust
//! use willi_mako::edifact::build_auto_tool_hints;
//! use willi_mako::types::ToolScriptAttachment;
//!
//! let attachments = vec![ToolScriptAttachment::new(
//!     "mscons.edi",
//!     "UNH+1+MSCONS:D:04B:UN:2.4c'LOC+Z04+DE0001112223330'",
//! )];
//! let hints = build_auto_tool_hints("MSCONS zu CSV konvertieren", &attachments);
//! assert!(hints.is_some());
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

/// Typisierte Wrapper um die Willi-Mako REST-API.
///
/// Enthält den [`api::MakoApi`]-Trait, die HTTP-Implementierung
/// [`api::HttpMakoClient`], einen Mock für Tests und die Wire-DTOs.
pub mod api;

/// Zugangskonfiguration aus Umgebungsvariablen.
pub mod config;

/// EDIFACT-Segment-Tokenizer und heuristische MSCONS-Stichprobe.
///
/// Rein, synchron, zustandslos; fehlende Daten sind `None`, nie ein Fehler.
pub mod edifact;

/// Prompt-Builder und Code-Block-Extraktion für den
/// Tool-Skript-Generierungs-Workflow.
pub mod tools;

/// Geteilte Typen: Anhänge und automatisch erzeugte Hinweise.
pub mod types;

/// Demo-HTTP-Server (Feature `server`).
#[cfg(feature = "server")]
pub mod server;

// Re-Exports der wichtigsten Einstiegspunkte
pub use api::{HttpMakoClient, MakoApi};
pub use edifact::{build_auto_tool_hints, extract_mscons_sample, split_edifact_segments};
pub use types::{AutoToolHints, ToolScriptAttachment};

/// Version der Bibliothek.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude mit den gängigen Imports.
///
/// ```rust,ignore
/// use willi_mako::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        ApiError, HttpMakoClient, MakoApi, MockMakoClient, ToolScriptRequest, ToolScriptResponse,
    };
    pub use crate::config::ApiConfig;
    pub use crate::edifact::{
        build_auto_tool_hints, extract_mscons_sample, split_edifact_segments, to_iso_timestamp,
        MsconsSample, MAX_SEGMENTS,
    };
    pub use crate::tools::{extract_code_block, ToolScriptPromptBuilder};
    pub use crate::types::{AutoToolHints, ToolScriptAttachment};
}
