//! # EDIFACT/MSCONS-Heuristik
//!
//! Der einzige Teil des SDK mit echter lokaler Logik: ein tolerant arbeitender
//! Segment-Tokenizer plus heuristische Stichproben-Extraktion, aus der
//! Kontext-Hinweise für die Tool-Skript-Generierung gebaut werden.
//!
//! ## Datenfluss
//!
//! Roh-Anhang → [`split_edifact_segments`] → Segmentliste →
//! [`extract_mscons_sample`] → [`MsconsSample`] → [`build_auto_tool_hints`] →
//! Kontextblock für den Prompt.
//!
//! Das gesamte Modul ist synchron, zustandslos und wirft nie Fehler:
//! fehlende Daten sind `None`, nie ein `Err` oder eine Panic. Die einzige
//! Ressourcengrenze ist [`MAX_SEGMENTS`].

mod hints;
mod mscons;
mod segments;
mod timestamp;

pub use hints::build_auto_tool_hints;
pub use mscons::{extract_mscons_sample, parse_dtm_value, parse_qty_value, MsconsSample, ParsedDateTime};
pub use segments::{split_edifact_segments, MAX_SEGMENTS};
pub use timestamp::to_iso_timestamp;
