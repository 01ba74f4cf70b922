//! # Werkzeuge für die Tool-Skript-Generierung
//!
//! Text-Helfer rund um den Generierungs-Workflow:
//!
//! - [`ToolScriptPromptBuilder`]: baut System- und User-Prompt zusammen
//! - [`extract_code_block`]: löst das Skript aus der Modell-Antwort heraus

pub mod codeblock;
pub mod prompt;

pub use codeblock::{extract_code_block, ExtractedCode};
pub use prompt::{PromptBuilderConfig, ToolScriptPromptBuilder};
