// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// CODE-BLOCK EXTRACTOR - Skript aus einer Modell-Antwort herauslösen
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

use once_cell::sync::Lazy;
use regex::Regex;

/// Erster Markdown-Code-Fence, optional mit Sprach-Tag.
static CODE_FENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)```([A-Za-z0-9_+\-]*)[ \t]*\r?\n(.*?)```").expect("static pattern"));

/// Aus einer Modell-Antwort extrahierter Code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedCode {
    /// Der Code selbst, ohne Fences.
    pub code: String,
    /// Sprach-Tag des Fence (z. B. `python`), falls angegeben.
    pub language: Option<String>,
}

/// Zieht den ersten Fenced-Code-Block aus `text`.
///
/// Ohne Fence wird der gesamte getrimmte Text als Code behandelt — Modelle
/// liefern gelegentlich nackte Skripte ohne Markdown-Rahmen.
pub fn extract_code_block(text: &str) -> ExtractedCode {
    if let Some(captures) = CODE_FENCE.captures(text) {
        let language = captures
            .get(1)
            .map(|m| m.as_str().trim())
            .filter(|s| !s.is_empty())
            .map(String::from);
        let code = captures
            .get(2)
            .map(|m| m.as_str().trim_end())
            .unwrap_or_default()
            .to_string();
        return ExtractedCode { code, language };
    }

    ExtractedCode {
        code: text.trim().to_string(),
        language: None,
    }
}
