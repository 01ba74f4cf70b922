// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// GETEILTE TYPEN
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

use serde::{Deserialize, Serialize};

/// Anhang für die Tool-Skript-Generierung.
///
/// Gehört dem Aufrufer; das Hint-Subsystem liest ihn nur. Die JSON-Form
/// entspricht dem camelCase-Wire-Format der Remote-API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolScriptAttachment {
    /// Dateiname, z. B. `mscons_202508.edi`.
    pub filename: String,
    /// Roh-Inhalt der Datei als Text.
    pub content: String,
    /// MIME-Typ, falls bekannt.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    /// Freitext-Beschreibung für den Prompt.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Relative Gewichtung des Anhangs (0.0 - 1.0).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f32>,
}

impl ToolScriptAttachment {
    /// Erzeugt einen Anhang ohne weitere Metadaten.
    pub fn new(filename: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            content: content.into(),
            mime_type: None,
            description: None,
            weight: None,
        }
    }

    /// Leitet den MIME-Typ aus dem Dateinamen ab (`mime_guess`).
    ///
    /// EDIFACT-Endungen kennt die MIME-Datenbank nicht; dort bleibt der
    /// Fallback `text/plain`.
    pub fn with_guessed_mime(mut self) -> Self {
        let guessed = mime_guess::from_path(&self.filename)
            .first_or_text_plain()
            .essence_str()
            .to_string();
        self.mime_type = Some(guessed);
        self
    }

    /// Setzt die Beschreibung.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Setzt die Gewichtung.
    pub fn with_weight(mut self, weight: f32) -> Self {
        self.weight = Some(weight);
        self
    }
}

/// Automatisch erzeugte Kontext-Hinweise für die Skript-Generierung.
///
/// `additional_context` und `repair_context` sind absichtlich identisch:
/// dieselbe Erklärung gilt für den Erstversuch wie für einen Reparaturlauf.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoToolHints {
    /// Kontextblock für den Generierungs-Prompt.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_context: Option<String>,
    /// Kontextblock für den Reparatur-Prompt (identisch zu `additional_context`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repair_context: Option<String>,
    /// Kurzzusammenfassung für Logs und UI.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}
