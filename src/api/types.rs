// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// API-DTOs - Wire-Typen der Willi-Mako REST-API
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{AutoToolHints, ToolScriptAttachment};

/// Login-Anfrage.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login-Antwort mit Bearer-Token.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
}

/// Eine Chat-Session auf der Remote-Seite.
///
/// Die ID ist ein opakes Handle; das SDK interpretiert sie nicht.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatSession {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Eine einzelne Chat-Nachricht.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: String,
    /// `user` oder `assistant`.
    pub role: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Anfrage an den Tool-Skript-Generator der Remote-API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolScriptRequest {
    /// Natürlichsprachige Aufgabenbeschreibung.
    pub query: String,
    /// Anhänge, die das Skript verarbeiten soll.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<ToolScriptAttachment>,
    /// Zusätzlicher Kontext für den Erstversuch (z. B. MSCONS-Hinweise).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_context: Option<String>,
    /// Kontext für einen Reparaturlauf nach fehlgeschlagener Generierung.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repair_context: Option<String>,
}

impl ToolScriptRequest {
    /// Baut eine Anfrage aus Query und Anhängen.
    pub fn new(query: impl Into<String>, attachments: Vec<ToolScriptAttachment>) -> Self {
        Self {
            query: query.into(),
            attachments,
            additional_context: None,
            repair_context: None,
        }
    }

    /// Faltet automatisch erzeugte Hinweise in die Anfrage ein.
    ///
    /// Bei `None` bleibt die Anfrage unverändert — der Workflow läuft ohne
    /// Zusatzkontext weiter.
    pub fn with_hints(mut self, hints: Option<AutoToolHints>) -> Self {
        if let Some(hints) = hints {
            self.additional_context = hints.additional_context;
            self.repair_context = hints.repair_context;
        }
        self
    }
}

/// Antwort des Tool-Skript-Generators.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolScriptResponse {
    /// Generiertes Skript, typischerweise als Markdown mit Code-Fence.
    pub script: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

/// Anfrage an die EDIFACT-Analyse der Remote-API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdifactAnalyzeRequest {
    pub message: String,
}

/// Ergebnis der Remote-EDIFACT-Analyse.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdifactAnalysis {
    pub summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_type: Option<String>,
}
