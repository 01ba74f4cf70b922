// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// API-CLIENT - Typisierte Wrapper um die Willi-Mako REST-API
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//
// Die eigentliche Fachlogik (EDIFACT-Analyse, Reasoning, strukturierte Daten)
// lebt hinter der Remote-API. Dieses Modul enthält nur mechanische Adapter:
// Trait, HTTP-Implementierung, Mock für Tests.
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

mod client;
#[allow(missing_docs)]
pub mod types;

use async_trait::async_trait;

pub use client::HttpMakoClient;
pub use types::*;

/// Fehler des API-Clients.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Die Remote-API hat mit einem Fehlerstatus geantwortet.
    #[error("API error ({status}): {message}")]
    ApiError {
        /// HTTP-Statuscode.
        status: u16,
        /// Fehlertext aus dem Response-Body.
        message: String,
    },

    /// Token fehlt, ist abgelaufen oder ungültig.
    #[error("Authentication failed: {0}")]
    AuthError(String),

    /// Transportfehler (DNS, TLS, Timeout, Verbindungsabbruch).
    #[error("Network error: {0}")]
    NetworkError(String),

    /// Antwort ließ sich nicht als erwartetes JSON lesen.
    #[error("Invalid response format: {0}")]
    ParseError(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        Self::NetworkError(err.to_string())
    }
}

/// Trait für die Willi-Mako-API.
///
/// Erlaubt den Austausch der HTTP-Implementierung gegen einen Mock in Tests;
/// Aufrufer halten den Client als explizites Handle (`Arc<dyn MakoApi>`),
/// nicht als globalen Singleton.
#[async_trait]
pub trait MakoApi: Send + Sync {
    /// Meldet sich an und liefert ein Bearer-Token.
    async fn login(&self, email: &str, password: &str) -> Result<String, ApiError>;

    /// Legt eine neue Chat-Session an.
    async fn create_chat(&self, title: &str) -> Result<ChatSession, ApiError>;

    /// Sendet eine Nachricht und liefert die Assistenten-Antwort.
    async fn send_message(&self, chat_id: &str, content: &str) -> Result<ChatMessage, ApiError>;

    /// Lässt die Remote-API ein Tool-Skript generieren.
    async fn generate_tool_script(
        &self,
        request: &ToolScriptRequest,
    ) -> Result<ToolScriptResponse, ApiError>;

    /// Reicht eine EDIFACT-Nachricht zur Remote-Analyse ein.
    async fn analyze_edifact(&self, message: &str) -> Result<EdifactAnalysis, ApiError>;
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// MOCK FÜR TESTS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Mock-Client für Unit- und Integrationstests.
#[derive(Debug, Clone, Default)]
pub struct MockMakoClient {
    /// Festes Skript, das `generate_tool_script` zurückgibt.
    pub script: Option<String>,
}

impl MockMakoClient {
    /// Mock mit Default-Antworten.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mock, dessen Generator das angegebene Skript liefert.
    pub fn with_script(script: impl Into<String>) -> Self {
        Self {
            script: Some(script.into()),
        }
    }
}

#[async_trait]
impl MakoApi for MockMakoClient {
    async fn login(&self, email: &str, _password: &str) -> Result<String, ApiError> {
        Ok(format!("mock-token-{email}"))
    }

    async fn create_chat(&self, title: &str) -> Result<ChatSession, ApiError> {
        Ok(ChatSession {
            id: "mock-chat-1".into(),
            title: title.into(),
            created_at: None,
        })
    }

    async fn send_message(&self, chat_id: &str, content: &str) -> Result<ChatMessage, ApiError> {
        Ok(ChatMessage {
            id: format!("mock-msg-{chat_id}"),
            role: "assistant".into(),
            content: format!("Mock-Antwort auf: {content}"),
            created_at: None,
        })
    }

    async fn generate_tool_script(
        &self,
        request: &ToolScriptRequest,
    ) -> Result<ToolScriptResponse, ApiError> {
        let script = self
            .script
            .clone()
            .unwrap_or_else(|| format!("# Mock-Skript für: {}", request.query));
        Ok(ToolScriptResponse {
            script,
            language: Some("python".into()),
            summary: None,
        })
    }

    async fn analyze_edifact(&self, message: &str) -> Result<EdifactAnalysis, ApiError> {
        let message_type = message.contains("MSCONS").then(|| "MSCONS".to_string());
        Ok(EdifactAnalysis {
            summary: "Mock-Analyse".into(),
            message_type,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_login_roundtrip() {
        let token = tokio_test::block_on(MockMakoClient::new().login("a@example.com", "x")).unwrap();
        assert_eq!(token, "mock-token-a@example.com");
    }

    #[test]
    fn test_mock_analyze_detects_mscons() {
        let analysis =
            tokio_test::block_on(MockMakoClient::new().analyze_edifact("UNH+1+MSCONS'")).unwrap();
        assert_eq!(analysis.message_type.as_deref(), Some("MSCONS"));
    }

    #[test]
    fn test_api_error_display() {
        let err = ApiError::ApiError {
            status: 502,
            message: "upstream down".into(),
        };
        assert_eq!(err.to_string(), "API error (502): upstream down");
    }
}
