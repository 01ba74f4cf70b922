// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// HTTP-IMPLEMENTIERUNG des MakoApi-Traits (reqwest)
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::types::{
    ChatMessage, ChatSession, EdifactAnalysis, EdifactAnalyzeRequest, LoginRequest, LoginResponse,
    ToolScriptRequest, ToolScriptResponse,
};
use super::{ApiError, MakoApi};

/// HTTP-Client für die Willi-Mako-API.
///
/// Hält Basis-URL und optionales Bearer-Token; alle Endpunkte außer dem Login
/// erwarten ein Token. Kein Retry, kein Caching — Fehler gehen unverändert an
/// den Aufrufer.
pub struct HttpMakoClient {
    base_url: String,
    token: Option<String>,
    http: reqwest::Client,
}

impl HttpMakoClient {
    /// Erzeugt einen Client ohne Token (nur Login möglich).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            http: reqwest::Client::new(),
        }
    }

    /// Setzt das Bearer-Token für authentifizierte Endpunkte.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    /// POST mit JSON-Body, JSON-Antwort, Statuscode-Mapping.
    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = self.url(path);
        log::debug!("POST {url}");

        let mut request = self.http.post(&url).json(body);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            let message = response.text().await.unwrap_or_default();
            return Err(ApiError::AuthError(message));
        }
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ApiError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::ParseError(e.to_string()))
    }
}

#[async_trait]
impl MakoApi for HttpMakoClient {
    async fn login(&self, email: &str, password: &str) -> Result<String, ApiError> {
        let body = LoginRequest {
            email: email.into(),
            password: password.into(),
        };
        let response: LoginResponse = self.post_json("/api/auth/login", &body).await?;
        Ok(response.token)
    }

    async fn create_chat(&self, title: &str) -> Result<ChatSession, ApiError> {
        let body = serde_json::json!({ "title": title });
        self.post_json("/api/chats", &body).await
    }

    async fn send_message(&self, chat_id: &str, content: &str) -> Result<ChatMessage, ApiError> {
        let body = serde_json::json!({ "content": content });
        self.post_json(&format!("/api/chats/{chat_id}/messages"), &body)
            .await
    }

    async fn generate_tool_script(
        &self,
        request: &ToolScriptRequest,
    ) -> Result<ToolScriptResponse, ApiError> {
        log::info!(
            "Generating tool script ({} attachment(s), hints: {})",
            request.attachments.len(),
            request.additional_context.is_some()
        );
        self.post_json("/api/tools/generate", request).await
    }

    async fn analyze_edifact(&self, message: &str) -> Result<EdifactAnalysis, ApiError> {
        let body = EdifactAnalyzeRequest {
            message: message.into(),
        };
        self.post_json("/api/edifact/analyze", &body).await
    }
}
