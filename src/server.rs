// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// DEMO-HTTP-SERVER - Hint-Endpunkt lokal, Generierung als Proxy
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//!
//! Kleiner Beispielserver für das SDK.
//!
//! ## Endpunkte
//!
//! - `GET /health` - Health-Check
//! - `POST /api/hints` - MSCONS-Hinweise lokal berechnen
//! - `POST /api/generate` - Tool-Skript-Generierung, Proxy zur Remote-API
//!
//! ## Verwendung
//!
//! ```bash
//! cargo run --features server -- serve --port 3000
//! cargo run --features server -- serve --port 3000 --secret mein-schluessel
//! ```

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::{header::AUTHORIZATION, StatusCode};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;

use crate::api::{ApiError, MakoApi, ToolScriptRequest, ToolScriptResponse};
use crate::edifact::build_auto_tool_hints;
use crate::types::{AutoToolHints, ToolScriptAttachment};

/// Geteilter Zustand aller Handler.
pub struct AppState {
    /// Client für die Remote-API (explizites Handle, kein Singleton).
    pub api: Arc<dyn MakoApi>,
    /// Optionales Bearer-Secret für alle Endpunkte.
    pub secret: Option<String>,
}

/// Anfrage an den lokalen Hint-Endpunkt.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HintsRequest {
    /// Aufgabenbeschreibung des Nutzers.
    pub query: String,
    /// Anhänge der Tool-Skript-Anfrage.
    #[serde(default)]
    pub attachments: Vec<ToolScriptAttachment>,
}

/// Antwort des Hint-Endpunkts; `hints` ist `null` wenn nichts erkannt wurde.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HintsResponse {
    /// Berechnete Hinweise oder `null`.
    pub hints: Option<AutoToolHints>,
}

/// Startet den Server auf der angegebenen Adresse.
///
/// Entry-Point aus main.rs für das Subkommando `serve`.
pub async fn start_server(addr: SocketAddr, state: Arc<AppState>) -> anyhow::Result<()> {
    let routes = Router::new()
        .route("/health", get(health))
        .route("/api/hints", post(hints))
        .route("/api/generate", post(generate));

    // Auth-Middleware nur wenn ein Secret gesetzt ist
    let routes = if state.secret.is_some() {
        routes.layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ))
    } else {
        routes
    };

    let app = routes.layer(CorsLayer::permissive()).with_state(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    log::info!("Willi-Mako demo server listening on http://{addr}");
    axum::serve(listener, app).await?;
    Ok(())
}

async fn auth_middleware(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Response {
    if let Some(secret) = &state.secret {
        let expected = format!("Bearer {secret}");
        let authorized = request
            .headers()
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .map(|value| value == expected)
            .unwrap_or(false);
        if !authorized {
            return (StatusCode::UNAUTHORIZED, "invalid or missing bearer token").into_response();
        }
    }
    next.run(request).await
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "version": crate::VERSION,
    }))
}

/// Berechnet MSCONS-Hinweise lokal, ohne Remote-Aufruf.
async fn hints(Json(request): Json<HintsRequest>) -> Json<HintsResponse> {
    let hints = build_auto_tool_hints(&request.query, &request.attachments);
    Json(HintsResponse { hints })
}

/// Proxy zur Remote-Generierung; fehlen Hinweise in der Anfrage, werden sie
/// vorher lokal ergänzt.
async fn generate(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ToolScriptRequest>,
) -> Result<Json<ToolScriptResponse>, (StatusCode, String)> {
    let request = if request.additional_context.is_none() {
        let hints = build_auto_tool_hints(&request.query, &request.attachments);
        request.with_hints(hints)
    } else {
        request
    };

    let response = state
        .api
        .generate_tool_script(&request)
        .await
        .map_err(map_api_error)?;

    Ok(Json(response))
}

fn map_api_error(err: ApiError) -> (StatusCode, String) {
    let status = match &err {
        ApiError::AuthError(_) => StatusCode::UNAUTHORIZED,
        ApiError::ApiError { status, .. } => {
            StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
        }
        ApiError::NetworkError(_) => StatusCode::BAD_GATEWAY,
        ApiError::ParseError(_) => StatusCode::BAD_GATEWAY,
    };
    (status, err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockMakoClient;

    #[tokio::test]
    async fn test_hints_handler_returns_null_without_attachments() {
        let response = hints(Json(HintsRequest {
            query: "MSCONS".into(),
            attachments: vec![],
        }))
        .await;
        assert!(response.0.hints.is_none());
    }

    #[tokio::test]
    async fn test_generate_folds_hints_before_proxying() {
        let state = Arc::new(AppState {
            api: Arc::new(MockMakoClient::with_script("# skript")),
            secret: None,
        });
        let request = ToolScriptRequest::new(
            "MSCONS zu CSV",
            vec![ToolScriptAttachment::new(
                "mscons.edi",
                "UNH+1+MSCONS:D:04B:UN:2.4c'LOC+Z04+HZ0'",
            )],
        );

        let response = generate(State(state), Json(request)).await.unwrap();
        assert_eq!(response.0.script, "# skript");
    }
}
