// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// KONFIGURATION - API-Zugang aus Umgebungsvariablen
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//
// Alle Werte können über .env gesetzt werden (Laden übernimmt main.rs):
// - WILLI_MAKO_BASE_URL  (Default: https://stromhaltig.de)
// - WILLI_MAKO_EMAIL
// - WILLI_MAKO_PASSWORD
// - WILLI_MAKO_TOKEN
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

use std::fmt;

/// Default-Basis-URL der Remote-API.
pub const DEFAULT_BASE_URL: &str = "https://stromhaltig.de";

/// Zugangskonfiguration für die Willi-Mako-API.
///
/// Kein globaler Zustand: die Konfiguration wird geladen und explizit an den
/// Client übergeben.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Basis-URL der Remote-API.
    pub base_url: String,
    /// E-Mail für den Login (optional, nur für `login` nötig).
    pub email: Option<String>,
    /// Passwort für den Login (optional, nur für `login` nötig).
    pub password: Option<String>,
    /// Bereits vorhandenes Bearer-Token (optional).
    pub token: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            email: None,
            password: None,
            token: None,
        }
    }
}

impl ApiConfig {
    /// Liest die Konfiguration aus den Umgebungsvariablen.
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("WILLI_MAKO_BASE_URL")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            email: std::env::var("WILLI_MAKO_EMAIL").ok().filter(|v| !v.is_empty()),
            password: std::env::var("WILLI_MAKO_PASSWORD").ok().filter(|v| !v.is_empty()),
            token: std::env::var("WILLI_MAKO_TOKEN").ok().filter(|v| !v.is_empty()),
        }
    }

    /// `true` wenn ein Token für authentifizierte Endpunkte vorliegt.
    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }
}

impl fmt::Display for ApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Credentials nie ausgeben
        write!(
            f,
            "ApiConfig {{ base_url: {}, token: {} }}",
            self.base_url,
            if self.has_token() { "set" } else { "unset" }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_url() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert!(!config.has_token());
    }

    #[test]
    fn test_display_never_leaks_credentials() {
        let config = ApiConfig {
            token: Some("geheim".into()),
            password: Some("geheim".into()),
            ..ApiConfig::default()
        };
        let rendered = format!("{config}");
        assert!(!rendered.contains("geheim"));
        assert!(rendered.contains("token: set"));
    }
}
