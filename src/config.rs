//! Runtime settings resolved from the environment.

use crate::image::Credential;
use std::net::SocketAddr;

/// Environment variables checked for a fallback API key, in order.
pub const API_KEY_ENV_VARS: [&str; 2] = ["GEMINI_API_KEY", "GOOGLE_API_KEY"];

/// Default address for the web UI.
pub const DEFAULT_BIND: &str = "127.0.0.1:8501";

/// Default upload limit for the web UI.
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

/// Settings shared by the web UI and the CLI.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Credential used when the user leaves the key field blank.
    pub api_key: Option<Credential>,
    /// Model id, `None` for the default model.
    pub model: Option<String>,
    /// API base URL override.
    pub base_url: Option<String>,
    /// Address the web UI listens on.
    pub bind: SocketAddr,
    /// Maximum request body accepted by the web UI.
    pub max_upload_bytes: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_key: None,
            model: None,
            base_url: None,
            bind: default_bind(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

fn default_bind() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 8501))
}

impl Settings {
    /// Loads `.env` (if present) and reads settings from the environment.
    pub fn load() -> Self {
        match dotenvy::dotenv() {
            Ok(path) => tracing::debug!(path = %path.display(), "loaded .env"),
            Err(e) if e.not_found() => {}
            Err(e) => tracing::warn!("failed to load .env: {e}"),
        }
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads settings through `lookup`, so tests need not touch the process env.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let api_key = API_KEY_ENV_VARS
            .iter()
            .find_map(|name| lookup(name).and_then(Credential::new));

        let non_blank = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let bind = match non_blank("EDITVIZ_BIND") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                tracing::warn!(value = %raw, "invalid EDITVIZ_BIND, using {DEFAULT_BIND}");
                default_bind()
            }),
            None => default_bind(),
        };

        Self {
            api_key,
            model: non_blank("EDITVIZ_MODEL"),
            base_url: non_blank("EDITVIZ_BASE_URL"),
            bind,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}
