use std::net::SocketAddr;
use std::path::Path;

use axum::http::HeaderValue;
use serde::{Deserialize, Serialize};

use crate::error::{ServerError, ServerResult};

/// Server configuration. Every field may be omitted from a config file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// Path the notes resource is mounted under, e.g. `/api/notes`.
    pub notes_root: String,
    /// Browser origins allowed to make credentialed cross-origin calls.
    pub cors_origins: Vec<String>,
    /// Serve a plain-text banner on `GET /`.
    pub expose_banner: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 5000)),
            notes_root: "/api/notes".into(),
            cors_origins: vec![
                "http://localhost:3000".into(),
                "http://localhost:3001".into(),
            ],
            expose_banner: true,
        }
    }
}

impl ServerConfig {
    /// Parse a TOML document and validate it.
    pub fn from_toml_str(s: &str) -> ServerResult<Self> {
        let config: Self = toml::from_str(s).map_err(|e| ServerError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> ServerResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "loaded config file");
        Self::from_toml_str(&text)
    }

    pub fn to_toml_string(&self) -> ServerResult<String> {
        toml::to_string_pretty(self).map_err(|e| ServerError::Config(e.to_string()))
    }

    pub fn validate(&self) -> ServerResult<()> {
        let root = &self.notes_root;
        if !root.starts_with('/') || root.ends_with('/') {
            return Err(ServerError::Config(format!(
                "notes_root must start with '/' and must not end with '/': {root:?}"
            )));
        }
        self.cors_header_values()?;
        Ok(())
    }

    /// The CORS origins as header values.
    pub fn cors_header_values(&self) -> ServerResult<Vec<HeaderValue>> {
        self.cors_origins
            .iter()
            .map(|origin| {
                HeaderValue::from_str(origin)
                    .map_err(|_| ServerError::Config(format!("invalid CORS origin: {origin:?}")))
            })
            .collect()
    }
}
