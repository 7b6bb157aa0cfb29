//! Client configuration.
//!
//! The host page may embed a JSON block; every field is optional and an
//! empty `base_url` means "same origin".

use serde::Deserialize;

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Scheme + host (+ optional prefix) of the prediction service.
    pub base_url: String,
    /// `EnvFilter` directive for the developer console log.
    pub log_level: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            log_level: "info".to_string(),
        }
    }
}

impl ClientConfig {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Fill in `origin` when no base URL was configured.
    pub fn resolve_origin(self, origin: &str) -> Self {
        if self.base_url.is_empty() {
            self.with_base_url(origin)
        } else {
            self
        }
    }

    /// Join the base URL and an endpoint path with exactly one slash.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
