//! Configuration loading from environment variables.

use crate::constants::{DEFAULT_API_BASE_URL, DEFAULT_TIMEOUT_MS};
use serde::Deserialize;
use std::env;
use std::time::Duration;

/// Runtime configuration for the API client.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the word API, without a trailing slash.
    pub base_url: String,
    /// Request timeout in milliseconds, enforced on the transport.
    pub timeout_ms: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl ApiConfig {
    /// Load configuration from environment variables.
    ///
    /// `WORDBOOK_API_URL` overrides the base URL (trailing slashes are
    /// stripped) and `WORDBOOK_TIMEOUT_MS` the timeout. Missing or
    /// unparseable values fall back to the defaults.
    pub fn from_env() -> Self {
        Self {
            base_url: env::var("WORDBOOK_API_URL")
                .ok()
                .map(|value| value.trim().trim_end_matches('/').to_string())
                .filter(|value| !value.is_empty())
                .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
            timeout_ms: env::var("WORDBOOK_TIMEOUT_MS")
                .ok()
                .and_then(|value| value.trim().parse().ok())
                .unwrap_or(DEFAULT_TIMEOUT_MS),
        }
    }

    /// Request timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}
