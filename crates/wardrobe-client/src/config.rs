//! Client configuration.

use std::env;

/// Environment variable overriding the backend base URL.
pub const BASE_URL_ENV: &str = "API_BASE_URL";

/// Default backend address for local development.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8080";

/// Configuration for [`WardrobeClient`](crate::WardrobeClient).
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend origin prepended to every relative path.
    pub base_url: String,
    /// Per-request timeout.
    pub timeout_secs: u64,
    /// Value of the `User-Agent` header.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
            user_agent: concat!("wardrobe-client/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ClientConfig {
    /// Configuration against an explicit base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Resolve the base URL from `API_BASE_URL`, falling back to the
    /// local default.
    pub fn from_env() -> Self {
        match env::var(BASE_URL_ENV) {
            Ok(url) if !url.is_empty() => Self::new(url),
            _ => Self::default(),
        }
    }
}
