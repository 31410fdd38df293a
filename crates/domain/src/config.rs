//! Client configuration structures
//!
//! The environment-based loader lives in `codebin-client::config`; this
//! module only defines the shape and defaults.

use std::time::Duration;

/// Base URL used when nothing is configured (local dev server).
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";

/// Configuration for the API transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the codebin REST service, including the `/api` prefix
    /// (e.g. `https://codebin.example.com/api`)
    pub base_url: String,
    /// Optional client-side request timeout. `None` (the default) means the
    /// transport imposes no deadline of its own; callers cancel a hung call
    /// by dropping its future.
    pub timeout: Option<Duration>,
    /// Optional `User-Agent` header value
    pub user_agent: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_BASE_URL.to_string(), timeout: None, user_agent: None }
    }
}

impl ClientConfig {
    /// Create a configuration pointing at the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into(), ..Self::default() }
    }
}
