//! Environment-based configuration loading.
//!
//! ## Environment Variables
//! - `CODEBIN_API_URL`: base URL of the REST service, including `/api`
//! - `CODEBIN_HTTP_TIMEOUT_SECS`: opt-in client-side timeout in seconds
//!
//! Unset variables fall back to [`ClientConfig::default`]; values that are
//! present but unparseable are configuration errors, not silent defaults.

use std::time::Duration;

use codebin_domain::{ApiError, ClientConfig, Result};

/// Base URL environment variable.
pub const ENV_API_URL: &str = "CODEBIN_API_URL";
/// Timeout environment variable (seconds).
pub const ENV_HTTP_TIMEOUT_SECS: &str = "CODEBIN_HTTP_TIMEOUT_SECS";

/// Load configuration from the environment, defaulting where unset.
///
/// # Errors
/// Returns `ApiError::Config` when `CODEBIN_HTTP_TIMEOUT_SECS` is set but
/// not a number.
pub fn from_env() -> Result<ClientConfig> {
    let mut config = ClientConfig::default();

    if let Ok(base_url) = std::env::var(ENV_API_URL) {
        if !base_url.is_empty() {
            config.base_url = base_url;
        }
    }

    if let Ok(raw) = std::env::var(ENV_HTTP_TIMEOUT_SECS) {
        let secs: u64 = raw.parse().map_err(|err| {
            ApiError::Config(format!("invalid {ENV_HTTP_TIMEOUT_SECS} value {raw:?}: {err}"))
        })?;
        config.timeout = Some(Duration::from_secs(secs));
    }

    Ok(config)
}
