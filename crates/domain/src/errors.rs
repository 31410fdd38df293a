//! Error types used throughout the client SDK

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for codebin client operations
///
/// Every domain client propagates these unchanged to its caller; nothing in
/// the SDK retries, logs-and-swallows, or substitutes fallback data.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum ApiError {
    /// Non-2xx response; carries the status code and the raw body text
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// Malformed or missing JSON where a typed body was required
    #[error("Decode error: {0}")]
    Decode(String),

    /// Connection-level failure (refused, reset, DNS, timeout)
    #[error("Network error: {0}")]
    Network(String),

    /// Session problems detected client-side (e.g. a login response that
    /// carried no token) and token-store I/O failures
    #[error("Authentication error: {0}")]
    Auth(String),

    /// Invalid client configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ApiError {
    /// Status code of the underlying HTTP error, if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True when the server rejected the call as unauthenticated.
    ///
    /// This is how a stale session surfaces: `is_authenticated()` only
    /// checks token presence, so an expired or revoked token is first
    /// noticed here, on the failing call.
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }
}

/// Result type alias for codebin client operations
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_displays_status_and_body() {
        let err = ApiError::Http { status: 401, body: "Invalid credentials".to_string() };
        assert_eq!(err.to_string(), "HTTP 401: Invalid credentials");
        assert_eq!(err.status(), Some(401));
        assert!(err.is_unauthorized());
    }

    #[test]
    fn non_http_errors_have_no_status() {
        let err = ApiError::Decode("expected value at line 1".to_string());
        assert_eq!(err.status(), None);
        assert!(!err.is_unauthorized());
    }

    #[test]
    fn serializes_with_tag_and_content() {
        let err = ApiError::Network("connection refused".to_string());
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["type"], "Network");
        assert_eq!(json["message"], "connection refused");
    }
}
