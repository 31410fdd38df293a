//! Session and credential payloads

use serde::{Deserialize, Serialize};

use super::user::User;

/// Login request body for `POST /auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Registration request body for `POST /auth/register`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub username: String,
    pub password: String,
}

/// Successful login/registration response.
///
/// `token` defaults to an empty string when the server omits the field, so
/// that a 2xx response without a usable token is detectable without a decode
/// failure; `AuthClient` rejects empty tokens before persisting anything.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub token: String,
    pub user: User,
}
