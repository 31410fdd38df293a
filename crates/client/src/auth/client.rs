//! Session lifecycle client.

use codebin_domain::{ApiError, AuthResponse, LoginRequest, RegisterRequest, Result, User};
use tracing::debug;

use crate::transport::{ApiTransport, Auth};

/// Client for `/auth` endpoints and the local session state they control.
///
/// Login and registration persist the returned token into the transport's
/// token store before returning; logout deletes it without any network call.
#[derive(Clone)]
pub struct AuthClient {
    transport: ApiTransport,
}

impl AuthClient {
    pub fn new(transport: ApiTransport) -> Self {
        Self { transport }
    }

    /// Log in with email and password.
    ///
    /// On success the session token is persisted before the response is
    /// returned, so subsequent authenticated calls pick it up. A 2xx
    /// response without a usable token is rejected with `ApiError::Auth`
    /// and leaves the store untouched; there is no silent partial-success
    /// state.
    pub async fn login(&self, credentials: &LoginRequest) -> Result<AuthResponse> {
        let response: AuthResponse =
            self.transport.post("/auth/login", credentials, Auth::None).await?;
        self.persist_session(response)
    }

    /// Register a new account; on success the session starts immediately,
    /// with the same token handling as [`login`](Self::login).
    pub async fn register(&self, user_data: &RegisterRequest) -> Result<AuthResponse> {
        let response: AuthResponse =
            self.transport.post("/auth/register", user_data, Auth::None).await?;
        self.persist_session(response)
    }

    /// End the local session. Deletes the stored token unconditionally;
    /// synchronous, no server notification.
    pub fn logout(&self) -> Result<()> {
        self.transport.token_store().clear()
    }

    /// Fetch the authenticated user's profile.
    ///
    /// Fails with `ApiError::Http { status: 401, .. }` when the token is
    /// absent, expired or revoked — this is where a stale session first
    /// becomes visible.
    pub async fn current_user(&self) -> Result<User> {
        self.transport.get("/auth/me", Auth::Bearer).await
    }

    /// Pure local predicate: a token string is present.
    ///
    /// No expiry or signature validation happens client-side, so this can
    /// return `true` for a token the server has already rejected; the next
    /// authenticated call surfaces that as a 401.
    pub fn is_authenticated(&self) -> bool {
        self.transport.token_store().load().is_some()
    }

    fn persist_session(&self, response: AuthResponse) -> Result<AuthResponse> {
        if response.token.is_empty() {
            return Err(ApiError::Auth(
                "server accepted the credentials but returned no session token".to_string(),
            ));
        }
        self.transport.token_store().store(&response.token)?;
        debug!(username = %response.user.username, "session established");
        Ok(response)
    }
}
