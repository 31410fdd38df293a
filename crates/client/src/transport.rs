//! Transport core: the single choke point for every network call.
//!
//! `ApiTransport` encapsulates the base URL, default headers, bearer-token
//! injection and response normalization. It does not cache, retry or
//! rate-limit; every error surfaces to the caller unchanged.

use std::sync::Arc;

use codebin_domain::{ApiError, ClientConfig, Result};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client as ReqwestClient, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::auth::TokenStore;

/// Whether a request should carry the stored bearer token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Auth {
    /// Never attach an `Authorization` header, regardless of stored state.
    None,
    /// Attach `Authorization: Bearer <token>` when the store holds a token.
    /// With no token present the header is simply omitted and the server's
    /// 401 surfaces to the caller.
    Bearer,
}

/// HTTP transport shared by all domain clients.
///
/// Cheap to clone: the reqwest client is internally pooled and the token
/// store is behind an `Arc`. The token is re-read from the store on every
/// call, so a login or logout is visible to all clones immediately.
#[derive(Clone)]
pub struct ApiTransport {
    http: ReqwestClient,
    base_url: String,
    token_store: Arc<dyn TokenStore>,
}

impl ApiTransport {
    /// Start building a transport with non-default settings.
    pub fn builder() -> ApiTransportBuilder {
        ApiTransportBuilder::default()
    }

    /// Build a transport from a configuration and a token store.
    pub fn new(config: &ClientConfig, token_store: Arc<dyn TokenStore>) -> Result<Self> {
        let mut builder = Self::builder().base_url(&config.base_url).token_store(token_store);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(agent) = &config.user_agent {
            builder = builder.user_agent(agent.clone());
        }
        builder.build()
    }

    /// The token store this transport reads on every authenticated call.
    pub fn token_store(&self) -> &Arc<dyn TokenStore> {
        &self.token_store
    }

    /// Issue a request and normalize the response.
    ///
    /// Returns `Ok(None)` for 2xx responses with no structured payload
    /// (status 204, or an explicit `Content-Length: 0`); JSON decoding is
    /// never attempted on that path. Callers that require a body should go
    /// through the typed wrappers below.
    ///
    /// # Errors
    /// - `ApiError::Http` for any non-2xx status, carrying the status code
    ///   and the raw body text
    /// - `ApiError::Decode` when a 2xx body is not valid JSON for `T`
    /// - `ApiError::Network` for connection-level failures
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
        auth: Auth,
    ) -> Result<Option<T>> {
        let url = format!("{}{}", self.base_url, path);

        let mut request =
            self.http.request(method.clone(), &url).header(CONTENT_TYPE, "application/json");

        if auth == Auth::Bearer {
            if let Some(token) = self.token_store.load() {
                request = request.header("Authorization", format!("Bearer {token}"));
            }
        }

        if let Some(body) = body {
            request = request.json(body);
        }

        debug!(%method, %url, "dispatching API request");

        let response = request
            .send()
            .await
            .map_err(|err| ApiError::Network(format!("request to {url} failed: {err}")))?;

        let status = response.status();
        debug!(%method, %url, status = status.as_u16(), "received API response");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Http { status: status.as_u16(), body });
        }

        // Empty responses (e.g. DELETE operations) carry no payload to decode.
        if status == StatusCode::NO_CONTENT || response.content_length() == Some(0) {
            return Ok(None);
        }

        let text = response.text().await.map_err(|err| {
            ApiError::Network(format!("reading response from {url} failed: {err}"))
        })?;

        serde_json::from_str(&text)
            .map(Some)
            .map_err(|err| ApiError::Decode(format!("invalid response body from {url}: {err}")))
    }

    /// GET a typed resource.
    pub async fn get<T: DeserializeOwned>(&self, path: &str, auth: Auth) -> Result<T> {
        let response = self.request(Method::GET, path, None, auth).await?;
        Self::expect_json(path, response)
    }

    /// POST a typed body and decode a typed response.
    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        auth: Auth,
    ) -> Result<T> {
        let body = Self::to_body(body)?;
        let response = self.request(Method::POST, path, Some(&body), auth).await?;
        Self::expect_json(path, response)
    }

    /// POST without a body (e.g. toggling a star) and decode a typed
    /// response.
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str, auth: Auth) -> Result<T> {
        let response = self.request(Method::POST, path, None, auth).await?;
        Self::expect_json(path, response)
    }

    /// PUT a typed body and decode a typed response.
    pub async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        auth: Auth,
    ) -> Result<T> {
        let body = Self::to_body(body)?;
        let response = self.request(Method::PUT, path, Some(&body), auth).await?;
        Self::expect_json(path, response)
    }

    /// DELETE a resource, tolerating the empty-body response path.
    pub async fn delete(&self, path: &str, auth: Auth) -> Result<()> {
        self.request::<Value>(Method::DELETE, path, None, auth).await?;
        Ok(())
    }

    fn to_body<B: Serialize>(body: &B) -> Result<Value> {
        serde_json::to_value(body)
            .map_err(|err| ApiError::Decode(format!("failed to serialize request body: {err}")))
    }

    fn expect_json<T>(path: &str, response: Option<T>) -> Result<T> {
        response.ok_or_else(|| {
            ApiError::Decode(format!("expected a response body from {path}, got none"))
        })
    }
}

/// Builder for [`ApiTransport`].
#[derive(Default)]
pub struct ApiTransportBuilder {
    base_url: Option<String>,
    timeout: Option<std::time::Duration>,
    user_agent: Option<String>,
    token_store: Option<Arc<dyn TokenStore>>,
}

impl ApiTransportBuilder {
    /// Base URL of the API, including the `/api` prefix. A trailing slash is
    /// stripped so paths can always start with `/`.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Opt-in client-side timeout. Without it the transport imposes no
    /// deadline; a hung request is cancelled by dropping its future.
    pub fn timeout(mut self, timeout: std::time::Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    pub fn token_store(mut self, store: Arc<dyn TokenStore>) -> Self {
        self.token_store = Some(store);
        self
    }

    /// Build the transport.
    ///
    /// # Errors
    /// Returns `ApiError::Config` when no token store was supplied or the
    /// underlying HTTP client cannot be constructed.
    pub fn build(self) -> Result<ApiTransport> {
        let token_store = self
            .token_store
            .ok_or_else(|| ApiError::Config("a token store is required".to_string()))?;

        let base_url = self
            .base_url
            .unwrap_or_else(|| codebin_domain::config::DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let mut builder = ReqwestClient::builder().no_proxy();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(agent) = self.user_agent {
            builder = builder.user_agent(agent);
        }

        let http = builder
            .build()
            .map_err(|err| ApiError::Config(format!("failed to build HTTP client: {err}")))?;

        Ok(ApiTransport { http, base_url, token_store })
    }
}
