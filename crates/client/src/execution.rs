//! Code-execution client: one opaque call to the remote sandbox.

use codebin_domain::{ExecutionRequest, ExecutionResult, Result};

use crate::languages::{SupportedLanguage, SUPPORTED_LANGUAGES};
use crate::transport::{ApiTransport, Auth};

/// Client for `POST /execute`.
///
/// The client imposes no timeout of its own; `compile_timeout` and
/// `run_timeout` in the request are advisory values forwarded to the
/// sandbox. Exit codes are returned for display, never interpreted here.
#[derive(Clone)]
pub struct ExecutionClient {
    transport: ApiTransport,
}

impl ExecutionClient {
    pub fn new(transport: ApiTransport) -> Self {
        Self { transport }
    }

    /// Run code in the remote sandbox.
    pub async fn execute(&self, request: &ExecutionRequest) -> Result<ExecutionResult> {
        self.transport.post("/execute", request, Auth::Bearer).await
    }

    /// The static table of languages the sandbox accepts. Hard-coded; can go
    /// stale if the backend's supported set changes.
    pub fn supported_languages(&self) -> &'static [SupportedLanguage] {
        SUPPORTED_LANGUAGES
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::auth::{MemoryTokenStore, TokenStore};
    use crate::languages;

    use super::*;

    fn client(base_url: &str) -> ExecutionClient {
        let store = MemoryTokenStore::default();
        store.store("abc").unwrap();
        let transport = ApiTransport::builder()
            .base_url(base_url)
            .token_store(Arc::new(store))
            .build()
            .unwrap();
        ExecutionClient::new(transport)
    }

    #[tokio::test]
    async fn execute_posts_request_and_decodes_run_output() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/execute"))
            .and(header("Authorization", "Bearer abc"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "language": "python",
                "version": "3.10.0",
                "run": {"stdout": "hi\n", "stderr": "", "code": 0}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client(&server.uri());
        let request = languages::find("python").unwrap().request_for("print('hi')");
        let result = client.execute(&request).await.unwrap();

        assert_eq!(result.run.stdout, "hi\n");
        assert_eq!(result.run.code, 0);
        assert!(result.compile.is_none());

        let requests = server.received_requests().await.unwrap();
        let body: serde_json::Value = requests[0].body_json().unwrap();
        assert_eq!(body["language"], "python");
        assert_eq!(body["files"][0]["content"], "print('hi')");
    }

    #[tokio::test]
    async fn sandbox_failures_surface_as_http_errors() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/execute"))
            .respond_with(ResponseTemplate::new(429).set_body_string("Too many requests"))
            .mount(&server)
            .await;

        let client = client(&server.uri());
        let request = languages::find("rust").unwrap().request_for("fn main() {}");
        let err = client.execute(&request).await.unwrap_err();
        assert_eq!(err.status(), Some(429));
    }

    #[test]
    fn supported_languages_is_the_static_table() {
        let store: Arc<MemoryTokenStore> = Arc::new(MemoryTokenStore::default());
        let transport = ApiTransport::builder()
            .base_url("http://localhost")
            .token_store(store)
            .build()
            .unwrap();
        let client = ExecutionClient::new(transport);
        assert_eq!(client.supported_languages().len(), 14);
    }
}
