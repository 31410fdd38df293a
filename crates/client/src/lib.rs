//! # Codebin Client
//!
//! Typed client SDK for the codebin snippet-sharing and online-execution
//! service: a transport core over HTTP/JSON plus one client per resource
//! family (auth, snippets, comments, code execution).
//!
//! The SDK is a cache-less pass-through: it holds no authoritative state
//! beyond the persisted session token, and every error from the server
//! flows to the caller unchanged.
//!
//! ## Example
//! ```no_run
//! use std::sync::Arc;
//!
//! use codebin_client::{ApiTransport, AuthClient, MemoryTokenStore, SnippetClient};
//! use codebin_domain::{ClientConfig, LoginRequest, PageQuery};
//!
//! # async fn run() -> codebin_domain::Result<()> {
//! let transport = ApiTransport::new(
//!     &ClientConfig::new("https://codebin.example.com/api"),
//!     Arc::new(MemoryTokenStore::default()),
//! )?;
//!
//! let auth = AuthClient::new(transport.clone());
//! auth.login(&LoginRequest {
//!     email: "ada@example.com".into(),
//!     password: "hunter2".into(),
//! })
//! .await?;
//!
//! let snippets = SnippetClient::new(transport);
//! let page = snippets.public_snippets(&PageQuery::default()).await?;
//! println!("{} snippets", page.content.len());
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod comments;
pub mod config;
pub mod execution;
pub mod languages;
pub mod snippets;
pub mod transport;

// Re-export the client surface
#[cfg(feature = "keyring")]
pub use auth::KeyringTokenStore;
pub use auth::{AuthClient, FileTokenStore, MemoryTokenStore, TokenStore};
pub use comments::CommentClient;
pub use execution::ExecutionClient;
pub use languages::{SupportedLanguage, SUPPORTED_LANGUAGES};
pub use snippets::SnippetClient;
pub use transport::{ApiTransport, ApiTransportBuilder, Auth};
