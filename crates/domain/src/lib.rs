//! # Codebin Domain
//!
//! Data contracts and error types for the codebin client SDK.
//!
//! This crate contains:
//! - Wire-format types exchanged with the codebin REST service (users,
//!   snippets, comments, paged collections, code execution)
//! - The error taxonomy and `Result` alias shared by every client
//! - Client configuration structures
//!
//! ## Architecture
//! - No dependencies on other codebin crates
//! - Pure data contracts; no I/O, no HTTP types
//! - The client owns no authoritative state: every value here is a typed
//!   copy of what the server returned

pub mod config;
pub mod errors;
pub mod types;

// Re-export commonly used items
pub use config::ClientConfig;
pub use errors::{ApiError, Result};
pub use types::*;
