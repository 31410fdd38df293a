//! Wire-format types exchanged with the codebin REST service
//!
//! Field names follow the server's JSON conventions: camelCase for the
//! snippet/comment/auth resources (Spring + Mongo backend), snake_case for
//! the code-execution sandbox payloads.

pub mod auth;
pub mod comment;
pub mod execution;
pub mod page;
pub mod snippet;
pub mod user;

pub use auth::{AuthResponse, LoginRequest, RegisterRequest};
pub use comment::{Comment, CommentDraft, ReplyDraft};
pub use execution::{ExecutionFile, ExecutionRequest, ExecutionResult, ProcessOutput};
pub use page::{Page, PageQuery, SortDirection, SortInfo};
pub use snippet::{Snippet, SnippetDraft, SnippetPatch};
pub use user::User;
