//! Comment resource contracts

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A comment as returned by the server.
///
/// `parent_comment_id` models one level of threaded reply. The contract
/// allows a reply to reference another reply, but nothing in the client
/// builds recursive threads out of that.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub content: String,
    pub snippet_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_comment_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<NaiveDateTime>,
}

/// Create payload for `POST /comments`; the server stamps identity and time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentDraft {
    pub content: String,
    pub snippet_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_comment_id: Option<String>,
}

/// Reply payload for `POST /comments/{id}/reply`.
///
/// The parent comment comes from the path, so the body carries no
/// `parentCommentId`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplyDraft {
    pub content: String,
    pub snippet_id: String,
}
