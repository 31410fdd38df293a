//! Comment client: flat plus one level of threaded replies.

use codebin_domain::{Comment, CommentDraft, ReplyDraft, Result};

use crate::transport::{ApiTransport, Auth};

/// Client for the `/comments` resource family.
#[derive(Clone)]
pub struct CommentClient {
    transport: ApiTransport,
}

impl CommentClient {
    pub fn new(transport: ApiTransport) -> Self {
        Self { transport }
    }

    /// Create a comment; the server stamps identity and time.
    pub async fn create(&self, draft: &CommentDraft) -> Result<Comment> {
        self.transport.post("/comments", draft, Auth::Bearer).await
    }

    /// All comments on a snippet. Ordering is a server decision the client
    /// does not revisit.
    pub async fn for_snippet(&self, snippet_id: &str) -> Result<Vec<Comment>> {
        self.transport.get(&format!("/comments/snippet/{snippet_id}"), Auth::None).await
    }

    /// Reply to a comment; the parent comes from the path.
    pub async fn reply(&self, comment_id: &str, draft: &ReplyDraft) -> Result<Comment> {
        self.transport.post(&format!("/comments/{comment_id}/reply"), draft, Auth::Bearer).await
    }

    /// Replies to a comment.
    pub async fn replies(&self, comment_id: &str) -> Result<Vec<Comment>> {
        self.transport.get(&format!("/comments/{comment_id}/replies"), Auth::None).await
    }

    /// Delete a comment; rides the transport's empty-body path.
    pub async fn delete(&self, comment_id: &str) -> Result<()> {
        self.transport.delete(&format!("/comments/{comment_id}"), Auth::Bearer).await
    }
}
