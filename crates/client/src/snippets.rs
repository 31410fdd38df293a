//! Snippet CRUD and query client.

use codebin_domain::{Page, PageQuery, Result, Snippet, SnippetDraft, SnippetPatch};

use crate::transport::{ApiTransport, Auth};

/// Client for the `/snippets` resource family.
///
/// Every method is a typed pass-through over the transport; nothing is
/// cached or re-sorted client-side. Mutating calls return the server's
/// representation, which callers adopt wholesale.
#[derive(Clone)]
pub struct SnippetClient {
    transport: ApiTransport,
}

impl SnippetClient {
    pub fn new(transport: ApiTransport) -> Self {
        Self { transport }
    }

    /// List public snippets, paged. Default query is newest-first.
    pub async fn public_snippets(&self, query: &PageQuery) -> Result<Page<Snippet>> {
        let path = format!(
            "/snippets/public?page={}&size={}&sortBy={}&sortDir={}",
            query.page,
            query.size,
            query.sort_by,
            query.sort_dir.as_str()
        );
        self.transport.get(&path, Auth::None).await
    }

    /// Full-text search over public snippets. Matching against
    /// title/language/author is a server-side concern; the query string is
    /// URL-escaped and forwarded verbatim.
    pub async fn search(&self, query: &str, page: u32, size: u32) -> Result<Page<Snippet>> {
        let path =
            format!("/snippets/search?q={}&page={page}&size={size}", urlencoding::encode(query));
        self.transport.get(&path, Auth::None).await
    }

    /// Fetch a single snippet. An absent ID surfaces as
    /// `ApiError::Http { status: 404, .. }`.
    pub async fn get(&self, id: &str) -> Result<Snippet> {
        self.transport.get(&format!("/snippets/{id}"), Auth::None).await
    }

    /// The authenticated user's own snippets.
    pub async fn my_snippets(&self) -> Result<Vec<Snippet>> {
        self.transport.get("/snippets/my", Auth::Bearer).await
    }

    /// Snippets the authenticated user has starred.
    pub async fn starred_snippets(&self) -> Result<Vec<Snippet>> {
        self.transport.get("/snippets/starred", Auth::Bearer).await
    }

    /// Create a snippet; the server assigns `id`, `userId` and timestamps.
    pub async fn create(&self, draft: &SnippetDraft) -> Result<Snippet> {
        self.transport.post("/snippets", draft, Auth::Bearer).await
    }

    /// Update a snippet with partial fields; unset fields are omitted from
    /// the body. Merge-vs-replace semantics belong to the server.
    pub async fn update(&self, id: &str, patch: &SnippetPatch) -> Result<Snippet> {
        self.transport.put(&format!("/snippets/{id}"), patch, Auth::Bearer).await
    }

    /// Delete a snippet; rides the transport's empty-body path.
    pub async fn delete(&self, id: &str) -> Result<()> {
        self.transport.delete(&format!("/snippets/{id}"), Auth::Bearer).await
    }

    /// Star or unstar a snippet. Returns the updated snippet so callers can
    /// re-render star state from the authoritative `stars` list instead of
    /// flipping local state optimistically.
    pub async fn toggle_star(&self, id: &str) -> Result<Snippet> {
        self.transport.post_empty(&format!("/snippets/{id}/star"), Auth::Bearer).await
    }
}
