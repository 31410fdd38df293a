//! Snippet resource contracts

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A code snippet as returned by the server.
///
/// `id` is absent only in not-yet-created drafts; `language` is a free-form
/// identifier matched against the static language table for display.
/// `stars` holds the IDs of users who starred the snippet — callers re-render
/// star state from this server-returned list, never by flipping local state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snippet {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    pub code: String,
    pub language: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    pub is_public: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stars: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<NaiveDateTime>,
}

/// Create payload for `POST /snippets`.
///
/// The server assigns `id`, `userId` and the timestamps.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnippetDraft {
    pub title: String,
    pub code: String,
    pub language: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    pub is_public: bool,
}

/// Partial update payload for `PUT /snippets/{id}`.
///
/// `None` fields are left out of the request body entirely; whether the
/// server merges or replaces the remainder is a server contract.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnippetPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_public: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_server_payload_with_camel_case_fields() {
        let json = r#"{
            "id": "665f1c2e9b1e8a0001a3d010",
            "title": "Quicksort",
            "code": "fn sort() {}",
            "language": "rust",
            "isPublic": true,
            "userId": "u1",
            "stars": ["u2", "u3"],
            "createdAt": "2024-06-02T10:15:30"
        }"#;
        let snippet: Snippet = serde_json::from_str(json).unwrap();
        assert_eq!(snippet.title, "Quicksort");
        assert!(snippet.is_public);
        assert_eq!(snippet.stars.as_deref(), Some(["u2".to_string(), "u3".to_string()].as_slice()));
    }

    #[test]
    fn draft_serializes_without_server_stamped_fields() {
        let draft = SnippetDraft {
            title: "Hello".to_string(),
            code: "print('hi')".to_string(),
            language: "python".to_string(),
            description: None,
            tags: Some(vec!["demo".to_string()]),
            is_public: false,
        };
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["isPublic"], false);
        assert!(json.get("id").is_none());
        assert!(json.get("userId").is_none());
        assert!(json.get("description").is_none());
    }

    #[test]
    fn patch_skips_unset_fields() {
        let patch = SnippetPatch { title: Some("Renamed".to_string()), ..SnippetPatch::default() };
        let json = serde_json::to_value(&patch).unwrap();
        assert_eq!(json.as_object().unwrap().len(), 1);
        assert_eq!(json["title"], "Renamed");
    }
}
