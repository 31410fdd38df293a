//! User account types

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A user account as returned by the server.
///
/// Immutable from the client's perspective within a session; refreshed only
/// by re-fetching `/auth/me`. Timestamps are server-local `LocalDateTime`
/// values without an offset, hence `NaiveDateTime`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub email: String,
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<NaiveDateTime>,
}
