//! Offset/size pagination contracts

use serde::{Deserialize, Serialize};

/// Sort metadata echoed back inside a page envelope.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortInfo {
    #[serde(default)]
    pub sorted: bool,
    #[serde(default)]
    pub ascending: bool,
}

/// A standard offset/size page envelope.
///
/// Extra envelope fields the server adds (`pageable`, …) are ignored;
/// `last == true` terminates client-side "load more" pagination.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub total_elements: u64,
    pub total_pages: u32,
    /// Zero-based index of this page
    pub number: u32,
    pub size: u32,
    pub first: bool,
    pub last: bool,
    pub number_of_elements: u32,
    #[serde(default)]
    pub sort: SortInfo,
}

impl<T> Page<T> {
    /// Whether another page can be fetched after this one.
    pub fn has_more(&self) -> bool {
        !self.last
    }
}

/// Sort direction for paged listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    /// Wire value for the `sortDir` query parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// Query parameters for paged snippet listings.
///
/// Defaults mirror the server's: first page of 20, newest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageQuery {
    pub page: u32,
    pub size: u32,
    pub sort_by: String,
    pub sort_dir: SortDirection,
}

impl Default for PageQuery {
    fn default() -> Self {
        Self { page: 0, size: 20, sort_by: "createdAt".to_string(), sort_dir: SortDirection::Desc }
    }
}

impl PageQuery {
    /// Query for a specific page, keeping the default size and sort.
    pub fn page(page: u32) -> Self {
        Self { page, ..Self::default() }
    }
}
