use serde::{Deserialize, Serialize};

/// Represents a saved bookmark.
///
/// `date` is a millisecond UNIX timestamp; `id` is assigned by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bookmark {
    pub id: i64,
    pub title: String,
    pub url: String,
    pub date: i64,
}
