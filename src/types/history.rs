use serde::{Deserialize, Serialize};

/// Represents a single history entry for a visited page.
///
/// Same shape as a bookmark; created automatically when a page finishes
/// loading or when a URL is submitted from the home screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: i64,
    pub title: String,
    pub url: String,
    pub date: i64,
}
