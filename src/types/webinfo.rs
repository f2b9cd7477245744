use serde::{Deserialize, Serialize};

/// Best-effort scrape result for a single page fetch.
///
/// Fully recomputed on each fetch, never cached. Every field degrades to a
/// default when extraction fails; `images` and `links` hold absolute URLs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WebInfo {
    pub title: String,
    pub domain: String,
    pub text: String,
    pub images: Vec<String>,
    pub links: Vec<String>,
}
