//! Special-link rules: external scheme detection and the Medium-to-Freedium
//! URL rewrite.

/// Mirror base prefixed to a Medium article URL on an accepted rewrite.
pub const FREEDIUM_BASE_URL: &str = "https://freedium-mirror.cfd/";
pub const FREEDIUM_TAG: &str = "freedium";
pub const MEDIUM_TAG: &str = "medium";

/// Schemes delegated to the platform's generic URL-open mechanism rather
/// than loaded in-page.
pub const EXTERNAL_SCHEMES: &[&str] = &["tel:", "mailto:", "sms:", "intent:"];

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// A Medium article URL that is not already going through the mirror.
pub fn is_medium_url(url: &str) -> bool {
    contains_ignore_case(url, MEDIUM_TAG) && !contains_ignore_case(url, FREEDIUM_TAG)
}

/// Rewrites a Medium URL to its mirror: base prefix + original url.
pub fn to_freedium_url(medium_url: &str) -> String {
    format!("{}{}", FREEDIUM_BASE_URL, medium_url)
}

/// Link that must be handed to the platform instead of the engine.
pub fn is_external_scheme(url: &str) -> bool {
    EXTERNAL_SCHEMES.iter().any(|scheme| url.starts_with(scheme))
}
