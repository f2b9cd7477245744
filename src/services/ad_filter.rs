//! Ad-host filtering for PocketReader.
//!
//! Outgoing resource requests whose host contains any of a fixed list of
//! ad-network domain substrings are answered with an empty plain-text body
//! instead of reaching the network.

use url::Url;

/// Known ad-network host substrings, matched case-insensitively against the
/// request host.
pub const AD_HOSTS: &[&str] = &[
    "doubleclick.net",
    "googlesyndication.com",
    "adservice.google.com",
    "ads.twitter.com",
    "ads.yahoo.com",
    "adroll.com",
    "adsafeprotected.com",
    "adform.net",
    "googletagmanager.com",
    "googletagservices.com",
];

/// Replacement response for a blocked request: an empty `text/plain` body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockedResponse {
    pub content_type: &'static str,
    pub charset: &'static str,
    pub body: Vec<u8>,
}

impl BlockedResponse {
    fn empty() -> Self {
        Self {
            content_type: "text/plain",
            charset: "utf-8",
            body: Vec::new(),
        }
    }
}

/// Request filter applied to every outgoing engine resource request.
pub struct AdFilter {
    blocking_enabled: bool,
}

impl AdFilter {
    pub fn new() -> Self {
        Self {
            blocking_enabled: true,
        }
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.blocking_enabled = enabled;
    }

    /// Returns whether the given host matches an ad-network substring.
    pub fn is_ad_host(&self, host: &str) -> bool {
        let host_lower = host.to_lowercase();
        AD_HOSTS.iter().any(|ad| host_lower.contains(ad))
    }

    /// Decides the fate of an outgoing resource request.
    ///
    /// Returns the replacement response when the request host is an ad host;
    /// `None` lets the request through. URLs without a parseable host are
    /// never blocked.
    pub fn intercept_request(&self, request_url: &str) -> Option<BlockedResponse> {
        if !self.blocking_enabled {
            return None;
        }
        let url = Url::parse(request_url).ok()?;
        let host = url.host_str()?;
        if self.is_ad_host(host) {
            Some(BlockedResponse::empty())
        } else {
            None
        }
    }
}

impl Default for AdFilter {
    fn default() -> Self {
        Self::new()
    }
}
