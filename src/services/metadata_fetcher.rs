//! Web metadata fetcher for PocketReader.
//!
//! Given a URL, performs a single HTTP round trip and extracts a best-effort
//! title, domain, text, image list, and link list. The contract is that
//! fetching never fails: timeouts, unknown hosts, HTTP error statuses, and
//! parse failures all degrade to the URL's host component, or the literal
//! "Untitled" when no host can be parsed. No retry, no caching.

use std::time::Duration;

use reqwest::Client;
use scraper::{Html, Selector};
use url::Url;

use crate::types::errors::FetcherError;
use crate::types::webinfo::WebInfo;

/// Desktop-style user agent sent with every fetch. Some publishers serve
/// stripped-down markup (or none at all) to unknown agents.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/119.0.0.0 Safari/537.36";

const READ_TIMEOUT: Duration = Duration::from_secs(10);
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Fallback title when no host can be parsed from the URL.
pub const UNTITLED: &str = "Untitled";

/// Trait defining the metadata fetch seam, so state holders can be tested
/// with a stub instead of the network.
pub trait MetadataFetcherTrait {
    /// Fetches and scrapes the page at `url`. Infallible by contract.
    fn fetch_web_info(&self, url: &str) -> impl std::future::Future<Output = WebInfo> + Send;
}

/// Extracts the host component of a URL, or an empty string.
pub fn extract_domain(url: &str) -> String {
    Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_string))
        .unwrap_or_default()
}

fn fallback_title(domain: &str) -> String {
    if domain.is_empty() {
        UNTITLED.to_string()
    } else {
        domain.to_string()
    }
}

/// Metadata fetcher backed by a `reqwest` client.
pub struct WebFetcher {
    client: Client,
}

impl WebFetcher {
    /// Builds the HTTP client: fixed desktop user agent, short timeouts,
    /// redirects followed (reqwest default, 10 hops).
    pub fn new() -> Result<Self, FetcherError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(READ_TIMEOUT)
            .connect_timeout(CONNECT_TIMEOUT)
            .build()
            .map_err(|e| FetcherError::ClientBuild(e.to_string()))?;
        Ok(Self { client })
    }
}

impl MetadataFetcherTrait for WebFetcher {
    async fn fetch_web_info(&self, url: &str) -> WebInfo {
        let domain = extract_domain(url);

        // A single attempt; any failure mode (timeout, DNS, non-2xx status,
        // body read error) collapses into the same degraded result.
        let fetched = match self.client.get(url).send().await {
            Ok(resp) if resp.status().is_success() => {
                let base = resp.url().clone();
                resp.text().await.ok().map(|body| (body, base))
            }
            _ => None,
        };

        match fetched {
            Some((body, base)) => {
                let mut info = parse_web_info(&body, &base);
                info.domain = domain.clone();
                if info.title.is_empty() {
                    info.title = fallback_title(&domain);
                }
                info
            }
            None => WebInfo {
                title: fallback_title(&domain),
                domain,
                ..Default::default()
            },
        }
    }
}

/// Scrapes title, text, images, and links out of an HTML document.
///
/// Each extraction is independently fail-safe: a selector that fails to
/// parse or match leaves only its own field at the default. Relative image
/// and link URLs are resolved against `base` (the final response URL, so
/// redirects are accounted for).
pub fn parse_web_info(html: &str, base: &Url) -> WebInfo {
    let document = Html::parse_document(html);

    let title = extract_title(&document);
    let text = extract_text(&document);
    let images = extract_absolute_urls(&document, base, "img[src]", "src");
    let links = extract_absolute_urls(&document, base, "a[href]", "href");

    WebInfo {
        title,
        domain: String::new(),
        text,
        images,
        links,
    }
}

/// Title extraction with an ordered fallback chain:
/// og:title meta → twitter:title meta → `<title>` → first `<h1>` → empty.
fn extract_title(document: &Html) -> String {
    if let Some(title) = meta_content(document, "meta[property=\"og:title\"]") {
        return title;
    }
    if let Some(title) = meta_content(document, "meta[name=\"twitter:title\"]") {
        return title;
    }
    if let Some(title) = element_text(document, "title") {
        return title;
    }
    if let Some(title) = element_text(document, "h1") {
        return title;
    }
    String::new()
}

fn meta_content(document: &Html, selector: &str) -> Option<String> {
    let sel = Selector::parse(selector).ok()?;
    document
        .select(&sel)
        .next()
        .and_then(|el| el.value().attr("content"))
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn element_text(document: &Html, selector: &str) -> Option<String> {
    let sel = Selector::parse(selector).ok()?;
    document
        .select(&sel)
        .next()
        .map(|el| normalize_whitespace(&el.text().collect::<String>()))
        .filter(|s| !s.is_empty())
}

/// Plain text of the document body with whitespace collapsed.
fn extract_text(document: &Html) -> String {
    let Ok(sel) = Selector::parse("body") else {
        return String::new();
    };
    document
        .select(&sel)
        .next()
        .map(|el| normalize_whitespace(&el.text().collect::<String>()))
        .unwrap_or_default()
}

/// Collects an attribute from every matching element, resolved to an
/// absolute URL. Unresolvable values are skipped rather than failing the
/// whole extraction.
fn extract_absolute_urls(document: &Html, base: &Url, selector: &str, attr: &str) -> Vec<String> {
    let Ok(sel) = Selector::parse(selector) else {
        return Vec::new();
    };
    document
        .select(&sel)
        .filter_map(|el| el.value().attr(attr))
        .filter_map(|raw| base.join(raw).ok())
        .map(|u| u.to_string())
        .collect()
}

fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
