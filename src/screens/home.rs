//! Home screen state holder.
//!
//! Owns the URL entry field, the history mirror, and the "Go" action:
//! validate synchronously, then fetch metadata and record the submission in
//! history asynchronously. The caller navigates as soon as validation
//! passes — it does not wait for the fetch or the save.

use tokio::sync::watch;

use crate::repository::{Repository, RepositoryTrait};
use crate::services::metadata_fetcher::{extract_domain, MetadataFetcherTrait, UNTITLED};
use crate::types::history::HistoryEntry;
use crate::types::status::ScreenStatus;

use super::{MSG_ALREADY_IN_HISTORY, MSG_SAVED_TO_HISTORY};

/// UI state for the home screen.
#[derive(Debug, Clone, Default)]
pub struct HomeUiState {
    pub status: ScreenStatus,
    pub search_url: String,
    pub history: Vec<HistoryEntry>,
    pub is_history_view_visible: bool,
}

pub struct HomeScreen<F: MetadataFetcherTrait> {
    repository: Repository,
    fetcher: F,
    history_rx: watch::Receiver<Vec<HistoryEntry>>,
    state: HomeUiState,
}

fn now_millis() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as i64
}

impl<F: MetadataFetcherTrait> HomeScreen<F> {
    pub fn new(repository: Repository, fetcher: F) -> Self {
        let history_rx = repository.watch_history();
        let history = history_rx.borrow().clone();
        Self {
            repository,
            fetcher,
            history_rx,
            state: HomeUiState {
                history,
                ..Default::default()
            },
        }
    }

    pub fn state(&self) -> &HomeUiState {
        &self.state
    }

    pub fn on_url_change(&mut self, url: &str) {
        self.state.search_url = url.to_string();
    }

    pub fn on_reset_url(&mut self) {
        self.state.search_url.clear();
    }

    pub fn toggle_history_view(&mut self) {
        self.state.is_history_view_visible = !self.state.is_history_view_visible;
    }

    /// Copies the latest history snapshot from the repository into state.
    pub fn refresh_history(&mut self) {
        self.state.history = self.history_rx.borrow().clone();
    }

    /// The synchronous half of the "Go" action: URL validation.
    ///
    /// Returns false and sets an Error status when the URL is empty or not
    /// http(s) — the caller must not navigate and nothing is persisted.
    /// Returns true otherwise, permitting navigation; the caller then runs
    /// [`record_submission`](Self::record_submission) without blocking on it.
    pub fn submit_url(&mut self) -> bool {
        let url = self.state.search_url.trim();

        if url.is_empty() {
            self.state.status = ScreenStatus::Error("Please enter a URL".to_string());
            return false;
        }

        if !url.starts_with("http://") && !url.starts_with("https://") {
            self.state.status = ScreenStatus::Error("Please enter a valid URL".to_string());
            return false;
        }

        true
    }

    /// The asynchronous tail of the "Go" action: fetch page metadata, then
    /// save a history entry unless one already exists for the URL.
    ///
    /// Only call after [`submit_url`](Self::submit_url) returned true.
    pub async fn record_submission(&mut self) {
        let url = self.state.search_url.trim().to_string();
        self.state.status = ScreenStatus::Loading;

        let web_info = self.fetcher.fetch_web_info(&url).await;

        // The fetcher already degrades to host/"Untitled", but titles coming
        // from a stub or a blank page still get the same fallback chain.
        let title = if !web_info.title.is_empty() {
            web_info.title
        } else if !web_info.domain.is_empty() {
            web_info.domain
        } else {
            let domain = extract_domain(&url);
            if domain.is_empty() {
                UNTITLED.to_string()
            } else {
                domain
            }
        };

        self.state.status = match self.repository.is_in_history(&url) {
            Ok(true) => ScreenStatus::Success(MSG_ALREADY_IN_HISTORY.to_string()),
            Ok(false) => match self.repository.save_to_history(&title, &url, now_millis()) {
                Ok(_) => ScreenStatus::Success(MSG_SAVED_TO_HISTORY.to_string()),
                Err(e) => ScreenStatus::Error(format!("Failed to save: {}", e)),
            },
            Err(e) => ScreenStatus::Error(format!("Failed to save: {}", e)),
        };

        self.refresh_history();
    }
}
