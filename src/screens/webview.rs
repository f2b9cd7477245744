//! Webview screen state holder.
//!
//! Mirrors browser engine callbacks into observable UI state: progress
//! (deriving the loading flag), current URL (mirrored into the editable
//! input), page title, and back/forward availability. Also owns the
//! duplicate-suppressed save operations for history and bookmarks.

use crate::repository::{Repository, RepositoryTrait};
use crate::services::metadata_fetcher::UNTITLED;
use crate::types::status::ScreenStatus;

use super::{MSG_ALREADY_BOOKMARKED, MSG_ALREADY_IN_HISTORY, MSG_BOOKMARKED, MSG_SAVED_TO_HISTORY};

/// UI state for the webview screen.
#[derive(Debug, Clone)]
pub struct WebViewUiState {
    pub status: ScreenStatus,
    pub progress: i32,
    pub can_go_back: bool,
    pub can_go_forward: bool,
    pub current_url: String,
    pub page_title: String,
    pub is_desktop_mode: bool,
    pub show_download_dialog: bool,
    pub is_loading: bool,
    pub url_input: String,
    pub show_url_input: bool,
    pub is_bottom_bar_visible: bool,
    pub is_history_duplicate: bool,
    pub is_bookmark_duplicate: bool,
    pub show_reader_mode: bool,
    pub reader_content: String,
}

impl Default for WebViewUiState {
    fn default() -> Self {
        Self {
            status: ScreenStatus::Idle,
            progress: 0,
            can_go_back: false,
            can_go_forward: false,
            current_url: String::new(),
            page_title: String::new(),
            is_desktop_mode: false,
            show_download_dialog: false,
            is_loading: false,
            url_input: String::new(),
            show_url_input: false,
            is_bottom_bar_visible: true,
            is_history_duplicate: false,
            is_bookmark_duplicate: false,
            show_reader_mode: false,
            reader_content: String::new(),
        }
    }
}

pub struct WebviewScreen {
    repository: Repository,
    state: WebViewUiState,
}

fn now_millis() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as i64
}

impl WebviewScreen {
    pub fn new(repository: Repository) -> Self {
        Self {
            repository,
            state: WebViewUiState::default(),
        }
    }

    pub fn state(&self) -> &WebViewUiState {
        &self.state
    }

    /// Updates progress and the derived loading flag together.
    pub fn update_progress(&mut self, progress: i32) {
        self.state.progress = progress;
        self.state.is_loading = progress < 100;
    }

    pub fn update_loading(&mut self, is_loading: bool) {
        self.state.is_loading = is_loading;
    }

    pub fn update_page_title(&mut self, title: &str) {
        self.state.page_title = title.to_string();
    }

    /// Updates the current URL and mirrors it into the editable input.
    pub fn update_current_url(&mut self, url: &str) {
        self.state.current_url = url.to_string();
        self.state.url_input = url.to_string();
    }

    pub fn update_navigation_state(&mut self, can_go_back: bool, can_go_forward: bool) {
        self.state.can_go_back = can_go_back;
        self.state.can_go_forward = can_go_forward;
    }

    pub fn update_url_input(&mut self, url: &str) {
        self.state.url_input = url.to_string();
    }

    pub fn toggle_url_input(&mut self) {
        self.state.show_url_input = !self.state.show_url_input;
    }

    pub fn toggle_desktop_mode(&mut self) {
        self.state.is_desktop_mode = !self.state.is_desktop_mode;
    }

    pub fn show_download_dialog(&mut self) {
        self.state.show_download_dialog = true;
    }

    pub fn dismiss_download_dialog(&mut self) {
        self.state.show_download_dialog = false;
    }

    pub fn update_bottom_bar_visibility(&mut self, is_visible: bool) {
        self.state.is_bottom_bar_visible = is_visible;
    }

    pub fn clear_history_duplicate(&mut self) {
        self.state.is_history_duplicate = false;
    }

    pub fn clear_bookmark_duplicate(&mut self) {
        self.state.is_bookmark_duplicate = false;
    }

    pub fn show_reader_mode(&mut self) {
        self.state.show_reader_mode = true;
    }

    /// Hides reader mode and drops the extracted content.
    pub fn dismiss_reader_mode(&mut self) {
        self.state.show_reader_mode = false;
        self.state.reader_content.clear();
    }

    pub fn update_reader_content(&mut self, content: &str) {
        self.state.reader_content = content.to_string();
    }

    /// Saves a history entry for the page unless one exists for the URL.
    ///
    /// Returns true if a new entry was persisted; false for duplicates (also
    /// setting the duplicate flag) and for persistence failures (surfaced as
    /// an Error status).
    pub fn save_to_history(&mut self, url: &str, title: &str) -> bool {
        match self.repository.is_in_history(url) {
            Ok(true) => {
                self.state.status = ScreenStatus::Success(MSG_ALREADY_IN_HISTORY.to_string());
                self.state.is_history_duplicate = true;
                false
            }
            Ok(false) => {
                let title = if title.is_empty() { UNTITLED } else { title };
                match self.repository.save_to_history(title, url, now_millis()) {
                    Ok(_) => {
                        self.state.status = ScreenStatus::Success(MSG_SAVED_TO_HISTORY.to_string());
                        self.state.is_history_duplicate = false;
                        true
                    }
                    Err(e) => {
                        self.state.status = ScreenStatus::Error(e.to_string());
                        self.state.is_history_duplicate = false;
                        false
                    }
                }
            }
            Err(e) => {
                self.state.status = ScreenStatus::Error(e.to_string());
                self.state.is_history_duplicate = false;
                false
            }
        }
    }

    /// Bookmarks the page unless a bookmark exists for the URL.
    ///
    /// Same contract as [`save_to_history`](Self::save_to_history), with the
    /// bookmark existence check and messages.
    pub fn bookmark_click(&mut self, url: &str, title: &str) -> bool {
        match self.repository.is_bookmarked(url) {
            Ok(true) => {
                self.state.status = ScreenStatus::Success(MSG_ALREADY_BOOKMARKED.to_string());
                self.state.is_bookmark_duplicate = true;
                false
            }
            Ok(false) => {
                let title = if title.is_empty() { UNTITLED } else { title };
                match self.repository.insert_bookmark(title, url, now_millis()) {
                    Ok(_) => {
                        self.state.status = ScreenStatus::Success(MSG_BOOKMARKED.to_string());
                        self.state.is_bookmark_duplicate = false;
                        true
                    }
                    Err(e) => {
                        self.state.status = ScreenStatus::Error(e.to_string());
                        self.state.is_bookmark_duplicate = false;
                        false
                    }
                }
            }
            Err(e) => {
                self.state.status = ScreenStatus::Error(e.to_string());
                self.state.is_bookmark_duplicate = false;
                false
            }
        }
    }
}

/// Normalizes URL-bar input for navigation.
///
/// Empty input yields nothing; input without a scheme gets `https://` when it
/// looks like a hostname (contains a dot), otherwise it becomes a search
/// query URL.
pub fn normalize_submit_url(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        return Some(trimmed.to_string());
    }
    if trimmed.contains('.') {
        Some(format!("https://{}", trimmed))
    } else {
        let encoded: String = url::form_urlencoded::byte_serialize(trimmed.as_bytes()).collect();
        Some(format!("https://www.google.com/search?q={}", encoded))
    }
}
