//! Bookmarks screen state holder.
//!
//! Maintains a derived view over the live bookmark snapshot: filter by a
//! case-insensitive substring on title or url, then sort. The view is
//! recomputed synchronously on every input change — search edits, sort mode
//! changes, and store mutations all re-derive immediately, never debounced.

use tokio::sync::watch;

use crate::repository::{Repository, RepositoryTrait};
use crate::services::metadata_fetcher::UNTITLED;
use crate::types::bookmark::Bookmark;
use crate::types::status::ScreenStatus;

/// Sort modes for the bookmark list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortType {
    #[default]
    DateDesc,
    DateAsc,
    /// Case-insensitive lexicographic by title.
    TitleAsc,
}

/// UI state for the bookmarks screen.
#[derive(Debug, Clone, Default)]
pub struct BookmarksUiState {
    pub status: ScreenStatus,
    pub bookmarks: Vec<Bookmark>,
    pub search_query: String,
    pub sort_type: SortType,
    pub show_search_bar: bool,
    pub selected_bookmark: Option<Bookmark>,
    pub show_delete_dialog: bool,
    pub show_sort_menu: bool,
}

pub struct BookmarksScreen {
    repository: Repository,
    bookmarks_rx: watch::Receiver<Vec<Bookmark>>,
    state: BookmarksUiState,
}

fn now_millis() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as i64
}

impl BookmarksScreen {
    pub fn new(repository: Repository) -> Self {
        let bookmarks_rx = repository.watch_bookmarks();
        let mut screen = Self {
            repository,
            bookmarks_rx,
            state: BookmarksUiState::default(),
        };
        screen.recompute();
        screen
    }

    pub fn state(&self) -> &BookmarksUiState {
        &self.state
    }

    /// Re-derives the visible list from the latest snapshot, query, and sort
    /// mode. Called from every mutation path.
    fn recompute(&mut self) {
        let all = self.bookmarks_rx.borrow().clone();
        let query = self.state.search_query.trim().to_lowercase();

        let mut filtered: Vec<Bookmark> = if query.is_empty() {
            all
        } else {
            all.into_iter()
                .filter(|b| {
                    b.title.to_lowercase().contains(&query)
                        || b.url.to_lowercase().contains(&query)
                })
                .collect()
        };

        match self.state.sort_type {
            SortType::DateDesc => filtered.sort_by(|a, b| b.date.cmp(&a.date)),
            SortType::DateAsc => filtered.sort_by(|a, b| a.date.cmp(&b.date)),
            SortType::TitleAsc => filtered.sort_by_key(|b| b.title.to_lowercase()),
        }

        self.state.bookmarks = filtered;
        self.state.status = ScreenStatus::Success(String::new());
    }

    /// Re-derives after an external store mutation.
    pub fn refresh(&mut self) {
        self.recompute();
    }

    pub fn update_search_query(&mut self, query: &str) {
        self.state.search_query = query.to_string();
        self.recompute();
    }

    pub fn set_sort_type(&mut self, sort_type: SortType) {
        self.state.sort_type = sort_type;
        self.recompute();
    }

    /// Shows or hides the search bar; opening it starts from a blank query.
    pub fn toggle_search_bar(&mut self) {
        let opening = !self.state.show_search_bar;
        self.state.show_search_bar = opening;
        if opening {
            self.state.search_query.clear();
        }
        self.recompute();
    }

    pub fn show_delete_dialog(&mut self, bookmark: Option<Bookmark>) {
        self.state.show_delete_dialog = true;
        self.state.selected_bookmark = bookmark;
    }

    pub fn dismiss_delete_dialog(&mut self) {
        self.state.show_delete_dialog = false;
        self.state.selected_bookmark = None;
    }

    pub fn toggle_sort_menu(&mut self) {
        self.state.show_sort_menu = !self.state.show_sort_menu;
    }

    pub fn dismiss_sort_menu(&mut self) {
        self.state.show_sort_menu = false;
    }

    /// Saves a bookmark; an empty title defaults to "Untitled".
    pub fn save_bookmark(&mut self, url: &str, title: &str) {
        self.state.status = ScreenStatus::Loading;
        let title = if title.is_empty() { UNTITLED } else { title };
        match self.repository.insert_bookmark(title, url, now_millis()) {
            Ok(_) => {
                self.recompute();
                self.state.status = ScreenStatus::Success("Bookmark saved".to_string());
            }
            Err(e) => {
                self.state.status = ScreenStatus::Error(e.to_string());
            }
        }
    }

    /// Deletes one bookmark; closes an open delete dialog on success.
    pub fn delete_bookmark(&mut self, id: i64) {
        self.state.status = ScreenStatus::Loading;
        match self.repository.delete_bookmark(id) {
            Ok(()) => {
                self.state.show_delete_dialog = false;
                self.state.selected_bookmark = None;
                self.recompute();
                self.state.status = ScreenStatus::Success("Bookmark deleted".to_string());
            }
            Err(e) => {
                self.state.status = ScreenStatus::Error(e.to_string());
            }
        }
    }

    /// Deletes all bookmarks; closes an open delete dialog on success.
    pub fn clear_all(&mut self) {
        self.state.status = ScreenStatus::Loading;
        match self.repository.clear_bookmarks() {
            Ok(()) => {
                self.state.show_delete_dialog = false;
                self.state.selected_bookmark = None;
                self.recompute();
                self.state.status = ScreenStatus::Success("All bookmarks cleared".to_string());
            }
            Err(e) => {
                self.state.status = ScreenStatus::Error(e.to_string());
            }
        }
    }

    /// One-shot existence check, for bookmark toggles rendered elsewhere.
    pub fn is_bookmarked(&self, url: &str) -> bool {
        self.repository.is_bookmarked(url).unwrap_or(false)
    }
}
