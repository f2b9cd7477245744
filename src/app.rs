//! App Core for PocketReader.
//!
//! Central struct holding the repository and the three screen state holders,
//! plus launch-intent routing.

use crate::database::Database;
use crate::engine::adapter::EngineAdapter;
use crate::repository::Repository;
use crate::screens::bookmarks::BookmarksScreen;
use crate::screens::home::HomeScreen;
use crate::services::metadata_fetcher::WebFetcher;
use crate::types::errors::AppError;

/// A launch intent handed to the app by the platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Text shared into the app from another application.
    Share(String),
    /// A URL the platform asked the app to open.
    View(String),
}

/// Where a launch intent lands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    /// Open the browser screen at the given URL.
    Browser { url: String },
}

/// Central application struct wiring the repository into the screens.
///
/// All screens share one [`Repository`] handle; the home screen additionally
/// owns the network metadata fetcher.
pub struct App {
    pub repository: Repository,
    pub home: HomeScreen<WebFetcher>,
    pub bookmarks: BookmarksScreen,
    pub browser: EngineAdapter,
}

impl App {
    /// Creates an App over a database file, running migrations first.
    pub fn new(db_path: &str) -> Result<Self, AppError> {
        Self::from_database(Database::open(db_path)?)
    }

    /// Creates an App over an in-memory database.
    pub fn open_in_memory() -> Result<Self, AppError> {
        Self::from_database(Database::open_in_memory()?)
    }

    fn from_database(db: Database) -> Result<Self, AppError> {
        let repository = Repository::new(db)?;
        let fetcher = WebFetcher::new()?;
        let home = HomeScreen::new(repository.clone(), fetcher);
        let bookmarks = BookmarksScreen::new(repository.clone());
        let browser = EngineAdapter::new(repository.clone());
        Ok(Self {
            repository,
            home,
            bookmarks,
            browser,
        })
    }

    /// Routes a launch intent.
    ///
    /// Shared text is scanned for the first http(s) token; a view intent
    /// carries the URL directly. Intents with no usable URL land on home.
    pub fn route_intent(intent: &Intent) -> Route {
        match intent {
            Intent::Share(text) => match extract_shared_url(text) {
                Some(url) => Route::Browser { url },
                None => Route::Home,
            },
            Intent::View(url) => {
                let url = url.trim();
                if url.is_empty() {
                    Route::Home
                } else {
                    Route::Browser {
                        url: url.to_string(),
                    }
                }
            }
        }
    }
}

/// Finds the first http(s) token in shared text.
fn extract_shared_url(text: &str) -> Option<String> {
    text.split_whitespace()
        .find(|token| token.starts_with("http://") || token.starts_with("https://"))
        .map(|token| token.to_string())
}
