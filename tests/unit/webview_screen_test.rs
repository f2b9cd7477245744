//! Unit tests for the webview screen state holder.
//!
//! These tests cover the engine-callback mirrors (progress, title, URL,
//! navigation state), the duplicate-suppressed history and bookmark saves,
//! reader-mode state, and URL-bar input normalization.

use pocketreader::database::Database;
use pocketreader::repository::{Repository, RepositoryTrait};
use pocketreader::screens::webview::{normalize_submit_url, WebviewScreen};
use pocketreader::screens::{
    MSG_ALREADY_BOOKMARKED, MSG_ALREADY_IN_HISTORY, MSG_BOOKMARKED, MSG_SAVED_TO_HISTORY,
};
use pocketreader::types::status::ScreenStatus;

fn setup() -> (Repository, WebviewScreen) {
    let db = Database::open_in_memory().expect("Failed to open in-memory database");
    let repo = Repository::new(db).expect("Failed to create repository");
    let screen = WebviewScreen::new(repo.clone());
    (repo, screen)
}

/// The loading flag should be derived from progress: loading below 100,
/// done at 100.
#[test]
fn test_progress_derives_loading() {
    let (_repo, mut screen) = setup();

    screen.update_progress(30);
    assert_eq!(screen.state().progress, 30);
    assert!(screen.state().is_loading);

    screen.update_progress(100);
    assert!(!screen.state().is_loading);
}

/// Updating the current URL should mirror it into the editable input.
#[test]
fn test_current_url_mirrors_input() {
    let (_repo, mut screen) = setup();

    screen.update_current_url("https://example.com");
    assert_eq!(screen.state().current_url, "https://example.com");
    assert_eq!(screen.state().url_input, "https://example.com");

    // Editing the input does not touch the current URL.
    screen.update_url_input("https://elsewhere.com");
    assert_eq!(screen.state().current_url, "https://example.com");
}

/// First save should persist and return true; the second should be
/// suppressed with the duplicate flag set.
#[test]
fn test_save_to_history_suppresses_duplicates() {
    let (repo, mut screen) = setup();

    assert!(screen.save_to_history("https://example.com", "Example"));
    assert_eq!(
        screen.state().status,
        ScreenStatus::Success(MSG_SAVED_TO_HISTORY.to_string())
    );
    assert!(!screen.state().is_history_duplicate);

    assert!(!screen.save_to_history("https://example.com", "Example"));
    assert_eq!(
        screen.state().status,
        ScreenStatus::Success(MSG_ALREADY_IN_HISTORY.to_string())
    );
    assert!(screen.state().is_history_duplicate);
    assert_eq!(repo.get_history().unwrap().len(), 1);
}

/// Bookmarking should follow the same contract as the history save.
#[test]
fn test_bookmark_click_suppresses_duplicates() {
    let (repo, mut screen) = setup();

    assert!(screen.bookmark_click("https://example.com", "Example"));
    assert_eq!(
        screen.state().status,
        ScreenStatus::Success(MSG_BOOKMARKED.to_string())
    );

    assert!(!screen.bookmark_click("https://example.com", "Example"));
    assert_eq!(
        screen.state().status,
        ScreenStatus::Success(MSG_ALREADY_BOOKMARKED.to_string())
    );
    assert!(screen.state().is_bookmark_duplicate);
    assert_eq!(repo.get_all_bookmarks().unwrap().len(), 1);
}

/// An empty title should be persisted as "Untitled".
#[test]
fn test_empty_title_defaults_to_untitled() {
    let (repo, mut screen) = setup();

    screen.save_to_history("https://a.com", "");
    screen.bookmark_click("https://b.com", "");

    assert_eq!(repo.get_history().unwrap()[0].title, "Untitled");
    assert_eq!(repo.get_all_bookmarks().unwrap()[0].title, "Untitled");
}

/// Dismissing reader mode should drop the extracted content.
#[test]
fn test_reader_mode_lifecycle() {
    let (_repo, mut screen) = setup();

    screen.show_reader_mode();
    screen.update_reader_content("extracted article text");
    assert!(screen.state().show_reader_mode);
    assert_eq!(screen.state().reader_content, "extracted article text");

    screen.dismiss_reader_mode();
    assert!(!screen.state().show_reader_mode);
    assert!(screen.state().reader_content.is_empty());
}

/// Navigation state and the bottom bar should mirror the engine callbacks.
#[test]
fn test_navigation_and_chrome_state() {
    let (_repo, mut screen) = setup();

    screen.update_navigation_state(true, false);
    assert!(screen.state().can_go_back);
    assert!(!screen.state().can_go_forward);

    assert!(screen.state().is_bottom_bar_visible);
    screen.update_bottom_bar_visibility(false);
    assert!(!screen.state().is_bottom_bar_visible);

    screen.show_download_dialog();
    assert!(screen.state().show_download_dialog);
    screen.dismiss_download_dialog();
    assert!(!screen.state().show_download_dialog);
}

/// The duplicate flags should be clearable once the UI has shown them.
#[test]
fn test_duplicate_flags_clearable() {
    let (_repo, mut screen) = setup();

    screen.save_to_history("https://a.com", "A");
    screen.save_to_history("https://a.com", "A");
    assert!(screen.state().is_history_duplicate);
    screen.clear_history_duplicate();
    assert!(!screen.state().is_history_duplicate);

    screen.bookmark_click("https://b.com", "B");
    screen.bookmark_click("https://b.com", "B");
    assert!(screen.state().is_bookmark_duplicate);
    screen.clear_bookmark_duplicate();
    assert!(!screen.state().is_bookmark_duplicate);
}

/// URL-bar input: scheme pass-through, https prefix for host-like input,
/// search query otherwise, nothing for blank input.
#[test]
fn test_normalize_submit_url() {
    assert_eq!(
        normalize_submit_url("  https://example.com  "),
        Some("https://example.com".to_string())
    );
    assert_eq!(
        normalize_submit_url("http://plain.com"),
        Some("http://plain.com".to_string())
    );
    assert_eq!(
        normalize_submit_url("rust-lang.org"),
        Some("https://rust-lang.org".to_string())
    );
    assert_eq!(
        normalize_submit_url("cat pictures"),
        Some("https://www.google.com/search?q=cat+pictures".to_string())
    );
    assert_eq!(normalize_submit_url("   "), None);
}
