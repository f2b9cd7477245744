//! Unit tests for the engine adapter.
//!
//! These tests drive the adapter with synthetic engine events and verify the
//! commands it emits: ad-host interception, special-scheme delegation, the
//! Medium rewrite prompt lifecycle, the desktop toggle sequence, and click
//! debouncing.

use pocketreader::database::Database;
use pocketreader::engine::adapter::{
    EngineAdapter, EngineCommand, EngineEvent, NavigationDecision, DESKTOP_USER_AGENT,
    MOBILE_USER_AGENT,
};
use pocketreader::repository::{Repository, RepositoryTrait};

fn setup() -> (Repository, EngineAdapter) {
    let db = Database::open_in_memory().expect("Failed to open in-memory database");
    let repo = Repository::new(db).expect("Failed to create repository");
    let adapter = EngineAdapter::new(repo.clone());
    (repo, adapter)
}

/// Page completion should record a duplicate-suppressed history entry.
#[test]
fn test_page_finished_records_history_once() {
    let (repo, mut adapter) = setup();

    adapter.handle_event(EngineEvent::PageFinished {
        url: "https://example.com".to_string(),
        title: "Example".to_string(),
    });
    adapter.handle_event(EngineEvent::PageFinished {
        url: "https://example.com".to_string(),
        title: "Example".to_string(),
    });

    let history = repo.get_history().unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].title, "Example");
}

/// A blank engine title should be persisted as "Untitled".
#[test]
fn test_page_finished_blank_title() {
    let (repo, mut adapter) = setup();

    adapter.handle_event(EngineEvent::PageFinished {
        url: "https://example.com".to_string(),
        title: String::new(),
    });

    assert_eq!(repo.get_history().unwrap()[0].title, "Untitled");
}

/// A main-frame load failure should force progress to completion so the
/// loading overlay clears.
#[test]
fn test_main_frame_failure_clears_loading() {
    let (_repo, mut adapter) = setup();

    adapter.handle_event(EngineEvent::ProgressChanged(40));
    assert!(adapter.screen().state().is_loading);

    adapter.handle_event(EngineEvent::MainFrameLoadFailed);
    assert!(!adapter.screen().state().is_loading);
    assert_eq!(adapter.screen().state().progress, 100);
}

/// Special-scheme links should be delegated to the platform.
#[test]
fn test_special_schemes_open_externally() {
    let (_repo, adapter) = setup();

    for url in ["tel:+123", "mailto:a@b.c", "sms:+123", "intent://x"] {
        assert_eq!(
            adapter.decide_navigation(url),
            NavigationDecision::OpenExternal(url.to_string())
        );
    }
    assert_eq!(
        adapter.decide_navigation("https://example.com"),
        NavigationDecision::LoadInPage
    );
}

/// Requests to known ad hosts should be intercepted with an empty response.
#[test]
fn test_ad_hosts_intercepted() {
    let (_repo, adapter) = setup();

    let blocked = adapter.intercept_request("https://stats.doubleclick.net/pixel.gif");
    let blocked = blocked.expect("ad host should be intercepted");
    assert_eq!(blocked.content_type, "text/plain");
    assert!(blocked.body.is_empty());

    assert!(adapter.intercept_request("https://example.com/page").is_none());
}

/// Disabling ad blocking should let ad-host requests through.
#[test]
fn test_ad_blocking_can_be_disabled() {
    let (_repo, mut adapter) = setup();

    adapter.set_ad_blocking(false);
    assert!(adapter
        .intercept_request("https://stats.doubleclick.net/pixel.gif")
        .is_none());
}

/// Page start should flip the loading flag before any progress arrives.
#[test]
fn test_page_started_sets_loading() {
    let (_repo, mut adapter) = setup();

    adapter.handle_event(EngineEvent::PageStarted {
        url: "https://example.com".to_string(),
    });
    assert!(adapter.screen().state().is_loading);
    assert_eq!(adapter.screen().state().current_url, "https://example.com");
}

/// A Medium article should raise the rewrite prompt once per distinct URL.
#[test]
fn test_medium_prompt_raised_once() {
    let (_repo, mut adapter) = setup();
    let url = "https://medium.com/@author/post";

    adapter.handle_event(EngineEvent::PageStarted { url: url.to_string() });
    let prompt = adapter.take_medium_prompt().expect("prompt should be raised");
    assert_eq!(prompt.url, url);

    // Same URL again: the dismissed prompt is not re-raised.
    adapter.handle_event(EngineEvent::PageStarted { url: url.to_string() });
    assert!(adapter.take_medium_prompt().is_none());
}

/// Accepting the prompt should load the mirror URL and suppress further
/// prompts until a non-Medium URL resets the state.
#[test]
fn test_medium_prompt_accept_and_reset() {
    let (_repo, mut adapter) = setup();
    let url = "https://medium.com/@author/post";

    adapter.handle_event(EngineEvent::PageStarted { url: url.to_string() });
    let prompt = adapter.take_medium_prompt().unwrap();

    let command = adapter.accept_medium_prompt(&prompt.url);
    assert_eq!(
        command,
        EngineCommand::LoadUrl(format!("https://freedium-mirror.cfd/{}", url))
    );

    // Another Medium URL while suppressed: no prompt.
    adapter.handle_event(EngineEvent::PageStarted {
        url: "https://medium.com/@other/post".to_string(),
    });
    assert!(adapter.take_medium_prompt().is_none());

    // A non-Medium page resets suppression.
    adapter.handle_event(EngineEvent::PageStarted {
        url: "https://example.com".to_string(),
    });
    adapter.handle_event(EngineEvent::PageStarted { url: url.to_string() });
    assert!(adapter.take_medium_prompt().is_some());
}

/// The Freedium mirror itself should never raise a prompt.
#[test]
fn test_freedium_url_not_prompted() {
    let (_repo, mut adapter) = setup();

    adapter.handle_event(EngineEvent::PageStarted {
        url: "https://freedium-mirror.cfd/https://medium.com/@a/post".to_string(),
    });
    assert!(adapter.take_medium_prompt().is_none());
}

/// The desktop toggle should emit the full sequence: user agent, viewport,
/// cache clear, reload.
#[test]
fn test_desktop_toggle_sequence() {
    let (_repo, mut adapter) = setup();

    let commands = adapter.toggle_desktop_mode();
    assert_eq!(
        commands,
        vec![
            EngineCommand::SetUserAgent(DESKTOP_USER_AGENT),
            EngineCommand::SetWideViewport(true),
            EngineCommand::ClearCache,
            EngineCommand::Reload,
        ]
    );

    let commands = adapter.toggle_desktop_mode();
    assert_eq!(commands[0], EngineCommand::SetUserAgent(MOBILE_USER_AGENT));
    assert_eq!(commands[1], EngineCommand::SetWideViewport(false));
}

/// Reader mode should open the overlay, inject the extraction script, and
/// accept the extracted text back through the bridge event.
#[test]
fn test_reader_mode_round_trip() {
    let (_repo, mut adapter) = setup();

    let command = adapter.trigger_reader_mode();
    assert!(matches!(command, EngineCommand::EvaluateScript(_)));
    assert!(adapter.screen().state().show_reader_mode);

    adapter.handle_event(EngineEvent::ReaderTextExtracted("article text".to_string()));
    assert_eq!(adapter.screen().state().reader_content, "article text");
}

/// A second toolbar click inside the debounce window should be dropped.
#[test]
fn test_toolbar_clicks_debounced() {
    let (_repo, mut adapter) = setup();

    assert_eq!(adapter.back_click(), Some(EngineCommand::GoBack));
    assert_eq!(adapter.back_click(), None);
    assert_eq!(adapter.forward_click(), None);
}

/// Refresh should stop an in-flight load and reload an idle page.
#[test]
fn test_refresh_click_stops_or_reloads() {
    let (_repo, mut adapter) = setup();

    adapter.handle_event(EngineEvent::ProgressChanged(50));
    assert_eq!(adapter.refresh_click(), Some(EngineCommand::StopLoading));

    let (_repo, mut adapter) = setup();
    adapter.handle_event(EngineEvent::ProgressChanged(100));
    assert_eq!(adapter.refresh_click(), Some(EngineCommand::Reload));
}

/// Submitting URL-bar input should normalize it and close the input field.
#[test]
fn test_submit_url_input() {
    let (_repo, mut adapter) = setup();

    adapter.screen_mut().toggle_url_input();
    adapter.screen_mut().update_url_input("rust-lang.org");
    assert_eq!(
        adapter.submit_url_input(),
        Some(EngineCommand::LoadUrl("https://rust-lang.org".to_string()))
    );
    assert!(!adapter.screen().state().show_url_input);
}

/// The bookmark button should persist the current page once.
#[test]
fn test_bookmark_current_page() {
    let (repo, mut adapter) = setup();

    adapter.handle_event(EngineEvent::PageFinished {
        url: "https://example.com".to_string(),
        title: "Example".to_string(),
    });
    assert!(adapter.bookmark_current());

    let bookmarks = repo.get_all_bookmarks().unwrap();
    assert_eq!(bookmarks.len(), 1);
    assert_eq!(bookmarks[0].url, "https://example.com");
}
