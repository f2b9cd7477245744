//! Browser engine adapter.
//!
//! Forwards engine lifecycle callbacks into the webview screen state holder
//! and owns the boundary logic around the engine: ad-host request
//! interception, special-scheme delegation, the Medium-to-Freedium rewrite
//! prompt, the desktop/mobile toggle, and reader-mode script injection.

use crate::repository::Repository;
use crate::screens::debounce::ClickDebouncer;
use crate::screens::webview::{normalize_submit_url, WebviewScreen};
use crate::services::ad_filter::{AdFilter, BlockedResponse};
use crate::services::link_rules;
use crate::services::metadata_fetcher::UNTITLED;

/// User agent presented in desktop mode.
pub const DESKTOP_USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/119.0.0.0 Safari/537.36";

/// User agent presented in mobile mode (the default).
pub const MOBILE_USER_AGENT: &str = "Mozilla/5.0 (Linux; Android 10; Mobile) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/119.0.0.0 Mobile Safari/537.36";

pub const MSG_MEDIUM_DETECTED: &str = "Open this Medium article in Freedium for free access?";
pub const MSG_OPEN_IN_FREEDIUM: &str = "Open in Freedium";

/// Name of the in-page script bridge channel carrying extracted article text.
pub const READER_BRIDGE: &str = "ReadBridge";

/// Injected on reader-mode trigger: finds the most article-like element and
/// posts its text through the bridge channel. One text payload per trigger.
const READER_EXTRACTION_JS: &str = r#"(function(){
    try {
        var el = document.querySelector('article') ||
                 document.querySelector('[role="main"]') ||
                 document.querySelector('main') ||
                 document.querySelector('.article-content') ||
                 document.querySelector('.post-content') ||
                 document.querySelector('.entry-content') ||
                 document.body;
        var txt = el.innerText || el.textContent || '';
        txt = txt.replace(/\s+/g, ' ').trim();
        if (window.ReadBridge && window.ReadBridge.postMessage) {
            window.ReadBridge.postMessage(txt);
        }
    } catch (e) {
        if (window.ReadBridge && window.ReadBridge.postMessage) {
            window.ReadBridge.postMessage('Error extracting content: ' + e.message);
        }
    }
})();"#;

/// Lifecycle callback from the engine, forwarded as a one-way message.
#[derive(Debug, Clone)]
pub enum EngineEvent {
    ProgressChanged(i32),
    TitleReceived(String),
    PageStarted { url: String },
    PageFinished { url: String, title: String },
    NavigationStateChanged { can_go_back: bool, can_go_forward: bool },
    /// Payload received on the reader-mode bridge channel.
    ReaderTextExtracted(String),
    MainFrameLoadFailed,
}

/// Instruction for the engine, emitted by the adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineCommand {
    LoadUrl(String),
    Reload,
    StopLoading,
    GoBack,
    GoForward,
    SetUserAgent(&'static str),
    SetWideViewport(bool),
    ClearCache,
    /// Hand the URL to the platform's generic open mechanism.
    OpenExternal(String),
    EvaluateScript(String),
}

/// Outcome of a navigation request check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationDecision {
    LoadInPage,
    /// Special-scheme link — delegate to the platform, do not load in-page.
    OpenExternal(String),
}

/// A pending one-time prompt offering the Freedium rewrite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediumPrompt {
    pub message: &'static str,
    pub action_label: &'static str,
    /// The matching URL the prompt was raised for.
    pub url: String,
}

pub struct EngineAdapter {
    screen: WebviewScreen,
    ad_filter: AdFilter,
    debouncer: ClickDebouncer,
    /// Suppresses re-prompting after an accepted rewrite, until the current
    /// URL stops matching.
    has_redirected_to_freedium: bool,
    /// Last URL a prompt was raised for; one prompt per distinct URL.
    prompted_url: Option<String>,
    pending_prompt: Option<MediumPrompt>,
}

impl EngineAdapter {
    pub fn new(repository: Repository) -> Self {
        Self {
            screen: WebviewScreen::new(repository),
            ad_filter: AdFilter::new(),
            debouncer: ClickDebouncer::new(),
            has_redirected_to_freedium: false,
            prompted_url: None,
            pending_prompt: None,
        }
    }

    pub fn screen(&self) -> &WebviewScreen {
        &self.screen
    }

    pub fn screen_mut(&mut self) -> &mut WebviewScreen {
        &mut self.screen
    }

    /// Applies one engine callback to screen state.
    ///
    /// Page completion records a duplicate-suppressed history entry; a
    /// main-frame load error forces progress to completion so the loading
    /// overlay clears.
    pub fn handle_event(&mut self, event: EngineEvent) {
        match event {
            EngineEvent::ProgressChanged(progress) => {
                self.screen.update_progress(progress);
            }
            EngineEvent::TitleReceived(title) => {
                self.screen.update_page_title(&title);
            }
            EngineEvent::PageStarted { url } => {
                self.screen.update_loading(true);
                self.screen.update_current_url(&url);
                self.check_medium_url(&url);
            }
            EngineEvent::PageFinished { url, title } => {
                self.screen.update_current_url(&url);
                self.check_medium_url(&url);
                if !url.is_empty() {
                    let title = if title.is_empty() { UNTITLED } else { &title };
                    self.screen.save_to_history(&url, title);
                }
            }
            EngineEvent::NavigationStateChanged {
                can_go_back,
                can_go_forward,
            } => {
                self.screen.update_navigation_state(can_go_back, can_go_forward);
            }
            EngineEvent::ReaderTextExtracted(text) => {
                self.screen.update_reader_content(&text);
            }
            EngineEvent::MainFrameLoadFailed => {
                self.screen.update_progress(100);
            }
        }
    }

    /// Decides whether a navigation request loads in-page or goes to the
    /// platform (tel:, mailto:, sms:, intent:).
    pub fn decide_navigation(&self, url: &str) -> NavigationDecision {
        if link_rules::is_external_scheme(url) {
            NavigationDecision::OpenExternal(url.to_string())
        } else {
            NavigationDecision::LoadInPage
        }
    }

    /// Intercepts an outgoing resource request; ad hosts get an empty
    /// plain-text response instead of reaching the network.
    pub fn intercept_request(&self, request_url: &str) -> Option<BlockedResponse> {
        self.ad_filter.intercept_request(request_url)
    }

    pub fn set_ad_blocking(&mut self, enabled: bool) {
        self.ad_filter.set_enabled(enabled);
    }

    /// Raises a prompt when the URL is a Medium article not already going
    /// through the mirror. At most one prompt per distinct matching URL;
    /// a non-matching URL resets the suppression state.
    fn check_medium_url(&mut self, url: &str) {
        if link_rules::is_medium_url(url) {
            if !self.has_redirected_to_freedium && self.prompted_url.as_deref() != Some(url) {
                self.prompted_url = Some(url.to_string());
                self.pending_prompt = Some(MediumPrompt {
                    message: MSG_MEDIUM_DETECTED,
                    action_label: MSG_OPEN_IN_FREEDIUM,
                    url: url.to_string(),
                });
            }
        } else {
            self.has_redirected_to_freedium = false;
            self.prompted_url = None;
            self.pending_prompt = None;
        }
    }

    /// Takes the pending rewrite prompt, if any. Taking it consumes it —
    /// a dismissed prompt is not re-raised for the same URL.
    pub fn take_medium_prompt(&mut self) -> Option<MediumPrompt> {
        self.pending_prompt.take()
    }

    /// Accepts a rewrite prompt: loads the mirror URL and suppresses further
    /// prompts until the current URL stops matching.
    pub fn accept_medium_prompt(&mut self, medium_url: &str) -> EngineCommand {
        self.has_redirected_to_freedium = true;
        EngineCommand::LoadUrl(link_rules::to_freedium_url(medium_url))
    }

    /// Toggles desktop/mobile rendering: swap user agent and viewport flags,
    /// drop the in-memory cache, and reload the current URL.
    pub fn toggle_desktop_mode(&mut self) -> Vec<EngineCommand> {
        self.screen.toggle_desktop_mode();
        let desktop = self.screen.state().is_desktop_mode;
        vec![
            EngineCommand::SetUserAgent(if desktop {
                DESKTOP_USER_AGENT
            } else {
                MOBILE_USER_AGENT
            }),
            EngineCommand::SetWideViewport(desktop),
            EngineCommand::ClearCache,
            EngineCommand::Reload,
        ]
    }

    /// Opens reader mode and injects the extraction script; the result comes
    /// back as [`EngineEvent::ReaderTextExtracted`].
    pub fn trigger_reader_mode(&mut self) -> EngineCommand {
        self.screen.show_reader_mode();
        EngineCommand::EvaluateScript(READER_EXTRACTION_JS.to_string())
    }

    /// Debounced back button.
    pub fn back_click(&mut self) -> Option<EngineCommand> {
        self.debouncer.try_click().then_some(EngineCommand::GoBack)
    }

    /// Debounced forward button.
    pub fn forward_click(&mut self) -> Option<EngineCommand> {
        self.debouncer.try_click().then_some(EngineCommand::GoForward)
    }

    /// Debounced refresh button: stops an in-flight load, otherwise reloads.
    pub fn refresh_click(&mut self) -> Option<EngineCommand> {
        if !self.debouncer.try_click() {
            return None;
        }
        Some(if self.screen.state().is_loading {
            EngineCommand::StopLoading
        } else {
            EngineCommand::Reload
        })
    }

    /// Debounced URL-bar submission: normalizes the input and closes the
    /// input field when a navigation is issued.
    pub fn submit_url_input(&mut self) -> Option<EngineCommand> {
        if !self.debouncer.try_click() {
            return None;
        }
        let url = normalize_submit_url(&self.screen.state().url_input)?;
        self.screen.toggle_url_input();
        Some(EngineCommand::LoadUrl(url))
    }

    /// Debounced bookmark button for the current page. Returns whether a new
    /// bookmark was persisted.
    pub fn bookmark_current(&mut self) -> bool {
        if !self.debouncer.try_click() {
            return false;
        }
        let url = self.screen.state().current_url.clone();
        if url.is_empty() {
            return false;
        }
        let title = self.screen.state().page_title.clone();
        self.screen.bookmark_click(&url, &title)
    }
}
