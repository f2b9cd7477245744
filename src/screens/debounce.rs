//! Elapsed-time click debouncing.
//!
//! Duplicate-click protection uses a fixed delay window rather than
//! disabling inputs: a click inside the window of the previous accepted
//! click is dropped.

use std::time::{Duration, Instant};

/// Default debounce window for toolbar and action-bar clicks.
pub const CLICK_DEBOUNCE_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug)]
pub struct ClickDebouncer {
    window: Duration,
    last_click: Option<Instant>,
}

impl ClickDebouncer {
    pub fn new() -> Self {
        Self::with_window(CLICK_DEBOUNCE_DELAY)
    }

    pub fn with_window(window: Duration) -> Self {
        Self {
            window,
            last_click: None,
        }
    }

    /// Accepts the click and starts a new window, or drops it when the
    /// previous accepted click is still within the window.
    pub fn try_click(&mut self) -> bool {
        let now = Instant::now();
        match self.last_click {
            Some(last) if now.duration_since(last) <= self.window => false,
            _ => {
                self.last_click = Some(now);
                true
            }
        }
    }
}

impl Default for ClickDebouncer {
    fn default() -> Self {
        Self::new()
    }
}
