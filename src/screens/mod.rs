// PocketReader screen state holders
// Each screen owns a mutable UI state snapshot plus the mutation operations
// the UI invokes. Status messages are shared across screens.

pub mod bookmarks;
pub mod debounce;
pub mod home;
pub mod webview;

// User-facing status messages.
pub const MSG_BOOKMARKED: &str = "Bookmarked";
pub const MSG_ALREADY_BOOKMARKED: &str = "Already bookmarked";
pub const MSG_SAVED_TO_HISTORY: &str = "Saved to history";
pub const MSG_ALREADY_IN_HISTORY: &str = "Already in history";
