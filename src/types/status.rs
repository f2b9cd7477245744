/// Screen status shared by all screen state holders.
///
/// A closed four-variant tag; exactly one variant is active at a time.
/// `Success` and `Error` carry a user-facing message consumed by the UI
/// as a transient notification.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ScreenStatus {
    #[default]
    Idle,
    Loading,
    Success(String),
    Error(String),
}

impl ScreenStatus {
    /// Convenience accessor for the message of a terminal status, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            ScreenStatus::Success(msg) | ScreenStatus::Error(msg) => Some(msg.as_str()),
            _ => None,
        }
    }
}
