//! User-visible result messages.

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum NotificationLevel {
    /// Operation completed
    #[display("success")]
    Success,
    /// Operation refused before any request was made
    #[display("warning")]
    Warning,
    /// Operation attempted and failed
    #[display("error")]
    Failure,
}

/// A toast-style message describing how an operation ended.
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters, derive_more::Display)]
#[display("[{}] {}: {}", level, title, message)]
pub struct Notification {
    /// Severity
    level: NotificationLevel,
    /// Short headline
    title: String,
    /// Longer description
    message: String,
}

impl Notification {
    /// Create a notification.
    pub fn new(
        level: NotificationLevel,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            level,
            title: title.into(),
            message: message.into(),
        }
    }

    /// Shorthand for a success notification.
    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Success, title, message)
    }

    /// Shorthand for a warning notification.
    pub fn warning(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Warning, title, message)
    }

    /// Shorthand for a failure notification.
    pub fn failure(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Failure, title, message)
    }
}
