//! Transient user-facing notifications.
//!
//! A notification is fire-and-forget: the app layer queues it for a short
//! display window, then drops it. Nothing is persisted or retried.

/// Visual severity of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Neutral information (scan complete, etc.)
    Info,
    /// A request succeeded
    Success,
    /// Needs attention but nothing failed
    Warning,
    /// A request was rejected (missing form fields, account deletion)
    Destructive,
}

impl Severity {
    /// Single-character glyph shown before the title
    pub fn icon(&self) -> &'static str {
        match self {
            Severity::Info => "i",
            Severity::Success => "+",
            Severity::Warning => "!",
            Severity::Destructive => "x",
        }
    }
}

/// A transient, dismissible message with title, description, and severity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

impl Notification {
    pub fn new(
        severity: Severity,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity,
        }
    }

    /// Create an info notification
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(Severity::Info, title, description)
    }

    /// Create a success notification
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(Severity::Success, title, description)
    }

    /// Create a warning notification
    pub fn warning(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(Severity::Warning, title, description)
    }

    /// Create a destructive notification
    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(Severity::Destructive, title, description)
    }
}
