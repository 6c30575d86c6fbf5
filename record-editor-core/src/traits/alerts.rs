//! User alert abstract Trait

use async_trait::async_trait;
use serde::Serialize;

/// Alert severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    Information,
    Warning,
    Error,
}

/// A message shown to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alert {
    pub title: String,
    pub header: Option<String>,
    pub content: String,
    pub severity: AlertSeverity,
}

impl Alert {
    /// Creates an error alert without a header.
    pub fn error(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            header: None,
            content: content.into(),
            severity: AlertSeverity::Error,
        }
    }

    #[must_use]
    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }
}

/// Answer to a confirmation prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmationChoice {
    /// The user pressed OK
    Accepted,
    /// The user pressed Cancel
    Declined,
    /// The prompt was closed without a choice
    Dismissed,
}

impl ConfirmationChoice {
    /// Only an explicit OK counts as consent; a dismissed prompt is a decline.
    pub fn is_accepted(self) -> bool {
        matches!(self, Self::Accepted)
    }
}

/// Alert presentation Trait
///
/// Implemented by the frontend (dialog boxes, status bar, log sink).
#[async_trait]
pub trait Alerts: Send + Sync {
    /// Show a message. Fire-and-forget.
    fn show_alert(&self, alert: Alert);

    /// Ask the user a yes/no question and wait for the answer.
    async fn show_confirmation(&self, title: &str, message: &str) -> ConfirmationChoice;
}
