//! Alerts adapter without a user interface.

use async_trait::async_trait;
use record_editor_core::traits::{Alert, AlertSeverity, Alerts, ConfirmationChoice};

/// Writes alerts to the log and answers every confirmation with a fixed choice.
///
/// Defaults to declining, so nothing is removed without a real user.
pub struct HeadlessAlerts {
    answer: ConfirmationChoice,
}

impl HeadlessAlerts {
    #[must_use]
    pub fn new(answer: ConfirmationChoice) -> Self {
        Self { answer }
    }
}

impl Default for HeadlessAlerts {
    fn default() -> Self {
        Self::new(ConfirmationChoice::Declined)
    }
}

#[async_trait]
impl Alerts for HeadlessAlerts {
    fn show_alert(&self, alert: Alert) {
        let header = alert.header.as_deref().unwrap_or_default();
        match alert.severity {
            AlertSeverity::Error => log::error!("{}: {header} {}", alert.title, alert.content),
            AlertSeverity::Warning => log::warn!("{}: {header} {}", alert.title, alert.content),
            AlertSeverity::Information => {
                log::info!("{}: {header} {}", alert.title, alert.content);
            }
        }
    }

    async fn show_confirmation(&self, title: &str, message: &str) -> ConfirmationChoice {
        log::info!("{title}: {message} -> {:?}", self.answer);
        self.answer
    }
}
