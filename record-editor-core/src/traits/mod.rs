//! Collaborator abstraction trait definitions

mod alerts;
mod dialog_host;
mod entity_service;

pub use alerts::{Alert, AlertSeverity, Alerts, ConfirmationChoice};
pub use dialog_host::DialogHost;
pub use entity_service::EntityService;
