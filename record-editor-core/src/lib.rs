//! Record Editor Core Library
//!
//! Provides the form-submission and list-synchronization protocol of a
//! master/detail record editor:
//! - Validation of user input into a candidate entity (`ValidationResult`)
//! - Modal edit forms (`FormController`)
//! - Entity lists with guarded removal (`ListController`)
//! - Change propagation from forms to lists (`ChangeNotifier`)
//!
//! Persistence, dialog windows and alert presentation are abstracted through traits,
//! so any frontend can plug in its own implementations.

pub mod config;
pub mod error;
pub mod form;
pub mod list;
pub mod notifier;
pub mod traits;
pub mod types;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use config::EditorConfig;
pub use error::{CoreError, CoreResult};
pub use form::{DepartmentForm, DialogOutcome, EntityForm, FormController, SellerForm};
pub use list::{ListController, RemoveOutcome};
pub use notifier::{ChangeNotifier, DataChangeListener};
pub use traits::{Alert, AlertSeverity, Alerts, ConfirmationChoice, DialogHost, EntityService};
pub use types::{Department, Entity, Seller, ValidationResult};
