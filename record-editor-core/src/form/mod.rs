//! Modal edit forms
//!
//! A [`FormController`] owns one dialog interaction: it mirrors the bound
//! entity into the widgets, validates the widgets back into a candidate
//! entity on submit, hands the candidate to the service and broadcasts the
//! change to subscribed lists.

mod department_form;
mod seller_form;
pub mod widgets;

pub use department_form::DepartmentForm;
pub use seller_form::SellerForm;

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::EditorConfig;
use crate::error::{CoreError, CoreResult};
use crate::notifier::{ChangeNotifier, DataChangeListener};
use crate::traits::{Alert, Alerts, EntityService};
use crate::types::{Entity, ValidationResult};

/// Field names used as validation keys
pub mod field {
    pub const NAME: &str = "Name";
    pub const EMAIL: &str = "Email";
    pub const BIRTH_DATE: &str = "BirthDate";
    pub const BASE_SALARY: &str = "BaseSalary";
}

/// Widget tree and field mapping of one entity type.
#[async_trait]
pub trait EntityForm: Send + Sync + Sized + 'static {
    type Entity: Entity;
    /// Auxiliary services needed to populate the form (`()` when none)
    type Lookups: Clone + Send + Sync;

    /// Builds the widget tree.
    fn new(config: &EditorConfig) -> Self;

    /// Dialog window title
    fn title(config: &EditorConfig) -> &str;

    /// Copies entity state into the widgets.
    fn update_form_data(&mut self, entity: &Self::Entity);

    /// Copies widget values into `entity`, collecting every field error.
    ///
    /// Values are assigned even for failing fields so the input survives re-editing.
    fn update_entity_values(&self, entity: &mut Self::Entity) -> ValidationResult;

    /// Clears all error labels, then shows the messages in `errors`.
    fn set_error_messages(&mut self, errors: &ValidationResult);

    /// Fetches data the widgets need before the dialog is shown.
    async fn load_associated_objects(&mut self, _lookups: &Self::Lookups) -> CoreResult<()> {
        Ok(())
    }
}

/// How a dialog was closed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogOutcome {
    /// Submitted and saved
    Saved,
    /// Closed without saving
    Cancelled,
}

/// Edit form controller
pub struct FormController<F: EntityForm> {
    view: F,
    entity: Option<F::Entity>,
    service: Option<Arc<dyn EntityService<F::Entity>>>,
    lookups: Option<F::Lookups>,
    alerts: Arc<dyn Alerts>,
    notifier: ChangeNotifier,
    outcome: Option<DialogOutcome>,
}

impl<F: EntityForm> FormController<F> {
    /// Creates an open form around an already built widget tree.
    pub fn new(view: F, alerts: Arc<dyn Alerts>) -> Self {
        Self {
            view,
            entity: None,
            service: None,
            lookups: None,
            alerts,
            notifier: ChangeNotifier::new(),
            outcome: None,
        }
    }

    /// Builds the widget tree from `config` and creates an open form.
    pub fn with_config(config: &EditorConfig, alerts: Arc<dyn Alerts>) -> Self {
        Self::new(F::new(config), alerts)
    }

    /// Installs the entity to edit and syncs the widgets from it.
    ///
    /// `None` blanks the widgets; a new entity is then created on submit.
    pub fn bind_entity(&mut self, entity: Option<F::Entity>) {
        match &entity {
            Some(entity) => self.view.update_form_data(entity),
            None => self.view.update_form_data(&F::Entity::default()),
        }
        self.entity = entity;
    }

    /// Injects the persistence service and the form's auxiliary services.
    pub fn bind_services(&mut self, service: Arc<dyn EntityService<F::Entity>>, lookups: F::Lookups) {
        self.service = Some(service);
        self.lookups = Some(lookups);
    }

    /// Populates lookup widgets. Must run after [`Self::bind_services`].
    pub async fn load_associated_objects(&mut self) -> CoreResult<()> {
        let Some(lookups) = &self.lookups else {
            let err = CoreError::NotBound("lookup service");
            err.log("Cannot load associated objects");
            return Err(err);
        };
        self.view.load_associated_objects(lookups).await
    }

    /// Registers a listener told about successful saves. `None` is ignored.
    pub fn subscribe(&mut self, listener: Option<Arc<dyn DataChangeListener>>) {
        self.notifier.subscribe(listener);
    }

    /// Validates the widgets and saves the result.
    ///
    /// - Validation failure: error labels are filled, nothing is saved.
    /// - Service failure: one alert is shown, the bound entity is untouched.
    /// - Success: listeners are notified, then the dialog closes.
    ///
    /// The dialog stays open on every failure.
    pub async fn submit(&mut self) -> CoreResult<()> {
        if !self.is_open() {
            log::warn!("Ignoring submit on a closed {} form", F::Entity::KIND);
            return Ok(());
        }

        let Some(service) = self.service.clone() else {
            let err = CoreError::NotBound("service");
            err.log("Cannot submit form");
            return Err(err);
        };

        let mut candidate = self.entity.clone().unwrap_or_default();
        let errors = self.view.update_entity_values(&mut candidate);
        self.view.set_error_messages(&errors);
        if let Err(errors) = errors.into_result() {
            let err = CoreError::Validation(errors);
            err.log(&format!("{} form rejected", F::Entity::KIND));
            return Err(err);
        }

        if let Err(e) = service.save_or_update(&mut candidate).await {
            e.log(&format!("Failed to save {}", F::Entity::KIND));
            match &e {
                CoreError::Validation(errors) => self.view.set_error_messages(errors),
                _ => self.alerts.show_alert(Alert::error("Error saving object", e.detail())),
            }
            return Err(e);
        }

        log::info!("{} saved (id: {:?})", F::Entity::KIND, candidate.id());
        self.entity = Some(candidate);
        self.notifier.broadcast().await;
        self.outcome = Some(DialogOutcome::Saved);
        Ok(())
    }

    /// Closes the dialog and discards any edits.
    pub fn cancel(&mut self) {
        if self.is_open() {
            self.outcome = Some(DialogOutcome::Cancelled);
        }
    }

    pub fn is_open(&self) -> bool {
        self.outcome.is_none()
    }

    /// `None` while the dialog is open
    pub fn outcome(&self) -> Option<DialogOutcome> {
        self.outcome
    }

    /// Bound entity; after a successful submit, the saved entity
    pub fn entity(&self) -> Option<&F::Entity> {
        self.entity.as_ref()
    }

    pub fn view(&self) -> &F {
        &self.view
    }

    /// Widget access for the dialog host
    pub fn view_mut(&mut self) -> &mut F {
        &mut self.view
    }
}
