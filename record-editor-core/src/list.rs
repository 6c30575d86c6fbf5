//! Entity list controller
//!
//! Displays the records of one entity type, opens edit dialogs for them and
//! removes them after confirmation. The list subscribes itself to every form
//! it opens, so a successful save reloads the rows.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::config::EditorConfig;
use crate::error::{CoreError, CoreResult};
use crate::form::{DialogOutcome, EntityForm, FormController};
use crate::notifier::DataChangeListener;
use crate::traits::{Alert, Alerts, DialogHost, EntityService};
use crate::types::Entity;

/// Result of a removal request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// The record was deleted and the list reloaded
    Removed,
    /// The user did not confirm; nothing happened
    Declined,
}

/// Entity list controller
pub struct ListController<F: EntityForm> {
    service: RwLock<Option<Arc<dyn EntityService<F::Entity>>>>,
    /// Displayed rows, replaced wholesale on every refresh
    rows: RwLock<Vec<F::Entity>>,
    lookups: F::Lookups,
    config: EditorConfig,
    alerts: Arc<dyn Alerts>,
    dialogs: Arc<dyn DialogHost<F>>,
}

impl<F: EntityForm> ListController<F> {
    /// Create a list controller
    ///
    /// # Arguments
    /// * `lookups` - auxiliary services passed to every form this list opens
    pub fn new(
        config: EditorConfig,
        alerts: Arc<dyn Alerts>,
        dialogs: Arc<dyn DialogHost<F>>,
        lookups: F::Lookups,
    ) -> Self {
        Self {
            service: RwLock::new(None),
            rows: RwLock::new(Vec::new()),
            lookups,
            config,
            alerts,
            dialogs,
        }
    }

    /// Injects the persistence service.
    pub async fn bind_service(&self, service: Arc<dyn EntityService<F::Entity>>) {
        *self.service.write().await = Some(service);
    }

    async fn service(&self) -> CoreResult<Arc<dyn EntityService<F::Entity>>> {
        self.service.read().await.clone().ok_or_else(|| {
            let err = CoreError::NotBound("service");
            err.log(&format!("{} list", F::Entity::KIND));
            err
        })
    }

    // ===== Display =====

    /// Reloads all rows from the service.
    ///
    /// On failure the displayed rows are left as they were.
    pub async fn refresh(&self) -> CoreResult<()> {
        let service = self.service().await?;
        match service.find_all().await {
            Ok(rows) => {
                log::info!("Loaded {} {} row(s)", rows.len(), F::Entity::KIND);
                *self.rows.write().await = rows;
                Ok(())
            }
            Err(e) => {
                e.log(&format!("Failed to load {} list", F::Entity::KIND));
                Err(e)
            }
        }
    }

    /// Snapshot of the displayed rows
    pub async fn rows(&self) -> Vec<F::Entity> {
        self.rows.read().await.clone()
    }

    pub async fn row(&self, index: usize) -> Option<F::Entity> {
        self.rows.read().await.get(index).cloned()
    }

    pub fn columns(&self) -> &'static [&'static str] {
        F::Entity::columns()
    }

    /// Display cells of every row
    pub async fn table(&self) -> Vec<Vec<String>> {
        self.rows
            .read()
            .await
            .iter()
            .map(|row| row.display_fields(&self.config))
            .collect()
    }

    // ===== Dialogs =====

    /// Opens a form for a new record and waits until it is closed.
    pub async fn on_create(self: &Arc<Self>) -> CoreResult<DialogOutcome> {
        self.open_form(F::Entity::default()).await
    }

    /// Opens a form for `entity` and waits until it is closed.
    pub async fn on_edit(self: &Arc<Self>, entity: &F::Entity) -> CoreResult<DialogOutcome> {
        self.open_form(entity.clone()).await
    }

    async fn open_form(self: &Arc<Self>, entity: F::Entity) -> CoreResult<DialogOutcome> {
        let service = self.service().await?;

        let mut form = FormController::<F>::with_config(&self.config, Arc::clone(&self.alerts));
        form.bind_entity(Some(entity));
        form.bind_services(service, self.lookups.clone());
        if let Err(e) = form.load_associated_objects().await {
            self.alerts.show_alert(
                Alert::error("Error loading view", e.detail())
                    .with_header(format!("Cannot open the {} form", F::Entity::KIND)),
            );
            return Err(e);
        }
        let listener: Arc<dyn DataChangeListener> = Arc::clone(self) as Arc<dyn DataChangeListener>;
        form.subscribe(Some(listener));

        self.dialogs
            .show_and_wait(F::title(&self.config), &mut form)
            .await;

        Ok(form.outcome().unwrap_or_else(|| {
            log::warn!("{} dialog returned while still open", F::Entity::KIND);
            DialogOutcome::Cancelled
        }))
    }

    // ===== Removal =====

    /// Removes `entity` after the user confirms.
    ///
    /// A declined or dismissed confirmation does nothing. A failed removal
    /// is shown to the user and leaves the row in place. Once the service
    /// has removed the record the result is `Removed`, even if the reload
    /// fails; the row is then dropped locally and the reload error alerted.
    pub async fn on_remove(&self, entity: &F::Entity) -> CoreResult<RemoveOutcome> {
        let choice = self
            .alerts
            .show_confirmation("Confirmation", "Are you sure to delete?")
            .await;
        if !choice.is_accepted() {
            log::debug!("Removal of {} {:?} not confirmed", F::Entity::KIND, entity.id());
            return Ok(RemoveOutcome::Declined);
        }

        let service = self.service().await?;
        if let Err(e) = service.remove(entity).await {
            e.log(&format!("Failed to remove {} {:?}", F::Entity::KIND, entity.id()));
            self.alerts
                .show_alert(Alert::error("Error removing object", e.detail()));
            return Err(e);
        }
        log::info!("{} {:?} removed", F::Entity::KIND, entity.id());

        if !self.reload_or_alert().await {
            self.rows
                .write()
                .await
                .retain(|row| !row.same_identity(entity));
        }
        Ok(RemoveOutcome::Removed)
    }

    /// Refreshes the rows, alerting the user on failure. Returns whether the reload succeeded.
    async fn reload_or_alert(&self) -> bool {
        match self.refresh().await {
            Ok(()) => true,
            Err(e) => {
                self.alerts
                    .show_alert(Alert::error("Error loading data", e.detail()));
                false
            }
        }
    }
}

#[async_trait]
impl<F: EntityForm> DataChangeListener for ListController<F> {
    async fn on_data_changed(&self) {
        self.reload_or_alert().await;
    }
}
