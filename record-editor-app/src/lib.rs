//! Platform-agnostic application bootstrap for the record editor.
//!
//! Provides `AppState` (service container), `AppStateBuilder` (adapter injection)
//! and the in-memory adapters used by headless frontends and tests.

pub mod adapters;

use std::sync::Arc;

use record_editor_core::error::{CoreError, CoreResult};
use record_editor_core::form::{DepartmentForm, SellerForm};
use record_editor_core::traits::{Alerts, DialogHost, EntityService};
use record_editor_core::types::{Department, Seller};
use record_editor_core::{EditorConfig, ListController};

use adapters::MemoryStore;

/// Platform-agnostic application state.
///
/// Holds the services and collaborators every view is wired with. Frontends
/// construct this once at startup via `AppStateBuilder`.
pub struct AppState {
    /// Display formats and field limits
    pub config: EditorConfig,
    /// Alert presentation
    pub alerts: Arc<dyn Alerts>,
    /// Department service
    pub department_service: Arc<dyn EntityService<Department>>,
    /// Seller service
    pub seller_service: Arc<dyn EntityService<Seller>>,
}

impl AppState {
    /// Open the department list: bind its service and load the rows.
    pub async fn department_list(
        &self,
        dialogs: Arc<dyn DialogHost<DepartmentForm>>,
    ) -> CoreResult<Arc<ListController<DepartmentForm>>> {
        let list = Arc::new(ListController::new(
            self.config.clone(),
            Arc::clone(&self.alerts),
            dialogs,
            (),
        ));
        list.bind_service(Arc::clone(&self.department_service)).await;
        list.refresh().await?;
        Ok(list)
    }

    /// Open the seller list: bind its service, the department lookup for
    /// its forms, and load the rows.
    pub async fn seller_list(
        &self,
        dialogs: Arc<dyn DialogHost<SellerForm>>,
    ) -> CoreResult<Arc<ListController<SellerForm>>> {
        let list = Arc::new(ListController::new(
            self.config.clone(),
            Arc::clone(&self.alerts),
            dialogs,
            Arc::clone(&self.department_service),
        ));
        list.bind_service(Arc::clone(&self.seller_service)).await;
        list.refresh().await?;
        Ok(list)
    }
}

/// Builder for constructing `AppState` with platform-specific adapters.
///
/// # Required adapters
/// - `department_service` / `seller_service`: how records are stored
///   (or `memory_store` for both)
/// - `alerts`: how messages and confirmations reach the user
///
/// # Optional
/// - `config`: defaults to `EditorConfig::default()`
pub struct AppStateBuilder {
    config: Option<EditorConfig>,
    alerts: Option<Arc<dyn Alerts>>,
    department_service: Option<Arc<dyn EntityService<Department>>>,
    seller_service: Option<Arc<dyn EntityService<Seller>>>,
}

impl AppStateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: None,
            alerts: None,
            department_service: None,
            seller_service: None,
        }
    }

    #[must_use]
    pub fn config(mut self, config: EditorConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Parse the configuration from JSON.
    pub fn config_json(self, json: &str) -> CoreResult<Self> {
        Ok(self.config(EditorConfig::from_json(json)?))
    }

    #[must_use]
    pub fn alerts(mut self, alerts: Arc<dyn Alerts>) -> Self {
        self.alerts = Some(alerts);
        self
    }

    #[must_use]
    pub fn department_service(mut self, service: Arc<dyn EntityService<Department>>) -> Self {
        self.department_service = Some(service);
        self
    }

    #[must_use]
    pub fn seller_service(mut self, service: Arc<dyn EntityService<Seller>>) -> Self {
        self.seller_service = Some(service);
        self
    }

    /// Use one in-memory store for both services.
    #[must_use]
    pub fn memory_store(self, store: &Arc<MemoryStore>) -> Self {
        self.department_service(store.departments())
            .seller_service(store.sellers())
    }

    /// Build the `AppState`.
    ///
    /// # Errors
    /// Returns `CoreError::NotBound` if a required adapter is missing.
    pub fn build(self) -> CoreResult<AppState> {
        let alerts = self.alerts.ok_or(CoreError::NotBound("alerts"))?;
        let department_service = self
            .department_service
            .ok_or(CoreError::NotBound("department_service"))?;
        let seller_service = self
            .seller_service
            .ok_or(CoreError::NotBound("seller_service"))?;
        let config = self.config.unwrap_or_default();

        log::info!(
            "Record editor ready (date format: {}, salary decimals: {})",
            config.date_format,
            config.salary_decimals
        );

        Ok(AppState {
            config,
            alerts,
            department_service,
            seller_service,
        })
    }
}

impl Default for AppStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
