//! Test helper module
//!
//! Provides mock collaborators and convenient fixtures.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::sync::atomic::{AtomicI32, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::error::{CoreError, CoreResult};
use crate::form::{EntityForm, FormController};
use crate::notifier::DataChangeListener;
use crate::traits::{Alert, Alerts, ConfirmationChoice, DialogHost, EntityService};
use crate::types::{Department, Entity};

pub fn books_and_computers() -> Vec<Department> {
    vec![
        Department::new(Some(1), "Books"),
        Department::new(Some(2), "Computers"),
    ]
}

// ===== MockService =====

/// Vec-backed service that records every call.
pub struct MockService<T: Entity> {
    rows: Mutex<Vec<T>>,
    /// Entities as passed to `save_or_update`, before id assignment
    saved: Mutex<Vec<T>>,
    remove_calls: AtomicUsize,
    find_all_calls: AtomicUsize,
    next_id: AtomicI32,
    save_error: Mutex<Option<CoreError>>,
    remove_error: Mutex<Option<CoreError>>,
    find_all_error: Mutex<Option<CoreError>>,
}

impl<T: Entity> MockService<T> {
    pub fn new() -> Self {
        Self::with_rows(Vec::new())
    }

    pub fn with_rows(rows: Vec<T>) -> Self {
        let max_id = rows.iter().filter_map(Entity::id).max().unwrap_or(0);
        Self {
            rows: Mutex::new(rows),
            saved: Mutex::new(Vec::new()),
            remove_calls: AtomicUsize::new(0),
            find_all_calls: AtomicUsize::new(0),
            next_id: AtomicI32::new(max_id + 1),
            save_error: Mutex::new(None),
            remove_error: Mutex::new(None),
            find_all_error: Mutex::new(None),
        }
    }

    pub fn set_save_error(&self, err: Option<CoreError>) {
        *self.save_error.lock().unwrap() = err;
    }

    pub fn set_remove_error(&self, err: Option<CoreError>) {
        *self.remove_error.lock().unwrap() = err;
    }

    pub fn set_find_all_error(&self, err: Option<CoreError>) {
        *self.find_all_error.lock().unwrap() = err;
    }

    pub fn saved(&self) -> Vec<T> {
        self.saved.lock().unwrap().clone()
    }

    pub fn save_calls(&self) -> usize {
        self.saved.lock().unwrap().len()
    }

    pub fn remove_calls(&self) -> usize {
        self.remove_calls.load(Ordering::SeqCst)
    }

    pub fn find_all_calls(&self) -> usize {
        self.find_all_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl<T: Entity> EntityService<T> for MockService<T> {
    async fn find_all(&self) -> CoreResult<Vec<T>> {
        self.find_all_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(err) = self.find_all_error.lock().unwrap().clone() {
            return Err(err);
        }
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn save_or_update(&self, entity: &mut T) -> CoreResult<()> {
        self.saved.lock().unwrap().push(entity.clone());
        if let Some(err) = self.save_error.lock().unwrap().clone() {
            return Err(err);
        }

        let mut rows = self.rows.lock().unwrap();
        if entity.id().is_none() {
            entity.set_id(Some(self.next_id.fetch_add(1, Ordering::SeqCst)));
        }
        match rows.iter_mut().find(|row| row.same_identity(entity)) {
            Some(row) => *row = entity.clone(),
            None => rows.push(entity.clone()),
        }
        Ok(())
    }

    async fn remove(&self, entity: &T) -> CoreResult<()> {
        self.remove_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(err) = self.remove_error.lock().unwrap().clone() {
            return Err(err);
        }
        self.rows
            .lock()
            .unwrap()
            .retain(|row| !row.same_identity(entity));
        Ok(())
    }
}

// ===== MockAlerts =====

pub struct MockAlerts {
    alerts: Mutex<Vec<Alert>>,
    confirmation: Mutex<ConfirmationChoice>,
    confirmations: AtomicUsize,
}

impl MockAlerts {
    /// Confirms every prompt until told otherwise.
    pub fn new() -> Self {
        Self {
            alerts: Mutex::new(Vec::new()),
            confirmation: Mutex::new(ConfirmationChoice::Accepted),
            confirmations: AtomicUsize::new(0),
        }
    }

    pub fn set_confirmation(&self, choice: ConfirmationChoice) {
        *self.confirmation.lock().unwrap() = choice;
    }

    pub fn alerts(&self) -> Vec<Alert> {
        self.alerts.lock().unwrap().clone()
    }

    pub fn alert_count(&self) -> usize {
        self.alerts.lock().unwrap().len()
    }

    pub fn confirmation_count(&self) -> usize {
        self.confirmations.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Alerts for MockAlerts {
    fn show_alert(&self, alert: Alert) {
        self.alerts.lock().unwrap().push(alert);
    }

    async fn show_confirmation(&self, _title: &str, _message: &str) -> ConfirmationChoice {
        self.confirmations.fetch_add(1, Ordering::SeqCst);
        *self.confirmation.lock().unwrap()
    }
}

// ===== RecordingListener =====

pub type CallLog = Arc<Mutex<Vec<&'static str>>>;

/// Appends its name to a shared log when notified.
pub struct RecordingListener {
    name: &'static str,
    log: CallLog,
}

impl RecordingListener {
    pub fn shared_log() -> CallLog {
        Arc::new(Mutex::new(Vec::new()))
    }

    pub fn new(name: &'static str, log: &CallLog) -> Self {
        Self {
            name,
            log: Arc::clone(log),
        }
    }
}

#[async_trait]
impl DataChangeListener for RecordingListener {
    async fn on_data_changed(&self) {
        self.log.lock().unwrap().push(self.name);
    }
}

// ===== ScriptedDialog =====

type Edit<F> = Box<dyn Fn(&mut F) + Send + Sync>;

/// Dialog host that applies a fixed edit, optionally presses Save once,
/// then closes whatever is still open.
pub struct ScriptedDialog<F: EntityForm> {
    edit: Edit<F>,
    submit: bool,
    titles: Mutex<Vec<String>>,
    opened_with: Mutex<Vec<F::Entity>>,
}

impl<F: EntityForm> ScriptedDialog<F> {
    pub fn submitting(edit: impl Fn(&mut F) + Send + Sync + 'static) -> Self {
        Self {
            edit: Box::new(edit),
            submit: true,
            titles: Mutex::new(Vec::new()),
            opened_with: Mutex::new(Vec::new()),
        }
    }

    pub fn cancelling() -> Self {
        Self {
            edit: Box::new(|_: &mut F| {}),
            submit: false,
            titles: Mutex::new(Vec::new()),
            opened_with: Mutex::new(Vec::new()),
        }
    }

    pub fn titles(&self) -> Vec<String> {
        self.titles.lock().unwrap().clone()
    }

    /// Entity bound to each form when it was shown
    pub fn opened_with(&self) -> Vec<F::Entity> {
        self.opened_with.lock().unwrap().clone()
    }
}

#[async_trait]
impl<F: EntityForm> DialogHost<F> for ScriptedDialog<F> {
    async fn show_and_wait(&self, title: &str, form: &mut FormController<F>) {
        self.titles.lock().unwrap().push(title.to_string());
        if let Some(entity) = form.entity() {
            self.opened_with.lock().unwrap().push(entity.clone());
        }
        (self.edit)(form.view_mut());
        if self.submit {
            let _ = form.submit().await;
        }
        form.cancel();
    }
}
