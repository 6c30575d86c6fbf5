//! Modal dialog host abstract Trait

use async_trait::async_trait;

use crate::form::{EntityForm, FormController};

/// Shows an edit form as a modal dialog.
///
/// The host owns the window: it renders `form`, feeds user input into
/// [`FormController::view_mut`], and calls [`FormController::submit`] or
/// [`FormController::cancel`] on the matching buttons. It must return only
/// once the form is closed (`!form.is_open()`), which keeps the parent list
/// inert for the lifetime of the dialog.
#[async_trait]
pub trait DialogHost<F: EntityForm>: Send + Sync {
    async fn show_and_wait(&self, title: &str, form: &mut FormController<F>);
}
