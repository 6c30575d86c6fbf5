//! Domain types

mod department;
mod seller;
mod validation;

pub use department::Department;
pub use seller::Seller;
pub use validation::{ValidationResult, EMPTY_FIELD_MESSAGE};

use std::fmt::Debug;

use crate::config::EditorConfig;

/// A record with an optional identity that can be listed and edited.
///
/// `id() == None` marks a record that has never been persisted; the service
/// assigns the id on the first save.
pub trait Entity: Clone + Debug + Default + PartialEq + Send + Sync + 'static {
    /// Entity kind, used in log lines and alert titles
    const KIND: &'static str;

    fn id(&self) -> Option<i32>;

    fn set_id(&mut self, id: Option<i32>);

    /// Table column headers
    fn columns() -> &'static [&'static str];

    /// Table cells, one per entry of [`Entity::columns`]
    fn display_fields(&self, config: &EditorConfig) -> Vec<String>;

    /// Whether both values denote the same persisted record
    fn same_identity(&self, other: &Self) -> bool {
        self.id().is_some() && self.id() == other.id()
    }
}

/// Renders an optional id the way list cells show it.
pub(crate) fn id_cell(id: Option<i32>) -> String {
    id.map(|id| id.to_string()).unwrap_or_default()
}
