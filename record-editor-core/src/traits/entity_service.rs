//! Entity persistence abstract Trait

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::types::Entity;

/// Persistence capability for one entity type.
///
/// Platform implementation:
/// - `record-editor-app`: `MemoryStore` handles (in-memory tables)
#[async_trait]
pub trait EntityService<T: Entity>: Send + Sync {
    /// Get all records, in display order
    async fn find_all(&self) -> CoreResult<Vec<T>>;

    /// Save a record (insert or update)
    ///
    /// Assigns `id` when the record had none.
    /// Fails with `CoreError::Persistence` on storage or constraint problems.
    ///
    /// # Arguments
    /// * `entity` - record to save
    async fn save_or_update(&self, entity: &mut T) -> CoreResult<()>;

    /// Delete a record
    ///
    /// Fails with `CoreError::Integrity` when another record still references it.
    ///
    /// # Arguments
    /// * `entity` - record to delete
    async fn remove(&self, entity: &T) -> CoreResult<()>;
}
