//! In-memory store.
//!
//! A single `MemoryStore` holds the department and seller tables and hands
//! out `EntityService` handles for both. Sellers reference departments by id,
//! and that reference is enforced on save and on department removal.

mod department_repo;
mod seller_repo;

pub use department_repo::DepartmentRepository;
pub use seller_repo::SellerRepository;

use std::collections::BTreeMap;
use std::sync::Arc;

use record_editor_core::error::{CoreError, CoreResult};
use record_editor_core::traits::EntityService;
use record_editor_core::types::{Department, Seller};
use tokio::sync::RwLock;

/// Stored seller: the record without its department, plus the department id.
#[derive(Debug, Clone)]
pub(crate) struct SellerRow {
    pub seller: Seller,
    pub department_id: Option<i32>,
}

#[derive(Debug)]
pub(crate) struct Tables {
    pub departments: BTreeMap<i32, Department>,
    pub sellers: BTreeMap<i32, SellerRow>,
    pub next_department_id: i32,
    pub next_seller_id: i32,
}

impl Tables {
    fn new() -> Self {
        Self {
            departments: BTreeMap::new(),
            sellers: BTreeMap::new(),
            next_department_id: 1,
            next_seller_id: 1,
        }
    }

    /// Inserts a department under the next free id and writes the id back.
    pub fn insert_department(&mut self, department: &mut Department) {
        let id = self.next_department_id;
        self.next_department_id += 1;
        department.id = Some(id);
        self.departments.insert(id, department.clone());
    }

    /// Number of sellers pointing at `department_id`
    pub fn sellers_in(&self, department_id: i32) -> usize {
        self.sellers
            .values()
            .filter(|row| row.department_id == Some(department_id))
            .count()
    }
}

/// In-memory store for departments and sellers.
pub struct MemoryStore {
    pub(crate) tables: RwLock<Tables>,
    /// If `Some`, the next save fails with this message
    fail_next_save: RwLock<Option<String>>,
    /// If `Some`, the next `find_all` fails with this message
    fail_next_find_all: RwLock<Option<String>>,
}

impl MemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::from_tables(Tables::new())
    }

    /// Create a store seeded with Books, Computers and Electronics (ids 1-3).
    #[must_use]
    pub fn with_default_departments() -> Self {
        let mut tables = Tables::new();
        for name in ["Books", "Computers", "Electronics"] {
            tables.insert_department(&mut Department::new(None, name));
        }
        Self::from_tables(tables)
    }

    fn from_tables(tables: Tables) -> Self {
        Self {
            tables: RwLock::new(tables),
            fail_next_save: RwLock::new(None),
            fail_next_find_all: RwLock::new(None),
        }
    }

    /// Department service handle
    #[must_use]
    pub fn departments(self: &Arc<Self>) -> Arc<dyn EntityService<Department>> {
        Arc::new(DepartmentRepository::new(Arc::clone(self)))
    }

    /// Seller service handle
    #[must_use]
    pub fn sellers(self: &Arc<Self>) -> Arc<dyn EntityService<Seller>> {
        Arc::new(SellerRepository::new(Arc::clone(self)))
    }

    /// Make the next save (of either table) fail with a persistence error.
    pub async fn fail_next_save(&self, message: impl Into<String>) {
        *self.fail_next_save.write().await = Some(message.into());
    }

    /// Make the next `find_all` (of either table) fail with a persistence error.
    pub async fn fail_next_find_all(&self, message: impl Into<String>) {
        *self.fail_next_find_all.write().await = Some(message.into());
    }

    pub(crate) async fn check_save(&self) -> CoreResult<()> {
        match self.fail_next_save.write().await.take() {
            Some(msg) => Err(CoreError::Persistence(msg)),
            None => Ok(()),
        }
    }

    pub(crate) async fn check_find_all(&self) -> CoreResult<()> {
        match self.fail_next_find_all.write().await.take() {
            Some(msg) => Err(CoreError::Persistence(msg)),
            None => Ok(()),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Error returned when an update targets a row that does not exist.
pub(crate) fn no_rows_affected() -> CoreError {
    CoreError::Persistence("Unexpected error! No rows affected!".to_string())
}
