//! `EntityService<Department>` over the in-memory tables

use std::sync::Arc;

use async_trait::async_trait;
use record_editor_core::error::{CoreError, CoreResult};
use record_editor_core::traits::EntityService;
use record_editor_core::types::Department;

use super::{no_rows_affected, MemoryStore};

/// Department table handle
pub struct DepartmentRepository {
    store: Arc<MemoryStore>,
}

impl DepartmentRepository {
    #[must_use]
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl EntityService<Department> for DepartmentRepository {
    async fn find_all(&self) -> CoreResult<Vec<Department>> {
        self.store.check_find_all().await?;
        Ok(self
            .store
            .tables
            .read()
            .await
            .departments
            .values()
            .cloned()
            .collect())
    }

    async fn save_or_update(&self, department: &mut Department) -> CoreResult<()> {
        self.store.check_save().await?;
        let mut tables = self.store.tables.write().await;

        match department.id {
            None => {
                tables.insert_department(department);
                log::debug!("Inserted department {:?}", department.id);
            }
            Some(id) => {
                let row = tables.departments.get_mut(&id).ok_or_else(no_rows_affected)?;
                *row = department.clone();
                log::debug!("Updated department {id}");
            }
        }
        Ok(())
    }

    async fn remove(&self, department: &Department) -> CoreResult<()> {
        let Some(id) = department.id else {
            return Ok(());
        };
        let mut tables = self.store.tables.write().await;

        let referencing = tables.sellers_in(id);
        if referencing > 0 {
            return Err(CoreError::Integrity(format!(
                "Department \"{}\" is still referenced by {referencing} seller(s)",
                department.name
            )));
        }
        tables.departments.remove(&id);
        Ok(())
    }
}
