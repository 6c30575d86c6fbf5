//! `EntityService<Seller>` over the in-memory tables

use std::sync::Arc;

use async_trait::async_trait;
use record_editor_core::error::{CoreError, CoreResult};
use record_editor_core::traits::EntityService;
use record_editor_core::types::Seller;

use super::{no_rows_affected, MemoryStore, SellerRow};

/// Seller table handle
///
/// Rows come back joined with the current department record.
pub struct SellerRepository {
    store: Arc<MemoryStore>,
}

impl SellerRepository {
    #[must_use]
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl EntityService<Seller> for SellerRepository {
    async fn find_all(&self) -> CoreResult<Vec<Seller>> {
        self.store.check_find_all().await?;
        let tables = self.store.tables.read().await;

        Ok(tables
            .sellers
            .values()
            .map(|row| Seller {
                department: row
                    .department_id
                    .and_then(|id| tables.departments.get(&id))
                    .cloned(),
                ..row.seller.clone()
            })
            .collect())
    }

    async fn save_or_update(&self, seller: &mut Seller) -> CoreResult<()> {
        self.store.check_save().await?;
        let mut tables = self.store.tables.write().await;

        let department_id = seller.department.as_ref().and_then(|d| d.id);
        if let Some(department_id) = department_id {
            if !tables.departments.contains_key(&department_id) {
                return Err(CoreError::Persistence(format!(
                    "Department {department_id} does not exist"
                )));
            }
        }

        let id = match seller.id {
            Some(id) if tables.sellers.contains_key(&id) => id,
            Some(_) => return Err(no_rows_affected()),
            None => {
                let id = tables.next_seller_id;
                tables.next_seller_id += 1;
                seller.id = Some(id);
                id
            }
        };

        let row = SellerRow {
            seller: Seller {
                department: None,
                ..seller.clone()
            },
            department_id,
        };
        tables.sellers.insert(id, row);
        log::debug!("Saved seller {id}");
        Ok(())
    }

    async fn remove(&self, seller: &Seller) -> CoreResult<()> {
        if let Some(id) = seller.id {
            self.store.tables.write().await.sellers.remove(&id);
        }
        Ok(())
    }
}
