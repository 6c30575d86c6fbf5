//! Storage and presentation adapters for headless frontends and tests.

mod headless_alerts;
mod memory;

pub use headless_alerts::HeadlessAlerts;
pub use memory::{DepartmentRepository, MemoryStore, SellerRepository};
