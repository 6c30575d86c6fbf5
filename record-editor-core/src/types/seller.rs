//! Seller record

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{id_cell, Department, Entity};
use crate::config::EditorConfig;
use crate::utils::datetime::local_date;

/// Seller
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seller {
    /// Seller ID (unset until first saved)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    /// Birth date, stored as the start of the local calendar day
    #[serde(default, with = "crate::utils::datetime::option")]
    pub birth_date: Option<DateTime<Utc>>,
    /// `None` when the salary text could not be parsed
    #[serde(default)]
    pub base_salary: Option<f64>,
    #[serde(default)]
    pub department: Option<Department>,
}

impl Entity for Seller {
    const KIND: &'static str = "Seller";

    fn id(&self) -> Option<i32> {
        self.id
    }

    fn set_id(&mut self, id: Option<i32>) {
        self.id = id;
    }

    fn columns() -> &'static [&'static str] {
        &["Id", "Name", "Email", "BirthDate", "BaseSalary"]
    }

    fn display_fields(&self, config: &EditorConfig) -> Vec<String> {
        let birth_date = self
            .birth_date
            .map(|dt| config.format_date(local_date(dt)))
            .unwrap_or_default();
        let base_salary = self
            .base_salary
            .map(|salary| config.format_salary(salary))
            .unwrap_or_default();

        vec![
            id_cell(self.id),
            self.name.clone(),
            self.email.clone(),
            birth_date,
            base_salary,
        ]
    }
}
