//! Editor configuration
//!
//! Fixed display formats and field limits shared by forms and lists.
//! Loaded from camelCase JSON; missing keys keep their defaults.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::CoreResult;

/// Editor configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EditorConfig {
    /// `chrono` format string for calendar dates (dd/MM/yyyy)
    pub date_format: String,
    /// Decimal places shown for salaries
    pub salary_decimals: usize,
    pub department_name_max_length: usize,
    pub seller_name_max_length: usize,
    pub seller_email_max_length: usize,
    pub department_dialog_title: String,
    pub seller_dialog_title: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            date_format: "%d/%m/%Y".to_string(),
            salary_decimals: 2,
            department_name_max_length: 30,
            seller_name_max_length: 70,
            seller_email_max_length: 60,
            department_dialog_title: "Enter Department Data".to_string(),
            seller_dialog_title: "Enter Seller Data".to_string(),
        }
    }
}

impl EditorConfig {
    /// Parses a JSON configuration document.
    pub fn from_json(json: &str) -> CoreResult<Self> {
        let config = serde_json::from_str(json)?;
        Ok(config)
    }

    pub fn format_date(&self, date: NaiveDate) -> String {
        date.format(&self.date_format).to_string()
    }

    /// Parses text written in [`Self::date_format`].
    pub fn parse_date(&self, text: &str) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(text.trim(), &self.date_format).ok()
    }

    pub fn format_salary(&self, salary: f64) -> String {
        format!("{salary:.prec$}", prec = self.salary_decimals)
    }
}
