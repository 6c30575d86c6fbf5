//! Seller edit form

use std::sync::Arc;

use async_trait::async_trait;

use super::widgets::{ComboBox, DatePicker, ErrorLabel, InputConstraint, TextField};
use super::{field, EntityForm};
use crate::config::EditorConfig;
use crate::error::CoreResult;
use crate::traits::EntityService;
use crate::types::{id_cell, Department, Seller, ValidationResult, EMPTY_FIELD_MESSAGE};
use crate::utils::datetime::{local_date, start_of_day_utc};
use crate::utils::{try_parse_decimal, try_parse_int};

/// Widgets of the seller form
#[derive(Debug, Clone)]
pub struct SellerForm {
    pub id: TextField,
    pub name: TextField,
    pub email: TextField,
    pub birth_date: DatePicker,
    pub base_salary: TextField,
    /// Filled by `load_associated_objects`
    pub department: ComboBox<Department>,
    pub name_error: ErrorLabel,
    pub email_error: ErrorLabel,
    pub birth_date_error: ErrorLabel,
    pub base_salary_error: ErrorLabel,
    config: EditorConfig,
}

#[async_trait]
impl EntityForm for SellerForm {
    type Entity = Seller;
    /// Department lookup feeding the combo box
    type Lookups = Arc<dyn EntityService<Department>>;

    fn new(config: &EditorConfig) -> Self {
        Self {
            id: TextField::new(InputConstraint::Integer),
            name: TextField::new(InputConstraint::MaxLength(config.seller_name_max_length)),
            email: TextField::new(InputConstraint::MaxLength(config.seller_email_max_length)),
            birth_date: DatePicker::new(config.date_format.clone()),
            base_salary: TextField::new(InputConstraint::Decimal),
            department: ComboBox::new(|d: &Department| d.name.clone()),
            name_error: ErrorLabel::default(),
            email_error: ErrorLabel::default(),
            birth_date_error: ErrorLabel::default(),
            base_salary_error: ErrorLabel::default(),
            config: config.clone(),
        }
    }

    fn title(config: &EditorConfig) -> &str {
        &config.seller_dialog_title
    }

    fn update_form_data(&mut self, entity: &Seller) {
        self.id.set_text(id_cell(entity.id));
        self.name.set_text(entity.name.clone());
        self.email.set_text(entity.email.clone());
        self.base_salary.set_text(
            entity
                .base_salary
                .map(|salary| self.config.format_salary(salary))
                .unwrap_or_default(),
        );
        self.birth_date.set_value(entity.birth_date.map(local_date));
        self.department.set_value(entity.department.clone());
    }

    fn update_entity_values(&self, entity: &mut Seller) -> ValidationResult {
        let mut errors = ValidationResult::new();

        entity.id = try_parse_int(self.id.text());

        errors.require_text(field::NAME, self.name.text());
        entity.name = self.name.text().to_string();

        errors.require_text(field::EMAIL, self.email.text());
        entity.email = self.email.text().to_string();

        match self.birth_date.value() {
            Some(date) => entity.birth_date = Some(start_of_day_utc(date)),
            None => errors.add_error(field::BIRTH_DATE, EMPTY_FIELD_MESSAGE),
        }

        // Unparsable salary text is stored as `None` without an error; only blank text fails.
        errors.require_text(field::BASE_SALARY, self.base_salary.text());
        entity.base_salary = try_parse_decimal(self.base_salary.text());

        entity.department = self.department.value().cloned();

        errors
    }

    fn set_error_messages(&mut self, errors: &ValidationResult) {
        self.name_error.show(errors.get(field::NAME));
        self.email_error.show(errors.get(field::EMAIL));
        self.birth_date_error.show(errors.get(field::BIRTH_DATE));
        self.base_salary_error.show(errors.get(field::BASE_SALARY));
    }

    async fn load_associated_objects(&mut self, lookups: &Self::Lookups) -> CoreResult<()> {
        let departments = lookups.find_all().await?;
        log::debug!("Loaded {} department(s) for seller form", departments.len());
        self.department.set_items(departments);
        Ok(())
    }
}
