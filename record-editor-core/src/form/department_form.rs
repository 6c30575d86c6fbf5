//! Department edit form

use async_trait::async_trait;

use super::widgets::{ErrorLabel, InputConstraint, TextField};
use super::{field, EntityForm};
use crate::config::EditorConfig;
use crate::types::{id_cell, Department, ValidationResult};
use crate::utils::try_parse_int;

/// Widgets of the department form
#[derive(Debug, Clone)]
pub struct DepartmentForm {
    pub id: TextField,
    pub name: TextField,
    pub name_error: ErrorLabel,
}

#[async_trait]
impl EntityForm for DepartmentForm {
    type Entity = Department;
    type Lookups = ();

    fn new(config: &EditorConfig) -> Self {
        Self {
            id: TextField::new(InputConstraint::Integer),
            name: TextField::new(InputConstraint::MaxLength(config.department_name_max_length)),
            name_error: ErrorLabel::default(),
        }
    }

    fn title(config: &EditorConfig) -> &str {
        &config.department_dialog_title
    }

    fn update_form_data(&mut self, entity: &Department) {
        self.id.set_text(id_cell(entity.id));
        self.name.set_text(entity.name.clone());
    }

    fn update_entity_values(&self, entity: &mut Department) -> ValidationResult {
        let mut errors = ValidationResult::new();

        entity.id = try_parse_int(self.id.text());

        errors.require_text(field::NAME, self.name.text());
        entity.name = self.name.text().to_string();

        errors
    }

    fn set_error_messages(&mut self, errors: &ValidationResult) {
        self.name_error.show(errors.get(field::NAME));
    }
}
