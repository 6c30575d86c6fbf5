//! Field-level validation result

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

/// Message recorded for a required field left blank.
pub const EMPTY_FIELD_MESSAGE: &str = "Field can't be empty";

/// Errors collected by one validation pass, keyed by field name.
///
/// An empty result means the pass succeeded. Every failing field is recorded
/// before the pass reports anything, so a form can show all messages at once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationResult {
    errors: BTreeMap<String, String>,
}

impl ValidationResult {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an error for `field`, replacing any earlier message for it.
    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.insert(field.into(), message.into());
    }

    /// Records [`EMPTY_FIELD_MESSAGE`] for `field` when `value` is blank.
    ///
    /// Returns whether an error was recorded.
    pub fn require_text(&mut self, field: &str, value: &str) -> bool {
        if value.trim().is_empty() {
            self.add_error(field, EMPTY_FIELD_MESSAGE);
            true
        } else {
            false
        }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Failing field names in sorted order
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.errors.keys().map(String::as_str)
    }

    pub fn errors(&self) -> &BTreeMap<String, String> {
        &self.errors
    }

    /// Converts the pass into a `Result`: `Ok` when nothing failed.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in &self.errors {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn empty_result_is_success() {
        let result = ValidationResult::new();
        assert!(result.is_empty());
        assert_eq!(result.into_result(), Ok(()));
    }

    #[test]
    fn require_text_treats_whitespace_as_blank() {
        let mut result = ValidationResult::new();
        assert!(result.require_text("Name", "   "));
        assert!(!result.require_text("Email", "ana@mail.com"));

        assert_eq!(result.len(), 1);
        assert_eq!(result.get("Name"), Some(EMPTY_FIELD_MESSAGE));
        assert!(!result.contains("Email"));
    }

    #[test]
    fn field_keys_stay_unique() {
        let mut result = ValidationResult::new();
        result.add_error("Name", "first");
        result.add_error("Name", "second");

        assert_eq!(result.len(), 1);
        assert_eq!(result.get("Name"), Some("second"));
    }

    #[test]
    fn display_lists_every_field() {
        let mut result = ValidationResult::new();
        result.add_error("Name", EMPTY_FIELD_MESSAGE);
        result.add_error("Email", EMPTY_FIELD_MESSAGE);

        assert_eq!(
            result.to_string(),
            "Email: Field can't be empty; Name: Field can't be empty"
        );
    }
}
