//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

use crate::types::ValidationResult;

/// Core layer error type
#[derive(Error, Debug, Clone, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// One or more fields failed validation (all failing fields are listed)
    #[error("Validation error: {0}")]
    Validation(ValidationResult),

    /// Generic save/load error reported by a service
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// Removal blocked because the record is still referenced elsewhere
    #[error("Integrity error: {0}")]
    Integrity(String),

    /// A required collaborator was never bound (wiring bug)
    #[error("{0} was not bound")]
    NotBound(&'static str),

    /// Configuration could not be parsed
    #[error("Config error: {0}")]
    Config(String),
}

impl CoreError {
    /// Whether it is expected behavior (user input, referenced record), used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::Integrity(_))
    }

    /// Whether the user can retry or cancel after this error.
    ///
    /// Only a missing binding is unrecoverable: it means the controllers were wired wrongly.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::NotBound(_))
    }

    /// Message shown to the user, without the variant prefix.
    #[must_use]
    pub fn detail(&self) -> String {
        match self {
            Self::Persistence(msg) | Self::Integrity(msg) | Self::Config(msg) => msg.clone(),
            other => other.to_string(),
        }
    }

    /// Logs the error at the level matching [`Self::is_expected`].
    pub fn log(&self, context: &str) {
        if self.is_expected() {
            log::warn!("{context}: {self}");
        } else {
            log::error!("{context}: {self}");
        }
    }
}

impl From<ValidationResult> for CoreError {
    fn from(result: ValidationResult) -> Self {
        Self::Validation(result)
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn classifies_expected_errors() {
        let mut errors = ValidationResult::new();
        errors.add_error("Name", "Field can't be empty");

        assert!(CoreError::Validation(errors).is_expected());
        assert!(CoreError::Integrity("in use".to_string()).is_expected());
        assert!(!CoreError::Persistence("disk full".to_string()).is_expected());
        assert!(!CoreError::NotBound("service").is_expected());
    }

    #[test]
    fn only_missing_binding_is_unrecoverable() {
        assert!(CoreError::Persistence("timeout".to_string()).is_recoverable());
        assert!(CoreError::Integrity("in use".to_string()).is_recoverable());
        assert!(!CoreError::NotBound("service").is_recoverable());
    }

    #[test]
    fn detail_strips_prefix() {
        let err = CoreError::Integrity("Department is in use".to_string());
        assert_eq!(err.detail(), "Department is in use");
        assert_eq!(err.to_string(), "Integrity error: Department is in use");
    }

    #[test]
    fn serializes_with_code_tag() {
        let err = CoreError::Persistence("boom".to_string());
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "Persistence");
        assert_eq!(json["details"], "boom");
    }
}
