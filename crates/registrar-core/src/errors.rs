//! Error types returned by registry operations.

use thiserror::Error;

use crate::validation::{FieldViolation, format_violations};

/// Result type for registry operations
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Failures surfaced by the course and student registries.
///
/// Every variant is final: nothing at this layer is transient, so callers
/// should never retry an operation that returned one of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// A required top-level argument (request object or id) was absent.
    #[error("{0} is required")]
    InvalidArgument(&'static str),

    /// One or more field constraints failed. Carries every violation.
    #[error("{}", format_violations(.0))]
    Validation(Vec<FieldViolation>),

    /// A uniqueness constraint would be violated.
    #[error("{0}")]
    Conflict(String),

    /// The referenced entity does not exist.
    #[error("{0}")]
    NotFound(String),
}

impl RegistryError {
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// Short, stable name of the error kind, suitable for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidArgument(_) => "invalid_argument",
            Self::Validation(_) => "validation",
            Self::Conflict(_) => "conflict",
            Self::NotFound(_) => "not_found",
        }
    }

    /// The field violations carried by a [`RegistryError::Validation`].
    ///
    /// Empty for every other kind.
    pub fn violations(&self) -> &[FieldViolation] {
        match self {
            Self::Validation(violations) => violations,
            _ => &[],
        }
    }
}

impl From<validator::ValidationErrors> for RegistryError {
    fn from(errors: validator::ValidationErrors) -> Self {
        Self::Validation(crate::validation::collect_violations(&errors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_display() {
        let err = RegistryError::InvalidArgument("student_add_request");
        assert_eq!(err.to_string(), "student_add_request is required");
        assert_eq!(err.kind(), "invalid_argument");
    }

    #[test]
    fn test_validation_display_joins_messages() {
        let err = RegistryError::Validation(vec![
            FieldViolation::new("address", "Address can't be blank"),
            FieldViolation::new("student_name", "Student Name can't be blank"),
        ]);
        assert_eq!(
            err.to_string(),
            "Address can't be blank, Student Name can't be blank"
        );
        assert_eq!(err.violations().len(), 2);
    }

    #[test]
    fn test_violations_empty_for_other_kinds() {
        let err = RegistryError::conflict("Course name already exists");
        assert!(err.violations().is_empty());
        assert_eq!(err.kind(), "conflict");

        let err = RegistryError::not_found("Given student id doesn't exist");
        assert!(err.violations().is_empty());
        assert_eq!(err.to_string(), "Given student id doesn't exist");
    }
}
