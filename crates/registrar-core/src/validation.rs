//! Aggregation of field-level validation failures.
//!
//! Request types derive [`validator::Validate`]; this module turns the
//! resulting [`ValidationErrors`] into a flat, deterministically ordered list
//! of [`FieldViolation`]s so callers can present every problem at once.

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::errors::{RegistryError, RegistryResult};

/// One violated constraint on one request field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Error codes meaning "nothing was entered". When one of them fires, the
/// remaining rules on that field are not reported.
const BLANK_CODES: [&str; 2] = ["required", "blank"];

/// Rejects strings that are empty or only whitespace.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message(Cow::Borrowed("must not be blank")));
    }
    Ok(())
}

fn is_blank_error(error: &ValidationError) -> bool {
    BLANK_CODES.iter().any(|code| error.code == *code)
}

/// Flatten validator output, sorted by field then message.
///
/// A field reported as blank carries only its blank message.
pub fn collect_violations(errors: &ValidationErrors) -> Vec<FieldViolation> {
    let mut violations: Vec<FieldViolation> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            let blank = errors.iter().any(is_blank_error);
            errors
                .iter()
                .filter(move |error| !blank || is_blank_error(error))
                .map(move |error| {
                    let message = error
                        .message
                        .as_ref()
                        .map(|msg| msg.to_string())
                        .unwrap_or_else(|| format!("{} is invalid", field));
                    FieldViolation::new(field.to_string(), message)
                })
        })
        .collect();

    violations.sort_by(|a, b| a.field.cmp(&b.field).then_with(|| a.message.cmp(&b.message)));
    violations
}

pub fn format_violations(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(|violation| violation.message.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Run every rule on `request`, failing with all violations at once.
pub fn validate_request<T: Validate>(request: &T) -> RegistryResult<()> {
    request.validate().map_err(RegistryError::from)
}

/// Unwrap a field that validation has already proven present.
pub fn required<T>(value: Option<T>, field: &'static str) -> RegistryResult<T> {
    value.ok_or_else(|| {
        RegistryError::Validation(vec![FieldViolation::new(field, format!("{} is required", field))])
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Validate)]
    struct Probe {
        #[validate(
            required(message = "Name can't be blank"),
            length(min = 1, message = "Name can't be blank")
        )]
        name: Option<String>,
        #[validate(email(message = "Email should be a valid email"))]
        email: Option<String>,
        #[validate(length(min = 3))]
        code: String,
    }

    #[test]
    fn test_collects_every_violation() {
        let probe = Probe {
            name: None,
            email: Some("not-an-email".to_string()),
            code: "x".to_string(),
        };

        let err = validate_request(&probe).unwrap_err();
        let violations = err.violations();

        assert_eq!(violations.len(), 3);
        assert_eq!(violations[0].field, "code");
        assert_eq!(violations[0].message, "code is invalid");
        assert_eq!(violations[1].field, "email");
        assert_eq!(violations[1].message, "Email should be a valid email");
        assert_eq!(violations[2].field, "name");
        assert_eq!(violations[2].message, "Name can't be blank");
    }

    #[test]
    fn test_valid_request_passes() {
        let probe = Probe {
            name: Some("Anna".to_string()),
            email: Some("anna@example.com".to_string()),
            code: "abc".to_string(),
        };
        assert!(validate_request(&probe).is_ok());
    }

    #[test]
    fn test_required_unwraps_present_value() {
        assert_eq!(required(Some(5), "age").unwrap(), 5);
        let err = required::<u8>(None, "age").unwrap_err();
        assert_eq!(err.violations()[0].field, "age");
    }

    #[derive(Validate)]
    struct Contact {
        #[validate(
            required(message = "Email can't be blank"),
            custom(function = "not_blank", message = "Email can't be blank"),
            email(message = "Email should be a valid email")
        )]
        email: Option<String>,
    }

    #[test]
    fn test_not_blank_rejects_whitespace() {
        assert!(not_blank("Anna").is_ok());
        assert!(not_blank(" Anna ").is_ok());
        assert_eq!(not_blank("").unwrap_err().code, "blank");
        assert_eq!(not_blank(" \t ").unwrap_err().code, "blank");
    }

    #[test]
    fn test_blank_field_reports_only_blank_message() {
        for value in ["", "   "] {
            let contact = Contact {
                email: Some(value.to_string()),
            };
            let err = validate_request(&contact).unwrap_err();
            assert_eq!(
                err.violations(),
                [FieldViolation::new("email", "Email can't be blank")],
                "{value:?}"
            );
        }
    }

    #[test]
    fn test_filled_field_keeps_format_violation() {
        let contact = Contact {
            email: Some("not-an-email".to_string()),
        };
        let err = validate_request(&contact).unwrap_err();
        assert_eq!(
            err.violations(),
            [FieldViolation::new("email", "Email should be a valid email")]
        );
    }

    #[test]
    fn test_violation_display() {
        let violation = FieldViolation::new("gender", "Please select a gender");
        assert_eq!(violation.to_string(), "gender: Please select a gender");
    }
}
