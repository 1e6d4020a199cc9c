//! Course record and DTOs.

use registrar_core::validation::required;
use registrar_core::{RegistryResult, validate_request};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::ids::CourseId;

/// A course as held by the course registry. Immutable once stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    pub course_id: CourseId,
    pub course_name: String,
}

/// Request to create a new course. The id is always server-generated.
#[derive(Deserialize, Debug, Clone, Default, Validate)]
pub struct CourseAddRequest {
    #[validate(
        required(message = "Course Name can't be blank"),
        length(min = 1, message = "Course Name can't be blank")
    )]
    pub course_name: Option<String>,
}

impl CourseAddRequest {
    pub fn new(course_name: impl Into<String>) -> Self {
        Self {
            course_name: Some(course_name.into()),
        }
    }

    /// Validate and hand back the course name.
    pub fn into_course_name(self) -> RegistryResult<String> {
        validate_request(&self)?;
        required(self.course_name, "course_name")
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CourseResponse {
    pub course_id: CourseId,
    pub course_name: String,
}

impl From<&Course> for CourseResponse {
    fn from(course: &Course) -> Self {
        Self {
            course_id: course.course_id,
            course_name: course.course_name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_add_request_valid() {
        let name = CourseAddRequest::new("Rust").into_course_name().unwrap();
        assert_eq!(name, "Rust");
    }

    #[test]
    fn test_course_add_request_missing_name() {
        let err = CourseAddRequest::default().into_course_name().unwrap_err();
        assert_eq!(err.kind(), "validation");
        assert_eq!(err.violations()[0].field, "course_name");
        assert_eq!(err.violations()[0].message, "Course Name can't be blank");
    }

    #[test]
    fn test_course_add_request_empty_name() {
        let err = CourseAddRequest::new("").into_course_name().unwrap_err();
        assert_eq!(err.violations().len(), 1);
    }

    #[test]
    fn test_course_response_from_course() {
        let course = Course {
            course_id: CourseId::new(),
            course_name: "Java".to_string(),
        };
        let response = CourseResponse::from(&course);
        assert_eq!(response.course_id, course.course_id);
        assert_eq!(response.course_name, "Java");
    }
}
