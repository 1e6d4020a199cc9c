//! # Registrar Models
//!
//! Records, request/response DTOs and the pure mapping between them.
//!
//! # Modules
//!
//! - [`ids`]: strongly-typed course and student ids
//! - [`courses`]: course record and DTOs
//! - [`students`]: student record, DTOs and age computation
//! - [`query`]: field selectors and sort order for student lists

pub mod courses;
pub mod ids;
pub mod query;
pub mod students;

pub use courses::{Course, CourseAddRequest, CourseResponse};
pub use ids::{CourseId, StudentId};
pub use query::{SortOrder, StudentField, StudentQuery};
pub use students::{
    Gender, Student, StudentAddRequest, StudentDetails, StudentResponse, StudentUpdateRequest,
    compute_age,
};
