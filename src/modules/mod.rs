//! Record registries.
//!
//! - [`courses`]: the course registry
//! - [`students`]: the student registry and the list query engine

pub mod courses;
pub mod students;
