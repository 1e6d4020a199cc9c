//! # Registrar Core
//!
//! Core types shared by every Registrar crate.
//!
//! - [`errors`]: the typed error returned by registry operations
//! - [`validation`]: aggregation of field-level validation failures
//! - [`serde`]: custom serde deserialization helpers
//!
//! # Example
//!
//! ```ignore
//! use registrar_core::{RegistryError, RegistryResult};
//!
//! fn lookup(id: Option<u32>) -> RegistryResult<u32> {
//!     id.ok_or(RegistryError::InvalidArgument("id"))
//! }
//! ```

pub mod errors;
pub mod serde;
pub mod validation;

// Re-export commonly used types at crate root
pub use errors::{RegistryError, RegistryResult};
pub use validation::{FieldViolation, validate_request};
