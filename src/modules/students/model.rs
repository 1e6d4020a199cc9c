//! Student data models and DTOs.
//!
//! This module re-exports student models from the `registrar-models` crate
//! together with the list-query selectors.

pub use registrar_models::query::*;
pub use registrar_models::students::*;
