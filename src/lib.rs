//! # Registrar
//!
//! In-memory registries for courses and students, with the filter/sort
//! engine used to present student lists.
//!
//! ## Overview
//!
//! - **Courses** are append-only and uniquely named.
//! - **Students** carry a weak reference to a course. Reads join the course
//!   name and compute the age at read time; neither is stored.
//! - **Queries** filter and sort materialized student responses.
//!
//! ## Architecture
//!
//! ```text
//! crates/
//! ├── registrar-core/           # RegistryError, validation aggregation
//! ├── registrar-models/         # records, DTOs, ids, query selectors
//! ├── registrar-config/         # env configuration
//! ├── registrar-observability/  # tracing subscriber setup
//! └── registrar-cli/            # demo command line
//! src/
//! ├── modules/
//! │   ├── courses/   # CourseRegistry
//! │   └── students/  # StudentRegistry + query engine
//! ├── seed.rs        # fixed demo records
//! └── state.rs       # shared registries
//! ```
//!
//! ## Concurrency
//!
//! Each registry guards its records with one `RwLock`. Mutations hold the
//! write lock for the whole check-then-write sequence; reads clone a
//! consistent snapshot.
//!
//! ## Example
//!
//! ```ignore
//! use registrar::modules::courses::CourseAddRequest;
//! use registrar::state::init_app_state;
//! use registrar_config::RegistrarConfig;
//!
//! let state = init_app_state(RegistrarConfig::default());
//! let course = state.courses.add_course(Some(CourseAddRequest::new("Rust")))?;
//! ```

pub mod modules;
pub mod seed;
pub mod state;

// Re-export workspace crates for convenience
pub use registrar_config;
pub use registrar_core;
pub use registrar_models;

pub use modules::courses::CourseRegistry;
pub use modules::students::StudentRegistry;
pub use modules::students::query::{filter, sort};
pub use state::{AppState, init_app_state};
