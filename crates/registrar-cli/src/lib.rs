//! # Registrar CLI
//!
//! Fake-data seeding used by the `registrar-cli` binary.
//!
//! ## Usage
//!
//! ```ignore
//! use registrar_cli::seeder::{generate_students, seed_students};
//!
//! let requests = generate_students(50, &course_ids);
//! let added = seed_students(&state.students, requests)?;
//! ```

pub mod seeder;
