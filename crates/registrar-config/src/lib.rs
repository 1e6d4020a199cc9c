//! # Registrar Config
//!
//! Configuration loaded from environment variables.
//!
//! - [`app`]: registry seeding and logging configuration
//!
//! # Example
//!
//! ```ignore
//! use registrar_config::RegistrarConfig;
//!
//! let config = RegistrarConfig::from_env();
//! if config.seed_demo_data {
//!     println!("starting with demo records");
//! }
//! ```

pub mod app;

// Re-export commonly used types at crate root
pub use app::RegistrarConfig;
