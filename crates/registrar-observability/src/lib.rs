//! Registrar logging setup.
//!
//! Library crates only emit `tracing` events; binaries call
//! [`init_basic_console_logging`] once at startup to print them.

pub mod basic_logging;

pub use basic_logging::{build_env_filter, init_basic_console_logging};
