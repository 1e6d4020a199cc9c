use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is not set: `log_level` for the registrar
/// crates, `warn` for everything else.
pub fn build_env_filter(log_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "warn,registrar={level},registrar_core={level},registrar_models={level},\
             registrar_config={level},registrar_cli={level}",
            level = log_level
        ))
    })
}

/// Initialize compact console logging to stderr.
///
/// - **Log Level**: `RUST_LOG` if set, otherwise `log_level`
/// - **Format**: compact, with module targets and source locations
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init_basic_console_logging(log_level: &str) {
    let console_layer = fmt::layer()
        .compact()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(true)
        .with_line_number(true)
        .with_filter(build_env_filter(log_level));

    if tracing_subscriber::registry()
        .with(console_layer)
        .try_init()
        .is_err()
    {
        tracing::debug!("Tracing subscriber already installed");
    }
}
