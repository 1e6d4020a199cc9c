use tracing::warn;

/// Runtime configuration for the registries and their host process.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegistrarConfig {
    /// Pre-populate the registries with the fixed demo courses and students.
    pub seed_demo_data: bool,
    /// Default log level when `RUST_LOG` is not set.
    pub log_level: String,
}

impl Default for RegistrarConfig {
    fn default() -> Self {
        Self {
            seed_demo_data: true,
            log_level: "info".to_string(),
        }
    }
}

impl RegistrarConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source; unset or unparsable values
    /// fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            seed_demo_data: lookup("REGISTRAR_SEED_DEMO_DATA")
                .and_then(|v| parse_bool("REGISTRAR_SEED_DEMO_DATA", &v))
                .unwrap_or(defaults.seed_demo_data),
            log_level: lookup("LOG_LEVEL")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.log_level),
        }
    }
}

fn parse_bool(key: &str, value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        other => {
            warn!(key, value = other, "Ignoring unrecognised boolean value");
            None
        }
    }
}
