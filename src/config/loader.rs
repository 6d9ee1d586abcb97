//! Configuration resolution: file loading and environment overrides.

use std::fs;
use std::path::Path;

use crate::config::schema::GatewayConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Environment variable naming an optional TOML config file.
pub const CONFIG_PATH_ENV: &str = "GATEWAY_CONFIG";

/// Environment variable overriding the listen port.
pub const PORT_ENV: &str = "PORT";

/// Environment variable overriding the computation service base URL.
pub const DOWNSTREAM_ENV: &str = "PYTHON_BASE_URL";

/// Error type for configuration resolution.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Load configuration from a TOML file. No validation; callers validate
/// after environment overrides have been applied.
pub fn load_config(path: &Path) -> Result<GatewayConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    toml::from_str(&content).map_err(ConfigError::Parse)
}

/// Resolve the effective configuration for this process.
///
/// Starts from defaults (or the file named by `GATEWAY_CONFIG`), applies
/// environment overrides, then validates. The result is immutable for the
/// lifetime of the process.
pub fn resolve_config() -> Result<GatewayConfig, ConfigError> {
    let mut config = match std::env::var(CONFIG_PATH_ENV) {
        Ok(path) => load_config(Path::new(&path))?,
        Err(_) => GatewayConfig::default(),
    };

    apply_env_overrides(&mut config);
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Apply `PORT` and `PYTHON_BASE_URL` overrides from the process environment.
pub fn apply_env_overrides(config: &mut GatewayConfig) {
    apply_overrides_from(config, |key| std::env::var(key).ok());
}

fn apply_overrides_from<F>(config: &mut GatewayConfig, get: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(raw) = get(PORT_ENV) {
        match raw.parse::<u16>() {
            Ok(port) => config.listener.bind_address = format!("0.0.0.0:{}", port),
            Err(_) => tracing::warn!(value = %raw, "Ignoring unparseable PORT override"),
        }
    }

    if let Some(base_url) = get(DOWNSTREAM_ENV) {
        config.downstream.base_url = base_url;
    }
}
