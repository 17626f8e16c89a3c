//! Configuration loading from disk.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::ClientConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Environment variable naming an explicit defaults file.
pub const CONFIG_ENV: &str = "RPC_CLIENT_CONFIG";

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(PathBuf, std::io::Error),
    Parse(PathBuf, toml::de::Error),
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(path, e) => write!(f, "failed to read config {}: {}", path.display(), e),
            ConfigError::Parse(path, e) => write!(f, "failed to parse config {}: {}", path.display(), e),
            ConfigError::Validation(errors) => {
                write!(f, "invalid config: ")?;
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

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(_, e) => Some(e),
            ConfigError::Parse(_, e) => Some(e),
            ConfigError::Validation(_) => None,
        }
    }
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<ClientConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
    parse_config(path, &content)
}

/// Parse and validate configuration text read from `path`.
pub fn parse_config(path: &Path, content: &str) -> Result<ClientConfig, ConfigError> {
    let config: ClientConfig =
        toml::from_str(content).map_err(|e| ConfigError::Parse(path.to_path_buf(), e))?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Load the configuration the binary should use.
///
/// An explicit path must exist. Otherwise `$RPC_CLIENT_CONFIG`, then the
/// per-user defaults file are tried, and built-in defaults are used when
/// neither exists.
pub fn load_or_default(explicit: Option<&Path>) -> Result<ClientConfig, ConfigError> {
    if let Some(path) = explicit {
        return load_config(path);
    }

    if let Some(path) = env::var_os(CONFIG_ENV).map(PathBuf::from) {
        return load_config(&path);
    }

    match default_config_path() {
        Some(path) if path.is_file() => {
            tracing::debug!(path = %path.display(), "Loading user defaults");
            load_config(&path)
        }
        _ => Ok(ClientConfig::default()),
    }
}

/// `$XDG_CONFIG_HOME/rpc-client/defaults.toml`, else `~/.config/rpc-client/defaults.toml`.
pub fn default_config_path() -> Option<PathBuf> {
    let base = env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")))?;
    Some(base.join("rpc-client").join("defaults.toml"))
}
