//! Configuration loading and merging logic.
//!
//! # Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.veil/config.toml`
//! 3. **Project config** - `./.veil/config.toml`
//! 4. **CLI arguments** - Command-line flags (highest priority)

use crate::config::types::{CursorConfig, VeilConfig};
use crate::config::validation::validate_config;
use crate::errors::ConfigError;
use std::fs;
use std::io;
use std::path::Path;

/// Check if an error means the config file simply does not exist.
fn is_file_not_found(e: &ConfigError) -> bool {
    matches!(e, ConfigError::IoError { source } if source.kind() == io::ErrorKind::NotFound)
}

/// Load configuration from the hierarchy of config files.
///
/// # Errors
///
/// Returns an error if a config file cannot be read or parsed, or if
/// validation fails. Missing config files are not errors.
pub fn load_hierarchy() -> Result<VeilConfig, ConfigError> {
    let mut config = VeilConfig::default();

    match load_user_config() {
        Ok(user_config) => config = merge_configs(config, user_config),
        Err(e) if !is_file_not_found(&e) => return Err(e),
        Err(_) => {}
    }

    match load_project_config() {
        Ok(project_config) => config = merge_configs(config, project_config),
        Err(e) if !is_file_not_found(&e) => return Err(e),
        Err(_) => {}
    }

    validate_config(&config)?;

    Ok(config)
}

/// Load the user configuration from ~/.veil/config.toml.
fn load_user_config() -> Result<VeilConfig, ConfigError> {
    let home_dir = dirs::home_dir()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "Could not find home directory"))?;
    load_config_file(&home_dir.join(".veil").join("config.toml"))
}

/// Load the project configuration from ./.veil/config.toml.
fn load_project_config() -> Result<VeilConfig, ConfigError> {
    let config_path = std::env::current_dir()?.join(".veil").join("config.toml");
    load_config_file(&config_path)
}

/// Load a configuration file from the given path.
///
/// # Errors
///
/// Returns `ConfigError::IoError` if the file cannot be read (including
/// when it is missing) and `ConfigError::ConfigParseError` if it is not
/// valid TOML for [`VeilConfig`].
pub fn load_config_file(path: &Path) -> Result<VeilConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    toml::from_str(&content).map_err(|e| ConfigError::ConfigParseError {
        message: format!("'{}': {}", path.display(), e),
    })
}

/// Merge two configurations, with override_config taking precedence.
///
/// Fields unset in the override fall back to the base value.
pub fn merge_configs(base: VeilConfig, override_config: VeilConfig) -> VeilConfig {
    VeilConfig {
        cursor: CursorConfig {
            backend: override_config.cursor.backend.or(base.cursor.backend),
            background_hide: override_config
                .cursor
                .background_hide
                .or(base.cursor.background_hide),
            hold_ms: override_config.cursor.hold_ms.or(base.cursor.hold_ms),
        },
    }
}
