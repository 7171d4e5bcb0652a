//! Configuration validation logic.

use crate::config::types::VeilConfig;
use crate::cursor::registry;
use crate::errors::ConfigError;

/// Validate a VeilConfig, returning an error if any values are invalid.
///
/// # Validation Rules
///
/// - Backend, if set, must be a known backend name
/// - Hold duration must be greater than zero
///
/// # Errors
///
/// Returns `ConfigError::InvalidBackend` if the backend is not recognized.
/// Returns `ConfigError::InvalidConfiguration` if `hold_ms` is zero.
pub fn validate_config(config: &VeilConfig) -> Result<(), ConfigError> {
    if let Some(ref backend) = config.cursor.backend
        && !registry::is_valid_backend(backend)
    {
        return Err(ConfigError::InvalidBackend {
            backend: backend.clone(),
            supported: registry::valid_backend_names().join(", "),
        });
    }

    if config.cursor.hold_ms == Some(0) {
        return Err(ConfigError::InvalidConfiguration {
            message: "cursor.hold_ms must be greater than 0".to_string(),
        });
    }

    Ok(())
}
