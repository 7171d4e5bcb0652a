//! # Configuration System
//!
//! Hierarchical TOML configuration for veil.
//!
//! ## Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.veil/config.toml` (global user preferences)
//! 3. **Project config** - `./.veil/config.toml` (directory-specific overrides)
//! 4. **CLI arguments** - Command-line flags (highest priority)
//!
//! ## Usage Example
//!
//! ```toml
//! # ~/.veil/config.toml
//! [cursor]
//! backend = "skylight"
//! background_hide = true
//! hold_ms = 5000
//! ```
//!
//! ## Loading Configuration
//!
//! ```rust,no_run
//! use veil_core::config::VeilConfig;
//!
//! fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = VeilConfig::load_hierarchy()?;
//!     println!("backend: {:?}", config.cursor.backend);
//!     Ok(())
//! }
//! ```

pub mod defaults;
pub mod loading;
pub mod types;
pub mod validation;

pub use types::{CursorConfig, VeilConfig};
pub use validation::validate_config;

impl VeilConfig {
    /// Load configuration from the hierarchy of config files.
    ///
    /// See [`loading::load_hierarchy`] for details.
    pub fn load_hierarchy() -> Result<Self, crate::errors::ConfigError> {
        loading::load_hierarchy()
    }

    /// Validate the configuration.
    ///
    /// See [`validation::validate_config`] for details.
    pub fn validate(&self) -> Result<(), crate::errors::ConfigError> {
        validation::validate_config(self)
    }
}
