//! Configuration type definitions.
//!
//! # Example Configuration
//!
//! ```toml
//! [cursor]
//! backend = "public"
//! background_hide = false
//! hold_ms = 3000
//! ```

use serde::{Deserialize, Serialize};

/// Main configuration loaded from TOML config files.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct VeilConfig {
    /// Cursor control settings
    #[serde(default)]
    pub cursor: CursorConfig,
}

/// Cursor control configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CursorConfig {
    /// Backend to use: skylight, public or none.
    /// Auto-detected when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backend: Option<String>,

    /// Allow hiding while the process is not frontmost.
    /// Default: true.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_hide: Option<bool>,

    /// How long `veil hold` keeps the cursor hidden, in milliseconds.
    /// Default: 3000ms.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hold_ms: Option<u64>,
}
