//! Default values for configuration types.

use crate::config::types::CursorConfig;

/// Default hold duration for `veil hold`, in milliseconds.
pub const DEFAULT_HOLD_MS: u64 = 3000;

impl CursorConfig {
    /// Returns whether background hiding is allowed, defaulting to true.
    pub fn background_hide(&self) -> bool {
        self.background_hide.unwrap_or(true)
    }

    /// Returns the hold duration in milliseconds, defaulting to 3000.
    pub fn hold_ms(&self) -> u64 {
        self.hold_ms.unwrap_or(DEFAULT_HOLD_MS)
    }
}
