//! Cursor backend trait definition.

use super::errors::{CursorError, PatchError};
use super::types::DisplayId;

/// Trait defining the interface for cursor visibility backends.
///
/// Each backend wraps one set of OS display primitives. The controller only
/// talks to this trait, so a platform without the private window-server hooks
/// can substitute a degraded backend without changing `hide`/`show`.
pub trait CursorBackend: Send + Sync {
    /// The canonical name of this backend (e.g., "skylight", "public").
    fn name(&self) -> &'static str;

    /// The display name for this backend.
    fn display_name(&self) -> &'static str;

    /// Whether this backend can operate on the current system.
    fn is_available(&self) -> bool;

    /// Whether this backend can make hiding take effect while the process is
    /// not frontmost.
    fn supports_background_hide(&self) -> bool;

    /// Allow cursor-visibility changes from this process while it is in the
    /// background. Safe to call repeatedly.
    fn enable_background_hide(&self) -> Result<(), PatchError>;

    /// Hide the cursor on `display`.
    fn hide_cursor(&self, display: DisplayId) -> Result<(), CursorError>;

    /// Show the cursor on `display`.
    fn show_cursor(&self, display: DisplayId) -> Result<(), CursorError>;
}
