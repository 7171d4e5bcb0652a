//! Fallback backend for platforms without cursor control.

use crate::cursor::errors::{CursorError, PatchError};
use crate::cursor::traits::CursorBackend;
use crate::cursor::types::DisplayId;

/// Backend that reports every cursor operation as unsupported.
pub struct UnsupportedBackend;

impl CursorBackend for UnsupportedBackend {
    fn name(&self) -> &'static str {
        "none"
    }

    fn display_name(&self) -> &'static str {
        "Unsupported platform"
    }

    fn is_available(&self) -> bool {
        true
    }

    fn supports_background_hide(&self) -> bool {
        false
    }

    fn enable_background_hide(&self) -> Result<(), PatchError> {
        Err(PatchError::Unsupported {
            backend: self.name(),
        })
    }

    fn hide_cursor(&self, _display: DisplayId) -> Result<(), CursorError> {
        Err(CursorError::UnsupportedPlatform {
            backend: self.name(),
        })
    }

    fn show_cursor(&self, _display: DisplayId) -> Result<(), CursorError> {
        Err(CursorError::UnsupportedPlatform {
            backend: self.name(),
        })
    }
}
