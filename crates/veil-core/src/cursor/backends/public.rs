//! Public-API-only backend.
//!
//! Uses documented CoreGraphics calls exclusively. Hiding only takes effect
//! while the process is frontmost.

use super::coregraphics;
use crate::cursor::errors::{CursorError, PatchError};
use crate::cursor::traits::CursorBackend;
use crate::cursor::types::DisplayId;

/// Backend implementation for the public CoreGraphics display API.
pub struct PublicBackend;

impl CursorBackend for PublicBackend {
    fn name(&self) -> &'static str {
        "public"
    }

    fn display_name(&self) -> &'static str {
        "CoreGraphics (foreground only)"
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

    fn hide_cursor(&self, display: DisplayId) -> Result<(), CursorError> {
        coregraphics::hide(display)
    }

    fn show_cursor(&self, display: DisplayId) -> Result<(), CursorError> {
        coregraphics::show(display)
    }
}
