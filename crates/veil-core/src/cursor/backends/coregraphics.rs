//! Public CoreGraphics cursor primitives shared by the macOS backends.

use core_graphics::display::CGDisplay;

use super::saturating::HideState;
use crate::cursor::errors::CursorError;
use crate::cursor::types::DisplayId;

/// The OS hide count is per process, so the state is too.
static HIDE_STATE: HideState = HideState::new();

pub(super) fn hide(display: DisplayId) -> Result<(), CursorError> {
    HIDE_STATE.hide(display, |d| CGDisplay::new(d.0).hide_cursor())
}

pub(super) fn show(display: DisplayId) -> Result<(), CursorError> {
    HIDE_STATE.show(display, |d| CGDisplay::new(d.0).show_cursor())
}
