//! Private window-server backend.
//!
//! Hiding the cursor through CoreGraphics only works while the process is
//! frontmost. Setting `SetsCursorInBackground` on our own window-server
//! connection lifts that restriction for the rest of the connection's life.

use core_foundation::base::{CFTypeRef, TCFType};
use core_foundation::boolean::CFBoolean;
use core_foundation::string::{CFString, CFStringRef};
use tracing::debug;

use super::coregraphics;
use crate::cursor::errors::{CursorError, PatchError};
use crate::cursor::traits::CursorBackend;
use crate::cursor::types::{BACKGROUND_HIDE_PROPERTY, ConnectionId, DisplayId};

// SAFETY: Undocumented SkyLight symbols, re-exported by the CoreGraphics
// framework. `CGSSetConnectionProperty` returns a CGError (0 = success).
#[link(name = "CoreGraphics", kind = "framework")]
unsafe extern "C" {
    fn _CGSDefaultConnection() -> i32;
    fn CGSSetConnectionProperty(
        cid: i32,
        target_cid: i32,
        key: CFStringRef,
        value: CFTypeRef,
    ) -> i32;
}

/// The calling process's default window-server connection.
fn default_connection() -> ConnectionId {
    ConnectionId(unsafe { _CGSDefaultConnection() })
}

/// Backend implementation for the private SkyLight connection API.
pub struct SkyLightBackend;

impl CursorBackend for SkyLightBackend {
    fn name(&self) -> &'static str {
        "skylight"
    }

    fn display_name(&self) -> &'static str {
        "SkyLight (private window-server API)"
    }

    fn is_available(&self) -> bool {
        true
    }

    fn supports_background_hide(&self) -> bool {
        true
    }

    fn enable_background_hide(&self) -> Result<(), PatchError> {
        let connection = default_connection();
        // Released when dropped, on every path out of this function.
        let key = CFString::new(BACKGROUND_HIDE_PROPERTY);
        let value = CFBoolean::true_value();

        // SAFETY: `key` and `value` are live CF objects for the duration of
        // the call. Source and target are both our own connection.
        let status = unsafe {
            CGSSetConnectionProperty(
                connection.0,
                connection.0,
                key.as_concrete_TypeRef(),
                value.as_CFTypeRef(),
            )
        };

        if status != 0 {
            return Err(PatchError::PropertyWriteFailed {
                property: BACKGROUND_HIDE_PROPERTY,
                status,
            });
        }

        debug!(
            event = "core.cursor.skylight.property_set",
            connection = connection.0,
            property = BACKGROUND_HIDE_PROPERTY
        );
        Ok(())
    }

    fn hide_cursor(&self, display: DisplayId) -> Result<(), CursorError> {
        coregraphics::hide(display)
    }

    fn show_cursor(&self, display: DisplayId) -> Result<(), CursorError> {
        coregraphics::show(display)
    }
}
