//! Cursor visibility controller.
//!
//! Wraps a [`CursorBackend`] with the patch-then-hide sequence. `hide` and
//! `show` never fail from the caller's point of view: backend errors are
//! logged and swallowed, because hiding while frontmost keeps working even
//! when the background patch does not.

use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{debug, info, warn};

use super::errors::PatchError;
use super::traits::CursorBackend;
use super::types::DisplayId;
use crate::errors::VeilError;

/// Issues hide/show commands for the primary display through one backend.
pub struct CursorController<'a> {
    backend: &'a dyn CursorBackend,
    display: DisplayId,
    background_hide: bool,
    /// Set once the background-hide property write has succeeded.
    patched: AtomicBool,
}

impl<'a> CursorController<'a> {
    /// Create a controller for the primary display.
    pub fn new(backend: &'a dyn CursorBackend) -> Self {
        Self::with_display(backend, DisplayId::main())
    }

    pub fn with_display(backend: &'a dyn CursorBackend, display: DisplayId) -> Self {
        Self {
            backend,
            display,
            background_hide: true,
            patched: AtomicBool::new(false),
        }
    }

    /// Whether `hide` should first allow hiding from the background.
    pub fn background_hide(mut self, enabled: bool) -> Self {
        self.background_hide = enabled;
        self
    }

    pub fn backend_name(&self) -> &'static str {
        self.backend.name()
    }

    pub fn display(&self) -> DisplayId {
        self.display
    }

    /// Whether the background-hide patch has been applied by this controller.
    pub fn is_patched(&self) -> bool {
        self.patched.load(Ordering::SeqCst)
    }

    /// Allow cursor hiding while the process is in the background.
    ///
    /// Idempotent: the property can be written any number of times.
    ///
    /// # Errors
    ///
    /// Returns `PatchError` if the backend cannot write the connection
    /// property. Hiding still works while the process is frontmost.
    pub fn enable_background_hide(&self) -> Result<(), PatchError> {
        debug!(
            event = "core.cursor.patch_started",
            backend = self.backend.name()
        );

        self.backend.enable_background_hide()?;
        self.patched.store(true, Ordering::SeqCst);

        info!(
            event = "core.cursor.patch_completed",
            backend = self.backend.name()
        );
        Ok(())
    }

    /// Hide the cursor on the controlled display.
    pub fn hide(&self) {
        if self.background_hide
            && self.backend.supports_background_hide()
            && !self.is_patched()
            && let Err(e) = self.enable_background_hide()
        {
            warn!(
                event = "core.cursor.patch_failed",
                backend = self.backend.name(),
                error_code = e.error_code(),
                status = ?e.status(),
                error = %e,
                "Background hide unavailable; cursor hides only while frontmost"
            );
        }

        match self.backend.hide_cursor(self.display) {
            Ok(()) => info!(
                event = "core.cursor.hide_completed",
                backend = self.backend.name(),
                display = self.display.0
            ),
            Err(e) => warn!(
                event = "core.cursor.hide_failed",
                backend = self.backend.name(),
                display = self.display.0,
                error_code = e.error_code(),
                error = %e
            ),
        }
    }

    /// Show the cursor on the controlled display.
    pub fn show(&self) {
        match self.backend.show_cursor(self.display) {
            Ok(()) => info!(
                event = "core.cursor.show_completed",
                backend = self.backend.name(),
                display = self.display.0
            ),
            Err(e) => warn!(
                event = "core.cursor.show_failed",
                backend = self.backend.name(),
                display = self.display.0,
                error_code = e.error_code(),
                error = %e
            ),
        }
    }

    /// Hide the cursor until the returned guard is dropped.
    pub fn hide_scoped(&self) -> HiddenCursor<'_, 'a> {
        self.hide();
        HiddenCursor { controller: self }
    }
}

/// Keeps the cursor hidden for its lifetime. See [`CursorController::hide_scoped`].
#[must_use = "the cursor is shown again as soon as the guard is dropped"]
pub struct HiddenCursor<'c, 'a> {
    controller: &'c CursorController<'a>,
}

impl Drop for HiddenCursor<'_, '_> {
    fn drop(&mut self) {
        self.controller.show();
    }
}
