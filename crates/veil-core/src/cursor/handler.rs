//! Process-wide cursor control.
//!
//! Holds a single [`CursorController`] for the whole process so the
//! background-hide patch is applied at most once. Callers that never run
//! [`configure`] get an auto-detected backend on first use.

use std::sync::OnceLock;

use tracing::{error, info};

use super::controller::{CursorController, HiddenCursor};
use super::errors::{CursorError, PatchError};
use super::registry;
use super::traits::CursorBackend;
use super::types::BackendKind;
use crate::config::VeilConfig;

static CONTROLLER: OnceLock<CursorController<'static>> = OnceLock::new();

fn controller() -> &'static CursorController<'static> {
    CONTROLLER.get_or_init(|| {
        let (_, backend) = registry::detect_backend();
        CursorController::new(backend)
    })
}

/// Resolve a backend by name, or detect the best one when `name` is `None`.
///
/// # Errors
///
/// Returns `CursorError::UnknownBackend` for names that are not recognized,
/// and `CursorError::BackendUnavailable` for backends not usable here.
pub fn resolve_backend(
    name: Option<&str>,
) -> Result<(BackendKind, &'static dyn CursorBackend), CursorError> {
    let Some(name) = name else {
        return Ok(registry::detect_backend());
    };

    let kind = BackendKind::parse(name).ok_or_else(|| CursorError::UnknownBackend {
        name: name.to_string(),
    })?;

    match registry::get_backend_by_kind(kind) {
        Some(backend) if backend.is_available() => Ok((kind, backend)),
        _ => Err(CursorError::BackendUnavailable {
            backend: kind.as_str().to_string(),
        }),
    }
}

/// Install the process-wide controller from configuration.
///
/// # Errors
///
/// Returns `CursorError::AlreadyConfigured` if a controller is already in use
/// (including one auto-installed by an earlier hide/show), or a backend
/// resolution error.
pub fn configure(config: &VeilConfig) -> Result<BackendKind, CursorError> {
    let (kind, backend) = resolve_backend(config.cursor.backend.as_deref()).inspect_err(|e| {
        error!(event = "core.cursor.configure_failed", error = %e);
    })?;

    let controller =
        CursorController::new(backend).background_hide(config.cursor.background_hide());

    CONTROLLER
        .set(controller)
        .map_err(|_| CursorError::AlreadyConfigured {
            backend: active_backend(),
        })?;

    info!(
        event = "core.cursor.configure_completed",
        backend = kind.as_str(),
        background_hide = config.cursor.background_hide()
    );
    Ok(kind)
}

/// Hide the cursor on the primary display, even from the background when the
/// backend allows it.
pub fn hide_cursor() {
    controller().hide();
}

/// Show the cursor on the primary display.
pub fn show_cursor() {
    controller().show();
}

/// Hide the cursor on the primary display until the guard is dropped.
///
/// The OS restores the cursor when the process exits, so a caller that
/// wants the cursor to stay hidden must keep running while holding this.
pub fn hide_cursor_scoped() -> HiddenCursor<'static, 'static> {
    controller().hide_scoped()
}

/// Apply the background-hide patch now instead of on the first hide.
pub fn enable_background_hide() -> Result<(), PatchError> {
    controller().enable_background_hide()
}

/// Name of the backend behind the process-wide controller.
pub fn active_backend() -> &'static str {
    controller().backend_name()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Pin the process-wide controller to the no-op backend so tests never
    /// touch the real cursor.
    fn configure_none() {
        let mut config = VeilConfig::default();
        config.cursor.backend = Some("none".to_string());
        let _ = configure(&config);
        assert_eq!(active_backend(), "none");
    }

    #[test]
    fn test_resolve_backend_unknown() {
        let result = resolve_backend(Some("wayland"));
        assert!(matches!(
            result,
            Err(CursorError::UnknownBackend { ref name }) if name == "wayland"
        ));
    }

    #[test]
    fn test_resolve_backend_none_by_name() {
        let (kind, backend) = resolve_backend(Some("NONE")).unwrap();
        assert_eq!(kind, BackendKind::None);
        assert_eq!(backend.name(), "none");
    }

    #[test]
    fn test_resolve_backend_detects_when_unset() {
        let (kind, backend) = resolve_backend(None).unwrap();
        assert_eq!(kind.as_str(), backend.name());
    }

    #[cfg(not(target_os = "macos"))]
    #[test]
    fn test_resolve_backend_unavailable_off_macos() {
        assert!(matches!(
            resolve_backend(Some("skylight")),
            Err(CursorError::BackendUnavailable { .. })
        ));
    }

    #[test]
    fn test_configure_twice_is_rejected() {
        configure_none();

        let mut config = VeilConfig::default();
        config.cursor.backend = Some("none".to_string());
        let result = configure(&config);
        assert!(matches!(
            result,
            Err(CursorError::AlreadyConfigured { backend: "none" })
        ));
    }

    #[test]
    fn test_hide_show_never_panic() {
        configure_none();
        hide_cursor();
        show_cursor();
        assert_eq!(active_backend(), "none");
    }

    #[test]
    fn test_hide_cursor_scoped_never_panics() {
        configure_none();
        {
            let _guard = hide_cursor_scoped();
        }
        assert!(enable_background_hide().is_err());
    }
}
