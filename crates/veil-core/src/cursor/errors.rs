use crate::errors::VeilError;

/// Failure to mark the window-server connection as allowed to hide the
/// cursor while in the background.
#[derive(Debug, thiserror::Error)]
pub enum PatchError {
    #[error("Failed to set connection property '{property}' (status {status})")]
    PropertyWriteFailed { property: &'static str, status: i32 },

    #[error("Backend '{backend}' cannot hide the cursor from the background")]
    Unsupported { backend: &'static str },
}

impl PatchError {
    /// OS status code reported by the failed property write, if any.
    pub fn status(&self) -> Option<i32> {
        match self {
            PatchError::PropertyWriteFailed { status, .. } => Some(*status),
            PatchError::Unsupported { .. } => None,
        }
    }
}

impl VeilError for PatchError {
    fn error_code(&self) -> &'static str {
        match self {
            PatchError::PropertyWriteFailed { .. } => "CURSOR_PATCH_FAILED",
            PatchError::Unsupported { .. } => "CURSOR_PATCH_UNSUPPORTED",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CursorError {
    #[error("Failed to hide cursor on display {display} (status {status})")]
    HideFailed { display: u32, status: i32 },

    #[error("Failed to show cursor on display {display} (status {status})")]
    ShowFailed { display: u32, status: i32 },

    #[error("Cursor control is not supported on this platform (backend: {backend})")]
    UnsupportedPlatform { backend: &'static str },

    #[error("Backend '{backend}' is not available on this system")]
    BackendUnavailable { backend: String },

    #[error("Unknown cursor backend: '{name}'")]
    UnknownBackend { name: String },

    #[error("Cursor controller already configured with backend '{backend}'")]
    AlreadyConfigured { backend: &'static str },
}

impl VeilError for CursorError {
    fn error_code(&self) -> &'static str {
        match self {
            CursorError::HideFailed { .. } => "CURSOR_HIDE_FAILED",
            CursorError::ShowFailed { .. } => "CURSOR_SHOW_FAILED",
            CursorError::UnsupportedPlatform { .. } => "CURSOR_UNSUPPORTED_PLATFORM",
            CursorError::BackendUnavailable { .. } => "CURSOR_BACKEND_UNAVAILABLE",
            CursorError::UnknownBackend { .. } => "CURSOR_UNKNOWN_BACKEND",
            CursorError::AlreadyConfigured { .. } => "CURSOR_ALREADY_CONFIGURED",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(
            self,
            CursorError::BackendUnavailable { .. } | CursorError::UnknownBackend { .. }
        )
    }
}
