//! veil-core: hide and show the mouse cursor globally
//!
//! The platform's public cursor-hide call only takes effect while the calling
//! process is frontmost. This library marks the process's window-server
//! connection so hiding also works from the background, then toggles the
//! cursor on the primary display.
//!
//! # Main Entry Points
//!
//! - [`cursor_ops`] - Process-wide `hide_cursor` / `show_cursor`
//! - [`cursor::CursorController`] - Controller over an explicit backend
//! - [`cursor::registry`] - Backend lookup and detection
//! - [`config`] - Configuration management

pub mod config;
pub mod cursor;
pub mod errors;
pub mod events;
pub mod logging;

// Re-export commonly used types at crate root for convenience
pub use config::VeilConfig;
pub use cursor::{
    BackendKind, CursorBackend, CursorController, CursorError, DisplayId, PatchError,
};
pub use errors::VeilError;

// Re-export handler modules as the primary API
pub use cursor::handler as cursor_ops;

// Re-export logging initialization
pub use logging::init_logging;
