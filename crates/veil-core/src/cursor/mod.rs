pub mod backends;
pub mod controller;
pub mod errors;
pub mod handler;
pub mod registry;
pub mod traits;
pub mod types;

// Re-export commonly used types and functions
pub use controller::{CursorController, HiddenCursor};
pub use errors::{CursorError, PatchError};
pub use handler::{enable_background_hide, hide_cursor, hide_cursor_scoped, show_cursor};
pub use registry::{detect_backend, get_backend, list_backends};
pub use traits::CursorBackend;
pub use types::{BackendInfo, BackendKind, ConnectionId, DisplayId};
