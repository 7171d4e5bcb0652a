//! Cursor backend implementations.

#[cfg(target_os = "macos")]
mod coregraphics;
#[cfg(target_os = "macos")]
mod public;
mod saturating;
#[cfg(target_os = "macos")]
mod skylight;
mod unsupported;

#[cfg(target_os = "macos")]
pub use public::PublicBackend;
#[cfg(target_os = "macos")]
pub use skylight::SkyLightBackend;
pub use unsupported::UnsupportedBackend;
