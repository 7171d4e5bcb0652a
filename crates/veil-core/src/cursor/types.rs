//! Cursor control type definitions.

use serde::{Deserialize, Serialize};

/// Name of the window-server connection property that lets a background
/// process hide the cursor.
pub const BACKGROUND_HIDE_PROPERTY: &str = "SetsCursorInBackground";

/// Opaque handle for this process's connection to the window server.
///
/// Process-scoped and owned by the OS. Never released by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConnectionId(pub i32);

/// Identifier of a physical display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DisplayId(pub u32);

impl DisplayId {
    /// The primary display.
    #[cfg(target_os = "macos")]
    pub fn main() -> Self {
        DisplayId(core_graphics::display::CGDisplay::main().id)
    }

    /// The primary display.
    #[cfg(not(target_os = "macos"))]
    pub fn main() -> Self {
        DisplayId(0)
    }
}

impl std::fmt::Display for DisplayId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Supported cursor visibility backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// Private window-server API: hides the cursor even from the background.
    SkyLight,
    /// Public CoreGraphics API only: hides while the process is frontmost.
    Public,
    /// No cursor control on this platform.
    None,
}

impl BackendKind {
    /// Get the canonical string name for this backend.
    pub fn as_str(&self) -> &'static str {
        match self {
            BackendKind::SkyLight => "skylight",
            BackendKind::Public => "public",
            BackendKind::None => "none",
        }
    }

    /// Parse a backend kind from a string (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "skylight" => Some(BackendKind::SkyLight),
            "public" => Some(BackendKind::Public),
            "none" => Some(BackendKind::None),
            _ => None,
        }
    }

    /// All backends, in detection preference order.
    pub fn all() -> &'static [BackendKind] {
        &[BackendKind::SkyLight, BackendKind::Public, BackendKind::None]
    }
}

impl std::fmt::Display for BackendKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for BackendKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| {
            format!(
                "Unknown backend '{}'. Supported: {}",
                s,
                BackendKind::all()
                    .iter()
                    .map(|b| b.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            )
        })
    }
}

/// Summary of a registered backend, for listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendInfo {
    pub name: String,
    pub display_name: String,
    pub available: bool,
    pub background_hide: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_kind_as_str() {
        assert_eq!(BackendKind::SkyLight.as_str(), "skylight");
        assert_eq!(BackendKind::Public.as_str(), "public");
        assert_eq!(BackendKind::None.as_str(), "none");
    }

    #[test]
    fn test_backend_kind_parse_case_insensitive() {
        assert_eq!(BackendKind::parse("SkyLight"), Some(BackendKind::SkyLight));
        assert_eq!(BackendKind::parse("PUBLIC"), Some(BackendKind::Public));
        assert_eq!(BackendKind::parse("none"), Some(BackendKind::None));
        assert_eq!(BackendKind::parse("cocoa"), None);
        assert_eq!(BackendKind::parse(""), None);
    }

    #[test]
    fn test_backend_kind_from_str_error_lists_supported() {
        let err = "cocoa".parse::<BackendKind>().unwrap_err();
        assert!(err.contains("skylight, public, none"));
    }

    #[test]
    fn test_backend_kind_serde() {
        let json = serde_json::to_string(&BackendKind::SkyLight).unwrap();
        assert_eq!(json, "\"skylight\"");
        let kind: BackendKind = serde_json::from_str("\"public\"").unwrap();
        assert_eq!(kind, BackendKind::Public);
    }

    #[test]
    fn test_display_id_display() {
        assert_eq!(DisplayId(69733382).to_string(), "69733382");
    }
}
