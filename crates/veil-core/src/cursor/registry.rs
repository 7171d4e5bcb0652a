//! Backend registry for managing and looking up cursor backends.

use std::collections::HashMap;
use std::sync::LazyLock;

use tracing::debug;

#[cfg(target_os = "macos")]
use super::backends::{PublicBackend, SkyLightBackend};
use super::backends::UnsupportedBackend;
use super::traits::CursorBackend;
use super::types::{BackendInfo, BackendKind};

/// Global registry of all backends compiled for this platform.
static REGISTRY: LazyLock<BackendRegistry> = LazyLock::new(BackendRegistry::new);

/// Registry that manages all cursor backend implementations.
struct BackendRegistry {
    backends: HashMap<BackendKind, Box<dyn CursorBackend>>,
}

impl BackendRegistry {
    fn new() -> Self {
        let mut backends: HashMap<BackendKind, Box<dyn CursorBackend>> = HashMap::new();
        #[cfg(target_os = "macos")]
        {
            backends.insert(BackendKind::SkyLight, Box::new(SkyLightBackend));
            backends.insert(BackendKind::Public, Box::new(PublicBackend));
        }
        backends.insert(BackendKind::None, Box::new(UnsupportedBackend));
        Self { backends }
    }

    fn get_by_kind(&self, kind: BackendKind) -> Option<&dyn CursorBackend> {
        self.backends.get(&kind).map(|b| b.as_ref())
    }

    fn get(&self, name: &str) -> Option<&dyn CursorBackend> {
        BackendKind::parse(name).and_then(|k| self.get_by_kind(k))
    }

    /// First available backend in preference order.
    fn detect(&self) -> (BackendKind, &dyn CursorBackend) {
        BackendKind::all()
            .iter()
            .find_map(|&kind| {
                self.get_by_kind(kind)
                    .filter(|b| b.is_available())
                    .map(|b| (kind, b))
            })
            .unwrap_or((BackendKind::None, &UnsupportedBackend))
    }
}

/// Get a reference to a cursor backend by name (case-insensitive).
///
/// Returns `None` for unknown names and for backends not compiled for this
/// platform.
pub fn get_backend(name: &str) -> Option<&'static dyn CursorBackend> {
    REGISTRY.get(name)
}

/// Get a reference to a cursor backend by kind.
pub fn get_backend_by_kind(kind: BackendKind) -> Option<&'static dyn CursorBackend> {
    REGISTRY.get_by_kind(kind)
}

/// Check if a backend name is known (case-insensitive).
pub fn is_valid_backend(name: &str) -> bool {
    BackendKind::parse(name).is_some()
}

/// Get all known backend names (lowercase, sorted).
pub fn valid_backend_names() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = BackendKind::all().iter().map(|k| k.as_str()).collect();
    names.sort();
    names
}

/// Pick the most capable backend available on this system.
pub fn detect_backend() -> (BackendKind, &'static dyn CursorBackend) {
    let (kind, backend) = REGISTRY.detect();
    debug!(event = "core.cursor.backend_detected", backend = kind.as_str());
    (kind, backend)
}

/// Describe every backend registered for this platform, in preference order.
pub fn list_backends() -> Vec<BackendInfo> {
    BackendKind::all()
        .iter()
        .filter_map(|&kind| REGISTRY.get_by_kind(kind))
        .map(|backend| BackendInfo {
            name: backend.name().to_string(),
            display_name: backend.display_name().to_string(),
            available: backend.is_available(),
            background_hide: backend.supports_background_hide(),
        })
        .collect()
}
