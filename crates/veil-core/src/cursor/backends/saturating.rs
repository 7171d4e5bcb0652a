//! Saturating hide/show over a counted OS primitive.
//!
//! `CGDisplayHideCursor` keeps a per-process hide count, so every unmatched
//! hide needs its own show. [`HideState`] only issues the hide primitive on a
//! visible-to-hidden transition. The flag and the OS call change together
//! under one lock, so concurrent hide/show calls cannot leave an extra hide
//! behind.

#![cfg_attr(not(target_os = "macos"), allow(dead_code))]

use std::sync::{Mutex, MutexGuard};

use tracing::debug;

use crate::cursor::errors::CursorError;
use crate::cursor::types::DisplayId;

/// Whether this process currently holds a hide on the cursor.
pub(super) struct HideState {
    hidden: Mutex<bool>,
}

impl HideState {
    pub(super) const fn new() -> Self {
        Self {
            hidden: Mutex::new(false),
        }
    }

    fn lock(&self) -> MutexGuard<'_, bool> {
        // The guarded bool is valid even if a holder panicked.
        self.hidden.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Hide via `primitive` unless this process already holds a hide.
    ///
    /// `primitive` returns the OS status on failure.
    pub(super) fn hide<F>(&self, display: DisplayId, primitive: F) -> Result<(), CursorError>
    where
        F: FnOnce(DisplayId) -> Result<(), i32>,
    {
        let mut hidden = self.lock();
        if *hidden {
            let display_id = display.0;
            debug!(
                event = "core.cursor.hide_skipped",
                display = display_id,
                reason = "already_hidden"
            );
            return Ok(());
        }

        primitive(display).map_err(|status| CursorError::HideFailed {
            display: display.0,
            status,
        })?;
        *hidden = true;
        Ok(())
    }

    /// Show via `primitive`. Always issued, so a first-call show is valid.
    pub(super) fn show<F>(&self, display: DisplayId, primitive: F) -> Result<(), CursorError>
    where
        F: FnOnce(DisplayId) -> Result<(), i32>,
    {
        let mut hidden = self.lock();
        primitive(display).map_err(|status| CursorError::ShowFailed {
            display: display.0,
            status,
        })?;
        *hidden = false;
        Ok(())
    }

    #[cfg(test)]
    fn is_hidden(&self) -> bool {
        *self.lock()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicI32, Ordering};

    /// Counted hide/show, the way CoreGraphics behaves: shows clamp at zero.
    struct CountingDisplay {
        hide_count: AtomicI32,
    }

    impl CountingDisplay {
        fn new() -> Self {
            Self {
                hide_count: AtomicI32::new(0),
            }
        }

        fn hide(&self, _display: DisplayId) -> Result<(), i32> {
            self.hide_count.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        fn show(&self, _display: DisplayId) -> Result<(), i32> {
            let _ = self
                .hide_count
                .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| Some((n - 1).max(0)));
            Ok(())
        }

        fn count(&self) -> i32 {
            self.hide_count.load(Ordering::SeqCst)
        }
    }

    const DISPLAY: DisplayId = DisplayId(1);

    #[test]
    fn test_hide_hide_show_leaves_count_at_zero() {
        let os = CountingDisplay::new();
        let state = HideState::new();

        state.hide(DISPLAY, |d| os.hide(d)).unwrap();
        state.hide(DISPLAY, |d| os.hide(d)).unwrap();
        assert_eq!(os.count(), 1);

        state.show(DISPLAY, |d| os.show(d)).unwrap();
        assert_eq!(os.count(), 0);
        assert!(!state.is_hidden());
    }

    #[test]
    fn test_show_first_is_issued() {
        let os = CountingDisplay::new();
        let state = HideState::new();
        let mut shows = 0;

        state
            .show(DISPLAY, |d| {
                shows += 1;
                os.show(d)
            })
            .unwrap();

        assert_eq!(shows, 1);
        assert_eq!(os.count(), 0);
    }

    #[test]
    fn test_failed_hide_keeps_state_visible() {
        let os = CountingDisplay::new();
        let state = HideState::new();

        let err = state.hide(DISPLAY, |_| Err(1001)).unwrap_err();
        assert!(matches!(
            err,
            CursorError::HideFailed {
                display: 1,
                status: 1001
            }
        ));
        assert!(!state.is_hidden());

        // The next hide is issued again.
        state.hide(DISPLAY, |d| os.hide(d)).unwrap();
        assert_eq!(os.count(), 1);
        assert!(state.is_hidden());
    }

    #[test]
    fn test_failed_show_keeps_state_hidden() {
        let os = CountingDisplay::new();
        let state = HideState::new();

        state.hide(DISPLAY, |d| os.hide(d)).unwrap();
        assert!(state.show(DISPLAY, |_| Err(1000)).is_err());
        assert!(state.is_hidden());

        state.show(DISPLAY, |d| os.show(d)).unwrap();
        assert_eq!(os.count(), 0);
    }

    #[test]
    fn test_concurrent_hide_show_never_stacks_hides() {
        let os = CountingDisplay::new();
        let state = HideState::new();

        for _ in 0..50 {
            std::thread::scope(|s| {
                for i in 0..8 {
                    let (os, state) = (&os, &state);
                    s.spawn(move || {
                        if i % 2 == 0 {
                            state.hide(DISPLAY, |d| os.hide(d)).unwrap();
                        } else {
                            state.show(DISPLAY, |d| os.show(d)).unwrap();
                        }
                    });
                }
            });
            assert!(os.count() <= 1, "hide count stacked to {}", os.count());

            state.show(DISPLAY, |d| os.show(d)).unwrap();
            assert_eq!(os.count(), 0);
        }
    }
}
