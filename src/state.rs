//! Application lifecycle flags and window-visibility decisions.
//!
//! The close-to-tray behavior and the tray/shortcut toggles are driven by the
//! pure functions in this module so they can be tested without a running app.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use crate::unread::UnreadTracker;

/// What a close request should do to the main window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseAction {
    /// Suppress the close and hide to tray; `notify_first_hide` is true on
    /// the first hide of the window's lifetime.
    Hide { notify_first_hide: bool },
    /// Let the close proceed and release the window.
    Close,
}

/// What a toggle request should do to the main window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowAction {
    /// Show + unminimize + focus.
    Present,
    Hide,
}

/// Process-wide lifecycle flags, held as managed state rather than globals.
#[derive(Default)]
pub struct AppFlags {
    quitting: AtomicBool,
    hidden_once: AtomicBool,
}

impl AppFlags {
    /// Marks the process as quitting. Once set, close requests destroy the
    /// window instead of hiding it; the flag is never cleared.
    pub fn set_quitting(&self) {
        self.quitting.store(true, Ordering::SeqCst);
    }

    pub fn is_quitting(&self) -> bool {
        self.quitting.load(Ordering::SeqCst)
    }

    /// Decides the outcome of a close request and records the hidden-once
    /// flag, so the tray notification fires exactly once per window lifetime.
    pub fn close_action(&self) -> CloseAction {
        if self.is_quitting() {
            return CloseAction::Close;
        }
        let first = !self.hidden_once.swap(true, Ordering::SeqCst);
        CloseAction::Hide {
            notify_first_hide: first,
        }
    }
}

/// Tray single click: plain visibility toggle, no debounce.
pub fn toggle_action(visible: bool) -> WindowAction {
    if visible {
        WindowAction::Hide
    } else {
        WindowAction::Present
    }
}

/// Global shortcut toggle. Deliberately asymmetric: only a window that is
/// both visible and focused is hidden; a visible-but-background window is
/// brought forward instead of vanishing under the user.
pub fn shortcut_toggle_action(visible: bool, focused: bool) -> WindowAction {
    if visible && focused {
        WindowAction::Hide
    } else {
        WindowAction::Present
    }
}

const ZOOM_STEP: f64 = 1.1;
const ZOOM_MIN: f64 = 0.25;
const ZOOM_MAX: f64 = 5.0;
const ZOOM_DEFAULT: f64 = 1.0;

/// Current page zoom factor. The webview has no readable zoom level, so the
/// host tracks it and pushes absolute factors down on every change.
pub struct ZoomState(Mutex<f64>);

impl Default for ZoomState {
    fn default() -> Self {
        Self(Mutex::new(ZOOM_DEFAULT))
    }
}

impl ZoomState {
    pub fn zoom_in(&self) -> f64 {
        self.update(|factor| (factor * ZOOM_STEP).min(ZOOM_MAX))
    }

    pub fn zoom_out(&self) -> f64 {
        self.update(|factor| (factor / ZOOM_STEP).max(ZOOM_MIN))
    }

    pub fn reset(&self) -> f64 {
        self.update(|_| ZOOM_DEFAULT)
    }

    fn update(&self, f: impl FnOnce(f64) -> f64) -> f64 {
        let mut factor = match self.0.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        *factor = f(*factor);
        *factor
    }
}

/// Last-observed unread count, fed by the page-side poller.
#[derive(Default)]
pub struct UnreadState(Mutex<UnreadTracker>);

impl UnreadState {
    /// Records a sample and returns the number of new messages when the
    /// new-mail rule fires.
    pub fn observe(&self, current: u32) -> Option<u32> {
        match self.0.lock() {
            Ok(mut tracker) => tracker.observe(current),
            Err(poisoned) => poisoned.into_inner().observe(current),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn close_hides_and_notifies_exactly_once() {
        let flags = AppFlags::default();

        assert_eq!(
            flags.close_action(),
            CloseAction::Hide {
                notify_first_hide: true
            }
        );
        for _ in 0..5 {
            assert_eq!(
                flags.close_action(),
                CloseAction::Hide {
                    notify_first_hide: false
                }
            );
        }
    }

    #[test]
    fn close_proceeds_when_quitting() {
        let flags = AppFlags::default();
        flags.set_quitting();
        assert_eq!(flags.close_action(), CloseAction::Close);
        assert_eq!(flags.close_action(), CloseAction::Close);
    }

    #[test]
    fn quitting_wins_even_after_prior_hides() {
        let flags = AppFlags::default();
        let _ = flags.close_action();
        flags.set_quitting();
        assert_eq!(flags.close_action(), CloseAction::Close);
    }

    #[test]
    fn tray_toggle_is_symmetric() {
        assert_eq!(toggle_action(true), WindowAction::Hide);
        assert_eq!(toggle_action(false), WindowAction::Present);
    }

    #[test]
    fn shortcut_toggle_only_hides_focused_window() {
        assert_eq!(shortcut_toggle_action(true, true), WindowAction::Hide);
        assert_eq!(shortcut_toggle_action(true, false), WindowAction::Present);
        assert_eq!(shortcut_toggle_action(false, false), WindowAction::Present);
        assert_eq!(shortcut_toggle_action(false, true), WindowAction::Present);
    }

    #[test]
    fn zoom_steps_are_inverse_around_default() {
        let zoom = ZoomState::default();
        zoom.zoom_in();
        let back = zoom.zoom_out();
        assert!((back - 1.0).abs() < 1e-9);
    }

    #[test]
    fn zoom_clamps_at_both_ends() {
        let zoom = ZoomState::default();
        let mut factor = 1.0;
        for _ in 0..100 {
            factor = zoom.zoom_in();
        }
        assert!(factor <= 5.0);

        let zoom = ZoomState::default();
        for _ in 0..100 {
            factor = zoom.zoom_out();
        }
        assert!(factor >= 0.25);
    }

    #[test]
    fn zoom_reset_returns_to_default() {
        let zoom = ZoomState::default();
        zoom.zoom_in();
        zoom.zoom_in();
        assert!((zoom.reset() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn unread_state_delegates_to_tracker() {
        let state = UnreadState::default();
        assert_eq!(state.observe(3), None);
        assert_eq!(state.observe(7), Some(4));
    }
}
