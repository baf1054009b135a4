//! Window event handling, chiefly close-to-tray.

use tauri::{Manager, Window, WindowEvent};

use crate::app::window::MAIN_WINDOW;
use crate::bridge;
use crate::state::{AppFlags, CloseAction};

/// Routes window events. A close request on the main window hides it unless
/// the app is quitting; the first hide announces the tray behavior once.
pub fn handle_window_event(window: &Window, event: &WindowEvent) {
    if window.label() != MAIN_WINDOW {
        return;
    }

    if let WindowEvent::CloseRequested { api, .. } = event {
        let flags = window.state::<AppFlags>();
        match flags.close_action() {
            CloseAction::Close => {}
            CloseAction::Hide { notify_first_hide } => {
                api.prevent_close();
                if let Err(err) = window.hide() {
                    log::warn!("failed to hide window on close: {err}");
                }
                if notify_first_hide {
                    bridge::notify(
                        window.app_handle(),
                        "Fastmail",
                        "Application was minimized to tray",
                        None,
                    );
                }
            }
        }
    }
}
