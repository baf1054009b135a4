//! Global keyboard shortcuts.
//!
//! Two system-wide bindings: toggle the window, and jump straight into a
//! new message. Registration failures are non-fatal since another app may
//! already hold the binding.

use tauri::{App, AppHandle};
use tauri_plugin_global_shortcut::{
    Code, GlobalShortcutExt, Modifiers, Shortcut, ShortcutState,
};

use crate::app::window;
use crate::error::{ShellError, ShellResult};

fn primary_modifier() -> Modifiers {
    if cfg!(target_os = "macos") {
        Modifiers::SUPER
    } else {
        Modifiers::CONTROL
    }
}

/// Registers Ctrl+Shift+M (toggle) and Ctrl+Shift+N (compose); Cmd on macOS.
pub fn register(app: &App) -> ShellResult<()> {
    let modifiers = primary_modifier() | Modifiers::SHIFT;

    let toggle = Shortcut::new(Some(modifiers), Code::KeyM);
    app.global_shortcut()
        .on_shortcut(toggle, |app, _shortcut, event| {
            if event.state() == ShortcutState::Pressed {
                window::toggle_window_for_shortcut(app);
            }
        })
        .map_err(|err| ShellError::Shortcut(format!("toggle shortcut: {err}")))?;

    let compose = Shortcut::new(Some(modifiers), Code::KeyN);
    app.global_shortcut()
        .on_shortcut(compose, |app, _shortcut, event| {
            if event.state() == ShortcutState::Pressed {
                window::compose(app);
                window::present_window(app);
            }
        })
        .map_err(|err| ShellError::Shortcut(format!("compose shortcut: {err}")))?;

    log::info!("global shortcuts registered");
    Ok(())
}

/// Drops all registered shortcuts; called on exit.
pub fn unregister_all(app: &AppHandle) {
    if let Err(err) = app.global_shortcut().unregister_all() {
        log::warn!("failed to unregister shortcuts: {err}");
    }
}
