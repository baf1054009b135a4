//! System tray icon and context menu.

use tauri::image::Image;
use tauri::menu::{Menu, MenuItem, PredefinedMenuItem};
use tauri::tray::{MouseButton, MouseButtonState, TrayIconBuilder, TrayIconEvent};
use tauri::{App, AppHandle, Manager};

use crate::app::window;
use crate::state::AppFlags;

pub const TRAY_ID: &str = "main-tray";

/// Builds the tray icon with its context menu. Left click toggles the
/// window, double click always presents it, right click opens the menu.
pub fn init(app: &App) -> tauri::Result<()> {
    let show = MenuItem::with_id(app, "tray-show", "Show Fastmail", true, None::<&str>)?;
    let compose = MenuItem::with_id(app, "tray-compose", "New Message", true, None::<&str>)?;
    let menubar = MenuItem::with_id(app, "tray-menubar", "Toggle Menu Bar", true, None::<&str>)?;
    let preferences =
        MenuItem::with_id(app, "tray-preferences", "Preferences", true, None::<&str>)?;
    let quit = MenuItem::with_id(app, "tray-quit", "Quit", true, None::<&str>)?;

    let menu = Menu::with_items(
        app,
        &[
            &show,
            &compose,
            &PredefinedMenuItem::separator(app)?,
            &menubar,
            &preferences,
            &PredefinedMenuItem::separator(app)?,
            &quit,
        ],
    )?;

    let icon = Image::from_bytes(include_bytes!("../../icons/icon.png"))?;

    TrayIconBuilder::with_id(TRAY_ID)
        .icon(icon)
        .tooltip("Fastmail")
        .menu(&menu)
        .show_menu_on_left_click(false)
        .on_menu_event(|app, event| match event.id().as_ref() {
            "tray-show" => window::present_window(app),
            "tray-compose" => {
                window::compose(app);
                window::present_window(app);
            }
            "tray-menubar" => toggle_menu_bar(app),
            "tray-preferences" => {
                log::info!("preferences requested, not implemented yet");
            }
            "tray-quit" => {
                app.state::<AppFlags>().set_quitting();
                app.exit(0);
            }
            other => log::debug!("unhandled tray menu item: {other}"),
        })
        .on_tray_icon_event(|tray, event| match event {
            TrayIconEvent::Click {
                button: MouseButton::Left,
                button_state: MouseButtonState::Up,
                ..
            } => window::toggle_window(tray.app_handle()),
            TrayIconEvent::DoubleClick {
                button: MouseButton::Left,
                ..
            } => window::present_window(tray.app_handle()),
            _ => {}
        })
        .build(app)?;

    Ok(())
}

/// Flips the native menu bar on the main window.
pub fn toggle_menu_bar(app: &AppHandle) {
    let Some(win) = app.get_webview_window(window::MAIN_WINDOW) else {
        return;
    };
    let result = match win.is_menu_visible() {
        Ok(true) => win.hide_menu(),
        Ok(false) => win.show_menu(),
        Err(err) => {
            log::warn!("failed to query menu visibility: {err}");
            return;
        }
    };
    if let Err(err) = result {
        log::warn!("failed to toggle menu bar: {err}");
    }
}
