//! Application menu bar.

use tauri::menu::{Menu, MenuEvent, MenuItem, PredefinedMenuItem, Submenu};
use tauri::{App, AppHandle, Manager};

use crate::app::{tray, window};
use crate::state::{AppFlags, ZoomState};

/// Builds and installs the menu bar: File, Edit, View, Window.
pub fn init(app: &App) -> tauri::Result<()> {
    let file = Submenu::with_items(
        app,
        "File",
        true,
        &[
            &MenuItem::with_id(
                app,
                "menu-compose",
                "New Message",
                true,
                Some("CmdOrCtrl+N"),
            )?,
            &PredefinedMenuItem::separator(app)?,
            &MenuItem::with_id(app, "menu-hide", "Hide Window", true, Some("CmdOrCtrl+H"))?,
            &MenuItem::with_id(app, "menu-quit", "Quit", true, Some("CmdOrCtrl+Q"))?,
        ],
    )?;

    let edit = Submenu::with_items(
        app,
        "Edit",
        true,
        &[
            &PredefinedMenuItem::undo(app, None)?,
            &PredefinedMenuItem::redo(app, None)?,
            &PredefinedMenuItem::separator(app)?,
            &PredefinedMenuItem::cut(app, None)?,
            &PredefinedMenuItem::copy(app, None)?,
            &PredefinedMenuItem::paste(app, None)?,
            &PredefinedMenuItem::select_all(app, None)?,
        ],
    )?;

    let view = Submenu::with_items(
        app,
        "View",
        true,
        &[
            &MenuItem::with_id(app, "menu-reload", "Reload", true, Some("CmdOrCtrl+R"))?,
            &PredefinedMenuItem::separator(app)?,
            &MenuItem::with_id(
                app,
                "menu-zoom-reset",
                "Actual Size",
                true,
                Some("CmdOrCtrl+0"),
            )?,
            &MenuItem::with_id(app, "menu-zoom-in", "Zoom In", true, Some("CmdOrCtrl+="))?,
            &MenuItem::with_id(app, "menu-zoom-out", "Zoom Out", true, Some("CmdOrCtrl+-"))?,
            &PredefinedMenuItem::separator(app)?,
            &MenuItem::with_id(
                app,
                "menu-fullscreen",
                "Toggle Full Screen",
                true,
                Some("F11"),
            )?,
            &MenuItem::with_id(app, "menu-menubar", "Toggle Menu Bar", true, None::<&str>)?,
        ],
    )?;

    let window_menu = Submenu::with_items(
        app,
        "Window",
        true,
        &[
            &PredefinedMenuItem::minimize(app, None)?,
            &PredefinedMenuItem::close_window(app, None)?,
            &MenuItem::with_id(
                app,
                "menu-toggle",
                "Toggle Window",
                true,
                Some("CmdOrCtrl+Shift+M"),
            )?,
        ],
    )?;

    let menu = Menu::with_items(app, &[&file, &edit, &view, &window_menu])?;
    app.set_menu(menu)?;

    Ok(())
}

pub fn handle_menu_event(app: &AppHandle, event: MenuEvent) {
    match event.id().as_ref() {
        "menu-compose" => {
            window::compose(app);
            window::present_window(app);
        }
        "menu-hide" => window::hide_window(app),
        "menu-quit" => {
            app.state::<AppFlags>().set_quitting();
            app.exit(0);
        }
        "menu-reload" => {
            if let Some(win) = app.get_webview_window(window::MAIN_WINDOW) {
                if let Err(err) = win.eval("window.location.reload()") {
                    log::warn!("failed to reload page: {err}");
                }
            }
        }
        "menu-zoom-in" => apply_zoom(app, app.state::<ZoomState>().zoom_in()),
        "menu-zoom-out" => apply_zoom(app, app.state::<ZoomState>().zoom_out()),
        "menu-zoom-reset" => apply_zoom(app, app.state::<ZoomState>().reset()),
        "menu-fullscreen" => {
            if let Some(win) = app.get_webview_window(window::MAIN_WINDOW) {
                let fullscreen = win.is_fullscreen().unwrap_or(false);
                if let Err(err) = win.set_fullscreen(!fullscreen) {
                    log::warn!("failed to toggle fullscreen: {err}");
                }
            }
        }
        "menu-menubar" => tray::toggle_menu_bar(app),
        "menu-toggle" => window::toggle_window(app),
        // tray-* ids arrive through the tray's own handler
        _ => {}
    }
}

fn apply_zoom(app: &AppHandle, factor: f64) {
    if let Some(win) = app.get_webview_window(window::MAIN_WINDOW) {
        if let Err(err) = win.set_zoom(factor) {
            log::warn!("failed to set zoom to {factor}: {err}");
        }
    }
}
