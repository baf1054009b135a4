//! Main window creation and visibility control.

use tauri::{AppHandle, Manager, Url, WebviewUrl, WebviewWindow, WebviewWindowBuilder};
use tauri_plugin_opener::open_url;

use crate::error::ShellResult;
use crate::page;
use crate::state::{self, WindowAction};

pub const MAIN_WINDOW: &str = "main";
pub const MAIL_URL: &str = "https://www.fastmail.com/mail/";

const DEFAULT_WIDTH: f64 = 1200.0;
const DEFAULT_HEIGHT: f64 = 800.0;

/// Window-state fields worth persisting. Visibility is excluded: the window
/// always starts hidden and is revealed by the load-finished handler, so a
/// saved `visible = true` must not show a still-loading webview.
#[cfg(desktop)]
pub fn persisted_state_flags() -> tauri_plugin_window_state::StateFlags {
    use tauri_plugin_window_state::StateFlags;
    StateFlags::all().difference(StateFlags::VISIBLE)
}

/// Whether a URL stays inside the webview. Everything else opens in the
/// system browser.
pub fn is_app_origin(url: &Url) -> bool {
    match url.host_str() {
        Some(host) => host == "fastmail.com" || host.ends_with(".fastmail.com"),
        None => false,
    }
}

/// Builds the main window, hidden until the first page load finishes so the
/// user never sees a blank webview.
pub fn create_main_window(app: &AppHandle) -> ShellResult<WebviewWindow> {
    let url: Url = MAIL_URL
        .parse()
        .map_err(|err| crate::error::ShellError::Other(format!("invalid mail url: {err}")))?;

    let window = WebviewWindowBuilder::new(app, MAIN_WINDOW, WebviewUrl::External(url))
        .title("Fastmail")
        .inner_size(DEFAULT_WIDTH, DEFAULT_HEIGHT)
        .visible(false)
        .initialization_script(&page::poller_script())
        .on_navigation(|url| {
            if is_app_origin(url) {
                return true;
            }
            log::debug!("opening external link: {url}");
            if let Err(err) = open_url(url.as_str(), None::<&str>) {
                log::warn!("failed to open {url} in browser: {err}");
            }
            false
        })
        .on_page_load(|window, payload| {
            if matches!(payload.event(), tauri::webview::PageLoadEvent::Finished) {
                log::debug!("page load finished: {}", payload.url());
                if !window.is_visible().unwrap_or(false) {
                    if let Err(err) = window.show() {
                        log::warn!("failed to show window after load: {err}");
                    }
                }
            }
        })
        .build()?;

    #[cfg(desktop)]
    {
        use tauri_plugin_window_state::WindowExt;
        if let Err(err) = window.restore_state(persisted_state_flags()) {
            log::warn!("failed to restore window state: {err}");
        }
    }

    Ok(window)
}

/// Shows, unminimizes, and focuses the main window.
pub fn present_window(app: &AppHandle) {
    let Some(window) = app.get_webview_window(MAIN_WINDOW) else {
        return;
    };
    if let Err(err) = window.show() {
        log::warn!("failed to show window: {err}");
    }
    if let Err(err) = window.unminimize() {
        log::debug!("failed to unminimize window: {err}");
    }
    if let Err(err) = window.set_focus() {
        log::warn!("failed to focus window: {err}");
    }
}

pub fn hide_window(app: &AppHandle) {
    let Some(window) = app.get_webview_window(MAIN_WINDOW) else {
        return;
    };
    if let Err(err) = window.hide() {
        log::warn!("failed to hide window: {err}");
    }
}

/// Tray-click toggle: visible windows hide, hidden windows present.
pub fn toggle_window(app: &AppHandle) {
    let Some(window) = app.get_webview_window(MAIN_WINDOW) else {
        return;
    };
    let visible = window.is_visible().unwrap_or(false);
    match state::toggle_action(visible) {
        WindowAction::Present => present_window(app),
        WindowAction::Hide => hide_window(app),
    }
}

/// Shortcut toggle: hides only when the window is visible and focused.
pub fn toggle_window_for_shortcut(app: &AppHandle) {
    let Some(window) = app.get_webview_window(MAIN_WINDOW) else {
        return;
    };
    let visible = window.is_visible().unwrap_or(false);
    let focused = window.is_focused().unwrap_or(false);
    match state::shortcut_toggle_action(visible, focused) {
        WindowAction::Present => present_window(app),
        WindowAction::Hide => hide_window(app),
    }
}

/// Clicks the compose button inside the page.
pub fn compose(app: &AppHandle) {
    let Some(window) = app.get_webview_window(MAIN_WINDOW) else {
        return;
    };
    if let Err(err) = window.eval(&page::compose_script()) {
        log::debug!("compose script failed: {err}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> Url {
        s.parse().unwrap()
    }

    #[test]
    fn fastmail_origins_stay_in_webview() {
        assert!(is_app_origin(&parse("https://www.fastmail.com/mail/")));
        assert!(is_app_origin(&parse("https://fastmail.com/login")));
        assert!(is_app_origin(&parse("https://app.fastmail.com/settings")));
    }

    #[test]
    fn external_origins_are_rejected() {
        assert!(!is_app_origin(&parse("https://example.com/")));
        assert!(!is_app_origin(&parse("https://evilfastmail.com/")));
        assert!(!is_app_origin(&parse("https://fastmail.com.attacker.net/")));
    }

    #[test]
    fn mail_url_parses_as_app_origin() {
        assert!(is_app_origin(&parse(MAIL_URL)));
    }

    #[cfg(desktop)]
    #[test]
    fn persisted_state_never_includes_visibility() {
        use tauri_plugin_window_state::StateFlags;
        let flags = persisted_state_flags();
        assert!(!flags.contains(StateFlags::VISIBLE));
        assert!(flags.contains(StateFlags::SIZE));
        assert!(flags.contains(StateFlags::POSITION));
    }

    #[test]
    fn capability_grants_every_app_origin_form() {
        let raw = include_str!("../../capabilities/default.json");
        let capability: serde_json::Value = serde_json::from_str(raw).unwrap();
        let urls: Vec<&str> = capability["remote"]["urls"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|url| url.as_str())
            .collect();
        // both host forms accepted by is_app_origin need invoke access
        assert!(urls.contains(&"https://fastmail.com"));
        assert!(urls.contains(&"https://*.fastmail.com"));
    }
}
