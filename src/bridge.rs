//! Host-side notification bridge.
//!
//! The injected page script only reports raw counts; the new-mail decision
//! and the actual native notification both happen here.

use tauri::{AppHandle, Runtime, State};
use tauri_plugin_notification::{NotificationExt, PermissionState};

use crate::state::UnreadState;
use crate::unread;

/// Shows a native notification, checking permission first. Failures are
/// logged and otherwise ignored; notifications are never load-bearing.
pub fn notify<R: Runtime>(app: &AppHandle<R>, title: &str, body: &str, icon: Option<&str>) {
    let granted = match app.notification().permission_state() {
        Ok(PermissionState::Granted) => true,
        Ok(_) => matches!(
            app.notification().request_permission(),
            Ok(PermissionState::Granted)
        ),
        Err(err) => {
            log::warn!("failed to query notification permission: {err}");
            false
        }
    };
    if !granted {
        log::debug!("notification suppressed, permission not granted");
        return;
    }

    let mut builder = app.notification().builder().title(title).body(body);
    if let Some(icon) = icon {
        builder = builder.icon(icon);
    }
    if let Err(err) = builder.show() {
        log::warn!("failed to show notification: {err}");
    }
}

/// Generic notification entry point for the injected page.
#[tauri::command]
pub fn send_notification<R: Runtime>(
    app: AppHandle<R>,
    title: String,
    body: String,
    icon: Option<String>,
) {
    notify(&app, &title, &body, icon.as_deref());
}

/// Receives the outcome of a compose attempt. A miss means the page markup
/// drifted away from the known selectors; it is logged, never surfaced.
#[tauri::command]
pub fn report_compose_result(matched_selector: Option<String>) {
    match matched_selector {
        Some(selector) => log::debug!("compose button clicked via {selector}"),
        None => log::warn!("compose button not found, selectors may be stale"),
    }
}

/// Receives one poll sample from the page. The inbox badge, when present,
/// overrides the summed folder total.
#[tauri::command]
pub fn report_unread_count<R: Runtime>(
    app: AppHandle<R>,
    state: State<'_, UnreadState>,
    badge_total: u32,
    inbox_badge: Option<u32>,
) {
    let current = unread::effective_count(badge_total, inbox_badge);
    log::debug!("unread sample: total={badge_total} inbox={inbox_badge:?} effective={current}");

    if let Some(new_count) = state.observe(current) {
        log::info!("{new_count} new message(s), unread count now {current}");
        notify(&app, "New Email", &unread::new_mail_body(new_count), None);
    }
}
