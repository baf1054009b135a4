mod app;
mod bridge;
mod error;
mod integration;
mod page;
mod state;
mod unread;

use tauri::{Manager, RunEvent};

use state::{AppFlags, UnreadState, ZoomState};

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .try_init();

    let mut builder = tauri::Builder::default()
        .manage(AppFlags::default())
        .manage(UnreadState::default())
        .manage(ZoomState::default())
        .plugin(tauri_plugin_opener::init())
        .plugin(tauri_plugin_notification::init());

    #[cfg(desktop)]
    {
        builder = builder
            .plugin(tauri_plugin_global_shortcut::Builder::new().build())
            .plugin(tauri_plugin_window_state::Builder::new().build())
            .plugin(tauri_plugin_single_instance::init(|app, _args, _cwd| {
                // a second launch just brings the running instance forward
                app::window::present_window(app);
            }));
    }

    builder = builder
        .on_window_event(|window, event| app::events::handle_window_event(window, event))
        .invoke_handler(tauri::generate_handler![
            bridge::send_notification,
            bridge::report_unread_count,
            bridge::report_compose_result
        ])
        .setup(|app| {
            app::window::create_main_window(app.handle())?;

            #[cfg(desktop)]
            {
                app::tray::init(app)?;
                app::menu::init(app)?;
                if let Err(err) = app::shortcuts::register(app) {
                    log::warn!("global shortcuts unavailable: {err}");
                }
            }

            #[cfg(target_os = "linux")]
            if let Err(err) = integration::install(app.handle()) {
                log::warn!("desktop integration failed: {err}");
            }

            Ok(())
        });

    #[cfg(desktop)]
    {
        builder = builder.on_menu_event(|app, event| app::menu::handle_menu_event(app, event));
    }

    let tauri_app = builder
        .build(tauri::generate_context!())
        .expect("error while building tauri application");

    tauri_app.run(|app, event| match event {
        RunEvent::ExitRequested { .. } => {
            app.state::<AppFlags>().set_quitting();
        }
        RunEvent::Exit => {
            #[cfg(desktop)]
            {
                use tauri_plugin_window_state::AppHandleExt;
                app::shortcuts::unregister_all(app);
                if let Err(err) = app.save_window_state(app::window::persisted_state_flags()) {
                    log::warn!("failed to save window state: {err}");
                }
            }
        }
        #[cfg(target_os = "macos")]
        RunEvent::Reopen {
            has_visible_windows,
            ..
        } => {
            if !has_visible_windows {
                app::window::present_window(app);
            }
        }
        _ => {}
    });
}
