//! Host-side application wiring: window, tray, menus, shortcuts, events.

pub mod events;
pub mod window;

#[cfg(desktop)]
pub mod menu;
#[cfg(desktop)]
pub mod shortcuts;
#[cfg(desktop)]
pub mod tray;
