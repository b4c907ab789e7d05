//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Coordinates config, the link gate, the main web view, and
//! in-app browser windows.

mod browser;
mod core;
mod event_handler;
mod init;
mod instance;
mod polling;
mod shutdown;
mod title;
mod types;
mod webview_bridge;

pub use browser::ProxySurface;
pub use core::LinkgateApp;
pub use types::AppEvent;
