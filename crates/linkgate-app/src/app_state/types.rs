//! Internal types and constants for the app state module.

use std::time::Duration;

use url::Url;

/// Events posted to the winit loop from outside it.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Show an external web page in an in-app browser window.
    PresentBrowser(Url),
}

/// How often to poll web view events and deep-link notifications.
pub(super) const POLL_INTERVAL: Duration = Duration::from_millis(16);

/// View id of the main (embedded content) web view.
pub(super) const MAIN_VIEW_ID: u32 = 0;

/// Bundled content location relative to the executable, used when the
/// config names no assets directory.
pub(super) const DEFAULT_ASSETS_DIR: &str = "assets/www";
