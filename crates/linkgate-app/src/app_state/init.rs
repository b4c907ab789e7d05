//! Window creation and web view setup.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use winit::event_loop::ActiveEventLoop;
use winit::window::WindowAttributes;

use linkgate_webview::{ContentProvider, WebViewManager};

use super::core::LinkgateApp;
use super::types::DEFAULT_ASSETS_DIR;

/// Where bundled content lives: the configured directory, else
/// [`DEFAULT_ASSETS_DIR`] beside the executable (or the working directory).
pub(super) fn resolve_assets_dir(configured: Option<&Path>, exe_dir: Option<&Path>) -> PathBuf {
    match configured {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => exe_dir
            .map(Path::to_path_buf)
            .unwrap_or_default()
            .join(DEFAULT_ASSETS_DIR),
    }
}

// =============================================================================
// INITIALIZATION
// =============================================================================

impl LinkgateApp {
    /// Create the main window and its web view.
    /// Returns `false` if initialization failed and the event loop should exit.
    pub(super) fn initialize_window(&mut self, event_loop: &ActiveEventLoop) -> bool {
        let attrs = WindowAttributes::default()
            .with_title(self.config.window.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(
                f64::from(self.config.window.width),
                f64::from(self.config.window.height),
            ));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                tracing::error!("Failed to create window: {e}");
                return false;
            }
        };
        self.window = Some(window);

        self.initialize_webviews();
        if !self.create_main_webview() {
            return false;
        }

        tracing::info!("Window created and web view initialized");
        true
    }

    /// Set up the web view manager with the gate's policy and the content
    /// provider for the app scheme.
    pub(super) fn initialize_webviews(&mut self) {
        let exe_dir = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf));
        let assets_path =
            resolve_assets_dir(self.config.window.assets_dir.as_deref(), exe_dir.as_deref());

        if !assets_path.is_dir() {
            tracing::warn!(
                path = %assets_path.display(),
                "Assets directory not found, the app scheme will serve nothing"
            );
        }

        let start_page = self.config.window.start_page.trim_start_matches('/').to_string();
        let content_provider = ContentProvider::new(&assets_path).with_fallback(start_page);

        let mut manager = WebViewManager::new(self.gate.policy());
        manager.set_content_provider(self.gate.scheme().name(), content_provider);

        self.webviews = Some(manager);
        tracing::info!(
            assets_dir = %assets_path.display(),
            scheme = %self.gate.scheme(),
            "WebView manager initialized"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_state::core::test_support::app;

    #[test]
    fn configured_assets_dir_wins() {
        let dir = resolve_assets_dir(Some(Path::new("/srv/www")), Some(Path::new("/opt/app")));
        assert_eq!(dir, PathBuf::from("/srv/www"));
    }

    #[test]
    fn empty_assets_dir_means_default() {
        let dir = resolve_assets_dir(Some(Path::new("")), Some(Path::new("/opt/app")));
        assert_eq!(dir, Path::new("/opt/app").join(DEFAULT_ASSETS_DIR));
    }

    #[test]
    fn default_assets_dir_is_beside_executable() {
        let dir = resolve_assets_dir(None, Some(Path::new("/opt/app")));
        assert_eq!(dir, Path::new("/opt/app").join("assets/www"));

        let dir = resolve_assets_dir(None, None);
        assert_eq!(dir, PathBuf::from(DEFAULT_ASSETS_DIR));
    }

    #[test]
    fn initialize_webviews_installs_manager() {
        let mut app = app();
        app.initialize_webviews();
        assert!(app.webviews.is_some());
        assert!(app.main_view.is_none());
    }
}
