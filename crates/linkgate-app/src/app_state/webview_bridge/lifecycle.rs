//! Main web view lifecycle: create, sync bounds, poll events.

use linkgate_webview::content::content_url;
use linkgate_webview::{Decision, WebViewConfig, WebViewEvent};

use crate::app_state::core::LinkgateApp;
use crate::app_state::types::MAIN_VIEW_ID;

use super::bounds::fill_window_rect;

// =============================================================================
// WEBVIEW LIFECYCLE
// =============================================================================

impl LinkgateApp {
    /// URL the main web view starts on: the start page over the app scheme.
    pub(in crate::app_state) fn start_url(&self) -> String {
        content_url(self.gate.scheme().name(), &self.config.window.start_page)
    }

    /// Create the main web view filling the window.
    pub(in crate::app_state) fn create_main_webview(&mut self) -> bool {
        let Some(window) = &self.window else {
            tracing::warn!("Cannot create web view: no window");
            return false;
        };
        let Some(manager) = &self.webviews else {
            tracing::warn!("Cannot create web view: manager not initialized");
            return false;
        };

        let url = self.start_url();
        let bounds = fill_window_rect(window.inner_size(), window.scale_factor());
        let config = WebViewConfig::with_url(&url);

        match manager.create(MAIN_VIEW_ID, window.as_ref(), bounds, config) {
            Ok(handle) => {
                tracing::info!(url = %url, "Main web view created");
                self.main_view = Some(handle);
                true
            }
            Err(e) => {
                tracing::error!(url = %url, error = %e, "Failed to create main web view");
                false
            }
        }
    }

    /// Keep the main web view covering the window.
    pub(in crate::app_state) fn sync_webview_bounds(&mut self) {
        let (Some(window), Some(handle)) = (&self.window, &self.main_view) else {
            return;
        };

        let bounds = fill_window_rect(window.inner_size(), window.scale_factor());
        if let Err(e) = handle.set_bounds(bounds) {
            tracing::warn!(error = %e, "Failed to update web view bounds");
        }
    }

    /// Process pending web view events (IPC messages, page loads, etc.).
    pub(in crate::app_state) fn poll_webview_events(&mut self) {
        let events: Vec<WebViewEvent> = match &self.webviews {
            Some(manager) => manager.drain_events(),
            None => return,
        };

        for event in events {
            match event {
                WebViewEvent::IpcMessage { view_id, body } => {
                    self.handle_ipc_message(view_id, &body);
                }
                WebViewEvent::PageLoad {
                    view_id,
                    state,
                    url,
                } => {
                    tracing::debug!(view_id, ?state, url = %url, "WebView page load event");
                }
                WebViewEvent::TitleChanged { view_id, title } => {
                    if view_id == MAIN_VIEW_ID {
                        self.update_window_title(&title);
                    }
                }
                WebViewEvent::NavigationDecided {
                    view_id,
                    url,
                    decision,
                } => match decision {
                    Decision::Allow => {
                        tracing::trace!(view_id, url = %url, "Navigation stays in the web view");
                    }
                    Decision::OpenedInAppBrowser | Decision::OpenedExternally => {
                        tracing::debug!(view_id, url = %url, ?decision, "Navigation handed off");
                    }
                },
                WebViewEvent::Closed { view_id } => {
                    tracing::debug!(view_id, "WebView closed event");
                }
            }
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
