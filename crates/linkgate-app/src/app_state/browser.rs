//! In-app browser: external web pages in their own top-level windows.
//!
//! The navigation policy runs off the winit loop, so presentation is
//! requested with an [`AppEvent`] through the loop proxy and the window is
//! created when the loop delivers it.

use std::sync::{Mutex, PoisonError};

use url::Url;
use winit::dpi::LogicalSize;
use winit::event_loop::{ActiveEventLoop, EventLoopProxy};
use winit::window::{Window, WindowAttributes, WindowId};
use wry::{WebView, WebViewBuilder};

use linkgate_webview::BrowserSurface;

use super::core::LinkgateApp;
use super::types::AppEvent;

/// Browser surface backed by the winit event loop.
///
/// Available for as long as the loop accepts events.
pub struct ProxySurface {
    proxy: Mutex<EventLoopProxy<AppEvent>>,
}

impl ProxySurface {
    pub fn new(proxy: EventLoopProxy<AppEvent>) -> Self {
        Self {
            proxy: Mutex::new(proxy),
        }
    }
}

impl BrowserSurface for ProxySurface {
    fn present(&self, url: &Url) -> bool {
        let proxy = self.proxy.lock().unwrap_or_else(PoisonError::into_inner);
        match proxy.send_event(AppEvent::PresentBrowser(url.clone())) {
            Ok(()) => true,
            Err(_) => {
                tracing::debug!(url = %url, "In-app browser unavailable: event loop closed");
                false
            }
        }
    }
}

/// A top-level window showing one external page.
pub(super) struct BrowserWindow {
    // Declared first so it drops before its window.
    _webview: WebView,
    _window: Window,
}

/// Window title for a page: its host, or the whole URL when it has none.
pub(super) fn browser_title(url: &Url) -> String {
    match url.host_str() {
        Some(host) if !host.is_empty() => host.to_string(),
        _ => url.to_string(),
    }
}

impl LinkgateApp {
    /// Open `url` in a new in-app browser window.
    ///
    /// The page gets a plain web view: no navigation policy, no bridge.
    pub(super) fn open_browser_window(&mut self, event_loop: &ActiveEventLoop, url: Url) {
        let attrs = WindowAttributes::default()
            .with_title(browser_title(&url))
            .with_inner_size(LogicalSize::new(
                f64::from(self.config.window.width),
                f64::from(self.config.window.height),
            ));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => w,
            Err(e) => {
                tracing::error!(url = %url, "Failed to create browser window: {e}");
                return;
            }
        };

        let webview = match WebViewBuilder::new().with_url(url.as_str()).build(&window) {
            Ok(wv) => wv,
            Err(e) => {
                tracing::error!(url = %url, error = %e, "Failed to create browser web view");
                return;
            }
        };

        tracing::info!(url = %url, "In-app browser opened");
        self.browsers.insert(
            window.id(),
            BrowserWindow {
                _webview: webview,
                _window: window,
            },
        );
    }

    /// Close the browser window `id`. Returns `false` if it is not ours.
    pub(super) fn close_browser_window(&mut self, id: WindowId) -> bool {
        if self.browsers.remove(&id).is_some() {
            tracing::info!(open = self.browsers.len(), "In-app browser closed");
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_is_the_host() {
        let url = Url::parse("https://www.example.com/path?q=1").unwrap();
        assert_eq!(browser_title(&url), "www.example.com");
    }

    #[test]
    fn hostless_url_uses_full_url() {
        let url = Url::parse("data:text/plain,hello").unwrap();
        assert_eq!(browser_title(&url), "data:text/plain,hello");
    }
}
