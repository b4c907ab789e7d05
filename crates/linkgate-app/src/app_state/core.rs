//! LinkgateApp struct definition and constructor.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use winit::window::{Window, WindowId};

use linkgate_common::events::{Event, EventBus};
use linkgate_config::schema::LinkgateConfig;
use linkgate_webview::{
    BrowserSurface, LinkGate, SystemOpener, WebViewHandle, WebViewManager,
};

use super::browser::BrowserWindow;

/// Top-level application state.
pub struct LinkgateApp {
    pub(super) config: LinkgateConfig,
    pub(super) event_bus: EventBus,

    // Navigation policy and startup URL
    pub(super) gate: LinkGate,

    // Windowing
    pub(super) window: Option<Arc<Window>>,

    // Main web view
    pub(super) webviews: Option<WebViewManager>,
    pub(super) main_view: Option<WebViewHandle>,

    // In-app browser windows, keyed by their window
    pub(super) browsers: HashMap<WindowId, BrowserWindow>,

    // Warm deep links from later launches
    pub(super) tokio_runtime: Option<tokio::runtime::Runtime>,
    pub(super) instance: Option<(PathBuf, u16)>,

    // Whether the app should exit
    pub(super) should_exit: bool,
    pub(super) last_poll: Instant,
}

impl LinkgateApp {
    /// Build the app and subscribe its gate to `event_bus`.
    ///
    /// `surface` receives http(s) links the policy sends to the in-app
    /// browser.
    pub fn new(
        config: LinkgateConfig,
        event_bus: EventBus,
        surface: Arc<dyn BrowserSurface>,
    ) -> Self {
        let opener =
            SystemOpener::new(&config.navigation.handled_schemes).with_browser_surface(surface);
        let gate = LinkGate::initialize(&config.navigation, &event_bus, Arc::new(opener));

        Self {
            config,
            event_bus,
            gate,
            window: None,
            webviews: None,
            main_view: None,
            browsers: HashMap::new(),
            tokio_runtime: None,
            instance: None,
            should_exit: false,
            last_poll: Instant::now(),
        }
    }

    /// Deliver a deep link the way the platform would: cold-start or warm.
    pub fn publish_deep_link(&self, url: String) {
        let receivers = self.event_bus.publish(Event::DeepLink(url));
        tracing::debug!(receivers, "Deep link published");
    }
}
