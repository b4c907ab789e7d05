//! WebView lifecycle management.
//!
//! `WebViewManager` creates and destroys `wry::WebView` instances with the
//! navigation policy, the IPC bridge and the bundled-content protocol
//! attached.

use std::sync::{Arc, Mutex, PoisonError};

use tracing::debug;

use crate::content::ContentProvider;
use crate::events::WebViewEvent;
use crate::policy::NavigationPolicy;

mod handle;
pub mod handlers;
mod lifecycle;
mod types;

pub use handle::WebViewHandle;
pub use types::WebViewConfig;

pub(crate) type EventSink = Arc<Mutex<Vec<WebViewEvent>>>;

/// Creates WebViews that share one navigation policy and event queue.
pub struct WebViewManager {
    /// Event sink; events are pushed here for the main event loop to consume.
    pub(crate) events: EventSink,
    policy: Arc<dyn NavigationPolicy>,
    /// Scheme name and provider for bundled content.
    content: Option<(String, Arc<ContentProvider>)>,
}

impl WebViewManager {
    pub fn new(policy: Arc<dyn NavigationPolicy>) -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
            policy,
            content: None,
        }
    }

    /// Serve bundled assets under `scheme_name://` in WebViews created
    /// after this call.
    pub fn set_content_provider(&mut self, scheme_name: impl Into<String>, provider: ContentProvider) {
        self.content = Some((scheme_name.into(), Arc::new(provider)));
    }

    /// Drain all pending events.
    pub fn drain_events(&self) -> Vec<WebViewEvent> {
        let mut events = self.events.lock().unwrap_or_else(PoisonError::into_inner);
        std::mem::take(&mut *events)
    }

    /// Destroy a WebView and report it as closed.
    pub fn destroy(&self, handle: WebViewHandle) {
        let view_id = handle.view_id;
        drop(handle);
        debug!(view_id, "WebView destroyed");
        push_event(&self.events, WebViewEvent::Closed { view_id });
    }
}

pub(crate) fn push_event(events: &EventSink, event: WebViewEvent) {
    events
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .push(event);
}
