//! WebView event types.

use serde::{Deserialize, Serialize};

use crate::policy::Decision;

/// State of a page load lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageLoadState {
    /// Navigation has started.
    Started,
    /// Page has fully loaded.
    Finished,
}

impl From<wry::PageLoadEvent> for PageLoadState {
    fn from(e: wry::PageLoadEvent) -> Self {
        match e {
            wry::PageLoadEvent::Started => Self::Started,
            wry::PageLoadEvent::Finished => Self::Finished,
        }
    }
}

/// Events emitted by a managed WebView, drained by the event loop.
#[derive(Debug, Clone)]
pub enum WebViewEvent {
    /// Page load state changed. Carries the URL.
    PageLoad {
        view_id: u32,
        state: PageLoadState,
        url: String,
    },
    /// Document title changed.
    TitleChanged { view_id: u32, title: String },
    /// A bridge request was received from JavaScript.
    IpcMessage { view_id: u32, body: String },
    /// The navigation policy ruled on a navigation attempt.
    NavigationDecided {
        view_id: u32,
        url: String,
        decision: Decision,
    },
    /// WebView was destroyed.
    Closed { view_id: u32 },
}
