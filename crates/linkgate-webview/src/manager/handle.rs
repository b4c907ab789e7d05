use wry::WebView;

use crate::ipc::IpcReply;

/// Handle to a managed WebView instance.
pub struct WebViewHandle {
    pub(super) webview: WebView,
    pub(super) view_id: u32,
}

impl WebViewHandle {
    pub fn view_id(&self) -> u32 {
        self.view_id
    }

    /// Settle the JS promise for bridge request `id`.
    pub fn send_reply(&self, id: u64, reply: &IpcReply) -> Result<(), wry::Error> {
        self.webview.evaluate_script(&reply.to_script(id))
    }

    /// Set the WebView bounds (position + size) within the parent window.
    pub fn set_bounds(&self, bounds: wry::Rect) -> Result<(), wry::Error> {
        self.webview.set_bounds(bounds)
    }
}
