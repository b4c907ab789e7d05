//! IPC message validation and dispatch from the web view to the gate.

use linkgate_webview::ipc::{self, IpcReply};
use linkgate_webview::IpcMessage;

use crate::app_state::core::LinkgateApp;

// =============================================================================
// DISPATCH
// =============================================================================

impl LinkgateApp {
    /// Handle a single IPC message from a web view.
    pub(in crate::app_state) fn handle_ipc_message(&mut self, view_id: u32, body: &str) {
        let Some((id, reply)) = self.answer_ipc(view_id, body) else {
            return;
        };

        let Some(handle) = self.main_view.as_ref().filter(|h| h.view_id() == view_id) else {
            tracing::warn!(view_id, "IPC reply dropped: no such web view");
            return;
        };
        if let Err(e) = handle.send_reply(id, &reply) {
            tracing::warn!(view_id, id, error = %e, "Failed to send IPC reply");
        }
    }

    /// Run the request in `body` against the gate.
    ///
    /// Returns the reply and the request id it settles, or `None` when the
    /// message is malformed or expects no reply.
    pub(in crate::app_state) fn answer_ipc(
        &mut self,
        view_id: u32,
        body: &str,
    ) -> Option<(u64, IpcReply)> {
        let msg = match IpcMessage::from_json(body) {
            Some(m) => m,
            None => {
                tracing::warn!(
                    view_id,
                    body_len = body.len(),
                    "IPC message rejected: failed to parse"
                );
                return None;
            }
        };

        tracing::debug!(view_id, kind = %msg.kind, "IPC message dispatched");

        let reply = ipc::dispatch(&mut self.gate, &msg);
        if let IpcReply::Reject(ref reason) = reply {
            tracing::warn!(view_id, kind = %msg.kind, reason = %reason, "IPC request rejected");
        }

        match msg.id {
            Some(id) => Some((id, reply)),
            None => {
                tracing::debug!(view_id, kind = %msg.kind, "IPC request without id, reply dropped");
                None
            }
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
