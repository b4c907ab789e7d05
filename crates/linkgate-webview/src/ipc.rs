//! IPC bridge between the embedded content and Rust.
//!
//! - **JS -> Rust**: `window.linkgate.getStartupUrl()` posts
//!   `{"kind":"getStartupUrl","id":n}` through `window.ipc.postMessage`,
//!   which reaches the `ipc_handler` registered on the WebView.
//! - **Rust -> JS**: exactly one reply per request, delivered with
//!   `evaluate_script` as `window.linkgate.ipc._resolve(id, value)` or
//!   `window.linkgate.ipc._reject(id, message)`.

use serde::{Deserialize, Serialize};

use crate::gate::LinkGate;

/// Returns the pending startup URL (or `null`) and clears it.
pub const GET_STARTUP_URL: &str = "getStartupUrl";

/// A request from JavaScript.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IpcMessage {
    /// The command name.
    pub kind: String,
    /// Correlates the reply with the pending JS promise.
    #[serde(default)]
    pub id: Option<u64>,
    /// Command arguments (unused by current commands).
    #[serde(default)]
    pub payload: serde_json::Value,
}

impl IpcMessage {
    /// Parse an IPC message from a raw JSON string (from JS postMessage).
    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }

    pub fn new(kind: impl Into<String>, id: u64) -> Self {
        Self {
            kind: kind.into(),
            id: Some(id),
            payload: serde_json::Value::Null,
        }
    }
}

/// The single response to an [`IpcMessage`].
#[derive(Debug, Clone, PartialEq)]
pub enum IpcReply {
    Resolve(serde_json::Value),
    Reject(String),
}

impl IpcReply {
    /// JS snippet that settles the promise registered under `id`.
    pub fn to_script(&self, id: u64) -> String {
        match self {
            IpcReply::Resolve(value) => {
                let value = serde_json::to_string(value).unwrap_or_else(|_| "null".to_string());
                format!("window.linkgate.ipc._resolve({id}, {value});")
            }
            IpcReply::Reject(message) => {
                let message = serde_json::to_string(message)
                    .unwrap_or_else(|_| "\"error\"".to_string());
                format!("window.linkgate.ipc._reject({id}, {message});")
            }
        }
    }
}

/// Execute a bridge command against the gate.
pub fn dispatch(gate: &mut LinkGate, msg: &IpcMessage) -> IpcReply {
    match msg.kind.as_str() {
        GET_STARTUP_URL => match gate.get_startup_url() {
            Some(url) => IpcReply::Resolve(serde_json::Value::String(url)),
            None => IpcReply::Resolve(serde_json::Value::Null),
        },
        other => IpcReply::Reject(format!("unknown command: {other}")),
    }
}

/// JavaScript snippet that sets up the bridge on the JS side.
/// Injected as an initialization script into every embedded WebView.
pub const IPC_INIT_SCRIPT: &str = r#"
(function() {
    if (window.linkgate) { return; }
    var pending = {};
    var nextId = 1;
    function call(kind, payload) {
        return new Promise(function(resolve, reject) {
            var id = nextId++;
            pending[id] = { resolve: resolve, reject: reject };
            window.ipc.postMessage(JSON.stringify({
                kind: kind,
                id: id,
                payload: payload === undefined ? null : payload
            }));
        });
    }
    function settle(id, ok, value) {
        var entry = pending[id];
        if (!entry) { return; }
        delete pending[id];
        if (ok) { entry.resolve(value); } else { entry.reject(new Error(value)); }
    }
    window.linkgate = {
        getStartupUrl: function() { return call("getStartupUrl"); },
        ipc: {
            _resolve: function(id, value) { settle(id, true, value); },
            _reject: function(id, message) { settle(id, false, message); }
        }
    };
})();
"#;

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use linkgate_common::{Event, EventBus, PlatformError};
    use linkgate_config::schema::NavigationConfig;
    use url::Url;

    use super::*;
    use crate::opener::ExternalOpener;

    struct NoopOpener;

    impl ExternalOpener for NoopOpener {
        fn present_in_app_browser(&self, _url: &Url) -> bool {
            false
        }

        fn can_open(&self, _url: &Url) -> bool {
            false
        }

        fn open(&self, _url: &Url) -> Result<(), PlatformError> {
            Ok(())
        }
    }

    fn gate(bus: &EventBus) -> LinkGate {
        LinkGate::initialize(&NavigationConfig::default(), bus, Arc::new(NoopOpener))
    }

    #[test]
    fn parses_request_with_id() {
        let msg = IpcMessage::from_json(r#"{"kind":"getStartupUrl","id":7,"payload":null}"#)
            .unwrap();
        assert_eq!(msg.kind, "getStartupUrl");
        assert_eq!(msg.id, Some(7));
    }

    #[test]
    fn parses_request_without_optional_fields() {
        let msg = IpcMessage::from_json(r#"{"kind":"getStartupUrl"}"#).unwrap();
        assert_eq!(msg.id, None);
        assert!(msg.payload.is_null());
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(IpcMessage::from_json("not json").is_none());
        assert!(IpcMessage::from_json(r#"{"id":1}"#).is_none());
    }

    #[test]
    fn get_startup_url_resolves_then_clears() {
        let bus = EventBus::new(8);
        let mut gate = gate(&bus);
        bus.publish(Event::DeepLink("myapp://promo/spring".into()));

        let msg = IpcMessage::new(GET_STARTUP_URL, 1);
        assert_eq!(
            dispatch(&mut gate, &msg),
            IpcReply::Resolve(serde_json::json!("myapp://promo/spring"))
        );
        assert_eq!(
            dispatch(&mut gate, &msg),
            IpcReply::Resolve(serde_json::Value::Null)
        );
    }

    #[test]
    fn unknown_command_is_rejected() {
        let bus = EventBus::new(8);
        let mut gate = gate(&bus);
        let msg = IpcMessage::new("launchRockets", 3);

        assert_eq!(
            dispatch(&mut gate, &msg),
            IpcReply::Reject("unknown command: launchRockets".into())
        );
    }

    #[test]
    fn resolve_script_embeds_json_value() {
        let script = IpcReply::Resolve(serde_json::json!("myapp://a\"b")).to_script(4);
        assert_eq!(script, r#"window.linkgate.ipc._resolve(4, "myapp://a\"b");"#);

        let script = IpcReply::Resolve(serde_json::Value::Null).to_script(5);
        assert_eq!(script, "window.linkgate.ipc._resolve(5, null);");
    }

    #[test]
    fn reject_script_escapes_message() {
        let script = IpcReply::Reject("bad </script> \"x\"".into()).to_script(9);
        assert!(script.starts_with("window.linkgate.ipc._reject(9, "));
        assert!(script.contains(r#"\"x\""#));
    }

    #[test]
    fn init_script_defines_bridge() {
        assert!(IPC_INIT_SCRIPT.contains("window.linkgate"));
        assert!(IPC_INIT_SCRIPT.contains("getStartupUrl"));
        assert!(IPC_INIT_SCRIPT.contains("window.ipc.postMessage"));
        assert!(IPC_INIT_SCRIPT.contains("_resolve"));
        assert!(IPC_INIT_SCRIPT.contains("_reject"));
    }
}
