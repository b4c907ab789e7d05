//! Navigation interception and startup deep links for embedded web content.
//!
//! - A navigation policy that keeps `file://` and the app's own scheme
//!   inside the WebView and hands everything else to the in-app browser
//!   or the operating system
//! - A one-shot holder for the URL that launched the app, exposed to
//!   JavaScript as `window.linkgate.getStartupUrl()`
//! - `wry` integration: managed WebViews with the policy, the IPC bridge
//!   and a custom protocol for bundled content attached

pub mod content;
pub mod deep_link;
pub mod events;
pub mod gate;
pub mod ipc;
pub mod manager;
pub mod opener;
pub mod policy;
pub mod scheme;
pub mod startup;

pub use content::ContentProvider;
pub use deep_link::DeepLinkListener;
pub use events::{PageLoadState, WebViewEvent};
pub use gate::LinkGate;
pub use ipc::{IpcMessage, IpcReply};
pub use manager::{WebViewConfig, WebViewHandle, WebViewManager};
pub use opener::{BrowserSurface, ExternalOpener, SystemOpener};
pub use policy::{Classification, Decision, NavigationEngine, NavigationPolicy};
pub use scheme::UrlScheme;
pub use startup::StartupUrlHolder;
