use std::sync::Arc;

use tracing::{debug, warn};
use wry::WebViewBuilder;

use crate::content::is_rewritten_content_url;
use crate::events::{PageLoadState, WebViewEvent};
use crate::policy::NavigationPolicy;

use super::{push_event, EventSink, WebViewManager};

// =============================================================================
// NAVIGATION
// =============================================================================

/// Ask the policy about `url`, record the decision, and return the answer
/// for wry (`true` lets the WebView proceed).
pub fn navigation_verdict(
    policy: &dyn NavigationPolicy,
    events: &EventSink,
    view_id: u32,
    url: String,
) -> bool {
    let decision = policy.decide(&url);
    debug!(view_id, url = %url, ?decision, "navigation decided");
    let allow = decision.allows_navigation();
    push_event(
        events,
        WebViewEvent::NavigationDecided {
            view_id,
            url,
            decision,
        },
    );
    allow
}

/// Whether `url` skips the policy because it is bundled content.
///
/// Only WebView2 rewrites the custom protocol to `http://<name>.localhost`;
/// elsewhere that origin is an ordinary web URL and goes through the policy.
pub fn bypasses_policy(url: &str, content_scheme: Option<&str>) -> bool {
    cfg!(windows) && content_scheme.is_some_and(|name| is_rewritten_content_url(url, name))
}

// =============================================================================
// HANDLER ATTACHMENTS
// =============================================================================

impl WebViewManager {
    pub(super) fn attach_navigation_handler<'a>(
        builder: WebViewBuilder<'a>,
        policy: Arc<dyn NavigationPolicy>,
        content_scheme: Option<String>,
        events: EventSink,
        view_id: u32,
    ) -> WebViewBuilder<'a> {
        builder.with_navigation_handler(move |url| {
            if bypasses_policy(&url, content_scheme.as_deref()) {
                debug!(view_id, url = %url, "bundled content navigation");
                return true;
            }
            navigation_verdict(policy.as_ref(), &events, view_id, url)
        })
    }

    pub(super) fn attach_ipc_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: EventSink,
        view_id: u32,
    ) -> WebViewBuilder<'a> {
        builder.with_ipc_handler(move |request| {
            let body = request.body().to_string();

            if serde_json::from_str::<serde_json::Value>(&body).is_err() {
                warn!(view_id, body_len = body.len(), "IPC message rejected: invalid JSON");
                return;
            }

            debug!(view_id, body_len = body.len(), "IPC message from JS");
            push_event(&events, WebViewEvent::IpcMessage { view_id, body });
        })
    }

    pub(super) fn attach_page_load_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: EventSink,
        view_id: u32,
    ) -> WebViewBuilder<'a> {
        builder.with_on_page_load_handler(move |event, url| {
            let state = PageLoadState::from(event);
            debug!(view_id, ?state, url = %url, "page load");
            push_event(&events, WebViewEvent::PageLoad { view_id, state, url });
        })
    }

    pub(super) fn attach_title_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: EventSink,
        view_id: u32,
    ) -> WebViewBuilder<'a> {
        builder.with_document_title_changed_handler(move |title| {
            debug!(view_id, title = %title, "title changed");
            push_event(&events, WebViewEvent::TitleChanged { view_id, title });
        })
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::policy::Decision;

    /// Allows `file:` URLs, hands everything else off.
    struct FilesOnly;

    impl NavigationPolicy for FilesOnly {
        fn decide(&self, target: &str) -> Decision {
            if target.starts_with("file:") {
                Decision::Allow
            } else {
                Decision::OpenedExternally
            }
        }
    }

    fn sink() -> EventSink {
        Arc::new(Mutex::new(Vec::new()))
    }

    #[test]
    fn allowed_navigation_returns_true_and_is_recorded() {
        let events = sink();
        assert!(navigation_verdict(&FilesOnly, &events, 1, "file:///a.html".into()));

        let recorded = events.lock().unwrap();
        assert_eq!(recorded.len(), 1);
        assert!(matches!(
            &recorded[0],
            WebViewEvent::NavigationDecided { view_id: 1, url, decision: Decision::Allow }
                if url == "file:///a.html"
        ));
    }

    #[test]
    fn handed_off_navigation_returns_false() {
        let events = sink();
        assert!(!navigation_verdict(&FilesOnly, &events, 2, "https://example.com".into()));

        let recorded = events.lock().unwrap();
        assert!(matches!(
            &recorded[0],
            WebViewEvent::NavigationDecided {
                view_id: 2,
                decision: Decision::OpenedExternally,
                ..
            }
        ));
    }

    #[test]
    fn every_attempt_is_recorded_in_order() {
        let events = sink();
        navigation_verdict(&FilesOnly, &events, 1, "file:///a".into());
        navigation_verdict(&FilesOnly, &events, 1, "tel:1".into());
        navigation_verdict(&FilesOnly, &events, 1, "file:///b".into());

        let urls: Vec<String> = events
            .lock()
            .unwrap()
            .iter()
            .filter_map(|e| match e {
                WebViewEvent::NavigationDecided { url, .. } => Some(url.clone()),
                _ => None,
            })
            .collect();
        assert_eq!(urls, vec!["file:///a", "tel:1", "file:///b"]);
    }

    #[test]
    fn rewritten_content_origin_bypasses_only_on_windows() {
        let url = "http://myapp.localhost/index.html";
        assert_eq!(bypasses_policy(url, Some("myapp")), cfg!(windows));
        assert!(!bypasses_policy(url, None));
        assert!(!bypasses_policy("https://example.com/", Some("myapp")));
    }
}
