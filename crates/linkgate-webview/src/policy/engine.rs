use std::sync::Arc;

use linkgate_config::schema::NavigationConfig;
use tracing::{debug, info, warn};
use url::Url;

use crate::opener::ExternalOpener;
use crate::scheme::UrlScheme;

use super::{classify, Classification, Decision, NavigationPolicy};

/// The navigation policy engine.
///
/// Order of precedence, first match wins:
/// `file://` and the app scheme render in place, http(s) goes to the
/// in-app browser (or the system browser), other schemes go to a
/// registered handler, and anything left over stays with the web view.
pub struct NavigationEngine {
    scheme: UrlScheme,
    prefer_in_app_browser: bool,
    opener: Arc<dyn ExternalOpener>,
}

impl NavigationEngine {
    pub fn new(scheme: UrlScheme, opener: Arc<dyn ExternalOpener>) -> Self {
        Self {
            scheme,
            prefer_in_app_browser: true,
            opener,
        }
    }

    /// Build from the `[navigation]` config section.
    pub fn from_config(config: &NavigationConfig, opener: Arc<dyn ExternalOpener>) -> Self {
        let scheme = UrlScheme::from_config(config.url_scheme.as_deref());
        Self::new(scheme, opener).with_in_app_browser(config.prefer_in_app_browser)
    }

    /// Whether http(s) links try the in-app browser before the system browser.
    pub fn with_in_app_browser(mut self, prefer: bool) -> Self {
        self.prefer_in_app_browser = prefer;
        self
    }

    pub fn scheme(&self) -> &UrlScheme {
        &self.scheme
    }

    fn open_with_system(&self, url: &Url) -> Decision {
        match self.opener.open(url) {
            Ok(()) => {
                info!(url = %url, "navigation handed to system handler");
                Decision::OpenedExternally
            }
            Err(e) => {
                warn!(url = %url, error = %e, "external open failed, leaving navigation to the web view");
                Decision::Allow
            }
        }
    }
}

impl NavigationPolicy for NavigationEngine {
    fn decide(&self, target: &str) -> Decision {
        let lowered = target.to_lowercase();

        let url = match Url::parse(target) {
            Ok(url) => url,
            Err(e) => {
                debug!(url = %target, error = %e, "unresolvable navigation target, allowing");
                return Decision::Allow;
            }
        };

        if classify(&lowered, &self.scheme) == Classification::Internal {
            debug!(url = %target, "internal navigation");
            return Decision::Allow;
        }

        match url.scheme() {
            "http" | "https" => {
                if self.prefer_in_app_browser && self.opener.present_in_app_browser(&url) {
                    info!(url = %url, "navigation presented in in-app browser");
                    return Decision::OpenedInAppBrowser;
                }
                self.open_with_system(&url)
            }
            _ if self.opener.can_open(&url) => self.open_with_system(&url),
            scheme => {
                debug!(url = %target, scheme, "no external handler, leaving navigation to the web view");
                Decision::Allow
            }
        }
    }
}
