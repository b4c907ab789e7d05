//! Hand-off of external URLs to the in-app browser or the operating system.
//!
//! Both actions are fire-and-forget: presenting posts a request to the UI
//! loop, opening spawns a detached handler process. Neither is awaited.

use std::sync::Arc;

use linkgate_common::PlatformError;
use tracing::debug;
use url::Url;

/// Side effects the navigation engine performs when it cancels a navigation.
pub trait ExternalOpener: Send + Sync {
    /// Present `url` in the in-app browser surface.
    ///
    /// Returns `false` when no surface is available, in which case the
    /// caller falls back to [`ExternalOpener::open`].
    fn present_in_app_browser(&self, url: &Url) -> bool;

    /// Whether some registered external handler accepts this URL's scheme.
    fn can_open(&self, url: &Url) -> bool;

    /// Ask the operating system to open `url` with its registered handler.
    fn open(&self, url: &Url) -> Result<(), PlatformError>;
}

/// A window (or sheet) able to show arbitrary web pages outside the
/// embedded content. Implemented by the host shell.
pub trait BrowserSurface: Send + Sync {
    /// Request presentation. Returns `false` if the surface is gone.
    fn present(&self, url: &Url) -> bool;
}

/// Opener backed by the OS default handlers and an optional browser surface.
pub struct SystemOpener {
    handled_schemes: Vec<String>,
    browser: Option<Arc<dyn BrowserSurface>>,
}

impl SystemOpener {
    /// `handled_schemes` lists the non-web schemes the OS should receive
    /// (`mailto`, `tel`, ...). Matching is case-insensitive.
    pub fn new(handled_schemes: &[String]) -> Self {
        Self {
            handled_schemes: handled_schemes
                .iter()
                .map(|s| s.trim().to_ascii_lowercase())
                .filter(|s| !s.is_empty())
                .collect(),
            browser: None,
        }
    }

    /// Attach the in-app browser surface used for http(s) links.
    pub fn with_browser_surface(mut self, surface: Arc<dyn BrowserSurface>) -> Self {
        self.browser = Some(surface);
        self
    }

    pub fn handled_schemes(&self) -> &[String] {
        &self.handled_schemes
    }
}

impl ExternalOpener for SystemOpener {
    fn present_in_app_browser(&self, url: &Url) -> bool {
        match &self.browser {
            Some(surface) => surface.present(url),
            None => false,
        }
    }

    fn can_open(&self, url: &Url) -> bool {
        // `Url` already lower-cases the scheme.
        self.handled_schemes.iter().any(|s| s == url.scheme())
    }

    fn open(&self, url: &Url) -> Result<(), PlatformError> {
        if !matches!(url.scheme(), "http" | "https") && !self.can_open(url) {
            return Err(PlatformError::NotSupported(format!(
                "no handler for scheme {}",
                url.scheme()
            )));
        }
        debug!(url = %url, "opening with system handler");
        open::that_detached(url.as_str()).map_err(|e| PlatformError::OpenFailed {
            url: url.to_string(),
            reason: e.to_string(),
        })
    }
}
