//! Navigation policy: decide whether a navigation renders in place or is
//! handed off outside the embedded content.
//!
//! The web view host asks a [`NavigationPolicy`] once per navigation
//! attempt and gets back a [`Decision`]. Nothing here depends on a UI
//! toolkit; the wry binding lives in `manager::handlers`.

mod engine;


use serde::{Deserialize, Serialize};

use crate::scheme::UrlScheme;

pub use engine::NavigationEngine;

/// Prefix of local bundled assets, always rendered in place.
pub const FILE_PREFIX: &str = "file://";

/// Where a navigation target belongs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Classification {
    /// Render inside the embedded content.
    Internal,
    /// Hand off to something outside the embedded content.
    External,
}

/// Outcome of a single navigation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decision {
    /// Let the web view proceed with its default handling.
    Allow,
    /// Navigation cancelled; the URL was presented in the in-app browser.
    OpenedInAppBrowser,
    /// Navigation cancelled; the URL was passed to a system handler.
    OpenedExternally,
}

impl Decision {
    /// The answer the web view's navigation callback expects.
    pub fn allows_navigation(self) -> bool {
        matches!(self, Decision::Allow)
    }
}

/// Capability the hosting integration layer calls for every navigation.
pub trait NavigationPolicy: Send + Sync {
    fn decide(&self, target: &str) -> Decision;
}

/// Classify an already lower-cased URL against the app scheme.
pub fn classify(lowered_url: &str, scheme: &UrlScheme) -> Classification {
    if lowered_url.starts_with(FILE_PREFIX) || scheme.matches(lowered_url) {
        Classification::Internal
    } else {
        Classification::External
    }
}
