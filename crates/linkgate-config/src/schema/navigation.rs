//! Navigation policy configuration types.

use serde::{Deserialize, Serialize};

/// Scheme used when `url_scheme` is missing or unusable.
pub const DEFAULT_URL_SCHEME: &str = "myapp";

/// How navigations from the embedded content are classified and handed off.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    /// App scheme treated as always-internal (`"myapp"` becomes `myapp://`).
    pub url_scheme: Option<String>,
    /// Present http(s) links in the in-app browser window instead of the
    /// system browser.
    pub prefer_in_app_browser: bool,
    /// Schemes with a registered external handler (mail client, dialer...).
    pub handled_schemes: Vec<String>,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            url_scheme: None,
            prefer_in_app_browser: true,
            handled_schemes: vec!["mailto".into(), "tel".into(), "sms".into()],
        }
    }
}

/// Whether `name` is a syntactically valid URL scheme name:
/// an ASCII letter followed by letters, digits, `+`, `-` or `.`.
pub fn is_valid_scheme_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}
