//! The app's own URL scheme, normalized once at startup.

use std::fmt;

use linkgate_config::schema::{is_valid_scheme_name, DEFAULT_URL_SCHEME};
use tracing::warn;

/// A lower-cased scheme prefix that always ends with `://`, e.g. `myapp://`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlScheme {
    prefix: String,
}

impl UrlScheme {
    /// Build from an optional configured scheme name.
    ///
    /// `"MyScheme"`, `"MyScheme:"` and `"MyScheme://"` all normalize to
    /// `myscheme://`. A missing or unusable name falls back to `myapp://`.
    pub fn from_config(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::default();
        };

        let trimmed = raw.trim();
        let name = trimmed
            .strip_suffix("://")
            .or_else(|| trimmed.strip_suffix(':'))
            .unwrap_or(trimmed);

        if !is_valid_scheme_name(name) {
            warn!(
                configured = %raw,
                fallback = DEFAULT_URL_SCHEME,
                "invalid url_scheme, using default"
            );
            return Self::default();
        }

        Self {
            prefix: format!("{}://", name.to_ascii_lowercase()),
        }
    }

    /// The full prefix, including `://`.
    pub fn as_str(&self) -> &str {
        &self.prefix
    }

    /// The bare scheme name, without `://`.
    pub fn name(&self) -> &str {
        self.prefix.trim_end_matches("://")
    }

    /// Whether an already lower-cased URL starts with this scheme.
    pub fn matches(&self, lowered_url: &str) -> bool {
        lowered_url.starts_with(&self.prefix)
    }
}

impl Default for UrlScheme {
    fn default() -> Self {
        Self {
            prefix: format!("{DEFAULT_URL_SCHEME}://"),
        }
    }
}

impl fmt::Display for UrlScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_myapp() {
        assert_eq!(UrlScheme::default().as_str(), "myapp://");
        assert_eq!(UrlScheme::from_config(None).as_str(), "myapp://");
    }

    #[test]
    fn lowercases_and_appends_separator() {
        let scheme = UrlScheme::from_config(Some("MyScheme"));
        assert_eq!(scheme.as_str(), "myscheme://");
        assert_eq!(scheme.name(), "myscheme");
    }

    #[test]
    fn accepts_trailing_separator() {
        assert_eq!(
            UrlScheme::from_config(Some("shop://")).as_str(),
            "shop://"
        );
        assert_eq!(UrlScheme::from_config(Some("shop:")).as_str(), "shop://");
        assert_eq!(
            UrlScheme::from_config(Some("  Shop  ")).as_str(),
            "shop://"
        );
    }

    #[test]
    fn invalid_names_fall_back_to_default() {
        for raw in ["", "   ", "://", "1shop", "my shop", "shop/path"] {
            assert_eq!(
                UrlScheme::from_config(Some(raw)).as_str(),
                "myapp://",
                "raw = {raw:?}"
            );
        }
    }

    #[test]
    fn matches_prefix_only() {
        let scheme = UrlScheme::from_config(Some("myscheme"));
        assert!(scheme.matches("myscheme://path"));
        assert!(scheme.matches("myscheme://"));
        assert!(!scheme.matches("myscheme:path"));
        assert!(!scheme.matches("https://myscheme://"));
    }

    #[test]
    fn display_is_prefix() {
        assert_eq!(UrlScheme::from_config(Some("App")).to_string(), "app://");
    }
}
