/// Configuration for creating a new embedded WebView.
#[derive(Debug, Clone)]
pub struct WebViewConfig {
    /// Initial URL to load (takes precedence over `html`).
    pub url: Option<String>,
    /// Inline HTML rendered when no URL is given.
    pub html: Option<String>,
    /// Whether to enable dev tools (on by default in debug builds).
    pub devtools: bool,
    /// Custom user agent string.
    pub user_agent: Option<String>,
}

impl Default for WebViewConfig {
    fn default() -> Self {
        Self {
            url: None,
            html: None,
            devtools: cfg!(debug_assertions),
            user_agent: Some(format!("Linkgate/{}", env!("CARGO_PKG_VERSION"))),
        }
    }
}

impl WebViewConfig {
    /// Create a config that loads a URL.
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Default::default()
        }
    }

    /// Create a config that renders inline HTML.
    pub fn with_html(html: impl Into<String>) -> Self {
        Self {
            html: Some(html.into()),
            ..Default::default()
        }
    }
}
