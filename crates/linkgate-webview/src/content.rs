//! Bundled content served over the app scheme.
//!
//! The main WebView registers the configured scheme as a custom protocol,
//! so `myapp://localhost/index.html` (and in-app deep links) resolve to
//! files under the assets directory without a local HTTP server.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

/// Serves files from a base directory.
pub struct ContentProvider {
    base_dir: PathBuf,
    /// Page served for extensionless paths that match no file, so in-app
    /// routes like `myapp://orders/42` still render the app.
    fallback: Option<String>,
}

impl ContentProvider {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            fallback: None,
        }
    }

    pub fn with_fallback(mut self, page: impl Into<String>) -> Self {
        self.fallback = Some(page.into());
        self
    }

    /// Resolve a request path to MIME type and content bytes.
    ///
    /// Paths escaping the base directory (`..`, symlinks) resolve to `None`.
    pub fn resolve(&self, path: &str) -> Option<(Cow<'_, str>, Cow<'_, [u8]>)> {
        let clean = path.trim_start_matches('/');
        let clean = clean.split(['?', '#']).next().unwrap_or_default();

        if let Some(found) = self.resolve_exact(clean) {
            return Some(found);
        }
        match &self.fallback {
            Some(page) if Path::new(clean).extension().is_none() => self.resolve_exact(page),
            _ => None,
        }
    }

    fn resolve_exact(&self, clean: &str) -> Option<(Cow<'_, str>, Cow<'_, [u8]>)> {
        let file_path = self.base_dir.join(clean);
        let canonical_base = std::fs::canonicalize(&self.base_dir).ok()?;
        let canonical_file = std::fs::canonicalize(&file_path).ok()?;
        if !canonical_file.starts_with(&canonical_base) || !canonical_file.is_file() {
            return None;
        }

        let data = std::fs::read(&canonical_file).ok()?;
        let mime = mime_from_extension(&file_path);
        Some((Cow::Owned(mime.to_string()), Cow::Owned(data)))
    }
}

/// Extract the asset path from a custom-protocol request URI.
///
/// Handles `myapp://localhost/a`, `myapp:///a`, `myapp://a` and the
/// WebView2 rewrite `http://myapp.localhost/a`.
pub fn request_path<'a>(uri: &'a str, scheme_name: &str) -> &'a str {
    if let Some(rest) = after_origin(uri, &format!("{scheme_name}://localhost")) {
        return rest.trim_start_matches('/');
    }
    let prefixes = [
        format!("{scheme_name}:///"),
        format!("{scheme_name}://"),
        format!("http://{scheme_name}.localhost/"),
        format!("https://{scheme_name}.localhost/"),
    ];
    prefixes
        .iter()
        .find_map(|prefix| strip_prefix_ignore_case(uri, prefix))
        .unwrap_or("")
}

/// URL of `page` in the bundled content for the WebView's platform.
///
/// WebView2 serves custom protocols as `http://<name>.localhost/`.
pub fn content_url(scheme_name: &str, page: &str) -> String {
    let page = page.trim_start_matches('/');
    if cfg!(windows) {
        format!("http://{scheme_name}.localhost/{page}")
    } else {
        format!("{scheme_name}://localhost/{page}")
    }
}

/// Whether `url` is the WebView2 rewrite of the custom protocol, which
/// looks like an ordinary http(s) URL to the navigation policy.
pub fn is_rewritten_content_url(url: &str, scheme_name: &str) -> bool {
    ["http", "https"]
        .iter()
        .any(|web| after_origin(url, &format!("{web}://{scheme_name}.localhost")).is_some())
}

/// The remainder of `url` after `origin`, when the host ends exactly there.
fn after_origin<'a>(url: &'a str, origin: &str) -> Option<&'a str> {
    strip_prefix_ignore_case(url, origin)
        .filter(|rest| rest.is_empty() || rest.starts_with(['/', '?', '#']))
}

fn strip_prefix_ignore_case<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    let head = s.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix).then(|| &s[prefix.len()..])
}

/// Guess MIME type from file extension.
fn mime_from_extension(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("html") | Some("htm") => "text/html",
        Some("css") => "text/css",
        Some("js") | Some("mjs") => "application/javascript",
        Some("json") => "application/json",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("wasm") => "application/wasm",
        Some("ico") => "image/x-icon",
        Some("woff2") => "font/woff2",
        Some("webp") => "image/webp",
        Some("txt") => "text/plain",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider_with_files() -> (tempfile::TempDir, ContentProvider) {
        let dir = tempfile::tempdir().unwrap();
        let www = dir.path().join("www");
        std::fs::create_dir_all(www.join("css")).unwrap();
        std::fs::write(www.join("index.html"), "<h1>home</h1>").unwrap();
        std::fs::write(www.join("css/app.css"), "body{}").unwrap();
        std::fs::write(dir.path().join("secret.txt"), "nope").unwrap();
        let provider = ContentProvider::new(&www);
        (dir, provider)
    }

    #[test]
    fn resolves_files_with_mime() {
        let (_dir, cp) = provider_with_files();

        let (mime, data) = cp.resolve("index.html").unwrap();
        assert_eq!(mime.as_ref(), "text/html");
        assert_eq!(data.as_ref(), b"<h1>home</h1>");

        let (mime, _) = cp.resolve("/css/app.css").unwrap();
        assert_eq!(mime.as_ref(), "text/css");
    }

    #[test]
    fn ignores_query_and_fragment() {
        let (_dir, cp) = provider_with_files();
        assert!(cp.resolve("index.html?from=deeplink#top").is_some());
    }

    #[test]
    fn missing_file_and_directories_resolve_to_none() {
        let (_dir, cp) = provider_with_files();
        assert!(cp.resolve("nope.html").is_none());
        assert!(cp.resolve("css").is_none());
    }

    #[test]
    fn rejects_directory_traversal() {
        let (_dir, cp) = provider_with_files();
        assert!(cp.resolve("../secret.txt").is_none());
        assert!(cp.resolve("css/../../secret.txt").is_none());
    }

    #[test]
    fn extensionless_routes_fall_back_to_start_page() {
        let (_dir, cp) = provider_with_files();
        let cp = cp.with_fallback("index.html");

        let (mime, data) = cp.resolve("orders/42").unwrap();
        assert_eq!(mime.as_ref(), "text/html");
        assert_eq!(data.as_ref(), b"<h1>home</h1>");
        assert!(cp.resolve("missing.png").is_none());
    }

    #[test]
    fn request_path_strips_scheme_forms() {
        assert_eq!(request_path("myapp://localhost/index.html", "myapp"), "index.html");
        assert_eq!(request_path("myapp://localhost", "myapp"), "");
        assert_eq!(request_path("myapp:///css/app.css", "myapp"), "css/app.css");
        assert_eq!(request_path("myapp://orders/42", "myapp"), "orders/42");
        assert_eq!(
            request_path("http://myapp.localhost/index.html", "myapp"),
            "index.html"
        );
        assert_eq!(request_path("MYAPP://localhost/a.js", "myapp"), "a.js");
    }

    #[test]
    fn localhost_must_be_the_whole_host() {
        assert_eq!(request_path("myapp://localhostfoo/x", "myapp"), "localhostfoo/x");
        assert_eq!(request_path("myapp://localhost?tab=2", "myapp"), "?tab=2");
    }

    #[test]
    fn request_path_of_foreign_uri_is_empty() {
        assert_eq!(request_path("https://example.com/index.html", "myapp"), "");
    }

    #[test]
    fn content_url_points_at_page() {
        let url = content_url("myapp", "/index.html");
        if cfg!(windows) {
            assert_eq!(url, "http://myapp.localhost/index.html");
        } else {
            assert_eq!(url, "myapp://localhost/index.html");
        }
    }

    #[test]
    fn recognizes_rewritten_content_urls() {
        assert!(is_rewritten_content_url("http://myapp.localhost/index.html", "myapp"));
        assert!(is_rewritten_content_url("HTTPS://MyApp.LocalHost", "myapp"));
        assert!(is_rewritten_content_url("http://myapp.localhost?x=1", "myapp"));
        assert!(!is_rewritten_content_url("http://myapp.localhost.evil.com/", "myapp"));
        assert!(!is_rewritten_content_url("http://other.localhost/", "myapp"));
        assert!(!is_rewritten_content_url("myapp://localhost/index.html", "myapp"));
    }

    #[test]
    fn mime_fallback_is_octet_stream() {
        assert_eq!(
            mime_from_extension(Path::new("blob.bin")),
            "application/octet-stream"
        );
    }
}
