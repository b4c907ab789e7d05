use std::borrow::Cow;
use std::sync::Arc;

use tracing::{debug, warn};
use wry::http::{header::CONTENT_TYPE, Response};
use wry::raw_window_handle;
use wry::WebViewBuilder;

use crate::content::{request_path, ContentProvider};
use crate::ipc::IPC_INIT_SCRIPT;

use super::handle::WebViewHandle;
use super::types::WebViewConfig;
use super::WebViewManager;

impl WebViewManager {
    /// Create a new WebView as a child of the given window.
    ///
    /// Every navigation the content attempts is routed through the
    /// manager's navigation policy.
    pub fn create<W: raw_window_handle::HasWindowHandle>(
        &self,
        view_id: u32,
        window: &W,
        bounds: wry::Rect,
        config: WebViewConfig,
    ) -> Result<WebViewHandle, wry::Error> {
        let events = Arc::clone(&self.events);

        let mut builder = WebViewBuilder::new()
            .with_bounds(bounds)
            .with_devtools(config.devtools)
            .with_initialization_script(IPC_INIT_SCRIPT);

        if let Some(ua) = &config.user_agent {
            builder = builder.with_user_agent(ua);
        }

        builder = Self::attach_navigation_handler(
            builder,
            Arc::clone(&self.policy),
            self.content.as_ref().map(|(name, _)| name.clone()),
            Arc::clone(&events),
            view_id,
        );
        builder = Self::attach_ipc_handler(builder, Arc::clone(&events), view_id);
        builder = Self::attach_page_load_handler(builder, Arc::clone(&events), view_id);
        builder = Self::attach_title_handler(builder, Arc::clone(&events), view_id);
        builder = self.attach_custom_protocol(builder);

        let initial_url = if let Some(url) = &config.url {
            builder = builder.with_url(url);
            url.clone()
        } else {
            builder = builder.with_html(config.html.as_deref().unwrap_or("<html><body></body></html>"));
            "about:blank".to_string()
        };

        let webview = builder.build_as_child(window)?;

        debug!(view_id, url = %initial_url, "WebView created");

        Ok(WebViewHandle { webview, view_id })
    }

    fn attach_custom_protocol<'a>(&self, builder: WebViewBuilder<'a>) -> WebViewBuilder<'a> {
        let Some((scheme_name, provider)) = &self.content else {
            return builder;
        };

        let cp = Arc::clone(provider);
        let name = scheme_name.clone();
        builder.with_custom_protocol(scheme_name.clone(), move |_wv_id, request| {
            let uri = request.uri().to_string();
            let path = request_path(&uri, &name);
            serve_asset(&cp, path)
        })
    }
}

fn serve_asset(cp: &ContentProvider, path: &str) -> Response<Cow<'static, [u8]>> {
    let response = match cp.resolve(path) {
        Some((mime, data)) => Response::builder()
            .status(200)
            .header(CONTENT_TYPE, mime.as_ref())
            .body(Cow::from(data.into_owned())),
        None => {
            warn!(path = %path, "custom protocol: asset not found");
            Response::builder()
                .status(404)
                .body(Cow::from(b"Not Found".to_vec()))
        }
    };

    response.unwrap_or_else(|e| {
        warn!(path = %path, error = %e, "custom protocol: failed to build response");
        Response::new(Cow::from(Vec::new()))
    })
}
