//! Window title management: reflects the page shown in the main web view.

use super::core::LinkgateApp;

/// `"{base} - {page}"`, or just `base` for an untitled page.
pub(super) fn compose_title(base: &str, page_title: &str) -> String {
    let page_title = page_title.trim();
    if page_title.is_empty() || page_title == base {
        base.to_string()
    } else {
        format!("{base} - {page_title}")
    }
}

impl LinkgateApp {
    /// Update the window title from the main web view's document title.
    pub(super) fn update_window_title(&self, page_title: &str) {
        let Some(ref window) = self.window else {
            return;
        };
        window.set_title(&compose_title(&self.config.window.title, page_title));
    }
}
