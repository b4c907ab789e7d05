//! Main window configuration types.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Main window and bundled content settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Static window title.
    pub title: String,
    /// Initial width in logical pixels (valid range: 200-16384).
    pub width: u32,
    /// Initial height in logical pixels (valid range: 200-16384).
    pub height: u32,
    /// Page loaded at startup, relative to `assets_dir`.
    pub start_page: String,
    /// Directory holding the bundled web content. `None` means
    /// `assets/www` next to the executable.
    pub assets_dir: Option<PathBuf>,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Linkgate".into(),
            width: 1024,
            height: 768,
            start_page: "index.html".into(),
            assets_dir: None,
        }
    }
}
