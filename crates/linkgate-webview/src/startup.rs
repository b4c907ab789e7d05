//! Single-slot store for the URL that launched the application.

use std::sync::{Mutex, PoisonError};

use tracing::{debug, info};

/// Holds at most one startup URL until it is consumed.
///
/// `Empty --on_deep_link--> Holding --consume--> Empty`. A second deep link
/// before consumption replaces the first; there is no queue.
#[derive(Debug, Default)]
pub struct StartupUrlHolder {
    slot: Mutex<Option<String>>,
}

impl StartupUrlHolder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `url`, replacing anything not yet consumed.
    pub fn on_deep_link(&self, url: impl Into<String>) {
        let url = url.into();
        info!(url = %url, "deep link received");

        let previous = self
            .slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .replace(url);
        if let Some(previous) = previous {
            debug!(previous = %previous, "unconsumed startup URL replaced");
        }
    }

    /// Take the stored URL, leaving the slot empty.
    ///
    /// Read and clear happen under one lock, so a concurrent
    /// [`on_deep_link`](Self::on_deep_link) is either returned here or kept
    /// for the next call, never lost or returned twice.
    pub fn consume(&self) -> Option<String> {
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }

    /// Whether a URL is waiting to be consumed.
    pub fn is_pending(&self) -> bool {
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }
}
