//! Polling of deep-link notifications and web view events.

use std::time::Instant;

use winit::event_loop::{ActiveEventLoop, ControlFlow};

use super::core::LinkgateApp;
use super::types::POLL_INTERVAL;

impl LinkgateApp {
    /// Run polling and schedule the next wake-up.
    pub(super) fn poll_and_schedule(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();

        if now.duration_since(self.last_poll) >= POLL_INTERVAL {
            self.last_poll = now;
            self.poll_once();
        }

        event_loop.set_control_flow(ControlFlow::WaitUntil(Instant::now() + POLL_INTERVAL));
    }

    /// One polling pass: notifications first, so a bridge request in the
    /// same batch sees the newest deep link.
    pub(super) fn poll_once(&mut self) {
        let delivered = self.gate.pump_notifications();
        if delivered > 0 {
            tracing::debug!(delivered, "Deep-link notifications processed");
        }
        self.poll_webview_events();
    }
}

#[cfg(test)]
mod tests {
    use crate::app_state::core::test_support::app;

    #[test]
    fn poll_once_moves_deep_links_into_the_gate() {
        let mut app = app();
        app.publish_deep_link("myapp://first".into());
        app.publish_deep_link("myapp://second".into());

        app.poll_once();

        assert_eq!(app.gate.get_startup_url().as_deref(), Some("myapp://second"));
    }
}
