//! Graceful shutdown: detach the gate, destroy web views, close windows.

use std::time::Duration;

use linkgate_common::events::Event;

use crate::single_instance;

use super::core::LinkgateApp;

// =============================================================================
// SHUTDOWN
// =============================================================================

impl LinkgateApp {
    /// Perform graceful shutdown of all subsystems.
    ///
    /// Order matters:
    /// 1. Tear down the gate (no deep links after this point)
    /// 2. Tell remaining bus subscribers we are going away
    /// 3. Close in-app browser windows
    /// 4. Destroy the main web view, then its window
    /// 5. Stop the instance listener and give up the port file
    pub(super) fn shutdown(&mut self) {
        if self.should_exit {
            return;
        }
        tracing::info!("Initiating graceful shutdown");
        self.should_exit = true;

        // 1. Stop receiving deep links
        self.gate.teardown();

        // 2. Notify anything else listening on the bus
        self.event_bus.publish(Event::Shutdown);

        // 3. Close every in-app browser
        self.browsers.clear();

        // 4. Destroy the main web view before the window it is attached to
        if let Some(handle) = self.main_view.take() {
            match &self.webviews {
                Some(manager) => manager.destroy(handle),
                None => drop(handle),
            }
        }
        self.webviews = None;
        self.window = None;

        // 5. No more warm deep links
        if let Some((port_file, port)) = self.instance.take() {
            single_instance::release(&port_file, port);
        }
        if let Some(rt) = self.tokio_runtime.take() {
            rt.shutdown_timeout(Duration::from_secs(2));
        }

        tracing::info!("Graceful shutdown complete");
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use crate::app_state::core::test_support::app;

    #[test]
    fn shutdown_on_fresh_app_does_not_panic() {
        let mut app = app();

        app.shutdown();

        assert!(app.should_exit);
        assert!(!app.gate.is_active());
        assert!(app.browsers.is_empty());
        assert!(app.main_view.is_none());
        assert!(app.webviews.is_none());
        assert!(app.window.is_none());
        assert!(app.tokio_runtime.is_none());
    }

    #[test]
    fn shutdown_is_idempotent() {
        let mut app = app();

        app.shutdown();
        app.shutdown(); // second call must not panic

        assert!(app.should_exit);
        assert!(!app.gate.is_active());
    }

    #[test]
    fn shutdown_unsubscribes_from_bus() {
        let mut app = app();
        assert_eq!(app.event_bus.subscriber_count(), 1);

        app.shutdown();

        assert_eq!(app.event_bus.subscriber_count(), 0);
    }

    #[test]
    fn deep_links_after_shutdown_are_not_received() {
        let mut app = app();
        app.shutdown();

        app.publish_deep_link("myapp://late".into());

        assert_eq!(app.gate.get_startup_url(), None);
    }

    #[test]
    fn shutdown_releases_the_instance_port_file() {
        let dir = tempfile::tempdir().unwrap();
        let port_file = dir.path().join("instance.port");
        let mut app = app();
        app.start_instance_server(port_file.clone()).unwrap();

        app.shutdown();

        assert!(!port_file.exists());
        assert!(app.instance.is_none());
        assert!(app.tokio_runtime.is_none());
    }

    #[test]
    fn deep_link_received_before_shutdown_is_kept() {
        let mut app = app();
        app.publish_deep_link("myapp://early".into());
        app.poll_once();

        app.shutdown();

        assert_eq!(app.gate.get_startup_url().as_deref(), Some("myapp://early"));
    }
}
