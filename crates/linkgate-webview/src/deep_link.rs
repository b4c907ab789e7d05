//! Forwards deep-link notifications from the host event bus into the
//! startup URL holder.

use std::sync::Arc;

use linkgate_common::{Event, EventBus};
use tokio::sync::broadcast::{self, error::TryRecvError};
use tracing::{debug, warn};

use crate::startup::StartupUrlHolder;

/// A subscription to [`Event::DeepLink`] notifications.
///
/// Dropping the listener, or calling [`detach`](Self::detach), ends the
/// subscription; later notifications are never seen.
pub struct DeepLinkListener {
    rx: Option<broadcast::Receiver<Event>>,
    holder: Arc<StartupUrlHolder>,
}

impl DeepLinkListener {
    pub fn attach(bus: &EventBus, holder: Arc<StartupUrlHolder>) -> Self {
        Self {
            rx: Some(bus.subscribe()),
            holder,
        }
    }

    pub fn is_attached(&self) -> bool {
        self.rx.is_some()
    }

    /// Deliver every pending notification to the holder.
    ///
    /// Called from the host's event dispatch. Returns how many deep links
    /// were delivered. A `Shutdown` event or a closed bus detaches.
    pub fn pump(&mut self) -> usize {
        let Some(rx) = self.rx.as_mut() else {
            return 0;
        };

        let mut delivered = 0;
        let mut finished = false;
        loop {
            match rx.try_recv() {
                Ok(Event::DeepLink(url)) => {
                    self.holder.on_deep_link(url);
                    delivered += 1;
                }
                Ok(Event::Shutdown) => {
                    finished = true;
                    break;
                }
                Ok(Event::Unknown) => {}
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Lagged(skipped)) => {
                    warn!(skipped, "deep-link listener lagged behind the event bus");
                }
                Err(TryRecvError::Closed) => {
                    finished = true;
                    break;
                }
            }
        }

        if finished {
            self.detach();
        }
        delivered
    }

    /// Stop listening. Idempotent.
    pub fn detach(&mut self) {
        if self.rx.take().is_some() {
            debug!("deep-link listener detached");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (EventBus, Arc<StartupUrlHolder>, DeepLinkListener) {
        let bus = EventBus::new(8);
        let holder = Arc::new(StartupUrlHolder::new());
        let listener = DeepLinkListener::attach(&bus, Arc::clone(&holder));
        (bus, holder, listener)
    }

    #[test]
    fn forwards_deep_links_into_holder() {
        let (bus, holder, mut listener) = setup();
        bus.publish(Event::DeepLink("myapp://a".into()));

        assert_eq!(listener.pump(), 1);
        assert_eq!(holder.consume().as_deref(), Some("myapp://a"));
    }

    #[test]
    fn nothing_pending_delivers_nothing() {
        let (_bus, holder, mut listener) = setup();
        assert_eq!(listener.pump(), 0);
        assert!(!holder.is_pending());
    }

    #[test]
    fn burst_keeps_last_link() {
        let (bus, holder, mut listener) = setup();
        bus.publish(Event::DeepLink("myapp://a".into()));
        bus.publish(Event::DeepLink("myapp://b".into()));

        assert_eq!(listener.pump(), 2);
        assert_eq!(holder.consume().as_deref(), Some("myapp://b"));
    }

    #[test]
    fn lagging_still_keeps_newest_link() {
        let (bus, holder, mut listener) = setup();
        for i in 0..20 {
            bus.publish(Event::DeepLink(format!("myapp://{i}")));
        }

        listener.pump();
        assert_eq!(holder.consume().as_deref(), Some("myapp://19"));
    }

    #[test]
    fn detach_unsubscribes_from_bus() {
        let (bus, holder, mut listener) = setup();
        assert_eq!(bus.subscriber_count(), 1);

        listener.detach();
        listener.detach();
        assert!(!listener.is_attached());
        assert_eq!(bus.subscriber_count(), 0);

        bus.publish(Event::DeepLink("myapp://late".into()));
        assert_eq!(listener.pump(), 0);
        assert!(!holder.is_pending());
    }

    #[test]
    fn shutdown_event_detaches() {
        let (bus, holder, mut listener) = setup();
        bus.publish(Event::DeepLink("myapp://before".into()));
        bus.publish(Event::Shutdown);
        bus.publish(Event::DeepLink("myapp://after".into()));

        assert_eq!(listener.pump(), 1);
        assert!(!listener.is_attached());
        assert_eq!(holder.consume().as_deref(), Some("myapp://before"));
    }

    #[test]
    fn dropping_listener_unsubscribes() {
        let (bus, _holder, listener) = setup();
        drop(listener);
        assert_eq!(bus.subscriber_count(), 0);
    }

    #[test]
    fn closed_bus_detaches() {
        let bus = EventBus::new(4);
        let holder = Arc::new(StartupUrlHolder::new());
        let mut listener = DeepLinkListener::attach(&bus, holder);
        drop(bus);

        assert_eq!(listener.pump(), 0);
        assert!(!listener.is_attached());
    }
}
