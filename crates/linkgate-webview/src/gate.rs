//! `LinkGate` owns the navigation policy and the startup URL for the
//! lifetime of the embedded content.

use std::sync::Arc;

use linkgate_common::EventBus;
use linkgate_config::schema::NavigationConfig;
use tracing::info;

use crate::deep_link::DeepLinkListener;
use crate::opener::ExternalOpener;
use crate::policy::{NavigationEngine, NavigationPolicy};
use crate::scheme::UrlScheme;
use crate::startup::StartupUrlHolder;

/// Constructed at startup, torn down at shutdown.
pub struct LinkGate {
    engine: Arc<NavigationEngine>,
    holder: Arc<StartupUrlHolder>,
    listener: DeepLinkListener,
}

impl LinkGate {
    /// Normalize the configured scheme, build the policy engine, and
    /// subscribe to deep-link notifications on `bus`.
    pub fn initialize(
        config: &NavigationConfig,
        bus: &EventBus,
        opener: Arc<dyn ExternalOpener>,
    ) -> Self {
        let engine = NavigationEngine::from_config(config, opener);
        info!(scheme = %engine.scheme(), "initialized with custom scheme");

        let holder = Arc::new(StartupUrlHolder::new());
        let listener = DeepLinkListener::attach(bus, Arc::clone(&holder));

        Self {
            engine: Arc::new(engine),
            holder,
            listener,
        }
    }

    /// The policy to install on every embedded web view.
    pub fn policy(&self) -> Arc<dyn NavigationPolicy> {
        self.engine.clone()
    }

    pub fn scheme(&self) -> &UrlScheme {
        self.engine.scheme()
    }

    /// Forward pending deep-link notifications. Returns how many arrived.
    pub fn pump_notifications(&mut self) -> usize {
        self.listener.pump()
    }

    /// The `getStartupUrl` bridge call: the pending startup URL, consumed.
    pub fn get_startup_url(&mut self) -> Option<String> {
        self.listener.pump();
        self.holder.consume()
    }

    /// Whether the deep-link subscription is still live.
    pub fn is_active(&self) -> bool {
        self.listener.is_attached()
    }

    /// Unregister from the notification source. Idempotent.
    pub fn teardown(&mut self) {
        if self.listener.is_attached() {
            self.listener.detach();
            info!("link gate torn down");
        }
    }
}
