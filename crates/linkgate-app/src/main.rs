mod app_state;
mod cli;
mod single_instance;

use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

use linkgate_common::{EventBus, LinkgateError};
use linkgate_config::schema::{LinkgateConfig, LogLevel};

use app_state::{AppEvent, LinkgateApp, ProxySurface};

/// Deep links are rare; a small buffer is plenty.
const EVENT_BUS_CAPACITY: usize = 64;

/// Pick the log filter: `--log-level`, then the config level, then info.
fn log_directive(cli_level: Option<&str>, config_level: Option<LogLevel>) -> Directive {
    cli_level
        .and_then(|d| d.parse().ok())
        .or_else(|| config_level.unwrap_or_default().directive().parse().ok())
        .unwrap_or_else(|| LevelFilter::INFO.into())
}

/// Pass `url` to a running instance. Returns whether one took it.
fn hand_off(port_file: &Path, url: &str) -> bool {
    let rt = match tokio::runtime::Builder::new_current_thread().enable_all().build() {
        Ok(rt) => rt,
        Err(e) => {
            tracing::warn!("Instance hand-off unavailable: {e}");
            return false;
        }
    };
    match rt.block_on(single_instance::forward(port_file, url)) {
        Ok(sent) => sent,
        Err(e) => {
            tracing::warn!("Instance hand-off failed: {e}");
            false
        }
    }
}

/// Build the event loop and the app, deliver the launch link, and run.
///
/// A launch link goes to an already running instance when there is one.
fn run(config: LinkgateConfig, launch_arg: Option<&str>) -> linkgate_common::Result<()> {
    let launch_url = cli::launch_url(launch_arg);
    let port_file = single_instance::default_port_file();

    if let (Some(url), Some(port_file)) = (&launch_url, &port_file) {
        if hand_off(port_file, url) {
            tracing::info!(url = %url, "Deep link handed to running instance");
            return Ok(());
        }
    }

    let event_loop = EventLoop::<AppEvent>::with_user_event()
        .build()
        .map_err(|e| LinkgateError::Other(format!("failed to create event loop: {e}")))?;

    let event_bus = EventBus::new(EVENT_BUS_CAPACITY);
    let surface = Arc::new(ProxySurface::new(event_loop.create_proxy()));
    let mut app = LinkgateApp::new(config, event_bus, surface);

    // The gate is subscribed by now, so the cold-start link is not lost.
    if let Some(url) = launch_url {
        app.publish_deep_link(url);
    }

    match port_file {
        Some(port_file) => {
            if let Err(e) = app.start_instance_server(port_file) {
                tracing::warn!("Instance listener unavailable: {e}");
            }
        }
        None => tracing::debug!("No data directory; warm deep links disabled"),
    }

    tracing::info!("Entering event loop");
    event_loop
        .run_app(&mut app)
        .map_err(|e| LinkgateError::Other(format!("event loop error: {e}")))
}

fn main() {
    // Parse CLI arguments
    let args = cli::parse();

    // Config is read before logging so its level can apply; problems are
    // reported once the subscriber is up.
    let loaded = linkgate_config::load_config(args.config.as_deref());

    // Initialize logging
    let directive = log_directive(
        args.log_level.as_deref(),
        loaded.as_ref().ok().map(|c| c.logging.level),
    );
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive))
        .init();

    tracing::info!("Linkgate v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {}", path.display());
    }
    let config = loaded.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        LinkgateConfig::default()
    });

    if let Err(e) = run(config, args.url.as_deref()) {
        tracing::error!("{e}");
        std::process::exit(1);
    }
    tracing::info!("Shutdown complete");
}
