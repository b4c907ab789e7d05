use std::path::PathBuf;

use clap::Parser;
use url::Url;

/// Linkgate: an embedded web view that keeps its own links in-app and
/// hands everything else to the browser or the operating system.
#[derive(Parser, Debug)]
#[command(name = "linkgate", version, about)]
pub struct Args {
    /// Deep link the app was launched with, e.g. `myapp://orders/42`.
    pub url: Option<String>,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log filter override (`debug`, `linkgate=trace`, ...).
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}

/// The cold-start deep link, if the launch argument is a URL.
pub fn launch_url(raw: Option<&str>) -> Option<String> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }

    match Url::parse(raw) {
        Ok(_) => Some(raw.to_string()),
        Err(e) => {
            tracing::warn!(arg = %raw, error = %e, "Ignoring launch argument: not a URL");
            None
        }
    }
}
