//! System configuration types: logging.

use serde::{Deserialize, Serialize};

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// The `tracing` filter directive for this level, scoped to our crates.
    pub fn directive(self) -> &'static str {
        match self {
            LogLevel::Trace => "linkgate=trace",
            LogLevel::Debug => "linkgate=debug",
            LogLevel::Info => "linkgate=info",
            LogLevel::Warn => "linkgate=warn",
            LogLevel::Error => "linkgate=error",
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}
