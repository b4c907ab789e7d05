use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("failed to open {url}: {reason}")]
    OpenFailed { url: String, reason: String },

    #[error("not supported: {0}")]
    NotSupported(String),
}

#[derive(Debug, thiserror::Error)]
pub enum LinkgateError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}
