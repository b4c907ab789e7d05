//! Linkgate configuration system.
//!
//! TOML-based configuration with validation. All config sections use
//! defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use linkgate_config::load_config;
//!
//! let config = load_config(None).expect("failed to load config");
//! println!("scheme: {:?}", config.navigation.url_scheme);
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::LinkgateConfig;

use std::path::Path;

use linkgate_common::ConfigError;
use tracing::warn;

/// Load config from `path`, or from the platform default path when `None`.
///
/// The default path gets a documented config file created on first run.
/// An explicit path must exist. Invalid values are replaced one field at a
/// time, with a warning each, so the rest of the file still applies.
pub fn load_config(path: Option<&Path>) -> Result<LinkgateConfig, ConfigError> {
    let mut config = match path {
        Some(path) => toml_loader::load_from_path(path)?,
        None => toml_loader::load_default()?,
    };

    for problem in validation::repair(&mut config) {
        warn!("config: {problem}");
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_config(contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, contents).unwrap();
        (dir, path)
    }

    #[test]
    fn explicit_missing_path_is_an_error() {
        let err = load_config(Some(Path::new("/tmp/linkgate_missing_dir/config.toml")))
            .unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(_)));
    }

    #[test]
    fn invalid_values_are_repaired_not_rejected() {
        let (_dir, path) = write_config("[window]\nheight = 1\ntitle = \"Shop\"\n");

        let config = load_config(Some(&path)).unwrap();

        assert_eq!(config.window.height, 200);
        assert_eq!(config.window.title, "Shop");
    }

    #[test]
    fn valid_scheme_survives_invalid_handled_scheme() {
        let (_dir, path) = write_config(
            r#"
[navigation]
url_scheme = "shop"
handled_schemes = ["mail to", "tel"]
"#,
        );

        let config = load_config(Some(&path)).unwrap();

        assert_eq!(config.navigation.url_scheme.as_deref(), Some("shop"));
        assert_eq!(config.navigation.handled_schemes, vec!["tel"]);
    }

    #[test]
    fn syntax_errors_still_fail() {
        let (_dir, path) = write_config("[navigation\nurl_scheme = \"shop\"\n");
        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }
}
