//! Configuration schema types for Linkgate.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod navigation;
mod system;
mod window;

pub use navigation::*;
pub use system::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Root configuration for Linkgate.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct LinkgateConfig {
    pub navigation: NavigationConfig,
    pub window: WindowConfig,
    pub logging: LoggingConfig,
}
