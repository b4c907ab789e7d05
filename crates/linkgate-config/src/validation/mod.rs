//! Configuration validation and repair.
//!
//! Each section checks its own fields and replaces only the values that
//! are unusable, so one bad entry never costs the rest of the file. The
//! orchestrator collects every problem for the caller to report.

mod helpers;
mod navigation;
mod window;


use crate::schema::LinkgateConfig;

/// Repair every invalid field in place and describe what was changed.
///
/// An empty result means the config was valid as loaded.
pub fn repair(config: &mut LinkgateConfig) -> Vec<String> {
    let mut problems: Vec<String> = Vec::new();

    window::repair_window(&mut problems, &mut config.window);
    navigation::repair_navigation(&mut problems, &mut config.navigation);

    problems
}
