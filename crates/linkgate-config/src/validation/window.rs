//! Window configuration validation (size, start page).

use crate::schema::WindowConfig;

use super::helpers::clamp_range;

const MIN_DIMENSION: u32 = 200;
const MAX_DIMENSION: u32 = 16384;

pub(crate) fn repair_window(problems: &mut Vec<String>, window: &mut WindowConfig) {
    clamp_range(problems, "window.width", &mut window.width, MIN_DIMENSION, MAX_DIMENSION);
    clamp_range(problems, "window.height", &mut window.height, MIN_DIMENSION, MAX_DIMENSION);

    if window.start_page.trim().is_empty() {
        let default = WindowConfig::default().start_page;
        problems.push(format!("window.start_page must not be empty, using {default:?}"));
        window.start_page = default;
    }
}
