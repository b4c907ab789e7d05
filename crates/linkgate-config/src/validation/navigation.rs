//! Navigation configuration validation.
//!
//! `url_scheme` is not checked here: an unusable value falls back to the
//! default scheme when the policy engine is built, and a valid one must
//! survive problems elsewhere in the file.

use crate::schema::{is_valid_scheme_name, NavigationConfig};

pub(crate) fn repair_navigation(problems: &mut Vec<String>, navigation: &mut NavigationConfig) {
    navigation.handled_schemes.retain(|scheme| {
        let valid = is_valid_scheme_name(scheme);
        if !valid {
            problems.push(format!(
                "navigation.handled_schemes contains invalid scheme {scheme:?}, ignoring it"
            ));
        }
        valid
    });
}
