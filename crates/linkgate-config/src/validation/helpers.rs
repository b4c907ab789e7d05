//! Shared range helpers used by the section validators.

/// Clamp `value` into `[min, max]`, recording a problem if it was outside.
pub(crate) fn clamp_range(problems: &mut Vec<String>, name: &str, value: &mut u32, min: u32, max: u32) {
    if *value < min || *value > max {
        let clamped = (*value).clamp(min, max);
        problems.push(format!(
            "{name} = {value} is out of range [{min}, {max}], using {clamped}"
        ));
        *value = clamped;
    }
}
