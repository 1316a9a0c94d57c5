//! Range and unit checks shared by the section validators.

use panelkit_common::units::css_length_to_px;

pub(crate) fn validate_range(errors: &mut Vec<String>, name: &str, value: u32, min: u32, max: u32) {
    if !(min..=max).contains(&value) {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

/// NaN is never in range.
pub(crate) fn validate_range_f64(
    errors: &mut Vec<String>,
    name: &str,
    value: f64,
    min: f64,
    max: f64,
) {
    if !(min..=max).contains(&value) {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

/// A `px`/`vw` length that resolves to a positive pixel size.
pub(crate) fn validate_css_length(
    errors: &mut Vec<String>,
    name: &str,
    value: &str,
    viewport_width: f64,
) {
    match css_length_to_px(value, viewport_width) {
        Ok(px) if px > 0.0 => {}
        Ok(px) => errors.push(format!("{name} = {value} resolves to {px}px, must be positive")),
        Err(e) => errors.push(format!("{name}: {e}")),
    }
}
