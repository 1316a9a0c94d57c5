//! CSS length strings as they appear in config and host messages.
//! Only `px` and `vw` are understood.

use crate::errors::DockError;

/// Leading integer of `s`, the way a browser's `parseInt` reads it: optional
/// whitespace and sign, then digits, then anything.
fn leading_integer(s: &str) -> Option<i64> {
    let trimmed = s.trim_start();
    let (sign, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (-1, &trimmed[1..]),
        Some(b'+') => (1, &trimmed[1..]),
        _ => (1, trimmed),
    };
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    rest[..digits].parse::<i64>().ok().map(|n| sign * n)
}

fn parse(css: &str) -> Result<(f64, &'static str), DockError> {
    let unit = if css.ends_with("px") {
        "px"
    } else if css.ends_with("vw") {
        "vw"
    } else {
        return Err(DockError::UnknownUnit(css.to_string()));
    };
    let number = leading_integer(css).ok_or_else(|| DockError::UnknownUnit(css.to_string()))?;
    Ok((number as f64, unit))
}

/// Convert a `px` or `vw` length to pixels. Fractions after the leading
/// integer are ignored.
pub fn css_length_to_px(css: &str, viewport_width: f64) -> Result<f64, DockError> {
    match parse(css)? {
        (n, "px") => Ok(n),
        (n, _) => Ok(n * viewport_width / 100.0),
    }
}

/// Convert a `px` or `vw` length to viewport-width units.
pub fn css_length_to_vw(css: &str, viewport_width: f64) -> Result<f64, DockError> {
    match parse(css)? {
        (n, "px") => Ok(n * 100.0 / viewport_width),
        (n, _) => Ok(n),
    }
}
