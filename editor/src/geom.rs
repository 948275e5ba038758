//! Rounding and percent helpers shared by every coordinate conversion.

#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

use crate::consts::ROUND_DIGITS;

/// Round `value` to `digits` decimal places.
#[must_use]
pub fn round(value: f64, digits: u8) -> f64 {
    let factor = 10_f64.powi(i32::from(digits));
    (value * factor).round() / factor
}

/// Express `part` as a rounded percentage of `total`.
///
/// Returns `None` when `total` is zero or either input is not finite; callers
/// treat that as "image not ready" and skip the operation.
#[must_use]
pub fn to_percent(part: f64, total: f64) -> Option<f64> {
    if !part.is_finite() || !total.is_finite() || total.abs() < f64::EPSILON {
        return None;
    }
    Some(round(part / total * 100.0, ROUND_DIGITS))
}

/// Format a coordinate for path and clip-path strings.
///
/// Negative zero prints as `0`.
#[must_use]
pub fn fmt_coord(value: f64) -> String {
    if value == 0.0 {
        return "0".to_owned();
    }
    format!("{value}")
}
