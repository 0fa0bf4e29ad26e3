//! Normalization Utilities
//!
//! Maps raw readings onto the unit interval and applies the clamping and
//! rounding rules shared by the severity and economic-impact metrics.

/// Lowest severity the engine reports
pub const MIN_SEVERITY: f64 = 1.0;

/// Highest severity the engine reports
pub const MAX_SEVERITY: f64 = 10.0;

/// Divide a raw reading by its full-scale value.
///
/// The result is NOT clamped to [0, 1]: readings above full scale push the
/// weighted sum up, and the final severity clamp absorbs them.
pub fn normalize(raw_value: f64, full_scale: f64) -> f64 {
    raw_value / full_scale
}

/// Express a reading as a percentage of `full_scale`, capped at 100
pub fn percent_of_scale(raw_value: f64, full_scale: f64) -> f64 {
    (raw_value / full_scale * 100.0).min(100.0)
}

/// Clamp a scaled weighted sum onto the [1, 10] severity range
pub fn clamp_severity(scaled: f64) -> f64 {
    scaled.clamp(MIN_SEVERITY, MAX_SEVERITY)
}

/// Round to two decimal places (half away from zero)
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
