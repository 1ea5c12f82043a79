//! Small numeric helpers
//!
//! Pure conversions used alongside the random facilities: angle conversion
//! between degrees and radians, and extraction of a number's decimal
//! digits into an array. None of these touch the entropy device or hold
//! any state.

/// Converts degrees to radians.
///
/// The computation runs in `f64` and narrows at the end, so the precision
/// of the input is not degraded by the intermediate multiplication.
pub fn degrees_to_radians(degrees: f32) -> f32 {
    (f64::from(degrees) * std::f64::consts::PI / 180.0) as f32
}

/// Converts radians to degrees.
pub fn radians_to_degrees(radians: f32) -> f32 {
    (f64::from(radians) * 180.0 / std::f64::consts::PI) as f32
}

/// Decimal digits of an `i64`, one entry per character of its display
/// form. Non-digit characters (the sign) map to 0, so negative numbers
/// start with a 0 entry.
pub fn digits_i64(value: i64) -> Vec<u8> {
    digits(&value.to_string())
}

/// Decimal digits of an `f64` display form. Non-digit characters (sign,
/// decimal point) map to 0.
pub fn digits_f64(value: f64) -> Vec<u8> {
    digits(&value.to_string())
}

/// Decimal digits of an `f32` display form. Non-digit characters (sign,
/// decimal point) map to 0.
pub fn digits_f32(value: f32) -> Vec<u8> {
    digits(&value.to_string())
}

fn digits(rendered: &str) -> Vec<u8> {
    rendered
        .chars()
        .map(|c| c.to_digit(10).map_or(0, |digit| digit as u8))
        .collect()
}
