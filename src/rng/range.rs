//! Range-bounded random draws.
//!
//! Signed ranges are shifted into the unsigned domain before reduction: a
//! negative lower bound contributes an offset that moves the whole range to
//! start at or above zero, the draw and the modulo reduction happen in
//! unsigned arithmetic, and the offset is subtracted again on the way out.
//! Reducing a signed value directly would misbehave for negative operands.
//!
//! Reduction is a single full-width draw taken modulo the range width. This
//! carries the classic modulo bias, vanishingly small for realistic widths;
//! callers needing strict uniformity would have to substitute rejection
//! sampling against a power-of-two bound while keeping the same
//! draw-reduce-shift contract.

use std::ops::RangeInclusive;

use crate::rng::derive::FromEntropy;
use crate::rng::{EntropySource, RandomError};

/// Draws a uniformly distributed integer in the half-open range
/// `[min, max)`.
///
/// Negative bounds are fully supported, including ranges that cross zero.
///
/// # Errors
/// - [`RandomError::InvalidRange`] if `max <= min`.
/// - Any entropy failure from the underlying draw.
pub fn random_int(source: &EntropySource, min: i64, max: i64) -> Result<i64, RandomError> {
    if max <= min {
        return Err(RandomError::InvalidRange { min, max });
    }

    let (shifted_min, shifted_max) = shift(min, max);
    let width = shifted_max - shifted_min;

    let drawn = shifted_min + draw_below(source, width)?;

    Ok(unshift(drawn, min))
}

/// Draws a uniformly distributed integer in the closed range `[lo, hi]`.
///
/// A single-value range (`lo == hi`) returns `lo` without touching the
/// entropy device at all, so it succeeds even against a source whose
/// device is unavailable.
///
/// # Errors
/// - [`RandomError::InvalidRange`] if the range is empty (`hi < lo`).
/// - [`RandomError::RangeOverflow`] if widening the range for the
///   inclusive upper endpoint exceeds the `u64` working domain, which
///   happens only for the full signed domain `i64::MIN..=i64::MAX`.
/// - Any entropy failure from the underlying draw.
pub fn random_int_in(
    source: &EntropySource,
    range: RangeInclusive<i64>,
) -> Result<i64, RandomError> {
    let (lo, hi) = range.into_inner();

    if hi < lo {
        return Err(RandomError::InvalidRange { min: lo, max: hi });
    }

    if lo == hi {
        return Ok(lo);
    }

    let (shifted_min, shifted_max) = shift(lo, hi);
    let width = (shifted_max - shifted_min)
        .checked_add(1)
        .ok_or(RandomError::RangeOverflow)?;

    let drawn = shifted_min + draw_below(source, width)?;

    Ok(unshift(drawn, lo))
}

/// Draws a float in `[min(min, max), min(min, max) + |min - max|)`.
///
/// The bounds may be given in either order. Equal bounds yield exactly
/// that value.
///
/// # Errors
/// Propagates any entropy failure from the unit draw.
pub fn random_float_in(source: &EntropySource, min: f64, max: f64) -> Result<f64, RandomError> {
    let unit = f64::random(source)?;

    Ok(unit * (min - max).abs() + min.min(max))
}

/// Offset that maps `min` into the non-negative domain.
fn offset_of(min: i64) -> u64 {
    if min < 0 { min.unsigned_abs() } else { 0 }
}

/// Shifts a signed bound pair into the unsigned working domain.
///
/// Staged through `i128`: `max + offset` can exceed `i64` for wide ranges
/// but always fits in `u64`, since both bounds lie within `i64` and the
/// offset is at most `2^63`.
fn shift(min: i64, max: i64) -> (u64, u64) {
    let offset = offset_of(min);

    let shifted_min = (i128::from(min) + i128::from(offset)) as u64;
    let shifted_max = (i128::from(max) + i128::from(offset)) as u64;

    (shifted_min, shifted_max)
}

/// Maps an unsigned draw back into the caller's signed domain.
fn unshift(drawn: u64, min: i64) -> i64 {
    (i128::from(drawn) - i128::from(offset_of(min))) as i64
}

/// Draws a full-width unsigned value and reduces it modulo `bound`.
///
/// `bound` is non-zero for every validated range, so the reduction cannot
/// divide by zero.
fn draw_below(source: &EntropySource, bound: u64) -> Result<u64, RandomError> {
    let raw = i64::random(source)? as u64;

    Ok(raw % bound)
}

#[cfg(test)]
mod tests {
    use super::{offset_of, shift, unshift};

    #[test]
    fn test_negative_lower_bound_shifts_to_zero() {
        assert_eq!(shift(-500, 100), (0, 600));
        assert_eq!(offset_of(-500), 500);
    }

    #[test]
    fn test_non_negative_lower_bound_needs_no_offset() {
        assert_eq!(shift(3, 10), (3, 10));
        assert_eq!(offset_of(3), 0);
    }

    #[test]
    fn test_shift_handles_the_extreme_lower_bound() {
        let (shifted_min, shifted_max) = shift(i64::MIN, i64::MAX);

        assert_eq!(shifted_min, 0);
        assert_eq!(shifted_max, u64::MAX);
    }

    #[test]
    fn test_unshift_restores_the_signed_domain() {
        assert_eq!(unshift(0, -500), -500);
        assert_eq!(unshift(599, -500), 99);
        assert_eq!(unshift(7, 3), 7);
    }
}
