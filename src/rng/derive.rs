//! Typed value derivation from raw entropy bytes.
//!
//! Device bytes are composed into integers explicitly, by copying into a
//! fixed array and decoding with `from_ne_bytes`, never by reinterpreting
//! the buffer in place. Every bit pattern of the target width is equally
//! likely, so the full representable range, including negative values, is
//! reachable.
//!
//! Floating-point values keep only as many high bits of a same-width draw
//! as the mantissa can represent exactly, then scale down by the matching
//! power of two. The result covers `[0, 1)` uniformly and can never round
//! up to `1.0`.

use crate::rng::{EntropySource, RandomError};

/// Value bits an `f32` mantissa can represent exactly.
const F32_BITS: u32 = 24;

/// Value bits an `f64` mantissa can represent exactly.
const F64_BITS: u32 = 53;

/// Types that can be drawn directly from an entropy source.
pub trait FromEntropy: Sized {
    /// Draws one uniformly distributed value from `source`.
    ///
    /// # Errors
    /// Propagates any [`RandomError`] from the underlying entropy read.
    fn random(source: &EntropySource) -> Result<Self, RandomError>;
}

impl FromEntropy for i8 {
    /// Draws a random `i8` from one device byte.
    fn random(source: &EntropySource) -> Result<Self, RandomError> {
        let mut raw = [0u8; size_of::<i8>()];
        source.fill_bytes(&mut raw)?;

        Ok(i8::from_ne_bytes(raw))
    }
}

impl FromEntropy for i16 {
    /// Draws a random `i16` from two device bytes.
    fn random(source: &EntropySource) -> Result<Self, RandomError> {
        let mut raw = [0u8; size_of::<i16>()];
        source.fill_bytes(&mut raw)?;

        Ok(i16::from_ne_bytes(raw))
    }
}

impl FromEntropy for i32 {
    /// Draws a random `i32` from four device bytes.
    fn random(source: &EntropySource) -> Result<Self, RandomError> {
        let mut raw = [0u8; size_of::<i32>()];
        source.fill_bytes(&mut raw)?;

        Ok(i32::from_ne_bytes(raw))
    }
}

impl FromEntropy for i64 {
    /// Draws a random `i64` from eight device bytes.
    fn random(source: &EntropySource) -> Result<Self, RandomError> {
        let mut raw = [0u8; size_of::<i64>()];
        source.fill_bytes(&mut raw)?;

        Ok(i64::from_ne_bytes(raw))
    }
}

impl FromEntropy for i128 {
    /// Draws a random `i128` from sixteen device bytes.
    fn random(source: &EntropySource) -> Result<Self, RandomError> {
        let mut raw = [0u8; size_of::<i128>()];
        source.fill_bytes(&mut raw)?;

        Ok(i128::from_ne_bytes(raw))
    }
}

impl FromEntropy for isize {
    /// Draws a random `isize` from a platform word of device bytes.
    fn random(source: &EntropySource) -> Result<Self, RandomError> {
        let mut raw = [0u8; size_of::<isize>()];
        source.fill_bytes(&mut raw)?;

        Ok(isize::from_ne_bytes(raw))
    }
}

impl FromEntropy for f32 {
    /// Draws a random `f32` uniformly distributed over `[0, 1)`.
    ///
    /// Derived from the unsigned reinterpretation of a same-width integer
    /// draw, truncated to the 24 bits an `f32` mantissa holds exactly.
    fn random(source: &EntropySource) -> Result<Self, RandomError> {
        let raw = i32::random(source)? as u32;

        Ok(unit_f32(raw))
    }
}

impl FromEntropy for f64 {
    /// Draws a random `f64` uniformly distributed over `[0, 1)`.
    ///
    /// Derived from the unsigned reinterpretation of a same-width integer
    /// draw, truncated to the 53 bits an `f64` mantissa holds exactly.
    fn random(source: &EntropySource) -> Result<Self, RandomError> {
        let raw = i64::random(source)? as u64;

        Ok(unit_f64(raw))
    }
}

/// Maps a full-width raw draw onto `[0, 1)` with full `f32` precision.
fn unit_f32(raw: u32) -> f32 {
    (raw >> (32 - F32_BITS)) as f32 / (1u32 << F32_BITS) as f32
}

/// Maps a full-width raw draw onto `[0, 1)` with full `f64` precision.
fn unit_f64(raw: u64) -> f64 {
    (raw >> (64 - F64_BITS)) as f64 / (1u64 << F64_BITS) as f64
}

/// Draws a unit float in `[0, 1)`.
///
/// Convenience wrapper over the [`FromEntropy`] implementation for `f64`.
///
/// # Errors
/// Propagates any [`RandomError`] from the underlying entropy read.
pub fn random_float(source: &EntropySource) -> Result<f64, RandomError> {
    f64::random(source)
}
