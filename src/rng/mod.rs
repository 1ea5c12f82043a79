//! Random value generation module
//!
//! This module provides cryptographically-sourced random values for the
//! Nebula ecosystem.
//!
//! It is built around an [`EntropySource`] that serializes access to the
//! operating system's entropy device, and exposes typed derivation on top
//! of it: full-width signed integers of any width, unit-interval floats,
//! and range-bounded draws that handle negative bounds with inclusive or
//! exclusive endpoint semantics.

/// Design goals:
/// - One open device handle per source, reads fully serialized
/// - Exact byte accounting, never a partial buffer
/// - Range arithmetic free of signed overflow and negative-modulo bugs
/// - Every failure surfaces as a typed error
mod derive;
mod error;
mod range;
mod source;

/// Typed derivation of random values from an entropy source.
///
/// Implemented for every signed integer width and for `f32`/`f64`.
pub use derive::{FromEntropy, random_float};

/// Error taxonomy shared by all random value operations.
pub use error::RandomError;

/// Range-bounded draws over signed integers and floats.
pub use range::{random_float_in, random_int, random_int_in};

/// Serialized handle onto the operating system's entropy device.
///
/// This type is the primary entry point for obtaining raw randomness
/// within the Nebula codebase.
pub use source::EntropySource;
