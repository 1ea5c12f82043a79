//! Error taxonomy for random value generation.

use std::io::ErrorKind;

use thiserror::Error;

/// Errors that may occur while generating random values.
///
/// None of these are recovered internally: every failure surfaces to the
/// immediate caller. In particular, an entropy failure never degrades into
/// a substituted "random-looking" value, since silently weak randomness is
/// a security hazard.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum RandomError {
    /// The OS entropy device could not be opened.
    ///
    /// The device is expected to always exist on supported platforms, so
    /// this failure indicates a misconfigured or sandboxed environment and
    /// is not retried. Every later read against the same source reports
    /// the same error.
    #[error("entropy device unavailable ({kind:?})")]
    EntropyUnavailable {
        /// Kind of the I/O failure observed when opening the device.
        kind: ErrorKind,
    },

    /// The entropy device failed mid-read, or signalled end-of-stream
    /// before the requested byte count was collected.
    ///
    /// No partial buffer is ever returned alongside this error.
    #[error("entropy device read failed ({kind:?})")]
    EntropyReadError {
        /// Kind of the I/O failure observed during the read.
        kind: ErrorKind,
    },

    /// A malformed bound pair: `max <= min` for half-open semantics, or
    /// `max < min` for a closed range.
    #[error("invalid range: min {min}, max {max}")]
    InvalidRange {
        /// Lower bound as supplied by the caller.
        min: i64,
        /// Upper bound as supplied by the caller.
        max: i64,
    },

    /// The requested range width exceeds the unsigned working domain.
    ///
    /// Only reachable when the full signed domain is requested with
    /// inclusive semantics, where widening the range by one no longer fits.
    #[error("range width exceeds the unsigned working domain")]
    RangeOverflow,
}
