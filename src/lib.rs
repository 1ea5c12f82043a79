//! Randomness utilities for Nebula
//!
//! This crate provides cryptographically-sourced random values used
//! throughout the Nebula ecosystem.
//!
//! The focus is on **correctness of plumbing** rather than on cryptographic
//! primitive design: the crate is a disciplined consumer of the operating
//! system's entropy device, and its responsibilities are serialization of
//! device access, byte accounting, and range arithmetic. It implements no
//! cipher or DRBG of its own.
//!
//! # Module overview
//!
//! - `rng`
//!   The random value facilities: an entropy source wrapping the OS device,
//!   typed derivation of integers and floats from raw bytes, and
//!   range-bounded draws that support negative bounds with inclusive or
//!   exclusive endpoint semantics.
//!
//! - `num`
//!   Small pure numeric helpers (angle conversion, decimal digit
//!   extraction) with no entropy dependency or shared state.
//!
//! # Design goals
//!
//! - Every failure surfaces to the caller; entropy failure never degrades
//!   into a substituted value
//! - Explicit byte-to-integer composition, no in-place reinterpretation
//! - Safe for arbitrary concurrent callers
//! - Minimal and explicit APIs
//!
//! This crate is not a general-purpose CSPRNG library. Callers that need
//! deterministic expansion from a seed should use a DRBG on top of the
//! entropy source exposed here.

mod os;

pub mod num;
pub mod rng;
