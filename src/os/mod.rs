//! Operating system abstraction layer
//!
//! This module provides a unified, platform-independent interface to the
//! operating system's entropy device.
//!
//! Platform-specific implementations are selected at compile time using
//! conditional compilation. Each submodule exposes the same public surface,
//! allowing higher-level code to remain fully portable.
//!
//! Every platform exposes a `Device`: an open handle onto the system's
//! randomness facility that can fill caller-provided buffers. Opening and
//! reading both report I/O failures instead of panicking, so that higher
//! layers can surface them as typed errors.
//!
//! The device path and the system service used are fixed per platform and
//! not configurable.

#[cfg(unix)]
pub(crate) mod unix;

#[cfg(unix)]
pub(crate) use unix::Device;

#[cfg(windows)]
pub(crate) mod windows;

#[cfg(windows)]
pub(crate) use windows::Device;
