//! Serialized access to the OS entropy device.

use std::io;
use std::sync::{Mutex, PoisonError};

use log::{debug, warn};

use crate::os::Device;
use crate::rng::RandomError;

/// State of the lazily opened device handle.
enum DeviceSlot {
    /// Not opened yet. The first reader opens it.
    Closed,

    /// Open and usable for the remaining lifetime of the source.
    Open(Device),

    /// Opening failed. Every read reports the stored failure kind.
    Poisoned(io::ErrorKind),
}

/// Handle onto the operating system's entropy device.
///
/// The device is opened lazily on the first read and kept open for the
/// lifetime of the source; it is never explicitly closed. All reads are
/// serialized through an internal mutex, so two concurrent callers can
/// never interleave their byte output, and a racing first use resolves to
/// exactly one open of the device. If the open fails, the source is
/// poisoned and every subsequent read fails with
/// [`RandomError::EntropyUnavailable`].
///
/// Construct one source at process start and pass it by reference to
/// consumers.
pub struct EntropySource {
    device: Mutex<DeviceSlot>,
}

impl EntropySource {
    /// Creates a source whose device will be opened on first use.
    pub const fn new() -> Self {
        Self {
            device: Mutex::new(DeviceSlot::Closed),
        }
    }

    /// Fills `buf` with entropy read from the OS device.
    ///
    /// Blocks until any concurrent reader has finished and the buffer is
    /// completely filled; a partially filled buffer is never observable.
    /// Short reads from the device are retried until the requested count
    /// has been accumulated.
    ///
    /// # Errors
    /// - [`RandomError::EntropyUnavailable`] if the device cannot be
    ///   opened, now or on an earlier call.
    /// - [`RandomError::EntropyReadError`] if the device fails or reaches
    ///   end-of-stream before `buf.len()` bytes were collected.
    pub fn fill_bytes(&self, buf: &mut [u8]) -> Result<(), RandomError> {
        // A poisoned std mutex only means another caller panicked while
        // holding it; the slot state itself stays consistent.
        let mut slot = self.device.lock().unwrap_or_else(PoisonError::into_inner);

        match *slot {
            DeviceSlot::Open(ref mut device) => {
                return device
                    .fill(buf)
                    .map_err(|err| RandomError::EntropyReadError { kind: err.kind() });
            }
            DeviceSlot::Poisoned(kind) => {
                return Err(RandomError::EntropyUnavailable { kind });
            }
            DeviceSlot::Closed => {}
        }

        match Device::open() {
            Ok(mut device) => {
                debug!("entropy device opened");

                let result = device
                    .fill(buf)
                    .map_err(|err| RandomError::EntropyReadError { kind: err.kind() });
                *slot = DeviceSlot::Open(device);

                result
            }
            Err(err) => {
                warn!("entropy device open failed: {err}");

                let kind = err.kind();
                *slot = DeviceSlot::Poisoned(kind);

                Err(RandomError::EntropyUnavailable { kind })
            }
        }
    }

    /// Reads exactly `count` bytes of entropy into a fresh buffer.
    ///
    /// The buffer is exclusively owned by the caller; nothing is cached or
    /// reused across calls.
    ///
    /// # Errors
    /// Same failure modes as [`EntropySource::fill_bytes`].
    pub fn read_bytes(&self, count: usize) -> Result<Vec<u8>, RandomError> {
        let mut buf = vec![0u8; count];
        self.fill_bytes(&mut buf)?;

        Ok(buf)
    }
}

impl Default for EntropySource {
    /// Equivalent to [`EntropySource::new`].
    fn default() -> Self {
        Self::new()
    }
}
