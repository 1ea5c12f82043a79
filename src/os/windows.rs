//! Operating system abstraction layer (Windows)
//!
//! Windows has no entropy device path; randomness is served by the
//! `BCryptGenRandom` system service with the system-preferred RNG. The
//! `Device` type is therefore stateless: opening always succeeds and each
//! fill is a single call into the CNG provider.

use std::io;

use windows_sys::Win32::Security::Cryptography::{
    BCRYPT_USE_SYSTEM_PREFERRED_RNG, BCryptGenRandom,
};

/// Handle onto the system-preferred RNG.
pub(crate) struct Device;

impl Device {
    /// Opens the randomness facility. Cannot fail on Windows.
    pub(crate) fn open() -> io::Result<Self> {
        Ok(Self)
    }

    /// Fills `buf` with bytes from the system-preferred RNG.
    ///
    /// # Errors
    /// Reports a non-zero `NTSTATUS` from `BCryptGenRandom` as an I/O
    /// error; the buffer contents are unspecified in that case and must
    /// not be used.
    pub(crate) fn fill(&mut self, buf: &mut [u8]) -> io::Result<()> {
        let status = unsafe {
            BCryptGenRandom(
                std::ptr::null_mut(),
                buf.as_mut_ptr(),
                buf.len() as u32,
                BCRYPT_USE_SYSTEM_PREFERRED_RNG,
            )
        };

        if status != 0 {
            return Err(io::Error::other(format!(
                "BCryptGenRandom failed with status {status}"
            )));
        }

        Ok(())
    }
}
