//! Operating system abstraction layer (Unix)
//!
//! On Unix platforms the kernel exposes its entropy pool as the character
//! device `/dev/urandom`. The device is opened once and the handle is kept
//! for the lifetime of the process; reads against it advance the kernel's
//! internal cursor and have no other observable side effect.
//!
//! `/dev/urandom` never blocks once the pool is initialized and is suitable
//! for cryptographic use on all supported systems.

use std::fs::File;
use std::io::{self, ErrorKind, Read};

/// Path of the kernel entropy device.
const DEVICE_PATH: &str = "/dev/urandom";

/// Open handle onto the kernel entropy device.
pub(crate) struct Device {
    file: File,
}

impl Device {
    /// Opens the entropy device for reading.
    ///
    /// # Errors
    /// Returns the underlying I/O error if the device cannot be opened,
    /// which on a correctly configured system should never happen.
    pub(crate) fn open() -> io::Result<Self> {
        let file = File::open(DEVICE_PATH)?;

        Ok(Self { file })
    }

    /// Fills `buf` with bytes read from the device.
    ///
    /// The kernel may return fewer bytes than requested per read, so reads
    /// are issued in a loop until the buffer is full. Interrupted reads are
    /// retried. A read of zero bytes means the device signalled
    /// end-of-stream, which is reported as `UnexpectedEof` rather than
    /// leaving the buffer partially filled.
    pub(crate) fn fill(&mut self, buf: &mut [u8]) -> io::Result<()> {
        let mut filled = 0;

        while filled < buf.len() {
            match self.file.read(&mut buf[filled..]) {
                Ok(0) => return Err(io::Error::from(ErrorKind::UnexpectedEof)),
                Ok(read) => filled += read,
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => return Err(err),
            }
        }

        Ok(())
    }
}
