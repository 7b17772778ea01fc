//! Errors raised at the byte-slice boundary of the cipher.

use thiserror::Error;

/// Error type for `gfaes-core`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// A key or block was supplied with the wrong number of bytes.
    #[error("invalid {input} length: expected {expected} bytes, got {actual}")]
    InvalidLength {
        /// Which input was rejected.
        input: &'static str,
        /// Required length in bytes.
        expected: usize,
        /// Length actually supplied.
        actual: usize,
    },
}

/// Result alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

pub(crate) fn check_len(input: &'static str, bytes: &[u8], expected: usize) -> Result<()> {
    if bytes.len() != expected {
        return Err(Error::InvalidLength {
            input,
            expected,
            actual: bytes.len(),
        });
    }
    Ok(())
}
