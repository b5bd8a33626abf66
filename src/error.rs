//! Error types for the Grain-128 library.

use thiserror::Error;

/// Errors produced by the Grain-128 library.
///
/// Every variant is a caller contract violation detected before any cipher
/// state is created or advanced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Grain128Error {
    /// Key is not exactly 16 bytes.
    #[error("Invalid key length {len} (expected 16 bytes)")]
    InvalidKeyLength {
        /// Length of the rejected key.
        len: usize,
    },
    /// IV is not exactly 12 bytes.
    #[error("Invalid IV length {len} (expected 12 bytes)")]
    InvalidIvLength {
        /// Length of the rejected IV.
        len: usize,
    },
    /// Output buffer length differs from the requested keystream length.
    #[error("Buffer length mismatch: expected {expected} bytes, got {actual}")]
    BufferLengthMismatch {
        /// Number of bytes requested.
        expected: usize,
        /// Number of bytes the buffer actually holds.
        actual: usize,
    },
}

/// Result type for Grain-128 operations.
pub type Result<T> = std::result::Result<T, Grain128Error>;
