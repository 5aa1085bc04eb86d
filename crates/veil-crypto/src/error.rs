//! Cipher error types.

use thiserror::Error;

/// Errors from cipher construction and keystream generation.
///
/// Every failure is surfaced immediately to the caller; nothing is retried
/// or degraded internally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CipherError {
    /// Key is not exactly 32 bytes.
    #[error("invalid key length: expected 32 bytes, got {actual}")]
    InvalidKeyLength {
        /// Length of the key that was supplied.
        actual: usize,
    },

    /// Nonce is not exactly 12 bytes.
    #[error("invalid nonce length: expected 12 bytes, got {actual}")]
    InvalidNonceLength {
        /// Length of the nonce that was supplied.
        actual: usize,
    },

    /// Initial counter is the reserved top value of the 32-bit range.
    #[error("counter out of range: {counter} (must be below 2^32 - 1)")]
    CounterOutOfRange {
        /// The counter that was supplied.
        counter: u32,
    },

    /// Keystream extension stepped the counter to the end of the 32-bit
    /// range. The session cannot produce more blocks; the caller must re-key
    /// or switch to a fresh nonce.
    #[error("counter overflow: block {block} from counter {start} leaves the 32-bit range")]
    CounterOverflow {
        /// Starting counter of the keystream.
        start: u32,
        /// Block index that could not be produced.
        block: u64,
    },
}

impl CipherError {
    /// Returns true if this error ends the session.
    ///
    /// Length and range errors are recoverable by constructing again with
    /// corrected inputs. Counter overflow is not: the keystream under this
    /// (key, nonce) pair is exhausted.
    pub fn is_fatal(&self) -> bool {
        match self {
            Self::CounterOverflow { .. } => true,

            Self::InvalidKeyLength { .. }
            | Self::InvalidNonceLength { .. }
            | Self::CounterOutOfRange { .. } => false,
        }
    }
}
