//! Counter-mode keystream generation.

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::block::chacha20_block;
use crate::error::CipherError;
use crate::state::{BLOCK_SIZE, KEY_SIZE, MAX_COUNTER, NONCE_SIZE};

/// A lazy sequence of 64-byte keystream blocks for one (key, nonce) pair.
///
/// Block `i` of the stream is the block transform applied at counter
/// `start + i`. Every block is a pure function of its counter, so random
/// access through [`Keystream::block_at`] and sequential streaming through
/// [`Keystream::next_block`] always agree, and independent counters may be
/// computed in parallel.
///
/// The stream is logically infinite but bounded by the counter range: once
/// the next counter would leave the 32-bit range the stream reports
/// [`CipherError::CounterOverflow`] and produces nothing further.
///
/// Key material is wiped when the stream is dropped.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Keystream {
    key: [u8; KEY_SIZE],
    nonce: [u8; NONCE_SIZE],
    start: u32,
    next: u64,
}

impl std::fmt::Debug for Keystream {
    /// Redacts key and nonce bytes; only the stream position is printed.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Keystream")
            .field("key", &format!("<redacted {} bytes>", self.key.len()))
            .field("nonce", &format!("<redacted {} bytes>", self.nonce.len()))
            .field("start", &self.start)
            .field("next", &self.next)
            .finish()
    }
}

impl Keystream {
    /// Creates a keystream starting at `counter`.
    ///
    /// # Errors
    ///
    /// Same validation as the state builder: key must be 32 bytes, nonce 12
    /// bytes, counter strictly below `u32::MAX`.
    pub fn new(key: &[u8], nonce: &[u8], counter: u32) -> Result<Self, CipherError> {
        let key: [u8; KEY_SIZE] =
            key.try_into().map_err(|_| CipherError::InvalidKeyLength { actual: key.len() })?;
        let nonce: [u8; NONCE_SIZE] =
            nonce.try_into().map_err(|_| CipherError::InvalidNonceLength { actual: nonce.len() })?;
        if counter > MAX_COUNTER {
            return Err(CipherError::CounterOutOfRange { counter });
        }

        Ok(Self { key, nonce, start: counter, next: 0 })
    }

    /// Computes block `index` of the stream without advancing it.
    ///
    /// # Errors
    ///
    /// [`CipherError::CounterOverflow`] if `start + index` leaves the valid
    /// counter range.
    pub fn block_at(&self, index: u64) -> Result<[u8; BLOCK_SIZE], CipherError> {
        chacha20_block(&self.key, &self.nonce, self.counter_for(index)?)
    }

    /// Produces the next sequential block and advances the stream.
    ///
    /// On [`CipherError::CounterOverflow`] the stream position is left
    /// unchanged; no block is consumed by a failed request.
    pub fn next_block(&mut self) -> Result<[u8; BLOCK_SIZE], CipherError> {
        let block = self.block_at(self.next)?;
        self.next += 1;
        Ok(block)
    }

    /// Rewinds the stream to its starting counter.
    pub fn restart(&mut self) {
        self.next = 0;
    }

    /// The counter value backing block `index`.
    fn counter_for(&self, index: u64) -> Result<u32, CipherError> {
        u64::from(self.start)
            .checked_add(index)
            .filter(|counter| *counter <= u64::from(MAX_COUNTER))
            .and_then(|counter| u32::try_from(counter).ok())
            .ok_or(CipherError::CounterOverflow { start: self.start, block: index })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: [u8; KEY_SIZE] = [0x42; KEY_SIZE];
    const NONCE: [u8; NONCE_SIZE] = [0x07; NONCE_SIZE];

    #[test]
    fn streaming_agrees_with_seeking() {
        let mut stream = Keystream::new(&KEY, &NONCE, 5).expect("valid inputs");

        for index in 0..4 {
            let streamed = stream.next_block().expect("in range");
            let sought = stream.block_at(index).expect("in range");
            assert_eq!(streamed, sought, "block {index}");
        }
    }

    #[test]
    fn blocks_follow_the_counter() {
        let stream = Keystream::new(&KEY, &NONCE, 9).expect("valid inputs");
        let shifted = Keystream::new(&KEY, &NONCE, 12).expect("valid inputs");

        assert_eq!(
            stream.block_at(3).expect("in range"),
            shifted.block_at(0).expect("in range"),
        );
    }

    #[test]
    fn restart_replays_the_stream() {
        let mut stream = Keystream::new(&KEY, &NONCE, 0).expect("valid inputs");
        let first = stream.next_block().expect("in range");
        let _ = stream.next_block().expect("in range");

        stream.restart();
        assert_eq!(stream.next_block().expect("in range"), first);
    }

    #[test]
    fn overflow_at_the_end_of_the_range() {
        let mut stream = Keystream::new(&KEY, &NONCE, MAX_COUNTER).expect("valid inputs");

        // The last usable counter value still yields a block.
        let _ = stream.next_block().expect("last block");

        let err = stream.next_block().expect_err("range exhausted");
        assert_eq!(err, CipherError::CounterOverflow { start: MAX_COUNTER, block: 1 });
        assert!(err.is_fatal());

        // A failed request consumes nothing; the stream stays where it was.
        let err = stream.next_block().expect_err("still exhausted");
        assert_eq!(err, CipherError::CounterOverflow { start: MAX_COUNTER, block: 1 });
    }

    #[test]
    fn seek_past_the_range_overflows() {
        let stream = Keystream::new(&KEY, &NONCE, 0).expect("valid inputs");
        let err = stream.block_at(u64::from(u32::MAX)).expect_err("out of range");
        assert_eq!(err, CipherError::CounterOverflow { start: 0, block: u64::from(u32::MAX) });
    }

    #[test]
    fn debug_redacts_key_material() {
        let stream = Keystream::new(&KEY, &NONCE, 3).expect("valid inputs");
        let printed = format!("{stream:?}");

        assert!(printed.contains("<redacted 32 bytes>"));
        assert!(printed.contains("<redacted 12 bytes>"));
        assert!(printed.contains("start: 3"));
        assert!(!printed.contains("66"), "key byte 0x42 must not appear");
    }

    #[test]
    fn rejects_bad_inputs() {
        assert_eq!(
            Keystream::new(&KEY[..8], &NONCE, 0).expect_err("short key"),
            CipherError::InvalidKeyLength { actual: 8 },
        );
        assert_eq!(
            Keystream::new(&KEY, &NONCE[..4], 0).expect_err("short nonce"),
            CipherError::InvalidNonceLength { actual: 4 },
        );
        assert_eq!(
            Keystream::new(&KEY, &NONCE, u32::MAX).expect_err("reserved counter"),
            CipherError::CounterOutOfRange { counter: u32::MAX },
        );
    }
}
