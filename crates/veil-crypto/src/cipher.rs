//! The XOR cipher engine.

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::CipherError;
use crate::keystream::Keystream;
use crate::state::BLOCK_SIZE;

/// A ChaCha20 cipher session: key, nonce, and starting block counter.
///
/// Encryption and decryption are the same XOR transformation, so applying
/// either to the other's output with the same parameters recovers the
/// original bytes.
///
/// A session holds no mutable position: every [`encrypt`](ChaCha20::encrypt)
/// or [`decrypt`](ChaCha20::decrypt) call draws keystream starting from the
/// configured counter. Callers splitting one logical message across several
/// calls must thread the counter themselves, one increment per 64-byte block
/// consumed.
///
/// Key material is wiped when the session is dropped.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct ChaCha20 {
    stream: Keystream,
}

impl std::fmt::Debug for ChaCha20 {
    /// Delegates to the keystream's redacting impl; no key material leaks.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChaCha20").field("stream", &self.stream).finish()
    }
}

impl ChaCha20 {
    /// Creates a session starting at counter 0.
    ///
    /// # Errors
    ///
    /// [`CipherError::InvalidKeyLength`] or
    /// [`CipherError::InvalidNonceLength`] for wrongly sized inputs.
    pub fn new(key: &[u8], nonce: &[u8]) -> Result<Self, CipherError> {
        Self::with_counter(key, nonce, 0)
    }

    /// Creates a session with an explicit starting counter.
    ///
    /// # Errors
    ///
    /// The validation errors of [`Keystream::new`], including
    /// [`CipherError::CounterOutOfRange`] for the reserved top value.
    pub fn with_counter(key: &[u8], nonce: &[u8], counter: u32) -> Result<Self, CipherError> {
        Ok(Self { stream: Keystream::new(key, nonce, counter)? })
    }

    /// Encrypts `plaintext`, preserving its length exactly.
    ///
    /// # Errors
    ///
    /// [`CipherError::CounterOverflow`] if the message needs more blocks than
    /// the counter range can still supply.
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>, CipherError> {
        self.apply(plaintext)
    }

    /// Decrypts `ciphertext`. Identical to [`encrypt`](ChaCha20::encrypt);
    /// the transformation is an involution.
    ///
    /// # Errors
    ///
    /// Same as [`encrypt`](ChaCha20::encrypt).
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>, CipherError> {
        self.apply(ciphertext)
    }

    /// XORs the input against ceil(len / 64) keystream blocks, truncating the
    /// final block to the input length. Empty input yields empty output
    /// without touching the keystream.
    fn apply(&self, input: &[u8]) -> Result<Vec<u8>, CipherError> {
        let mut stream = self.stream.clone();
        let mut output = Vec::with_capacity(input.len());

        for chunk in input.chunks(BLOCK_SIZE) {
            let block = stream.next_block()?;
            output.extend(chunk.iter().zip(block).map(|(byte, pad)| byte ^ pad));
        }

        Ok(output)
    }
}
