//! Cipher state construction and serialization.
//!
//! The state is 16 unsigned 32-bit words, logically a 4x4 matrix with a fixed
//! layout (RFC 8439 section 2.3): four constant words, eight key words, the
//! block counter, and three nonce words. Key and nonce bytes are decoded as
//! little-endian 4-byte groups.

use crate::error::CipherError;

/// Key size in bytes (256-bit key).
pub const KEY_SIZE: usize = 32;

/// Nonce size in bytes (96-bit nonce).
pub const NONCE_SIZE: usize = 12;

/// Keystream block size in bytes.
pub const BLOCK_SIZE: usize = 64;

/// Number of 32-bit words in the cipher state.
pub const STATE_WORDS: usize = 16;

/// Highest counter value a block may use.
///
/// `u32::MAX` is reserved so that advancing to the next block can never wrap
/// the counter.
pub const MAX_COUNTER: u32 = u32::MAX - 1;

/// The "expand 32-byte k" constants occupying words 0..4.
const SIGMA: [u32; 4] = [0x6170_7865, 0x3320_646e, 0x7962_2d32, 0x6b20_6574];

/// Builds the 16-word initial state from key, nonce, and block counter.
///
/// Pure and deterministic: the same inputs always produce the same words.
///
/// # Errors
///
/// - [`CipherError::InvalidKeyLength`] if `key` is not 32 bytes
/// - [`CipherError::InvalidNonceLength`] if `nonce` is not 12 bytes
/// - [`CipherError::CounterOutOfRange`] if `counter` is `u32::MAX`
pub fn build_state(
    key: &[u8],
    nonce: &[u8],
    counter: u32,
) -> Result<[u32; STATE_WORDS], CipherError> {
    let key: &[u8; KEY_SIZE] =
        key.try_into().map_err(|_| CipherError::InvalidKeyLength { actual: key.len() })?;
    let nonce: &[u8; NONCE_SIZE] =
        nonce.try_into().map_err(|_| CipherError::InvalidNonceLength { actual: nonce.len() })?;
    if counter > MAX_COUNTER {
        return Err(CipherError::CounterOutOfRange { counter });
    }

    let mut state = [0u32; STATE_WORDS];
    state[..4].copy_from_slice(&SIGMA);

    let (key_words, _) = key.as_chunks::<4>();
    for (word, chunk) in state[4..12].iter_mut().zip(key_words) {
        *word = u32::from_le_bytes(*chunk);
    }

    state[12] = counter;

    let (nonce_words, _) = nonce.as_chunks::<4>();
    for (word, chunk) in state[13..].iter_mut().zip(nonce_words) {
        *word = u32::from_le_bytes(*chunk);
    }

    Ok(state)
}

/// Serializes 16 state words into 64 bytes, little-endian per word.
pub fn serialize_words(words: &[u32; STATE_WORDS]) -> [u8; BLOCK_SIZE] {
    let mut out = [0u8; BLOCK_SIZE];
    for (chunk, word) in out.chunks_exact_mut(4).zip(words) {
        chunk.copy_from_slice(&word.to_le_bytes());
    }
    out
}
