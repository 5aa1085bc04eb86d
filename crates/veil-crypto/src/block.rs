//! The 20-round block transform.

use crate::error::CipherError;
use crate::rounds::double_round;
use crate::state::{BLOCK_SIZE, build_state, serialize_words};

/// Double-rounds per block. 10 double-rounds are the 20 rounds of ChaCha20.
const DOUBLE_ROUNDS: usize = 10;

/// Computes the 64-byte keystream block for (key, nonce, counter).
///
/// A working copy of the initial state goes through 10 double-rounds, the
/// untouched initial state is added back word-wise (the feed-forward that
/// keeps the transform non-invertible), and the result is serialized
/// little-endian.
///
/// Pure and deterministic; distinct counters under the same key and nonce
/// select independent blocks, which is what makes seeking and parallel
/// generation safe.
///
/// # Errors
///
/// Input validation errors of [`build_state`](crate::state::build_state).
pub fn chacha20_block(
    key: &[u8],
    nonce: &[u8],
    counter: u32,
) -> Result<[u8; BLOCK_SIZE], CipherError> {
    let initial = build_state(key, nonce, counter)?;

    let mut working = initial;
    for _ in 0..DOUBLE_ROUNDS {
        double_round(&mut working);
    }

    for (word, seed) in working.iter_mut().zip(&initial) {
        *word = word.wrapping_add(*seed);
    }

    Ok(serialize_words(&working))
}
