//! Deterministic message corpora.
//!
//! Messages are generated from a seeded RNG so that any failure is
//! reproducible: re-running with the same seed regenerates the exact corpus.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Generates `count` messages with lengths drawn from `0..=max_len`.
///
/// Lengths are sampled first, then contents, so the corpus covers the empty
/// message and both sides of the 64-byte block boundary when `max_len`
/// allows.
pub fn seeded_messages(seed: u64, count: usize, max_len: usize) -> Vec<Vec<u8>> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    (0..count)
        .map(|_| {
            let len = rng.gen_range(0..=max_len);
            let mut message = vec![0u8; len];
            rng.fill(&mut message[..]);
            message
        })
        .collect()
}
