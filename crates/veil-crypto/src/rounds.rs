//! The ARX quarter-round and the double-round schedule.
//!
//! Word arithmetic is the native fixed-width kind: `wrapping_add` for
//! addition mod 2^32, `^` for XOR, and `rotate_left` for rotation of the
//! 32-bit pattern.

use crate::state::STATE_WORDS;

/// Mixes four words of the state in place (RFC 8439 section 2.1).
///
/// The step order and the rotation amounts 16, 12, 8, 7 are fixed by the
/// cipher definition and must not change.
pub fn quarter_round(state: &mut [u32; STATE_WORDS], a: usize, b: usize, c: usize, d: usize) {
    state[a] = state[a].wrapping_add(state[b]);
    state[d] = (state[d] ^ state[a]).rotate_left(16);

    state[c] = state[c].wrapping_add(state[d]);
    state[b] = (state[b] ^ state[c]).rotate_left(12);

    state[a] = state[a].wrapping_add(state[b]);
    state[d] = (state[d] ^ state[a]).rotate_left(8);

    state[c] = state[c].wrapping_add(state[d]);
    state[b] = (state[b] ^ state[c]).rotate_left(7);
}

/// One double-round: four column quarter-rounds, then four diagonal ones.
pub fn double_round(state: &mut [u32; STATE_WORDS]) {
    quarter_round(state, 0, 4, 8, 12);
    quarter_round(state, 1, 5, 9, 13);
    quarter_round(state, 2, 6, 10, 14);
    quarter_round(state, 3, 7, 11, 15);

    quarter_round(state, 0, 5, 10, 15);
    quarter_round(state, 1, 6, 11, 12);
    quarter_round(state, 2, 7, 8, 13);
    quarter_round(state, 3, 4, 9, 14);
}
