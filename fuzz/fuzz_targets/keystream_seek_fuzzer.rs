//! Fuzz target for keystream streaming vs. random access
//!
//! # Strategy
//!
//! - Interleave sequential `next_block` calls with arbitrary `block_at`
//!   seeks and restarts
//! - Start counters anywhere in the range, including right at the end
//!
//! # Invariants
//!
//! - Streaming and seeking agree on every block index
//! - `block_at` never advances the stream
//! - A failed `next_block` leaves the stream position unchanged
//! - Overflow occurs exactly when start + index leaves the counter range
//! - NEVER panics

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use veil_crypto::{CipherError, Keystream, MAX_COUNTER};

#[derive(Debug, Arbitrary)]
enum StreamOp {
    Next,
    Seek { index: u64 },
    Restart,
}

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    key: [u8; 32],
    nonce: [u8; 12],
    counter: u32,
    ops: Vec<StreamOp>,
}

fuzz_target!(|input: FuzzInput| {
    let Ok(mut stream) = Keystream::new(&input.key, &input.nonce, input.counter) else {
        assert_eq!(input.counter, u32::MAX);
        return;
    };

    let in_range =
        |index: u64| u64::from(input.counter) + index <= u64::from(MAX_COUNTER);
    let mut position: u64 = 0;

    for op in input.ops.into_iter().take(64) {
        match op {
            StreamOp::Next => match stream.next_block() {
                Ok(block) => {
                    assert!(in_range(position));
                    assert_eq!(block, stream.block_at(position).expect("same index"));
                    position += 1;
                },
                Err(CipherError::CounterOverflow { start, block }) => {
                    assert_eq!(start, input.counter);
                    assert_eq!(block, position);
                    assert!(!in_range(position));
                },
                Err(err) => panic!("unexpected stream error: {err}"),
            },
            StreamOp::Seek { index } => {
                let result = stream.block_at(index % (1 << 33));
                assert_eq!(result.is_ok(), in_range(index % (1 << 33)));
            },
            StreamOp::Restart => {
                stream.restart();
                position = 0;
            },
        }
    }
});
