//! Fuzz target for the cipher engine construction and round-trip path
//!
//! # Strategy
//!
//! - Arbitrary key/nonce lengths: exercise the validation path, not only the
//!   happy path
//! - Arbitrary counters: include the reserved top value and counters near
//!   the end of the range
//! - Arbitrary messages: cross the 64-byte block boundary in both directions
//!
//! # Invariants
//!
//! - Construction NEVER panics, whatever the input lengths
//! - Wrong lengths are rejected with the matching length error
//! - On successful construction, decrypt(encrypt(m)) == m
//! - Ciphertext length equals message length
//! - Counter overflow is the only mid-message failure, and only near the
//!   end of the counter range

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use veil_crypto::{ChaCha20, CipherError};

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    key: Vec<u8>,
    nonce: Vec<u8>,
    counter: u32,
    message: Vec<u8>,
}

fuzz_target!(|input: FuzzInput| {
    let cipher = match ChaCha20::with_counter(&input.key, &input.nonce, input.counter) {
        Ok(cipher) => {
            assert_eq!(input.key.len(), 32);
            assert_eq!(input.nonce.len(), 12);
            assert_ne!(input.counter, u32::MAX);
            cipher
        },
        Err(CipherError::InvalidKeyLength { actual }) => {
            assert_eq!(actual, input.key.len());
            assert_ne!(actual, 32);
            return;
        },
        Err(CipherError::InvalidNonceLength { actual }) => {
            assert_eq!(input.key.len(), 32, "key checked before nonce");
            assert_eq!(actual, input.nonce.len());
            assert_ne!(actual, 12);
            return;
        },
        Err(CipherError::CounterOutOfRange { counter }) => {
            assert_eq!(counter, u32::MAX);
            return;
        },
        Err(err) => panic!("unexpected construction error: {err}"),
    };

    match cipher.encrypt(&input.message) {
        Ok(ciphertext) => {
            assert_eq!(ciphertext.len(), input.message.len());

            let recovered = cipher.decrypt(&ciphertext).expect("same blocks fit");
            assert_eq!(recovered, input.message);

            if !input.message.is_empty() && input.message.iter().any(|&b| b != 0) {
                assert_ne!(ciphertext, input.message, "keystream must not be identity");
            }
        },
        Err(CipherError::CounterOverflow { start, .. }) => {
            // Only reachable when the message needs more blocks than the
            // counter range still offers.
            let blocks_needed = input.message.len().div_ceil(64) as u64;
            let blocks_left = u64::from(u32::MAX) - u64::from(start);
            assert!(blocks_needed > blocks_left);
        },
        Err(err) => panic!("unexpected cipher error: {err}"),
    }
});
