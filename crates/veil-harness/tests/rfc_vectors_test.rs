//! RFC 8439 vector tests.
//!
//! Exact-match tests against the published reference data: the block
//! function vector of section 2.3.2 and the encryption vector of
//! section 2.4.2.

use veil_crypto::{ChaCha20, Keystream, chacha20_block};
use veil_harness::vectors::{
    BLOCK_COUNTER_1, BLOCK_NONCE, KEY, MESSAGE_KEYSTREAM_1, MESSAGE_NONCE, SUNSCREEN_CIPHERTEXT,
    SUNSCREEN_PLAINTEXT,
};

#[test]
fn block_function_vector() {
    let block = chacha20_block(&KEY, &BLOCK_NONCE, 1).expect("valid inputs");
    assert_eq!(
        block,
        BLOCK_COUNTER_1,
        "block mismatch: got {}",
        hex::encode(block)
    );
}

#[test]
fn keystream_block_vector() {
    // The first keystream block of the encryption test, counter 1. Its
    // leading bytes are 22 4f 51 f3.
    let block = chacha20_block(&KEY, &MESSAGE_NONCE, 1).expect("valid inputs");
    assert_eq!(
        block,
        MESSAGE_KEYSTREAM_1,
        "keystream mismatch: got {}",
        hex::encode(block)
    );
}

#[test]
fn sunscreen_encryption_vector() {
    let cipher = ChaCha20::with_counter(&KEY, &MESSAGE_NONCE, 1).expect("valid inputs");

    let ciphertext = cipher.encrypt(SUNSCREEN_PLAINTEXT).expect("in range");
    assert_eq!(
        ciphertext,
        SUNSCREEN_CIPHERTEXT,
        "ciphertext mismatch: got {}",
        hex::encode(&ciphertext)
    );
}

#[test]
fn sunscreen_decryption_round_trip() {
    let cipher = ChaCha20::with_counter(&KEY, &MESSAGE_NONCE, 1).expect("valid inputs");

    let plaintext = cipher.decrypt(&SUNSCREEN_CIPHERTEXT).expect("in range");
    assert_eq!(plaintext, SUNSCREEN_PLAINTEXT);
}

#[test]
fn multi_block_truncation_rule() {
    // A 100-byte message consumes exactly two keystream blocks: the first 64
    // bytes XOR against block 0, the remaining 36 against a truncated
    // block 1.
    let message = [0xc3u8; 100];
    let cipher = ChaCha20::new(&KEY, &MESSAGE_NONCE).expect("valid inputs");
    let ciphertext = cipher.encrypt(&message).expect("in range");
    assert_eq!(ciphertext.len(), 100);

    let stream = Keystream::new(&KEY, &MESSAGE_NONCE, 0).expect("valid inputs");
    let block_0 = stream.block_at(0).expect("in range");
    let block_1 = stream.block_at(1).expect("in range");

    for i in 0..64 {
        assert_eq!(ciphertext[i], message[i] ^ block_0[i], "byte {i}");
    }
    for i in 64..100 {
        assert_eq!(ciphertext[i], message[i] ^ block_1[i - 64], "byte {i}");
    }
}

#[test]
fn sunscreen_via_raw_keystream() {
    // The cipher engine is nothing more than XOR against the keystream the
    // generator produces; rebuilding it by hand gives the same ciphertext.
    let mut stream = Keystream::new(&KEY, &MESSAGE_NONCE, 1).expect("valid inputs");
    let mut keystream = Vec::new();
    while keystream.len() < SUNSCREEN_PLAINTEXT.len() {
        keystream.extend(stream.next_block().expect("in range"));
    }

    let ciphertext: Vec<u8> = SUNSCREEN_PLAINTEXT
        .iter()
        .zip(&keystream)
        .map(|(byte, pad)| byte ^ pad)
        .collect();

    assert_eq!(ciphertext, SUNSCREEN_CIPHERTEXT);
}
