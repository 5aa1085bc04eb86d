//! Veil Cryptographic Core
//!
//! This crate implements the ChaCha20 stream cipher of RFC 8439: a keyed
//! pseudorandom keystream generator in counter mode, XORed byte-wise against
//! plaintext or ciphertext.
//!
//! # Design
//!
//! All functions in this crate are pure - they have no side effects and
//! produce deterministic outputs given the same inputs. Keys and nonces must
//! be provided by the caller, enabling:
//!
//! - Deterministic testing against published reference vectors
//! - Sans-IO architecture compatibility
//! - No coupling to application-level abstractions
//!
//! There is consequently no logging and no configuration surface here;
//! observability belongs to callers.
//!
//! # Security Properties
//!
//! - Nonce uniqueness: a (key, nonce) pair must never cover two messages with
//!   overlapping counter ranges. The engine checks counter ranges but cannot
//!   see across sessions; uniqueness is a caller invariant.
//! - Key hygiene: session key material is zeroized on drop.
//! - No authentication: this is the bare stream cipher. Pair it with a MAC
//!   before trusting ciphertext integrity.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod block;
pub mod cipher;
pub mod error;
pub mod keystream;
pub mod rounds;
pub mod state;

pub use block::chacha20_block;
pub use cipher::ChaCha20;
pub use error::CipherError;
pub use keystream::Keystream;
pub use state::{BLOCK_SIZE, KEY_SIZE, MAX_COUNTER, NONCE_SIZE};
