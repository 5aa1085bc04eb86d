//! RFC 8439 reference vectors.
//!
//! The published test data for the ChaCha20 block function (section 2.3.2)
//! and the encryption algorithm (section 2.4.2). Both use the key of 32
//! sequential bytes.

use hex_literal::hex;

/// The 32 sequential key bytes `00 01 .. 1f` shared by every vector.
pub const KEY: [u8; 32] =
    hex!("000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f");

/// Nonce for the block-function vector (section 2.3.2).
pub const BLOCK_NONCE: [u8; 12] = hex!("000000090000004a00000000");

/// Expected keystream block for [`KEY`] / [`BLOCK_NONCE`] at counter 1
/// (section 2.3.2).
pub const BLOCK_COUNTER_1: [u8; 64] = hex!(
    "10f1e7e4d13b5915500fdd1fa32071c4"
    "c7d1f4c733c068030422aa9ac3d46c4e"
    "d2826446079faa0914c2d705d98b02a2"
    "b5129cd1de164eb9cbd083e8a2503c4e"
);

/// Nonce for the encryption vector (section 2.4.2).
pub const MESSAGE_NONCE: [u8; 12] = hex!("000000000000004a00000000");

/// First keystream block for [`KEY`] / [`MESSAGE_NONCE`] at counter 1
/// (section 2.4.2).
pub const MESSAGE_KEYSTREAM_1: [u8; 64] = hex!(
    "224f51f3401bd9e12fde276fb8631ded"
    "8c131f823d2c06e27e4fcaec9ef3cf78"
    "8a3b0aa372600a92b57974cded2b9334"
    "794cba40c63e34cdea212c4cf07d41b7"
);

/// The 114-byte plaintext of the encryption vector (section 2.4.2).
pub const SUNSCREEN_PLAINTEXT: &[u8] = b"Ladies and Gentlemen of the class of '99: \
If I could offer you only one tip for the future, sunscreen would be it.";

/// Ciphertext of [`SUNSCREEN_PLAINTEXT`] under [`KEY`] / [`MESSAGE_NONCE`]
/// with counter 1 (section 2.4.2).
pub const SUNSCREEN_CIPHERTEXT: [u8; 114] = hex!(
    "6e2e359a2568f98041ba0728dd0d6981"
    "e97e7aec1d4360c20a27afccfd9fae0b"
    "f91b65c5524733ab8f593dabcd62b357"
    "1639d624e65152ab8f530c359f0861d8"
    "07ca0dbf500d6a6156a38e088a22b65e"
    "52bc514d16ccf806818ce91ab7793736"
    "5af90bbf74a35be6b40b8eedf2785e42"
    "874d"
);
