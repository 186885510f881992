//! Hex encoding and fixed-width byte validation.
//!
//! Everything that crosses the crate boundary as a key, id or signature is a
//! hex string. Decoding accepts either case; encoding always produces
//! lowercase, because the lowercase form is what gets hashed and compared.

use thiserror::Error;

use crate::config::{KEY_LENGTH, SIGNATURE_LENGTH};

/// Errors from the hex layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodingError {
    /// Not valid hex (odd length or a non-hex character).
    #[error("invalid hex: {0}")]
    InvalidHex(String),

    /// Valid hex, wrong number of bytes.
    #[error("invalid length: expected {expected} bytes, got {got}")]
    InvalidLength {
        /// Bytes required.
        expected: usize,
        /// Bytes actually decoded.
        got: usize,
    },
}

/// Lowercase hex encoding.
pub fn to_hex(bytes: impl AsRef<[u8]>) -> String {
    hex::encode(bytes)
}

/// Decode hex of any length. Upper and lower case are both accepted.
pub fn decode_hex(s: &str) -> Result<Vec<u8>, EncodingError> {
    hex::decode(s).map_err(|e| EncodingError::InvalidHex(e.to_string()))
}

/// Decode hex that must be exactly `N` bytes.
pub fn decode_hex_array<const N: usize>(s: &str) -> Result<[u8; N], EncodingError> {
    let bytes = decode_hex(s)?;
    let got = bytes.len();
    bytes
        .try_into()
        .map_err(|_| EncodingError::InvalidLength { expected: N, got })
}

/// Decode a 32-byte value: secret key, x-only public key or event id.
pub fn decode_hex_32(s: &str) -> Result<[u8; KEY_LENGTH], EncodingError> {
    decode_hex_array::<KEY_LENGTH>(s)
}

/// Decode a 64-byte Schnorr signature.
pub fn decode_hex_64(s: &str) -> Result<[u8; SIGNATURE_LENGTH], EncodingError> {
    decode_hex_array::<SIGNATURE_LENGTH>(s)
}
