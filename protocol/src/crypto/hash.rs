//! # Hashing Utilities
//!
//! SHA-256 is the only hash the protocol uses: event identifiers are the
//! SHA-256 of the canonical serialization, and that digest is what gets
//! signed. No double hashing, no tagged hashing at this layer (BIP-340 does
//! its own tagged hashing internally, inside libsecp256k1).

use sha2::{Digest, Sha256};

/// Compute the SHA-256 hash of the input data as a `Vec<u8>`.
///
/// # Example
///
/// ```
/// use nostr_protocol::crypto::sha256;
///
/// let hash = sha256(b"nostr");
/// assert_eq!(hash.len(), 32);
/// ```
pub fn sha256(data: &[u8]) -> Vec<u8> {
    sha256_array(data).to_vec()
}

/// Compute the SHA-256 hash and return a fixed-size array.
///
/// This is the form the signing engine wants, since a BIP-340 message is
/// exactly 32 bytes.
pub fn sha256_array(data: &[u8]) -> [u8; 32] {
    Sha256::digest(data).into()
}

/// SHA-256, lowercase hex encoded. 64 characters.
pub fn sha256_hex(data: &[u8]) -> String {
    hex::encode(sha256_array(data))
}
