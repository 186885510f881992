//! # Cryptographic Primitives
//!
//! Everything security-related in the crate flows through here: the hash
//! that turns an event into its identifier, the key material that owns an
//! identity, and the Schnorr signatures that bind the two.
//!
//! - **SHA-256** for event identifiers.
//! - **secp256k1** keys, x-only public keys per BIP-340.
//! - **BIP-340 Schnorr** signatures, via libsecp256k1.
//!
//! Nothing here is hand-rolled. The curve arithmetic is libsecp256k1's; the
//! hashing is RustCrypto's. This module only fixes the encodings and the
//! error surface.

use std::sync::OnceLock;

use secp256k1::{All, Secp256k1};

pub mod hash;
pub mod keys;
pub mod signatures;

pub use hash::{sha256, sha256_array, sha256_hex};
pub use keys::{KeyError, NostrKeypair};
pub use signatures::{sign, verify, SignatureError};

static SECP: OnceLock<Secp256k1<All>> = OnceLock::new();

/// Shared libsecp256k1 context.
///
/// Context creation allocates and precomputes tables, so it is built once
/// and shared. The context is immutable after construction and safe to use
/// from any thread.
pub(crate) fn secp() -> &'static Secp256k1<All> {
    SECP.get_or_init(Secp256k1::new)
}
