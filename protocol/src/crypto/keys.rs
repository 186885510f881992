//! # Key Management
//!
//! secp256k1 key material for Nostr identities.
//!
//! A Nostr identity is a secp256k1 secret scalar. The public half that goes
//! on the wire is the 32-byte *x-only* form from BIP-340: the x coordinate of
//! the public point, with the parity bit dropped. Whoever verifies a
//! signature reconstructs the even-y point from those 32 bytes.
//!
//! ## Security considerations
//!
//! - Secret key bytes are never logged and never appear in `Debug` output
//!   or error messages. If you add logging to this module, log the public
//!   key, not the secret.
//! - Fresh keys come from the OS RNG (`OsRng`).
//! - Deterministic derivation follows NIP-06: a BIP-39 mnemonic (empty
//!   passphrase) becomes a seed, and BIP-32 walks the fixed path
//!   `m/44'/1237'/0'/0/0` from it. Mnemonics are secrets too and are never
//!   logged.

use std::fmt;

use bip39::Mnemonic;
use hmac::{Hmac, Mac};
use rand::rngs::OsRng;
use rand::RngCore;
use secp256k1::{Keypair, PublicKey, Scalar, SecretKey, XOnlyPublicKey};
use sha2::Sha512;
use thiserror::Error;

use super::secp;
use crate::config::{BIP32_HARDENED_OFFSET, KEY_LENGTH, NIP06_DERIVATION_PATH};
use crate::encoding::{self, EncodingError};

type HmacSha512 = Hmac<Sha512>;

/// HMAC key for the BIP-32 master node.
const BIP32_SEED_KEY: &[u8] = b"Bitcoin seed";

/// BIP-32 allows seeds between 128 and 512 bits.
const MIN_SEED_LENGTH: usize = 16;
const MAX_SEED_LENGTH: usize = 64;

/// 256 bits of entropy gives a 24-word mnemonic.
const MNEMONIC_ENTROPY_LENGTH: usize = 32;

/// Errors that can occur during key operations.
///
/// The messages describe the *shape* of the problem and never echo the
/// offending bytes back.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyError {
    /// The key string is not hex.
    #[error("invalid hex encoding: {0}")]
    InvalidHex(String),

    /// Decoded bytes do not form a valid secret scalar (wrong length, zero,
    /// or not below the curve order).
    #[error("invalid private key: {0}")]
    InvalidPrivateKey(String),

    /// Decoded bytes are not a valid x-only public key.
    #[error("invalid public key: {0}")]
    InvalidPublicKey(String),

    /// The seed phrase is not a valid BIP-39 English mnemonic (unknown
    /// word, bad word count or bad checksum).
    #[error("invalid mnemonic: {0}")]
    InvalidMnemonic(String),

    /// BIP-32 derivation failed (bad seed length or an invalid child, which
    /// has probability below 2^-127 per level).
    #[error("key derivation failed: {0}")]
    Derivation(String),
}

impl KeyError {
    fn from_private_hex(err: EncodingError) -> Self {
        match err {
            EncodingError::InvalidHex(reason) => Self::InvalidHex(reason),
            EncodingError::InvalidLength { expected, got } => {
                Self::InvalidPrivateKey(format!("expected {expected} bytes, got {got}"))
            }
        }
    }

    fn from_public_hex(err: EncodingError) -> Self {
        match err {
            EncodingError::InvalidHex(reason) => Self::InvalidHex(reason),
            EncodingError::InvalidLength { expected, got } => {
                Self::InvalidPublicKey(format!("expected {expected} bytes, got {got}"))
            }
        }
    }
}

// ---------------------------------------------------------------------------
// NostrKeypair
// ---------------------------------------------------------------------------

/// A secp256k1 keypair: the secret scalar together with its x-only public key.
///
/// `NostrKeypair` does not implement `Serialize`. Exporting a secret key is
/// a deliberate act: call [`secret_key_hex`](Self::secret_key_hex) or encode
/// it as an `nsec` with [`crate::nip19::encode_private_key`].
///
/// # Examples
///
/// ```
/// use nostr_protocol::crypto::keys::NostrKeypair;
///
/// let kp = NostrKeypair::generate();
/// assert_eq!(kp.public_key_hex().len(), 64);
/// ```
#[derive(Clone)]
pub struct NostrKeypair {
    keypair: Keypair,
}

impl NostrKeypair {
    /// Generate a fresh keypair from the OS RNG.
    ///
    /// Random 32-byte strings are rejected only if they are zero or not
    /// below the curve order, so the loop almost never runs twice.
    pub fn generate() -> Self {
        let mut bytes = [0u8; KEY_LENGTH];
        loop {
            OsRng.fill_bytes(&mut bytes);
            if let Ok(keypair) = Keypair::from_seckey_slice(secp(), &bytes) {
                return Self { keypair };
            }
        }
    }

    /// Build a keypair from raw secret key bytes.
    pub fn from_secret_bytes(bytes: &[u8; KEY_LENGTH]) -> Result<Self, KeyError> {
        let keypair = Keypair::from_seckey_slice(secp(), bytes)
            .map_err(|e| KeyError::InvalidPrivateKey(e.to_string()))?;
        Ok(Self { keypair })
    }

    /// Build a keypair from a hex secret key (64 hex characters, any case).
    pub fn from_hex(secret_hex: &str) -> Result<Self, KeyError> {
        let bytes = encoding::decode_hex_32(secret_hex).map_err(KeyError::from_private_hex)?;
        Self::from_secret_bytes(&bytes)
    }

    /// The x-only public key.
    pub fn public_key(&self) -> XOnlyPublicKey {
        self.keypair.x_only_public_key().0
    }

    /// The x-only public key as raw bytes.
    pub fn public_key_bytes(&self) -> [u8; KEY_LENGTH] {
        self.public_key().serialize()
    }

    /// The x-only public key as lowercase hex. This is what goes in an
    /// event's `pubkey` field.
    pub fn public_key_hex(&self) -> String {
        encoding::to_hex(self.public_key_bytes())
    }

    /// Exports the raw 32-byte secret key. Handle with care.
    pub fn secret_key_bytes(&self) -> [u8; KEY_LENGTH] {
        self.keypair.secret_bytes()
    }

    /// Exports the secret key as lowercase hex. Handle with care.
    pub fn secret_key_hex(&self) -> String {
        encoding::to_hex(self.secret_key_bytes())
    }

    /// The underlying libsecp256k1 keypair, for the signing engine.
    pub(crate) fn inner(&self) -> &Keypair {
        &self.keypair
    }
}

impl fmt::Debug for NostrKeypair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Public half only.
        write!(f, "NostrKeypair(pub={})", self.public_key_hex())
    }
}

impl PartialEq for NostrKeypair {
    /// Compares public keys. Secret material is not compared directly.
    fn eq(&self, other: &Self) -> bool {
        self.public_key() == other.public_key()
    }
}

impl Eq for NostrKeypair {}

// ---------------------------------------------------------------------------
// Free functions over hex strings
// ---------------------------------------------------------------------------

/// Generate a fresh private key, returned as lowercase hex.
pub fn generate_private_key() -> String {
    NostrKeypair::generate().secret_key_hex()
}

/// Derive the hex x-only public key for a hex private key.
///
/// ```
/// use nostr_protocol::crypto::keys::public_key_from_private;
///
/// let pk = public_key_from_private(
///     "0000000000000000000000000000000000000000000000000000000000000001",
/// )
/// .unwrap();
/// // The generator point's x coordinate.
/// assert_eq!(pk, "79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798");
/// ```
pub fn public_key_from_private(secret_hex: &str) -> Result<String, KeyError> {
    Ok(NostrKeypair::from_hex(secret_hex)?.public_key_hex())
}

/// Parse a hex x-only public key.
///
/// Fails with [`KeyError::InvalidHex`] for non-hex input and
/// [`KeyError::InvalidPublicKey`] for anything that is not 32 bytes or is
/// not the x coordinate of a curve point.
pub fn parse_public_key(public_hex: &str) -> Result<XOnlyPublicKey, KeyError> {
    let bytes = encoding::decode_hex_32(public_hex).map_err(KeyError::from_public_hex)?;
    XOnlyPublicKey::from_slice(&bytes).map_err(|e| KeyError::InvalidPublicKey(e.to_string()))
}

// ---------------------------------------------------------------------------
// NIP-06 mnemonics
// ---------------------------------------------------------------------------

/// Generate a fresh 24-word BIP-39 mnemonic from the OS RNG.
pub fn generate_seed_words() -> Result<String, KeyError> {
    let mut entropy = [0u8; MNEMONIC_ENTROPY_LENGTH];
    OsRng.fill_bytes(&mut entropy);
    let mnemonic =
        Mnemonic::from_entropy(&entropy).map_err(|e| KeyError::InvalidMnemonic(e.to_string()))?;
    Ok(mnemonic.to_string())
}

/// Derive the Nostr private key for a mnemonic, with an empty passphrase.
///
/// ```
/// use nostr_protocol::crypto::keys::private_key_from_mnemonic;
///
/// let sk = private_key_from_mnemonic(
///     "leader monkey parrot ring guide accident before fence cannon height naive bean",
/// )
/// .unwrap();
/// assert_eq!(sk, "7f7ff03d123792d6ac594bfa67bf6d0c0ab55b6b1fdb6249303fe861f1ccba9a");
/// ```
pub fn private_key_from_mnemonic(words: &str) -> Result<String, KeyError> {
    let mnemonic = Mnemonic::parse(words).map_err(|e| KeyError::InvalidMnemonic(e.to_string()))?;
    derive_private_key(&mnemonic.to_seed(""))
}

/// Generate a mnemonic and return the private key derived from it.
///
/// The words are dropped. Use [`generate_seed_words`] and
/// [`private_key_from_mnemonic`] when the user needs a backup phrase.
pub fn key_gen() -> Result<String, KeyError> {
    private_key_from_mnemonic(&generate_seed_words()?)
}

// ---------------------------------------------------------------------------
// BIP-32 derivation
// ---------------------------------------------------------------------------

/// Derive the Nostr private key for a BIP-39 seed along `m/44'/1237'/0'/0/0`.
///
/// `seed` is the 64-byte output of the BIP-39 mnemonic-to-seed step; see
/// [`private_key_from_mnemonic`] to start from the words.
/// Returns the private key as lowercase hex.
pub fn derive_private_key(seed: &[u8]) -> Result<String, KeyError> {
    let key = derive_secret_key(seed, &NIP06_DERIVATION_PATH)?;
    Ok(encoding::to_hex(key.secret_bytes()))
}

/// Walk an arbitrary BIP-32 path (indices at or above `0x8000_0000` are
/// hardened) and return the resulting secret key.
pub fn derive_secret_key(seed: &[u8], path: &[u32]) -> Result<SecretKey, KeyError> {
    if !(MIN_SEED_LENGTH..=MAX_SEED_LENGTH).contains(&seed.len()) {
        return Err(KeyError::Derivation(format!(
            "seed must be {MIN_SEED_LENGTH}..={MAX_SEED_LENGTH} bytes, got {}",
            seed.len()
        )));
    }

    let (il, mut chain_code) = hmac_sha512(BIP32_SEED_KEY, seed)?;
    let mut key =
        SecretKey::from_slice(&il).map_err(|e| KeyError::Derivation(format!("master key: {e}")))?;

    for &index in path {
        let (child, child_chain) = derive_child(&key, &chain_code, index)?;
        key = child;
        chain_code = child_chain;
    }

    tracing::debug!(depth = path.len(), "derived secret key from seed");
    Ok(key)
}

/// CKDpriv from BIP-32.
fn derive_child(
    parent: &SecretKey,
    chain_code: &[u8; 32],
    index: u32,
) -> Result<(SecretKey, [u8; 32]), KeyError> {
    let mut data = Vec::with_capacity(37);
    if index >= BIP32_HARDENED_OFFSET {
        data.push(0x00);
        data.extend_from_slice(&parent.secret_bytes());
    } else {
        data.extend_from_slice(&PublicKey::from_secret_key(secp(), parent).serialize());
    }
    data.extend_from_slice(&index.to_be_bytes());

    let (il, child_chain) = hmac_sha512(chain_code, &data)?;
    let tweak = Scalar::from_be_bytes(il)
        .map_err(|_| KeyError::Derivation(format!("child {index}: tweak out of range")))?;
    let child = parent
        .add_tweak(&tweak)
        .map_err(|e| KeyError::Derivation(format!("child {index}: {e}")))?;
    Ok((child, child_chain))
}

/// HMAC-SHA512 split into its left and right 32-byte halves.
fn hmac_sha512(key: &[u8], data: &[u8]) -> Result<([u8; 32], [u8; 32]), KeyError> {
    let mut mac =
        HmacSha512::new_from_slice(key).map_err(|e| KeyError::Derivation(e.to_string()))?;
    mac.update(data);
    let output = mac.finalize().into_bytes();

    let mut left = [0u8; 32];
    let mut right = [0u8; 32];
    left.copy_from_slice(&output[..32]);
    right.copy_from_slice(&output[32..]);
    Ok((left, right))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
