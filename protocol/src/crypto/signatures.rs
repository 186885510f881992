//! # Digital Signatures
//!
//! BIP-340 Schnorr signing and verification over secp256k1.
//!
//! The message is always a 32-byte digest (for events: the event id). The
//! signature is the 64-byte `r || s` concatenation, and the public key is
//! the 32-byte x-only form.
//!
//! ## Nonces
//!
//! Signing uses the BIP-340 nonce derivation with all-zero auxiliary
//! randomness, so a given (key, digest) pair always produces the same
//! signature. Verifiers do not care how the nonce was chosen; any valid
//! BIP-340 signature verifies.
//!
//! ## Errors vs. `false`
//!
//! A signature that parses but does not match is a normal outcome and
//! yields `false`. Bytes that cannot even be parsed as a signature or a
//! public key are errors.

use secp256k1::schnorr::Signature;
use secp256k1::{Message, XOnlyPublicKey};
use thiserror::Error;

use super::keys::{KeyError, NostrKeypair};
use super::secp;
use crate::config::SIGNATURE_LENGTH;

/// Errors during signature operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignatureError {
    /// The signature is not 64 bytes of valid hex, or libsecp256k1 refused it.
    #[error("invalid signature bytes: {0}")]
    InvalidSignatureBytes(String),

    /// The public key is not a valid x-only key.
    #[error("invalid public key: {0}")]
    InvalidPublicKey(String),

    /// Signing produced something that does not verify. Should never happen;
    /// indicates a broken RNG-free signing path or memory corruption.
    #[error("signing failed: {0}")]
    SigningFailure(String),
}

impl From<KeyError> for SignatureError {
    fn from(err: KeyError) -> Self {
        SignatureError::InvalidPublicKey(err.to_string())
    }
}

/// Sign a 32-byte digest.
///
/// The fresh signature is verified once before being returned; a failure
/// there surfaces as [`SignatureError::SigningFailure`].
///
/// # Example
///
/// ```
/// use nostr_protocol::crypto::{NostrKeypair, sha256_array};
/// use nostr_protocol::crypto::signatures::{sign, verify};
///
/// let kp = NostrKeypair::generate();
/// let digest = sha256_array(b"hello");
/// let sig = sign(&kp, &digest).unwrap();
/// assert!(verify(&kp.public_key(), &digest, &sig).unwrap());
/// ```
pub fn sign(
    keypair: &NostrKeypair,
    digest: &[u8; 32],
) -> Result<[u8; SIGNATURE_LENGTH], SignatureError> {
    let msg = Message::from_digest(*digest);
    let sig = secp().sign_schnorr_no_aux_rand(&msg, keypair.inner());

    secp()
        .verify_schnorr(&sig, &msg, &keypair.public_key())
        .map_err(|e| SignatureError::SigningFailure(e.to_string()))?;

    Ok(*sig.as_ref())
}

/// Verify a signature over a 32-byte digest.
///
/// Returns `Ok(false)` when the signature is well-formed but does not
/// match; `Err` only when the signature bytes cannot be parsed.
pub fn verify(
    public_key: &XOnlyPublicKey,
    digest: &[u8; 32],
    signature: &[u8; SIGNATURE_LENGTH],
) -> Result<bool, SignatureError> {
    let sig = Signature::from_slice(signature)
        .map_err(|e| SignatureError::InvalidSignatureBytes(e.to_string()))?;
    let msg = Message::from_digest(*digest);
    Ok(secp().verify_schnorr(&sig, &msg, public_key).is_ok())
}
