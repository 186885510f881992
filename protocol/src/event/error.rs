//! Error type shared by event serialization, signing and verification.

use thiserror::Error;

use crate::crypto::keys::KeyError;
use crate::crypto::signatures::SignatureError;
use crate::encoding::EncodingError;

/// Errors from event operations.
///
/// A signature that simply does not match is *not* an error for
/// [`super::verify_event`]; it returns `Ok(false)`. These variants cover
/// inputs that cannot be processed at all.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EventError {
    /// The signed fields could not be serialized.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// A hex field (key, id or signature) is not valid hex.
    #[error("invalid hex encoding: {0}")]
    InvalidHexEncoding(String),

    /// The private key is not a valid secp256k1 scalar.
    #[error("invalid private key: {0}")]
    InvalidPrivateKey(String),

    /// The public key has the wrong length or is not on the curve.
    #[error("invalid public key: {0}")]
    KeyFormat(String),

    /// The signature has the wrong length or cannot be parsed.
    #[error("malformed signature: {0}")]
    SignatureFormat(String),

    #[error("signing failed: {0}")]
    SigningFailure(String),

    /// The event has no `sig` (or, for `validate`, no `id`).
    #[error("event is unsigned")]
    MissingSignature,

    /// The stored id does not match the recomputed one.
    #[error("event id mismatch: expected {expected}, got {actual}")]
    IdMismatch { expected: String, actual: String },

    /// The signature parses but does not verify against `pubkey`.
    #[error("invalid signature: does not verify against pubkey {pubkey}")]
    InvalidSignature { pubkey: String },
}

impl From<serde_json::Error> for EventError {
    fn from(err: serde_json::Error) -> Self {
        EventError::Serialization(err.to_string())
    }
}

impl From<EncodingError> for EventError {
    fn from(err: EncodingError) -> Self {
        EventError::InvalidHexEncoding(err.to_string())
    }
}

impl From<KeyError> for EventError {
    fn from(err: KeyError) -> Self {
        match err {
            KeyError::InvalidHex(reason) => EventError::InvalidHexEncoding(reason),
            KeyError::InvalidPublicKey(reason) => EventError::KeyFormat(reason),
            KeyError::InvalidPrivateKey(reason)
            | KeyError::InvalidMnemonic(reason)
            | KeyError::Derivation(reason) => {
                EventError::InvalidPrivateKey(reason)
            }
        }
    }
}

impl From<SignatureError> for EventError {
    fn from(err: SignatureError) -> Self {
        match err {
            SignatureError::InvalidSignatureBytes(reason) => EventError::SignatureFormat(reason),
            SignatureError::InvalidPublicKey(reason) => EventError::KeyFormat(reason),
            SignatureError::SigningFailure(reason) => EventError::SigningFailure(reason),
        }
    }
}
