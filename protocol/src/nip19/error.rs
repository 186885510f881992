use thiserror::Error;

use crate::encoding::EncodingError;

/// Errors from bech32 entity encoding and decoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Nip19Error {
    /// A character outside the bech32 alphabet in the data part.
    #[error("invalid bech32 character {0:?}")]
    InvalidCharacter(char),

    /// The checksum does not match the prefix and data.
    #[error("bech32 checksum mismatch: {0}")]
    Checksum(String),

    /// Not a bech32 string at all: no separator, mixed case, empty prefix
    /// and the like.
    #[error("malformed bech32 string: {0}")]
    Malformed(String),

    /// 5-bit to 8-bit regrouping failed (non-zero or excess padding).
    #[error("bit conversion failed: {0}")]
    BitConversion(String),

    /// A raw `npub`/`nsec`/`note` payload shorter than 32 bytes.
    #[error("{prefix} payload too short: expected {expected} bytes, got {got}")]
    PayloadTooShort {
        prefix: String,
        expected: usize,
        got: usize,
    },

    /// A payload or primary TLV value of the wrong length.
    #[error("{prefix} payload has wrong length: expected {expected} bytes, got {got}")]
    PayloadLength {
        prefix: String,
        expected: usize,
        got: usize,
    },

    /// A TLV value over 255 bytes cannot be framed.
    #[error("TLV value of type {kind} is {len} bytes, maximum is 255")]
    ValueTooLong { kind: u8, len: usize },

    /// A TLV entry whose header or value runs past the end of the payload.
    #[error("truncated TLV entry at offset {offset}: needs {needed} bytes, {available} available")]
    TruncatedEntry {
        offset: usize,
        needed: usize,
        available: usize,
    },

    /// A TLV stream with no type-0 entry.
    #[error("{prefix} has no primary value")]
    MissingPrimaryValue { prefix: String },

    /// A TLV stream with more than one type-0 entry.
    #[error("{prefix} has more than one primary value")]
    DuplicatePrimaryValue { prefix: String },

    #[error("unknown bech32 prefix '{0}'")]
    UnknownPrefix(String),

    /// Hex input to an encoder is not valid hex or not 32 bytes.
    #[error("invalid value encoding: {0}")]
    Encoding(String),

    /// A relay entry is not valid UTF-8.
    #[error("relay is not valid UTF-8: {0}")]
    InvalidUtf8(String),

    /// bech32 refused to encode (for instance, the result is too long).
    #[error("bech32 encoding failed: {0}")]
    Encode(String),
}

impl From<EncodingError> for Nip19Error {
    fn from(err: EncodingError) -> Self {
        Nip19Error::Encoding(err.to_string())
    }
}
