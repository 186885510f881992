//! # Protocol Configuration & Constants
//!
//! Every magic number the codec and the signing engine depend on lives here.
//! These values are fixed by the wire protocol: two implementations that
//! disagree on any of them will produce different identifiers, different
//! bech32 strings, or will reject each other's output. Change nothing here
//! without a protocol revision to point at.
//!
//! The one knob that is *not* fixed by the protocol is how forgiving the
//! bech32 entity decoder should be with non-minimal payloads. That lives in
//! [`CodecConfig`].

use std::fmt;
use std::str::FromStr;

// ---------------------------------------------------------------------------
// Bech32 Human-Readable Prefixes
// ---------------------------------------------------------------------------

/// Raw 32-byte x-only public key.
pub const NPUB_PREFIX: &str = "npub";

/// Raw 32-byte secret key. Anything carrying this prefix is a secret.
pub const NSEC_PREFIX: &str = "nsec";

/// Raw 32-byte event identifier.
pub const NOTE_PREFIX: &str = "note";

/// TLV stream: public key plus relay hints.
pub const NPROFILE_PREFIX: &str = "nprofile";

/// TLV stream: event identifier plus relay hints.
pub const NEVENT_PREFIX: &str = "nevent";

// ---------------------------------------------------------------------------
// TLV Layout
// ---------------------------------------------------------------------------

/// TLV type carrying the primary value (public key or event id).
pub const TLV_DEFAULT: u8 = 0;

/// TLV type carrying one relay URL as UTF-8 bytes.
pub const TLV_RELAY: u8 = 1;

/// A TLV length is a single byte, so no value can exceed this.
pub const TLV_MAX_VALUE_LENGTH: usize = u8::MAX as usize;

/// Bytes of framing in front of every TLV value (type + length).
pub const TLV_HEADER_LENGTH: usize = 2;

// ---------------------------------------------------------------------------
// Cryptographic Parameters
// ---------------------------------------------------------------------------

/// Secret keys, x-only public keys and event ids are all 32 bytes.
pub const KEY_LENGTH: usize = 32;

/// BIP-340 signatures: `r || s`, 32 bytes each.
pub const SIGNATURE_LENGTH: usize = 64;

/// Leading literal of the canonical event array. Not an event field; it is
/// the serialization format version and must always be emitted as `0`.
pub const EVENT_SERIALIZATION_VERSION: u8 = 0;

/// Offset that marks a BIP-32 child index as hardened.
pub const BIP32_HARDENED_OFFSET: u32 = 0x8000_0000;

/// The fixed NIP-06 derivation path `m/44'/1237'/0'/0/0`.
///
/// 1237 is the SLIP-44 coin type registered for Nostr.
pub const NIP06_DERIVATION_PATH: [u32; 5] = [
    BIP32_HARDENED_OFFSET + 44,
    BIP32_HARDENED_OFFSET + 1237,
    BIP32_HARDENED_OFFSET,
    0,
    0,
];

/// Environment variable consulted by [`CodecConfig::from_env`].
pub const DECODE_POLICY_ENV: &str = "NOSTR_DECODE_POLICY";

// ---------------------------------------------------------------------------
// Decoder Policy
// ---------------------------------------------------------------------------

/// How the bech32 entity decoder treats payloads that are well-formed bech32
/// but not minimal.
///
/// Three situations are affected:
///
/// | Input | `Lenient` | `Strict` |
/// |---|---|---|
/// | raw `npub`/`nsec`/`note` payload longer than 32 bytes | first 32 bytes kept | `PayloadLength` |
/// | more than one type-0 TLV entry | last entry wins | `DuplicatePrimaryValue` |
/// | trailing TLV entry shorter than its declared length | walk stops | `TruncatedEntry` |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecodePolicy {
    /// Accept what the widely deployed encoders accept.
    #[default]
    Lenient,
    /// Reject anything that is not exactly what our encoder would produce.
    Strict,
}

impl DecodePolicy {
    /// Returns `true` for [`DecodePolicy::Strict`].
    pub fn is_strict(self) -> bool {
        matches!(self, DecodePolicy::Strict)
    }
}

impl fmt::Display for DecodePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lenient => write!(f, "lenient"),
            Self::Strict => write!(f, "strict"),
        }
    }
}

impl FromStr for DecodePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lenient" => Ok(Self::Lenient),
            "strict" => Ok(Self::Strict),
            other => Err(format!("unknown decode policy '{other}'")),
        }
    }
}

/// Codec settings threaded through [`crate::nip19::decode_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CodecConfig {
    /// Strictness applied to non-minimal payloads.
    pub policy: DecodePolicy,
}

impl CodecConfig {
    /// Lenient decoding. Same as `CodecConfig::default()`.
    pub fn lenient() -> Self {
        Self {
            policy: DecodePolicy::Lenient,
        }
    }

    /// Strict decoding.
    pub fn strict() -> Self {
        Self {
            policy: DecodePolicy::Strict,
        }
    }

    /// Read the policy from `NOSTR_DECODE_POLICY`.
    ///
    /// A missing variable yields the default. An unparsable value also yields
    /// the default, with a warning, rather than failing whatever host is
    /// loading us.
    pub fn from_env() -> Self {
        match std::env::var(DECODE_POLICY_ENV) {
            Ok(raw) => match raw.parse::<DecodePolicy>() {
                Ok(policy) => Self { policy },
                Err(e) => {
                    tracing::warn!("{DECODE_POLICY_ENV}: {e}, falling back to lenient");
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }
}
