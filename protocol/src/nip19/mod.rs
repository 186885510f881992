//! # Bech32 Entity Codec
//!
//! Human-readable, checksummed references to keys, events and profiles.
//!
//! | Prefix | Payload |
//! |---|---|
//! | `npub` | 32-byte x-only public key |
//! | `nsec` | 32-byte secret key |
//! | `note` | 32-byte event id |
//! | `nprofile` | TLV: public key, relays |
//! | `nevent` | TLV: event id, relays |
//!
//! Decoding is lenient by default, matching what deployed encoders emit.
//! Pass [`CodecConfig::strict`](crate::config::CodecConfig::strict) to
//! [`decode_with`] to reject non-minimal payloads instead.

pub mod codec;
pub mod error;
pub mod pointer;
pub mod tlv;

pub use codec::{
    decode, decode_with, encode_event, encode_note, encode_private_key, encode_profile,
    encode_public_key, encode_raw,
};
pub use error::Nip19Error;
pub use pointer::{EntityPointer, EventPointer, Prefix, ProfilePointer};
