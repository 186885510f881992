// Copyright (c) 2026 Nostr Protocol Contributors. MIT License.
// See LICENSE for details.

//! # Nostr Protocol: Core Library
//!
//! Verifiable identity and integrity for Nostr events, without trusting a
//! relay: every event is serialized canonically, hashed into a
//! content-addressed id, and signed with BIP-340 Schnorr over secp256k1.
//! Anyone holding the event can recompute the id and check the author.
//!
//! ## Architecture
//!
//! - **event**: The event model, canonical serializer, id/sign/verify.
//! - **nip19**: Bech32 entity strings: `npub`, `nsec`, `note`, `nprofile`, `nevent`.
//! - **crypto**: SHA-256, secp256k1 keys, Schnorr signatures, NIP-06 mnemonic derivation.
//! - **encoding**: Hex with fixed-width validation.
//! - **config**: Protocol constants and the decoder's strictness policy.
//! - **logging**: Optional `tracing` subscriber for hosts.
//!
//! ## Example
//!
//! ```
//! use nostr_protocol::crypto::NostrKeypair;
//! use nostr_protocol::event::{verify_event, EventBuilder};
//! use nostr_protocol::nip19;
//!
//! let keys = NostrKeypair::generate();
//! let event = EventBuilder::new(1).content("hello").sign_with(&keys).unwrap();
//! assert!(verify_event(&event).unwrap());
//!
//! let npub = nip19::encode_public_key(&event.pubkey).unwrap();
//! assert!(npub.starts_with("npub1"));
//! ```
//!
//! Every operation is pure and synchronous. Nothing holds shared mutable
//! state, so all of it can be called from any number of threads at once.

pub mod config;
pub mod crypto;
pub mod encoding;
pub mod event;
pub mod logging;
pub mod nip19;

pub use config::{CodecConfig, DecodePolicy};
pub use crypto::keys::{
    derive_private_key, generate_private_key, generate_seed_words, key_gen,
    private_key_from_mnemonic, public_key_from_private,
};
pub use event::{sign_event, verify_event, Event, EventBuilder, EventError, Tag};
pub use nip19::{EntityPointer, EventPointer, Nip19Error, ProfilePointer};
