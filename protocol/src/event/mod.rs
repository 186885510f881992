//! # Event Module
//!
//! Canonical serialization, identity, signing and verification of events.
//!
//! ```text
//! types.rs          Event, Tag, ExtraValue
//! canonical.rs      The [0,pubkey,created_at,kind,tags,content] byte form
//! signing.rs        Id computation and Schnorr signing
//! verification.rs   verify, validate, batch verification
//! extra.rs          Accessors for unsigned side-channel fields
//! builder.rs        Fluent EventBuilder
//! error.rs          EventError
//! ```
//!
//! ## Lifecycle
//!
//! 1. **Build**: [`EventBuilder`] or [`Event::new`].
//! 2. **Sign**: [`sign_event`] computes the id and signature and stores both.
//! 3. **Verify**: [`verify_event`] on receipt, or [`Event::validate`] when
//!    the stored id must also be checked.
//!
//! Mutating a signed field after step 2 invalidates the id and signature.
//! Nothing detects that; sign again.

pub mod builder;
pub mod canonical;
pub mod error;
pub mod extra;
pub mod signing;
pub mod types;
pub mod verification;

pub use builder::EventBuilder;
pub use canonical::canonical_bytes;
pub use error::EventError;
pub use signing::{sign_event, sign_event_with_keypair};
pub use types::{Event, ExtraValue, Tag};
pub use verification::{verify_batch, verify_batch_parallel, verify_event};
