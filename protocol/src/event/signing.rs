//! Id computation and event signing.
//!
//! Signing does not touch `pubkey`. The caller is responsible for setting
//! it to the key that signs; an event signed with a different key will
//! simply fail verification. [`super::EventBuilder::sign_with`] fills the
//! pubkey in for you.

use tracing::debug;

use super::error::EventError;
use super::types::Event;
use crate::crypto::hash::sha256_array;
use crate::crypto::keys::NostrKeypair;
use crate::crypto::signatures;
use crate::encoding;

impl Event {
    /// SHA-256 of the canonical bytes.
    pub fn id_digest(&self) -> Result<[u8; 32], EventError> {
        Ok(sha256_array(&self.serialize_canonical()?))
    }

    /// The event id, lowercase hex, computed from the current signed
    /// fields. Does not read or write `self.id`.
    pub fn compute_id(&self) -> Result<String, EventError> {
        Ok(encoding::to_hex(self.id_digest()?))
    }
}

/// Sign `event` with a hex private key.
///
/// Computes the id, signs it, stores both on the event and returns
/// `(id, sig)`. On error the event is left unchanged.
///
/// # Example
///
/// ```
/// use nostr_protocol::event::{sign_event, verify_event, Event};
/// use nostr_protocol::crypto::keys::public_key_from_private;
///
/// let sk = "67dea2ed018072d675f5415ecfaed7d2597555e202d85b3d65ea4e58d2d92ffa";
/// let mut ev = Event::new(public_key_from_private(sk).unwrap(), 1_700_000_000, 1, "hello");
/// let (id, _sig) = sign_event(&mut ev, sk).unwrap();
/// assert_eq!(id, "eeaf6019d3539958822e623fa80fea5459003a6d9bfbf79014b01fd9bb11d46b");
/// assert!(verify_event(&ev).unwrap());
/// ```
pub fn sign_event(event: &mut Event, private_key_hex: &str) -> Result<(String, String), EventError> {
    let keypair = NostrKeypair::from_hex(private_key_hex)?;
    sign_event_with_keypair(event, &keypair)
}

/// Sign `event` with an already parsed keypair.
pub fn sign_event_with_keypair(
    event: &mut Event,
    keypair: &NostrKeypair,
) -> Result<(String, String), EventError> {
    let digest = event.id_digest()?;
    let signature = signatures::sign(keypair, &digest)?;

    let id = encoding::to_hex(digest);
    let sig = encoding::to_hex(signature);
    debug!(id = %id, kind = event.kind, "signed event");

    event.id = Some(id.clone());
    event.sig = Some(sig.clone());
    Ok((id, sig))
}
