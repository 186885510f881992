//! Signature verification for events.
//!
//! Verification always recomputes the digest from the current signed
//! fields. The stored `id` is not trusted by [`verify_event`]; use
//! [`Event::validate`] when the stored id must match as well.

use std::thread;

use tracing::debug;

use super::error::EventError;
use super::types::Event;
use crate::crypto::keys;
use crate::crypto::signatures;
use crate::encoding::{self, EncodingError};

/// Verify an event's signature against its pubkey.
///
/// - `Ok(true)`: the signature is valid for the recomputed id.
/// - `Ok(false)`: everything parses but the signature does not match.
/// - `Err(_)`: `pubkey` or `sig` is not valid hex, has the wrong length, or
///   is not a valid key/signature encoding. An event with no `sig` at all
///   is [`EventError::MissingSignature`].
pub fn verify_event(event: &Event) -> Result<bool, EventError> {
    let public_key = keys::parse_public_key(&event.pubkey)?;
    let sig_hex = event.sig.as_deref().ok_or(EventError::MissingSignature)?;
    let signature = encoding::decode_hex_64(sig_hex).map_err(|e| match e {
        EncodingError::InvalidHex(reason) => EventError::InvalidHexEncoding(reason),
        other => EventError::SignatureFormat(other.to_string()),
    })?;
    let digest = event.id_digest()?;

    let valid = signatures::verify(&public_key, &digest, &signature)?;
    debug!(pubkey = %event.pubkey, valid, "verified event");
    Ok(valid)
}

impl Event {
    /// Full check of a received event.
    ///
    /// Requires `id` and `sig` to be present, the stored id to equal the
    /// recomputed one, and the signature to verify. Any failure is an error,
    /// including a signature that parses but does not match.
    pub fn validate(&self) -> Result<(), EventError> {
        let (Some(stored_id), Some(_)) = (self.id.as_deref(), self.sig.as_deref()) else {
            return Err(EventError::MissingSignature);
        };

        let expected = self.compute_id()?;
        if !stored_id.eq_ignore_ascii_case(&expected) {
            return Err(EventError::IdMismatch {
                expected,
                actual: stored_id.to_string(),
            });
        }

        if !verify_event(self)? {
            return Err(EventError::InvalidSignature {
                pubkey: self.pubkey.clone(),
            });
        }
        Ok(())
    }
}

/// Verify each event independently, in order.
pub fn verify_batch(events: &[Event]) -> Vec<Result<bool, EventError>> {
    events.iter().map(verify_event).collect()
}

/// Like [`verify_batch`], spread over up to `workers` scoped threads.
///
/// Results come back in input order. Verification shares no mutable state,
/// so the chunks run without any coordination.
pub fn verify_batch_parallel(events: &[Event], workers: usize) -> Vec<Result<bool, EventError>> {
    if events.is_empty() {
        return Vec::new();
    }
    let workers = workers.clamp(1, events.len());
    if workers == 1 {
        return verify_batch(events);
    }
    let chunk_size = events.len().div_ceil(workers);

    thread::scope(|scope| {
        let handles: Vec<_> = events
            .chunks(chunk_size)
            .map(|chunk| scope.spawn(move || verify_batch(chunk)))
            .collect();

        handles
            .into_iter()
            .flat_map(|handle| match handle.join() {
                Ok(results) => results,
                Err(panic) => std::panic::resume_unwind(panic),
            })
            .collect()
    })
}
