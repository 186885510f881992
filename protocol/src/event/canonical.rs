//! Canonical serialization of the signed fields.
//!
//! The bytes hashed into an event id are the compact JSON array
//!
//! ```text
//! [0,<pubkey>,<created_at>,<kind>,<tags>,<content>]
//! ```
//!
//! with no whitespace anywhere, UTF-8 output, and only the escapes JSON
//! requires: `"` and `\`, `\n` `\r` `\t` `\b` `\f` by their short forms,
//! other control characters as `\u00XX`. Non-ASCII characters are written
//! raw, never as `\u` escapes, and `<`, `>`, `&` are not escaped. This is
//! exactly what `serde_json`'s compact writer produces, so the array is
//! serialized as a plain tuple.
//!
//! Every conforming implementation must produce the same bytes here, or ids
//! stop matching across clients.

use super::error::EventError;
use super::types::{Event, Tag};
use crate::config::EVENT_SERIALIZATION_VERSION;

/// Serialize the five signed fields in canonical form.
pub fn canonical_bytes(
    pubkey: &str,
    created_at: i64,
    kind: u32,
    tags: &[Tag],
    content: &str,
) -> Result<Vec<u8>, EventError> {
    let array = (EVENT_SERIALIZATION_VERSION, pubkey, created_at, kind, tags, content);
    Ok(serde_json::to_vec(&array)?)
}

impl Event {
    /// Canonical bytes for this event's current signed fields. `id`, `sig`
    /// and `extra` are ignored.
    pub fn serialize_canonical(&self) -> Result<Vec<u8>, EventError> {
        canonical_bytes(
            &self.pubkey,
            self.created_at,
            self.kind,
            &self.tags,
            &self.content,
        )
    }
}
