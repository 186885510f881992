//! Event construction via the builder pattern.
//!
//! `build()` returns an unsigned [`Event`]; `sign_with()` fills in the
//! author's pubkey from the keypair and signs in one go.

use std::collections::BTreeMap;

use chrono::Utc;

use super::error::EventError;
use super::signing::sign_event_with_keypair;
use super::types::{Event, ExtraValue, Tag};
use crate::crypto::keys::NostrKeypair;

/// Fluent builder for [`Event`].
///
/// ```
/// use nostr_protocol::crypto::keys::NostrKeypair;
/// use nostr_protocol::event::{verify_event, EventBuilder, Tag};
///
/// let keys = NostrKeypair::generate();
/// let event = EventBuilder::new(1)
///     .content("gm")
///     .tag(Tag::new(["t", "nostr"]))
///     .sign_with(&keys)
///     .unwrap();
/// assert!(verify_event(&event).unwrap());
/// ```
#[derive(Debug, Clone, Default)]
pub struct EventBuilder {
    kind: u32,
    pubkey: Option<String>,
    created_at: Option<i64>,
    tags: Vec<Tag>,
    content: String,
    extra: BTreeMap<String, ExtraValue>,
}

impl EventBuilder {
    pub fn new(kind: u32) -> Self {
        Self {
            kind,
            ..Default::default()
        }
    }

    /// Author pubkey, hex. Overridden by [`sign_with`](Self::sign_with).
    pub fn pubkey(mut self, pubkey: impl Into<String>) -> Self {
        self.pubkey = Some(pubkey.into());
        self
    }

    /// Unix seconds. Defaults to the current time at build.
    pub fn created_at(mut self, created_at: i64) -> Self {
        self.created_at = Some(created_at);
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Append one tag. Order of calls is order in the event.
    pub fn tag(mut self, tag: Tag) -> Self {
        self.tags.push(tag);
        self
    }

    pub fn tags(mut self, tags: impl IntoIterator<Item = Tag>) -> Self {
        self.tags.extend(tags);
        self
    }

    /// Unsigned extra field. Core field names are ignored, as with
    /// [`Event::set_extra`].
    pub fn extra(mut self, key: impl Into<String>, value: impl Into<ExtraValue>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Assemble the unsigned event.
    pub fn build(self) -> Event {
        let mut event = Event {
            id: None,
            pubkey: self.pubkey.unwrap_or_default(),
            created_at: self.created_at.unwrap_or_else(|| Utc::now().timestamp()),
            kind: self.kind,
            tags: self.tags,
            content: self.content,
            sig: None,
            extra: BTreeMap::new(),
        };
        for (key, value) in self.extra {
            event.set_extra(key, value);
        }
        event
    }

    /// Build with `keypair`'s public key as author, then sign.
    pub fn sign_with(self, keypair: &NostrKeypair) -> Result<Event, EventError> {
        let mut event = self.pubkey(keypair.public_key_hex()).build();
        sign_event_with_keypair(&mut event, keypair)?;
        Ok(event)
    }
}
