//! Core type definitions for events.
//!
//! These are the wire-facing shapes: the JSON object relays and clients
//! exchange. Only five of the fields are signed (`pubkey`, `created_at`,
//! `kind`, `tags`, `content`); see [`super::canonical`] for how they are
//! laid out before hashing.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A dynamically typed value carried in [`Event::extra`].
///
/// String, number, boolean, null, array or nested object. Accessors on
/// [`Event`] return a zero value on a type mismatch instead of failing.
pub type ExtraValue = serde_json::Value;

// ---------------------------------------------------------------------------
// Tag
// ---------------------------------------------------------------------------

/// A tag: an ordered array of strings.
///
/// By convention the first element names the tag and the rest carry data:
///
/// - `["e", <event id>, <relay url>]` references another event
/// - `["p", <pubkey>]` references another author
/// - `["t", "nostr"]` is a topic
///
/// Tags are kept verbatim. Order matters, both inside a tag and across the
/// tag list, because it ends up in the canonical bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tag(pub Vec<String>);

impl Tag {
    /// Build a tag from anything string-like.
    pub fn new<I, S>(parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Tag(parts.into_iter().map(Into::into).collect())
    }

    /// The tag name (first element), if any.
    pub fn name(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    /// The first data element, if any.
    pub fn value(&self) -> Option<&str> {
        self.0.get(1).map(String::as_str)
    }

    /// All elements.
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<String>> for Tag {
    fn from(parts: Vec<String>) -> Self {
        Tag(parts)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0.join(", "))
    }
}

// ---------------------------------------------------------------------------
// Event
// ---------------------------------------------------------------------------

/// A content-addressed, signed event.
///
/// ```json
/// {
///   "id": "eeaf6019...",
///   "pubkey": "7e7e9c42...",
///   "created_at": 1700000000,
///   "kind": 1,
///   "tags": [["t", "nostr"]],
///   "content": "hello",
///   "sig": "40045d01..."
/// }
/// ```
///
/// `id` and `sig` are `None` until the event is signed. They are derived
/// from the *current* values of the five signed fields; changing any of
/// those afterwards silently invalidates both, and the event must be signed
/// again.
///
/// `extra` holds any additional fields. It is never part of the signed
/// bytes. On the wire its entries sit next to the core fields, and parsing
/// puts any field this struct does not know about into it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Event {
    /// `hex(sha256(canonical bytes))`, lowercase, 64 characters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Author x-only public key, lowercase hex, 64 characters.
    pub pubkey: String,

    /// Unix timestamp in seconds.
    pub created_at: i64,

    /// Semantic type of the event, e.g. `1` for a text note.
    pub kind: u32,

    /// Ordered tag list.
    #[serde(default)]
    pub tags: Vec<Tag>,

    /// Arbitrary UTF-8 body.
    #[serde(default)]
    pub content: String,

    /// BIP-340 signature over `id`, lowercase hex, 128 characters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sig: Option<String>,

    /// Unsigned side-channel fields.
    #[serde(flatten)]
    pub extra: BTreeMap<String, ExtraValue>,
}

impl Event {
    /// An unsigned event with no tags and no extras.
    pub fn new(
        pubkey: impl Into<String>,
        created_at: i64,
        kind: u32,
        content: impl Into<String>,
    ) -> Self {
        Self {
            pubkey: pubkey.into(),
            created_at,
            kind,
            content: content.into(),
            ..Default::default()
        }
    }

    /// Returns `true` once both `id` and `sig` are set. Says nothing about
    /// whether they are still valid.
    pub fn is_signed(&self) -> bool {
        self.id.is_some() && self.sig.is_some()
    }

    /// Tags whose name matches `name`, in order.
    pub fn tags_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Tag> + 'a {
        self.tags.iter().filter(move |t| t.name() == Some(name))
    }
}
