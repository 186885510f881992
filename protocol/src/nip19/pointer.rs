//! Entity pointer types: what a bech32 entity string decodes into.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::codec;
use super::error::Nip19Error;
use crate::config::{NEVENT_PREFIX, NOTE_PREFIX, NPROFILE_PREFIX, NPUB_PREFIX, NSEC_PREFIX};

// ---------------------------------------------------------------------------
// Prefix
// ---------------------------------------------------------------------------

/// Human-readable prefix of an entity string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Prefix {
    Npub,
    Nsec,
    Note,
    Nprofile,
    Nevent,
}

impl Prefix {
    pub const ALL: [Prefix; 5] = [
        Prefix::Npub,
        Prefix::Nsec,
        Prefix::Note,
        Prefix::Nprofile,
        Prefix::Nevent,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Prefix::Npub => NPUB_PREFIX,
            Prefix::Nsec => NSEC_PREFIX,
            Prefix::Note => NOTE_PREFIX,
            Prefix::Nprofile => NPROFILE_PREFIX,
            Prefix::Nevent => NEVENT_PREFIX,
        }
    }

    /// `true` for `nprofile` and `nevent`, whose payload is a TLV stream.
    /// The others carry exactly 32 raw bytes.
    pub fn is_tlv(self) -> bool {
        matches!(self, Prefix::Nprofile | Prefix::Nevent)
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Prefix {
    type Err = Nip19Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Prefix::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| Nip19Error::UnknownPrefix(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Pointers
// ---------------------------------------------------------------------------

/// A public key plus relays where the profile may be found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfilePointer {
    /// x-only public key, hex.
    pub public_key: String,
    /// Relay URLs, in encoding order.
    #[serde(default)]
    pub relays: Vec<String>,
}

impl ProfilePointer {
    pub fn new(public_key: impl Into<String>, relays: Vec<String>) -> Self {
        Self {
            public_key: public_key.into(),
            relays,
        }
    }
}

/// An event id plus relays where the event may be found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventPointer {
    /// Event id, hex.
    pub id: String,
    #[serde(default)]
    pub relays: Vec<String>,
}

impl EventPointer {
    pub fn new(id: impl Into<String>, relays: Vec<String>) -> Self {
        Self {
            id: id.into(),
            relays,
        }
    }
}

/// Any decoded entity. Raw variants hold lowercase hex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntityPointer {
    PublicKey(String),
    SecretKey(String),
    Note(String),
    Profile(ProfilePointer),
    Event(EventPointer),
}

impl EntityPointer {
    pub fn prefix(&self) -> Prefix {
        match self {
            EntityPointer::PublicKey(_) => Prefix::Npub,
            EntityPointer::SecretKey(_) => Prefix::Nsec,
            EntityPointer::Note(_) => Prefix::Note,
            EntityPointer::Profile(_) => Prefix::Nprofile,
            EntityPointer::Event(_) => Prefix::Nevent,
        }
    }

    /// The 32-byte value the entity is about, as hex: the key, the note id,
    /// or the primary value of a pointer.
    pub fn hex_value(&self) -> &str {
        match self {
            EntityPointer::PublicKey(hex)
            | EntityPointer::SecretKey(hex)
            | EntityPointer::Note(hex) => hex,
            EntityPointer::Profile(p) => &p.public_key,
            EntityPointer::Event(e) => &e.id,
        }
    }

    /// Relay hints, empty for raw entities.
    pub fn relays(&self) -> &[String] {
        match self {
            EntityPointer::Profile(p) => &p.relays,
            EntityPointer::Event(e) => &e.relays,
            _ => &[],
        }
    }

    /// Encode to a bech32 entity string.
    pub fn encode(&self) -> Result<String, Nip19Error> {
        match self {
            EntityPointer::PublicKey(hex) => codec::encode_public_key(hex),
            EntityPointer::SecretKey(hex) => codec::encode_private_key(hex),
            EntityPointer::Note(hex) => codec::encode_note(hex),
            EntityPointer::Profile(p) => codec::encode_profile(p),
            EntityPointer::Event(e) => codec::encode_event(e),
        }
    }
}

impl fmt::Display for EntityPointer {
    /// Writes the bech32 form. A pointer that cannot be encoded (bad hex,
    /// oversized relay) is written as `<invalid PREFIX: reason>`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.encode() {
            Ok(encoded) => f.write_str(&encoded),
            Err(e) => write!(f, "<invalid {}: {e}>", self.prefix()),
        }
    }
}

impl FromStr for EntityPointer {
    type Err = Nip19Error;

    /// Decode with the default (lenient) policy.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        codec::decode(s)
    }
}

impl From<ProfilePointer> for EntityPointer {
    fn from(p: ProfilePointer) -> Self {
        EntityPointer::Profile(p)
    }
}

impl From<EventPointer> for EntityPointer {
    fn from(e: EventPointer) -> Self {
        EntityPointer::Event(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NPUB: &str = "npub10elfcs4fr0l0r8af98jlmgdh9c8tcxjvz9qkw038js35mp4dma8qzvjptg";
    const PK: &str = "7e7e9c42a91bfef19fa929e5fda1b72e0ebc1a4c1141673e2794234d86addf4e";

    #[test]
    fn prefix_round_trips_through_str() {
        for p in Prefix::ALL {
            assert_eq!(p.as_str().parse::<Prefix>().unwrap(), p);
        }
        assert_eq!("NPUB".parse::<Prefix>().unwrap(), Prefix::Npub);
        assert_eq!(
            "naddr".parse::<Prefix>(),
            Err(Nip19Error::UnknownPrefix("naddr".into()))
        );
        assert!(Prefix::Nevent.is_tlv());
        assert!(!Prefix::Note.is_tlv());
    }

    #[test]
    fn display_and_from_str() {
        let ptr: EntityPointer = NPUB.parse().unwrap();
        assert_eq!(ptr, EntityPointer::PublicKey(PK.into()));
        assert_eq!(ptr.to_string(), NPUB);
        assert_eq!(ptr.prefix(), Prefix::Npub);
        assert_eq!(ptr.hex_value(), PK);
        assert!(ptr.relays().is_empty());
    }

    #[test]
    fn display_of_unencodable_pointer_does_not_panic() {
        let ptr = EntityPointer::Note("not hex".into());
        assert!(ptr.to_string().starts_with("<invalid note:"));
    }

    #[test]
    fn pointer_accessors() {
        let ptr: EntityPointer =
            EventPointer::new(PK, vec!["wss://relay.example.com".into()]).into();
        assert_eq!(ptr.prefix(), Prefix::Nevent);
        assert_eq!(ptr.hex_value(), PK);
        assert_eq!(ptr.relays(), ["wss://relay.example.com".to_string()]);
    }
}
