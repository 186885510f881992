//! Property-based tests for signing and the bech32 entity codec.

use proptest::prelude::*;

use nostr_protocol::crypto::keys::NostrKeypair;
use nostr_protocol::event::{sign_event_with_keypair, verify_event, Event, Tag};
use nostr_protocol::nip19::{self, EntityPointer, Nip19Error, ProfilePointer};

/// Any 32 bytes that form a valid secp256k1 secret key.
fn keypair() -> impl Strategy<Value = NostrKeypair> {
    prop::array::uniform32(any::<u8>())
        .prop_filter_map("not a valid scalar", |bytes| {
            NostrKeypair::from_secret_bytes(&bytes).ok()
        })
}

fn tag() -> impl Strategy<Value = Tag> {
    prop::collection::vec(".{0,12}", 0..4).prop_map(Tag)
}

fn relay() -> impl Strategy<Value = String> {
    "wss://[a-z0-9]{1,20}\\.[a-z]{2,4}"
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Sign then verify succeeds for any key and any content.
    #[test]
    fn signed_events_verify(
        keys in keypair(),
        created_at in any::<i64>(),
        kind in any::<u32>(),
        content in any::<String>(),
        tags in prop::collection::vec(tag(), 0..4),
    ) {
        let mut event = Event::new(keys.public_key_hex(), created_at, kind, content);
        event.tags = tags;
        sign_event_with_keypair(&mut event, &keys).unwrap();

        prop_assert!(verify_event(&event).unwrap());
        prop_assert_eq!(event.compute_id().unwrap(), event.id.clone().unwrap());
    }

    /// Changing the content after signing turns verification false, never an error.
    #[test]
    fn content_mutation_breaks_signature(
        keys in keypair(),
        content in any::<String>(),
        suffix in ".{1,8}",
    ) {
        let mut event = Event::new(keys.public_key_hex(), 1_700_000_000, 1, content);
        sign_event_with_keypair(&mut event, &keys).unwrap();
        event.content.push_str(&suffix);
        prop_assert!(!verify_event(&event).unwrap());
    }

    /// Re-attributing a signed event to another valid key is false, not an error.
    #[test]
    fn author_swap_breaks_signature(author in keypair(), other in keypair()) {
        prop_assume!(author != other);
        let mut event = Event::new(author.public_key_hex(), 1_700_000_000, 1, "hi");
        sign_event_with_keypair(&mut event, &author).unwrap();
        event.pubkey = other.public_key_hex();
        prop_assert!(!verify_event(&event).unwrap());
    }

    /// Raw values survive encode/decode under every raw prefix.
    #[test]
    fn raw_values_round_trip(bytes in prop::array::uniform32(any::<u8>())) {
        let hex = hex::encode(bytes);
        prop_assert_eq!(
            nip19::decode(&nip19::encode_public_key(&hex).unwrap()).unwrap(),
            EntityPointer::PublicKey(hex.clone())
        );
        prop_assert_eq!(
            nip19::decode(&nip19::encode_private_key(&hex).unwrap()).unwrap(),
            EntityPointer::SecretKey(hex.clone())
        );
        prop_assert_eq!(
            nip19::decode(&nip19::encode_note(&hex).unwrap()).unwrap(),
            EntityPointer::Note(hex)
        );
    }

    /// Profiles keep their key and their relay order.
    #[test]
    fn profiles_round_trip(
        bytes in prop::array::uniform32(any::<u8>()),
        relays in prop::collection::vec(relay(), 0..4),
    ) {
        let pointer = ProfilePointer::new(hex::encode(bytes), relays);
        let encoded = nip19::encode_profile(&pointer).unwrap();
        prop_assert_eq!(nip19::decode(&encoded).unwrap(), EntityPointer::Profile(pointer));
    }

    /// Replacing any one checksum character is always caught.
    #[test]
    fn checksum_substitution_is_detected(
        bytes in prop::array::uniform32(any::<u8>()),
        position in 0usize..6,
        replacement in prop::sample::select(
            "qpzry9x8gf2tvdw0s3jn54khce6mua7l".chars().collect::<Vec<_>>()
        ),
    ) {
        let encoded = nip19::encode_note(&hex::encode(bytes)).unwrap();
        let index = encoded.len() - 6 + position;
        let original = encoded.as_bytes()[index] as char;
        prop_assume!(original != replacement);

        let mut flipped = encoded.clone();
        flipped.replace_range(index..index + 1, &replacement.to_string());
        prop_assert!(matches!(nip19::decode(&flipped), Err(Nip19Error::Checksum(_))));
    }
}
