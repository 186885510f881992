//! End-to-end integration tests for the Nostr protocol core.
//!
//! These exercise the full path a client takes: key material, event
//! construction, signing, JSON transport, verification on the receiving
//! side, and sharing references as bech32 entity strings. Only the public
//! API is used.

use anyhow::Result;

use nostr_protocol::config::CodecConfig;
use nostr_protocol::crypto::keys::{
    private_key_from_mnemonic, public_key_from_private, NostrKeypair,
};
use nostr_protocol::event::{
    sign_event, verify_batch, verify_batch_parallel, verify_event, Event, EventBuilder,
    EventError, Tag,
};
use nostr_protocol::nip19::{self, EntityPointer, EventPointer, Nip19Error, ProfilePointer};

// ---------------------------------------------------------------------------
// Test Helpers
// ---------------------------------------------------------------------------

const SECRET: &str = "67dea2ed018072d675f5415ecfaed7d2597555e202d85b3d65ea4e58d2d92ffa";

fn text_note(keys: &NostrKeypair, content: &str) -> Result<Event> {
    Ok(EventBuilder::new(1)
        .created_at(1_700_000_000)
        .content(content)
        .tag(Tag::new(["t", "integration"]))
        .sign_with(keys)?)
}

// ---------------------------------------------------------------------------
// Lifecycle
// ---------------------------------------------------------------------------

#[test]
fn publish_transport_verify() -> Result<()> {
    let keys = NostrKeypair::generate();
    let event = text_note(&keys, "hello from the e2e suite")?;

    // Over the wire as JSON, with a relay-added extra field.
    let mut wire = serde_json::to_value(&event)?;
    wire["seen_on"] = serde_json::json!("wss://relay.example.com");
    let received: Event = serde_json::from_value(wire)?;

    assert!(verify_event(&received)?);
    received.validate()?;
    assert_eq!(received.get_extra_string("seen_on"), "wss://relay.example.com");
    assert_eq!(received.id, event.id);
    Ok(())
}

#[test]
fn golden_event_from_hex_key() -> Result<()> {
    let pubkey = public_key_from_private(SECRET)?;
    let mut event = Event::new(pubkey, 1_700_000_000, 1, "hello");
    let (id, sig) = sign_event(&mut event, SECRET)?;

    assert_eq!(id, "eeaf6019d3539958822e623fa80fea5459003a6d9bfbf79014b01fd9bb11d46b");
    assert_eq!(
        sig,
        "40045d0127d727726c2be839764058c35f1824bc71b2dafff5fdfc9f897c1430\
         4f92e08d0c6be1db907483e2356f17110e786d693b70fa5fbf819460dea0b398"
    );
    assert!(verify_event(&event)?);
    Ok(())
}

#[test]
fn tampering_in_transit_is_detected() -> Result<()> {
    let keys = NostrKeypair::generate();
    let event = text_note(&keys, "original")?;

    let mut json = serde_json::to_string(&event)?;
    json = json.replace("original", "forged!!");
    let tampered: Event = serde_json::from_str(&json)?;

    assert!(!verify_event(&tampered)?);
    assert!(matches!(
        tampered.validate(),
        Err(EventError::IdMismatch { .. })
    ));
    Ok(())
}

#[test]
fn derived_identity_signs_and_encodes() -> Result<()> {
    let secret = private_key_from_mnemonic(
        "leader monkey parrot ring guide accident before fence cannon height naive bean",
    )?;
    assert_eq!(
        secret,
        "7f7ff03d123792d6ac594bfa67bf6d0c0ab55b6b1fdb6249303fe861f1ccba9a"
    );
    assert_eq!(
        public_key_from_private(&secret)?,
        "17162c921dc4d2518f9a101db33695df1afb56ab82f5ff3e5da6eec3ca5cd917"
    );

    let keys = NostrKeypair::from_hex(&secret)?;
    let event = text_note(&keys, "from a seed")?;
    assert!(verify_event(&event)?);

    let nsec = nip19::encode_private_key(&secret)?;
    assert_eq!(nip19::decode(&nsec)?, EntityPointer::SecretKey(secret));
    Ok(())
}

// ---------------------------------------------------------------------------
// Sharing references
// ---------------------------------------------------------------------------

#[test]
fn share_event_as_nevent_and_resolve() -> Result<()> {
    let keys = NostrKeypair::generate();
    let event = text_note(&keys, "link me")?;
    let id = event.id.clone().unwrap_or_default();

    let pointer = EventPointer::new(id.clone(), vec!["wss://relay.example.com".into()]);
    let nevent = nip19::encode_event(&pointer)?;
    assert!(nevent.starts_with("nevent1"));

    let EntityPointer::Event(resolved) = nevent.parse::<EntityPointer>()? else {
        panic!("expected an event pointer");
    };
    assert_eq!(resolved.id, id);
    assert_eq!(resolved.relays, pointer.relays);
    Ok(())
}

#[test]
fn profile_pointer_display_round_trip() -> Result<()> {
    let keys = NostrKeypair::generate();
    let pointer = EntityPointer::from(ProfilePointer::new(
        keys.public_key_hex(),
        vec!["wss://one.example".into(), "wss://two.example".into()],
    ));
    let text = pointer.to_string();
    assert!(text.starts_with("nprofile1"));
    assert_eq!(text.parse::<EntityPointer>()?, pointer);
    Ok(())
}

#[test]
fn strict_policy_rejects_what_lenient_accepts() {
    let surplus = "note1a6hkqxwn2wv43q3wvgl6srl223vsqwndn0al0yq5kq0anwc3634sz4ks8ce";
    assert!(nip19::decode(surplus).is_ok());
    assert!(matches!(
        nip19::decode_with(surplus, &CodecConfig::strict()),
        Err(Nip19Error::PayloadLength { .. })
    ));
}

// ---------------------------------------------------------------------------
// Batches
// ---------------------------------------------------------------------------

#[test]
fn batch_verification_across_authors() -> Result<()> {
    let mut events = Vec::new();
    for i in 0..24 {
        let keys = NostrKeypair::generate();
        events.push(text_note(&keys, &format!("note #{i}"))?);
    }
    // One tampered, one with a broken key.
    events[5].kind = 7;
    events[17].pubkey.truncate(10);

    let sequential = verify_batch(&events);
    let parallel = verify_batch_parallel(&events, 4);
    assert_eq!(sequential, parallel);

    let valid = parallel.iter().filter(|r| matches!(r, Ok(true))).count();
    assert_eq!(valid, 22);
    assert_eq!(parallel[5], Ok(false));
    assert!(parallel[17].is_err());
    Ok(())
}
