//! Terminal walkthrough of the event lifecycle.
//!
//! Creates an identity, signs a note, ships it through JSON, verifies it on
//! the other side, and shares it as bech32 entity strings. Set
//! `LOG_FORMAT=json` and `RUST_LOG=nostr_protocol=debug` to watch the
//! library's own tracing output on stderr.
//!
//! Run with:
//!   cargo run --example demo

use std::time::Instant;

use anyhow::Result;

use nostr_protocol::crypto::keys::NostrKeypair;
use nostr_protocol::event::{verify_event, Event, EventBuilder, Tag};
use nostr_protocol::logging::{init_logging, LogFormat};
use nostr_protocol::nip19::{self, EntityPointer, EventPointer, ProfilePointer};

// ---------------------------------------------------------------------------
// ANSI color constants
// ---------------------------------------------------------------------------

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const CYAN: &str = "\x1b[36m";
const MAGENTA: &str = "\x1b[35m";

const RELAY: &str = "wss://relay.example.com";

fn step(n: u32, title: &str) {
    println!();
    println!("{BOLD}{CYAN}[{n}]{RESET} {BOLD}{title}{RESET}");
}

fn field(label: &str, value: &str) {
    println!("    {DIM}{label:<10}{RESET} {value}");
}

fn verdict(ok: bool) -> String {
    if ok {
        format!("{GREEN}valid{RESET}")
    } else {
        format!("{RED}invalid{RESET}")
    }
}

fn main() -> Result<()> {
    let format = LogFormat::from_str_lossy(&std::env::var("LOG_FORMAT").unwrap_or_default());
    init_logging("warn", format)?;

    println!("{BOLD}{MAGENTA}Nostr protocol core{RESET} {DIM}secp256k1 + BIP-340 + bech32{RESET}");

    step(1, "Identity");
    let keys = NostrKeypair::generate();
    field("pubkey", &keys.public_key_hex());
    field("npub", &nip19::encode_public_key(&keys.public_key_hex())?);
    field("nsec", &format!("{DIM}(withheld){RESET}"));

    step(2, "Sign a text note");
    let started = Instant::now();
    let event = EventBuilder::new(1)
        .content("hello from the demo")
        .tag(Tag::new(["t", "demo"]))
        .sign_with(&keys)?;
    field("id", event.id.as_deref().unwrap_or_default());
    field("sig", event.sig.as_deref().unwrap_or_default());
    field("took", &format!("{:?}", started.elapsed()));

    step(3, "Transport as JSON");
    let json = serde_json::to_string_pretty(&event)?;
    for line in json.lines() {
        println!("    {DIM}{line}{RESET}");
    }
    let received: Event = serde_json::from_str(&json)?;
    field("verify", &verdict(verify_event(&received)?));

    step(4, "Tamper with it");
    let mut forged = received.clone();
    forged.content = "hello from someone else".into();
    field("verify", &verdict(verify_event(&forged)?));
    if let Err(e) = forged.validate() {
        field("validate", &format!("{RED}{e}{RESET}"));
    }

    step(5, "Share references");
    let id = received.id.clone().unwrap_or_default();
    let nevent = nip19::encode_event(&EventPointer::new(id, vec![RELAY.into()]))?;
    let nprofile = EntityPointer::from(ProfilePointer::new(keys.public_key_hex(), vec![RELAY.into()]));
    field("nevent", &nevent);
    field("nprofile", &nprofile.to_string());

    match nevent.parse::<EntityPointer>()? {
        EntityPointer::Event(pointer) => {
            field("resolves", &format!("{} via {:?}", pointer.id, pointer.relays));
        }
        other => field("resolves", &format!("unexpected {}", other.prefix())),
    }

    println!();
    Ok(())
}
