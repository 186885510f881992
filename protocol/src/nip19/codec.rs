//! Bech32 entity encoding and decoding.
//!
//! ```text
//! encode:  value(s) -> payload bytes -> 5-bit groups -> hrp + "1" + data + checksum
//! decode:  checksum + alphabet check -> padding check -> 8-bit bytes -> dispatch on prefix
//! ```
//!
//! Raw entities (`npub`, `nsec`, `note`) carry exactly 32 bytes. Pointer
//! entities (`nprofile`, `nevent`) carry a TLV stream: one type-0 entry with
//! the key or id, then any number of type-1 relay entries.

use bech32::primitives::decode::{
    CharError, CheckedHrpstring, CheckedHrpstringError, UncheckedHrpstringError,
};
use bech32::{Bech32, Hrp};
use tracing::{debug, trace, warn};

use super::error::Nip19Error;
use super::pointer::{EntityPointer, EventPointer, Prefix, ProfilePointer};
use super::tlv::{write_entry, TlvReader};
use crate::config::{
    CodecConfig, DecodePolicy, KEY_LENGTH, TLV_DEFAULT, TLV_HEADER_LENGTH, TLV_RELAY,
};
use crate::encoding;

// ---------------------------------------------------------------------------
// Encoding
// ---------------------------------------------------------------------------

/// Encode a hex public key as `npub`.
///
/// ```
/// use nostr_protocol::nip19::encode_public_key;
///
/// let npub = encode_public_key(
///     "7e7e9c42a91bfef19fa929e5fda1b72e0ebc1a4c1141673e2794234d86addf4e",
/// )
/// .unwrap();
/// assert_eq!(npub, "npub10elfcs4fr0l0r8af98jlmgdh9c8tcxjvz9qkw038js35mp4dma8qzvjptg");
/// ```
pub fn encode_public_key(public_key_hex: &str) -> Result<String, Nip19Error> {
    encode_raw(Prefix::Npub, public_key_hex)
}

/// Encode a hex secret key as `nsec`.
pub fn encode_private_key(secret_key_hex: &str) -> Result<String, Nip19Error> {
    encode_raw(Prefix::Nsec, secret_key_hex)
}

/// Encode a hex event id as `note`.
pub fn encode_note(event_id_hex: &str) -> Result<String, Nip19Error> {
    encode_raw(Prefix::Note, event_id_hex)
}

/// Encode a 32-byte hex value under one of the raw prefixes.
///
/// Fails with [`Nip19Error::Encode`] for `nprofile`/`nevent`, which need
/// a pointer, and with [`Nip19Error::Encoding`] unless `value_hex` is
/// exactly 32 bytes of hex.
pub fn encode_raw(prefix: Prefix, value_hex: &str) -> Result<String, Nip19Error> {
    if prefix.is_tlv() {
        return Err(Nip19Error::Encode(format!("{prefix} needs a pointer, not a raw value")));
    }
    let value = encoding::decode_hex_32(value_hex)?;
    encode_payload(prefix, &value)
}

/// Encode a profile pointer as `nprofile`. Relays keep their order.
pub fn encode_profile(pointer: &ProfilePointer) -> Result<String, Nip19Error> {
    encode_tlv(Prefix::Nprofile, &pointer.public_key, &pointer.relays)
}

/// Encode an event pointer as `nevent`. Relays keep their order.
pub fn encode_event(pointer: &EventPointer) -> Result<String, Nip19Error> {
    encode_tlv(Prefix::Nevent, &pointer.id, &pointer.relays)
}

fn encode_tlv(prefix: Prefix, primary_hex: &str, relays: &[String]) -> Result<String, Nip19Error> {
    let primary = encoding::decode_hex_32(primary_hex)?;
    let relay_bytes: usize = relays.iter().map(|r| TLV_HEADER_LENGTH + r.len()).sum();
    let mut payload = Vec::with_capacity(TLV_HEADER_LENGTH + KEY_LENGTH + relay_bytes);
    write_entry(&mut payload, TLV_DEFAULT, &primary)?;
    for relay in relays {
        write_entry(&mut payload, TLV_RELAY, relay.as_bytes())?;
    }
    encode_payload(prefix, &payload)
}

fn encode_payload(prefix: Prefix, payload: &[u8]) -> Result<String, Nip19Error> {
    let hrp = Hrp::parse(prefix.as_str()).map_err(|e| Nip19Error::Encode(e.to_string()))?;
    let encoded =
        bech32::encode::<Bech32>(hrp, payload).map_err(|e| Nip19Error::Encode(e.to_string()))?;
    debug!(prefix = %prefix, payload_len = payload.len(), "encoded entity");
    Ok(encoded)
}

// ---------------------------------------------------------------------------
// Decoding
// ---------------------------------------------------------------------------

/// Decode any recognized entity string with the default (lenient) policy.
///
/// ```
/// use nostr_protocol::nip19::{decode, EntityPointer};
///
/// let ptr = decode("note1a6hkqxwn2wv43q3wvgl6srl223vsqwndn0al0yq5kq0anwc3634sd2mrmx").unwrap();
/// assert_eq!(
///     ptr,
///     EntityPointer::Note("eeaf6019d3539958822e623fa80fea5459003a6d9bfbf79014b01fd9bb11d46b".into())
/// );
/// ```
pub fn decode(input: &str) -> Result<EntityPointer, Nip19Error> {
    decode_with(input, &CodecConfig::default())
}

/// Decode with an explicit policy for non-minimal payloads.
pub fn decode_with(input: &str, config: &CodecConfig) -> Result<EntityPointer, Nip19Error> {
    let (hrp, data) = decode_bech32(input)?;
    let prefix: Prefix = hrp.parse()?;
    let policy = config.policy;

    let pointer = match prefix {
        Prefix::Npub => EntityPointer::PublicKey(decode_raw(prefix, &data, policy)?),
        Prefix::Nsec => EntityPointer::SecretKey(decode_raw(prefix, &data, policy)?),
        Prefix::Note => EntityPointer::Note(decode_raw(prefix, &data, policy)?),
        Prefix::Nprofile => {
            let (public_key, relays) = decode_tlv(prefix, &data, policy)?;
            EntityPointer::Profile(ProfilePointer { public_key, relays })
        }
        Prefix::Nevent => {
            let (id, relays) = decode_tlv(prefix, &data, policy)?;
            EntityPointer::Event(EventPointer { id, relays })
        }
    };

    debug!(prefix = %prefix, relays = pointer.relays().len(), "decoded entity");
    Ok(pointer)
}

/// Checksum-verify and unpack a bech32 string into (lowercase hrp, bytes).
fn decode_bech32(input: &str) -> Result<(String, Vec<u8>), Nip19Error> {
    let checked = CheckedHrpstring::new::<Bech32>(input).map_err(|e| match e {
        CheckedHrpstringError::Parse(UncheckedHrpstringError::Char(CharError::InvalidChar(c))) => {
            Nip19Error::InvalidCharacter(c)
        }
        CheckedHrpstringError::Checksum(err) => Nip19Error::Checksum(err.to_string()),
        other => Nip19Error::Malformed(other.to_string()),
    })?;

    checked
        .validate_segwit_padding()
        .map_err(|e| Nip19Error::BitConversion(e.to_string()))?;

    let data: Vec<u8> = checked.byte_iter().collect();
    Ok((checked.hrp().to_string().to_ascii_lowercase(), data))
}

fn decode_raw(prefix: Prefix, data: &[u8], policy: DecodePolicy) -> Result<String, Nip19Error> {
    if data.len() < KEY_LENGTH {
        return Err(Nip19Error::PayloadTooShort {
            prefix: prefix.to_string(),
            expected: KEY_LENGTH,
            got: data.len(),
        });
    }
    if data.len() > KEY_LENGTH {
        if policy.is_strict() {
            return Err(Nip19Error::PayloadLength {
                prefix: prefix.to_string(),
                expected: KEY_LENGTH,
                got: data.len(),
            });
        }
        warn!(
            prefix = %prefix,
            surplus = data.len() - KEY_LENGTH,
            "discarding surplus bytes after 32-byte value"
        );
    }
    Ok(encoding::to_hex(&data[..KEY_LENGTH]))
}

/// Walk a TLV payload and return (primary value hex, relays).
fn decode_tlv(
    prefix: Prefix,
    data: &[u8],
    policy: DecodePolicy,
) -> Result<(String, Vec<String>), Nip19Error> {
    let mut primary: Option<String> = None;
    let mut relays = Vec::new();

    for entry in TlvReader::new(data) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if policy.is_strict() => return Err(err),
            Err(err) => {
                warn!(prefix = %prefix, error = %err, "ignoring truncated TLV tail");
                break;
            }
        };
        trace!(prefix = %prefix, kind = entry.kind, len = entry.value.len(), "TLV entry");

        match entry.kind {
            TLV_DEFAULT => {
                if entry.value.len() != KEY_LENGTH {
                    return Err(Nip19Error::PayloadLength {
                        prefix: prefix.to_string(),
                        expected: KEY_LENGTH,
                        got: entry.value.len(),
                    });
                }
                if primary.is_some() {
                    if policy.is_strict() {
                        return Err(Nip19Error::DuplicatePrimaryValue {
                            prefix: prefix.to_string(),
                        });
                    }
                    warn!(prefix = %prefix, "later primary value overrides an earlier one");
                }
                primary = Some(encoding::to_hex(entry.value));
            }
            TLV_RELAY => relays.push(decode_relay(entry.value, policy)?),
            other => trace!(prefix = %prefix, kind = other, "skipping unknown TLV type"),
        }
    }

    let primary = primary.ok_or_else(|| Nip19Error::MissingPrimaryValue {
        prefix: prefix.to_string(),
    })?;
    Ok((primary, relays))
}

fn decode_relay(value: &[u8], policy: DecodePolicy) -> Result<String, Nip19Error> {
    match std::str::from_utf8(value) {
        Ok(relay) => Ok(relay.to_string()),
        Err(e) if policy.is_strict() => Err(Nip19Error::InvalidUtf8(e.to_string())),
        Err(e) => {
            warn!(error = %e, "relay is not valid UTF-8, replacing invalid sequences");
            Ok(String::from_utf8_lossy(value).into_owned())
        }
    }
}
