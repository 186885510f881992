// Bech32 entity codec benchmarks.
//
// Raw 32-byte entities against TLV pointers with a growing number of relay
// hints, in both directions.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use nostr_protocol::config::CodecConfig;
use nostr_protocol::nip19::{self, ProfilePointer};

const PUBKEY: &str = "7e7e9c42a91bfef19fa929e5fda1b72e0ebc1a4c1141673e2794234d86addf4e";

fn bench_raw(c: &mut Criterion) {
    let npub = nip19::encode_public_key(PUBKEY).unwrap();

    c.bench_function("nip19/encode_npub", |b| {
        b.iter(|| nip19::encode_public_key(PUBKEY).unwrap());
    });
    c.bench_function("nip19/decode_npub", |b| {
        b.iter(|| nip19::decode(&npub).unwrap());
    });
}

fn bench_profile(c: &mut Criterion) {
    let mut group = c.benchmark_group("nip19/nprofile");
    let strict = CodecConfig::strict();

    for relays in [0, 1, 4, 8] {
        let pointer = ProfilePointer::new(
            PUBKEY,
            (0..relays)
                .map(|i| format!("wss://relay-{i}.example.com"))
                .collect(),
        );
        let encoded = nip19::encode_profile(&pointer).unwrap();

        group.bench_with_input(BenchmarkId::new("encode", relays), &pointer, |b, p| {
            b.iter(|| nip19::encode_profile(p).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("decode", relays), &encoded, |b, s| {
            b.iter(|| nip19::decode(s).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("decode_strict", relays), &encoded, |b, s| {
            b.iter(|| nip19::decode_with(s, &strict).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_raw, bench_profile);
criterion_main!(benches);
