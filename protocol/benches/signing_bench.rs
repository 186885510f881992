// Signing & verification benchmarks for the Nostr protocol core.
//
// Covers keypair generation, digest signing and verification, full event
// signing (canonical serialization + SHA-256 + Schnorr), and batch event
// verification at various sizes, sequential and threaded.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use nostr_protocol::crypto::hash::sha256_array;
use nostr_protocol::crypto::keys::NostrKeypair;
use nostr_protocol::crypto::signatures::{sign, verify};
use nostr_protocol::event::{
    sign_event_with_keypair, verify_batch, verify_batch_parallel, verify_event, EventBuilder, Tag,
};

fn bench_keypair_generation(c: &mut Criterion) {
    c.bench_function("secp256k1/keypair_generate", |b| {
        b.iter(NostrKeypair::generate);
    });
}

fn bench_sign_digest(c: &mut Criterion) {
    let keypair = NostrKeypair::generate();
    let digest = sha256_array(b"gm nostr");

    c.bench_function("schnorr/sign_digest", |b| {
        b.iter(|| sign(&keypair, &digest).unwrap());
    });
}

fn bench_verify_digest(c: &mut Criterion) {
    let keypair = NostrKeypair::generate();
    let digest = sha256_array(b"gm nostr");
    let signature = sign(&keypair, &digest).unwrap();
    let public_key = keypair.public_key();

    c.bench_function("schnorr/verify_digest", |b| {
        b.iter(|| verify(&public_key, &digest, &signature).unwrap());
    });
}

fn bench_sign_event(c: &mut Criterion) {
    let keypair = NostrKeypair::generate();
    let template = EventBuilder::new(1)
        .pubkey(keypair.public_key_hex())
        .created_at(1_700_000_000)
        .content("the quick brown fox jumps over the lazy dog ".repeat(8))
        .tag(Tag::new(["t", "bench"]))
        .tag(Tag::new([
            "e",
            "5c83da77af1dec6d7289834998ad7aafbd9e2191396d75ec3cc27f5a77226f36",
            "wss://relay.example.com",
        ]))
        .build();

    c.bench_function("event/sign", |b| {
        b.iter(|| {
            let mut event = template.clone();
            sign_event_with_keypair(&mut event, &keypair).unwrap();
        });
    });

    let mut signed = template.clone();
    sign_event_with_keypair(&mut signed, &keypair).unwrap();
    c.bench_function("event/verify", |b| {
        b.iter(|| verify_event(&signed).unwrap());
    });
}

fn bench_batch_verify(c: &mut Criterion) {
    let mut group = c.benchmark_group("event/batch_verify");

    for size in [10, 50, 100, 500] {
        let events: Vec<_> = (0..size)
            .map(|i| {
                EventBuilder::new(1)
                    .created_at(1_700_000_000 + i as i64)
                    .content(format!("note-{:06}", i))
                    .sign_with(&NostrKeypair::generate())
                    .unwrap()
            })
            .collect();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("sequential", size), &events, |b, events| {
            b.iter(|| verify_batch(events));
        });
        group.bench_with_input(BenchmarkId::new("parallel_4", size), &events, |b, events| {
            b.iter(|| verify_batch_parallel(events, 4));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_keypair_generation,
    bench_sign_digest,
    bench_verify_digest,
    bench_sign_event,
    bench_batch_verify,
);
criterion_main!(benches);
