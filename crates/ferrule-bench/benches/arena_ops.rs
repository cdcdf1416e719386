//! Criterion micro-benchmarks for arena allocation, store, and view operations.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use ferrule_arena::{Arena, ArenaConfig, GuestHeap};
use ferrule_capabilities::JsonDecoder;

/// Benchmark: 1000 small allocations on a fresh 10 MiB arena.
fn bench_allocate_1000x64(c: &mut Criterion) {
    c.bench_function("allocate_1000x64", |b| {
        b.iter_batched(
            || Arena::new(&ArenaConfig::default()).unwrap(),
            |mut arena| {
                for _ in 0..1000 {
                    black_box(arena.allocate(64).unwrap());
                }
                arena
            },
            BatchSize::LargeInput,
        );
    });
}

/// Benchmark: copy a 64 KiB output into the arena.
fn bench_store_64k(c: &mut Criterion) {
    let bytes = vec![0xabu8; 64 * 1024];
    c.bench_function("store_64k", |b| {
        b.iter_batched(
            || Arena::new(&ArenaConfig::default()).unwrap(),
            |mut arena| {
                black_box(arena.store(&bytes).unwrap());
                arena
            },
            BatchSize::LargeInput,
        );
    });
}

/// Benchmark: bounds-checked view plus UTF-8 validation of a 4 KiB input.
fn bench_view_text_4k(c: &mut Criterion) {
    let text = ferrule_bench::payload_text(4096);
    let mut heap = GuestHeap::new(&ArenaConfig::default()).unwrap();
    let ptr = heap.allocate(text.len() as u32).unwrap();
    heap.host_write(ptr, text.as_bytes()).unwrap();

    c.bench_function("view_text_4k", |b| {
        b.iter(|| {
            let view = heap.view(black_box(ptr), 4096).unwrap();
            black_box(view.as_text().unwrap());
        });
    });
}

/// Benchmark: decode a JSON document straight out of the heap.
fn bench_view_decode_json(c: &mut Criterion) {
    let doc = ferrule_bench::admission_document(32);
    let mut heap = GuestHeap::new(&ArenaConfig::default()).unwrap();
    let ptr = heap.allocate(doc.len() as u32).unwrap();
    heap.host_write(ptr, &doc).unwrap();
    let len = doc.len() as u32;

    c.bench_function("view_decode_json", |b| {
        b.iter(|| {
            let view = heap.view(ptr, len).unwrap();
            black_box(view.decode(&JsonDecoder).unwrap());
        });
    });
}

criterion_group!(
    benches,
    bench_allocate_1000x64,
    bench_store_64k,
    bench_view_text_4k,
    bench_view_decode_json
);
criterion_main!(benches);
