use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::Rng;

use wordlog::core::config::Config;
use wordlog::core::store::Store;
use wordlog::core::types::RecordId;

/// Helper to build space-separated content from a small vocabulary.
fn random_content(words: usize) -> String {
    let mut rng = rand::thread_rng();
    let vocabulary = ["the", "quick", "brown", "fox", "jumps", "over", "lazy", "dog"];
    (0..words)
        .map(|_| vocabulary[rng.gen_range(0..vocabulary.len())])
        .collect::<Vec<_>>()
        .join(" ")
}

fn bench_upsert(c: &mut Criterion) {
    c.bench_function("upsert_insert", |b| {
        let mut store = Store::new(Config::with_capacity(100_000));
        let mut id = 0i64;
        b.iter(|| {
            store.upsert(RecordId(id), random_content(20));
            id += 1;
        });
    });

    c.bench_function("upsert_update_same_id", |b| {
        let mut store = Store::new(Config::with_capacity(1024));
        store.upsert(RecordId(1), random_content(20));
        b.iter(|| {
            store.upsert(RecordId(1), random_content(20));
        });
    });
}

fn bench_upsert_at_capacity(c: &mut Criterion) {
    let mut group = c.benchmark_group("upsert_with_eviction");
    for capacity in [16usize, 256, 4096].iter() {
        group.bench_with_input(
            BenchmarkId::from_parameter(capacity),
            capacity,
            |b, &capacity| {
                let mut store = Store::new(Config::with_capacity(capacity));
                let mut id = 0i64;
                // Pre-fill so every insert evicts.
                for _ in 0..capacity {
                    store.upsert(RecordId(id), random_content(20));
                    id += 1;
                }
                b.iter(|| {
                    store.upsert(RecordId(id), random_content(20));
                    id += 1;
                });
            },
        );
    }
    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    for store_size in [100usize, 1_000, 10_000].iter() {
        group.bench_with_input(
            BenchmarkId::from_parameter(store_size),
            store_size,
            |b, &store_size| {
                let mut store = Store::new(Config {
                    capacity: store_size,
                    cache_size: 0,
                });
                for id in 0..store_size as i64 {
                    store.upsert(RecordId(id), random_content(20));
                }
                b.iter(|| {
                    black_box(store.search("fox", 10));
                });
            },
        );
    }
    group.finish();
}

fn bench_cached_search(c: &mut Criterion) {
    c.bench_function("search_cache_hit", |b| {
        let mut store = Store::new(Config::with_capacity(10_000));
        for id in 0..10_000i64 {
            store.upsert(RecordId(id), random_content(20));
        }
        store.search("fox", 10); // warm the cache
        b.iter(|| {
            black_box(store.search("fox", 10));
        });
    });
}

criterion_group!(
    benches,
    bench_upsert,
    bench_upsert_at_capacity,
    bench_search,
    bench_cached_search
);
criterion_main!(benches);
