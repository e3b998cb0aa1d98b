//! Insert, lookup and pruning removal over random lowercase keys.

use alpha_trie::Trie;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn generate_keys(n: usize) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..n)
        .map(|_| {
            let len = rng.gen_range(1..=12);
            (0..len).map(|_| rng.gen_range(b'a'..=b'z') as char).collect()
        })
        .collect()
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");

    for size in [1_000, 10_000, 100_000].iter() {
        let keys = generate_keys(*size);

        group.bench_with_input(BenchmarkId::new("Trie", size), size, |b, _| {
            b.iter(|| {
                let mut trie = Trie::new();
                for key in &keys {
                    trie.insert(key).unwrap();
                }
                black_box(trie)
            });
        });
    }

    group.finish();
}

fn bench_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup");

    for size in [1_000, 10_000, 100_000].iter() {
        let keys = generate_keys(*size);
        let trie = Trie::from_keys(&keys).unwrap();

        group.bench_with_input(BenchmarkId::new("search", size), size, |b, _| {
            b.iter(|| {
                for key in &keys {
                    black_box(trie.search(key));
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("prefix_search", size), size, |b, _| {
            b.iter(|| {
                for key in &keys {
                    black_box(trie.prefix_search(&key[..key.len() / 2]));
                }
            });
        });
    }

    group.finish();
}

fn bench_remove(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove");

    for size in [1_000, 10_000].iter() {
        let keys = generate_keys(*size);
        let trie = Trie::from_keys(&keys).unwrap();

        group.bench_with_input(BenchmarkId::new("remove_all", size), size, |b, _| {
            b.iter(|| {
                let mut trie = trie.clone();
                for key in &keys {
                    trie.remove(key);
                }
                black_box(trie)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_insert, bench_lookup, bench_remove);
criterion_main!(benches);
