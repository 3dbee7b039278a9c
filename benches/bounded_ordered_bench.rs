//! BoundedOrderedCollection insert/remove benchmark.
//!
//! Measures the binary-search-plus-shift cost of `insert` and `remove`
//! across collection sizes, with `min`/`max` as an O(1) baseline.
//!
//! Insertion values are pre-generated in a deterministic shuffled order so
//! every iteration exercises shifts at varied positions rather than the
//! append-only fast path.

use bounded_collections::BoundedOrderedCollection;
use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

const SIZES: [usize; 3] = [100, 1_000, 10_000];

/// Pre-generates `size` values in a deterministic non-sorted order.
fn generate_shuffled_values(size: usize) -> Vec<u64> {
    // Multiplying by a prime coprime to `size` permutes 0..size
    let prime = 7_919u64;
    let size = size as u64;
    (0..size).map(|index| (index * prime) % size).collect()
}

fn build_collection(values: &[u64]) -> BoundedOrderedCollection<u64> {
    let mut collection = BoundedOrderedCollection::new(values.len());
    for &value in values {
        collection.insert(value).unwrap();
    }
    collection
}

fn benchmark_insert(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("bounded_ordered_insert");

    for size in SIZES {
        let values = generate_shuffled_values(size);
        group.bench_with_input(BenchmarkId::new("insert", size), &size, |bencher, &size| {
            bencher.iter_batched(
                || values.clone(),
                |values| {
                    let mut collection = BoundedOrderedCollection::new(size);
                    for value in values {
                        collection.insert(black_box(value)).unwrap();
                    }
                    black_box(collection)
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn benchmark_remove(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("bounded_ordered_remove");

    for size in SIZES {
        let values = generate_shuffled_values(size);
        group.bench_with_input(BenchmarkId::new("remove", size), &size, |bencher, _| {
            bencher.iter_batched(
                || (build_collection(&values), values.clone()),
                |(mut collection, order)| {
                    for value in order {
                        collection.remove(black_box(&value)).unwrap();
                    }
                    black_box(collection)
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn benchmark_min_max(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("bounded_ordered_min_max");

    for size in SIZES {
        let collection = build_collection(&generate_shuffled_values(size));
        group.bench_with_input(
            BenchmarkId::new("min_max", size),
            &collection,
            |bencher, collection| {
                bencher.iter(|| {
                    let min = black_box(collection.min().unwrap());
                    let max = black_box(collection.max().unwrap());
                    (min, max)
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_insert,
    benchmark_remove,
    benchmark_min_max
);
criterion_main!(benches);
