//! Shrink benchmark.
//!
//! Measures the reallocation cost of `shrink` on sparse vectors against the
//! standard library's `shrink_to`. Vectors are rebuilt in setup so every
//! iteration starts from the same over-allocated state.

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use slicekit::slice::shrink;
use std::hint::black_box;

const CAPACITIES: [usize; 4] = [128, 1024, 4096, 65536];

fn sparse_vec(capacity: usize) -> Vec<u64> {
    let mut vector = Vec::with_capacity(capacity);
    vector.extend(0..(capacity / 8) as u64);
    vector
}

fn benchmark_shrink(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("shrink");

    for capacity in CAPACITIES {
        group.bench_with_input(
            BenchmarkId::new("shrink", capacity),
            &capacity,
            |bencher, &capacity| {
                bencher.iter_batched(
                    || sparse_vec(capacity),
                    |vector| black_box(shrink(black_box(vector))),
                    BatchSize::SmallInput,
                );
            },
        );

        group.bench_with_input(
            BenchmarkId::new("std_shrink_to", capacity),
            &capacity,
            |bencher, &capacity| {
                bencher.iter_batched(
                    || sparse_vec(capacity),
                    |mut vector| {
                        vector.shrink_to(capacity / 2);
                        black_box(vector)
                    },
                    BatchSize::SmallInput,
                );
            },
        );
    }

    group.finish();
}

criterion_group!(benches, benchmark_shrink);

criterion_main!(benches);
