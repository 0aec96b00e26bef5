//! Benchmark for k-way merging.
//!
//! Compares iterforge's stable `merge` against the collect-and-sort
//! baseline for varying source counts and sizes.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use iterforge::adaptors::merge;
use std::hint::black_box;

fn sorted_sources(count: usize, length: usize) -> Vec<Vec<i64>> {
    (0..count)
        .map(|offset| {
            (0..length)
                .map(|index| (index * count + offset) as i64)
                .collect()
        })
        .collect()
}

// =============================================================================
// Two-way merge Benchmark
// =============================================================================

fn benchmark_two_way(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("merge_two_way");

    for size in [100, 1000, 10000] {
        let sources = sorted_sources(2, size);

        group.bench_with_input(BenchmarkId::new("merge", size), &sources, |bencher, sources| {
            bencher.iter(|| {
                let merged: Vec<i64> = merge(
                    sources.iter().map(|source| source.iter().copied()),
                )
                .collect();
                black_box(merged)
            });
        });

        group.bench_with_input(
            BenchmarkId::new("concat_sort", size),
            &sources,
            |bencher, sources| {
                bencher.iter(|| {
                    let mut merged: Vec<i64> = sources.concat();
                    merged.sort_unstable();
                    black_box(merged)
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// Source-count scaling Benchmark
// =============================================================================

fn benchmark_source_count(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("merge_source_count");

    for count in [2, 8, 32] {
        let sources = sorted_sources(count, 1000);

        group.bench_with_input(
            BenchmarkId::new("merge", count),
            &sources,
            |bencher, sources| {
                bencher.iter(|| {
                    let merged: Vec<i64> = merge(
                        sources.iter().map(|source| source.iter().copied()),
                    )
                    .collect();
                    black_box(merged)
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, benchmark_two_way, benchmark_source_count);
criterion_main!(benches);
