//! Throughput of the normalization pipeline across sizes and policies

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use range_normalizer::{
    normalize, normalize_partitions, GapPolicy, Interval, NormalizeOptions, OverlapPolicy,
};
use std::hint::black_box;

/// Pseudo-random overlapping intervals with some duplicates and empties
fn generate_intervals(count: usize) -> Vec<Interval<u64>> {
    (0..count as u64)
        .map(|i| {
            let start = (i * 2_654_435_761) % (count as u64 * 4);
            let width = (i * 40_503) % 64;
            Interval::new(start, start + width)
        })
        .collect()
}

fn benchmark_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize_sizes");
    let options = NormalizeOptions::new();

    for size in [1_000, 10_000, 100_000].iter() {
        let intervals = generate_intervals(*size);

        group.bench_with_input(BenchmarkId::from_parameter(size), &intervals, |b, intervals| {
            b.iter_batched(
                || intervals.clone(),
                |mut input| {
                    let result = normalize(input.iter_mut(), &options);
                    black_box(result.len())
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

fn benchmark_policies(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize_policies");
    let intervals = generate_intervals(50_000);

    let cases = [
        ("none_left", GapPolicy::None, OverlapPolicy::KeepLeftChunk),
        ("none_right", GapPolicy::None, OverlapPolicy::KeepRightChunk),
        ("expand_right", GapPolicy::ExpandRight, OverlapPolicy::KeepLeftChunk),
        ("expand_left", GapPolicy::ExpandLeft, OverlapPolicy::KeepRightChunk),
    ];

    for (name, gap, overlap) in cases {
        let options = NormalizeOptions::new()
            .with_gap_policy(gap)
            .with_overlap_policy(overlap);

        group.bench_with_input(BenchmarkId::new("policy", name), &intervals, |b, intervals| {
            b.iter_batched(
                || intervals.clone(),
                |mut input| black_box(normalize(input.iter_mut(), &options).len()),
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

fn benchmark_window_prefilter(c: &mut Criterion) {
    let mut group = c.benchmark_group("window_prefilter");
    let intervals = generate_intervals(100_000);

    for prefilter in [true, false] {
        let mut options = NormalizeOptions::new().with_clamp(10_000, 20_000);
        if !prefilter {
            options = options.without_window_prefilter();
        }

        group.bench_with_input(
            BenchmarkId::from_parameter(if prefilter { "on" } else { "off" }),
            &intervals,
            |b, intervals| {
                b.iter_batched(
                    || intervals.clone(),
                    |mut input| black_box(normalize(input.iter_mut(), &options).len()),
                    BatchSize::LargeInput,
                );
            },
        );
    }

    group.finish();
}

fn benchmark_partitions(c: &mut Criterion) {
    let mut group = c.benchmark_group("partitions");
    let options = NormalizeOptions::new();

    for parts in [1, 4, 16].iter() {
        let intervals = generate_intervals(200_000);

        group.bench_with_input(BenchmarkId::from_parameter(parts), &intervals, |b, intervals| {
            b.iter_batched(
                || intervals.clone(),
                |mut input| {
                    let chunk = input.len().div_ceil(*parts);
                    let partitions: Vec<Vec<&mut Interval<u64>>> = input
                        .chunks_mut(chunk)
                        .map(|part| part.iter_mut().collect())
                        .collect();
                    black_box(normalize_partitions(partitions, &options).len())
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_sizes,
    benchmark_policies,
    benchmark_window_prefilter,
    benchmark_partitions
);
criterion_main!(benches);
