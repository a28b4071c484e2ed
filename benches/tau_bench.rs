//! Rank-correlation benchmarks: pairwise vs inversion-count tau.
//!
//! Run with:
//!   cargo bench

#![allow(clippy::cast_precision_loss)]

use std::time::Duration;

use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use rankcorr::{count_inversions, kendall_tau_knight, kendall_tau_pairwise};

fn shuffled(n: usize, seed: u64) -> Vec<f64> {
    let mut values: Vec<f64> = (0..n).map(|i| i as f64).collect();
    let mut state = seed.wrapping_add(0x9E37_79B9_7F4A_7C15);
    for i in (1..values.len()).rev() {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        let j = usize::try_from(state % u64::try_from(i + 1).unwrap_or(u64::MAX)).unwrap_or(0);
        values.swap(i, j);
    }
    values
}

// --- Pairwise vs knight across sizes ---

fn bench_tau_paths(c: &mut Criterion) {
    let mut group = c.benchmark_group("kendall_tau");
    group.measurement_time(Duration::from_secs(5));

    for &n in &[16_usize, 64, 256, 1024] {
        let x = shuffled(n, 1);
        let y = shuffled(n, 2);

        group.throughput(criterion::Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::new("pairwise", n), &n, |b, _| {
            b.iter(|| kendall_tau_pairwise(black_box(&x), black_box(&y)).expect("tau"));
        });
        group.bench_with_input(BenchmarkId::new("knight", n), &n, |b, _| {
            b.iter(|| kendall_tau_knight(black_box(&x), black_box(&y)).expect("tau"));
        });
    }

    group.finish();
}

// --- Knight path at sizes where the pairwise sweep is impractical ---

fn bench_knight_large(c: &mut Criterion) {
    let mut group = c.benchmark_group("knight_large");
    group.measurement_time(Duration::from_secs(5));

    for &n in &[4_096_usize, 16_384, 65_536] {
        let x = shuffled(n, 3);
        let y = shuffled(n, 4);

        group.throughput(criterion::Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| kendall_tau_knight(black_box(&x), black_box(&y)).expect("tau"));
        });
    }

    group.finish();
}

// --- Input orderings (inversion-heavy vs inversion-free) ---

fn bench_knight_orderings(c: &mut Criterion) {
    let n = 4_096_usize;
    let x: Vec<f64> = (0..n).map(|i| i as f64).collect();
    let sorted: Vec<f64> = (0..n).map(|i| i as f64).collect();
    let reversed: Vec<f64> = (0..n).rev().map(|i| i as f64).collect();
    let mixed = shuffled(n, 5);

    let mut group = c.benchmark_group("knight_orderings");
    for (label, y) in [("sorted", &sorted), ("reversed", &reversed), ("shuffled", &mixed)] {
        group.bench_with_input(BenchmarkId::from_parameter(label), y, |b, y| {
            b.iter(|| kendall_tau_knight(black_box(&x), black_box(y)).expect("tau"));
        });
    }
    group.finish();
}

// --- Inversion primitive in isolation ---

fn bench_count_inversions(c: &mut Criterion) {
    let mut group = c.benchmark_group("count_inversions");

    for &n in &[1_024_usize, 16_384] {
        let values: Vec<f64> = (0..n).rev().map(|i| i as f64).collect();

        group.throughput(criterion::Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &values, |b, values| {
            // The counter sorts in place; hand each iteration a fresh copy.
            b.iter_batched(
                || values.clone(),
                |mut working| black_box(count_inversions(&mut working)),
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_tau_paths,
    bench_knight_large,
    bench_knight_orderings,
    bench_count_inversions,
);

criterion_main!(benches);
