//! Benchmark for the lazy right folds.
//!
//! Compares `fold_right` against `Iterator::rfold` on folds that force every
//! step, and measures how cheaply a short-circuiting fold stops.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use fnkit::control::{Thunk, lazy};
use fnkit::fold::{fold_right, fold_right_with};
use fnkit::operator::{lazy_and, lazy_cons};
use std::hint::black_box;
use std::iter;

// =============================================================================
// Forcing Folds
// =============================================================================

fn benchmark_forcing_fold(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("forcing_fold");

    for size in [10, 100, 1000] {
        let values: Vec<u64> = (0..size).collect();

        group.bench_with_input(BenchmarkId::new("fold_right", size), &values, |bencher, values| {
            bencher.iter(|| {
                let sum = fold_right(lazy(|left: u64, right: u64| left + right), values.iter().copied(), Some(Thunk::ready(0)));
                black_box(sum)
            });
        });

        // Baseline
        group.bench_with_input(BenchmarkId::new("rfold", size), &values, |bencher, values| {
            bencher.iter(|| black_box(values.iter().rfold(0, |accumulator, value| accumulator + value)));
        });
    }

    group.finish();
}

fn benchmark_list_rebuild(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("list_rebuild");

    for size in [10, 100, 1000] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |bencher, &size| {
            bencher.iter(|| black_box(fold_right_with(lazy_cons, 0..size, Vec::new)));
        });
    }

    group.finish();
}

// =============================================================================
// Short-circuiting Folds
// =============================================================================

fn benchmark_short_circuit(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("short_circuit");

    for position in [1, 10, 100] {
        group.bench_with_input(BenchmarkId::new("lazy_and", position), &position, |bencher, &position| {
            bencher.iter(|| {
                let values = iter::repeat_n(true, position).chain(iter::once(false)).chain(iter::repeat(true));
                black_box(fold_right(lazy_and, values, None))
            });
        });
    }

    group.finish();
}

// =============================================================================
// Criterion Group and Main
// =============================================================================

criterion_group!(
    benches,
    benchmark_forcing_fold,
    benchmark_list_rebuild,
    benchmark_short_circuit
);

criterion_main!(benches);
