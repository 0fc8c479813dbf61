//! Benchmark for `Slot` iteration.
//!
//! Measures the overhead of driving a loop through a `Slot` compared to
//! `std::iter::successors`.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use fnkit::control::Slot;
use std::hint::black_box;

fn benchmark_iterate_while(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("iterate_while");

    for limit in [10_u64, 100, 1000] {
        group.bench_with_input(BenchmarkId::new("slot", limit), &limit, |bencher, &limit| {
            bencher.iter(|| {
                let mut slot = Slot::with_value(0_u64);
                let sum: u64 = slot.iterate_while(|value| value + 1, |value| *value < limit).sum();
                black_box(sum)
            });
        });

        // Baseline
        group.bench_with_input(BenchmarkId::new("successors", limit), &limit, |bencher, &limit| {
            bencher.iter(|| {
                let sum: u64 = std::iter::successors(Some(0_u64), |value| Some(value + 1).filter(|next| *next < limit)).sum();
                black_box(sum)
            });
        });
    }

    group.finish();
}

fn benchmark_apply(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("apply");

    group.bench_function("apply_1000", |bencher| {
        bencher.iter(|| {
            let mut slot = Slot::with_value(1_u64);
            for _ in 0..1000 {
                let _ = slot.apply(|value| value.wrapping_mul(3));
            }
            black_box(slot.get())
        });
    });

    group.finish();
}

criterion_group!(benches, benchmark_iterate_while, benchmark_apply);

criterion_main!(benches);
