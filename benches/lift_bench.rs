//! Benchmark for the lift combinators and `AtomicMaybe`.
//!
//! Compares `lift` and `lift_all` against hand-written matches to measure
//! the overhead of the combinators, and times the atomic cell operations.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use maybers::maybe::Maybe;
use maybers::sync::AtomicMaybe;
use std::hint::black_box;

// =============================================================================
// Fixed-Arity Lift Benchmarks
// =============================================================================

fn benchmark_lift(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("lift");

    group.bench_function("lift_some", |bencher| {
        bencher.iter(|| {
            let first = black_box(Maybe::of(40));
            let second = black_box(Maybe::of(2));
            black_box(first.lift(second, |a, b| a + b))
        });
    });

    group.bench_function("manual_match_some", |bencher| {
        bencher.iter(|| {
            let first = black_box(Maybe::of(40));
            let second = black_box(Maybe::of(2));
            let lifted = match (first, second) {
                (Maybe::Some(a), Maybe::Some(b)) => Maybe::Some(a + b),
                _ => Maybe::None,
            };
            black_box(lifted)
        });
    });

    group.bench_function("lift4_some", |bencher| {
        bencher.iter(|| {
            let first = black_box(Maybe::of(1));
            black_box(first.lift4(Maybe::of(2), Maybe::of(3), Maybe::of(4), |a, b, c, d| {
                a + b + c + d
            }))
        });
    });

    group.bench_function("lift4_none", |bencher| {
        bencher.iter(|| {
            let first = black_box(Maybe::of(1));
            black_box(first.lift4(Maybe::of(2), Maybe::<i32>::None, Maybe::of(4), |a, b, c, d| {
                a + b + c + d
            }))
        });
    });

    group.finish();
}

// =============================================================================
// Variadic Lift Benchmarks
// =============================================================================

fn benchmark_lift_all(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("lift_all");

    for size in [10, 100, 1000] {
        let operands: Vec<Maybe<u64>> = (0..size).map(Maybe::of).collect();
        group.throughput(Throughput::Elements(size));

        group.bench_with_input(BenchmarkId::new("lift_all", size), &operands, |bencher, operands| {
            bencher.iter(|| {
                let head = black_box(Maybe::of(0_u64));
                black_box(head.lift_all(operands.iter().copied(), |values| values.iter().sum::<u64>()))
            });
        });

        group.bench_with_input(
            BenchmarkId::new("option_collect", size),
            &operands,
            |bencher, operands| {
                bencher.iter(|| {
                    let collected: Option<Vec<u64>> = std::iter::once(black_box(Some(0_u64)))
                        .chain(operands.iter().map(|operand| operand.into_option()))
                        .collect();
                    black_box(collected.map(|values| values.iter().sum::<u64>()))
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// AtomicMaybe Benchmarks
// =============================================================================

fn benchmark_atomic_maybe(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("atomic_maybe");

    group.bench_function("set_if_none_then_clear", |bencher| {
        let cell = AtomicMaybe::new();
        bencher.iter(|| {
            black_box(cell.set_if_none(black_box(7_u64)));
            black_box(cell.get_and_clear())
        });
    });

    group.bench_function("set_if_none_occupied", |bencher| {
        let cell = AtomicMaybe::from_value(1_u64);
        bencher.iter(|| black_box(cell.set_if_none(black_box(7))));
    });

    group.bench_function("get", |bencher| {
        let cell = AtomicMaybe::from_value(1_u64);
        bencher.iter(|| black_box(cell.get()));
    });

    group.finish();
}

criterion_group!(benches, benchmark_lift, benchmark_lift_all, benchmark_atomic_maybe);
criterion_main!(benches);
