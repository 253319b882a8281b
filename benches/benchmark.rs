//! Pascal's triangle benchmarks using Criterion.
//!
//! Benchmarks cover:
//! - Table generation across the supported row range
//! - Pattern extraction for every family
//! - Primality classification of a full table
//! - Overlay planning with every annotation enabled
//!
//! Run with: `cargo bench`

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use pascal_rs::prelude::*;
use std::hint::black_box;

fn bench_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("generation");

    for rows in [5usize, 10, 20, 30] {
        group.throughput(Throughput::Elements((rows * (rows + 1) / 2) as u64));
        group.bench_with_input(BenchmarkId::new("f64", rows), &rows, |b, &rows| {
            b.iter(|| generate_table::<f64>(black_box(rows)))
        });
        group.bench_with_input(BenchmarkId::new("f32", rows), &rows, |b, &rows| {
            b.iter(|| generate_table::<f32>(black_box(rows)))
        });
    }

    group.finish();
}

fn bench_patterns(c: &mut Criterion) {
    let mut group = c.benchmark_group("patterns");
    let table = generate_table::<f64>(30);

    for kind in PatternKind::ALL {
        group.bench_with_input(
            BenchmarkId::new("extract", kind.name()),
            &kind,
            |b, &kind| b.iter(|| extract_pattern(black_box(&table), kind, 30)),
        );
    }

    group.finish();
}

fn bench_primes(c: &mut Criterion) {
    let table = generate_table::<f64>(30);

    c.bench_function("primes/classify_table", |b| {
        b.iter(|| {
            table
                .cells()
                .filter(|cell| to_integer(cell.value).is_some_and(is_prime))
                .count()
        })
    });
}

fn bench_overlays(c: &mut Criterion) {
    let triangle = Pascal::<f64>::new().rows(30).build().unwrap();
    let layout = GridLayout::new(30, 40.0, 30.0);
    let view = ViewState::new()
        .toggle_connectors()
        .toggle_symmetry_axis()
        .toggle_row_sums()
        .toggle_primes()
        .toggle_pattern(DiagonalSum);

    c.bench_function("overlays/all_enabled", |b| {
        b.iter(|| triangle.overlays(black_box(&view), &layout))
    });
}

criterion_group!(
    benches,
    bench_generation,
    bench_patterns,
    bench_primes,
    bench_overlays
);
criterion_main!(benches);
