//! Throughput benchmarks for the series generator.
//!
//! Run with: `cargo bench -p retail-synth`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use retail_synth::generator::{generate, inventory_levels, random_walk, REFERENCE_SEED};
use retail_synth::stats::pearson;

const SIZES: &[usize] = &[250, 1_000, 10_000];

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    for &size in SIZES {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| generate(black_box(size), black_box(REFERENCE_SEED)));
        });
    }
    group.finish();
}

fn bench_recurrences(c: &mut Criterion) {
    let mut group = c.benchmark_group("recurrences");
    for &size in SIZES {
        let steps: Vec<f64> = (0..size).map(|i| ((i as f64) * 0.1).sin()).collect();
        let sales: Vec<f64> = (0..size).map(|i| 600.0 + (i as f64) * 0.5).collect();
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("random_walk", size), &steps, |b, steps| {
            b.iter(|| random_walk(1000.0, black_box(steps)));
        });
        group.bench_with_input(BenchmarkId::new("inventory", size), &sales, |b, sales| {
            b.iter(|| inventory_levels(black_box(sales), (0..100u32).cycle()));
        });
    }
    group.finish();
}

fn bench_pearson(c: &mut Criterion) {
    let dataset = generate(10_000, REFERENCE_SEED).unwrap();
    let sales = dataset.daily_sales_revenue();
    let spend = dataset.marketing_spend();
    c.bench_function("pearson_10000", |b| {
        b.iter(|| pearson(black_box(&sales), black_box(&spend)));
    });
}

criterion_group!(benches, bench_generate, bench_recurrences, bench_pearson);
criterion_main!(benches);
