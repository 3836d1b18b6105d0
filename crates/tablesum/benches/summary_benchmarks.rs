//! Summary computation benchmarks.
//!
//! Measures attribute extraction, info table and column statistics on
//! generated tables of increasing size.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tablesum::{describe_columns, info_table, table_attributes, Column, Summarizer, Table};

/// Generate a mixed table with roughly 5% missing values.
fn generate_table(rows: usize) -> Table {
    let mut rng = StdRng::seed_from_u64(42);
    let cities = ["NYC", "LA", "Chicago", "Houston", "Phoenix"];

    let mut age = Vec::with_capacity(rows);
    let mut bmi = Vec::with_capacity(rows);
    let mut city = Vec::with_capacity(rows);
    let mut active = Vec::with_capacity(rows);

    for _ in 0..rows {
        let missing = rng.gen_bool(0.05);
        age.push((!missing).then(|| rng.gen_range(18..90)));
        bmi.push((!missing).then(|| rng.gen_range(16.0..40.0)));
        city.push(Some(cities[rng.gen_range(0..cities.len())]));
        active.push(Some(rng.gen_bool(0.5)));
    }

    Table::new(vec![
        Column::integer("age", age),
        Column::float("bmi", bmi),
        Column::categorical("city", city),
        Column::boolean("active", active),
    ])
    .expect("generated table is well-formed")
}

fn bench_summaries(c: &mut Criterion) {
    let mut group = c.benchmark_group("summaries");

    for rows in [100, 1_000, 10_000, 100_000] {
        let table = generate_table(rows);
        group.throughput(Throughput::Elements(rows as u64));

        group.bench_with_input(BenchmarkId::new("attributes", rows), &table, |b, t| {
            b.iter(|| table_attributes(black_box(t)))
        });
        group.bench_with_input(BenchmarkId::new("info_table", rows), &table, |b, t| {
            b.iter(|| info_table(black_box(t)))
        });
        group.bench_with_input(BenchmarkId::new("describe", rows), &table, |b, t| {
            b.iter(|| describe_columns(black_box(t)))
        });
    }

    group.finish();
}

fn bench_full_summary(c: &mut Criterion) {
    let table = generate_table(10_000);
    let summarizer = Summarizer::new();

    c.bench_function("summarize_10k", |b| {
        b.iter(|| summarizer.summarize("bench", black_box(&table)))
    });
}

criterion_group!(benches, bench_summaries, bench_full_summary);
criterion_main!(benches);
