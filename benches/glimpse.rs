use criterion::{black_box, criterion_group, criterion_main, Criterion};
use data_glimpse::columns::{clean_column_names, NormalizeOptions, COLUMN_MAP};
use data_glimpse::glimpse::{glimpse_to, GlimpseOptions};
use data_glimpse::types::{DataSet, DataType, Field, Schema, Value};

fn inspection_like(rows: usize) -> DataSet {
    let fields = COLUMN_MAP
        .iter()
        .map(|(header, _)| Field::new(*header, DataType::Utf8))
        .collect::<Vec<_>>();
    let width = fields.len();
    let data = (0..rows)
        .map(|r| {
            (0..width)
                .map(|c| {
                    if (r + c) % 7 == 0 {
                        Value::Null
                    } else {
                        Value::Utf8(format!(
                            "value {r}-{c} with some padding text to cut at fifty chars"
                        ))
                    }
                })
                .collect()
        })
        .collect();
    DataSet::new(Schema::new(fields), data)
}

fn bench_glimpse(c: &mut Criterion) {
    let ds = inspection_like(10_000);

    c.bench_function("clean_column_names/46_cols", |b| {
        b.iter(|| {
            let mut table = black_box(ds.clone());
            clean_column_names(&mut table, &NormalizeOptions::default()).unwrap();
            table
        })
    });

    let sequential = GlimpseOptions::default();
    c.bench_function("glimpse/sequential", |b| {
        b.iter(|| {
            let mut out = Vec::with_capacity(16 * 1024);
            glimpse_to(black_box(&ds), &sequential, &mut out).unwrap();
            out
        })
    });

    let random = GlimpseOptions {
        random: true,
        ..Default::default()
    };
    c.bench_function("glimpse/random", |b| {
        b.iter(|| {
            let mut out = Vec::with_capacity(16 * 1024);
            glimpse_to(black_box(&ds), &random, &mut out).unwrap();
            out
        })
    });
}

criterion_group!(benches, bench_glimpse);
criterion_main!(benches);
