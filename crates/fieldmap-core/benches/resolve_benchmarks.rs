//! Benchmarks for field resolution and record conversion
//!
//! Copyright (c) 2025 Fieldmap Team
//! Licensed under the Apache-2.0 license

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fieldmap_core::{dtype, parsers, AdapterDefinition, Field};
use serde_json::{json, Map, Value};

fn create_test_data() -> Value {
    json!({
        "person": {
            "last_name": "Smith",
            "first_name": "John",
            "age": 30,
            "address": {"city": "Springfield", "zip": "12345"}
        },
        "job": {"title": "Engineer", "salary": 85000.5}
    })
}

fn create_wide_definition(width: usize) -> (AdapterDefinition, Value) {
    let mut record = Map::new();
    let mut builder = AdapterDefinition::builder("Wide");
    for i in 0..width {
        record.insert(format!("k{}", i), json!({"value": i}));
        builder = builder.field(
            format!("f{}", i),
            Field::from_source(format!("k{}.value", i)).dtype(dtype::integer()),
        );
    }
    (builder.build().unwrap(), Value::Object(record))
}

fn bench_field_resolution(c: &mut Criterion) {
    let data = create_test_data();
    let mut group = c.benchmark_group("field_resolution");

    let shallow = Field::new();
    group.bench_function("bare_key", |b| {
        b.iter(|| shallow.resolve(black_box("job"), black_box(&data)))
    });

    let nested = Field::from_source("person.address.city").dtype(dtype::string());
    group.bench_function("nested_typed", |b| {
        b.iter(|| nested.resolve(black_box("city"), black_box(&data)))
    });

    let parsed = Field::from_source("person.last_name").parser(parsers::uppercase());
    group.bench_function("nested_parsed", |b| {
        b.iter(|| parsed.resolve(black_box("last_name"), black_box(&data)))
    });

    let defaulted = Field::from_source("job.title.short").optional().with_default("n/a");
    group.bench_function("optional_default", |b| {
        b.iter(|| defaulted.resolve(black_box("short"), black_box(&data)))
    });

    group.finish();
}

fn bench_conversion_width(c: &mut Criterion) {
    let mut group = c.benchmark_group("conversion_width");
    for width in [4usize, 32, 256] {
        let (definition, data) = create_wide_definition(width);
        group.bench_with_input(BenchmarkId::from_parameter(width), &data, |b, data| {
            b.iter(|| definition.convert_data(black_box(data)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_field_resolution, bench_conversion_width);
criterion_main!(benches);
