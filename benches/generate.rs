//! Throughput benchmarks for the timestamp48 pipeline.
//!
//! Samples are pre-generated so the wall clock stays out of the hot path,
//! with a separate case measuring the clock-reading default.

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use timestamp48::{encode_48be, generate_timestamp48, millis_to_48be};

fn bench_encoding(c: &mut Criterion) {
    // Fixed ring of realistic millisecond samples
    let samples: Vec<f64> = (0..1000)
        .map(|i| 1_700_000_000_000.0 + i as f64)
        .collect();

    let mut i = 0usize;
    c.bench_function("generate_timestamp48", |b| {
        b.iter(|| {
            let s = generate_timestamp48(Some(black_box(samples[i % samples.len()])));
            i += 1;
            black_box(s)
        })
    });

    c.bench_function("millis_to_48be", |b| {
        b.iter(|| black_box(millis_to_48be(black_box(1_700_000_000_000.0))))
    });

    let bytes = millis_to_48be(1_700_000_000_000.0);
    c.bench_function("encode_48be", |b| {
        b.iter(|| black_box(encode_48be(black_box(&bytes))))
    });

    c.bench_function("generate_timestamp48_now", |b| {
        b.iter(|| black_box(generate_timestamp48(None)))
    });
}

criterion_group!(benches, bench_encoding);
criterion_main!(benches);
