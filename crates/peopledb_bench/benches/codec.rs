//! Line codec benchmarks.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use peopledb_bench::utils::random_fields;
use peopledb_codec::{from_line, to_line, LineDecoder, LineEncoder, RecordFields};
use std::io::Cursor;

/// Benchmark encoding and decoding a single line.
fn bench_single_line(c: &mut Criterion) {
    let mut group = c.benchmark_group("line");
    let fields = RecordFields::new("Alice", 30, 62.5);
    let line = to_line(&fields).unwrap();

    group.bench_function("encode", |b| {
        b.iter(|| black_box(to_line(black_box(&fields)).unwrap()));
    });

    group.bench_function("decode", |b| {
        b.iter(|| black_box(from_line(black_box(&line)).unwrap()));
    });

    group.bench_function("decode_malformed", |b| {
        b.iter(|| black_box(from_line(black_box("Alice,abc,62.5")).is_err()));
    });

    group.finish();
}

/// Benchmark encoding a batch of records.
fn bench_encode_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode_batch");

    for count in [100, 1000, 10000].iter() {
        let fields = random_fields(*count);
        group.throughput(Throughput::Elements(*count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), count, |b, _| {
            b.iter(|| {
                let mut encoder = LineEncoder::with_capacity(fields.len());
                for f in &fields {
                    encoder.encode(f).unwrap();
                }
                black_box(encoder.into_string())
            });
        });
    }
    group.finish();
}

/// Benchmark decoding a batch of lines from a reader.
fn bench_decode_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_batch");

    for count in [100, 1000, 10000].iter() {
        let mut encoder = LineEncoder::new();
        for f in &random_fields(*count) {
            encoder.encode(f).unwrap();
        }
        let text = encoder.into_string();
        group.throughput(Throughput::Bytes(text.len() as u64));

        group.bench_with_input(BenchmarkId::from_parameter(count), count, |b, _| {
            b.iter(|| {
                let decoded = LineDecoder::new(Cursor::new(text.as_bytes()))
                    .filter_map(|line| line.ok())
                    .filter(|line| line.result.is_ok())
                    .count();
                black_box(decoded)
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_single_line, bench_encode_batch, bench_decode_batch);
criterion_main!(benches);
