use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use decimal128::Decimal128;

const INPUTS: [(&str, &str); 4] = [
    ("small", "1"),
    ("typical", "-1234.5678"),
    ("full-precision", "9.999999999999999999999999999999999E+6144"),
    ("subnormal", "1E-6176"),
];

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    for (name, s) in INPUTS {
        group.bench_with_input(BenchmarkId::from_parameter(name), s, |b, s| {
            b.iter(|| Decimal128::parse(black_box(s)).unwrap())
        });
    }
    group.finish();
}

fn bench_to_string(c: &mut Criterion) {
    let mut group = c.benchmark_group("to_string");
    for (name, s) in INPUTS {
        let d = Decimal128::parse(s).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(name), &d, |b, d| {
            b.iter(|| black_box(d).to_string())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_parse, bench_to_string);
criterion_main!(benches);
