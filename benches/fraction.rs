#[macro_use]
extern crate criterion;

use criterion::{black_box, Criterion};
use fractional::Fraction;

fn criterion_benchmark(c: &mut Criterion) {
    let third = Fraction::new(1.0, 3.0).unwrap();
    let big = Fraction::new(987_654_321.0, 123_456_789.0).unwrap();

    c.bench_function("normalize small", |b| b.iter(|| Fraction::normalize(black_box(81.0), black_box(54.0))));
    c.bench_function("normalize big", |b| b.iter(|| Fraction::normalize(black_box(987_654_321.0), black_box(123_456_789.0))));
    c.bench_function("from decimal", |b| b.iter(|| Fraction::from_decimal(black_box(3.14159))));
    c.bench_function("parse", |b| b.iter(|| black_box("-355/113").parse::<Fraction>()));
    c.bench_function("add", |b| b.iter(|| black_box(third) + black_box(big)));
    c.bench_function("div", |b| b.iter(|| black_box(third) / black_box(big)));
    c.bench_function("power", |b| b.iter(|| black_box(big).power(black_box(third))));
    c.bench_function("root", |b| b.iter(|| Fraction::from(1024).root(black_box(Fraction::from(10)))));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
