use randomness::rng::{EntropySource, random_int};

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

pub fn bench_fill_bytes(c: &mut Criterion) {
    let source = EntropySource::new();
    let mut buf = [0u8; 64];

    c.bench_function("fill 64 bytes", |b| {
        b.iter(|| source.fill_bytes(black_box(&mut buf)).unwrap())
    });
}

pub fn bench_bounded_draw(c: &mut Criterion) {
    let source = EntropySource::new();

    c.bench_function("bounded draw", |b| {
        b.iter(|| random_int(&source, black_box(-500), black_box(100)).unwrap())
    });
}

criterion_group!(benches, bench_fill_bytes, bench_bounded_draw);
criterion_main!(benches);
