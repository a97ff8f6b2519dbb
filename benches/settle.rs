use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use carry_digit::{Bounds, Digit};

fn bench_settle(c: &mut Criterion) {
    let bounds = Bounds::new(0, 59).unwrap();
    let mut group = c.benchmark_group("settle");
    for raw in [30, 61, -1, 125, -125, i64::MAX] {
        group.bench_with_input(BenchmarkId::from_parameter(raw), &raw, |b, &raw| {
            b.iter(|| bounds.settle(black_box(raw)))
        });
    }
    group.finish();
}

/// `len` digits of radix 10, all nines, so every increment ripples through
/// the whole chain and every decrement ripples back.
fn chain(len: usize) -> Vec<Digit> {
    let digits: Vec<_> = (0..len).map(|_| Digit::new(9, 0, 9).unwrap()).collect();
    for pair in digits.windows(2) {
        pair[0].link(&pair[1]);
    }
    digits
}

fn bench_ripple(c: &mut Criterion) {
    let mut group = c.benchmark_group("ripple");
    for len in [1, 10, 100] {
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, &len| {
            let digits = chain(len);
            b.iter(|| {
                digits[0].increment();
                digits[0].decrement();
                black_box(digits[len - 1].value())
            })
        });
    }
    group.finish();
}

#[tracing::instrument(skip_all)]
fn all(c: &mut Criterion) {
    tracing_subscriber::fmt().init();
    bench_settle(c);
    bench_ripple(c);
}

criterion_group!(benches, all);
criterion_main!(benches);
