use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use gammastat::quad::{integrate, QuadSettings};
use gammastat::special::gamma;
use gammastat::stats::{pchisq, pt, StudentT, ContinuousDistribution};
use gammastat::Complex;

// ---------------------------------------------------------------------------
// Quadrature
// ---------------------------------------------------------------------------

fn quad(c: &mut Criterion) {
    let mut g = c.benchmark_group("quad");
    let settings = QuadSettings::<f64>::default();

    g.bench_function("finite_exp", |b| {
        b.iter(|| integrate(|x: f64| x.exp(), black_box(0.0), black_box(1.0), &settings))
    });

    g.bench_function("upper_gaussian", |b| {
        b.iter(|| integrate(|x: f64| (-x * x).exp(), black_box(0.0), f64::INFINITY, &settings))
    });

    g.finish();
}

// ---------------------------------------------------------------------------
// Gamma function
// ---------------------------------------------------------------------------

fn gamma_fn(c: &mut Criterion) {
    let mut g = c.benchmark_group("gamma");

    g.bench_function("real_f64", |b| b.iter(|| gamma(black_box(4.5_f64))));
    g.bench_function("real_f32", |b| b.iter(|| gamma(black_box(4.5_f32))));
    g.bench_function("reflected_f64", |b| b.iter(|| gamma(black_box(-2.5_f64))));
    g.bench_function("complex_f64", |b| {
        b.iter(|| gamma(black_box(Complex::new(-3.4_f64, 2.0))))
    });

    g.finish();
}

// ---------------------------------------------------------------------------
// Distributions
// ---------------------------------------------------------------------------

fn distributions(c: &mut Criterion) {
    let mut g = c.benchmark_group("distributions");

    g.bench_function("pt", |b| {
        b.iter(|| pt(black_box(8.0_f64 / 9.0), black_box(8.0), true, false))
    });

    g.bench_function("pchisq", |b| {
        b.iter(|| pchisq(black_box(2.98_f64), black_box(10.0), true))
    });

    // normalizer computed once, outside the loop
    g.bench_function("student_t_cdf", |b| {
        let t = StudentT::new(8.0_f64).unwrap();
        b.iter(|| t.cdf(black_box(0.9)))
    });

    g.finish();
}

// ---------------------------------------------------------------------------

criterion_group!(benches, quad, gamma_fn, distributions);
criterion_main!(benches);
