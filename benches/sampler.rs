#[macro_use]
extern crate criterion;
extern crate juliaset;
extern crate num;

use criterion::{black_box, Criterion};
use num::Complex;

use juliaset::{escape_time, GridGeometry, JuliaRenderer, QuadraticMap};

fn evaluator_benchmark(c: &mut Criterion) {
    let map = QuadraticMap::new(Complex::new(-0.7, -0.35));
    c.bench_function("escape_time near the set boundary", move |b| {
        b.iter(|| escape_time(black_box(Complex::new(0.01, 0.01)), &map, 500))
    });
}

fn sampler_benchmark(c: &mut Criterion) {
    let geometry = GridGeometry::new(128, 128, 1.2, 1.2).unwrap();
    let map = QuadraticMap::new(Complex::new(-0.7, -0.35));
    let renderer = JuliaRenderer::new(geometry, map, 100).unwrap();
    c.bench_function("sample_grid 128x128", move |b| {
        b.iter(|| renderer.sample_grid())
    });
}

criterion_group!(benches, evaluator_benchmark, sampler_benchmark);
criterion_main!(benches);
