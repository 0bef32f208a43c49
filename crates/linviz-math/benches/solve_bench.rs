use criterion::{criterion_group, criterion_main, Criterion};
use linviz_math::elimination::reduced_row_echelon;
use linviz_math::inverse::inverse;
use linviz_math::solve::solve;
use ndarray::{Array1, Array2};
use std::hint::black_box;

fn test_matrix(n: usize) -> Array2<f64> {
    Array2::from_shape_fn((n, n), |(i, j)| {
        if i == j {
            n as f64 + 1.0
        } else {
            ((i * 5 + j * 13) % 17) as f64 / 17.0 - 0.5
        }
    })
}

fn bench_solve(c: &mut Criterion) {
    let a = test_matrix(64);
    let b = Array1::from_shape_fn(64, |i| (i as f64).sin());
    c.bench_function("solve_64", |bench| {
        bench.iter(|| solve(black_box(&a), black_box(&b)).unwrap())
    });
}

fn bench_inverse(c: &mut Criterion) {
    let a = test_matrix(32);
    c.bench_function("inverse_32x32", |b| b.iter(|| inverse(black_box(&a)).unwrap()));
}

fn bench_rref(c: &mut Criterion) {
    let a = Array2::from_shape_fn((24, 48), |(i, j)| ((i * 3 + j) % 7) as f64 - 3.0);
    c.bench_function("rref_24x48", |b| b.iter(|| reduced_row_echelon(black_box(&a))));
}

criterion_group!(benches, bench_solve, bench_inverse, bench_rref);
criterion_main!(benches);
