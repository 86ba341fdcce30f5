//! Micro-benchmarks for the quaternion kernel
//!
//! ## Usage
//!
//! ```bash
//! cargo bench --bench quaternion_ops
//! ```

use apex_quaternion::Quaternion;
use criterion::{Criterion, criterion_group, criterion_main};
use nalgebra::Matrix3;
use std::hint::black_box;

fn bench_algebra(c: &mut Criterion) {
    let qa = Quaternion::rotation(0.7, 1.0, -2.0, 0.5);
    let qb = Quaternion::rotation(-1.3, 0.2, 0.4, 1.0);

    c.bench_function("hamilton_product", |b| {
        b.iter(|| black_box(qa) * black_box(qb))
    });
    c.bench_function("normalize", |b| {
        b.iter(|| black_box(qa * 3.0).normalized())
    });
}

fn bench_matrix_conversion(c: &mut Criterion) {
    let q = Quaternion::rotation(2.9, 0.3, 1.0, -0.2);
    let r: Matrix3<f64> = q.to_matrix();

    c.bench_function("to_matrix_nalgebra", |b| {
        b.iter(|| black_box(q).to_matrix::<Matrix3<f64>>())
    });
    c.bench_function("from_matrix_nalgebra", |b| {
        b.iter(|| Quaternion::from_matrix(black_box(&r)))
    });
}

fn bench_integration(c: &mut Criterion) {
    let w = Quaternion::pure(0.1, -0.4, 1.0);

    c.bench_function("integrate_euler_1000", |b| {
        b.iter(|| {
            let mut q = Quaternion::identity();
            for _ in 0..1000 {
                q.integrate_euler(black_box(&w), 1e-3);
            }
            q
        })
    });
    c.bench_function("integrate_rk4_1000", |b| {
        b.iter(|| {
            let mut q = Quaternion::identity();
            for _ in 0..1000 {
                q.integrate_runge_kutta4(black_box(&w), 1e-3);
            }
            q
        })
    });
}

criterion_group!(
    benches,
    bench_algebra,
    bench_matrix_conversion,
    bench_integration
);
criterion_main!(benches);
