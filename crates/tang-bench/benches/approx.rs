use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tang_bench::*;
use tang_gl::scalar::{cos_approx, fast_inv_sqrt, sin_approx, sin_cos_approx, sqrt_approx};
use tang_gl::Vec3;

const N: usize = 1024;

// ============================================================
// Scalars
// ============================================================

fn sqrt(c: &mut Criterion) {
    let mut group = c.benchmark_group("scalar/sqrt");
    let xs = random_positive_f32s(N);

    group.bench_function("approx", |b| {
        b.iter(|| xs.iter().map(|&x| sqrt_approx(black_box(x))).sum::<f32>())
    });

    group.bench_function("std", |b| {
        b.iter(|| xs.iter().map(|&x| black_box(x).sqrt()).sum::<f32>())
    });

    group.finish();
}

fn inv_sqrt(c: &mut Criterion) {
    let mut group = c.benchmark_group("scalar/inv_sqrt");
    let xs = random_positive_f32s(N);

    group.bench_function("approx", |b| {
        b.iter(|| xs.iter().map(|&x| fast_inv_sqrt(black_box(x))).sum::<f32>())
    });

    group.bench_function("std", |b| {
        b.iter(|| xs.iter().map(|&x| 1.0 / black_box(x).sqrt()).sum::<f32>())
    });

    group.finish();
}

fn sin(c: &mut Criterion) {
    let mut group = c.benchmark_group("scalar/sin");
    let xs = random_angles(N);

    group.bench_function("approx", |b| {
        b.iter(|| xs.iter().map(|&x| sin_approx(black_box(x))).sum::<f32>())
    });

    group.bench_function("std", |b| {
        b.iter(|| xs.iter().map(|&x| black_box(x).sin()).sum::<f32>())
    });

    group.finish();
}

fn cos(c: &mut Criterion) {
    let mut group = c.benchmark_group("scalar/cos");
    let xs = random_angles(N);

    group.bench_function("approx", |b| {
        b.iter(|| xs.iter().map(|&x| cos_approx(black_box(x))).sum::<f32>())
    });

    group.bench_function("std", |b| {
        b.iter(|| xs.iter().map(|&x| black_box(x).cos()).sum::<f32>())
    });

    group.finish();
}

fn sin_cos(c: &mut Criterion) {
    let mut group = c.benchmark_group("scalar/sin_cos");
    let xs = random_angles(N);

    group.bench_function("approx", |b| {
        b.iter(|| {
            xs.iter()
                .map(|&x| {
                    let (s, c) = sin_cos_approx(black_box(x));
                    s + c
                })
                .sum::<f32>()
        })
    });

    group.bench_function("std", |b| {
        b.iter(|| {
            xs.iter()
                .map(|&x| {
                    let (s, c) = black_box(x).sin_cos();
                    s + c
                })
                .sum::<f32>()
        })
    });

    group.finish();
}

// ============================================================
// Vec3
// ============================================================

fn vec3_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("vec3/normalize");

    group.bench_function("tang_gl", |b| {
        let vs = random_vec3(N);
        b.iter(|| {
            let mut sum = Vec3::zero();
            for v in &vs {
                sum += black_box(*v).normalized();
            }
            black_box(sum)
        })
    });

    group.bench_function("glam", |b| {
        let vs: Vec<glam::Vec3> = random_vec3(N)
            .iter()
            .map(|v| glam::Vec3::new(v.x, v.y, v.z))
            .collect();
        b.iter(|| {
            let mut sum = glam::Vec3::ZERO;
            for v in &vs {
                sum += black_box(*v).normalize();
            }
            black_box(sum)
        })
    });

    group.finish();
}

criterion_group!(benches, sqrt, inv_sqrt, sin, cos, sin_cos, vec3_normalize);
criterion_main!(benches);
