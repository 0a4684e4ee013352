#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use terrace_utils::noise::{
    gradient_coherent_noise_3d, simplex_style_gradient_coherent_noise_3d,
    value_coherent_noise_3d,
};
use terrace_utils::{LatticeOrientation, NoiseQuality, SimplexQuality};

/// Sample a 16×16 slice so per-call overhead does not dominate.
fn sample_slice(f: impl Fn(f64, f64, f64) -> f64) -> f64 {
    let mut acc = 0.0;
    for ix in 0..16 {
        for iz in 0..16 {
            acc += f(f64::from(ix) * 0.13, 0.5, f64::from(iz) * 0.13);
        }
    }
    acc
}

fn bench_gradient(c: &mut Criterion) {
    let mut group = c.benchmark_group("gradient_coherent_noise_3d");
    for quality in [NoiseQuality::Fast, NoiseQuality::Standard, NoiseQuality::Best] {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{quality:?}")),
            &quality,
            |b, &q| {
                b.iter(|| {
                    sample_slice(|x, y, z| gradient_coherent_noise_3d(x, y, z, black_box(0), q))
                });
            },
        );
    }
    group.finish();
}

fn bench_value(c: &mut Criterion) {
    c.bench_function("value_coherent_noise_3d", |b| {
        b.iter(|| {
            sample_slice(|x, y, z| {
                value_coherent_noise_3d(x, y, z, black_box(0), NoiseQuality::Standard)
            })
        });
    });
}

fn bench_simplex_style(c: &mut Criterion) {
    let mut group = c.benchmark_group("simplex_style_gradient_coherent_noise_3d");
    for quality in [SimplexQuality::Standard, SimplexQuality::Smooth] {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{quality:?}")),
            &quality,
            |b, &q| {
                b.iter(|| {
                    sample_slice(|x, y, z| {
                        simplex_style_gradient_coherent_noise_3d(
                            x,
                            y,
                            z,
                            black_box(0),
                            LatticeOrientation::XzBeforeY,
                            q,
                        )
                    })
                });
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_gradient, bench_value, bench_simplex_style);
criterion_main!(benches);
