//! Criterion benchmarks for the hot paths of panel redraws.
//! Focus: rotation decoding per decoder, point-batch bounds for n in {0, 10, 100, 1000},
//! and easing-curve evaluation.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};
use uigeom::euler::RotationDecoder;
use uigeom::plane::CubicBezier;
use uigeom::space::{bounds_for_transformed_points, CssMatrix};

fn random_rotation(rng: &mut StdRng) -> CssMatrix {
    CssMatrix::rotate_x(rng.gen_range(-180.0..180.0))
        .multiply(&CssMatrix::rotate_y(rng.gen_range(-180.0..180.0)))
        .multiply(&CssMatrix::rotate_z(rng.gen_range(-180.0..180.0)))
}

fn random_points(n: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..3 * n).map(|_| rng.gen_range(-100.0..100.0)).collect()
}

fn bench_euler(c: &mut Criterion) {
    let mut group = c.benchmark_group("euler");
    for decoder in RotationDecoder::ALL {
        group.bench_function(BenchmarkId::new("decode", decoder.name()), |b| {
            let mut rng = StdRng::seed_from_u64(41);
            b.iter_batched(
                || random_rotation(&mut rng),
                |m| {
                    let _angles = decoder.decode(&m).unwrap();
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_bounds(c: &mut Criterion) {
    let mut group = c.benchmark_group("bounds");
    let mut rng = StdRng::seed_from_u64(42);
    let m = random_rotation(&mut rng);
    for &n in &[0usize, 10, 100, 1000] {
        group.bench_with_input(BenchmarkId::new("transformed_points", n), &n, |b, &n| {
            let points = random_points(n, 43);
            b.iter(|| bounds_for_transformed_points(&m, &points, None))
        });
    }
    group.finish();
}

fn bench_bezier(c: &mut Criterion) {
    let mut group = c.benchmark_group("bezier");
    group.bench_function("parse_keyword", |b| {
        b.iter(|| CubicBezier::parse("ease-in-out"))
    });
    group.bench_function("parse_function", |b| {
        b.iter(|| CubicBezier::parse("cubic-bezier(0.68, -0.55, 0.265, 1.55)"))
    });
    let curve = CubicBezier::parse("ease").unwrap();
    group.bench_function("evaluate_100", |b| {
        b.iter(|| (0..=100).map(|i| curve.evaluate_at(i as f64 / 100.0).y).sum::<f64>())
    });
    group.finish();
}

criterion_group!(benches, bench_euler, bench_bounds, bench_bezier);
criterion_main!(benches);
