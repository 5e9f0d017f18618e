use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use hermite_curve_engine::{solve_tridiagonal, HermiteCurve};
use std::hint::black_box;

fn build_synthetic_curve(point_count: usize) -> HermiteCurve {
    let mut curve = HermiteCurve::new();

    for index in 0..point_count {
        let x = index as f32 * 10.0;
        let y = ((index * 7) % 13) as f32 * 5.0;
        curve.add_point(x, y, 0.0, 0.0);
    }

    curve
}

fn bench_tangent_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("tangent_generation");

    for &point_count in &[16usize, 256usize] {
        group.bench_with_input(
            BenchmarkId::new("natural_spline", point_count),
            &point_count,
            |b, &n| {
                let mut curve = build_synthetic_curve(n);
                b.iter(|| {
                    curve
                        .generate_tangents_natural_spline()
                        .expect("Tangentengenerierung fehlgeschlagen");
                    black_box(curve.point_count())
                })
            },
        );

        group.bench_with_input(
            BenchmarkId::new("clamped_end", point_count),
            &point_count,
            |b, &n| {
                let mut curve = build_synthetic_curve(n);
                b.iter(|| {
                    curve
                        .generate_tangents_clamped_end()
                        .expect("Tangentengenerierung fehlgeschlagen");
                    black_box(curve.point_count())
                })
            },
        );
    }

    group.finish();
}

fn bench_curve_sampling(c: &mut Criterion) {
    let mut group = c.benchmark_group("curve_sampling");

    for &point_count in &[16usize, 256usize] {
        let mut curve = build_synthetic_curve(point_count);
        curve
            .generate_tangents_natural_spline()
            .expect("Tangentengenerierung fehlgeschlagen");

        group.bench_with_input(
            BenchmarkId::new("generate_curve", point_count),
            &point_count,
            |b, _| {
                b.iter(|| {
                    curve.generate_curve();
                    black_box(curve.sample_count())
                })
            },
        );
    }

    group.finish();
}

fn bench_tridiagonal_solver(c: &mut Criterion) {
    let n = 1024usize;

    // Natural-Spline-Bandmuster in Benchmark-Größe
    let mut a = vec![1.0f32; n];
    a[0] = 0.0;
    let mut b_band = vec![4.0f32; n];
    b_band[0] = 2.0;
    b_band[n - 1] = 2.0;
    let mut c_band = vec![1.0f32; n];
    c_band[n - 1] = 0.0;
    let d: Vec<f32> = (0..n).map(|i| ((i * 13) % 29) as f32 - 14.0).collect();

    c.bench_function("solve_tridiagonal_1024", |bench| {
        bench.iter(|| {
            let x = solve_tridiagonal(
                black_box(&a),
                black_box(&b_band),
                black_box(&c_band),
                black_box(&d),
            )
            .expect("Lösung erwartet");
            black_box(x.len())
        })
    });
}

criterion_group!(
    curve_benches,
    bench_tangent_generation,
    bench_curve_sampling,
    bench_tridiagonal_solver
);
criterion_main!(curve_benches);
