//! Criterion benchmarks for rotation accumulation and vector helpers.
//! Focus sizes: n in {10, 100, 1000, 10000} angle samples.
//! Results: by default under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use planar::{change_of_basis, Radian, Rotation, Vector2D};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_samples(n: usize, seed: u64) -> Vec<Radian> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut heading = 0.0;
    let mut out = Vec::with_capacity(n);
    for _ in 0..n {
        // mostly clockwise drift with occasional reversals
        heading += rng.gen_range(-0.2..0.5);
        out.push(Radian::new(heading));
    }
    out
}

fn bench_rotation(c: &mut Criterion) {
    let mut group = c.benchmark_group("rotation");
    for &n in &[10usize, 100, 1000, 10000] {
        group.bench_with_input(BenchmarkId::new("from_samples", n), &n, |b, &n| {
            b.iter_batched(
                || random_samples(n, 43),
                |samples| {
                    let _r = Rotation::from_samples(samples).truncated();
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_basis(c: &mut Criterion) {
    let origin = Vector2D::new(3.0, -1.0);
    let on_axis = Vector2D::new(7.0, 2.0);
    c.bench_function("change_of_basis", |b| {
        b.iter(|| change_of_basis(Vector2D::new(1.5, 2.5), origin, on_axis))
    });
}

criterion_group!(benches, bench_rotation, bench_basis);
criterion_main!(benches);
