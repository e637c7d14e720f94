//! Criterion benchmarks for the geometry predicates behind move validation.
//! Focus ring sizes: n in {4, 16, 64, 256} vertices.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use pathrace::geom::{distance_point_to_segment, is_inside_ring, segments_intersect, Coordinate};
use pathrace::region::{MoveCheck, Region, RegionMode};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn star_ring(n: usize, seed: u64) -> Vec<Coordinate> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|k| {
            let th = std::f64::consts::TAU * k as f64 / n as f64;
            let r = rng.gen_range(0.5..1.0);
            Coordinate::new(r * th.cos(), r * th.sin())
        })
        .collect()
}

fn random_points(m: usize, seed: u64) -> Vec<Coordinate> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..m)
        .map(|_| Coordinate::new(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0)))
        .collect()
}

fn bench_predicates(c: &mut Criterion) {
    let pts = random_points(256, 3);
    c.bench_function("segments_intersect", |b| {
        b.iter(|| {
            pts.windows(4)
                .filter(|w| segments_intersect(w[0], w[1], w[2], w[3]))
                .count()
        })
    });
    c.bench_function("distance_point_to_segment", |b| {
        b.iter(|| {
            pts.windows(3)
                .map(|w| distance_point_to_segment(w[0], w[1], w[2]))
                .sum::<f64>()
        })
    });
}

fn bench_rings(c: &mut Criterion) {
    let mut group = c.benchmark_group("ring");
    let pts = random_points(64, 5);
    for &n in &[4usize, 16, 64, 256] {
        let ring = star_ring(n, 11);
        group.bench_with_input(BenchmarkId::new("is_inside_ring", n), &ring, |b, ring| {
            b.iter(|| pts.iter().filter(|p| is_inside_ring(**p, ring)).count())
        });
        let regions = vec![Region::new("star", ring.clone())];
        let check = MoveCheck::new(&regions, RegionMode::Boundary, 0.01);
        group.bench_with_input(BenchmarkId::new("boundary_move_check", n), &n, |b, _| {
            b.iter(|| pts.windows(2).filter(|w| check.rejects(w[0], w[1])).count())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_predicates, bench_rings);
criterion_main!(benches);
