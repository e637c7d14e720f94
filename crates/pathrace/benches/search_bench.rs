//! Criterion benchmarks for `find_path` across strategies.
//! Results: by default under target/criterion.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use pathrace::prelude::*;

fn course() -> (Coordinate, Coordinate, Vec<Region>) {
    let start = Coordinate::new(0.0, 0.0);
    let goal = Coordinate::new(12.0, 0.0);
    let wall = Region::rectangle(
        "wall",
        Coordinate::new(5.5, -6.5),
        Coordinate::new(6.5, 6.5),
    );
    (start, goal, vec![wall])
}

fn bench_strategies(c: &mut Criterion) {
    let (start, goal, regions) = course();
    let cfg = SearchCfg::default();
    let mut group = c.benchmark_group("find_path");
    for strategy in [
        SearchStrategy::AStar,
        SearchStrategy::Greedy,
        SearchStrategy::Dijkstra,
        SearchStrategy::WeightedAStar,
    ] {
        for &headings in &[4usize, 8] {
            let profile = AgentProfile::new("bench", strategy, 1.0, compass(headings))
                .with_weight(2.0)
                .with_max_iterations(20_000);
            group.bench_with_input(
                BenchmarkId::new(strategy.label(), headings),
                &profile,
                |b, p| {
                    b.iter(|| {
                        let _res = find_path(start, goal, &regions, RegionMode::Exclusion, p, &cfg);
                    })
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_strategies);
criterion_main!(benches);
