//! Criterion benchmarks for coverage construction and the beacon solver.
//!
//! Uses square synthetic grids so timings reflect the algorithms only.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use u_beacon::coverage::CoverageSetBuilder;
use u_beacon::geometry::Point;
use u_beacon::placement::{GeneticSolver, SolverConfig};

fn square_grid(side: usize, step: f64) -> Vec<Point> {
    (0..side)
        .flat_map(|row| {
            (0..side).map(move |col| Point::new(col as f64 * step + step / 2.0, row as f64 * step + step / 2.0))
        })
        .collect()
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_coverage_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("coverage_build");
    group.sample_size(10);

    for &side in &[20usize, 40, 60] {
        let targets = square_grid(side, 10.0);
        let candidates: Vec<usize> = (0..targets.len()).step_by(2).collect();
        group.bench_with_input(
            BenchmarkId::from_parameter(targets.len()),
            &(targets, candidates),
            |b, (t, cands)| {
                b.iter(|| {
                    let sets = CoverageSetBuilder::build_for_indices(black_box(t), black_box(cands), 50.0);
                    black_box(sets)
                })
            },
        );
    }
    group.finish();
}

fn bench_solver(c: &mut Criterion) {
    let mut group = c.benchmark_group("genetic_solver");
    group.sample_size(10);

    for (side, beacons, pop, gen) in [(20usize, 3usize, 50usize, 100usize), (40, 5, 50, 100), (40, 8, 100, 100)] {
        let targets = square_grid(side, 10.0);
        let candidates: Vec<usize> = (0..targets.len()).step_by(3).collect();
        let coverage = CoverageSetBuilder::build_for_indices(&targets, &candidates, 50.0)
            .expect("valid radius");
        let solver = GeneticSolver::new(
            SolverConfig::default()
                .with_num_beacons(beacons)
                .with_population_size(pop)
                .with_num_generations(gen),
        )
        .expect("valid config");

        group.bench_function(
            BenchmarkId::new(format!("n{}_k{}_p{}_g{}", targets.len(), beacons, pop, gen), side),
            |b| {
                b.iter(|| {
                    let result = solver.run(
                        black_box(&candidates),
                        black_box(&targets),
                        black_box(&coverage),
                        50.0,
                    );
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_coverage_build, bench_solver);
criterion_main!(benches);
