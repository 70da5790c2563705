//! Benchmarks for the heat-loss route planner.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use crucible::samples::SAMPLE_CITY;
use crucible::{find_path_with, Grid, HeatLossReport, HeuristicField, LONG_HAUL, ORDINARY};

/// A 141x141 grid, the size of a full puzzle input, built from the sample.
fn large_grid() -> Grid {
    let sample = Grid::parse(SAMPLE_CITY).unwrap();
    let rows = (0..141)
        .map(|y| {
            (0..141)
                .map(|x| {
                    let base = sample.cost((x % 13, y % 13)).unwrap();
                    (base + (x * 7 + y * 3) as u32 % 5) % 9 + 1
                })
                .collect()
        })
        .collect();
    Grid::from_rows(rows).unwrap()
}

/// Benchmark both vehicles on the sample grid.
fn bench_sample_report(c: &mut Criterion) {
    let grid = Grid::parse(SAMPLE_CITY).unwrap();

    c.bench_function("sample_report", |b| {
        b.iter(|| HeatLossReport::compute(black_box(&grid)))
    });
}

/// Benchmark building the heuristic field alone.
fn bench_heuristic_field(c: &mut Criterion) {
    let grid = large_grid();
    let goal = grid.bottom_right();

    c.bench_function("heuristic_field_141", |b| {
        b.iter(|| HeuristicField::build(black_box(&grid), goal))
    });
}

/// Benchmark the forward search with a prebuilt field.
fn bench_large_search(c: &mut Criterion) {
    let grid = large_grid();
    let field = HeuristicField::build(&grid, grid.bottom_right()).unwrap();

    let mut group = c.benchmark_group("search_141");
    group.sample_size(10);
    group.bench_function("ordinary", |b| {
        b.iter(|| find_path_with(black_box(&grid), &field, grid.top_left(), ORDINARY))
    });
    group.bench_function("long_haul", |b| {
        b.iter(|| find_path_with(black_box(&grid), &field, grid.top_left(), LONG_HAUL))
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_sample_report,
    bench_heuristic_field,
    bench_large_search
);
criterion_main!(benches);
