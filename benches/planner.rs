//! Planner benchmarks.
//!
//! Measures the expansion loop on open ground, through an obstacle field,
//! and on a sealed region the search must exhaust before reporting failure.
//!
//! Run with: `cargo bench`
//! View HTML reports in: `target/criterion/`

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use marga_plan::{AStarPlanner, GridBounds, GridCoord, SearchConfig, SparseCostMap};

// ============================================================================
// Fixtures
// ============================================================================

/// Scattered walls over a square region, corner cells kept clear
fn create_obstacle_field(size: i32, wall_fraction: f64, seed: u64) -> SparseCostMap {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut map = SparseCostMap::new();

    for x in 0..size {
        for y in 0..size {
            if rng.random_bool(wall_fraction) {
                map.block(GridCoord::new(x, y));
            }
        }
    }

    map.remove(GridCoord::new(0, 0));
    map.remove(GridCoord::new(size - 1, size - 1));
    map
}

fn field_bounds(size: i32) -> GridBounds {
    GridBounds::new(GridCoord::new(0, 0), GridCoord::new(size - 1, size - 1))
}

// ============================================================================
// Benchmarks
// ============================================================================

fn bench_open_grid(c: &mut Criterion) {
    let map = SparseCostMap::new();
    let planner = AStarPlanner::with_defaults(&map);
    let start = GridCoord::new(0, 0);
    let goal = GridCoord::new(60, 40);

    c.bench_function("open_grid_60x40", |b| {
        b.iter(|| planner.find_path(black_box(start), black_box(goal)))
    });
}

fn bench_obstacle_field(c: &mut Criterion) {
    let size = 64;
    let map = create_obstacle_field(size, 0.25, 42);
    let config = SearchConfig::default().with_bounds(field_bounds(size));
    let planner = AStarPlanner::new(&map, config);
    let start = GridCoord::new(0, 0);
    let goal = GridCoord::new(size - 1, size - 1);

    c.bench_function("obstacle_field_64", |b| {
        b.iter(|| planner.find_path(black_box(start), black_box(goal)))
    });
}

fn bench_exhaust_region(c: &mut Criterion) {
    // Sealed goal: the search visits the whole region before giving up
    let size = 48;
    let mut map = SparseCostMap::new();
    let goal = GridCoord::new(size - 2, size - 2);
    for neighbor in goal.neighbors_8() {
        map.block(neighbor);
    }
    let config = SearchConfig::default().with_bounds(field_bounds(size));
    let planner = AStarPlanner::new(&map, config);
    let start = GridCoord::new(1, 1);

    c.bench_function("exhaust_region_48", |b| {
        b.iter(|| planner.find_path(black_box(start), black_box(goal)))
    });
}

criterion_group!(
    benches,
    bench_open_grid,
    bench_obstacle_field,
    bench_exhaust_region
);
criterion_main!(benches);
