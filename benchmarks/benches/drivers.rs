use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};

use statewalk_benchmarks::{bench_maze, grid_state_pool, scrambled_tiles};
use statewalk_engine::frontier::{BestFirstFrontier, FifoFrontier, Frontier, LifoFrontier};
use statewalk_engine::search::{
    search_astar, search_breadth_first, search_depth_first, search_iterative_depth,
};

// ---------------------------------------------------------------------------
// Frontier push/pop
// ---------------------------------------------------------------------------

fn bench_frontier(c: &mut Criterion) {
    let mut group = c.benchmark_group("frontier_push_pop");
    for &size in &[16_usize, 128, 512] {
        group.bench_with_input(BenchmarkId::new("fifo", size), &size, |b, &n| {
            b.iter_batched(
                || grid_state_pool(n),
                |states| {
                    let mut frontier = FifoFrontier::new();
                    for state in states {
                        frontier.push(state);
                    }
                    while let Some(state) = frontier.pop() {
                        black_box(state);
                    }
                },
                BatchSize::SmallInput,
            );
        });
        group.bench_with_input(BenchmarkId::new("lifo", size), &size, |b, &n| {
            b.iter_batched(
                || grid_state_pool(n),
                |states| {
                    let mut frontier = LifoFrontier::new();
                    for state in states {
                        frontier.push(state);
                    }
                    while let Some(state) = frontier.pop() {
                        black_box(state);
                    }
                },
                BatchSize::SmallInput,
            );
        });
        group.bench_with_input(BenchmarkId::new("best_first", size), &size, |b, &n| {
            b.iter_batched(
                || grid_state_pool(n),
                |states| {
                    let mut frontier = BestFirstFrontier::new();
                    for state in states {
                        frontier.push(state);
                    }
                    while let Some(state) = frontier.pop() {
                        black_box(state);
                    }
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

// ---------------------------------------------------------------------------
// Drivers over the maze
// ---------------------------------------------------------------------------

fn bench_maze_drivers(c: &mut Criterion) {
    let mut group = c.benchmark_group("maze_drivers");
    group.bench_function("breadth_first", |b| {
        b.iter_batched(
            bench_maze,
            |state| black_box(search_breadth_first(state)),
            BatchSize::SmallInput,
        );
    });
    group.bench_function("depth_first", |b| {
        b.iter_batched(
            bench_maze,
            |state| black_box(search_depth_first(state)),
            BatchSize::SmallInput,
        );
    });
    group.bench_function("iterative_depth", |b| {
        b.iter_batched(
            bench_maze,
            |state| black_box(search_iterative_depth(state)),
            BatchSize::SmallInput,
        );
    });
    group.bench_function("astar", |b| {
        b.iter_batched(
            bench_maze,
            |state| black_box(search_astar(state)),
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

// ---------------------------------------------------------------------------
// Informed driver over the tile puzzle
// ---------------------------------------------------------------------------

fn bench_tiles_astar(c: &mut Criterion) {
    c.bench_function("tiles_astar", |b| {
        b.iter_batched(
            scrambled_tiles,
            |state| black_box(search_astar(state)),
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_frontier, bench_maze_drivers, bench_tiles_astar);
criterion_main!(benches);
