//! Shared fixtures for statewalk benchmark suites.

use statewalk_engine::contract::SearchState;
use statewalk_problems::grid::{GridMap, GridState};
use statewalk_problems::tiles::TileState;

/// A 7×7 maze with two competing corridors.
///
/// # Panics
///
/// Panics if the fixture rows fail to parse. Benchmark setup failures are
/// fatal.
#[must_use]
pub fn bench_maze() -> GridState {
    GridMap::parse(&[
        "S..#...",
        ".#.#.#.",
        ".#.#.#.",
        ".#...#.",
        ".#####.",
        ".......",
        "......G",
    ])
    .expect("maze fixture parses")
    .start_state()
}

/// A tile board a handful of moves from solved.
///
/// # Panics
///
/// Panics if the fixture board is rejected. Benchmark setup failures are
/// fatal.
#[must_use]
pub fn scrambled_tiles() -> TileState {
    TileState::new([1, 2, 3, 0, 4, 6, 7, 5, 8]).expect("board fixture is a permutation")
}

/// Enumerate `n` distinct-enough grid states by repeated expansion,
/// breadth-first from the maze start.
#[must_use]
pub fn grid_state_pool(n: usize) -> Vec<GridState> {
    let mut pool = vec![bench_maze()];
    let mut next = 0;
    while pool.len() < n && next < pool.len() {
        let successors: Vec<GridState> = pool[next]
            .applicable_actions()
            .iter()
            .map(|action| pool[next].apply(action))
            .collect();
        pool.extend(successors);
        next += 1;
    }
    pool.truncate(n);
    pool
}
