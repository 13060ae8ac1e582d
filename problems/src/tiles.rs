//! 3×3 sliding-tile puzzle.
//!
//! Tiles 1–8 on a 3×3 board with one blank (0). A move slides a tile into
//! the blank; moves are named for the direction the blank travels. The
//! heuristic is the summed Manhattan distance of every tile from its solved
//! position, which is admissible and consistent for unit-cost moves.

use std::fmt;

use statewalk_engine::contract::{Heuristic, SearchAction, SearchState};

const SIDE: usize = 3;
const CELLS: usize = SIDE * SIDE;

/// The solved arrangement: tiles in order, blank last.
const SOLVED: [u8; CELLS] = [1, 2, 3, 4, 5, 6, 7, 8, 0];

/// One blank move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileMove {
    Up,
    Down,
    Left,
    Right,
}

impl SearchAction for TileMove {
    fn cost(&self) -> f64 {
        1.0
    }
}

/// Typed failure for board construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TileSetupError {
    /// The board is not a permutation of 0–8.
    NotAPermutation,
}

impl fmt::Display for TileSetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAPermutation => write!(f, "board is not a permutation of 0-8"),
        }
    }
}

impl std::error::Error for TileSetupError {}

/// A board arrangement together with the moves that led there.
#[derive(Debug, Clone)]
pub struct TileState {
    board: [u8; CELLS],
    path: Vec<TileMove>,
}

impl TileState {
    /// Build a state from a board given in row-major order, blank as 0.
    ///
    /// # Errors
    ///
    /// Returns [`TileSetupError::NotAPermutation`] unless every value 0–8
    /// appears exactly once.
    pub fn new(board: [u8; CELLS]) -> Result<Self, TileSetupError> {
        let mut seen = [false; CELLS];
        for &tile in &board {
            if usize::from(tile) >= CELLS || seen[usize::from(tile)] {
                return Err(TileSetupError::NotAPermutation);
            }
            seen[usize::from(tile)] = true;
        }
        Ok(Self {
            board,
            path: Vec::new(),
        })
    }

    /// The solved board.
    #[must_use]
    pub fn solved() -> Self {
        Self {
            board: SOLVED,
            path: Vec::new(),
        }
    }

    fn blank_index(&self) -> usize {
        self.board
            .iter()
            .position(|&t| t == 0)
            .unwrap_or_default()
    }
}

impl fmt::Display for TileState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &tile) in self.board.iter().enumerate() {
            if i > 0 {
                write!(f, "{}", if i % SIDE == 0 { " | " } else { " " })?;
            }
            if tile == 0 {
                write!(f, "_")?;
            } else {
                write!(f, "{tile}")?;
            }
        }
        Ok(())
    }
}

impl SearchState for TileState {
    type Action = TileMove;

    fn apply(&self, action: &TileMove) -> Self {
        let blank = self.blank_index();
        let (row, col) = (blank / SIDE, blank % SIDE);
        let target = match action {
            TileMove::Up => (row.wrapping_sub(1), col),
            TileMove::Down => (row + 1, col),
            TileMove::Left => (row, col.wrapping_sub(1)),
            TileMove::Right => (row, col + 1),
        };
        let mut board = self.board;
        if target.0 < SIDE && target.1 < SIDE {
            board.swap(blank, target.0 * SIDE + target.1);
        }
        let mut path = self.path.clone();
        path.push(*action);
        Self { board, path }
    }

    fn partial_solution(&self) -> &[TileMove] {
        &self.path
    }

    fn solution_cost(&self) -> f64 {
        self.path.iter().map(SearchAction::cost).sum()
    }

    fn applicable_actions(&self) -> Vec<TileMove> {
        let blank = self.blank_index();
        let (row, col) = (blank / SIDE, blank % SIDE);
        let mut moves = Vec::with_capacity(4);
        if row > 0 {
            moves.push(TileMove::Up);
        }
        if row + 1 < SIDE {
            moves.push(TileMove::Down);
        }
        if col > 0 {
            moves.push(TileMove::Left);
        }
        if col + 1 < SIDE {
            moves.push(TileMove::Right);
        }
        moves
    }

    fn is_solution(&self) -> bool {
        self.board == SOLVED
    }

    fn level(&self) -> usize {
        self.path.len()
    }

    fn identity_bytes(&self) -> Vec<u8> {
        self.board.to_vec()
    }
}

impl Heuristic for TileState {
    #[allow(clippy::cast_precision_loss)]
    fn estimate(&self) -> f64 {
        let mut distance = 0_usize;
        for (index, &tile) in self.board.iter().enumerate() {
            if tile == 0 {
                continue;
            }
            let solved = usize::from(tile) - 1;
            distance += (index / SIDE).abs_diff(solved / SIDE);
            distance += (index % SIDE).abs_diff(solved % SIDE);
        }
        distance as f64
    }
}
