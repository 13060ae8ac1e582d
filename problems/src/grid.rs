//! Grid path-finding problem.
//!
//! A rectangular grid with walls, parsed from string rows. Moves are
//! orthogonal with unit cost; the heuristic is the Manhattan distance to the
//! goal, which never overestimates on a grid without diagonal moves and is
//! consistent, so the informed driver's optimality guarantee applies.
//!
//! Row strings use one character per cell:
//! - `'S'`: the start cell (exactly one)
//! - `'G'`: the goal cell (exactly one)
//! - `'#'`: a wall
//! - `'.'`: an open cell

use std::fmt;
use std::sync::Arc;

use statewalk_engine::contract::{Heuristic, SearchAction, SearchState};

/// Map geometry shared by every state of one search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridMap {
    width: usize,
    height: usize,
    walls: Vec<bool>,
    start: (usize, usize),
    goal: (usize, usize),
}

/// Typed failure for grid parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridParseError {
    /// No rows, or an empty first row.
    Empty,
    /// A row's length differs from the first row's.
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A character outside `{'S', 'G', '#', '.'}`.
    UnknownTile { row: usize, col: usize, tile: char },
    /// No `'S'` cell.
    MissingStart,
    /// No `'G'` cell.
    MissingGoal,
    /// A second `'S'` cell.
    DuplicateStart { row: usize, col: usize },
    /// A second `'G'` cell.
    DuplicateGoal { row: usize, col: usize },
}

impl fmt::Display for GridParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "grid has no cells"),
            Self::RaggedRow {
                row,
                expected,
                found,
            } => {
                write!(f, "row {row} has {found} cells, expected {expected}")
            }
            Self::UnknownTile { row, col, tile } => {
                write!(f, "unknown tile {tile:?} at row {row}, column {col}")
            }
            Self::MissingStart => write!(f, "grid has no start cell"),
            Self::MissingGoal => write!(f, "grid has no goal cell"),
            Self::DuplicateStart { row, col } => {
                write!(f, "second start cell at row {row}, column {col}")
            }
            Self::DuplicateGoal { row, col } => {
                write!(f, "second goal cell at row {row}, column {col}")
            }
        }
    }
}

impl std::error::Error for GridParseError {}

impl GridMap {
    /// Parse a map from string rows, one character per cell.
    ///
    /// # Errors
    ///
    /// Returns a [`GridParseError`] if the rows are empty or ragged, contain
    /// an unknown character, or do not contain exactly one start and one
    /// goal cell.
    pub fn parse(rows: &[&str]) -> Result<Self, GridParseError> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.chars().count());
        if height == 0 || width == 0 {
            return Err(GridParseError::Empty);
        }

        let mut walls = vec![false; width * height];
        let mut start = None;
        let mut goal = None;

        for (row, cells) in rows.iter().enumerate() {
            let found = cells.chars().count();
            if found != width {
                return Err(GridParseError::RaggedRow {
                    row,
                    expected: width,
                    found,
                });
            }
            for (col, tile) in cells.chars().enumerate() {
                match tile {
                    '.' => {}
                    '#' => walls[row * width + col] = true,
                    'S' => {
                        if start.is_some() {
                            return Err(GridParseError::DuplicateStart { row, col });
                        }
                        start = Some((row, col));
                    }
                    'G' => {
                        if goal.is_some() {
                            return Err(GridParseError::DuplicateGoal { row, col });
                        }
                        goal = Some((row, col));
                    }
                    _ => return Err(GridParseError::UnknownTile { row, col, tile }),
                }
            }
        }

        let start = start.ok_or(GridParseError::MissingStart)?;
        let goal = goal.ok_or(GridParseError::MissingGoal)?;
        Ok(Self {
            width,
            height,
            walls,
            start,
            goal,
        })
    }

    /// Map width in cells.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Map height in cells.
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// The search state at the start cell with an empty partial solution.
    #[must_use]
    pub fn start_state(self) -> GridState {
        let position = self.start;
        GridState {
            map: Arc::new(self),
            position,
            path: Vec::new(),
        }
    }

    fn is_open(&self, row: usize, col: usize) -> bool {
        row < self.height && col < self.width && !self.walls[row * self.width + col]
    }
}

/// One orthogonal step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridMove {
    Up,
    Down,
    Left,
    Right,
}

impl GridMove {
    const ALL: [GridMove; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    fn target(self, (row, col): (usize, usize)) -> Option<(usize, usize)> {
        match self {
            Self::Up => row.checked_sub(1).map(|r| (r, col)),
            Self::Down => Some((row + 1, col)),
            Self::Left => col.checked_sub(1).map(|c| (row, c)),
            Self::Right => Some((row, col + 1)),
        }
    }
}

impl SearchAction for GridMove {
    fn cost(&self) -> f64 {
        1.0
    }
}

/// A position on the map together with the moves that led there.
#[derive(Debug, Clone)]
pub struct GridState {
    map: Arc<GridMap>,
    position: (usize, usize),
    path: Vec<GridMove>,
}

impl GridState {
    /// Current position as `(row, col)`.
    #[must_use]
    pub fn position(&self) -> (usize, usize) {
        self.position
    }
}

impl fmt::Display for GridState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.position.0, self.position.1)
    }
}

impl SearchState for GridState {
    type Action = GridMove;

    fn apply(&self, action: &GridMove) -> Self {
        let position = action
            .target(self.position)
            .unwrap_or(self.position);
        let mut path = self.path.clone();
        path.push(*action);
        Self {
            map: Arc::clone(&self.map),
            position,
            path,
        }
    }

    fn partial_solution(&self) -> &[GridMove] {
        &self.path
    }

    fn solution_cost(&self) -> f64 {
        self.path.iter().map(SearchAction::cost).sum()
    }

    fn applicable_actions(&self) -> Vec<GridMove> {
        GridMove::ALL
            .iter()
            .filter(|m| {
                m.target(self.position)
                    .is_some_and(|(r, c)| self.map.is_open(r, c))
            })
            .copied()
            .collect()
    }

    fn is_solution(&self) -> bool {
        self.position == self.map.goal
    }

    fn level(&self) -> usize {
        self.path.len()
    }

    fn identity_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(16);
        bytes.extend_from_slice(&self.position.0.to_le_bytes());
        bytes.extend_from_slice(&self.position.1.to_le_bytes());
        bytes
    }
}

impl Heuristic for GridState {
    #[allow(clippy::cast_precision_loss)]
    fn estimate(&self) -> f64 {
        let (row, col) = self.position;
        let (goal_row, goal_col) = self.map.goal;
        (row.abs_diff(goal_row) + col.abs_diff(goal_col)) as f64
    }
}
