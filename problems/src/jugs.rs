//! Two-jug measuring problem.
//!
//! Two jugs of fixed capacity; the goal is a jug holding exactly the target
//! volume. An action fills a jug from the tap, empties it onto the ground,
//! or pours one jug into the other until the source is empty or the
//! destination is full. Action cost is the volume moved, so the cheapest
//! solution is not necessarily the one with the fewest steps, which is what
//! makes this problem a good exercise for the informed driver.

use std::fmt;

use statewalk_engine::contract::{Heuristic, SearchAction, SearchState};

/// What a jug action does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JugOp {
    FillLeft,
    FillRight,
    EmptyLeft,
    EmptyRight,
    PourLeftRight,
    PourRightLeft,
}

/// A jug operation together with the volume it moves.
///
/// The volume is fixed when the action is enumerated, so the action carries
/// its own cost as the contract requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JugAction {
    op: JugOp,
    volume: u8,
}

impl JugAction {
    /// The operation performed.
    #[must_use]
    pub fn op(&self) -> JugOp {
        self.op
    }
}

impl SearchAction for JugAction {
    fn cost(&self) -> f64 {
        f64::from(self.volume)
    }
}

/// Typed failure for problem construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JugSetupError {
    /// A jug with capacity zero can never hold anything.
    ZeroCapacity,
    /// The target volume does not fit in either jug.
    TargetExceedsCapacity { target: u8, largest: u8 },
}

impl fmt::Display for JugSetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroCapacity => write!(f, "jug capacities must be non-zero"),
            Self::TargetExceedsCapacity { target, largest } => {
                write!(
                    f,
                    "target volume {target} exceeds the largest jug ({largest})"
                )
            }
        }
    }
}

impl std::error::Error for JugSetupError {}

/// Jug fill levels together with the actions that led there.
#[derive(Debug, Clone)]
pub struct JugState {
    capacity: (u8, u8),
    target: u8,
    levels: (u8, u8),
    path: Vec<JugAction>,
    cost: f64,
}

impl JugState {
    /// Build the initial state: both jugs empty.
    ///
    /// # Errors
    ///
    /// Returns a [`JugSetupError`] if a capacity is zero or the target does
    /// not fit in either jug.
    pub fn new(left: u8, right: u8, target: u8) -> Result<Self, JugSetupError> {
        if left == 0 || right == 0 {
            return Err(JugSetupError::ZeroCapacity);
        }
        let largest = left.max(right);
        if target > largest {
            return Err(JugSetupError::TargetExceedsCapacity { target, largest });
        }
        Ok(Self {
            capacity: (left, right),
            target,
            levels: (0, 0),
            path: Vec::new(),
            cost: 0.0,
        })
    }

    /// Current fill levels as `(left, right)`.
    #[must_use]
    pub fn levels(&self) -> (u8, u8) {
        self.levels
    }
}

impl fmt::Display for JugState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "left {}/{}, right {}/{}",
            self.levels.0, self.capacity.0, self.levels.1, self.capacity.1
        )
    }
}

impl SearchState for JugState {
    type Action = JugAction;

    fn apply(&self, action: &JugAction) -> Self {
        let (left, right) = self.levels;
        let v = action.volume;
        let levels = match action.op {
            JugOp::FillLeft => (left + v, right),
            JugOp::FillRight => (left, right + v),
            JugOp::EmptyLeft => (left - v, right),
            JugOp::EmptyRight => (left, right - v),
            JugOp::PourLeftRight => (left - v, right + v),
            JugOp::PourRightLeft => (left + v, right - v),
        };
        let mut path = self.path.clone();
        path.push(*action);
        Self {
            capacity: self.capacity,
            target: self.target,
            levels,
            path,
            cost: self.cost + action.cost(),
        }
    }

    fn partial_solution(&self) -> &[JugAction] {
        &self.path
    }

    fn solution_cost(&self) -> f64 {
        self.cost
    }

    fn applicable_actions(&self) -> Vec<JugAction> {
        let (left, right) = self.levels;
        let (cap_left, cap_right) = self.capacity;
        let candidates = [
            (JugOp::FillLeft, cap_left - left),
            (JugOp::FillRight, cap_right - right),
            (JugOp::EmptyLeft, left),
            (JugOp::EmptyRight, right),
            (JugOp::PourLeftRight, left.min(cap_right - right)),
            (JugOp::PourRightLeft, right.min(cap_left - left)),
        ];
        candidates
            .into_iter()
            .filter(|&(_, volume)| volume > 0)
            .map(|(op, volume)| JugAction { op, volume })
            .collect()
    }

    fn is_solution(&self) -> bool {
        self.levels.0 == self.target || self.levels.1 == self.target
    }

    fn level(&self) -> usize {
        self.path.len()
    }

    fn identity_bytes(&self) -> Vec<u8> {
        vec![self.levels.0, self.levels.1]
    }
}

impl Heuristic for JugState {
    /// Zero on a goal, one otherwise. Every action moves at least one unit
    /// of water, so this never overestimates and is consistent.
    fn estimate(&self) -> f64 {
        if self.is_solution() {
            0.0
        } else {
            1.0
        }
    }
}
