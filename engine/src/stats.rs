//! Exploration statistics.

use std::fmt;

/// Counters accumulated by one run of the expansion loop.
///
/// Iterative deepening folds one record per round into an aggregate via
/// [`SearchStats::absorb`]: counters are summed, `max_depth` is maximised.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// States popped from the frontier and expanded (or returned as goals).
    pub nodes_explored: u64,
    /// States popped but discarded because an equal state was already
    /// expanded.
    pub nodes_duplicated: u64,
    /// Deepest level reached by an explored state.
    pub max_depth: usize,
    /// Goal states found (0 or 1 per run; summed across rounds).
    pub solutions: u64,
}

impl SearchStats {
    /// Create a zeroed record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a depth reached, keeping the maximum.
    pub fn record_depth(&mut self, depth: usize) {
        if depth > self.max_depth {
            self.max_depth = depth;
        }
    }

    /// Fold another record into this one: counters summed, depth maximised.
    pub fn absorb(&mut self, other: &SearchStats) {
        self.nodes_explored += other.nodes_explored;
        self.nodes_duplicated += other.nodes_duplicated;
        self.max_depth = self.max_depth.max(other.max_depth);
        self.solutions += other.solutions;
    }

    /// Diagnostic rendering as a `serde_json::Value`.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "nodes_explored": self.nodes_explored,
            "nodes_duplicated": self.nodes_duplicated,
            "max_depth": self.max_depth,
            "solutions": self.solutions,
        })
    }
}

impl fmt::Display for SearchStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[explored: {}, duplicated: {}, max depth: {}, solutions: {}]",
            self.nodes_explored, self.nodes_duplicated, self.max_depth, self.solutions
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_record_is_zeroed() {
        let stats = SearchStats::new();
        assert_eq!(stats, SearchStats::default());
        assert_eq!(stats.nodes_explored, 0);
        assert_eq!(stats.max_depth, 0);
    }

    #[test]
    fn record_depth_keeps_maximum() {
        let mut stats = SearchStats::new();
        stats.record_depth(3);
        stats.record_depth(1);
        assert_eq!(stats.max_depth, 3);
        stats.record_depth(7);
        assert_eq!(stats.max_depth, 7);
    }

    #[test]
    fn absorb_sums_counters_and_maximises_depth() {
        let mut total = SearchStats {
            nodes_explored: 10,
            nodes_duplicated: 1,
            max_depth: 4,
            solutions: 0,
        };
        let round = SearchStats {
            nodes_explored: 5,
            nodes_duplicated: 2,
            max_depth: 3,
            solutions: 1,
        };
        total.absorb(&round);
        assert_eq!(total.nodes_explored, 15);
        assert_eq!(total.nodes_duplicated, 3);
        assert_eq!(total.max_depth, 4, "depth is maximised, not summed");
        assert_eq!(total.solutions, 1);
    }

    #[test]
    fn display_renders_all_four_counters() {
        let stats = SearchStats {
            nodes_explored: 12,
            nodes_duplicated: 3,
            max_depth: 5,
            solutions: 1,
        };
        let rendered = stats.to_string();
        assert_eq!(
            rendered,
            "[explored: 12, duplicated: 3, max depth: 5, solutions: 1]"
        );
    }

    #[test]
    fn json_rendering_carries_all_four_counters() {
        let stats = SearchStats {
            nodes_explored: 12,
            nodes_duplicated: 3,
            max_depth: 5,
            solutions: 1,
        };
        let value = stats.to_json_value();
        assert_eq!(value["nodes_explored"], 12);
        assert_eq!(value["nodes_duplicated"], 3);
        assert_eq!(value["max_depth"], 5);
        assert_eq!(value["solutions"], 1);
    }
}
