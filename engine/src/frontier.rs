//! Frontier disciplines: the pending-work collections driving exploration
//! order.
//!
//! Three interchangeable disciplines behind one push/pop contract:
//! first-in-first-out ([`FifoFrontier`], breadth-first order),
//! last-in-first-out ([`LifoFrontier`], depth-first order), and
//! priority-ordered by cost plus heuristic estimate ([`BestFirstFrontier`],
//! informed search). The expansion loop is generic over the discipline and
//! never hard-codes one.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};

use crate::contract::{Heuristic, SearchState};

/// A mutable ordered collection of pending states.
///
/// Owned exclusively by one run of the expansion loop; the discipline decides
/// which pending state [`Frontier::pop`] returns next.
pub trait Frontier<S> {
    /// Add a state to the pending collection.
    fn push(&mut self, state: S);

    /// Remove and return the next state per the discipline, or `None` when
    /// the frontier is empty.
    fn pop(&mut self) -> Option<S>;

    /// Whether the frontier holds no pending states.
    fn is_empty(&self) -> bool;

    /// Number of pending states.
    fn len(&self) -> usize;
}

/// First-in-first-out frontier. Produces breadth-first exploration order.
#[derive(Debug)]
pub struct FifoFrontier<S> {
    queue: VecDeque<S>,
}

impl<S> FifoFrontier<S> {
    /// Create a new empty frontier.
    #[must_use]
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
        }
    }
}

impl<S> Default for FifoFrontier<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Frontier<S> for FifoFrontier<S> {
    fn push(&mut self, state: S) {
        self.queue.push_back(state);
    }

    fn pop(&mut self) -> Option<S> {
        self.queue.pop_front()
    }

    fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}

/// Last-in-first-out frontier. Produces depth-first exploration order.
#[derive(Debug)]
pub struct LifoFrontier<S> {
    stack: Vec<S>,
}

impl<S> LifoFrontier<S> {
    /// Create a new empty frontier.
    #[must_use]
    pub fn new() -> Self {
        Self { stack: Vec::new() }
    }
}

impl<S> Default for LifoFrontier<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Frontier<S> for LifoFrontier<S> {
    fn push(&mut self, state: S) {
        self.stack.push(state);
    }

    fn pop(&mut self) -> Option<S> {
        self.stack.pop()
    }

    fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    fn len(&self) -> usize {
        self.stack.len()
    }
}

/// Ordering key for the best-first heap: evaluation value `f`, then insertion
/// order. Insertion-order tie-breaking is normative: equal-`f` states pop in
/// the order they were pushed, so identical inputs explore identically.
#[derive(Debug, Clone, Copy)]
struct EvalKey {
    f: f64,
    order: u64,
}

impl PartialEq for EvalKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == std::cmp::Ordering::Equal
    }
}

impl Eq for EvalKey {}

impl PartialOrd for EvalKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for EvalKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.f
            .total_cmp(&other.f)
            .then(self.order.cmp(&other.order))
    }
}

/// A heap entry wrapping a state with its ordering key.
///
/// `BinaryHeap` is a max-heap, so we use `Reverse<EvalKey>` to get min-heap
/// behavior (lowest `f` first).
#[derive(Debug)]
struct BestEntry<S> {
    key: Reverse<EvalKey>,
    state: S,
}

impl<S> PartialEq for BestEntry<S> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<S> Eq for BestEntry<S> {}

impl<S> PartialOrd for BestEntry<S> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<S> Ord for BestEntry<S> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key.cmp(&other.key)
    }
}

/// Priority frontier ordered by evaluation value
/// `f = solution_cost + estimate`, computed once when a state is pushed.
/// Produces the informed (A\*) exploration order.
#[derive(Debug)]
pub struct BestFirstFrontier<S> {
    heap: BinaryHeap<BestEntry<S>>,
    next_order: u64,
}

impl<S> BestFirstFrontier<S> {
    /// Create a new empty frontier.
    #[must_use]
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_order: 0,
        }
    }
}

impl<S> Default for BestFirstFrontier<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: SearchState + Heuristic> Frontier<S> for BestFirstFrontier<S> {
    fn push(&mut self, state: S) {
        let key = EvalKey {
            f: state.solution_cost() + state.estimate(),
            order: self.next_order,
        };
        self.next_order += 1;
        self.heap.push(BestEntry {
            key: Reverse(key),
            state,
        });
    }

    fn pop(&mut self) -> Option<S> {
        self.heap.pop().map(|e| e.state)
    }

    fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract::SearchAction;
    use std::fmt;

    #[derive(Clone)]
    struct Step;

    impl SearchAction for Step {
        fn cost(&self) -> f64 {
            1.0
        }
    }

    /// Fixture state with a fixed cost and estimate.
    struct Probe {
        id: u8,
        cost: f64,
        estimate: f64,
    }

    fn probe(id: u8, cost: f64, estimate: f64) -> Probe {
        Probe { id, cost, estimate }
    }

    impl fmt::Display for Probe {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "probe#{}", self.id)
        }
    }

    impl SearchState for Probe {
        type Action = Step;

        fn apply(&self, _action: &Step) -> Self {
            probe(self.id, self.cost + 1.0, self.estimate)
        }

        fn partial_solution(&self) -> &[Step] {
            &[]
        }

        fn solution_cost(&self) -> f64 {
            self.cost
        }

        fn applicable_actions(&self) -> Vec<Step> {
            Vec::new()
        }

        fn is_solution(&self) -> bool {
            false
        }

        fn level(&self) -> usize {
            0
        }

        fn identity_bytes(&self) -> Vec<u8> {
            vec![self.id]
        }
    }

    impl Heuristic for Probe {
        fn estimate(&self) -> f64 {
            self.estimate
        }
    }

    #[test]
    fn fifo_pops_in_insertion_order() {
        let mut frontier = FifoFrontier::new();
        frontier.push(probe(0, 0.0, 0.0));
        frontier.push(probe(1, 0.0, 0.0));
        frontier.push(probe(2, 0.0, 0.0));

        let ids: Vec<u8> = std::iter::from_fn(|| frontier.pop()).map(|p| p.id).collect();
        assert_eq!(ids, [0, 1, 2]);
        assert!(frontier.is_empty());
    }

    #[test]
    fn lifo_pops_most_recent_first() {
        let mut frontier = LifoFrontier::new();
        frontier.push(probe(0, 0.0, 0.0));
        frontier.push(probe(1, 0.0, 0.0));
        frontier.push(probe(2, 0.0, 0.0));

        let ids: Vec<u8> = std::iter::from_fn(|| frontier.pop()).map(|p| p.id).collect();
        assert_eq!(ids, [2, 1, 0]);
    }

    #[test]
    fn best_first_pops_lowest_evaluation_first() {
        let mut frontier = BestFirstFrontier::new();
        frontier.push(probe(0, 5.0, 5.0)); // f = 10
        frontier.push(probe(1, 2.0, 1.0)); // f = 3
        frontier.push(probe(2, 6.0, 9.0)); // f = 15

        let ids: Vec<u8> = std::iter::from_fn(|| frontier.pop()).map(|p| p.id).collect();
        assert_eq!(ids, [1, 0, 2]);
    }

    #[test]
    fn best_first_evaluation_sums_cost_and_estimate() {
        let mut frontier = BestFirstFrontier::new();
        frontier.push(probe(0, 9.0, 0.0)); // f = 9
        frontier.push(probe(1, 0.0, 8.0)); // f = 8: cheaper estimate wins

        assert_eq!(frontier.pop().map(|p| p.id), Some(1));
    }

    #[test]
    fn best_first_breaks_ties_by_insertion_order() {
        let mut frontier = BestFirstFrontier::new();
        frontier.push(probe(7, 1.0, 2.0));
        frontier.push(probe(3, 2.0, 1.0));
        frontier.push(probe(5, 0.0, 3.0));

        // All three have f = 3; pop order must match push order.
        let ids: Vec<u8> = std::iter::from_fn(|| frontier.pop()).map(|p| p.id).collect();
        assert_eq!(ids, [7, 3, 5]);
    }

    #[test]
    fn len_tracks_pending_states() {
        let mut frontier = LifoFrontier::new();
        assert_eq!(frontier.len(), 0);
        frontier.push(probe(0, 0.0, 0.0));
        frontier.push(probe(1, 0.0, 0.0));
        assert_eq!(frontier.len(), 2);
        let _ = frontier.pop();
        assert_eq!(frontier.len(), 1);
    }
}
