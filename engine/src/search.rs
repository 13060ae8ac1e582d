//! Search entry points and the shared expansion loop.
//!
//! All four drivers run the same loop; they differ only in the frontier
//! discipline they select and, for iterative deepening, in how often the
//! loop is re-run. One call runs the entire search to completion on the
//! calling thread; each run owns its frontier and visited set exclusively,
//! so concurrent independent calls are safe.

use std::collections::HashSet;

use crate::contract::{Heuristic, SearchState};
use crate::fingerprint::state_fingerprint;
use crate::frontier::{BestFirstFrontier, FifoFrontier, Frontier, LifoFrontier};
use crate::policy::SearchPolicy;
use crate::stats::SearchStats;

/// Uninformed breadth-first search
/// (<https://en.wikipedia.org/wiki/Breadth-first_search>).
///
/// Explores the graph implied by `initial` in first-in-first-out order and
/// returns the action sequence of the first goal found (the empty sequence
/// if the graph is exhausted without one) together with the run's
/// statistics. On a finite graph with a reachable goal the returned sequence
/// has the fewest actions among all solutions.
#[must_use]
pub fn search_breadth_first<S: SearchState>(initial: S) -> (Vec<S::Action>, SearchStats) {
    search_breadth_first_with_policy(initial, &SearchPolicy::unbounded())
}

/// [`search_breadth_first`] bounded by `policy`.
#[must_use]
pub fn search_breadth_first_with_policy<S: SearchState>(
    initial: S,
    policy: &SearchPolicy,
) -> (Vec<S::Action>, SearchStats) {
    find_first_solution(
        initial,
        FifoFrontier::new(),
        policy.max_depth,
        policy.max_nodes,
    )
}

/// Uninformed depth-first search
/// (<https://en.wikipedia.org/wiki/Depth-first_search>).
///
/// Explores in last-in-first-out order. The first goal found is returned; it
/// need not be shortest or cheapest. On an unbounded-depth graph this driver
/// does not terminate; bound it with [`search_depth_first_with_policy`] if
/// the graph's depth is not known to be finite.
#[must_use]
pub fn search_depth_first<S: SearchState>(initial: S) -> (Vec<S::Action>, SearchStats) {
    search_depth_first_with_policy(initial, &SearchPolicy::unbounded())
}

/// [`search_depth_first`] bounded by `policy`.
#[must_use]
pub fn search_depth_first_with_policy<S: SearchState>(
    initial: S,
    policy: &SearchPolicy,
) -> (Vec<S::Action>, SearchStats) {
    find_first_solution(
        initial,
        LifoFrontier::new(),
        policy.max_depth,
        policy.max_nodes,
    )
}

/// Iterative-deepening depth-first search
/// (<https://en.wikipedia.org/wiki/Iterative_deepening_depth-first_search>).
///
/// Re-runs a depth-bounded depth-first search with the bound raised by one
/// each round, each round with a fresh frontier and visited set. Statistics
/// are aggregated across rounds: counters summed, `max_depth` maximised.
/// Stops with the first non-empty solution, or reports no-solution once the
/// requested depth exceeds the depth actually reached in the most recent
/// round, which assumes every path in the graph is finite in depth.
///
/// `initial` is cloned once per round.
#[must_use]
pub fn search_iterative_depth<S>(initial: S) -> (Vec<S::Action>, SearchStats)
where
    S: SearchState + Clone,
{
    search_iterative_depth_with_policy(initial, &SearchPolicy::unbounded())
}

/// [`search_iterative_depth`] bounded by `policy`.
///
/// A `max_depth` budget caps the deepening rounds; a `max_nodes` budget is
/// drawn down across rounds.
#[must_use]
pub fn search_iterative_depth_with_policy<S>(
    initial: S,
    policy: &SearchPolicy,
) -> (Vec<S::Action>, SearchStats)
where
    S: SearchState + Clone,
{
    let mut stats = SearchStats::new();
    let mut depth = 1_usize;

    loop {
        if policy.max_depth.is_some_and(|cap| depth > cap) {
            return (Vec::new(), stats);
        }
        let remaining = policy
            .max_nodes
            .map(|cap| cap.saturating_sub(stats.nodes_explored));
        if remaining == Some(0) {
            return (Vec::new(), stats);
        }

        let (solution, round) =
            find_first_solution(initial.clone(), LifoFrontier::new(), Some(depth), remaining);
        stats.absorb(&round);

        if !solution.is_empty() {
            return (solution, stats);
        }
        // The reachable graph's depth has been exhausted.
        if depth > round.max_depth {
            return (Vec::new(), stats);
        }
        depth += 1;
    }
}

/// Informed best-first search, A\*
/// (<https://en.wikipedia.org/wiki/A*_search_algorithm>).
///
/// Explores in order of `solution_cost + estimate`, requiring the state type
/// to carry the [`Heuristic`] capability. With an admissible, consistent
/// estimate the first solution found is the cheapest reachable one. A
/// cheaper path to an already-expanded state is counted as a duplicate and
/// never reopened, which is why consistency is required for the optimality
/// guarantee.
#[must_use]
pub fn search_astar<S>(initial: S) -> (Vec<S::Action>, SearchStats)
where
    S: SearchState + Heuristic,
{
    search_astar_with_policy(initial, &SearchPolicy::unbounded())
}

/// [`search_astar`] bounded by `policy`.
#[must_use]
pub fn search_astar_with_policy<S>(
    initial: S,
    policy: &SearchPolicy,
) -> (Vec<S::Action>, SearchStats)
where
    S: SearchState + Heuristic,
{
    find_first_solution(
        initial,
        BestFirstFrontier::new(),
        policy.max_depth,
        policy.max_nodes,
    )
}

/// The expansion loop shared by every driver.
///
/// Pops one state at a time from `frontier`: a goal ends the search, a
/// duplicate of an already-expanded state is discarded, anything else is
/// expanded and its successors pushed, subject to the depth bound. The
/// node budget, when present, cuts the run off after that many explored
/// states; the goal test still runs on the pop that would exceed it.
fn find_first_solution<S, F>(
    initial: S,
    mut frontier: F,
    depth_bound: Option<usize>,
    max_nodes: Option<u64>,
) -> (Vec<S::Action>, SearchStats)
where
    S: SearchState,
    F: Frontier<S>,
{
    let mut stats = SearchStats::new();
    let mut visited: HashSet<String> = HashSet::new();

    frontier.push(initial);

    while let Some(state) = frontier.pop() {
        if state.is_solution() {
            stats.nodes_explored += 1;
            stats.solutions += 1;
            stats.record_depth(state.level());
            return (state.partial_solution().to_vec(), stats);
        }

        // First-seen-wins: a state equal to one already expanded is skipped.
        if !visited.insert(state_fingerprint(&state)) {
            stats.nodes_duplicated += 1;
            continue;
        }

        stats.nodes_explored += 1;
        stats.record_depth(state.level());

        if max_nodes.is_some_and(|cap| stats.nodes_explored >= cap) {
            break;
        }

        if depth_bound.map_or(true, |bound| state.level() < bound) {
            for action in state.applicable_actions() {
                frontier.push(state.apply(&action));
            }
        }
    }

    (Vec::new(), stats)
}
