//! Statewalk Engine: domain-agnostic state-space search.
//!
//! Given an opaque problem state that can enumerate its own successor
//! actions, report its cumulative cost, and say whether it is a goal, the
//! engine explores the implied search graph and returns an action sequence
//! leading to a goal (if one is reachable) together with exploration
//! statistics.
//!
//! This crate knows nothing about any concrete problem; it depends only on
//! the contracts in [`contract`]. Concrete problem definitions live in
//! `statewalk_problems`.
//!
//! # Crate dependency graph
//!
//! ```text
//! statewalk_engine  ←  statewalk_problems
//! (contracts, frontier,  (grid, tiles, jugs)
//!  expansion loop)
//! ```
//!
//! # Key types
//!
//! - [`contract::SearchState`] — the capability trait a searchable problem
//!   implements
//! - [`contract::Heuristic`] — optional capability required by the informed
//!   driver
//! - [`frontier::Frontier`] — the pluggable pending-work collection driving
//!   exploration order
//! - [`stats::SearchStats`] — per-run exploration counters
//! - [`policy::SearchPolicy`] — optional node/depth budgets
//! - [`search`] — the four entry operations and their budgeted variants

#![forbid(unsafe_code)]

pub mod contract;
pub mod fingerprint;
pub mod frontier;
pub mod policy;
pub mod search;
pub mod stats;
