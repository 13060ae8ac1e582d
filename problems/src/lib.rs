//! Statewalk Problems: concrete search problems for the engine.
//!
//! Each module implements the `statewalk_engine` contracts for one problem
//! domain. Problems provide domain data only; exploration order, duplicate
//! detection and statistics are owned by the engine.
//!
//! - [`grid`] — rectangular grid path-finding with walls, parsed from
//!   string rows; Manhattan-distance heuristic.
//! - [`tiles`] — 3×3 sliding-tile puzzle; Manhattan-distance heuristic over
//!   tile positions.
//! - [`jugs`] — two-jug measuring problem with non-uniform action costs.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod grid;
pub mod jugs;
pub mod tiles;
