//! Heat-Loss Route Planner Library
//!
//! Finds the cheapest route across a grid of entry costs for vehicles that
//! must cover at least `min_run` cells before turning or stopping, may cover
//! at most `max_run` cells in a straight line, and never reverse.
//!
//! A query runs in two phases:
//! - [`HeuristicField::build`] computes an unconstrained lower bound on the
//!   remaining cost from every cell to the goal
//! - [`find_path_with`] runs A* over `(position, momentum)` states, using that
//!   field as its heuristic
//!
//! [`find_path`] does both for a single query. The grid is immutable and can
//! be shared between threads; every other structure belongs to one query.

pub mod error;
pub mod frontier;
pub mod geometry;
pub mod grid;
pub mod heuristic;
pub mod input;
pub mod momentum;
pub mod samples;
pub mod solver;

pub use error::{LoadError, PathError, ShapeError};
pub use geometry::{Coord, Direction};
pub use grid::{format_route, Grid};
pub use heuristic::{format_field, HeuristicField};
pub use momentum::{Momentum, SearchState, Vehicle, LONG_HAUL, ORDINARY};
pub use solver::{find_path, find_path_with, HeatLossReport, Route};
