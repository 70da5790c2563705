//! Bounded-run shortest path search.
//!
//! A* over `(position, momentum)` states:
//! - the heuristic is a [`HeuristicField`] built once per goal
//! - the best known cost of each search state is the cost of its latest
//!   frontier entry, so reaching a cell with different momentum never
//!   merges paths
//! - superseded frontier entries are invalidated lazily
//! - expansion only ever produces continue / turn-left / turn-right, so
//!   reversal needs no explicit check
//!
//! The first goal state popped with a run of at least `min_run` is optimal:
//! the heuristic is consistent and all entry costs are non-negative.

use std::time::{Duration, Instant};

use tracing::{debug, instrument, trace};

use crate::error::PathError;
use crate::frontier::Frontier;
use crate::geometry::Coord;
use crate::grid::Grid;
use crate::heuristic::HeuristicField;
use crate::momentum::{SearchState, Vehicle, LONG_HAUL, ORDINARY};

/// How many pops between checks of the progress clock.
const PROGRESS_CHECK_INTERVAL: u64 = 4096;

/// Minimum time between two progress lines.
const PROGRESS_PERIOD: Duration = Duration::from_secs(1);

/// A cheapest route and its total entry cost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// Sum of entry costs of every cell after the start.
    pub cost: u64,
    /// Visited cells from start to goal, both included.
    pub path: Vec<Coord>,
}

/// Finds the cheapest route from `start` to `goal` under the given run bounds.
///
/// Builds a fresh heuristic field for `goal`; use [`find_path_with`] to share
/// one field between several vehicles.
pub fn find_path(
    grid: &Grid,
    start: Coord,
    goal: Coord,
    min_run: u32,
    max_run: u32,
) -> Result<Route, PathError> {
    let vehicle = Vehicle::new(min_run, max_run);
    vehicle.validate()?;
    grid.check(start)?;
    let field = HeuristicField::build(grid, goal)?;
    find_path_with(grid, &field, start, vehicle)
}

/// Finds the cheapest route from `start` to the goal `field` was built for.
///
/// When `start` is the goal the route is `[start]` and costs nothing. This
/// holds on every grid, not only a single cell: the `min_run` stop rule is
/// not applied and no loop back to the start is searched for.
#[instrument(level = "debug", skip(grid, field), fields(goal = ?field.goal()))]
pub fn find_path_with(
    grid: &Grid,
    field: &HeuristicField,
    start: Coord,
    vehicle: Vehicle,
) -> Result<Route, PathError> {
    vehicle.validate()?;
    if (field.width(), field.height()) != (grid.width(), grid.height()) {
        return Err(PathError::FieldMismatch {
            field_width: field.width(),
            field_height: field.height(),
            grid_width: grid.width(),
            grid_height: grid.height(),
        });
    }
    grid.check(start)?;
    let goal = field.goal();

    if start == goal {
        debug!("start is the goal, returning an empty route");
        return Ok(Route {
            cost: 0,
            path: vec![start],
        });
    }

    let origin = SearchState::at_rest(start);
    let mut frontier: Frontier<SearchState> = Frontier::new();
    frontier.push(origin, 0, field.get(start), None);

    let mut pops: u64 = 0;
    let mut last_report = Instant::now();

    while let Some(id) = frontier.pop() {
        let entry = *frontier.entry(id);
        pops += 1;

        if entry.state.position == goal && vehicle.can_stop(entry.state.momentum) {
            let path: Vec<Coord> = frontier
                .path_to(id)
                .into_iter()
                .map(|state| state.position)
                .collect();
            debug!(
                cost = entry.cost,
                steps = path.len() - 1,
                expanded = pops,
                states = frontier.state_count(),
                "found route"
            );
            trace!(?path, "route cells");
            return Ok(Route {
                cost: entry.cost,
                path,
            });
        }

        if pops % PROGRESS_CHECK_INTERVAL == 0 && last_report.elapsed() >= PROGRESS_PERIOD {
            last_report = Instant::now();
            debug!(
                queue = frontier.len(),
                priority = entry.priority,
                depth = frontier.path_to(id).len(),
                "still searching"
            );
        }

        for momentum in vehicle.transitions(entry.state.momentum) {
            let Some(direction) = momentum.direction() else {
                continue;
            };
            let Some(next) = grid.step(entry.state.position, direction) else {
                continue;
            };

            let candidate = entry.cost + u64::from(grid.cost_unchecked(next));
            let state = SearchState {
                position: next,
                momentum,
            };
            if frontier
                .best_cost(&state)
                .is_some_and(|known| known <= candidate)
            {
                continue;
            }
            frontier.push(state, candidate, candidate + field.get(next), Some(id));
        }
    }

    debug!(
        expanded = pops,
        states = frontier.state_count(),
        "frontier exhausted"
    );
    Err(PathError::NoPathFound { start, goal })
}

/// Corner-to-corner routes for both standard vehicles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeatLossReport {
    pub ordinary: Route,
    pub long_haul: Route,
}

impl HeatLossReport {
    /// Routes both vehicles from the top-left to the bottom-right cell,
    /// sharing one heuristic field.
    pub fn compute(grid: &Grid) -> Result<Self, PathError> {
        let field = HeuristicField::build(grid, grid.bottom_right())?;
        let start = grid.top_left();
        Ok(Self {
            ordinary: find_path_with(grid, &field, start, ORDINARY)?,
            long_haul: find_path_with(grid, &field, start, LONG_HAUL)?,
        })
    }
}
