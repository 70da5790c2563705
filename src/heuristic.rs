//! Admissible cost-to-go field.
//!
//! A reverse Dijkstra from the goal that ignores every run-length rule. Those
//! rules only remove moves, so the unconstrained remaining cost is a lower
//! bound on the constrained one and is safe to use as the A* heuristic.

use tracing::debug;

use crate::error::{PathError, ShapeError};
use crate::frontier::Frontier;
use crate::geometry::{Coord, Direction};
use crate::grid::Grid;

/// Per-cell lower bound on the cost of reaching one goal.
///
/// `get(goal)` is 0; every other cell holds the cheapest unconstrained sum
/// of entry costs from that cell to the goal, excluding the cell's own cost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeuristicField {
    width: usize,
    goal: Coord,
    bounds: Vec<u64>,
}

impl HeuristicField {
    /// Runs the reverse relaxation from `goal` over the whole grid.
    pub fn build(grid: &Grid, goal: Coord) -> Result<Self, PathError> {
        if grid.is_empty() {
            return Err(ShapeError::NoRows.into());
        }
        grid.check(goal)?;

        let mut bounds = vec![u64::MAX; grid.len()];
        let mut settled = vec![false; grid.len()];
        let mut frontier: Frontier<Coord> = Frontier::new();

        bounds[grid.index(goal)] = 0;
        frontier.push(goal, 0, 0, None);

        while let Some(id) = frontier.pop() {
            let entry = *frontier.entry(id);
            let at = grid.index(entry.state);
            if settled[at] {
                continue;
            }
            settled[at] = true;

            // entering the settled cell from any neighbour costs its own weight
            let through = entry.cost + u64::from(grid.cost_unchecked(entry.state));
            for dir in Direction::ALL {
                let Some(neighbor) = grid.step(entry.state, dir) else {
                    continue;
                };
                let slot = grid.index(neighbor);
                if settled[slot] || through >= bounds[slot] {
                    continue;
                }
                bounds[slot] = through;
                frontier.push(neighbor, through, through, Some(id));
            }
        }

        debug!(
            goal = ?goal,
            cells = grid.len(),
            pushed = frontier.arena_len(),
            "built heuristic field"
        );

        Ok(Self {
            width: grid.width(),
            goal,
            bounds,
        })
    }

    /// Lower bound for `coord`. The coordinate must lie in the grid the
    /// field was built from.
    #[inline]
    pub fn get(&self, coord: Coord) -> u64 {
        self.bounds[coord.1 * self.width + coord.0]
    }

    pub fn goal(&self) -> Coord {
        self.goal
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.bounds.len() / self.width
    }
}

/// Renders the field as a right-aligned table, one grid row per line.
pub fn format_field(field: &HeuristicField) -> String {
    let cell_width = field
        .bounds
        .iter()
        .max()
        .map_or(1, |max| max.to_string().len());

    let mut output = String::new();
    for row in field.bounds.chunks(field.width) {
        let line: Vec<String> = row
            .iter()
            .map(|bound| format!("{bound:>cell_width$}"))
            .collect();
        output.push_str(&line.join(" "));
        output.push('\n');
    }
    output
}
