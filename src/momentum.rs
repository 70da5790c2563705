//! Directional momentum and the vehicles that constrain it.
//!
//! A search state is a position plus the run the vehicle is currently on.
//! Two arrivals at the same cell with different momentum are different
//! states, because they allow different continuations.

use crate::error::PathError;
use crate::geometry::{Coord, Direction};

/// The direction of travel and how many cells have been covered in it since
/// the last turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Momentum {
    /// No direction committed yet. Only valid at the start.
    Rest,
    /// `run` is at least 1.
    Moving { direction: Direction, run: u32 },
}

impl Momentum {
    #[inline]
    pub fn run_length(self) -> u32 {
        match self {
            Momentum::Rest => 0,
            Momentum::Moving { run, .. } => run,
        }
    }

    #[inline]
    pub fn direction(self) -> Option<Direction> {
        match self {
            Momentum::Rest => None,
            Momentum::Moving { direction, .. } => Some(direction),
        }
    }
}

/// The unit of state the path engine tracks costs for.
///
/// Ordered by row, then column, then momentum; this is the frontier's
/// tie-break between equal priorities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SearchState {
    pub position: Coord,
    pub momentum: Momentum,
}

impl SearchState {
    /// The state a query starts from.
    pub fn at_rest(position: Coord) -> Self {
        Self {
            position,
            momentum: Momentum::Rest,
        }
    }

    #[inline]
    fn order_key(&self) -> (usize, usize, Momentum) {
        (self.position.1, self.position.0, self.momentum)
    }
}

impl Ord for SearchState {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.order_key().cmp(&other.order_key())
    }
}

impl PartialOrd for SearchState {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Run-length bounds for a vehicle.
///
/// - `min_run`: cells a run must cover before the vehicle may turn or stop
/// - `max_run`: cells after which the vehicle must turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vehicle {
    pub min_run: u32,
    pub max_run: u32,
}

impl Vehicle {
    /// Creates a vehicle without checking its bounds; see [`Vehicle::validate`].
    pub const fn new(min_run: u32, max_run: u32) -> Self {
        Self { min_run, max_run }
    }

    /// Requires `1 <= min_run <= max_run`.
    pub fn validate(&self) -> Result<(), PathError> {
        if self.min_run == 0 || self.min_run > self.max_run {
            return Err(PathError::InvalidRunBounds {
                min_run: self.min_run,
                max_run: self.max_run,
            });
        }
        Ok(())
    }

    /// Whether a route may end with this momentum.
    #[inline]
    pub fn can_stop(&self, momentum: Momentum) -> bool {
        momentum.run_length() >= self.min_run
    }

    /// Momenta reachable in one step.
    ///
    /// From rest every direction starts a run of 1. Otherwise the vehicle
    /// continues straight while under `max_run` and turns left or right once
    /// at `min_run`. Reversing is never produced.
    pub fn transitions(&self, momentum: Momentum) -> impl Iterator<Item = Momentum> {
        let mut next = [None; 4];
        match momentum {
            Momentum::Rest => {
                for (slot, direction) in next.iter_mut().zip(Direction::ALL) {
                    *slot = Some(Momentum::Moving { direction, run: 1 });
                }
            }
            Momentum::Moving { direction, run } => {
                if run < self.max_run {
                    next[0] = Some(Momentum::Moving {
                        direction,
                        run: run + 1,
                    });
                }
                if run >= self.min_run {
                    next[1] = Some(Momentum::Moving {
                        direction: direction.turn_left(),
                        run: 1,
                    });
                    next[2] = Some(Momentum::Moving {
                        direction: direction.turn_right(),
                        run: 1,
                    });
                }
            }
        }
        next.into_iter().flatten()
    }
}

/// A vehicle that may turn after every cell but must turn after three.
pub const ORDINARY: Vehicle = Vehicle::new(1, 3);

/// A vehicle that needs four cells to get going and may run for ten.
pub const LONG_HAUL: Vehicle = Vehicle::new(4, 10);

#[cfg(test)]
mod tests {
    use super::*;

    fn moving(direction: Direction, run: u32) -> Momentum {
        Momentum::Moving { direction, run }
    }

    #[test]
    fn test_rest_starts_in_every_direction() {
        let next: Vec<_> = ORDINARY.transitions(Momentum::Rest).collect();
        assert_eq!(
            next,
            Direction::ALL.map(|dir| moving(dir, 1)).to_vec(),
            "Rest should start a run of 1 in each direction"
        );
    }

    #[test]
    fn test_short_run_cannot_turn() {
        let next: Vec<_> = LONG_HAUL
            .transitions(moving(Direction::East, 3))
            .collect();
        assert_eq!(next, vec![moving(Direction::East, 4)]);
    }

    #[test]
    fn test_full_run_must_turn() {
        let next: Vec<_> = ORDINARY
            .transitions(moving(Direction::East, 3))
            .collect();
        assert_eq!(
            next,
            vec![moving(Direction::North, 1), moving(Direction::South, 1)]
        );
    }

    #[test]
    fn test_never_reverses() {
        for vehicle in [ORDINARY, LONG_HAUL, Vehicle::new(1, 1)] {
            for direction in Direction::ALL {
                for run in 1..=vehicle.max_run {
                    let reversed = vehicle
                        .transitions(moving(direction, run))
                        .any(|m| m.direction() == Some(direction.reverse()));
                    assert!(!reversed, "{vehicle:?} reversed from {direction:?} run {run}");
                }
            }
        }
    }

    #[test]
    fn test_can_stop_requires_min_run() {
        assert!(!LONG_HAUL.can_stop(Momentum::Rest));
        assert!(!LONG_HAUL.can_stop(moving(Direction::South, 3)));
        assert!(LONG_HAUL.can_stop(moving(Direction::South, 4)));
        assert!(ORDINARY.can_stop(moving(Direction::South, 1)));
    }

    #[test]
    fn test_validate_rejects_bad_bounds() {
        assert!(ORDINARY.validate().is_ok());
        assert!(LONG_HAUL.validate().is_ok());
        assert_eq!(
            Vehicle::new(5, 4).validate(),
            Err(PathError::InvalidRunBounds {
                min_run: 5,
                max_run: 4
            })
        );
        assert!(Vehicle::new(0, 3).validate().is_err());
    }
}
