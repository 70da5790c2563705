//! Rectangular cost grid and its text loader.
//!
//! The grid is stored as a flat row-major vector where each cell holds the
//! non-negative cost of entering it. It is immutable once built, so a single
//! grid can be shared between any number of concurrent queries.

use crate::error::{LoadError, PathError, ShapeError};
use crate::geometry::{Coord, Direction};

/// Immutable matrix of per-cell entry costs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<u32>,
}

impl Grid {
    /// Builds a grid from rows of costs.
    ///
    /// Fails if there are no rows, the first row is empty, or any row differs
    /// in length from the first.
    pub fn from_rows(rows: Vec<Vec<u32>>) -> Result<Self, ShapeError> {
        let height = rows.len();
        let width = rows.first().map(Vec::len).ok_or(ShapeError::NoRows)?;
        if width == 0 {
            return Err(ShapeError::NoColumns);
        }

        let mut cells = Vec::with_capacity(width * height);
        for (row_index, row) in rows.into_iter().enumerate() {
            if row.len() != width {
                return Err(ShapeError::RaggedRow {
                    row: row_index,
                    expected: width,
                    found: row.len(),
                });
            }
            cells.extend(row);
        }

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Parses one digit per cell, one row per line.
    ///
    /// Lines are trimmed and blank lines skipped, so trailing newlines and
    /// CRLF input are accepted.
    pub fn parse(input: &str) -> Result<Self, LoadError> {
        let rows = input
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .enumerate()
            .map(|(row, line)| {
                line.chars()
                    .enumerate()
                    .map(|(column, found)| {
                        found.to_digit(10).ok_or(LoadError::InvalidDigit {
                            row,
                            column,
                            found,
                        })
                    })
                    .collect::<Result<Vec<u32>, LoadError>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::from_rows(rows)?)
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false for a successfully constructed grid.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn contains(&self, coord: Coord) -> bool {
        coord.0 < self.width && coord.1 < self.height
    }

    /// Cost of entering `coord`.
    pub fn cost(&self, coord: Coord) -> Result<u32, PathError> {
        self.check(coord)?;
        Ok(self.cost_unchecked(coord))
    }

    /// Fails with `OutOfBounds` unless `coord` lies inside the grid.
    pub fn check(&self, coord: Coord) -> Result<(), PathError> {
        if self.contains(coord) {
            Ok(())
        } else {
            Err(PathError::OutOfBounds {
                coord,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Cost lookup for coordinates already known to be in bounds.
    #[inline(always)]
    pub(crate) fn cost_unchecked(&self, coord: Coord) -> u32 {
        self.cells[self.index(coord)]
    }

    /// Row-major index of `coord`.
    #[inline(always)]
    pub(crate) fn index(&self, coord: Coord) -> usize {
        coord.1 * self.width + coord.0
    }

    /// Moves one cell from `coord` in `dir`, staying inside the grid.
    #[inline]
    pub fn step(&self, coord: Coord, dir: Direction) -> Option<Coord> {
        dir.step(coord, self.width, self.height)
    }

    pub fn top_left(&self) -> Coord {
        (0, 0)
    }

    pub fn bottom_right(&self) -> Coord {
        (self.width - 1, self.height - 1)
    }
}

/// Draws `path` over the grid as arrows.
///
/// Each visited cell after the first shows the direction it was entered
/// from; every other cell keeps its cost digit (or `#` for costs above 9).
/// Steps with an end outside the grid are ignored.
pub fn format_route(grid: &Grid, path: &[Coord]) -> String {
    let mut canvas: Vec<Vec<char>> = (0..grid.height())
        .map(|y| {
            (0..grid.width())
                .map(|x| match grid.cost_unchecked((x, y)) {
                    cost @ 0..=9 => char::from(b'0' + cost as u8),
                    _ => '#',
                })
                .collect()
        })
        .collect();

    for window in path.windows(2) {
        let (from, to) = (window[0], window[1]);
        if !grid.contains(from) || !grid.contains(to) {
            continue;
        }
        if let Some(dir) = Direction::between(from, to) {
            canvas[to.1][to.0] = dir.arrow();
        }
    }

    let mut output = String::with_capacity(grid.len() + grid.height());
    for row in canvas {
        output.extend(row);
        output.push('\n');
    }
    output
}
