//! Error types for grid loading and path queries.

use std::path::PathBuf;

use crate::geometry::Coord;

/// Ways a grid can fail to be rectangular and non-empty.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShapeError {
    #[error("grid has no rows")]
    NoRows,

    #[error("grid has no columns")]
    NoColumns,

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// Failures of a single path query.
///
/// All of these are local to one query: no partial route is ever returned
/// alongside an error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    /// The grid is empty or ragged.
    #[error("invalid grid shape: {0}")]
    InvalidShape(#[from] ShapeError),

    /// A coordinate lies outside the grid.
    #[error("coordinate ({}, {}) is outside the {width}x{height} grid", .coord.0, .coord.1)]
    OutOfBounds {
        coord: Coord,
        width: usize,
        height: usize,
    },

    /// Run bounds must satisfy `1 <= min_run <= max_run`.
    #[error("invalid run bounds: min_run={min_run}, max_run={max_run}")]
    InvalidRunBounds { min_run: u32, max_run: u32 },

    /// A heuristic field was built for a grid of different dimensions.
    #[error("heuristic field is {field_width}x{field_height}, grid is {grid_width}x{grid_height}")]
    FieldMismatch {
        field_width: usize,
        field_height: usize,
        grid_width: usize,
        grid_height: usize,
    },

    /// The frontier was exhausted without reaching the goal with a legal run.
    #[error("no path from ({}, {}) to ({}, {})", .start.0, .start.1, .goal.0, .goal.1)]
    NoPathFound { start: Coord, goal: Coord },
}

/// Failures while reading a grid from text or disk.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid digit {found:?} at row {row}, column {column}")]
    InvalidDigit {
        row: usize,
        column: usize,
        found: char,
    },

    #[error("invalid grid shape: {0}")]
    Shape(#[from] ShapeError),
}
