//! Locating and reading puzzle input files.
//!
//! Inputs are named after the puzzle day, in order of preference:
//! - `dayNN.inp.real`
//! - `dayNN.inp`
//! - `dayNN.inp.sample`
//!
//! Asking for the sample moves `dayNN.inp.sample` to the front.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::LoadError;
use crate::grid::Grid;

const EXTENSIONS: [&str; 3] = ["inp.real", "inp", "inp.sample"];

/// Candidate input paths for `day` inside `dir`, most preferred first.
pub fn candidates(dir: &Path, day: u32, prefer_sample: bool) -> Vec<PathBuf> {
    let mut extensions = EXTENSIONS.to_vec();
    if prefer_sample {
        extensions.rotate_right(1);
    }
    extensions
        .into_iter()
        .map(|ext| dir.join(format!("day{day:02}.{ext}")))
        .collect()
}

/// Returns the first existing candidate input file.
pub fn locate(dir: &Path, day: u32, prefer_sample: bool) -> Option<PathBuf> {
    let found = candidates(dir, day, prefer_sample)
        .into_iter()
        .find(|path| path.is_file());
    if let Some(path) = &found {
        debug!(path = %path.display(), "using input data");
    }
    found
}

/// Reads and parses a grid file.
pub fn load(path: &Path) -> Result<Grid, LoadError> {
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let grid = Grid::parse(&text)?;
    debug!(
        path = %path.display(),
        width = grid.width(),
        height = grid.height(),
        "loaded grid"
    );
    Ok(grid)
}
