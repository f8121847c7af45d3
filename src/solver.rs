//! Wire contract for the external crossword solver service.
//!
//! The solver itself lives outside this crate; the engine only encodes
//! requests, decodes responses, and surfaces the solver's "no result"
//! answers as `NoSolutionFound` / `NoProgressFound`. A request is the grid
//! as newline-joined rows of single characters (`.` blocked, `?` unknown,
//! else the letter); a successful response is a grid in the same encoding.

use crate::error::{PuzzleError, PuzzleResult};
use crate::types::{Cell, Grid};
use serde::{Deserialize, Serialize};

/// The two request modes the solver accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SolveMode {
    /// Return at most one complete solution, or no-solution.
    Full,
    /// Return one incrementally advanced grid, or no-progress.
    Step,
}

/// Named solving strategies the service exposes. Informational only, for
/// display in the UI.
pub const STRATEGY_NAMES: &[&str] = &[
    "single-candidate",
    "cross-reference",
    "pattern-match",
    "backtracking",
];

/// Fixed catalog of word dictionary resources the solver can be pointed at,
/// selectable by name.
pub const DICTIONARY_CATALOG: &[(&str, &str)] = &[
    ("english-basic", "dictionaries/english-basic.txt"),
    ("english-large", "dictionaries/english-large.txt"),
];

/// Look up a dictionary resource path by catalog name.
pub fn dictionary_resource(name: &str) -> Option<&'static str> {
    DICTIONARY_CATALOG
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, path)| *path)
}

/// Encode a grid as the solver's request payload.
pub fn encode_grid(grid: &Grid) -> String {
    (0..grid.size)
        .map(|row| {
            (0..grid.size)
                .map(|col| grid.get(row, col).to_char())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Decode a solver response back into a grid. Rows must be non-empty and
/// form a square matrix.
pub fn decode_grid(text: &str) -> PuzzleResult<Grid> {
    let lines: Vec<&str> = text
        .lines()
        .map(|l| l.trim_end_matches('\r'))
        .filter(|l| !l.is_empty())
        .collect();
    if lines.is_empty() {
        return Err(PuzzleError::malformed("empty solver response"));
    }

    let size = lines.len();
    let mut grid = Grid::new(size)?;
    for (row, line) in lines.iter().enumerate() {
        if line.chars().count() != size {
            return Err(PuzzleError::malformed(format!(
                "solver response row {row} is not {size} cells"
            )));
        }
        for (col, c) in line.chars().enumerate() {
            grid.set(row, col, Cell::from_char(c));
        }
    }
    Ok(grid)
}

/// Decode a solver response and merge it over the request grid.
///
/// The response must match the request's dimensions; an empty response maps
/// to the mode's "no result" error instead of a malformed-document error, so
/// the caller can show it as a notice rather than a failure.
pub fn apply_solution(grid: &Grid, response: &str, mode: SolveMode) -> PuzzleResult<Grid> {
    if response.trim().is_empty() {
        return Err(match mode {
            SolveMode::Full => PuzzleError::NoSolutionFound,
            SolveMode::Step => PuzzleError::NoProgressFound,
        });
    }

    let solved = decode_grid(response)?;
    if solved.size != grid.size {
        return Err(PuzzleError::malformed(format!(
            "solver returned a {0}x{0} grid for a {1}x{1} request",
            solved.size, grid.size
        )));
    }
    Ok(solved)
}
