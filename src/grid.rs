//! Grid model operations: construction, resizing, cell edits, and the
//! rotational-symmetry toggle.
//!
//! Every operation produces a complete new grid state (or edits the caller's
//! owned copy); nothing here touches the derived slot lists — callers re-run
//! `words::extract` after any mutation.

use crate::error::{PuzzleError, PuzzleResult};
use crate::types::{Cell, Grid};

impl Grid {
    /// Create a `size x size` grid of open, empty cells.
    pub fn new(size: usize) -> PuzzleResult<Self> {
        if size == 0 {
            return Err(PuzzleError::invalid_size(size));
        }
        Ok(Self {
            size,
            cells: vec![Cell::open(); size * size],
        })
    }

    /// Return a resized copy. Cells that exist in both grids are copied
    /// verbatim, newly exposed cells start open and empty, cells outside the
    /// new bound are dropped. No symmetry is applied and no slot
    /// re-derivation happens here.
    pub fn resized(&self, new_size: usize) -> PuzzleResult<Self> {
        let mut next = Self::new(new_size)?;
        let overlap = self.size.min(new_size);
        for row in 0..overlap {
            for col in 0..overlap {
                next.set(row, col, self.get(row, col));
            }
        }
        Ok(next)
    }

    /// Write a letter into a cell. Setting a value always re-enables the
    /// cell; an empty input clears the letter but keeps the cell open.
    /// Rejects multi-character input without touching the grid.
    pub fn set_value(&mut self, row: usize, col: usize, input: &str) -> PuzzleResult<()> {
        let mut chars = input.chars();
        let first = chars.next();
        if chars.next().is_some() {
            return Err(PuzzleError::invalid_input(input));
        }
        if !self.in_bounds(row, col) {
            return Ok(());
        }
        self.set(
            row,
            col,
            Cell {
                value: first.map(|c| c.to_ascii_uppercase()),
                enabled: true,
            },
        );
        Ok(())
    }

    /// Flip a cell between open and blocked. Blocking a cell clears its
    /// letter.
    pub fn toggle_enabled(&mut self, row: usize, col: usize) {
        if !self.in_bounds(row, col) {
            return;
        }
        let cell = self.get(row, col);
        let enabled = !cell.enabled;
        self.set(
            row,
            col,
            Cell {
                value: if enabled { cell.value } else { None },
                enabled,
            },
        );
    }

    /// Flip a cell and its 180-degree mirror together.
    ///
    /// Both cells receive the same resulting `enabled` state (the toggled
    /// state of `(row, col)`, not an independent flip of the mirror), and
    /// both lose their letters when blocked. Applied only at toggle time;
    /// loaded or resized grids are never auto-symmetrized.
    pub fn toggle_symmetric(&mut self, row: usize, col: usize) {
        if !self.in_bounds(row, col) {
            return;
        }
        let enabled = !self.get(row, col).enabled;
        let (mrow, mcol) = (reflect(self.size, row), reflect(self.size, col));
        for (r, c) in [(row, col), (mrow, mcol)] {
            let value = if enabled { self.get(r, c).value } else { None };
            self.set(r, c, Cell { value, enabled });
        }
    }
}

/// Mirror coordinate under 180-degree rotational symmetry.
#[inline(always)]
pub fn reflect(size: usize, i: usize) -> usize {
    size - 1 - i
}
