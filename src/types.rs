//! Core data types for the crossword engine.
//!
//! The grid uses flat `Vec` storage with row-major layout:
//! `cells[row * size + col]` maps to the JS equivalent `grid[row][col]`.

use serde::{Deserialize, Serialize};

/// Character used for an open cell with no committed letter, both in slot
/// patterns and in the text format's GRID section.
pub const PLACEHOLDER: char = '?';

/// Character used for a blocked cell in the text formats.
pub const BLOCKED: char = '.';

/// One square of the puzzle grid.
///
/// Invariant: a disabled (blocked) cell never holds a value. Every mutation
/// that disables a cell clears its value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub value: Option<char>,
    pub enabled: bool,
}

impl Cell {
    /// An open cell with no letter.
    pub fn open() -> Self {
        Self { value: None, enabled: true }
    }

    /// A blocked (black) cell.
    pub fn blocked() -> Self {
        Self { value: None, enabled: false }
    }

    /// The cell's single-character wire encoding: `.` blocked, `?` open and
    /// empty, otherwise the letter. Shared by the text codec and the solver
    /// request encoding.
    pub fn to_char(self) -> char {
        if !self.enabled {
            BLOCKED
        } else {
            self.value.unwrap_or(PLACEHOLDER)
        }
    }

    /// Decode a wire character back into a cell. `?` maps to an open empty
    /// cell; anything other than `.` is a letter in an open cell.
    pub fn from_char(c: char) -> Self {
        match c {
            BLOCKED => Self::blocked(),
            PLACEHOLDER => Self::open(),
            other => Self { value: Some(other), enabled: true },
        }
    }
}

/// The square cell matrix.
///
/// Always exactly `size * size` cells. Construction and resizing go through
/// `grid.rs`; this type only owns storage and access.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    pub size: usize,
    pub cells: Vec<Cell>,
}

impl Grid {
    #[inline(always)]
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.size + col]
    }

    #[inline(always)]
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        self.cells[row * self.size + col] = cell;
    }

    #[inline(always)]
    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }
}

/// Scan direction for word slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Across,
    Down,
}

/// A maximal run of contiguous open cells in one direction — the unit a
/// crossword clue refers to.
///
/// Slots are derived views, recomputed from scratch on every grid change.
/// Only `clue` survives recomputation, carried over by the explicit merge
/// step in `words.rs`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordSlot {
    /// Start cell of the run.
    pub row: usize,
    pub col: usize,
    /// One char per cell in scan order, `?` for an open cell with no letter.
    pub pattern: String,
    /// The numeral printed in the slot's start cell. Shared between an
    /// across and a down slot starting at the same cell.
    pub number: u32,
    pub clue: String,
}

impl WordSlot {
    #[inline(always)]
    pub fn start(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    pub fn len(&self) -> usize {
        self.pattern.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.pattern.is_empty()
    }
}

/// Default author/copyright line for exported puzzles.
pub const DEFAULT_AUTHOR: &str = "Author";

/// The unit exchanged with the text codec and the JS UI: grid state plus the
/// derived, clue-bearing slot lists.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleDocument {
    pub title: String,
    pub author: String,
    pub copyright: String,
    pub grid: Grid,
    pub across: Vec<WordSlot>,
    pub down: Vec<WordSlot>,
}

impl PuzzleDocument {
    /// Wrap a grid into a document, deriving fresh slot lists.
    pub fn from_grid(grid: Grid) -> Self {
        let (across, down) = crate::words::extract(&grid);
        Self {
            title: String::new(),
            author: DEFAULT_AUTHOR.to_string(),
            copyright: DEFAULT_AUTHOR.to_string(),
            grid,
            across,
            down,
        }
    }

    /// Replace the grid and re-derive slots, carrying clue text over from
    /// the previous lists by index.
    pub fn with_grid(&self, grid: Grid) -> Self {
        let (mut across, mut down) = crate::words::extract(&grid);
        crate::words::merge_clues(&self.across, &mut across);
        crate::words::merge_clues(&self.down, &mut down);
        Self {
            title: self.title.clone(),
            author: self.author.clone(),
            copyright: self.copyright.clone(),
            grid,
            across,
            down,
        }
    }
}
