//! Cell identification and per-cell token data.
//!
//! ## Usage
//!
//! ```
//! use dots_engine::board::{is_adjacent, Position};
//!
//! let center = Position::new(1, 1);
//!
//! // Adjacency is 8-directional, diagonals included
//! assert!(is_adjacent(center, Position::new(0, 0)));
//! assert!(is_adjacent(center, Position::new(1, 2)));
//!
//! // A cell is never adjacent to itself
//! assert!(!is_adjacent(center, center));
//! assert!(!is_adjacent(center, Position::new(3, 1)));
//! ```

use serde::{Deserialize, Serialize};

use crate::core::ColorSource;

/// Grid coordinate. Row 0 is the top row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Palette index of a token.
///
/// The engine doesn't interpret colours - they're compared for equality only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color(pub u8);

impl Color {
    /// Create a new colour index.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    /// Get the raw palette index.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Palette index as `usize`, for indexing colour tables.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// True if two cells touch horizontally, vertically or diagonally.
#[must_use]
pub fn is_adjacent(a: Position, b: Position) -> bool {
    a != b && a.row.abs_diff(b.row) <= 1 && a.col.abs_diff(b.col) <= 1
}

/// A single board cell.
///
/// `row`/`col` are fixed at creation. `color` changes on recolouring and
/// gravity; `selected` is owned by path operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    position: Position,
    pub color: Color,
    pub selected: bool,
}

impl Token {
    /// Create an unselected token.
    #[must_use]
    pub const fn new(position: Position, color: Color) -> Self {
        Self {
            position,
            color,
            selected: false,
        }
    }

    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }

    #[must_use]
    pub const fn row(&self) -> usize {
        self.position.row
    }

    #[must_use]
    pub const fn col(&self) -> usize {
        self.position.col
    }

    /// Assign a fresh colour from `source`.
    pub fn recolor(&mut self, source: &mut impl ColorSource, num_colors: u8) {
        self.color = source.next_color(num_colors);
    }

    /// True if `other` is one of the eight neighbours of this token.
    #[must_use]
    pub fn is_adjacent(&self, other: &Token) -> bool {
        is_adjacent(self.position, other.position)
    }
}
