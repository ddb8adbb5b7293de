//! The square grid of tokens.

use std::fmt;

use tracing::warn;

use super::token::{Color, Position, Token};
use crate::core::{ColorSource, DotsError, Result};

/// A `size x size` grid holding exactly one token per cell.
///
/// Tokens are stored row-major and keep their position for the lifetime of
/// the board; only colours and selection flags change.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: usize,
    num_colors: u8,
    tokens: Vec<Token>,
}

impl Board {
    /// Build a board with a freshly drawn colour in every cell.
    pub fn new(size: usize, num_colors: u8, source: &mut impl ColorSource) -> Self {
        assert!(size > 0, "Grid must have at least 1 cell per side");
        assert!(num_colors > 0, "Palette must have at least 1 color");

        let tokens = (0..size * size)
            .map(|i| Token::new(Position::new(i / size, i % size), source.next_color(num_colors)))
            .collect();

        Self {
            size,
            num_colors,
            tokens,
        }
    }

    /// Re-randomize every colour in place. Positions are unchanged.
    pub fn new_game(&mut self, source: &mut impl ColorSource) {
        let num_colors = self.num_colors;
        for token in &mut self.tokens {
            token.recolor(source, num_colors);
        }
    }

    /// Side length of the grid.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    #[must_use]
    pub const fn num_colors(&self) -> u8 {
        self.num_colors
    }

    /// Validate a coordinate pair.
    pub fn position(&self, row: usize, col: usize) -> Result<Position> {
        if row < self.size && col < self.size {
            Ok(Position::new(row, col))
        } else {
            Err(DotsError::OutOfBounds {
                row,
                col,
                size: self.size,
            })
        }
    }

    /// Bounds-checked lookup.
    pub fn token_at(&self, row: usize, col: usize) -> Result<&Token> {
        let pos = self.position(row, col)?;
        Ok(&self.tokens[self.index_of(pos)])
    }

    /// Lookup by position.
    pub fn token(&self, pos: Position) -> Result<&Token> {
        self.token_at(pos.row, pos.col)
    }

    /// Iterate over all tokens in row-major order.
    pub fn tokens(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter()
    }

    /// Positions holding `color`, in row-major order.
    pub fn positions_with_color(&self, color: Color) -> impl Iterator<Item = Position> + '_ {
        self.tokens
            .iter()
            .filter(move |t| t.color == color)
            .map(Token::position)
    }

    /// Positions currently flagged as selected, in row-major order.
    pub fn selected_positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.tokens
            .iter()
            .filter(|t| t.selected)
            .map(Token::position)
    }

    /// Flatten all colours row-major.
    #[must_use]
    pub fn serialize(&self) -> Vec<u8> {
        self.tokens.iter().map(|t| t.color.raw()).collect()
    }

    /// Assign colours back row-major. Selection flags are untouched.
    ///
    /// The payload is validated before anything is written, so a rejected
    /// restore leaves the board as it was.
    pub fn restore(&mut self, colors: &[u8]) -> Result<()> {
        if colors.len() != self.tokens.len() {
            warn!(
                expected = self.tokens.len(),
                got = colors.len(),
                "rejecting board restore"
            );
            return Err(DotsError::invalid(format!(
                "expected {} colors, got {}",
                self.tokens.len(),
                colors.len()
            )));
        }

        if let Some((index, &color)) = colors
            .iter()
            .enumerate()
            .find(|(_, c)| **c >= self.num_colors)
        {
            warn!(index, color, "rejecting board restore");
            return Err(DotsError::invalid(format!(
                "color {} at index {} is outside palette of {}",
                color, index, self.num_colors
            )));
        }

        for (token, &color) in self.tokens.iter_mut().zip(colors) {
            token.color = Color::new(color);
        }
        Ok(())
    }

    /// Drop the column above every cell in `path` and refill from the top.
    ///
    /// Entries are processed one at a time in the order given; callers pass
    /// the path sorted by ascending row. Each entry shifts its own column
    /// down by one from its row up to row 1, then row 0 gets a new colour.
    /// Several entries in one column therefore compound, each with its own
    /// drop distance.
    ///
    /// Fails with `OutOfBounds` if any entry is off the grid; the board is
    /// not touched in that case.
    pub fn apply_gravity(
        &mut self,
        path: &[Position],
        source: &mut impl ColorSource,
    ) -> Result<()> {
        for pos in path {
            self.position(pos.row, pos.col)?;
        }

        for &pos in path {
            let idx = self.index_of(pos);
            self.tokens[idx].selected = false;

            for row in (1..=pos.row).rev() {
                let above = self.tokens[self.index_of(Position::new(row - 1, pos.col))].color;
                let below = self.index_of(Position::new(row, pos.col));
                self.tokens[below].color = above;
            }

            let top = self.index_of(Position::new(0, pos.col));
            let num_colors = self.num_colors;
            self.tokens[top].recolor(source, num_colors);
        }
        Ok(())
    }

    pub(crate) fn set_selected(&mut self, pos: Position, selected: bool) {
        let idx = self.index_of(pos);
        self.tokens[idx].selected = selected;
    }

    pub(crate) fn color_of(&self, pos: Position) -> Color {
        self.tokens[self.index_of(pos)].color
    }

    fn index_of(&self, pos: Position) -> usize {
        debug_assert!(pos.row < self.size && pos.col < self.size);
        pos.row * self.size + pos.col
    }
}

/// One line per row; selected cells are bracketed.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.tokens.chunks(self.size) {
            for token in row {
                if token.selected {
                    write!(f, "[{}]", token.color)?;
                } else {
                    write!(f, " {} ", token.color)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
