//! Active path bookkeeping.

use smallvec::SmallVec;
use tracing::{debug, trace};

use super::AddStatus;
use crate::board::{is_adjacent, Board, Position};
use crate::core::Result;

/// Ordered sequence of selected cells for the gesture in progress.
///
/// The tracker stores positions only; the tokens themselves (and their
/// `selected` flags) live on the [`Board`]. Every position in the path is
/// selected on the board and every selected token is in the path, as long
/// as all selection changes go through the tracker.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PathTracker {
    path: SmallVec<[Position; 16]>,
}

impl PathTracker {
    /// Create an empty tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.path.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Path contents in selection order.
    #[must_use]
    pub fn positions(&self) -> &[Position] {
        &self.path
    }

    #[must_use]
    pub fn last(&self) -> Option<Position> {
        self.path.last().copied()
    }

    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        self.path.contains(&pos)
    }

    /// Try to extend, backtrack or close the path at `candidate`.
    ///
    /// - Empty path: always `Added`.
    /// - New cell: `Added` if it matches the last cell's colour and touches it.
    /// - Second-to-last cell: `Removed` (the last cell is dropped).
    /// - Any other path cell touching the last one: `CompleteCycle`, and the
    ///   path becomes every cell of that colour on the board, row-major.
    /// - Anything else: `Rejected`, nothing changes.
    ///
    /// Fails only if `candidate` is off the board.
    pub fn add_token(&mut self, board: &mut Board, candidate: Position) -> Result<AddStatus> {
        let color = board.token(candidate)?.color;

        let Some(last) = self.last() else {
            self.push(board, candidate);
            return Ok(AddStatus::Added);
        };

        if !self.contains(candidate) {
            if board.color_of(last) == color && is_adjacent(last, candidate) {
                self.push(board, candidate);
                return Ok(AddStatus::Added);
            }
            return Ok(AddStatus::Rejected);
        }

        if self.path.len() > 1 {
            let second_last = self.path[self.path.len() - 2];

            if second_last == candidate {
                if let Some(removed) = self.path.pop() {
                    board.set_selected(removed, false);
                    trace!(%removed, len = self.path.len(), "path backtracked");
                }
                return Ok(AddStatus::Removed);
            }

            if candidate != last && is_adjacent(last, candidate) {
                self.clear(board);
                self.path = board.positions_with_color(color).collect();
                for &pos in &self.path {
                    board.set_selected(pos, true);
                }
                debug!(%color, len = self.path.len(), "cycle completed");
                return Ok(AddStatus::CompleteCycle);
            }
        }

        Ok(AddStatus::Rejected)
    }

    /// Deselect every path cell and empty the path.
    pub fn clear(&mut self, board: &mut Board) {
        for pos in self.path.drain(..) {
            board.set_selected(pos, false);
        }
    }

    /// Path contents ordered by ascending row, stable within a row.
    ///
    /// This is the order gravity needs; the path itself is not reordered.
    #[must_use]
    pub fn sorted_by_row(&self) -> SmallVec<[Position; 16]> {
        let mut sorted = self.path.clone();
        sorted.sort_by_key(|pos| pos.row);
        sorted
    }

    fn push(&mut self, board: &mut Board, pos: Position) {
        board.set_selected(pos, true);
        self.path.push(pos);
        trace!(%pos, len = self.path.len(), "path extended");
    }
}
