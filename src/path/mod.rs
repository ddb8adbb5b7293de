//! Path construction state machine.
//!
//! The tracker has no explicit state field: the path length and the
//! candidate's relation to the path decide each transition.
//!
//! ## Example
//!
//! ```
//! use dots_engine::board::{Board, Position};
//! use dots_engine::core::GameRng;
//! use dots_engine::path::{AddStatus, PathTracker};
//!
//! let mut board = Board::new(2, 5, &mut GameRng::new(1));
//! board.restore(&[1, 1, 0, 1]).unwrap();
//!
//! let mut path = PathTracker::new();
//! assert_eq!(path.add_token(&mut board, Position::new(0, 0)).unwrap(), AddStatus::Added);
//! assert_eq!(path.add_token(&mut board, Position::new(0, 1)).unwrap(), AddStatus::Added);
//!
//! // Different colour
//! assert_eq!(path.add_token(&mut board, Position::new(1, 0)).unwrap(), AddStatus::Rejected);
//!
//! // Stepping back onto the previous cell undoes the last step
//! assert_eq!(path.add_token(&mut board, Position::new(0, 0)).unwrap(), AddStatus::Removed);
//! assert_eq!(path.len(), 1);
//! ```

mod tracker;

pub use tracker::PathTracker;

use serde::{Deserialize, Serialize};

/// Outcome of a single `add_token` call.
///
/// `Rejected` is a normal outcome meaning "no state change".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AddStatus {
    /// The candidate was appended to the path.
    Added,
    /// Nothing changed.
    Rejected,
    /// The last cell was dropped (the player stepped back).
    Removed,
    /// The path closed a loop; it now holds every cell of that colour.
    CompleteCycle,
}
