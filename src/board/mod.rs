//! Board model: positions, colours, tokens and the grid that owns them.
//!
//! ## Gravity
//!
//! Clearing a path shifts each affected column down and refills the top
//! cell. Entries are dropped one at a time, so two cleared cells in one
//! column compound rather than collapsing into a single shift.
//!
//! ```
//! use dots_engine::board::{Board, Position};
//! use dots_engine::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//! let mut board = Board::new(3, 5, &mut rng);
//! board.restore(&[0, 1, 2, 3, 4, 0, 1, 2, 3]).unwrap();
//!
//! board.apply_gravity(&[Position::new(1, 2)], &mut rng).unwrap();
//!
//! // (0, 2) fell into (1, 2); the bottom row is untouched
//! assert_eq!(board.token_at(1, 2).unwrap().color.raw(), 2);
//! assert_eq!(board.token_at(2, 2).unwrap().color.raw(), 3);
//! ```

mod grid;
mod token;

pub use grid::Board;
pub use token::{is_adjacent, Color, Position, Token};
