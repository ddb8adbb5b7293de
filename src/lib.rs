//! # dots-engine
//!
//! Game logic for a path-drawing colour matching puzzle: a square grid of
//! coloured tokens, a path the player drags through same-coloured
//! neighbours, and gravity that refills the cleared cells.
//!
//! ## Design Principles
//!
//! 1. **Engine Only**: Input decoding, rendering, audio, wall-clock timers and
//!    storage belong to the host. The engine exposes `tick`, queries and
//!    serialize/restore.
//!
//! 2. **Configuration Over Constants**: Grid size, palette and budgets come
//!    from a `DotsConfig` passed to each session.
//!
//! 3. **Deterministic**: All randomness flows through a `ColorSource`; the
//!    default `GameRng` is seeded, so a seed replays a game exactly.
//!
//! ## Architecture
//!
//! - The board owns every token. The path holds positions into the board,
//!   never copies, so selection flags and gravity act on the real grid.
//!
//! - Single-threaded and synchronous: every call runs to completion. Hosts
//!   serialize access to a session.
//!
//! ## Modules
//!
//! - `core`: Configuration, RNG, errors
//! - `board`: Positions, colours, tokens, grid, gravity
//! - `path`: Path construction state machine
//! - `session`: Score, budgets, game over, persistence

pub mod board;
pub mod core;
pub mod path;
pub mod session;

// Re-export commonly used types
pub use crate::core::{ColorSource, DotsConfig, DotsError, GameRng, Result};

pub use crate::board::{is_adjacent, Board, Color, Position, Token};

pub use crate::path::{AddStatus, PathTracker};

pub use crate::session::{GameSession, GameType, SessionSnapshot};
