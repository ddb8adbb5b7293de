//! Core engine types: configuration, randomness, errors.
//!
//! Everything here is independent of the board layout; the board, path and
//! session modules build on these.

pub mod config;
pub mod error;
pub mod rng;

pub use config::DotsConfig;
pub use error::{DotsError, Result};
pub use rng::{ColorSource, GameRng};
