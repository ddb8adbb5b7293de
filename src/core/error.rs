//! Engine error type.
//!
//! Only two kinds of input can fail: coordinate lookups outside the grid and
//! malformed restore payloads. A rejected path extension is an ordinary
//! [`AddStatus`](crate::path::AddStatus), not an error.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, DotsError>;

#[derive(Debug, Error)]
pub enum DotsError {
    #[error("cell ({row}, {col}) is outside the {size}x{size} grid")]
    OutOfBounds { row: usize, col: usize, size: usize },

    #[error("invalid state: {message}")]
    InvalidState { message: String },

    #[error("snapshot encoding error: {0}")]
    Encoding(#[from] bincode::Error),
}

impl DotsError {
    #[must_use]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidState {
            message: message.into(),
        }
    }

    /// True for failures a persistence layer should recover from by starting
    /// over with a fresh board.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::InvalidState { .. } | Self::Encoding(_))
    }
}
