//! Game sessions: the engine's outer boundary.
//!
//! A [`GameSession`] orchestrates the board and the path tracker and owns
//! score, budget and game-over state. Input, rendering, timers and storage
//! are driven by the host through this API.
//!
//! ## Example
//!
//! ```
//! use dots_engine::{AddStatus, DotsConfig, GameSession, GameType};
//!
//! let mut session = GameSession::new(DotsConfig::default(), GameType::Moves, 7);
//!
//! // Two same-coloured neighbours in the top row
//! session.restore_board(&[
//!     1, 1, 0, 2, 3, 4,
//!     0, 2, 3, 4, 0, 2,
//!     3, 4, 0, 2, 3, 4,
//!     0, 2, 3, 4, 0, 2,
//!     3, 4, 0, 2, 3, 4,
//!     0, 2, 3, 4, 0, 2,
//! ]).unwrap();
//!
//! assert_eq!(session.add_token(0, 0).unwrap(), AddStatus::Added);
//! assert_eq!(session.add_token(0, 1).unwrap(), AddStatus::Added);
//! session.finish_move();
//!
//! assert_eq!(session.score(), 2);
//! assert_eq!(session.moves_remaining(), 14);
//! assert!(session.path().is_empty());
//! ```

mod game;
mod snapshot;

pub use game::GameSession;
pub use snapshot::SessionSnapshot;

use serde::{Deserialize, Serialize};

/// Which budget limits the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameType {
    /// Limited number of ticks.
    Timed,
    /// Limited number of scoring moves.
    Moves,
}

impl GameType {
    /// Parse `"Timed"` or `"Moves"`.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Timed" => Some(Self::Timed),
            "Moves" => Some(Self::Moves),
            _ => None,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Timed => "Timed",
            Self::Moves => "Moves",
        }
    }
}

impl std::fmt::Display for GameType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
