//! Durable session state.

use serde::{Deserialize, Serialize};

use super::GameType;
use crate::core::Result;

/// Everything a persistence layer needs to resume a game.
///
/// `colors` is the row-major board layout, the same shape as
/// [`GameSession::serialize_board`](super::GameSession::serialize_board).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub game_type: Option<GameType>,
    pub score: u32,
    pub moves_remaining: i32,
    pub time_remaining: i32,
    pub is_over: bool,
    pub colors: Vec<u8>,
}

impl SessionSnapshot {
    /// Encode to a compact binary form.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode bytes produced by [`to_bytes`](Self::to_bytes).
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DotsError;

    fn sample() -> SessionSnapshot {
        SessionSnapshot {
            game_type: Some(GameType::Moves),
            score: 12,
            moves_remaining: 9,
            time_remaining: 0,
            is_over: false,
            colors: vec![0, 1, 2, 3],
        }
    }

    #[test]
    fn test_bytes_round_trip() {
        let snapshot = sample();
        let bytes = snapshot.to_bytes().unwrap();
        assert_eq!(SessionSnapshot::from_bytes(&bytes).unwrap(), snapshot);
    }

    #[test]
    fn test_truncated_bytes_rejected() {
        let bytes = sample().to_bytes().unwrap();
        let err = SessionSnapshot::from_bytes(&bytes[..bytes.len() - 2]).unwrap_err();
        assert!(matches!(err, DotsError::Encoding(_)));
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_json_uses_type_labels() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert!(json.contains("\"Moves\""));
        let restored: SessionSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, sample());
    }
}
