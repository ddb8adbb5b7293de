//! Game session: board + path + score and budget bookkeeping.

use tracing::{debug, warn};

use super::snapshot::SessionSnapshot;
use super::GameType;
use crate::board::Board;
use crate::core::{ColorSource, DotsConfig, DotsError, GameRng, Result};
use crate::path::{AddStatus, PathTracker};

/// One game in progress.
///
/// Owns all mutable game state. Calls must be serialized by the host; the
/// session performs no locking.
///
/// Both budgets are tracked; the one not used by the game type stays 0.
/// That matters for [`GameSession::add_token`], which treats the game as
/// exhausted once *both* budgets are at or below zero.
#[derive(Clone, Debug)]
pub struct GameSession<R: ColorSource = GameRng> {
    config: DotsConfig,
    board: Board,
    path: PathTracker,
    source: R,
    game_type: Option<GameType>,
    score: u32,
    moves_remaining: i32,
    time_remaining: i32,
    is_over: bool,
}

impl GameSession<GameRng> {
    /// Create a session seeded with `seed`.
    #[must_use]
    pub fn new(config: DotsConfig, game_type: GameType, seed: u64) -> Self {
        Self::with_source(config, Some(game_type), GameRng::new(seed))
    }

    /// Create a session from a game type label.
    ///
    /// Unknown labels give a session with no game type and no budget, in
    /// which every path extension is rejected.
    #[must_use]
    pub fn from_label(config: DotsConfig, label: &str, seed: u64) -> Self {
        Self::with_source(config, GameType::from_label(label), GameRng::new(seed))
    }
}

impl<R: ColorSource> GameSession<R> {
    /// Create a session drawing colours from `source`.
    pub fn with_source(config: DotsConfig, game_type: Option<GameType>, mut source: R) -> Self {
        let board = Board::new(config.num_cells, config.num_colors, &mut source);
        let mut session = Self {
            config,
            board,
            path: PathTracker::new(),
            source,
            game_type,
            score: 0,
            moves_remaining: 0,
            time_remaining: 0,
            is_over: false,
        };
        session.reset_budget();
        session
    }

    /// Start over with `game_type`: fresh budget, zero score, new colours.
    pub fn start_new(&mut self, game_type: GameType) {
        self.path.clear(&mut self.board);
        self.game_type = Some(game_type);
        self.score = 0;
        self.is_over = false;
        self.reset_budget();
        self.board.new_game(&mut self.source);
        debug!(game_type = game_type.label(), "new game started");
    }

    fn reset_budget(&mut self) {
        self.moves_remaining = 0;
        self.time_remaining = 0;
        match self.game_type {
            Some(GameType::Moves) => self.moves_remaining = self.config.initial_moves,
            Some(GameType::Timed) => self.time_remaining = self.config.initial_time,
            None => {}
        }
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &DotsConfig {
        &self.config
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn path(&self) -> &PathTracker {
        &self.path
    }

    #[must_use]
    pub fn game_type(&self) -> Option<GameType> {
        self.game_type
    }

    /// `"Timed"`, `"Moves"` or `"None"`.
    #[must_use]
    pub fn game_type_label(&self) -> &'static str {
        self.game_type.map_or("None", GameType::label)
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn score_label(&self) -> String {
        self.score.to_string()
    }

    #[must_use]
    pub fn moves_remaining(&self) -> i32 {
        self.moves_remaining
    }

    #[must_use]
    pub fn time_remaining(&self) -> i32 {
        self.time_remaining
    }

    /// The budget that applies to this game type.
    #[must_use]
    pub fn budget_remaining(&self) -> i32 {
        match self.game_type {
            Some(GameType::Moves) => self.moves_remaining,
            Some(GameType::Timed) => self.time_remaining,
            None => 0,
        }
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.is_over
    }

    // === Moves ===

    /// Feed the cell under the player's finger into the path.
    ///
    /// Once both budgets are exhausted the game is ended here and every call
    /// is `Rejected`. Fails only for coordinates outside the grid.
    pub fn add_token(&mut self, row: usize, col: usize) -> Result<AddStatus> {
        let pos = self.board.position(row, col)?;

        if self.moves_remaining <= 0 && self.time_remaining <= 0 {
            self.end_game();
            return Ok(AddStatus::Rejected);
        }
        if self.is_over {
            return Ok(AddStatus::Rejected);
        }

        self.path.add_token(&mut self.board, pos)
    }

    /// Finalize the current gesture.
    ///
    /// A path of two or more cells is cleared with gravity and, unless the
    /// game is already over, scored and charged against the move budget.
    /// Shorter paths change nothing. The path is emptied either way.
    pub fn finish_move(&mut self) {
        let cleared = self.path.len();
        if cleared > 1 {
            let order = self.path.sorted_by_row();
            // Path entries were bounds-checked on the way in
            if let Err(err) = self.board.apply_gravity(&order, &mut self.source) {
                warn!(%err, "gravity rejected path");
                self.path.clear(&mut self.board);
                return;
            }

            if !self.is_over {
                let points = u32::try_from(cleared).unwrap_or(u32::MAX);
                self.score = self.score.saturating_add(points);
                if self.game_type == Some(GameType::Moves) {
                    self.moves_remaining -= 1;
                }
            }
            debug!(
                cleared,
                score = self.score,
                budget = self.budget_remaining(),
                "move finished"
            );
        }
        self.path.clear(&mut self.board);
    }

    /// One time unit elapsed. Only `Timed` games count down.
    ///
    /// Does not end the game; expiry is observed by the next
    /// [`add_token`](Self::add_token). Ticks past expiry keep counting below
    /// zero.
    pub fn tick(&mut self) {
        if self.game_type == Some(GameType::Timed) {
            self.time_remaining = self.time_remaining.saturating_sub(1);
        }
    }

    /// End a `Moves` game whose move budget is spent.
    ///
    /// `Timed` games are ended by `add_token` or [`end_game`](Self::end_game).
    pub fn check_game_over(&mut self) {
        if self.game_type == Some(GameType::Moves) && self.moves_remaining == 0 {
            self.end_game();
        }
    }

    /// Mark the game as over. Irreversible until [`start_new`](Self::start_new).
    pub fn end_game(&mut self) {
        if !self.is_over {
            self.is_over = true;
            debug!(score = self.score, game_type = self.game_type_label(), "game over");
        }
    }

    // === Persistence ===

    /// Board colours, row-major.
    #[must_use]
    pub fn serialize_board(&self) -> Vec<u8> {
        self.board.serialize()
    }

    /// Replace board colours from [`serialize_board`](Self::serialize_board) output.
    pub fn restore_board(&mut self, colors: &[u8]) -> Result<()> {
        self.board.restore(colors)
    }

    /// Restore a score saved with [`score_label`](Self::score_label).
    pub fn restore_score(&mut self, score: &str) -> Result<()> {
        self.score = score
            .trim()
            .parse()
            .map_err(|e| DotsError::invalid(format!("bad score {:?}: {}", score, e)))?;
        Ok(())
    }

    /// Capture everything needed to resume this game.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            game_type: self.game_type,
            score: self.score,
            moves_remaining: self.moves_remaining,
            time_remaining: self.time_remaining,
            is_over: self.is_over,
            colors: self.serialize_board(),
        }
    }

    /// Resume from a snapshot. Any gesture in progress is dropped.
    ///
    /// On error the session is left unchanged.
    pub fn restore(&mut self, snapshot: &SessionSnapshot) -> Result<()> {
        self.board.restore(&snapshot.colors)?;
        self.path.clear(&mut self.board);
        self.game_type = snapshot.game_type;
        self.score = snapshot.score;
        self.moves_remaining = snapshot.moves_remaining;
        self.time_remaining = snapshot.time_remaining;
        self.is_over = snapshot.is_over;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(game_type: GameType) -> GameSession {
        GameSession::new(DotsConfig::new(3, 2), game_type, 11)
    }

    #[test]
    fn test_new_moves_session() {
        let s = session(GameType::Moves);
        assert_eq!(s.moves_remaining(), 15);
        assert_eq!(s.time_remaining(), 0);
        assert_eq!(s.budget_remaining(), 15);
        assert_eq!(s.game_type_label(), "Moves");
        assert_eq!(s.score(), 0);
        assert!(!s.is_over());
    }

    #[test]
    fn test_new_timed_session() {
        let s = session(GameType::Timed);
        assert_eq!(s.time_remaining(), 30);
        assert_eq!(s.moves_remaining(), 0);
        assert_eq!(s.game_type_label(), "Timed");
    }

    #[test]
    fn test_unknown_label_has_no_budget() {
        let mut s = GameSession::from_label(DotsConfig::default(), "Zen", 1);
        assert_eq!(s.game_type_label(), "None");
        assert_eq!(s.budget_remaining(), 0);
        assert_eq!(s.add_token(0, 0).unwrap(), AddStatus::Rejected);
        assert!(s.is_over());
    }

    #[test]
    fn test_tick_only_counts_timed() {
        let mut moves = session(GameType::Moves);
        moves.tick();
        assert_eq!(moves.time_remaining(), 0);
        assert_eq!(moves.moves_remaining(), 15);

        let mut timed = session(GameType::Timed);
        timed.tick();
        assert_eq!(timed.time_remaining(), 29);
        assert!(!timed.is_over());
    }

    #[test]
    fn test_tick_counts_below_zero() {
        let mut s = GameSession::new(
            DotsConfig::new(3, 2).with_initial_time(1),
            GameType::Timed,
            1,
        );
        s.tick();
        s.tick();
        s.tick();
        assert_eq!(s.time_remaining(), -2);
        assert_eq!(s.budget_remaining(), -2);
        assert!(!s.is_over());

        assert_eq!(s.add_token(0, 0).unwrap(), AddStatus::Rejected);
        assert!(s.is_over());
    }

    #[test]
    fn test_restore_score() {
        let mut s = session(GameType::Moves);
        s.restore_score("42").unwrap();
        assert_eq!(s.score(), 42);
        assert_eq!(s.score_label(), "42");

        let err = s.restore_score("forty").unwrap_err();
        assert!(matches!(err, DotsError::InvalidState { .. }));
        assert_eq!(s.score(), 42);
    }

    #[test]
    fn test_end_game_is_sticky() {
        let mut s = session(GameType::Timed);
        s.end_game();
        assert!(s.is_over());
        assert_eq!(s.add_token(0, 0).unwrap(), AddStatus::Rejected);
        s.tick();
        assert!(s.is_over());
    }

    #[test]
    fn test_start_new_resets() {
        let mut s = session(GameType::Moves);
        s.restore_score("9").unwrap();
        s.end_game();
        s.start_new(GameType::Timed);
        assert_eq!(s.score(), 0);
        assert!(!s.is_over());
        assert_eq!(s.time_remaining(), 30);
        assert_eq!(s.moves_remaining(), 0);
    }

    #[test]
    fn test_score_saturates() {
        let mut s = session(GameType::Timed);
        s.restore_board(&[1, 1, 0, 0, 0, 0, 0, 0, 0]).unwrap();
        s.restore_score(&u32::MAX.to_string()).unwrap();
        s.add_token(0, 0).unwrap();
        s.add_token(0, 1).unwrap();
        s.finish_move();
        assert_eq!(s.score(), u32::MAX);
    }

    #[test]
    #[should_panic(expected = "Palette must have at least 1 color")]
    fn test_literal_config_without_palette() {
        let config = DotsConfig {
            num_colors: 0,
            ..DotsConfig::default()
        };
        GameSession::new(config, GameType::Moves, 1);
    }

    #[test]
    fn test_add_token_out_of_bounds() {
        let mut s = session(GameType::Moves);
        assert!(matches!(
            s.add_token(0, 3),
            Err(DotsError::OutOfBounds { row: 0, col: 3, size: 3 })
        ));
    }
}
