//! Engine configuration.
//!
//! Grid size, palette size and the starting budgets are carried by a
//! `DotsConfig` value passed into each session, so sessions with different
//! settings can coexist (and tests can run on small grids).

use serde::{Deserialize, Serialize};

/// Default grid side length.
pub const DEFAULT_NUM_CELLS: usize = 6;

/// Default palette size.
pub const DEFAULT_NUM_COLORS: u8 = 5;

/// Default move budget for `Moves` games.
pub const DEFAULT_INITIAL_MOVES: i32 = 15;

/// Default time budget (in ticks) for `Timed` games.
pub const DEFAULT_INITIAL_TIME: i32 = 30;

/// Complete engine configuration.
///
/// ```
/// use dots_engine::DotsConfig;
///
/// let config = DotsConfig::new(3, 2).with_initial_moves(4);
/// assert_eq!(config.cell_count(), 9);
/// assert_eq!(config.initial_moves, 4);
/// assert_eq!(config.initial_time, 30);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DotsConfig {
    /// Side length of the square grid.
    pub num_cells: usize,

    /// Number of colours in the palette. Colours are `0..num_colors`.
    pub num_colors: u8,

    /// Moves granted at the start of a `Moves` game.
    pub initial_moves: i32,

    /// Ticks granted at the start of a `Timed` game.
    pub initial_time: i32,
}

impl DotsConfig {
    /// Create a configuration with the given grid side and palette size,
    /// and default budgets.
    pub fn new(num_cells: usize, num_colors: u8) -> Self {
        assert!(num_cells > 0, "Grid must have at least 1 cell per side");
        assert!(num_colors > 0, "Palette must have at least 1 color");

        Self {
            num_cells,
            num_colors,
            initial_moves: DEFAULT_INITIAL_MOVES,
            initial_time: DEFAULT_INITIAL_TIME,
        }
    }

    /// Set the starting move budget.
    #[must_use]
    pub fn with_initial_moves(mut self, moves: i32) -> Self {
        self.initial_moves = moves;
        self
    }

    /// Set the starting time budget.
    #[must_use]
    pub fn with_initial_time(mut self, time: i32) -> Self {
        self.initial_time = time;
        self
    }

    /// Total number of cells on the board.
    #[must_use]
    pub const fn cell_count(&self) -> usize {
        self.num_cells * self.num_cells
    }
}

impl Default for DotsConfig {
    fn default() -> Self {
        Self::new(DEFAULT_NUM_CELLS, DEFAULT_NUM_COLORS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DotsConfig::default();
        assert_eq!(config.num_cells, 6);
        assert_eq!(config.num_colors, 5);
        assert_eq!(config.initial_moves, 15);
        assert_eq!(config.initial_time, 30);
        assert_eq!(config.cell_count(), 36);
    }

    #[test]
    fn test_config_builder() {
        let config = DotsConfig::new(4, 3)
            .with_initial_moves(2)
            .with_initial_time(10);

        assert_eq!(config.num_cells, 4);
        assert_eq!(config.num_colors, 3);
        assert_eq!(config.initial_moves, 2);
        assert_eq!(config.initial_time, 10);
    }

    #[test]
    fn test_config_serde() {
        let config = DotsConfig::new(3, 2).with_initial_time(5);
        let json = serde_json::to_string(&config).unwrap();
        let restored: DotsConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, restored);
    }

    #[test]
    #[should_panic(expected = "Grid must have at least 1 cell per side")]
    fn test_config_zero_cells() {
        DotsConfig::new(0, 5);
    }

    #[test]
    #[should_panic(expected = "Palette must have at least 1 color")]
    fn test_config_zero_colors() {
        DotsConfig::new(6, 0);
    }
}
