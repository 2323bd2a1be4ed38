use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::error::ConfigError;

/// Side length of the default square board
pub const BOARD_SIZE: usize = 20;
/// Default tick period in milliseconds
pub const GAME_SPEED_MS: u64 = 150;
/// Points awarded per food eaten
pub const FOOD_POINTS: u32 = 10;

pub const MIN_BOARD_SIZE: usize = 2;
pub const MAX_BOARD_SIZE: usize = 200;

/// How a move onto the cell currently holding the tail is judged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TailPolicy {
    /// The tail cell counts as occupied: moving onto it ends the game, even
    /// though it would be vacated during the same tick.
    #[default]
    Strict,
    /// The tail cell is free to enter, unless the move also eats food (the
    /// tail then stays where it is).
    Vacating,
}

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Width and height of the square game grid
    pub board_size: usize,
    /// Period between two ticks, in milliseconds
    pub tick_ms: u64,
    /// Score added for each food eaten
    pub food_points: u32,
    /// Self-collision rule for the soon-to-vacate tail cell
    pub tail_policy: TailPolicy,
    /// Fixed seed for food placement; random when unset
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: BOARD_SIZE,
            tick_ms: GAME_SPEED_MS,
            food_points: FOOD_POINTS,
            tail_policy: TailPolicy::Strict,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with a custom board size
    pub fn new(board_size: usize) -> Self {
        Self {
            board_size,
            ..Default::default()
        }
    }

    /// Create a small board for testing
    pub fn small() -> Self {
        Self::new(10)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_tail_policy(mut self, tail_policy: TailPolicy) -> Self {
        self.tail_policy = tail_policy;
        self
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    /// Total number of cells on the board
    pub fn cell_count(&self) -> usize {
        self.board_size * self.board_size
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&self.board_size) {
            return Err(ConfigError::BoardSize(self.board_size));
        }
        if self.tick_ms == 0 {
            return Err(ConfigError::ZeroTickPeriod);
        }
        if self.food_points == 0 {
            return Err(ConfigError::ZeroFoodPoints);
        }
        Ok(())
    }
}
