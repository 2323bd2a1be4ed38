use thiserror::Error;

use super::state::Position;

/// Rejected game configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("board size {0} is out of range ({min}..={max})", min = super::config::MIN_BOARD_SIZE, max = super::config::MAX_BOARD_SIZE)]
    BoardSize(usize),
    #[error("tick period must be at least 1ms")]
    ZeroTickPeriod,
    #[error("food must be worth at least one point")]
    ZeroFoodPoints,
}

/// Prepared state that cannot be played on the configured board
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StateError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("snake cell {0:?} is off the board")]
    SnakeOffBoard(Position),
    #[error("food {0:?} is off the board")]
    FoodOffBoard(Position),
    #[error("food {0:?} is on the snake")]
    FoodOnSnake(Position),
}
