//! Core game logic module for Snake
//!
//! This module contains all the game rules without any I/O or rendering
//! dependencies. A driver feeds it ticks and direction changes; renderers
//! read [`GameState`] back out.

pub mod action;
pub mod config;
pub mod engine;
pub mod error;
pub mod state;

// Re-export commonly used types
pub use action::Direction;
pub use config::{BOARD_SIZE, FOOD_POINTS, GAME_SPEED_MS, GameConfig, TailPolicy};
pub use engine::{GameEngine, TickOutcome};
pub use error::{ConfigError, StateError};
pub use state::{GameOverReason, GameState, Phase, Position, Snake};
