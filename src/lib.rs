//! Snake Arcade - a single-screen Snake game for the terminal
//!
//! This library provides:
//! - Core game rules and state (game module)
//! - High-score persistence (storage module)
//! - Keyboard and swipe input mapping (input module)
//! - TUI rendering (render module)
//! - Session counters (metrics module)
//! - The tick driver and interactive play loop (modes module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
pub mod storage;
