//! Grid Snake - a real-time Snake game for the terminal
//!
//! This library provides:
//! - Core simulation (game module): board, snake body, tick engine
//! - Key event handling (input module)
//! - TUI rendering (render module)
//! - Session statistics (metrics module)
//! - The interactive play loop (modes module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
