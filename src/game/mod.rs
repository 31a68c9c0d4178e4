//! Core simulation for grid Snake
//!
//! Everything in here is pure game logic with no I/O or rendering
//! dependencies: the board numbering, the snake body, direction
//! resolution, food spawning and the tick engine.

pub mod board;
pub mod body;
pub mod config;
pub mod direction;
pub mod engine;
pub mod food;

// Re-export commonly used types
pub use board::{Board, CellId, Coord};
pub use body::{Segment, SnakeBody};
pub use config::GameConfig;
pub use direction::Direction;
pub use engine::{CellContent, CollisionKind, Phase, SimulationEngine, TickOutcome};
pub use food::FoodSpawner;
