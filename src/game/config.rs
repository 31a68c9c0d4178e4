use serde::{Deserialize, Serialize};

/// Configuration for the game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Side length of the square grid
    pub grid_size: usize,
    /// Tick period at the start of a session, in milliseconds
    pub initial_speed_ms: u64,
    /// How much the tick period shrinks per food eaten
    pub speed_step_ms: u64,
    /// Fastest allowed tick period; the ramp clamps here
    pub min_speed_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: 15,
            initial_speed_ms: 300,
            speed_step_ms: 20,
            min_speed_ms: 60,
        }
    }
}

impl GameConfig {
    /// Create a configuration with a custom grid size
    pub fn new(grid_size: usize) -> Self {
        Self {
            grid_size,
            ..Default::default()
        }
    }

    /// Small grid for testing
    pub fn small() -> Self {
        Self::new(10)
    }
}
