use rand::Rng;

use super::board::{Board, CellId};
use super::body::SnakeBody;

/// Spawns food on a uniformly random free cell.
///
/// Rejection sampling over `[1, N²]`: cheap while the board is sparse,
/// which it is for the whole of a normal game.
pub struct FoodSpawner {
    rng: rand::rngs::ThreadRng,
}

impl FoodSpawner {
    pub fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }

    /// Pick a cell that is neither occupied by the snake nor equal to the
    /// previous food cell.
    pub fn spawn(&mut self, board: &Board, body: &SnakeBody, previous: Option<CellId>) -> CellId {
        loop {
            let cell = self.rng.gen_range(1..=board.cell_count());
            if body.occupies(cell) {
                continue;
            }
            if previous == Some(cell) {
                continue;
            }
            return cell;
        }
    }
}

impl Default for FoodSpawner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::board::Coord;

    #[test]
    fn test_spawn_avoids_snake_and_previous_food() {
        let board = Board::new(2);
        let mut body = SnakeBody::new(Coord::new(0, 0), board.cell_at(Coord::new(0, 0)));
        body.advance_head(Coord::new(0, 1), board.cell_at(Coord::new(0, 1)));

        // Cells 1 and 2 are snake, cell 3 was the previous food; only 4 is left
        let mut spawner = FoodSpawner::new();
        for _ in 0..50 {
            assert_eq!(spawner.spawn(&board, &body, Some(3)), 4);
        }
    }

    #[test]
    fn test_spawn_stays_on_board() {
        let board = Board::new(4);
        let body = SnakeBody::new(Coord::new(1, 1), board.cell_at(Coord::new(1, 1)));
        let mut spawner = FoodSpawner::new();

        for _ in 0..200 {
            let cell = spawner.spawn(&board, &body, None);
            assert!(cell >= 1 && cell <= board.cell_count());
            assert!(!body.occupies(cell));
        }
    }
}
