/// Direction the snake can move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// Returns the (d_row, d_col) delta for moving in this direction
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
        }
    }

    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
        }
    }

    /// Returns true if turning from self to other would be a 180-degree turn
    pub fn is_opposite(&self, other: Direction) -> bool {
        self.opposite() == other
    }
}

/// Resolve the pending player input against the direction in effect.
///
/// A request for the exact opposite of the current travel direction is
/// neutralized, keeping the current heading. This is the sole reversal
/// guard and runs once per tick, not per key event.
pub fn resolve_pending(current: Direction, requested: Option<Direction>) -> Direction {
    match requested {
        Some(dir) if !current.is_opposite(dir) => dir,
        _ => current,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_delta() {
        assert_eq!(Direction::Up.delta(), (-1, 0));
        assert_eq!(Direction::Right.delta(), (0, 1));
        assert_eq!(Direction::Down.delta(), (1, 0));
        assert_eq!(Direction::Left.delta(), (0, -1));
    }

    #[test]
    fn test_opposite_directions() {
        assert!(Direction::Up.is_opposite(Direction::Down));
        assert!(Direction::Down.is_opposite(Direction::Up));
        assert!(Direction::Left.is_opposite(Direction::Right));
        assert!(Direction::Right.is_opposite(Direction::Left));

        assert!(!Direction::Up.is_opposite(Direction::Left));
        assert!(!Direction::Up.is_opposite(Direction::Right));
        assert!(!Direction::Up.is_opposite(Direction::Up));
    }

    #[test]
    fn test_resolve_pending_accepts_turns() {
        assert_eq!(
            resolve_pending(Direction::Right, Some(Direction::Up)),
            Direction::Up
        );
        assert_eq!(
            resolve_pending(Direction::Right, Some(Direction::Down)),
            Direction::Down
        );
    }

    #[test]
    fn test_resolve_pending_rejects_reversal() {
        assert_eq!(
            resolve_pending(Direction::Right, Some(Direction::Left)),
            Direction::Right
        );
        assert_eq!(
            resolve_pending(Direction::Up, Some(Direction::Down)),
            Direction::Up
        );
    }

    #[test]
    fn test_resolve_pending_without_input_keeps_heading() {
        assert_eq!(resolve_pending(Direction::Left, None), Direction::Left);
    }
}
