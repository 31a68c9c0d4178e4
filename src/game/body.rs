use std::collections::{HashSet, VecDeque};

use super::board::{CellId, Coord};

/// One occupied grid position currently part of the snake's body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub coord: Coord,
    pub cell: CellId,
}

/// The snake's body: an ordered sequence of segments with the head at the
/// front and the tail at the back, mirrored by a cell-id set for O(1)
/// membership tests.
///
/// The set is updated inside every mutator, in the same step as the deque,
/// so the two can never be observed out of sync.
#[derive(Debug, Clone)]
pub struct SnakeBody {
    segments: VecDeque<Segment>,
    occupancy: HashSet<CellId>,
}

impl SnakeBody {
    /// Single-segment body; head and tail are the same segment
    pub fn new(coord: Coord, cell: CellId) -> Self {
        let mut segments = VecDeque::new();
        segments.push_front(Segment { coord, cell });

        let mut occupancy = HashSet::new();
        occupancy.insert(cell);

        Self {
            segments,
            occupancy,
        }
    }

    pub fn head(&self) -> Segment {
        *self.segments.front().expect("snake body is never empty")
    }

    pub fn tail(&self) -> Segment {
        *self.segments.back().expect("snake body is never empty")
    }

    /// The tail's successor toward the head, or None for a one-segment body
    pub fn ahead_of_tail(&self) -> Option<Segment> {
        let len = self.segments.len();
        if len < 2 {
            None
        } else {
            self.segments.get(len - 2).copied()
        }
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// O(1) occupancy test
    pub fn occupies(&self, cell: CellId) -> bool {
        self.occupancy.contains(&cell)
    }

    pub fn occupancy_len(&self) -> usize {
        self.occupancy.len()
    }

    /// Append a new head segment. The caller must already have checked the
    /// cell for collisions; the tail is not removed here.
    pub fn advance_head(&mut self, coord: Coord, cell: CellId) {
        self.segments.push_front(Segment { coord, cell });
        self.occupancy.insert(cell);
    }

    /// Detach the tail segment and return its cell. After removal the tail
    /// is whichever segment now sits at the back of the deque.
    pub fn remove_tail(&mut self) -> CellId {
        let removed = self
            .segments
            .pop_back()
            .expect("snake body is never empty");
        self.occupancy.remove(&removed.cell);
        removed.cell
    }

    /// Append a new segment behind the current tail, extending the body by
    /// one without a matching tail removal.
    pub fn grow_at_tail(&mut self, coord: Coord, cell: CellId) {
        self.segments.push_back(Segment { coord, cell });
        self.occupancy.insert(cell);
    }

    pub fn segments(&self) -> impl Iterator<Item = &Segment> {
        self.segments.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_segment_body() {
        let body = SnakeBody::new(Coord::new(5, 5), 81);
        assert_eq!(body.len(), 1);
        assert_eq!(body.head(), body.tail());
        assert!(body.occupies(81));
        assert!(!body.occupies(82));
        assert_eq!(body.ahead_of_tail(), None);
    }

    #[test]
    fn test_advance_head_keeps_tail() {
        let mut body = SnakeBody::new(Coord::new(5, 5), 81);
        body.advance_head(Coord::new(5, 6), 82);

        assert_eq!(body.len(), 2);
        assert_eq!(body.head().cell, 82);
        assert_eq!(body.tail().cell, 81);
        assert!(body.occupies(81));
        assert!(body.occupies(82));
    }

    #[test]
    fn test_remove_tail_moves_tail_forward() {
        let mut body = SnakeBody::new(Coord::new(5, 5), 81);
        body.advance_head(Coord::new(5, 6), 82);

        let removed = body.remove_tail();
        assert_eq!(removed, 81);
        assert_eq!(body.len(), 1);
        assert_eq!(body.head(), body.tail());
        assert!(!body.occupies(81));
        assert!(body.occupies(82));
    }

    #[test]
    fn test_grow_at_tail_extends_without_removal() {
        let mut body = SnakeBody::new(Coord::new(5, 5), 81);
        body.grow_at_tail(Coord::new(5, 4), 80);

        assert_eq!(body.len(), 2);
        assert_eq!(body.head().cell, 81);
        assert_eq!(body.tail().cell, 80);
        assert!(body.occupies(80));
    }

    #[test]
    fn test_ahead_of_tail() {
        let mut body = SnakeBody::new(Coord::new(5, 5), 81);
        body.advance_head(Coord::new(5, 6), 82);
        body.advance_head(Coord::new(5, 7), 83);

        // Tail is (5,5); its successor toward the head is (5,6)
        assert_eq!(body.tail().cell, 81);
        assert_eq!(body.ahead_of_tail().map(|s| s.cell), Some(82));
    }

    #[test]
    fn test_occupancy_mirrors_sequence() {
        let mut body = SnakeBody::new(Coord::new(5, 5), 81);
        body.advance_head(Coord::new(5, 6), 82);
        body.advance_head(Coord::new(5, 7), 83);
        body.grow_at_tail(Coord::new(5, 4), 80);
        body.remove_tail();

        assert_eq!(body.len(), body.occupancy_len());
        for segment in body.segments() {
            assert!(body.occupies(segment.cell));
        }
    }
}
