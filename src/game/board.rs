/// Stable integer identifier for one grid position, assigned row-major
/// starting from 1 at the top-left corner.
pub type CellId = u32;

/// A position on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Offset by a (d_row, d_col) delta
    pub fn moved_by(&self, d_row: i32, d_col: i32) -> Self {
        Self {
            row: self.row + d_row,
            col: self.col + d_col,
        }
    }
}

/// An N×N grid with a fixed coordinate-to-cell-id numbering.
///
/// The numbering is assigned once at construction time and never changes;
/// the board itself holds no game state and can be shared across sessions.
#[derive(Debug, Clone, Copy)]
pub struct Board {
    size: i32,
}

impl Board {
    pub fn new(size: usize) -> Self {
        Self { size: size as i32 }
    }

    pub fn size(&self) -> i32 {
        self.size
    }

    /// Total number of cells (N²); also the largest valid cell id.
    pub fn cell_count(&self) -> u32 {
        (self.size * self.size) as u32
    }

    /// Cell id for a coordinate: `row * N + col + 1`, 1-based row-major.
    /// Caller must pass an in-bounds coordinate.
    pub fn cell_at(&self, coord: Coord) -> CellId {
        (coord.row * self.size + coord.col + 1) as CellId
    }

    /// Coordinate for a cell id, inverting `cell_at`.
    pub fn coord_of(&self, cell: CellId) -> Coord {
        let index = cell as i32 - 1;
        Coord::new(index / self.size, index % self.size)
    }

    /// Whether a coordinate lies on the board. Fails closed: any
    /// out-of-range row or column yields false, never a panic.
    pub fn in_bounds(&self, coord: Coord) -> bool {
        coord.row >= 0 && coord.row < self.size && coord.col >= 0 && coord.col < self.size
    }
}
