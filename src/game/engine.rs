use super::board::{Board, CellId, Coord};
use super::body::SnakeBody;
use super::config::GameConfig;
use super::direction::{resolve_pending, Direction};
use super::food::FoodSpawner;

/// Where a session currently stands. The timer is inert outside `Running`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Before the first start; nothing has been played yet
    Idle,
    /// Ticks mutate state
    Running,
    /// Terminal until the next explicit `start()`
    GameOver,
}

/// Type of collision that ended a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionKind {
    /// Next head coordinate left the board
    Wall,
    /// Next head cell was already part of the body
    SelfBite,
}

/// Result of one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The engine was not running; nothing happened
    Skipped,
    /// Normal locomotion into a free cell
    Moved,
    /// The head landed on the food cell
    AteFood,
    /// The session ended this tick
    GameOver(CollisionKind),
}

/// Classification of one grid cell for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellContent {
    Empty,
    Snake,
    Food,
}

/// Offset added to the starting head cell to place the first food
const INITIAL_FOOD_OFFSET: CellId = 5;

/// The simulation engine: owns the whole session (body, food, direction,
/// score, speed, phase) and mutates it only through `start`, `tick` and
/// `request_direction`. The presentation layer reads state through the
/// accessors and never writes.
pub struct SimulationEngine {
    config: GameConfig,
    board: Board,
    spawner: FoodSpawner,
    body: SnakeBody,
    food: CellId,
    direction: Direction,
    pending: Option<Direction>,
    score: u32,
    speed_ms: u64,
    phase: Phase,
}

impl SimulationEngine {
    pub fn new(config: GameConfig) -> Self {
        let board = Board::new(config.grid_size);
        let mut spawner = FoodSpawner::new();

        let start = Self::starting_coord(&board);
        let body = SnakeBody::new(start, board.cell_at(start));
        let food = Self::initial_food(&board, &body, &mut spawner);

        Self {
            speed_ms: config.initial_speed_ms,
            config,
            board,
            spawner,
            body,
            food,
            direction: Direction::Right,
            pending: None,
            score: 0,
            phase: Phase::Idle,
        }
    }

    /// Begin a fresh session. Always yields the same starting layout:
    /// a single segment at `row = col = round(N/3)`, heading Right,
    /// score 0, speed at the configured initial period.
    pub fn start(&mut self) {
        let start = Self::starting_coord(&self.board);
        self.body = SnakeBody::new(start, self.board.cell_at(start));
        self.food = Self::initial_food(&self.board, &self.body, &mut self.spawner);
        self.direction = Direction::Right;
        self.pending = None;
        self.score = 0;
        self.speed_ms = self.config.initial_speed_ms;
        self.phase = Phase::Running;
    }

    /// Record the latest player heading request. Last writer wins; the
    /// slot is read once at the start of the next tick, where the
    /// reversal guard is applied.
    pub fn request_direction(&mut self, direction: Direction) {
        self.pending = Some(direction);
    }

    /// Advance the simulation by one step
    pub fn tick(&mut self) -> TickOutcome {
        if self.phase != Phase::Running {
            return TickOutcome::Skipped;
        }

        self.direction = resolve_pending(self.direction, self.pending.take());

        let (d_row, d_col) = self.direction.delta();
        let next = self.body.head().coord.moved_by(d_row, d_col);

        // Wall hit and self bite share one rule; the tail cell still
        // counts as occupied because it has not been shed yet.
        if !self.board.in_bounds(next) {
            self.phase = Phase::GameOver;
            return TickOutcome::GameOver(CollisionKind::Wall);
        }
        let next_cell = self.board.cell_at(next);
        if self.body.occupies(next_cell) {
            self.phase = Phase::GameOver;
            return TickOutcome::GameOver(CollisionKind::SelfBite);
        }

        let ate = next_cell == self.food;
        self.body.advance_head(next, next_cell);

        if ate {
            self.handle_food_consumption(next_cell);
            TickOutcome::AteFood
        } else {
            self.body.remove_tail();
            TickOutcome::Moved
        }
    }

    /// Grow the body, respawn the food and ramp the session scalars.
    ///
    /// Locomotion sheds the tail every tick; eating regrows a segment in
    /// the cell the tail just vacated, for a net length gain of one. When
    /// the coordinate straight behind the tail is off the board, or is
    /// already part of the body, the regrowth is skipped and the snake
    /// keeps its length this tick.
    fn handle_food_consumption(&mut self, eaten: CellId) {
        let tail = self.body.tail();
        let growth = self.tail_growth_coord();
        self.body.remove_tail();
        if self.board.in_bounds(growth) && !self.body.occupies(self.board.cell_at(growth)) {
            self.body.grow_at_tail(tail.coord, tail.cell);
        }

        self.food = self.spawner.spawn(&self.board, &self.body, Some(eaten));
        self.score += 1;
        self.speed_ms = self
            .speed_ms
            .saturating_sub(self.config.speed_step_ms)
            .max(self.config.min_speed_ms);
    }

    /// The coordinate one step straight behind the tail: opposite the
    /// heading from the tail to its successor, or opposite the travel
    /// direction while the body has no successor to read from.
    fn tail_growth_coord(&self) -> Coord {
        let tail = self.body.tail();
        let (d_row, d_col) = match self.body.ahead_of_tail() {
            Some(next) => (
                next.coord.row - tail.coord.row,
                next.coord.col - tail.coord.col,
            ),
            None => self.direction.delta(),
        };
        tail.coord.moved_by(-d_row, -d_col)
    }

    /// `row = col = round(N/3)`, rounding half up
    fn starting_coord(board: &Board) -> Coord {
        let third = (board.size() + 1) / 3;
        Coord::new(third, third)
    }

    /// First food sits a fixed offset past the starting head cell; when
    /// that id falls off the board (tiny grids) the spawner places it.
    fn initial_food(board: &Board, body: &SnakeBody, spawner: &mut FoodSpawner) -> CellId {
        let candidate = body.head().cell + INITIAL_FOOD_OFFSET;
        if candidate <= board.cell_count() && !body.occupies(candidate) {
            candidate
        } else {
            spawner.spawn(board, body, None)
        }
    }

    // --- read-only view for the presentation layer ---

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Current tick period in milliseconds. The timer must re-read this
    /// after every tick; it shrinks as food is eaten.
    pub fn speed_ms(&self) -> u64 {
        self.speed_ms
    }

    pub fn snake_len(&self) -> usize {
        self.body.len()
    }

    pub fn head_cell(&self) -> CellId {
        self.body.head().cell
    }

    pub fn food_cell(&self) -> CellId {
        self.food
    }

    /// Classify one cell for rendering
    pub fn content_at(&self, coord: Coord) -> CellContent {
        let cell = self.board.cell_at(coord);
        if self.body.occupies(cell) {
            CellContent::Snake
        } else if cell == self.food {
            CellContent::Food
        } else {
            CellContent::Empty
        }
    }
}
