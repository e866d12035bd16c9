use serde::{Serialize, Deserialize};
use uuid::Uuid;

/// A grid cell, 0-indexed. Signed so a head that steps off the grid is representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Movement intent. Screen coordinates: `Up` decreases `y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit vector (dx, dy) for this direction.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Idle,
    Running,
    GameOver,
}

/// What ended a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Collision {
    Wall,
    SelfCollision,
}

/// Result of a single `tick()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The engine was not running; nothing happened.
    Skipped,
    /// The snake advanced one cell without eating.
    Moved,
    /// The snake ate and grew. `sped_up` is false once the interval sits at its floor.
    Ate { score: u32, interval_ms: u64, sped_up: bool },
    /// The head left the grid or hit the body.
    GameOver(Collision),
}

/// Read-only view of a session, handed to renderers and observers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub session_id: Uuid,
    pub status: GameStatus,
    pub grid_size: i32,
    /// Head first.
    pub snake: Vec<Position>,
    pub food: Option<Position>,
    pub direction: Direction,
    pub score: u32,
    pub interval_ms: u64,
}
