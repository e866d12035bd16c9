use std::collections::VecDeque;

use crate::game::types::{Direction, Position};

/// Whether `candidate` may replace the pending direction while moving `current`.
pub fn accepts_turn(current: Direction, candidate: Direction) -> bool {
    candidate != current.opposite()
}

/// Self-collision against the body as it was before this tick's move.
///
/// The tail counts even though it would be vacated this tick, so chasing
/// the tail ends the game.
pub fn hits_body(snake: &VecDeque<Position>, head: Position) -> bool {
    snake.contains(&head)
}

/// Interval after eating: one step faster, clamped at `min_ms`.
pub fn next_interval(current_ms: u64, step_ms: u64, min_ms: u64) -> u64 {
    current_ms.saturating_sub(step_ms).max(min_ms)
}
