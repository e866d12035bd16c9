//! Snake entity logic.
//!
//! This module builds the initial snake body for a new session.

use std::collections::VecDeque;

use crate::game::types::Position;

/// Head position for a fresh snake of `length` cells on an N×N grid.
///
/// Uses `start` when the whole horizontal segment fits, otherwise the grid
/// centre pushed right far enough for the tail to stay on the grid.
pub fn start_head(grid_size: i32, start: Position, length: usize) -> Position {
    let tail_span = length.saturating_sub(1) as i32;
    let fits = |p: Position| {
        p.x - tail_span >= 0 && p.x < grid_size && p.y >= 0 && p.y < grid_size
    };
    if fits(start) {
        return start;
    }
    let centre = grid_size / 2;
    Position::new(centre.max(tail_span), centre)
}

/// Build a horizontal body, head first, extending left from `head`.
pub fn spawn_snake(head: Position, length: usize) -> VecDeque<Position> {
    (0..length as i32)
        .map(|i| Position::new(head.x - i, head.y))
        .collect()
}
