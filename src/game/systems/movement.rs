//! Snake movement system.
//!
//! This module computes where the head goes next and whether that cell is on the grid.

use crate::game::types::{Direction, Position};

/// Cell reached by stepping once from `head` in `direction`.
pub fn next_head(head: Position, direction: Direction) -> Position {
    let (dx, dy) = direction.delta();
    Position::new(head.x + dx, head.y + dy)
}

/// True when `pos` lies inside `[0, grid_size)` on both axes.
pub fn in_bounds(pos: Position, grid_size: i32) -> bool {
    (0..grid_size).contains(&pos.x) && (0..grid_size).contains(&pos.y)
}
