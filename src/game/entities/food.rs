//! Food entity logic.
//!
//! This module handles placing food on a free grid cell.

use std::collections::VecDeque;

use log::{debug, warn};
use rand::Rng;

use crate::game::types::Position;

/// Pick a uniformly random cell not covered by the snake.
///
/// Samples the whole grid and retries while the sample lands on the body.
/// Returns `None` when the snake fills every cell.
pub fn spawn_food<R: Rng>(
    grid_size: i32,
    snake: &VecDeque<Position>,
    rng: &mut R,
) -> Option<Position> {
    let cells = (grid_size as usize).saturating_mul(grid_size as usize);
    if grid_size <= 0 || snake.len() >= cells {
        warn!("[Food] No free cell to place food on a {grid_size}x{grid_size} grid");
        return None;
    }

    loop {
        let candidate = Position::new(
            rng.random_range(0..grid_size),
            rng.random_range(0..grid_size),
        );
        if !snake.contains(&candidate) {
            debug!("[Food] Placed at ({}, {})", candidate.x, candidate.y);
            return Some(candidate);
        }
    }
}
