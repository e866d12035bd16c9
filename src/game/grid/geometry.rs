//! Grid geometry.
//!
//! Derives the square grid from the canvas size and tile size. The canvas
//! follows the viewport width in fixed steps.

use serde::{Serialize, Deserialize};

use crate::config::viewport::{CANVAS_BREAKPOINTS, MAX_CANVAS_PX};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridGeometry {
    pub canvas_px: u32,
    pub tile_px: u32,
}

/// Canvas side in pixels for a viewport of the given width.
pub fn canvas_size_for_viewport(viewport_px: u32) -> u32 {
    CANVAS_BREAKPOINTS
        .iter()
        .find(|(below, _)| viewport_px < *below)
        .map(|(_, canvas)| *canvas)
        .unwrap_or(MAX_CANVAS_PX)
}

impl GridGeometry {
    pub fn for_viewport(viewport_px: u32, tile_px: u32) -> Self {
        Self {
            canvas_px: canvas_size_for_viewport(viewport_px),
            tile_px: tile_px.max(1),
        }
    }

    /// Number of cells per side. A partial tile at the canvas edge is a playable cell.
    pub fn cells(&self) -> i32 {
        self.canvas_px.div_ceil(self.tile_px.max(1)) as i32
    }
}
