/// Viewport and canvas sizing constants.
///
/// The canvas shrinks on narrow viewports; the grid is the canvas divided
/// into square tiles.

/// Side of one grid tile, in pixels.
pub const TILE_SIZE_PX: u32 = 20;

/// Viewport width assumed when none is supplied.
pub const DEFAULT_VIEWPORT_PX: u32 = 1024;

/// (viewport width upper bound, canvas size) pairs, checked in order.
pub const CANVAS_BREAKPOINTS: [(u32, u32); 3] = [(400, 280), (500, 300), (768, 350)];

/// Canvas size for viewports wider than every breakpoint.
pub const MAX_CANVAS_PX: u32 = 400;
