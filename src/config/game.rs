/// Game configuration constants.
///
/// Default gameplay parameters: tick timing, speed ramp, scoring and the
/// canonical starting position of the snake.

/// Tick interval at the start of a session, in milliseconds.
pub const BASE_INTERVAL_MS: u64 = 100;

/// The tick interval never drops below this value (milliseconds).
pub const MIN_INTERVAL_MS: u64 = 50;

/// Amount removed from the tick interval each time food is eaten.
pub const INTERVAL_STEP_MS: u64 = 2;

/// Score awarded per food eaten.
pub const FOOD_REWARD: u32 = 10;

/// Number of cells in the snake at the start of a session.
pub const INITIAL_LENGTH: usize = 3;

/// Canonical head position; the body extends to the left of it.
pub const START_X: i32 = 10;
pub const START_Y: i32 = 10;
