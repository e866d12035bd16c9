/// Main configuration module.
///
/// Re-exports submodules for game and viewport constants, and the runtime
/// settings loaded at startup.
pub mod game;
pub mod viewport;
pub mod settings;

pub use settings::{ConfigError, GameSettings, OutputMode};
