//! Input translation.
//!
//! Turns raw keys, swipe deltas and typed commands into session commands.
//! The engine only ever sees a `Direction`.

use crate::game::types::Direction;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Play,
    Restart,
    Quit,
    Turn(Direction),
    /// New viewport width in pixels.
    Resize(u32),
}

/// Arrow keys (ANSI escape sequences) and WASD.
pub fn direction_from_key(key: &str) -> Option<Direction> {
    match key {
        "\x1b[A" | "w" | "W" => Some(Direction::Up),
        "\x1b[B" | "s" | "S" => Some(Direction::Down),
        "\x1b[D" | "a" | "A" => Some(Direction::Left),
        "\x1b[C" | "d" | "D" => Some(Direction::Right),
        _ => None,
    }
}

/// Swipe from touch start to touch end. The dominant axis wins; screen `y` grows downward.
pub fn direction_from_swipe(dx: f64, dy: f64) -> Option<Direction> {
    if dx.abs() > dy.abs() {
        if dx > 0.0 { Some(Direction::Right) } else { Some(Direction::Left) }
    } else if dy > 0.0 {
        Some(Direction::Down)
    } else if dy < 0.0 {
        Some(Direction::Up)
    } else {
        None
    }
}

/// Parse one line typed at the prompt.
pub fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    if let Some(direction) = direction_from_key(line) {
        return Some(Command::Turn(direction));
    }

    let mut words = line.split_whitespace();
    match words.next()? {
        "p" | "play" => Some(Command::Play),
        "r" | "restart" => Some(Command::Restart),
        "q" | "quit" => Some(Command::Quit),
        "swipe" => {
            let dx: f64 = words.next()?.parse().ok()?;
            let dy: f64 = words.next()?.parse().ok()?;
            direction_from_swipe(dx, dy).map(Command::Turn)
        }
        "resize" => words.next()?.parse().ok().map(Command::Resize),
        _ => None,
    }
}
