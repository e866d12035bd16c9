//! Board rendering (terminal).
//!
//! Draws a snapshot as text, one line per grid row.

use crate::game::types::{GameStatus, Snapshot};

const HEAD: &str = "[]";
const BODY: &str = "██";
const FOOD: &str = "<>";
const EMPTY: &str = " .";

/// Render the board and score line.
pub fn render_board(snapshot: &Snapshot) -> String {
    let mut out = String::new();
    for y in 0..snapshot.grid_size {
        for x in 0..snapshot.grid_size {
            let symbol = match snapshot.snake.iter().position(|p| p.x == x && p.y == y) {
                Some(0) => HEAD,
                Some(_) => BODY,
                None if snapshot.food.is_some_and(|f| f.x == x && f.y == y) => FOOD,
                None => EMPTY,
            };
            out.push_str(symbol);
        }
        out.push('\n');
    }
    out.push_str(&score_line(snapshot.score));
    out.push('\n');
    if snapshot.status == GameStatus::GameOver {
        out.push_str(&game_over_banner());
        out.push('\n');
    }
    out
}

pub fn score_line(score: u32) -> String {
    format!("SCORE: {score}")
}

pub fn game_over_banner() -> String {
    "GAME OVER - type r to restart, q to quit".to_string()
}

/// Print the board to stdout, clearing the screen first.
pub fn print_board(snapshot: &Snapshot) {
    print!("\x1b[2J\x1b[H{}", render_board(snapshot));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::types::{Direction, Position};
    use uuid::Uuid;

    fn snapshot(status: GameStatus) -> Snapshot {
        Snapshot {
            session_id: Uuid::nil(),
            status,
            grid_size: 4,
            snake: vec![Position::new(2, 1), Position::new(1, 1), Position::new(0, 1)],
            food: Some(Position::new(3, 3)),
            direction: Direction::Right,
            score: 20,
            interval_ms: 96,
        }
    }

    #[test]
    fn test_board_layout() {
        let text = render_board(&snapshot(GameStatus::Running));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], " . . . .");
        assert_eq!(lines[1], "████[] .");
        assert_eq!(lines[3], " . . .<>");
        assert_eq!(lines[4], "SCORE: 20");
        assert_eq!(lines.len(), 5);
    }

    #[test]
    fn test_game_over_banner_shown() {
        let text = render_board(&snapshot(GameStatus::GameOver));
        assert!(text.ends_with(&format!("{}\n", game_over_banner())));
    }
}
