//! Main entry point for the terminal snake game.
//!
//! Loads settings, starts the game session and terminal view actors, and
//! forwards commands typed on stdin to the session.

use actix::Actor;
use log::{error, info, warn};
use tokio::io::{AsyncBufReadExt, BufReader};

use config::GameSettings;
use game::grid::GridGeometry;
use session::GameSession;
use session::messages::{ProposeDirection, Resize, Restart, Start, Stop, Subscribe};
use terminal::input::{Command, parse_command};
use terminal::view::TerminalView;

pub mod config;
mod game;
mod session;
mod terminal;
#[cfg(test)]
mod tests;

const HELP: &str = "p: play | r: restart | q: quit | w/a/s/d or arrows + Enter: steer | swipe <dx> <dy> | resize <px>";

#[actix::main]
async fn main() -> std::io::Result<()> {
    // Initialize logger from environment variable (default to info level).
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = GameSettings::load().unwrap_or_else(|e| {
        warn!("[Config] {e}; using default settings");
        GameSettings::default()
    });
    let tile_px = settings.tile_px;
    let geometry = GridGeometry::for_viewport(settings.viewport_px, tile_px);
    info!("[Main] Grid is {0}x{0} cells", geometry.cells());

    let view = TerminalView::new(settings.output).start();
    let session = GameSession::new(settings, geometry).start();
    session.do_send(Subscribe(view.recipient()));

    println!("{HELP}");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match parse_command(&line) {
            Some(Command::Play) => session.do_send(Start),
            Some(Command::Restart) => session.do_send(Restart),
            Some(Command::Turn(direction)) => session.do_send(ProposeDirection(direction)),
            Some(Command::Resize(viewport_px)) => {
                session.do_send(Resize(GridGeometry::for_viewport(viewport_px, tile_px)))
            }
            Some(Command::Quit) => break,
            None => println!("{HELP}"),
        }
    }

    // Make sure the tick timer is gone before the runtime shuts down.
    session.send(Stop).await.map_err(|e| {
        error!("[Main] Session unreachable on shutdown: {e}");
        std::io::Error::other(e)
    })?;
    Ok(())
}
