//! Terminal view actor.
//!
//! Observes a game session and writes its events to stdout, either as a drawn
//! board or as one JSON object per line.

use actix::prelude::*;
use log::{debug, error};

use crate::config::OutputMode;
use crate::game::types::GameStatus;
use crate::session::messages::SessionEvent;
use crate::terminal::render::{game_over_banner, print_board};

pub struct TerminalView {
    mode: OutputMode,
}

impl TerminalView {
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }
}

impl Actor for TerminalView {
    type Context = Context<Self>;
}

impl Handler<SessionEvent> for TerminalView {
    type Result = ();

    fn handle(&mut self, msg: SessionEvent, _: &mut Context<Self>) -> Self::Result {
        if self.mode == OutputMode::Json {
            match serde_json::to_string(&msg) {
                Ok(text) => println!("{text}"),
                Err(e) => error!("[TerminalView] Failed to serialize event: {e}"),
            }
            return;
        }

        match msg {
            // Nothing to draw before the first start.
            SessionEvent::StateUpdate(snapshot) if snapshot.status == GameStatus::Idle => {}
            SessionEvent::StateUpdate(snapshot) => print_board(&snapshot),
            SessionEvent::GameOver { score, cause } => {
                println!("{cause:?} - final score {score}");
                println!("{}", game_over_banner());
            }
            SessionEvent::Stopped => println!("Game closed. Type p to play again."),
            SessionEvent::ScoreChanged { score } => debug!("[TerminalView] Score {score}"),
            SessionEvent::IntervalChanged { interval_ms } => {
                debug!("[TerminalView] Tick interval {interval_ms}ms")
            }
        }
    }
}
