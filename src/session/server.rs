use actix::prelude::*;
use actix::MessageResult;
use log::{debug, info};

use crate::config::GameSettings;
use crate::game::grid::GridGeometry;
use crate::game::state::GameState;
use crate::session::messages::{
    GetSnapshot, ProposeDirection, Resize, Restart, SessionEvent, Start, Stop, Subscribe,
};
use crate::session::tick_loop::{cancel_tick, schedule_tick};

/// One game session: the engine, its tick timer and whoever is watching.
///
/// The actor mailbox serializes ticks and direction proposals, so the
/// engine's pending-direction slot is only ever touched by one message at a time.
pub struct GameSession {
    pub(crate) state: GameState,
    pub(crate) geometry: GridGeometry,
    pub(crate) observers: Vec<Recipient<SessionEvent>>,
    pub(crate) tick_timer: Option<SpawnHandle>,
}

impl Actor for GameSession {
    type Context = Context<Self>;

    fn stopped(&mut self, _: &mut Self::Context) {
        debug!("[GameSession] Actor for session {} stopped", self.state.session_id());
    }
}

impl GameSession {
    pub fn new(settings: GameSettings, geometry: GridGeometry) -> Self {
        Self {
            state: GameState::new(settings),
            geometry,
            observers: Vec::new(),
            tick_timer: None,
        }
    }

    /// Send an event to every observer.
    pub(crate) fn broadcast(&self, event: SessionEvent) {
        for observer in &self.observers {
            observer.do_send(event.clone());
        }
    }

    pub(crate) fn send_state(&self) {
        self.broadcast(SessionEvent::StateUpdate(self.state.snapshot()));
    }

    /// Announce a freshly initialized session and arm the first tick.
    fn begin(&mut self, ctx: &mut Context<Self>) {
        self.broadcast(SessionEvent::ScoreChanged { score: self.state.score() });
        self.broadcast(SessionEvent::IntervalChanged { interval_ms: self.state.interval_ms() });
        self.send_state();
        schedule_tick(self, ctx);
    }
}

impl Handler<Start> for GameSession {
    type Result = ();

    fn handle(&mut self, _: Start, ctx: &mut Context<Self>) -> Self::Result {
        if self.state.start(self.geometry.cells()) {
            self.begin(ctx);
        }
    }
}

impl Handler<Restart> for GameSession {
    type Result = ();

    fn handle(&mut self, _: Restart, ctx: &mut Context<Self>) -> Self::Result {
        if self.state.restart(self.geometry.cells()) {
            self.begin(ctx);
        }
    }
}

impl Handler<Stop> for GameSession {
    type Result = ();

    fn handle(&mut self, _: Stop, ctx: &mut Context<Self>) -> Self::Result {
        cancel_tick(self, ctx);
        self.state.stop();
        self.broadcast(SessionEvent::Stopped);
    }
}

impl Handler<ProposeDirection> for GameSession {
    type Result = ();

    fn handle(&mut self, msg: ProposeDirection, _: &mut Context<Self>) -> Self::Result {
        self.state.propose_direction(msg.0);
    }
}

impl Handler<Resize> for GameSession {
    type Result = ();

    fn handle(&mut self, msg: Resize, _: &mut Context<Self>) -> Self::Result {
        if msg.0 != self.geometry {
            info!(
                "[GameSession] Grid resized to {} cells, applied on next start",
                msg.0.cells()
            );
            self.geometry = msg.0;
        }
    }
}

impl Handler<Subscribe> for GameSession {
    type Result = ();

    fn handle(&mut self, msg: Subscribe, _: &mut Context<Self>) -> Self::Result {
        msg.0.do_send(SessionEvent::StateUpdate(self.state.snapshot()));
        self.observers.push(msg.0);
    }
}

impl Handler<GetSnapshot> for GameSession {
    type Result = MessageResult<GetSnapshot>;

    fn handle(&mut self, _: GetSnapshot, _: &mut Context<Self>) -> Self::Result {
        MessageResult(self.state.snapshot())
    }
}
