use actix::prelude::*;
use serde::{Serialize, Deserialize};

use crate::game::grid::GridGeometry;
use crate::game::types::{Collision, Direction, Snapshot};

/// Idle -> Running; begins the tick schedule.
#[derive(Message)]
#[rtype(result = "()")]
pub struct Start;

/// Any state -> Idle; cancels the tick schedule.
#[derive(Message)]
#[rtype(result = "()")]
pub struct Stop;

/// Running/GameOver -> Running with fresh state.
#[derive(Message)]
#[rtype(result = "()")]
pub struct Restart;

/// Queue a direction change for the next tick.
#[derive(Message)]
#[rtype(result = "()")]
pub struct ProposeDirection(pub Direction);

/// New grid geometry, applied at the next start/restart.
#[derive(Message)]
#[rtype(result = "()")]
pub struct Resize(pub GridGeometry);

/// Register an observer for `SessionEvent`s.
#[derive(Message)]
#[rtype(result = "()")]
pub struct Subscribe(pub Recipient<SessionEvent>);

#[derive(Message)]
#[rtype(result = "Snapshot")]
pub struct GetSnapshot;

/// Signals emitted by a session to its observers.
#[derive(Message, Clone, Serialize, Deserialize, Debug, PartialEq)]
#[rtype(result = "()")]
#[serde(tag = "event", content = "data")]
pub enum SessionEvent {
    ScoreChanged { score: u32 },
    IntervalChanged { interval_ms: u64 },
    GameOver { score: u32, cause: Collision },
    /// Board after a successful tick or a (re)start, for rendering.
    StateUpdate(Snapshot),
    Stopped,
}
