/// Tick scheduling for a GameSession.
///
/// Exactly one tick timer is outstanding while the engine runs. Each tick re-arms
/// the timer with the engine's current interval, so a speed-up applies from the
/// next tick on.

use std::time::Duration;
use actix::prelude::*;
use log::debug;

use crate::game::types::TickOutcome;
use crate::session::messages::SessionEvent;
use crate::session::server::GameSession;

/// Arm the next tick, replacing any timer already pending.
pub fn schedule_tick(this: &mut GameSession, ctx: &mut Context<GameSession>) {
    cancel_tick(this, ctx);
    let delay = Duration::from_millis(this.state.interval_ms());
    let handle = ctx.run_later(delay, |act, ctx| {
        act.tick_timer = None;
        resolve_tick(act, ctx);
    });
    this.tick_timer = Some(handle);
}

/// Invalidate the pending tick, if any.
pub fn cancel_tick(this: &mut GameSession, ctx: &mut Context<GameSession>) {
    if let Some(handle) = this.tick_timer.take() {
        ctx.cancel_future(handle);
        debug!("[GameSession] Tick timer cancelled");
    }
}

/// Run one engine tick, notify observers, and re-arm while still running.
pub fn resolve_tick(this: &mut GameSession, ctx: &mut Context<GameSession>) {
    match this.state.tick() {
        TickOutcome::Skipped => return,
        TickOutcome::Moved => this.send_state(),
        TickOutcome::Ate { score, interval_ms, sped_up } => {
            this.broadcast(SessionEvent::ScoreChanged { score });
            if sped_up {
                debug!("[GameSession] Interval now {interval_ms}ms");
                this.broadcast(SessionEvent::IntervalChanged { interval_ms });
            }
            this.send_state();
        }
        TickOutcome::GameOver(cause) => {
            this.broadcast(SessionEvent::GameOver { score: this.state.score(), cause });
            return;
        }
    }

    if this.state.is_running() {
        schedule_tick(this, ctx);
    }
}
