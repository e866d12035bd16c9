//! The tick engine.
//!
//! `GameState` owns one session: snake body, food, current and pending
//! direction, score and tick interval. It never schedules anything itself;
//! the session actor calls [`GameState::tick`] once per interval.

use std::collections::VecDeque;

use log::{debug, info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use uuid::Uuid;

use crate::config::GameSettings;
use crate::game::entities::{spawn_food, spawn_snake, start_head};
use crate::game::systems::{accepts_turn, hits_body, in_bounds, next_head, next_interval};
use crate::game::types::{Collision, Direction, GameStatus, Position, Snapshot, TickOutcome};

const INITIAL_DIRECTION: Direction = Direction::Right;

#[derive(Debug)]
pub struct GameState {
    session_id: Uuid,
    settings: GameSettings,
    grid_size: i32,
    snake: VecDeque<Position>,
    food: Option<Position>,
    direction: Direction,
    pending_direction: Direction,
    score: u32,
    interval_ms: u64,
    status: GameStatus,
    rng: StdRng,
}

impl GameState {
    /// Create an idle engine. Food placement is seeded from `settings.rng_seed` when set.
    pub fn new(settings: GameSettings) -> Self {
        let rng = match settings.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            session_id: Uuid::new_v4(),
            interval_ms: settings.base_interval_ms,
            settings,
            grid_size: 0,
            snake: VecDeque::new(),
            food: None,
            direction: INITIAL_DIRECTION,
            pending_direction: INITIAL_DIRECTION,
            score: 0,
            status: GameStatus::Idle,
            rng,
        }
    }

    /// Idle -> Running. Returns false (and changes nothing) from any other state.
    pub fn start(&mut self, grid_size: i32) -> bool {
        if self.status != GameStatus::Idle {
            warn!("[GameState] start ignored while {:?}", self.status);
            return false;
        }
        self.initialize(grid_size);
        info!("[GameState] Session {} started on a {}x{} grid", self.session_id, self.grid_size, self.grid_size);
        true
    }

    /// Running/GameOver -> Running with fresh state. Returns false from Idle.
    pub fn restart(&mut self, grid_size: i32) -> bool {
        if self.status == GameStatus::Idle {
            warn!("[GameState] restart ignored while Idle");
            return false;
        }
        self.initialize(grid_size);
        info!("[GameState] Session {} restarted on a {}x{} grid", self.session_id, self.grid_size, self.grid_size);
        true
    }

    /// Any state -> Idle. Discards the session. Safe to call repeatedly.
    pub fn stop(&mut self) {
        if self.status != GameStatus::Idle {
            info!("[GameState] Session {} stopped with score {}", self.session_id, self.score);
        }
        self.status = GameStatus::Idle;
        self.snake.clear();
        self.food = None;
        self.score = 0;
        self.direction = INITIAL_DIRECTION;
        self.pending_direction = INITIAL_DIRECTION;
        self.interval_ms = self.settings.base_interval_ms;
    }

    /// Reset every field for a new session; the grid size is fixed until the next call.
    fn initialize(&mut self, grid_size: i32) {
        let min_size = self.settings.initial_length as i32;
        if grid_size < min_size {
            warn!("[GameState] Grid size {grid_size} too small, using {min_size}");
        }
        self.grid_size = grid_size.max(min_size);

        let head = start_head(self.grid_size, self.settings.start, self.settings.initial_length);
        self.snake = spawn_snake(head, self.settings.initial_length);
        self.score = 0;
        self.direction = INITIAL_DIRECTION;
        self.pending_direction = INITIAL_DIRECTION;
        self.interval_ms = self.settings.base_interval_ms;
        self.status = GameStatus::Running;
        self.food = spawn_food(self.grid_size, &self.snake, &mut self.rng);
    }

    /// Buffer a direction for the next tick. Reversals of the current direction are dropped.
    pub fn propose_direction(&mut self, candidate: Direction) {
        if self.status != GameStatus::Running {
            return;
        }
        if accepts_turn(self.direction, candidate) {
            self.pending_direction = candidate;
        } else {
            debug!("[GameState] Reversal {:?} -> {:?} ignored", self.direction, candidate);
        }
    }

    /// Advance one step. No-op unless Running.
    pub fn tick(&mut self) -> TickOutcome {
        if self.status != GameStatus::Running {
            return TickOutcome::Skipped;
        }
        let Some(&head) = self.snake.front() else {
            // Running with no body cannot be reached through start/restart.
            self.stop();
            return TickOutcome::Skipped;
        };

        self.direction = self.pending_direction;
        let new_head = next_head(head, self.direction);

        if !in_bounds(new_head, self.grid_size) {
            return self.game_over(Collision::Wall);
        }
        if hits_body(&self.snake, new_head) {
            return self.game_over(Collision::SelfCollision);
        }

        self.snake.push_front(new_head);

        if self.food == Some(new_head) {
            self.score += self.settings.food_reward;
            self.food = spawn_food(self.grid_size, &self.snake, &mut self.rng);
            let previous = self.interval_ms;
            self.interval_ms = next_interval(
                previous,
                self.settings.interval_step_ms,
                self.settings.min_interval_ms,
            );
            debug!(
                "[GameState] Ate at ({}, {}), score={} interval={}ms",
                new_head.x, new_head.y, self.score, self.interval_ms
            );
            return TickOutcome::Ate {
                score: self.score,
                interval_ms: self.interval_ms,
                sped_up: self.interval_ms != previous,
            };
        }

        self.snake.pop_back();
        debug!("[GameState] Tick: head at ({}, {})", new_head.x, new_head.y);
        TickOutcome::Moved
    }

    fn game_over(&mut self, cause: Collision) -> TickOutcome {
        self.status = GameStatus::GameOver;
        info!("[GameState] Session {} over ({:?}), score {}", self.session_id, cause, self.score);
        TickOutcome::GameOver(cause)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            session_id: self.session_id,
            status: self.status,
            grid_size: self.grid_size,
            snake: self.snake.iter().copied().collect(),
            food: self.food,
            direction: self.direction,
            score: self.score,
            interval_ms: self.interval_ms,
        }
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    #[cfg(test)]
    pub(crate) fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_running(&self) -> bool {
        self.status == GameStatus::Running
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    #[cfg(test)]
    pub(crate) fn settings(&self) -> &GameSettings {
        &self.settings
    }

    #[cfg(test)]
    pub(crate) fn direction(&self) -> Direction {
        self.direction
    }

    #[cfg(test)]
    pub(crate) fn snake(&self) -> &VecDeque<Position> {
        &self.snake
    }

    #[cfg(test)]
    pub(crate) fn food(&self) -> Option<Position> {
        self.food
    }

    /// Overwrite body and heading so tests can stage exact positions.
    #[cfg(test)]
    pub(crate) fn set_snake(&mut self, body: &[Position], direction: Direction) {
        self.snake = body.iter().copied().collect();
        self.direction = direction;
        self.pending_direction = direction;
    }

    #[cfg(test)]
    pub(crate) fn set_food(&mut self, food: Option<Position>) {
        self.food = food;
    }
}
