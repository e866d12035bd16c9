use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::GameSettings;
use crate::game::state::GameState;
use crate::game::types::{Collision, Direction, GameStatus, Position, TickOutcome};

fn seeded_settings(seed: u64) -> GameSettings {
    GameSettings { rng_seed: Some(seed), ..GameSettings::default() }
}

fn running_game(grid_size: i32) -> GameState {
    let mut game = GameState::new(seeded_settings(1));
    assert!(game.start(grid_size));
    game
}

fn body(game: &GameState) -> Vec<Position> {
    game.snake().iter().copied().collect()
}

fn p(x: i32, y: i32) -> Position {
    Position::new(x, y)
}

#[test]
fn test_start_resets_to_canonical_state() {
    let game = running_game(20);
    assert_eq!(game.status(), GameStatus::Running);
    assert_eq!(body(&game), vec![p(10, 10), p(9, 10), p(8, 10)]);
    assert_eq!(game.direction(), Direction::Right);
    assert_eq!(game.score(), 0);
    assert_eq!(game.interval_ms(), 100);
    let food = game.food().expect("food placed");
    assert!(!game.snake().contains(&food));
}

#[test]
fn test_tick_moves_without_growing() {
    let mut game = running_game(20);
    game.set_food(Some(p(0, 0)));

    assert_eq!(game.tick(), TickOutcome::Moved);
    assert_eq!(body(&game), vec![p(11, 10), p(10, 10), p(9, 10)]);
    assert_eq!(game.score(), 0);
}

#[test]
fn test_leaving_grid_is_game_over() {
    let mut game = running_game(20);
    game.set_snake(&[p(19, 10), p(18, 10), p(17, 10)], Direction::Right);
    game.set_food(Some(p(0, 0)));

    assert_eq!(game.tick(), TickOutcome::GameOver(Collision::Wall));
    assert_eq!(game.status(), GameStatus::GameOver);
    // Body is left as it was before the fatal move.
    assert_eq!(body(&game)[0], p(19, 10));
}

#[test]
fn test_top_and_left_edges() {
    let mut game = running_game(20);
    game.set_snake(&[p(0, 5), p(1, 5), p(2, 5)], Direction::Left);
    assert_eq!(game.tick(), TickOutcome::GameOver(Collision::Wall));

    let mut game = running_game(20);
    game.set_snake(&[p(5, 0), p(5, 1), p(5, 2)], Direction::Up);
    assert_eq!(game.tick(), TickOutcome::GameOver(Collision::Wall));
}

#[test]
fn test_reverse_turn_rejected() {
    let mut game = running_game(20);
    game.set_snake(&[p(5, 5), p(5, 6), p(5, 7)], Direction::Up);
    game.set_food(Some(p(0, 0)));

    game.propose_direction(Direction::Down);
    assert_eq!(game.tick(), TickOutcome::Moved);
    assert_eq!(body(&game)[0], p(5, 4));
    assert_eq!(game.direction(), Direction::Up);
}

#[test]
fn test_reverse_checked_against_current_not_pending() {
    let mut game = running_game(20);
    game.set_food(Some(p(0, 0)));
    // Moving right: Up is buffered, then Left is still a reversal of the current heading.
    game.propose_direction(Direction::Up);
    game.propose_direction(Direction::Left);
    game.tick();
    assert_eq!(game.direction(), Direction::Up);
    assert_eq!(body(&game)[0], p(10, 9));
}

#[test]
fn test_latest_proposal_wins() {
    let mut game = running_game(20);
    game.set_food(Some(p(0, 0)));
    game.propose_direction(Direction::Up);
    game.propose_direction(Direction::Down);
    game.tick();
    assert_eq!(body(&game)[0], p(10, 11));
}

#[test]
fn test_eating_scores_grows_and_speeds_up() {
    let mut game = running_game(20);
    game.set_food(Some(p(11, 10)));

    assert_eq!(
        game.tick(),
        TickOutcome::Ate { score: 10, interval_ms: 98, sped_up: true }
    );
    assert_eq!(body(&game), vec![p(11, 10), p(10, 10), p(9, 10), p(8, 10)]);
    let food = game.food().expect("food re-placed");
    assert!(!game.snake().contains(&food));
}

#[test]
fn test_interval_floor() {
    let mut game = GameState::new(GameSettings {
        base_interval_ms: 54,
        rng_seed: Some(5),
        ..GameSettings::default()
    });
    game.start(40);
    game.set_snake(&[p(3, 20), p(2, 20), p(1, 20)], Direction::Right);

    let mut intervals = vec![game.interval_ms()];
    for _ in 0..4 {
        let head = body(&game)[0];
        game.set_food(Some(p(head.x + 1, head.y)));
        game.tick();
        intervals.push(game.interval_ms());
    }
    assert_eq!(intervals, vec![54, 52, 50, 50, 50]);

    let head = body(&game)[0];
    game.set_food(Some(p(head.x + 1, head.y)));
    assert_eq!(
        game.tick(),
        TickOutcome::Ate { score: 50, interval_ms: 50, sped_up: false }
    );
}

#[test]
fn test_tail_chasing_is_collision() {
    let mut game = running_game(20);
    // 2x2 loop with the tail at (0,0), directly left of the head.
    game.set_snake(&[p(1, 0), p(1, 1), p(0, 1), p(0, 0)], Direction::Up);
    game.set_food(Some(p(10, 10)));
    game.propose_direction(Direction::Left);

    assert_eq!(game.tick(), TickOutcome::GameOver(Collision::SelfCollision));
}

#[test]
fn test_self_collision() {
    let mut game = running_game(20);
    game.set_snake(
        &[p(5, 5), p(6, 5), p(6, 6), p(5, 6), p(4, 6)],
        Direction::Left,
    );
    game.set_food(Some(p(0, 0)));
    game.propose_direction(Direction::Down);

    assert_eq!(game.tick(), TickOutcome::GameOver(Collision::SelfCollision));
    assert_eq!(game.status(), GameStatus::GameOver);
}

#[test]
fn test_no_ops_outside_running() {
    let mut game = GameState::new(seeded_settings(2));
    assert_eq!(game.tick(), TickOutcome::Skipped);
    game.propose_direction(Direction::Up);
    assert_eq!(game.status(), GameStatus::Idle);
    assert!(!game.restart(20));

    game.start(20);
    game.set_snake(&[p(19, 0), p(18, 0), p(17, 0)], Direction::Right);
    game.tick();
    assert_eq!(game.status(), GameStatus::GameOver);

    let frozen = game.snapshot();
    game.propose_direction(Direction::Down);
    assert_eq!(game.tick(), TickOutcome::Skipped);
    assert_eq!(game.snapshot(), frozen);
    assert!(!game.start(20));
}

#[test]
fn test_restart_from_game_over_and_running() {
    let mut game = running_game(20);
    game.set_food(Some(p(11, 10)));
    game.tick();
    assert_eq!(game.score(), 10);

    assert!(game.restart(20));
    assert_eq!(game.score(), 0);
    assert_eq!(game.interval_ms(), 100);
    assert_eq!(body(&game), vec![p(10, 10), p(9, 10), p(8, 10)]);

    game.set_snake(&[p(19, 0), p(18, 0), p(17, 0)], Direction::Right);
    game.tick();
    assert!(game.restart(14));
    assert_eq!(game.status(), GameStatus::Running);
    assert_eq!(game.snapshot().grid_size, 14);
}

#[test]
fn test_stop_is_idempotent() {
    let mut game = running_game(20);
    game.stop();
    game.stop();
    assert_eq!(game.status(), GameStatus::Idle);
    assert!(game.snake().is_empty());
    assert_eq!(game.food(), None);
    assert_eq!(game.tick(), TickOutcome::Skipped);
    assert!(game.start(20));
}

#[test]
fn test_tiny_grid_clamped() {
    let mut game = GameState::new(seeded_settings(3));
    game.start(1);
    let snapshot = game.snapshot();
    assert_eq!(snapshot.grid_size, 3);
    assert!(snapshot.snake.iter().all(|c| (0..3).contains(&c.x) && (0..3).contains(&c.y)));
}

#[test]
fn test_separate_sessions_are_isolated() {
    let mut a = running_game(20);
    let b = running_game(20);
    a.set_food(Some(p(0, 0)));
    a.tick();
    assert_ne!(a.session_id(), b.session_id());
    assert_eq!(body(&b)[0], p(10, 10));
}

/// Random play over many sessions, checking the invariants after every tick.
#[test]
fn test_random_play_keeps_invariants() {
    let directions = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];
    let mut input = StdRng::seed_from_u64(99);
    let mut game = GameState::new(seeded_settings(7));
    game.start(8);

    let mut last_interval = game.interval_ms();
    let mut last_score = 0;
    for _ in 0..5_000 {
        if input.random_bool(0.3) {
            game.propose_direction(directions[input.random_range(0..4)]);
        }
        let length_before = game.snake().len();
        let outcome = game.tick();

        let cells: HashSet<Position> = game.snake().iter().copied().collect();
        assert_eq!(cells.len(), game.snake().len(), "duplicate body cell");
        if let Some(food) = game.food() {
            assert!(!cells.contains(&food), "food on body");
        }
        assert!(game.interval_ms() <= last_interval);
        assert!(game.interval_ms() >= game.settings().min_interval_ms);

        match outcome {
            TickOutcome::Ate { score, .. } => {
                assert_eq!(score, last_score + 10);
                assert_eq!(game.snake().len(), length_before + 1);
            }
            TickOutcome::Moved => assert_eq!(game.snake().len(), length_before),
            TickOutcome::GameOver(_) => {
                assert!(game.restart(8));
                last_interval = game.interval_ms();
                last_score = 0;
                continue;
            }
            TickOutcome::Skipped => panic!("running engine skipped a tick"),
        }
        last_interval = game.interval_ms();
        last_score = game.score();
    }
}
