use gridsnake::config::{DEFAULT_TICK_INTERVAL_MS, GridSize};
use gridsnake::food::Food;
use gridsnake::game::{GamePhase, GameState};
use gridsnake::input::{Direction, GameInput};
use gridsnake::score::MemoryScoreStore;
use gridsnake::snake::{Position, Snake};

fn new_game(seed: u64) -> GameState {
    GameState::new_with_seed(
        GridSize::square(20),
        seed,
        Box::new(MemoryScoreStore::default()),
    )
}

#[test]
fn feeding_then_turning_then_dying_at_the_wall() {
    let mut state = new_game(42);
    state.food = Some(Food::at(Position { x: 11, y: 10 }));

    // Eat the food directly ahead.
    let snapshot = state.tick();
    assert_eq!(snapshot.phase, GamePhase::Running);
    assert_eq!(snapshot.score, 10);
    assert_eq!(
        snapshot.snake,
        vec![Position { x: 11, y: 10 }, Position { x: 10, y: 10 }]
    );
    assert_eq!(
        snapshot.tick_interval_ms,
        DEFAULT_TICK_INTERVAL_MS - 5,
        "each food tightens the tick interval"
    );

    // Park the food out of the way, turn up, and walk into the top wall.
    state.food = Some(Food::at(Position { x: 0, y: 19 }));
    state.apply_input(GameInput::Direction(Direction::Up));
    for _ in 0..10 {
        let snapshot = state.tick();
        assert_eq!(snapshot.phase, GamePhase::Running);
    }

    let snapshot = state.tick();
    assert_eq!(snapshot.phase, GamePhase::GameOver);
    assert_eq!(snapshot.snake[0], Position { x: 11, y: 0 });
    assert_eq!(snapshot.score, 10, "score frozen at its last valid value");
}

#[test]
fn reversal_requests_never_change_the_heading() {
    let mut state = new_game(7);
    state.food = Some(Food::at(Position { x: 0, y: 0 }));

    // Heading starts Right; an immediate Left must be dropped.
    state.apply_input(GameInput::Direction(Direction::Left));
    let snapshot = state.tick();
    assert_eq!(snapshot.heading, Direction::Right);
    assert_eq!(snapshot.snake[0], Position { x: 11, y: 10 });

    // After a legal turn the new committed heading gates its own opposite.
    state.apply_input(GameInput::Direction(Direction::Down));
    let snapshot = state.tick();
    assert_eq!(snapshot.heading, Direction::Down);
    assert_eq!(snapshot.snake[0], Position { x: 11, y: 11 });

    state.apply_input(GameInput::Direction(Direction::Up));
    let snapshot = state.tick();
    assert_eq!(snapshot.heading, Direction::Down);
    assert_eq!(snapshot.snake[0], Position { x: 11, y: 12 });
}

#[test]
fn pause_suspends_ticking_until_resumed() {
    let mut state = new_game(9);
    state.food = Some(Food::at(Position { x: 0, y: 0 }));

    state.apply_input(GameInput::Pause);

    // A direction request while paused lands in the pending slot...
    state.apply_input(GameInput::Direction(Direction::Down));

    let before = state.snapshot();
    let paused = state.tick();
    assert_eq!(paused.phase, GamePhase::Paused);
    assert_eq!(paused.snake, before.snake);
    assert_eq!(paused.score, before.score);
    assert_eq!(
        paused.heading,
        Direction::Right,
        "heading stays uncommitted while paused"
    );

    // ...and is committed on the first tick after resume.
    state.apply_input(GameInput::Pause);
    let resumed = state.tick();
    assert_eq!(resumed.phase, GamePhase::Running);
    assert_eq!(resumed.heading, Direction::Down);
    assert_eq!(resumed.snake[0], Position { x: 10, y: 11 });
}

#[test]
fn restart_after_game_over_preserves_high_score() {
    let mut state = new_game(11);

    // Score once, then drive into the left wall.
    state.food = Some(Food::at(Position { x: 11, y: 10 }));
    state.tick();
    assert_eq!(state.high_score(), 10);

    state.snake = Snake::from_segments(vec![Position { x: 0, y: 5 }]);
    state.heading = Direction::Left;
    state.pending_direction = Direction::Left;
    state.tick();
    assert_eq!(state.phase, GamePhase::GameOver);

    state.apply_input(GameInput::Restart);

    let snapshot = state.snapshot();
    assert_eq!(snapshot.phase, GamePhase::Running);
    assert_eq!(snapshot.snake, vec![Position { x: 10, y: 10 }]);
    assert_eq!(snapshot.score, 0);
    assert_eq!(snapshot.tick_interval_ms, DEFAULT_TICK_INTERVAL_MS);
    assert_eq!(snapshot.high_score, 10);
}

#[test]
fn same_seed_replays_the_same_food_sequence() {
    let mut first = new_game(1234);
    let mut second = new_game(1234);

    for _ in 0..5 {
        assert_eq!(first.food, second.food);

        // Feed both snakes by teleporting the food ahead of them, so the
        // next spawn draws from the RNG identically.
        let target = first.snake.head().stepped(first.heading);
        first.food = Some(Food::at(target));
        second.food = Some(Food::at(target));
        first.tick();
        second.tick();
    }

    assert_eq!(first.snapshot().score, second.snapshot().score);
    assert_eq!(first.food, second.food);
}

#[test]
fn high_scores_only_ever_increase() {
    let mut state = new_game(21);
    let mut previous = state.high_score();

    for offset in 1..=8 {
        state.food = Some(Food::at(Position {
            x: 10 + offset,
            y: 10,
        }));
        let snapshot = state.tick();

        assert!(snapshot.high_score >= previous);
        assert_eq!(snapshot.high_score, snapshot.score);
        previous = snapshot.high_score;
    }
}
