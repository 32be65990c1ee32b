use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::{
    DEFAULT_TICK_INTERVAL_MS, FOOD_REWARD, GridSize, MIN_TICK_INTERVAL_MS, TICK_INTERVAL_STEP_MS,
};
use crate::food::Food;
use crate::input::{Direction, GameInput, resolve_direction};
use crate::score::{HighScoreStore, ScoreError};
use crate::snake::{Position, Snake};
use crate::step::{Outcome, advance};

/// Current high-level gameplay phase.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GamePhase {
    Running,
    Paused,
    GameOver,
    /// The snake fills the whole board; there is nowhere left to place food.
    Victory,
}

impl GamePhase {
    /// Returns true for phases the session cannot leave except via reset.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::GameOver | Self::Victory)
    }
}

/// What ended a session in `GameOver`.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum EndReason {
    WallCollision,
    SelfCollision,
}

/// Immutable view of the game state handed to the rendering layer.
#[derive(Debug, Clone)]
pub struct GameSnapshot {
    /// Body cells, head first.
    pub snake: Vec<Position>,
    pub heading: Direction,
    /// Absent only once the snake fills the board.
    pub food: Option<Food>,
    pub score: u32,
    pub high_score: u32,
    pub tick_interval_ms: u64,
    pub phase: GamePhase,
    pub end_reason: Option<EndReason>,
}

/// Complete mutable game state for one session, plus the session-scoped
/// collaborators (RNG and high-score store) that survive resets.
pub struct GameState {
    pub snake: Snake,
    /// `None` only in the board-full terminal phase, so food is never placed
    /// on a snake cell.
    pub food: Option<Food>,
    pub score: u32,
    pub phase: GamePhase,
    pub end_reason: Option<EndReason>,
    /// Committed movement direction, applied every tick.
    pub heading: Direction,
    /// Single slot written by input between ticks, read once at tick start.
    pub pending_direction: Direction,
    /// Current tick cadence in milliseconds; shrinks as food is eaten.
    pub tick_interval_ms: u64,
    high_score: u32,
    bounds: GridSize,
    rng: StdRng,
    store: Box<dyn HighScoreStore>,
    last_store_error: Option<ScoreError>,
}

impl std::fmt::Debug for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameState")
            .field("snake", &self.snake)
            .field("food", &self.food)
            .field("score", &self.score)
            .field("phase", &self.phase)
            .field("heading", &self.heading)
            .field("high_score", &self.high_score)
            .field("tick_interval_ms", &self.tick_interval_ms)
            .finish_non_exhaustive()
    }
}

impl GameState {
    /// Creates a running session on `bounds` with entropy-seeded randomness.
    ///
    /// The high score is read from `store` up front; a failed read degrades
    /// to 0 and is recorded, never propagated.
    #[must_use]
    pub fn new(bounds: GridSize, store: Box<dyn HighScoreStore>) -> Self {
        Self::with_rng(bounds, StdRng::from_entropy(), store)
    }

    /// Creates a deterministic session for tests and reproducible runs.
    #[must_use]
    pub fn new_with_seed(bounds: GridSize, seed: u64, store: Box<dyn HighScoreStore>) -> Self {
        Self::with_rng(bounds, StdRng::seed_from_u64(seed), store)
    }

    fn with_rng(bounds: GridSize, mut rng: StdRng, store: Box<dyn HighScoreStore>) -> Self {
        let (high_score, last_store_error) = match store.load() {
            Ok(score) => (score, None),
            Err(error) => (0, Some(error)),
        };

        let snake = Snake::new(start_position(bounds));
        let (food, phase) = initial_food(&mut rng, bounds, &snake);

        Self {
            snake,
            food,
            score: 0,
            phase,
            end_reason: None,
            heading: Direction::Right,
            pending_direction: Direction::Right,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            high_score,
            bounds,
            rng,
            store,
            last_store_error,
        }
    }

    /// Advances the simulation by one tick and returns the new snapshot.
    ///
    /// A no-op (returning the unchanged snapshot) unless the phase is
    /// `Running`.
    pub fn tick(&mut self) -> GameSnapshot {
        if self.phase != GamePhase::Running {
            return self.snapshot();
        }

        // Food is always present while Running; the guard keeps that local.
        let Some(food) = self.food else {
            return self.snapshot();
        };

        self.heading = self.pending_direction;

        match advance(&self.snake, self.heading, food.position, self.bounds) {
            Outcome::Blocked => {
                self.phase = GamePhase::GameOver;
                self.end_reason = Some(EndReason::WallCollision);
            }
            Outcome::SelfHit => {
                self.phase = GamePhase::GameOver;
                self.end_reason = Some(EndReason::SelfCollision);
            }
            Outcome::Moved(next) => {
                self.snake = next;
            }
            Outcome::Fed(next) => {
                self.snake = next;
                self.consume_food();
            }
        }

        self.snapshot()
    }

    fn consume_food(&mut self) {
        self.score += FOOD_REWARD;
        if self.score > self.high_score {
            self.high_score = self.score;
            if let Err(error) = self.store.save(self.high_score) {
                self.last_store_error = Some(error);
            }
        }

        self.tick_interval_ms = self
            .tick_interval_ms
            .saturating_sub(TICK_INTERVAL_STEP_MS)
            .max(MIN_TICK_INTERVAL_MS);

        self.food = Food::spawn(&mut self.rng, self.bounds, &self.snake);
        if self.food.is_none() {
            self.phase = GamePhase::Victory;
        }
    }

    /// Applies one external input event.
    pub fn apply_input(&mut self, input: GameInput) {
        match input {
            GameInput::Direction(direction) => self.request_direction(direction),
            GameInput::Pause => self.toggle_pause(),
            GameInput::Restart => self.reset(),
            GameInput::Quit => {}
        }
    }

    /// Queues a direction change for the next tick.
    ///
    /// The request is gated against the committed heading; an exact reversal
    /// is silently dropped, leaving any earlier accepted request in place.
    /// Requests are ignored entirely once the session has ended.
    pub fn request_direction(&mut self, requested: Direction) {
        if self.phase.is_terminal() {
            return;
        }

        if resolve_direction(self.heading, requested) == requested {
            self.pending_direction = requested;
        }
    }

    /// Flips Running to Paused and back. No-op once the session has ended.
    pub fn toggle_pause(&mut self) {
        self.phase = match self.phase {
            GamePhase::Running => GamePhase::Paused,
            GamePhase::Paused => GamePhase::Running,
            terminal => terminal,
        };
    }

    /// Discards the session state and starts fresh.
    ///
    /// The high score, RNG, and persistence store carry over.
    pub fn reset(&mut self) {
        self.snake = Snake::new(start_position(self.bounds));
        let (food, phase) = initial_food(&mut self.rng, self.bounds, &self.snake);
        self.food = food;
        self.phase = phase;
        self.end_reason = None;
        self.heading = Direction::Right;
        self.pending_direction = Direction::Right;
        self.score = 0;
        self.tick_interval_ms = DEFAULT_TICK_INTERVAL_MS;
    }

    /// Returns the current state without advancing it.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            snake: self.snake.segments().copied().collect(),
            heading: self.heading,
            food: self.food,
            score: self.score,
            high_score: self.high_score,
            tick_interval_ms: self.tick_interval_ms,
            phase: self.phase,
            end_reason: self.end_reason,
        }
    }

    /// Returns the session high score.
    #[must_use]
    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    /// Returns the grid dimensions for this session.
    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.bounds
    }

    /// Returns the most recent persistence failure, if any.
    #[must_use]
    pub fn last_store_error(&self) -> Option<&ScoreError> {
        self.last_store_error.as_ref()
    }
}

fn start_position(bounds: GridSize) -> Position {
    Position {
        x: i32::from(bounds.width / 2),
        y: i32::from(bounds.height / 2),
    }
}

/// Places the first food of a session. A board too small to hold both the
/// snake and a food is immediately won, and carries no food at all.
fn initial_food(rng: &mut StdRng, bounds: GridSize, snake: &Snake) -> (Option<Food>, GamePhase) {
    match Food::spawn(rng, bounds, snake) {
        Some(food) => (Some(food), GamePhase::Running),
        None => (None, GamePhase::Victory),
    }
}
