use rand::Rng;
use ratatui::style::Color;

use crate::config::{FOOD_PALETTE, GridSize};
use crate::snake::{Position, Snake};

/// Rejection-sampling attempts before falling back to a full free-cell scan.
/// Keeps spawning O(1) in the common case without risking a long loop on a
/// crowded board.
const MAX_SAMPLE_ATTEMPTS: u32 = 32;

/// Food entity currently active on the board.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Food {
    pub position: Position,
    /// Cosmetic palette color, chosen at spawn time.
    pub color: Color,
}

impl Food {
    /// Creates a food at `position` with the first palette color. Mainly
    /// useful for setting up deterministic states in tests.
    #[must_use]
    pub fn at(position: Position) -> Self {
        Self {
            position,
            color: FOOD_PALETTE[0],
        }
    }

    /// Spawns food in a uniformly random unoccupied cell with a random
    /// palette color.
    ///
    /// Returns `None` when the snake fills the entire grid and no free cell
    /// exists; the caller treats that as a terminal board-full condition.
    #[must_use]
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, bounds: GridSize, snake: &Snake) -> Option<Self> {
        let position = free_position(rng, bounds, snake)?;
        let color = FOOD_PALETTE[rng.gen_range(0..FOOD_PALETTE.len())];
        Some(Self { position, color })
    }
}

/// Picks a uniformly random cell not occupied by the snake.
///
/// Samples with rejection up to a fixed cap, then falls back to enumerating
/// every free cell and indexing uniformly. The fallback also detects a full
/// board, reported as `None`.
fn free_position<R: Rng + ?Sized>(
    rng: &mut R,
    bounds: GridSize,
    snake: &Snake,
) -> Option<Position> {
    if snake.len() >= bounds.total_cells() {
        return None;
    }

    for _ in 0..MAX_SAMPLE_ATTEMPTS {
        let candidate = Position {
            x: rng.gen_range(0..i32::from(bounds.width)),
            y: rng.gen_range(0..i32::from(bounds.height)),
        };
        if !snake.occupies(candidate) {
            return Some(candidate);
        }
    }

    let candidates: Vec<Position> = (0..i32::from(bounds.height))
        .flat_map(|y| (0..i32::from(bounds.width)).map(move |x| Position { x, y }))
        .filter(|position| !snake.occupies(*position))
        .collect();

    if candidates.is_empty() {
        return None;
    }

    Some(candidates[rng.gen_range(0..candidates.len())])
}
