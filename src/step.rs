use crate::config::GridSize;
use crate::input::Direction;
use crate::snake::{Position, Snake};

/// Classification of one movement step.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Outcome {
    /// The new head would leave the grid.
    Blocked,
    /// The new head lands on the snake's own body.
    SelfHit,
    /// The head advanced onto the food cell; the body grew by one.
    Fed(Snake),
    /// The head advanced onto an empty cell; length unchanged.
    Moved(Snake),
}

/// Advances `snake` one cell in `direction` and classifies the result.
///
/// Checks are ordered: bounds, then the pre-move body, then food. A head that
/// is simultaneously out of bounds is always reported as `Blocked`, never as
/// a self collision. The tail cell counts as a collision target even though
/// it vacates this tick, matching the classic rules.
#[must_use]
pub fn advance(snake: &Snake, direction: Direction, food: Position, bounds: GridSize) -> Outcome {
    let next_head = snake.head().stepped(direction);

    if !next_head.is_within_bounds(bounds) {
        return Outcome::Blocked;
    }

    if snake.occupies(next_head) {
        return Outcome::SelfHit;
    }

    if next_head == food {
        Outcome::Fed(snake.grown(next_head))
    } else {
        Outcome::Moved(snake.advanced(next_head))
    }
}
