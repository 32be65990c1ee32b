use std::collections::VecDeque;

use crate::config::GridSize;
use crate::input::Direction;

/// Grid position in logical cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Returns true when the position lies inside the bounds.
    #[must_use]
    pub fn is_within_bounds(self, bounds: GridSize) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.x < i32::from(bounds.width)
            && self.y < i32::from(bounds.height)
    }

    /// Returns the neighboring position one cell in `direction`.
    #[must_use]
    pub fn stepped(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Ordered snake body, head first. Always at least one segment long.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Snake {
    body: VecDeque<Position>,
}

impl Snake {
    /// Creates a one-cell snake at `start`.
    #[must_use]
    pub fn new(start: Position) -> Self {
        let mut body = VecDeque::new();
        body.push_front(start);
        Self { body }
    }

    /// Creates a snake from explicit body segments (front is head).
    #[must_use]
    pub fn from_segments(segments: Vec<Position>) -> Self {
        debug_assert!(!segments.is_empty());
        Self {
            body: VecDeque::from(segments),
        }
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.body.contains(&position)
    }

    /// Returns a copy grown by one cell: `head` prepended, tail kept.
    #[must_use]
    pub fn grown(&self, head: Position) -> Self {
        let mut body = self.body.clone();
        body.push_front(head);
        Self { body }
    }

    /// Returns a copy advanced by one cell: `head` prepended, tail dropped.
    #[must_use]
    pub fn advanced(&self, head: Position) -> Self {
        let mut body = self.body.clone();
        body.push_front(head);
        let _ = body.pop_back();
        Self { body }
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments. Never true for a snake built
    /// through the public constructors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::config::GridSize;
    use crate::input::Direction;

    use super::{Position, Snake};

    #[test]
    fn stepped_moves_one_cell() {
        let origin = Position { x: 5, y: 5 };

        assert_eq!(origin.stepped(Direction::Up), Position { x: 5, y: 4 });
        assert_eq!(origin.stepped(Direction::Down), Position { x: 5, y: 6 });
        assert_eq!(origin.stepped(Direction::Left), Position { x: 4, y: 5 });
        assert_eq!(origin.stepped(Direction::Right), Position { x: 6, y: 5 });
    }

    #[test]
    fn bounds_check_covers_all_edges() {
        let bounds = GridSize::square(20);

        assert!(Position { x: 0, y: 0 }.is_within_bounds(bounds));
        assert!(Position { x: 19, y: 19 }.is_within_bounds(bounds));
        assert!(!Position { x: -1, y: 10 }.is_within_bounds(bounds));
        assert!(!Position { x: 10, y: -1 }.is_within_bounds(bounds));
        assert!(!Position { x: 20, y: 10 }.is_within_bounds(bounds));
        assert!(!Position { x: 10, y: 20 }.is_within_bounds(bounds));
    }

    #[test]
    fn grown_keeps_tail() {
        let snake = Snake::new(Position { x: 5, y: 5 });
        let grown = snake.grown(Position { x: 6, y: 5 });

        assert_eq!(grown.len(), 2);
        assert_eq!(grown.head(), Position { x: 6, y: 5 });
        assert!(grown.occupies(Position { x: 5, y: 5 }));
    }

    #[test]
    fn advanced_drops_tail() {
        let snake = Snake::from_segments(vec![Position { x: 5, y: 5 }, Position { x: 4, y: 5 }]);
        let advanced = snake.advanced(Position { x: 6, y: 5 });

        assert_eq!(advanced.len(), 2);
        assert_eq!(advanced.head(), Position { x: 6, y: 5 });
        assert!(!advanced.occupies(Position { x: 4, y: 5 }));
    }

    #[test]
    fn occupies_checks_every_segment() {
        let snake = Snake::from_segments(vec![
            Position { x: 2, y: 2 },
            Position { x: 2, y: 3 },
            Position { x: 2, y: 4 },
        ]);

        assert!(snake.occupies(Position { x: 2, y: 3 }));
        assert!(snake.occupies(Position { x: 2, y: 4 }));
        assert!(!snake.occupies(Position { x: 3, y: 3 }));
    }
}
