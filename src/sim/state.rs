//! Grid geometry and the entities that live on it
//!
//! Snakes and food are owned by the engine; everything here is plain data
//! plus the movement rules that act on a single snake.

use serde::{Deserialize, Serialize};

use crate::consts::MOVE_REWARD;
use crate::settings::ConfigError;

/// A cell on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub col: i32,
    pub row: i32,
}

impl Coord {
    pub fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// One unit step in a direction
    #[inline]
    pub fn step(self, direction: Direction) -> Self {
        let (dc, dr) = direction.delta();
        Self {
            col: self.col + dc,
            row: self.row + dr,
        }
    }
}

/// Grid size, fixed for the lifetime of an engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimension {
    pub width: i32,
    pub height: i32,
}

impl Dimension {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// `0 <= col < width` and `0 <= row < height`
    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        (0..self.width).contains(&c.col) && (0..self.height).contains(&c.row)
    }

    /// All cells in row-major order
    pub fn cells(self) -> impl Iterator<Item = Coord> {
        let Dimension { width, height } = self;
        (0..height).flat_map(move |row| (0..width).map(move |col| Coord::new(col, row)))
    }

    pub fn area(&self) -> usize {
        self.width.max(0) as usize * self.height.max(0) as usize
    }
}

/// Direction of travel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Right,
    Left,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Right,
        Direction::Left,
    ];

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Right => Direction::Left,
            Direction::Left => Direction::Right,
        }
    }

    /// True if turning from self to other would be a 180-degree turn
    pub fn is_opposite(self, other: Direction) -> bool {
        self.opposite() == other
    }

    /// (dcol, drow); rows grow downward
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Right => (1, 0),
            Direction::Left => (-1, 0),
        }
    }
}

/// A food item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Food {
    pub pos: Coord,
}

impl Food {
    pub fn new(pos: Coord) -> Self {
        Self { pos }
    }
}

/// A snake: head-first body, committed and pending direction, score
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    /// Body segments, head at index 0. Never empty.
    body: Vec<Coord>,
    /// Direction applied on the last move
    direction: Direction,
    /// Direction requested by input, applied on the next move
    pending: Direction,
    score: u64,
}

impl Snake {
    /// Build `length` contiguous segments trailing away from `head`, opposite to `direction`
    pub fn new(head: Coord, length: usize, direction: Direction) -> Result<Self, ConfigError> {
        if length == 0 {
            return Err(ConfigError::InvalidSnakeLength { length });
        }

        let back = direction.opposite();
        let body = std::iter::successors(Some(head), |c| Some(c.step(back)))
            .take(length)
            .collect();

        Ok(Self {
            body,
            direction,
            pending: direction,
            score: 0,
        })
    }

    pub fn head(&self) -> Coord {
        self.body[0]
    }

    pub fn tail(&self) -> Coord {
        self.body[self.body.len() - 1]
    }

    pub fn body(&self) -> &[Coord] {
        &self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Always false; kept for the `len` convention
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Committed direction
    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_direction(&self) -> Direction {
        self.pending
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    /// Request a turn for the next move.
    ///
    /// Checked against the committed direction so several requests inside one
    /// tick cannot chain into a reversal (Up -> Left -> Down).
    pub fn set_direction(&mut self, requested: Direction) {
        if !self.direction.is_opposite(requested) {
            self.pending = requested;
        }
    }

    /// Commit the pending direction and shift the body one cell
    pub fn advance(&mut self) {
        self.direction = self.pending;
        let new_head = self.head().step(self.direction);
        self.body.pop();
        self.body.insert(0, new_head);
        self.score += MOVE_REWARD;
    }

    /// Append `n` copies of the tail; they unfold over the following moves
    pub fn grow(&mut self, n: usize) {
        let tail = self.tail();
        self.body.extend(std::iter::repeat_n(tail, n));
        self.score += n as u64;
    }

    /// Membership test, optionally skipping the head segment
    pub fn contains(&self, c: Coord, disregard_head: bool) -> bool {
        let skip = usize::from(disregard_head);
        self.body[skip..].contains(&c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coord_step() {
        let c = Coord::new(5, 5);
        assert_eq!(c.step(Direction::Up), Coord::new(5, 4));
        assert_eq!(c.step(Direction::Down), Coord::new(5, 6));
        assert_eq!(c.step(Direction::Left), Coord::new(4, 5));
        assert_eq!(c.step(Direction::Right), Coord::new(6, 5));
    }

    #[test]
    fn test_opposite_directions() {
        assert!(Direction::Up.is_opposite(Direction::Down));
        assert!(Direction::Down.is_opposite(Direction::Up));
        assert!(Direction::Left.is_opposite(Direction::Right));
        assert!(Direction::Right.is_opposite(Direction::Left));

        assert!(!Direction::Up.is_opposite(Direction::Left));
        assert!(!Direction::Up.is_opposite(Direction::Up));
    }

    #[test]
    fn test_dimension_cells_row_major() {
        let dim = Dimension::new(3, 2);
        let cells: Vec<_> = dim.cells().collect();
        assert_eq!(cells.len(), dim.area());
        assert_eq!(cells[0], Coord::new(0, 0));
        assert_eq!(cells[1], Coord::new(1, 0));
        assert_eq!(cells[3], Coord::new(0, 1));
    }

    #[test]
    fn test_dimension_bounds_are_half_open() {
        let dim = Dimension::new(20, 20);
        assert!(dim.contains(Coord::new(0, 0)));
        assert!(dim.contains(Coord::new(19, 19)));
        assert!(!dim.contains(Coord::new(-1, 0)));
        assert!(!dim.contains(Coord::new(20, 0)));
        assert!(!dim.contains(Coord::new(0, 20)));
    }

    #[test]
    fn test_snake_creation_facing_up() {
        let snake = Snake::new(Coord::new(10, 10), 3, Direction::Up).unwrap();
        assert_eq!(
            snake.body(),
            &[Coord::new(10, 10), Coord::new(10, 11), Coord::new(10, 12)]
        );
        assert_eq!(snake.direction(), Direction::Up);
        assert_eq!(snake.score(), 0);
    }

    #[test]
    fn test_snake_creation_facing_right() {
        let snake = Snake::new(Coord::new(5, 5), 3, Direction::Right).unwrap();
        assert_eq!(snake.head(), Coord::new(5, 5));
        assert_eq!(snake.body()[1], Coord::new(4, 5));
        assert_eq!(snake.tail(), Coord::new(3, 5));
    }

    #[test]
    fn test_snake_creation_rejects_zero_length() {
        let err = Snake::new(Coord::new(0, 0), 0, Direction::Up).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidSnakeLength { length: 0 }));
    }

    #[test]
    fn test_single_move_scores_one() {
        let mut snake = Snake::new(Coord::new(10, 10), 3, Direction::Up).unwrap();
        snake.advance();
        assert_eq!(snake.head(), Coord::new(10, 9));
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.score(), 1);
    }

    #[test]
    fn test_reverse_request_is_dropped() {
        let mut snake = Snake::new(Coord::new(10, 10), 3, Direction::Up).unwrap();
        snake.set_direction(Direction::Down);
        assert_eq!(snake.pending_direction(), Direction::Up);
        snake.advance();
        assert_eq!(snake.head(), Coord::new(10, 9));
    }

    #[test]
    fn test_chained_requests_cannot_reverse() {
        let mut snake = Snake::new(Coord::new(10, 10), 3, Direction::Up).unwrap();
        snake.set_direction(Direction::Left);
        snake.set_direction(Direction::Down);
        // Down is checked against committed Up, so Left stays pending
        assert_eq!(snake.pending_direction(), Direction::Left);
        snake.advance();
        assert_eq!(snake.head(), Coord::new(9, 10));
        assert_eq!(snake.direction(), Direction::Left);
    }

    #[test]
    fn test_grow_appends_tail_copies() {
        let mut snake = Snake::new(Coord::new(10, 10), 3, Direction::Up).unwrap();
        snake.advance();
        let tail = snake.tail();
        snake.grow(5);
        assert_eq!(snake.len(), 8);
        assert_eq!(snake.score(), 1 + 5);
        assert!(snake.body()[2..].iter().all(|&c| c == tail));

        // The copies unfold one per move
        snake.advance();
        assert_eq!(snake.len(), 8);
        assert_eq!(snake.head(), Coord::new(10, 8));
    }

    #[test]
    fn test_contains_disregarding_head() {
        let snake = Snake::new(Coord::new(5, 5), 3, Direction::Right).unwrap();
        assert!(snake.contains(Coord::new(5, 5), false));
        assert!(!snake.contains(Coord::new(5, 5), true));
        assert!(snake.contains(Coord::new(4, 5), true));
        assert!(!snake.contains(Coord::new(9, 9), false));
    }
}
