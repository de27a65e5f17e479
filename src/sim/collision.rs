//! Collision detection
//!
//! Only the head of a snake can collide; body segments already inside the
//! grid are never flagged.

use std::fmt;

use super::state::{Coord, Dimension, Food, Snake};

/// What a snake's head ran into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionKind {
    /// Head left the grid
    Wall,
    /// Head landed on its own body
    SelfCollision,
    /// Head landed on another snake (by index)
    Snake(usize),
}

impl fmt::Display for CollisionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollisionKind::Wall => write!(f, "the wall"),
            CollisionKind::SelfCollision => write!(f, "itself"),
            CollisionKind::Snake(other) => write!(f, "snake {other}"),
        }
    }
}

impl Snake {
    /// Head outside `0 <= col < width`, `0 <= row < height`
    pub fn collides_with_boundary(&self, dim: Dimension) -> bool {
        !dim.contains(self.head())
    }

    /// Head against another snake's full body, or against its own body minus the head
    pub fn collides_with_snake(&self, other: &Snake, is_self: bool) -> bool {
        other.contains(self.head(), is_self)
    }

    pub fn collides_with_food(&self, food: &Food) -> bool {
        self.head() == food.pos
    }
}

/// First collision for the snake at `index`, checked against the wall and then every snake in
/// index order (itself included)
pub fn detect(snakes: &[Snake], index: usize, dim: Dimension) -> Option<CollisionKind> {
    let snake = &snakes[index];

    if snake.collides_with_boundary(dim) {
        return Some(CollisionKind::Wall);
    }

    snakes.iter().enumerate().find_map(|(j, other)| {
        let is_self = j == index;
        snake.collides_with_snake(other, is_self).then_some(if is_self {
            CollisionKind::SelfCollision
        } else {
            CollisionKind::Snake(j)
        })
    })
}

/// True if any snake segment or food item occupies the cell
pub fn is_occupied(c: Coord, snakes: &[Snake], food: &[Food]) -> bool {
    snakes.iter().any(|s| s.contains(c, false)) || food.iter().any(|f| f.pos == c)
}
