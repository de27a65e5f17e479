//! Read-only view of the world handed to renderers

use serde::{Deserialize, Serialize};

use super::state::{Coord, Dimension, Direction, Food, Snake};

/// One snake as a renderer sees it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnakeView {
    /// Head first
    pub body: Vec<Coord>,
    pub score: u64,
    pub direction: Direction,
}

impl From<&Snake> for SnakeView {
    fn from(snake: &Snake) -> Self {
        Self {
            body: snake.body().to_vec(),
            score: snake.score(),
            direction: snake.direction(),
        }
    }
}

/// Owned copy of the world after a completed step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub dim: Dimension,
    /// Indexed by snake id
    pub snakes: Vec<SnakeView>,
    pub food: Vec<Coord>,
    pub step_interval: i64,
}

impl Snapshot {
    pub fn new(dim: Dimension, snakes: &[Snake], food: &[Food], step_interval: i64) -> Self {
        Self {
            dim,
            snakes: snakes.iter().map(SnakeView::from).collect(),
            food: food.iter().map(|f| f.pos).collect(),
            step_interval,
        }
    }

    /// Highest score and the snake holding it (lowest index wins ties)
    pub fn leader(&self) -> Option<(usize, u64)> {
        self.snakes
            .iter()
            .enumerate()
            .map(|(i, s)| (i, s.score))
            .fold(None, |best, (i, score)| match best {
                Some((_, top)) if top >= score => best,
                _ => Some((i, score)),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_copies_world() {
        let mut snake = Snake::new(Coord::new(3, 3), 2, Direction::Up).unwrap();
        snake.advance();
        let snapshot = Snapshot::new(
            Dimension::new(8, 8),
            std::slice::from_ref(&snake),
            &[Food::new(Coord::new(1, 1))],
            96,
        );

        assert_eq!(snapshot.snakes[0].body, vec![Coord::new(3, 2), Coord::new(3, 3)]);
        assert_eq!(snapshot.snakes[0].score, 1);
        assert_eq!(snapshot.food, vec![Coord::new(1, 1)]);
        assert_eq!(snapshot.step_interval, 96);

        // Later mutation does not leak into the snapshot
        snake.advance();
        assert_eq!(snapshot.snakes[0].body[0], Coord::new(3, 2));
    }

    #[test]
    fn test_leader_prefers_lowest_index_on_tie() {
        let view = |score| SnakeView {
            body: vec![Coord::new(0, 0)],
            score,
            direction: Direction::Up,
        };
        let snapshot = Snapshot {
            dim: Dimension::new(4, 4),
            snakes: vec![view(4), view(9), view(9)],
            food: vec![],
            step_interval: 100,
        };
        assert_eq!(snapshot.leader(), Some((1, 9)));
    }

    #[test]
    fn test_snapshot_serializes() {
        let snake = Snake::new(Coord::new(1, 1), 1, Direction::Left).unwrap();
        let snapshot = Snapshot::new(Dimension::new(4, 4), &[snake], &[], 100);
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: Snapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot);
    }
}
