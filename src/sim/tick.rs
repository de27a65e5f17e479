//! Interval-gated simulation tick
//!
//! The engine is driven by caller timestamps. Direction requests are applied on
//! every call; the world itself only advances once the step interval has
//! elapsed since the last advance.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::collision::{self, CollisionKind};
use super::snapshot::Snapshot;
use super::spawn::place_food;
use super::state::{Coord, Dimension, Direction, Food, Snake};
use crate::consts::MAX_LIVE_FOOD;
use crate::settings::{ConfigError, Settings};

/// Outcome of one step
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickResult {
    /// Snakes that collided this step, ascending, no duplicates
    pub collided: Vec<usize>,
    /// True iff `collided` is non-empty
    pub is_game_over: bool,
}

impl TickResult {
    pub fn new(mut collided: Vec<usize>) -> Self {
        collided.sort_unstable();
        collided.dedup();
        let is_game_over = !collided.is_empty();
        Self {
            collided,
            is_game_over,
        }
    }
}

/// Owns every snake, the food and the timers of one game session
#[derive(Debug, Clone)]
pub struct Engine {
    settings: Settings,
    dim: Dimension,
    /// Starting layout, cloned on every reset
    initial_snakes: Vec<Snake>,
    snakes: Vec<Snake>,
    food: Vec<Food>,
    last_step: i64,
    last_food: i64,
    step_interval: i64,
    last_result: TickResult,
    rng: Pcg32,
}

impl Engine {
    /// Validate settings and lay out the snakes; fails only on bad configuration
    pub fn new(settings: Settings) -> Result<Self, ConfigError> {
        settings.validate()?;

        let seed = settings.seed.unwrap_or_else(clock_seed);
        log::info!("Engine initialized with seed: {}", seed);

        let initial_snakes = starting_snakes(&settings)?;
        let dim = Dimension::new(settings.grid_width, settings.grid_height);
        let step_interval = settings.step_interval;

        Ok(Self {
            settings,
            dim,
            snakes: initial_snakes.clone(),
            initial_snakes,
            food: Vec::new(),
            last_step: 0,
            last_food: 0,
            step_interval,
            last_result: TickResult::default(),
            rng: Pcg32::seed_from_u64(seed),
        })
    }

    /// Start a fresh session at `ts`. The RNG stream carries on.
    pub fn reset(&mut self, ts: i64) {
        self.snakes = self.initial_snakes.clone();
        self.food.clear();
        self.last_step = ts;
        self.last_food = ts;
        self.step_interval = self.settings.step_interval;
        self.last_result = TickResult::default();
        log::info!(
            "New session: {} snake(s) on {}x{}",
            self.snakes.len(),
            self.dim.width,
            self.dim.height
        );
    }

    /// Apply input, then advance the world if the step interval has elapsed.
    ///
    /// Returns the previous result unchanged while the interval is still running,
    /// and for every call after a game over until the next [`Engine::reset`].
    pub fn step(&mut self, ts: i64, inputs: &[(usize, Direction)]) -> TickResult {
        self.apply_inputs(inputs);

        if self.last_result.is_game_over || ts.saturating_sub(self.last_step) < self.step_interval {
            return self.last_result.clone();
        }
        self.last_step = ts;

        let may_add_food = ts.saturating_sub(self.last_food) > self.settings.food_interval;
        if may_add_food {
            self.last_food = ts;
        }

        for snake in &mut self.snakes {
            snake.advance();
        }

        if may_add_food && self.food.len() < MAX_LIVE_FOOD {
            self.spawn_food();
        }

        let collided = self.resolve_collisions();
        let result = TickResult::new(collided);
        if result.is_game_over {
            log::info!("Game over at {}: collided {:?}", ts, result.collided);
        }

        self.last_result = result.clone();
        result
    }

    fn apply_inputs(&mut self, inputs: &[(usize, Direction)]) {
        for &(index, direction) in inputs {
            match self.snakes.get_mut(index) {
                Some(snake) => snake.set_direction(direction),
                None => log::warn!(
                    "Ignoring {:?} for snake {} ({} snake(s) in play)",
                    direction,
                    index,
                    self.snakes.len()
                ),
            }
        }
    }

    fn spawn_food(&mut self) {
        match place_food(self.dim, &self.snakes, &self.food, &mut self.rng) {
            Some(pos) => {
                log::debug!("Food spawned at ({}, {})", pos.col, pos.row);
                self.food.push(Food::new(pos));
            }
            None => log::debug!("No free cell for food, skipping spawn"),
        }
    }

    /// Flag collisions in index order and let surviving heads eat
    fn resolve_collisions(&mut self) -> Vec<usize> {
        let mut collided = Vec::new();

        for i in 0..self.snakes.len() {
            match collision::detect(&self.snakes, i, self.dim) {
                Some(CollisionKind::Wall) => {
                    log::debug!("Snake {} hit the wall", i);
                    collided.push(i);
                    continue;
                }
                Some(kind) => {
                    log::debug!("Snake {} hit {}", i, kind);
                    collided.push(i);
                }
                None => {}
            }

            self.eat_food(i);
        }

        collided
    }

    fn eat_food(&mut self, index: usize) {
        let snake = &self.snakes[index];
        let before = self.food.len();
        self.food.retain(|f| !snake.collides_with_food(f));
        let eaten = before - self.food.len();

        for _ in 0..eaten {
            self.snakes[index].grow(self.settings.growth_per_food);
            // No floor: a non-positive interval advances on every call
            self.step_interval = self
                .step_interval
                .saturating_sub(self.settings.speed_delta_per_food);
            log::debug!(
                "Snake {} ate, step interval now {}",
                index,
                self.step_interval
            );
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn dimension(&self) -> Dimension {
        self.dim
    }

    pub fn snakes(&self) -> &[Snake] {
        &self.snakes
    }

    pub fn food(&self) -> &[Food] {
        &self.food
    }

    pub fn step_interval(&self) -> i64 {
        self.step_interval
    }

    pub fn last_result(&self) -> &TickResult {
        &self.last_result
    }

    /// Owned copy of the world for renderers
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(self.dim, &self.snakes, &self.food, self.step_interval)
    }
}

/// Heads spread evenly across the grid on a shared row, all facing up
fn starting_snakes(settings: &Settings) -> Result<Vec<Snake>, ConfigError> {
    let spacing = settings.snake_spacing();
    let row = settings.head_row();

    (0..settings.snake_count)
        .map(|i| {
            let head = Coord::new(spacing * (i as i32 + 1), row);
            Snake::new(head, settings.snake_length, Direction::Up)
        })
        .collect()
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}
