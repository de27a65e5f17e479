//! Snake Arena - a multi-snake grid simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (snakes, food, collisions, tick engine)
//! - `controller`: Menu/game mode state machine driven by discrete input events
//! - `settings`: Session configuration
//! - `highscores`: In-memory session leaderboard

pub mod controller;
pub mod highscores;
pub mod settings;
pub mod sim;

pub use controller::{Action, GameMode, KeyRepeat, Mediator, MenuMode, MenuOption, Mode, ModeKind};
pub use highscores::HighScores;
pub use settings::{ConfigError, Settings};

/// Game rule constants
pub mod consts {
    /// Initial time units between simulation steps
    pub const INITIAL_STEP_INTERVAL: i64 = 100;
    /// Time units between food spawn attempts
    pub const FOOD_INTERVAL: i64 = 2000;
    /// Maximum food items alive at once
    pub const MAX_LIVE_FOOD: usize = 3;

    /// Segments gained per food eaten
    pub const GROWTH_PER_FOOD: usize = 5;
    /// Step interval reduction per food eaten (no floor)
    pub const SPEED_DELTA_PER_FOOD: i64 = 2;
    /// Score awarded for every move
    pub const MOVE_REWARD: u64 = 1;

    /// Default grid
    pub const GRID_WIDTH: i32 = 20;
    pub const GRID_HEIGHT: i32 = 20;
    pub const SNAKE_COUNT: usize = 1;
    pub const SNAKE_LENGTH: usize = 3;

    /// Index of the keyboard-controlled snake
    pub const PLAYER_SNAKE: usize = 0;
}
