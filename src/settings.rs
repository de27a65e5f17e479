//! Session settings
//!
//! Supplied once when the mediator is built; never changed mid-session.

use std::error::Error;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::controller::KeyRepeat;

/// Errors that can occur while building or loading settings.
///
/// All of these are fatal at construction time; none are raised mid-session.
#[derive(Debug)]
pub enum ConfigError {
    /// Grid width and height must both be positive.
    InvalidDimension { width: i32, height: i32 },
    /// At least one snake is required.
    InvalidSnakeCount { count: usize },
    /// Snakes need at least one segment.
    InvalidSnakeLength { length: usize },
    /// The initial step interval must be positive.
    InvalidStepInterval { interval: i64 },
    /// Eating may only keep or shorten the step interval.
    InvalidSpeedDelta { delta: i64 },
    /// A single food cannot add more segments than the grid has cells.
    InvalidGrowth { growth: usize },
    /// The starting layout would put snakes outside the grid or on top of each other.
    SnakesDoNotFit {
        count: usize,
        length: usize,
        width: i32,
        height: i32,
    },
    /// Settings file could not be read.
    Io(std::io::Error),
    /// Settings file is not valid JSON for [`Settings`].
    Parse(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimension { width, height } => {
                write!(f, "grid dimensions must be positive (received {width}x{height})")
            }
            Self::InvalidSnakeCount { count } => {
                write!(f, "snake count must be positive (received {count})")
            }
            Self::InvalidSnakeLength { length } => {
                write!(f, "snake length must be positive (received {length})")
            }
            Self::InvalidStepInterval { interval } => {
                write!(f, "step interval must be positive (received {interval})")
            }
            Self::InvalidSpeedDelta { delta } => {
                write!(f, "speed delta per food must not be negative (received {delta})")
            }
            Self::InvalidGrowth { growth } => {
                write!(f, "growth per food exceeds the grid area (received {growth})")
            }
            Self::SnakesDoNotFit {
                count,
                length,
                width,
                height,
            } => write!(
                f,
                "{count} snake(s) of length {length} do not fit on a {width}x{height} grid"
            ),
            Self::Io(err) => write!(f, "failed to read settings: {err}"),
            Self::Parse(err) => write!(f, "failed to parse settings: {err}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err)
    }
}

/// Game session settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Grid ===
    /// Grid width in cells
    pub grid_width: i32,
    /// Grid height in cells
    pub grid_height: i32,

    // === Snakes ===
    /// Number of snakes (index 0 is keyboard controlled)
    pub snake_count: usize,
    /// Initial length of every snake
    pub snake_length: usize,

    // === Timing (caller time units, usually milliseconds) ===
    /// Time between food spawn attempts
    pub food_interval: i64,
    /// Initial time between simulation steps
    pub step_interval: i64,

    // === Rules ===
    /// Segments gained per food eaten
    pub growth_per_food: usize,
    /// Step interval reduction per food eaten
    pub speed_delta_per_food: i64,

    /// Fixed RNG seed; wall clock when absent
    pub seed: Option<u64>,

    /// Host key-repeat setting restored when a mode is left
    pub key_repeat: KeyRepeat,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            grid_width: GRID_WIDTH,
            grid_height: GRID_HEIGHT,

            snake_count: SNAKE_COUNT,
            snake_length: SNAKE_LENGTH,

            food_interval: FOOD_INTERVAL,
            step_interval: INITIAL_STEP_INTERVAL,

            growth_per_food: GROWTH_PER_FOOD,
            speed_delta_per_food: SPEED_DELTA_PER_FOOD,

            seed: None,

            key_repeat: KeyRepeat::default(),
        }
    }
}

impl Settings {
    /// Create settings with a custom grid size
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            grid_width: width,
            grid_height: height,
            ..Default::default()
        }
    }

    /// Builder-style seed override
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builder-style snake override
    pub fn with_snakes(mut self, count: usize, length: usize) -> Self {
        self.snake_count = count;
        self.snake_length = length;
        self
    }

    /// Horizontal distance between the starting columns of neighbouring snakes
    pub fn snake_spacing(&self) -> i32 {
        // Never wider than the grid, so it always fits back into i32
        let slots = wide(self.snake_count).saturating_add(1);
        (i64::from(self.grid_width) / slots) as i32
    }

    /// Row the snake heads start on
    pub fn head_row(&self) -> i32 {
        i32::try_from(self.head_row_wide()).unwrap_or(i32::MAX)
    }

    fn head_row_wide(&self) -> i64 {
        i64::from(self.grid_height).saturating_add(wide(self.snake_length)) / 2
    }

    /// Reject settings that cannot produce a playable session
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_width <= 0 || self.grid_height <= 0 {
            return Err(ConfigError::InvalidDimension {
                width: self.grid_width,
                height: self.grid_height,
            });
        }
        if self.snake_count == 0 {
            return Err(ConfigError::InvalidSnakeCount {
                count: self.snake_count,
            });
        }
        if self.snake_length == 0 {
            return Err(ConfigError::InvalidSnakeLength {
                length: self.snake_length,
            });
        }

        if self.step_interval <= 0 {
            return Err(ConfigError::InvalidStepInterval {
                interval: self.step_interval,
            });
        }
        if self.speed_delta_per_food < 0 {
            return Err(ConfigError::InvalidSpeedDelta {
                delta: self.speed_delta_per_food,
            });
        }
        let area = i64::from(self.grid_width) * i64::from(self.grid_height);
        if wide(self.growth_per_food) > area {
            return Err(ConfigError::InvalidGrowth {
                growth: self.growth_per_food,
            });
        }

        // Snakes start facing up, stacked downward from the head row
        let tail_row = self.head_row_wide().saturating_add(wide(self.snake_length) - 1);
        if self.snake_spacing() < 1 || tail_row >= i64::from(self.grid_height) {
            return Err(ConfigError::SnakesDoNotFit {
                count: self.snake_count,
                length: self.snake_length,
                width: self.grid_width,
                height: self.grid_height,
            });
        }

        Ok(())
    }

    /// Parse settings from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }
}

/// Counts widened for grid arithmetic; anything past i64 is clamped
fn wide(n: usize) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}
