//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Caller-supplied timestamps only
//! - Seeded RNG only
//! - Stable iteration order (by snake index)
//! - No rendering or platform dependencies

pub mod collision;
pub mod snapshot;
pub mod spawn;
pub mod state;
pub mod tick;

pub use snapshot::{SnakeView, Snapshot};
pub use spawn::place_food;
pub use state::{Coord, Dimension, Direction, Food, Snake};
pub use tick::{Engine, TickResult};
