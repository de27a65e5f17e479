//! Gameplay mode: forwards steering and frame ticks into the engine

use super::{Action, KeyRepeat, Mode};
use crate::consts::PLAYER_SNAKE;
use crate::settings::{ConfigError, Settings};
use crate::sim::{Direction, Engine, Snapshot};

/// Exclusive owner of the engine
#[derive(Debug, Clone)]
pub struct GameMode {
    engine: Engine,
    saved_repeat: KeyRepeat,
}

impl GameMode {
    pub fn new(settings: Settings, saved_repeat: KeyRepeat) -> Result<Self, ConfigError> {
        Ok(Self {
            engine: Engine::new(settings)?,
            saved_repeat,
        })
    }

    /// Read-only access for renderers
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    fn steer(&mut self, ts: i64, direction: Direction) -> Action {
        // The engine holds a game over until reset, so the next update reports it
        self.engine.step(ts, &[(PLAYER_SNAKE, direction)]);
        Action::None
    }
}

impl Mode for GameMode {
    fn enter(&mut self, ts: i64, _data: Option<&Snapshot>) {
        self.engine.reset(ts);
    }

    fn exit(&mut self, _ts: i64, repeat: &mut KeyRepeat) {
        *repeat = self.saved_repeat;
    }

    fn left_pressed(&mut self, ts: i64) -> Action {
        self.steer(ts, Direction::Left)
    }

    fn right_pressed(&mut self, ts: i64) -> Action {
        self.steer(ts, Direction::Right)
    }

    fn up_pressed(&mut self, ts: i64) -> Action {
        self.steer(ts, Direction::Up)
    }

    fn down_pressed(&mut self, ts: i64) -> Action {
        self.steer(ts, Direction::Down)
    }

    fn update(&mut self, ts: i64) -> Action {
        let result = self.engine.step(ts, &[]);
        if result.is_game_over {
            Action::GameOver(self.engine.snapshot())
        } else {
            Action::None
        }
    }
}
