//! Input multiplexing between the menu and the game
//!
//! The external driver calls the [`Mediator`] once per discrete input event and
//! once per frame. The mediator forwards each call to the active [`Mode`] and
//! switches modes based on the [`Action`] it gets back.

pub mod game;
pub mod menu;

pub use game::GameMode;
pub use menu::{MenuMode, MenuOption};

use serde::{Deserialize, Serialize};

use crate::settings::{ConfigError, Settings};
use crate::sim::Snapshot;

/// What a mode asks the mediator to do after handling an event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    None,
    StartNewGame,
    ExitApplication,
    /// Final state of the game that just ended
    GameOver(Snapshot),
}

/// Host keyboard auto-repeat (0 disables); modes restore it when they are left
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct KeyRepeat {
    /// Delay before the first repeat (ms)
    pub delay: u32,
    /// Interval between repeats (ms)
    pub interval: u32,
}

impl KeyRepeat {
    pub fn new(delay: u32, interval: u32) -> Self {
        Self { delay, interval }
    }
}

/// A named behavior set that input is delegated to.
///
/// Input hooks default to doing nothing.
pub trait Mode {
    /// Called when the mode becomes active; `data` is the finished game, if any
    fn enter(&mut self, ts: i64, data: Option<&Snapshot>);

    /// Called before the mode stops being active
    fn exit(&mut self, ts: i64, repeat: &mut KeyRepeat);

    fn left_pressed(&mut self, _ts: i64) -> Action {
        Action::None
    }

    fn right_pressed(&mut self, _ts: i64) -> Action {
        Action::None
    }

    fn up_pressed(&mut self, _ts: i64) -> Action {
        Action::None
    }

    fn down_pressed(&mut self, _ts: i64) -> Action {
        Action::None
    }

    fn enter_pressed(&mut self, _ts: i64) -> Action {
        Action::None
    }

    /// Periodic frame tick
    fn update(&mut self, _ts: i64) -> Action {
        Action::None
    }
}

/// Which mode is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeKind {
    Menu,
    Game,
}

/// Owns both modes for the process lifetime and routes input to the active one
pub struct Mediator {
    menu: MenuMode,
    game: GameMode,
    current: ModeKind,
    key_repeat: KeyRepeat,
}

impl Mediator {
    /// Build both modes; starts in the menu
    pub fn new(settings: Settings) -> Result<Self, ConfigError> {
        let key_repeat = settings.key_repeat;
        let game = GameMode::new(settings, key_repeat)?;
        let menu = MenuMode::new(key_repeat);

        Ok(Self {
            menu,
            game,
            current: ModeKind::Menu,
            key_repeat,
        })
    }

    /// Run the active mode's entry hook (call once before the first event)
    pub fn enter(&mut self, ts: i64) {
        self.active().enter(ts, None);
    }

    pub fn left_pressed(&mut self, ts: i64) -> Action {
        let action = self.active().left_pressed(ts);
        self.resolve(ts, action)
    }

    pub fn right_pressed(&mut self, ts: i64) -> Action {
        let action = self.active().right_pressed(ts);
        self.resolve(ts, action)
    }

    pub fn up_pressed(&mut self, ts: i64) -> Action {
        let action = self.active().up_pressed(ts);
        self.resolve(ts, action)
    }

    pub fn down_pressed(&mut self, ts: i64) -> Action {
        let action = self.active().down_pressed(ts);
        self.resolve(ts, action)
    }

    pub fn enter_pressed(&mut self, ts: i64) -> Action {
        let action = self.active().enter_pressed(ts);
        self.resolve(ts, action)
    }

    pub fn update(&mut self, ts: i64) -> Action {
        let action = self.active().update(ts);
        self.resolve(ts, action)
    }

    pub fn current(&self) -> ModeKind {
        self.current
    }

    pub fn menu(&self) -> &MenuMode {
        &self.menu
    }

    pub fn game(&self) -> &GameMode {
        &self.game
    }

    /// Key-repeat setting the host should currently apply
    pub fn key_repeat(&self) -> KeyRepeat {
        self.key_repeat
    }

    /// Record a host-side key-repeat change
    pub fn set_key_repeat(&mut self, repeat: KeyRepeat) {
        self.key_repeat = repeat;
    }

    fn active(&mut self) -> &mut dyn Mode {
        match self.current {
            ModeKind::Menu => &mut self.menu,
            ModeKind::Game => &mut self.game,
        }
    }

    /// Turn a mode's action into a transition; only `ExitApplication` escapes
    fn resolve(&mut self, ts: i64, action: Action) -> Action {
        match action {
            Action::None => Action::None,
            Action::StartNewGame => {
                self.switch_to(ModeKind::Game, ts, None);
                Action::None
            }
            Action::GameOver(snapshot) => {
                self.switch_to(ModeKind::Menu, ts, Some(&snapshot));
                Action::None
            }
            Action::ExitApplication => {
                log::info!("Exit requested");
                Action::ExitApplication
            }
        }
    }

    fn switch_to(&mut self, next: ModeKind, ts: i64, data: Option<&Snapshot>) {
        if next == self.current {
            return;
        }
        log::debug!("Switching {:?} -> {:?} at {}", self.current, next, ts);

        let mut repeat = self.key_repeat;
        self.active().exit(ts, &mut repeat);
        self.key_repeat = repeat;

        self.current = next;
        self.active().enter(ts, data);
    }
}
