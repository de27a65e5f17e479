//! Main menu

use super::{Action, KeyRepeat, Mode};
use crate::highscores::HighScores;
use crate::sim::Snapshot;

/// Entries of the main menu, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    NewGame,
    Exit,
}

impl MenuOption {
    pub const ALL: [MenuOption; 2] = [MenuOption::NewGame, MenuOption::Exit];

    pub fn label(self) -> &'static str {
        match self {
            MenuOption::NewGame => "new_game",
            MenuOption::Exit => "exit_game",
        }
    }
}

/// Option list with a wrapping highlight, plus the results of finished games
#[derive(Debug, Clone)]
pub struct MenuMode {
    selected: usize,
    needs_redraw: bool,
    saved_repeat: KeyRepeat,
    high_scores: HighScores,
    last_game: Option<Snapshot>,
}

impl MenuMode {
    pub fn new(saved_repeat: KeyRepeat) -> Self {
        Self {
            selected: 0,
            needs_redraw: true,
            saved_repeat,
            high_scores: HighScores::new(),
            last_game: None,
        }
    }

    pub fn options(&self) -> &'static [MenuOption] {
        &MenuOption::ALL
    }

    /// Highlighted index
    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_option(&self) -> MenuOption {
        MenuOption::ALL[self.selected]
    }

    pub fn prev(&mut self) {
        let n = MenuOption::ALL.len();
        self.selected = (self.selected + n - 1) % n;
        self.refresh();
    }

    pub fn next(&mut self) {
        self.selected = (self.selected + 1) % MenuOption::ALL.len();
        self.refresh();
    }

    /// Mark the option list for redrawing
    pub fn refresh(&mut self) {
        self.needs_redraw = true;
    }

    pub fn needs_redraw(&self) -> bool {
        self.needs_redraw
    }

    /// Called by the renderer after it has drawn the option list
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    pub fn high_scores(&self) -> &HighScores {
        &self.high_scores
    }

    /// Final state of the most recent game
    pub fn last_game(&self) -> Option<&Snapshot> {
        self.last_game.as_ref()
    }
}

impl Mode for MenuMode {
    fn enter(&mut self, _ts: i64, data: Option<&Snapshot>) {
        if let Some(snapshot) = data {
            self.high_scores.record(snapshot);
            self.last_game = Some(snapshot.clone());
        }
        self.refresh();
    }

    fn exit(&mut self, _ts: i64, repeat: &mut KeyRepeat) {
        *repeat = self.saved_repeat;
    }

    fn up_pressed(&mut self, _ts: i64) -> Action {
        self.prev();
        Action::None
    }

    fn down_pressed(&mut self, _ts: i64) -> Action {
        self.next();
        Action::None
    }

    fn enter_pressed(&mut self, _ts: i64) -> Action {
        match self.selected_option() {
            MenuOption::NewGame => Action::StartNewGame,
            MenuOption::Exit => Action::ExitApplication,
        }
    }
}
