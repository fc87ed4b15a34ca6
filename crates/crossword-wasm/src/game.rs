//! Game state management for the WASM crossword

use crate::render::Layout;
use crossword_core::{Arrow, Difficulty, Session};
use serde::Serialize;

/// Screen state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ScreenState {
    Home,
    Settings,
    Playing,
    Solved,
}

/// Snapshot handed to the hosting page as JSON
#[derive(Debug, Clone, Serialize)]
pub struct StateSnapshot {
    pub screen: ScreenState,
    pub difficulty: String,
    pub sound: bool,
    pub elapsed: String,
    pub complete: bool,
    pub correct_words: Vec<String>,
}

/// The game state
pub struct GameState {
    /// Current play session, present on the game and solved screens
    session: Option<Session>,
    /// Difficulty for the next game
    difficulty: Difficulty,
    /// Screen state
    screen: ScreenState,
    /// Whether the completion chime is enabled
    sound: bool,
    /// Solve time carried onto the solved screen
    solve_time: String,
    /// Chime request, consumed by the controller
    chime_pending: bool,
    /// Theme-toggle request, consumed by the controller
    theme_toggle_pending: bool,
    /// Animation frame counter
    frame: u32,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self {
            session: None,
            difficulty: Difficulty::Medium,
            screen: ScreenState::Home,
            sound: true,
            solve_time: String::new(),
            chime_pending: false,
            theme_toggle_pending: false,
            frame: 0,
        }
    }

    /// Advance the animation frame counter (called per animation frame)
    pub fn tick(&mut self) {
        self.frame = self.frame.wrapping_add(1);
    }

    /// One-second clock tick, driven by the hosting page's interval
    pub fn tick_second(&mut self) {
        if self.screen == ScreenState::Playing {
            if let Some(session) = self.session.as_mut() {
                session.tick_second();
            }
        }
    }

    pub fn start_game(&mut self) {
        self.session = Some(Session::new(self.difficulty));
        self.screen = ScreenState::Playing;
    }

    pub fn leave_game(&mut self) {
        if let Some(session) = self.session.as_mut() {
            session.end();
        }
        self.session = None;
        self.screen = ScreenState::Home;
    }

    /// Handle a keyboard event by key name
    pub fn handle_key(&mut self, key: &str) {
        match self.screen {
            ScreenState::Home => self.handle_home_key(key),
            ScreenState::Settings => self.handle_settings_key(key),
            ScreenState::Playing => self.handle_playing_key(key),
            ScreenState::Solved => self.handle_solved_key(key),
        }
    }

    fn handle_home_key(&mut self, key: &str) {
        match key {
            "Enter" | " " => self.start_game(),
            "s" => self.screen = ScreenState::Settings,
            _ => {}
        }
    }

    fn handle_settings_key(&mut self, key: &str) {
        match key {
            "1" => self.difficulty = Difficulty::Easy,
            "2" => self.difficulty = Difficulty::Medium,
            "3" => self.difficulty = Difficulty::Hard,
            "s" => self.sound = !self.sound,
            "t" => self.theme_toggle_pending = true,
            "Escape" | "Enter" => self.screen = ScreenState::Home,
            _ => {}
        }
    }

    fn handle_playing_key(&mut self, key: &str) {
        let Some(session) = self.session.as_mut() else {
            return;
        };

        match key {
            "Escape" => {
                self.leave_game();
                return;
            }
            "Backspace" | "Delete" => session.backspace(),
            "ArrowLeft" => session.move_arrow(Arrow::Left),
            "ArrowRight" => session.move_arrow(Arrow::Right),
            "ArrowUp" => session.move_arrow(Arrow::Up),
            "ArrowDown" => session.move_arrow(Arrow::Down),
            "Tab" => session.tab_to_next_clue(),
            _ => {
                let mut chars = key.chars();
                if let (Some(ch), None) = (chars.next(), chars.next()) {
                    session.type_letter(ch);
                }
            }
        }

        if session.take_solved_event() {
            self.solve_time = session.elapsed_string();
            self.screen = ScreenState::Solved;
            if self.sound {
                self.chime_pending = true;
            }
        }
    }

    fn handle_solved_key(&mut self, key: &str) {
        match key {
            "n" | "Enter" | " " => self.start_game(),
            "Escape" => self.leave_game(),
            _ => {}
        }
    }

    /// Pointer input: grid clicks select cells, clue-list clicks jump to
    /// the clue. Anywhere else is absorbed.
    pub fn handle_click(&mut self, x: f64, y: f64, layout: &Layout) {
        if self.screen != ScreenState::Playing {
            return;
        }
        let Some(session) = self.session.as_mut() else {
            return;
        };

        if let Some(pos) = layout.cell_at(x, y) {
            session.select_cell(pos);
        } else if let Some(word) = layout.clue_at(x, y) {
            session.select_clue(word);
        }
    }

    /// The chime request, delivered at most once per completion
    pub fn take_chime(&mut self) -> bool {
        std::mem::take(&mut self.chime_pending)
    }

    /// The theme-toggle request from the settings screen
    pub fn take_theme_toggle(&mut self) -> bool {
        std::mem::take(&mut self.theme_toggle_pending)
    }

    // Getters
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }
    pub fn screen(&self) -> ScreenState {
        self.screen
    }
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }
    pub fn sound(&self) -> bool {
        self.sound
    }
    pub fn set_sound(&mut self, sound: bool) {
        self.sound = sound;
    }
    pub fn frame(&self) -> u32 {
        self.frame
    }
    pub fn solve_time(&self) -> &str {
        &self.solve_time
    }

    pub fn is_complete(&self) -> bool {
        self.session.as_ref().map_or(false, Session::is_complete)
    }

    pub fn elapsed_string(&self) -> String {
        self.session
            .as_ref()
            .map_or_else(|| "0:00".to_string(), Session::elapsed_string)
    }

    /// Snapshot for the hosting page
    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot {
            screen: self.screen,
            difficulty: self.difficulty.to_string(),
            sound: self.sound,
            elapsed: self.elapsed_string(),
            complete: self.is_complete(),
            correct_words: self
                .session
                .as_ref()
                .map(|session| {
                    let mut words: Vec<String> =
                        session.correct_words().iter().map(|w| w.to_string()).collect();
                    words.sort();
                    words
                })
                .unwrap_or_default(),
        }
    }
}
