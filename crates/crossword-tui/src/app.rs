use crate::celebration::Celebration;
use crate::render;
use crate::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use crossterm::terminal;
use crossword_core::{Arrow, Difficulty, Session};
use std::time::Duration;

/// Result of handling a key press
pub enum AppAction {
    Continue,
    Quit,
}

/// Current screen state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenState {
    /// Title screen
    Home,
    /// Difficulty and theme settings
    Settings,
    /// Normal gameplay
    Playing,
    /// Celebration screen after completing the puzzle
    Solved,
}

/// Settings rows, top to bottom
const SETTINGS_ROWS: usize = 2;

/// The main application state
pub struct App {
    /// Current play session, present on the game and solved screens
    pub session: Option<Session>,
    /// Difficulty for the next game
    pub difficulty: Difficulty,
    /// Color theme
    pub theme: Theme,
    /// Whether the dark theme is active
    pub dark_theme: bool,
    /// Current screen state
    pub screen: ScreenState,
    /// Selected settings row
    pub settings_row: usize,
    /// Solved-screen confetti
    pub celebration: Celebration,
    /// Solve time carried onto the solved screen
    pub solve_time: String,
}

impl App {
    pub fn new(difficulty: Difficulty, dark_theme: bool) -> Self {
        Self {
            session: None,
            difficulty,
            theme: if dark_theme { Theme::dark() } else { Theme::light() },
            dark_theme,
            screen: ScreenState::Home,
            settings_row: 0,
            celebration: Celebration::new(),
            solve_time: String::new(),
        }
    }

    /// Get the tick rate based on current screen
    pub fn tick_rate(&self) -> Duration {
        match self.screen {
            ScreenState::Solved => Duration::from_millis(33),
            _ => Duration::from_millis(100),
        }
    }

    /// Update animations (called every tick)
    pub fn tick(&mut self) {
        if self.screen == ScreenState::Solved {
            if let Ok((width, height)) = terminal::size() {
                self.celebration.update(width, height);
            }
        }
    }

    /// One-second clock tick, forwarded to the active session
    pub fn tick_second(&mut self) {
        if self.screen == ScreenState::Playing {
            if let Some(session) = self.session.as_mut() {
                session.tick_second();
            }
        }
    }

    fn start_game(&mut self) {
        self.session = Some(Session::new(self.difficulty));
        self.screen = ScreenState::Playing;
    }

    fn leave_game(&mut self) {
        if let Some(session) = self.session.as_mut() {
            session.end();
        }
        self.session = None;
        self.screen = ScreenState::Home;
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> AppAction {
        match self.screen {
            ScreenState::Home => self.handle_home_key(key),
            ScreenState::Settings => self.handle_settings_key(key),
            ScreenState::Playing => self.handle_playing_key(key),
            ScreenState::Solved => self.handle_solved_key(key),
        }
    }

    fn handle_home_key(&mut self, key: KeyEvent) -> AppAction {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return AppAction::Quit,
            KeyCode::Enter | KeyCode::Char(' ') => self.start_game(),
            KeyCode::Char('s') => {
                self.settings_row = 0;
                self.screen = ScreenState::Settings;
            }
            _ => {}
        }
        AppAction::Continue
    }

    fn handle_settings_key(&mut self, key: KeyEvent) -> AppAction {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => self.screen = ScreenState::Home,
            KeyCode::Up => {
                self.settings_row = (self.settings_row + SETTINGS_ROWS - 1) % SETTINGS_ROWS;
            }
            KeyCode::Down => self.settings_row = (self.settings_row + 1) % SETTINGS_ROWS,
            KeyCode::Left | KeyCode::Right => match self.settings_row {
                0 => self.cycle_difficulty(key.code == KeyCode::Right),
                _ => self.toggle_theme(),
            },
            _ => {}
        }
        AppAction::Continue
    }

    fn handle_playing_key(&mut self, key: KeyEvent) -> AppAction {
        let Some(session) = self.session.as_mut() else {
            return AppAction::Continue;
        };

        match key.code {
            KeyCode::Esc => {
                self.leave_game();
                return AppAction::Continue;
            }
            KeyCode::Char(ch) if ch.is_ascii_alphabetic() => session.type_letter(ch),
            KeyCode::Backspace | KeyCode::Delete => session.backspace(),
            KeyCode::Left => session.move_arrow(Arrow::Left),
            KeyCode::Right => session.move_arrow(Arrow::Right),
            KeyCode::Up => session.move_arrow(Arrow::Up),
            KeyCode::Down => session.move_arrow(Arrow::Down),
            KeyCode::Tab => session.tab_to_next_clue(),
            _ => {}
        }

        if session.take_solved_event() {
            self.solve_time = session.elapsed_string();
            self.celebration.reset();
            self.screen = ScreenState::Solved;
        }
        AppAction::Continue
    }

    fn handle_solved_key(&mut self, key: KeyEvent) -> AppAction {
        match key.code {
            KeyCode::Char('q') => return AppAction::Quit,
            KeyCode::Esc => self.leave_game(),
            KeyCode::Char('n') | KeyCode::Enter | KeyCode::Char(' ') => self.start_game(),
            KeyCode::Char('1') => {
                self.difficulty = Difficulty::Easy;
                self.start_game();
            }
            KeyCode::Char('2') => {
                self.difficulty = Difficulty::Medium;
                self.start_game();
            }
            KeyCode::Char('3') => {
                self.difficulty = Difficulty::Hard;
                self.start_game();
            }
            _ => {}
        }
        AppAction::Continue
    }

    /// Click-to-select on the game screen
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if self.screen != ScreenState::Playing {
            return;
        }
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let Ok((term_width, term_height)) = terminal::size() else {
            return;
        };

        let layout = render::grid_layout(term_width, term_height, session.puzzle());
        if let Some(pos) = layout.cell_at(mouse.column, mouse.row) {
            session.select_cell(pos);
        }
    }

    fn cycle_difficulty(&mut self, forward: bool) {
        let tiers = Difficulty::ALL;
        let idx = tiers.iter().position(|&d| d == self.difficulty).unwrap_or(0);
        let idx = if forward {
            (idx + 1) % tiers.len()
        } else {
            (idx + tiers.len() - 1) % tiers.len()
        };
        self.difficulty = tiers[idx];
    }

    fn toggle_theme(&mut self) {
        self.dark_theme = !self.dark_theme;
        self.theme = if self.dark_theme {
            Theme::dark()
        } else {
            Theme::light()
        };
    }
}
