//! Color themes for the browser crossword UI

use serde::{Deserialize, Serialize};

/// RGB color
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn as_css(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }

    pub fn as_css_alpha(&self, alpha: f64) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
    }
}

/// Color theme for the game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    /// Page background
    pub background: Color,
    /// Grid lines and cell borders
    pub grid_lines: Color,
    /// Blank (non-word) cell fill
    pub blank_bg: Color,
    /// Fillable cell background
    pub cell_bg: Color,
    /// Selected cell background
    pub selected_bg: Color,
    /// Active word background
    pub active_bg: Color,
    /// Solved word background
    pub solved_bg: Color,
    /// Player-entered letter color
    pub letter_text: Color,
    /// Clue-start number color
    pub number_text: Color,
    /// Clue list text
    pub clue_text: Color,
    /// Solved clue text
    pub clue_solved_text: Color,
    /// Header/help text
    pub info_text: Color,
    /// Titles and accents
    pub title_text: Color,
}

impl Theme {
    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            background: Color::new(24, 24, 32),
            grid_lines: Color::new(100, 100, 140),
            blank_bg: Color::new(14, 14, 20),
            cell_bg: Color::new(40, 42, 56),
            selected_bg: Color::new(70, 100, 150),
            active_bg: Color::new(50, 60, 85),
            solved_bg: Color::new(40, 80, 40),
            letter_text: Color::new(230, 230, 245),
            number_text: Color::new(150, 150, 175),
            clue_text: Color::new(200, 200, 220),
            clue_solved_text: Color::new(100, 255, 150),
            info_text: Color::new(160, 160, 180),
            title_text: Color::new(255, 220, 100),
        }
    }

    /// Light theme
    pub fn light() -> Self {
        Self {
            background: Color::new(239, 246, 255),
            grid_lines: Color::new(120, 120, 140),
            blank_bg: Color::new(30, 32, 40),
            cell_bg: Color::new(255, 255, 255),
            selected_bg: Color::new(180, 210, 255),
            active_bg: Color::new(219, 234, 254),
            solved_bg: Color::new(200, 240, 200),
            letter_text: Color::new(20, 20, 40),
            number_text: Color::new(100, 100, 120),
            clue_text: Color::new(40, 40, 60),
            clue_solved_text: Color::new(30, 150, 70),
            info_text: Color::new(80, 80, 100),
            title_text: Color::new(30, 90, 200),
        }
    }
}
