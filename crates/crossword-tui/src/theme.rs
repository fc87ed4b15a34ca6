use crossterm::style::Color;

/// Color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    /// Background color
    pub bg: Color,
    /// Default text color
    pub fg: Color,
    /// Grid border color
    pub border: Color,
    /// Blank (non-word) cell fill
    pub blank: Color,
    /// Player-entered letter color
    pub letter: Color,
    /// Selected cell background
    pub selected_bg: Color,
    /// Active word background
    pub active_bg: Color,
    /// Solved word background
    pub solved_bg: Color,
    /// Clue text color
    pub clue: Color,
    /// Solved clue text color
    pub clue_solved: Color,
    /// Timer/info text color
    pub info: Color,
    /// Key binding text color
    pub key: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            bg: Color::Rgb { r: 20, g: 22, b: 30 },
            fg: Color::Rgb { r: 230, g: 230, b: 240 },
            border: Color::Rgb { r: 110, g: 115, b: 140 },
            blank: Color::Rgb { r: 45, g: 48, b: 60 },
            letter: Color::Rgb { r: 80, g: 180, b: 255 },
            selected_bg: Color::Rgb { r: 70, g: 90, b: 140 },
            active_bg: Color::Rgb { r: 40, g: 48, b: 70 },
            solved_bg: Color::Rgb { r: 30, g: 70, b: 40 },
            clue: Color::Rgb { r: 200, g: 200, b: 215 },
            clue_solved: Color::Rgb { r: 90, g: 255, b: 130 },
            info: Color::Rgb { r: 160, g: 165, b: 185 },
            key: Color::Rgb { r: 255, g: 210, b: 100 },
        }
    }

    /// Light theme
    pub fn light() -> Self {
        Self {
            bg: Color::Rgb { r: 248, g: 248, b: 252 },
            fg: Color::Rgb { r: 30, g: 30, b: 40 },
            border: Color::Rgb { r: 120, g: 120, b: 140 },
            blank: Color::Rgb { r: 70, g: 70, b: 85 },
            letter: Color::Rgb { r: 30, g: 100, b: 200 },
            selected_bg: Color::Rgb { r: 180, g: 200, b: 255 },
            active_bg: Color::Rgb { r: 225, g: 232, b: 248 },
            solved_bg: Color::Rgb { r: 200, g: 240, b: 200 },
            clue: Color::Rgb { r: 50, g: 50, b: 65 },
            clue_solved: Color::Rgb { r: 40, g: 160, b: 60 },
            info: Color::Rgb { r: 90, g: 90, b: 110 },
            key: Color::Rgb { r: 200, g: 120, b: 20 },
        }
    }
}
