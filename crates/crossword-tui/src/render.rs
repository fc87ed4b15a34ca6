use crate::app::{App, ScreenState};
use crate::theme::Theme;
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    execute,
    style::{Print, SetBackgroundColor, SetForegroundColor},
    terminal::{self, Clear, ClearType},
};
use crossword_core::{Direction, Position, Puzzle, Session};
use std::io;

/// Width reserved for the clue panel next to the grid
const CLUE_PANEL_WIDTH: u16 = 38;

/// Where the grid lands on screen. Cells are 4 columns by 2 rows with
/// shared borders; the mouse handler uses the same layout to map clicks
/// back to coordinates.
pub struct GridLayout {
    pub x: u16,
    pub y: u16,
}

pub fn grid_layout(term_width: u16, term_height: u16, puzzle: &Puzzle) -> GridLayout {
    let grid_width = puzzle.cols() as u16 * 4 + 1;
    let grid_height = puzzle.rows() as u16 * 2 + 1;

    let total_width = grid_width + 3 + CLUE_PANEL_WIDTH;
    let x = if term_width > total_width {
        (term_width - total_width) / 2
    } else {
        1
    };
    let y = if term_height > grid_height + 6 { 3 } else { 1 };
    GridLayout { x, y }
}

impl GridLayout {
    /// Map a terminal coordinate back to a grid cell; border and
    /// out-of-grid clicks return None
    pub fn cell_at(&self, column: u16, row: u16) -> Option<Position> {
        if column <= self.x || row <= self.y {
            return None;
        }
        let dx = column - self.x;
        let dy = row - self.y;
        if dx % 4 == 0 || dy % 2 == 0 {
            return None;
        }
        Some(Position::new(dy as usize / 2, dx as usize / 4))
    }
}

pub fn render(stdout: &mut io::Stdout, app: &App) -> io::Result<()> {
    let (term_width, term_height) = terminal::size()?;

    execute!(
        stdout,
        Hide,
        SetBackgroundColor(app.theme.bg),
        Clear(ClearType::All)
    )?;

    match app.screen {
        ScreenState::Home => render_home(stdout, app, term_width, term_height)?,
        ScreenState::Settings => render_settings(stdout, app, term_width, term_height)?,
        ScreenState::Playing => render_game(stdout, app, term_width, term_height)?,
        ScreenState::Solved => render_solved(stdout, app, term_width, term_height)?,
    }

    execute!(stdout, Show)?;
    Ok(())
}

fn print_centered(
    stdout: &mut io::Stdout,
    theme: &Theme,
    text: &str,
    y: u16,
    term_width: u16,
) -> io::Result<()> {
    let x = term_width.saturating_sub(text.chars().count() as u16) / 2;
    execute!(
        stdout,
        MoveTo(x, y),
        SetBackgroundColor(theme.bg),
        Print(text)
    )
}

fn render_home(
    stdout: &mut io::Stdout,
    app: &App,
    term_width: u16,
    term_height: u16,
) -> io::Result<()> {
    let theme = &app.theme;
    let mid = term_height / 2;

    execute!(stdout, SetForegroundColor(theme.key))?;
    print_centered(stdout, theme, "HADRIAN'S CROSSWORD", mid.saturating_sub(5), term_width)?;

    execute!(stdout, SetForegroundColor(theme.fg))?;
    print_centered(
        stdout,
        theme,
        "Monuments, towns and footballers of North East England",
        mid.saturating_sub(3),
        term_width,
    )?;

    execute!(stdout, SetForegroundColor(theme.info))?;
    print_centered(stdout, theme, "enter  start game", mid, term_width)?;
    print_centered(stdout, theme, "s      settings", mid + 1, term_width)?;
    print_centered(stdout, theme, "q      quit", mid + 2, term_width)?;

    let status = format!(
        "difficulty: {}   theme: {}",
        app.difficulty,
        if app.dark_theme { "dark" } else { "light" }
    );
    print_centered(stdout, theme, &status, mid + 5, term_width)
}

fn render_settings(
    stdout: &mut io::Stdout,
    app: &App,
    term_width: u16,
    term_height: u16,
) -> io::Result<()> {
    let theme = &app.theme;
    let mid = term_height / 2;

    execute!(stdout, SetForegroundColor(theme.key))?;
    print_centered(stdout, theme, "SETTINGS", mid.saturating_sub(4), term_width)?;

    let rows = [
        format!("Difficulty   < {} >", app.difficulty),
        format!("Theme        < {} >", if app.dark_theme { "dark" } else { "light" }),
    ];
    for (i, row) in rows.iter().enumerate() {
        let selected = app.settings_row == i;
        let color = if selected { theme.key } else { theme.fg };
        let marker = if selected { "> " } else { "  " };
        execute!(stdout, SetForegroundColor(color))?;
        print_centered(
            stdout,
            theme,
            &format!("{marker}{row}"),
            mid.saturating_sub(1) + i as u16,
            term_width,
        )?;
    }

    execute!(stdout, SetForegroundColor(theme.info))?;
    print_centered(
        stdout,
        theme,
        "up/down select   left/right change   esc back",
        mid + 3,
        term_width,
    )
}

fn render_game(
    stdout: &mut io::Stdout,
    app: &App,
    term_width: u16,
    term_height: u16,
) -> io::Result<()> {
    let Some(session) = app.session.as_ref() else {
        return Ok(());
    };
    let theme = &app.theme;
    let layout = grid_layout(term_width, term_height, session.puzzle());

    // Header: title left, timer right above the grid
    let header = format!("Hadrian's Crossword — {}", session.puzzle().difficulty());
    execute!(
        stdout,
        MoveTo(layout.x, layout.y.saturating_sub(2)),
        SetForegroundColor(theme.key),
        Print(&header),
        SetForegroundColor(theme.info),
        Print(format!("   time {}", session.elapsed_string()))
    )?;

    render_grid(stdout, session, theme, &layout)?;

    let clue_x = layout.x + session.puzzle().cols() as u16 * 4 + 4;
    render_clues(stdout, session, theme, clue_x, layout.y)?;

    let controls_y = layout.y + session.puzzle().rows() as u16 * 2 + 2;
    execute!(
        stdout,
        MoveTo(layout.x, controls_y),
        SetForegroundColor(theme.info),
        Print("type letters   arrows move   tab next clue   backspace erase   esc home")
    )?;
    Ok(())
}

fn render_grid(
    stdout: &mut io::Stdout,
    session: &Session,
    theme: &Theme,
    layout: &GridLayout,
) -> io::Result<()> {
    let puzzle = session.puzzle();
    for row in 0..puzzle.rows() {
        for col in 0..puzzle.cols() {
            let pos = Position::new(row, col);
            if !puzzle.in_bounds(row as i32, col as i32) {
                continue;
            }
            render_cell(stdout, session, theme, layout, pos)?;
        }
    }
    Ok(())
}

fn render_cell(
    stdout: &mut io::Stdout,
    session: &Session,
    theme: &Theme,
    layout: &GridLayout,
    pos: Position,
) -> io::Result<()> {
    let view = session.cell_view(pos);
    let x = layout.x + pos.col as u16 * 4;
    let y = layout.y + pos.row as u16 * 2;

    let top = match view.number {
        Some(num) => format!("+{num:-<3}+"),
        None => "+---+".to_string(),
    };

    execute!(
        stdout,
        SetBackgroundColor(theme.bg),
        SetForegroundColor(theme.border),
        MoveTo(x, y),
        Print(top),
        MoveTo(x, y + 2),
        Print("+---+")
    )?;

    if view.blank {
        execute!(
            stdout,
            MoveTo(x, y + 1),
            Print("|"),
            SetForegroundColor(theme.blank),
            Print("███"),
            SetForegroundColor(theme.border),
            Print("|")
        )?;
        return Ok(());
    }

    let inner_bg = if view.selected {
        theme.selected_bg
    } else if view.in_active_word {
        theme.active_bg
    } else if view.in_solved_word {
        theme.solved_bg
    } else {
        theme.bg
    };

    execute!(
        stdout,
        MoveTo(x, y + 1),
        SetBackgroundColor(theme.bg),
        Print("|"),
        SetBackgroundColor(inner_bg),
        SetForegroundColor(theme.letter),
        Print(format!(" {} ", view.letter.unwrap_or(' '))),
        SetBackgroundColor(theme.bg),
        SetForegroundColor(theme.border),
        Print("|")
    )
}

fn render_clues(
    stdout: &mut io::Stdout,
    session: &Session,
    theme: &Theme,
    x: u16,
    y: u16,
) -> io::Result<()> {
    let mut line = y;
    for direction in [Direction::Across, Direction::Down] {
        let header = match direction {
            Direction::Across => "ACROSS",
            Direction::Down => "DOWN",
        };
        execute!(
            stdout,
            MoveTo(x, line),
            SetBackgroundColor(theme.bg),
            SetForegroundColor(theme.key),
            Print(header)
        )?;
        line += 1;

        for view in session.clue_views(direction) {
            let color = if view.solved { theme.clue_solved } else { theme.clue };
            let marker = if view.active { ">" } else { " " };
            let mut text = format!("{marker}{}. {}", view.word.num, view.text);
            text.truncate(CLUE_PANEL_WIDTH as usize);
            execute!(
                stdout,
                MoveTo(x, line),
                SetForegroundColor(color),
                Print(text)
            )?;
            line += 1;
        }
        line += 1;
    }
    Ok(())
}

fn render_solved(
    stdout: &mut io::Stdout,
    app: &App,
    term_width: u16,
    term_height: u16,
) -> io::Result<()> {
    let theme = &app.theme;

    for particle in app.celebration.particles() {
        execute!(
            stdout,
            MoveTo(particle.x as u16, particle.y as u16),
            SetBackgroundColor(theme.bg),
            SetForegroundColor(particle.color),
            Print(particle.ch)
        )?;
    }

    let mid = term_height / 2;
    execute!(stdout, SetForegroundColor(theme.key))?;
    print_centered(stdout, theme, "Congratulations!", mid.saturating_sub(2), term_width)?;

    execute!(stdout, SetForegroundColor(theme.fg))?;
    print_centered(
        stdout,
        theme,
        &format!("You completed the crossword in {}", app.solve_time),
        mid,
        term_width,
    )?;

    execute!(stdout, SetForegroundColor(theme.info))?;
    print_centered(
        stdout,
        theme,
        "n new game   1/2/3 pick difficulty   q quit",
        mid + 2,
        term_width,
    )
}
