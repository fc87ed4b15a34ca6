//! Canvas rendering for the browser crossword UI

use crate::game::{GameState, ScreenState};
use crate::theme::Theme;
use crossword_core::{Direction, Position, Session, WordId};
use web_sys::CanvasRenderingContext2d;

const HEADER_HEIGHT: f64 = 56.0;
const GRID_MARGIN: f64 = 24.0;
const CLUE_PANEL_WIDTH: f64 = 320.0;
const CLUE_LINE_HEIGHT: f64 = 22.0;

/// Screen geometry for the game screen. The click handler and the
/// renderer share one layout so hit-testing always matches the pixels.
pub struct Layout {
    pub grid_x: f64,
    pub grid_y: f64,
    pub cell: f64,
    pub clue_x: f64,
    grid_rows: usize,
    grid_cols: usize,
    clue_rows: Vec<(WordId, f64)>,
}

impl Layout {
    pub fn compute(width: u32, height: u32, session: &Session) -> Layout {
        let puzzle = session.puzzle();
        let rows = puzzle.rows().max(1) as f64;
        let cols = puzzle.cols().max(1) as f64;

        let avail_w = (width as f64 - CLUE_PANEL_WIDTH - GRID_MARGIN * 3.0).max(200.0);
        let avail_h = (height as f64 - HEADER_HEIGHT - GRID_MARGIN * 2.0).max(200.0);
        let cell = (avail_w / cols).min(avail_h / rows).clamp(24.0, 56.0);

        let grid_x = GRID_MARGIN;
        let grid_y = HEADER_HEIGHT + GRID_MARGIN;
        let clue_x = grid_x + cols * cell + GRID_MARGIN;

        // Clue list rows: a header line per direction, one line per clue,
        // then a gap before the next direction
        let mut clue_rows = Vec::new();
        let mut y = grid_y;
        for direction in [Direction::Across, Direction::Down] {
            y += CLUE_LINE_HEIGHT;
            for view in session.clue_views(direction) {
                clue_rows.push((view.word, y));
                y += CLUE_LINE_HEIGHT;
            }
            y += CLUE_LINE_HEIGHT / 2.0;
        }

        Layout {
            grid_x,
            grid_y,
            cell,
            clue_x,
            grid_rows: puzzle.rows(),
            grid_cols: puzzle.cols(),
            clue_rows,
        }
    }

    /// Map a canvas coordinate to a grid cell
    pub fn cell_at(&self, x: f64, y: f64) -> Option<Position> {
        if x < self.grid_x || y < self.grid_y {
            return None;
        }
        let col = ((x - self.grid_x) / self.cell) as usize;
        let row = ((y - self.grid_y) / self.cell) as usize;
        if row >= self.grid_rows || col >= self.grid_cols {
            return None;
        }
        Some(Position::new(row, col))
    }

    /// Map a canvas coordinate to a clue-list entry
    pub fn clue_at(&self, x: f64, y: f64) -> Option<WordId> {
        if x < self.clue_x || x > self.clue_x + CLUE_PANEL_WIDTH {
            return None;
        }
        self.clue_rows
            .iter()
            .find(|(_, top)| y >= *top && y < *top + CLUE_LINE_HEIGHT)
            .map(|(word, _)| *word)
    }

    fn clue_row_y(&self, word: WordId) -> Option<f64> {
        self.clue_rows
            .iter()
            .find(|(w, _)| *w == word)
            .map(|(_, y)| *y)
    }
}

/// Render the complete game to canvas
pub fn render_game(
    ctx: &CanvasRenderingContext2d,
    state: &GameState,
    theme: &Theme,
    width: u32,
    height: u32,
) {
    // Clear background
    ctx.set_fill_style_str(&theme.background.as_css());
    ctx.fill_rect(0.0, 0.0, width as f64, height as f64);

    match state.screen() {
        ScreenState::Home => render_home(ctx, state, theme, width, height),
        ScreenState::Settings => render_settings(ctx, state, theme, width, height),
        ScreenState::Playing => {
            if let Some(session) = state.session() {
                let layout = Layout::compute(width, height, session);
                render_header(ctx, session, theme, width);
                render_grid(ctx, session, theme, &layout);
                render_clues(ctx, session, theme, &layout);
            }
        }
        ScreenState::Solved => render_solved(ctx, state, theme, width, height),
    }
}

fn mono_font(size: f64) -> String {
    format!("{}px 'JetBrains Mono', 'Fira Code', 'Consolas', monospace", size)
}

fn render_header(
    ctx: &CanvasRenderingContext2d,
    session: &Session,
    theme: &Theme,
    width: u32,
) {
    ctx.set_text_align("left");
    ctx.set_text_baseline("middle");

    ctx.set_font(&mono_font(20.0));
    ctx.set_fill_style_str(&theme.title_text.as_css());
    let title = format!("HADRIAN'S CROSSWORD — {}", session.puzzle().difficulty());
    let _ = ctx.fill_text(&title, GRID_MARGIN, HEADER_HEIGHT / 2.0);

    ctx.set_text_align("right");
    ctx.set_fill_style_str(&theme.info_text.as_css());
    let _ = ctx.fill_text(
        &format!("time {}", session.elapsed_string()),
        width as f64 - GRID_MARGIN,
        HEADER_HEIGHT / 2.0,
    );
}

fn render_grid(
    ctx: &CanvasRenderingContext2d,
    session: &Session,
    theme: &Theme,
    layout: &Layout,
) {
    let puzzle = session.puzzle();
    for row in 0..puzzle.rows() {
        for col in 0..puzzle.cols() {
            if !puzzle.in_bounds(row as i32, col as i32) {
                continue;
            }
            let pos = Position::new(row, col);
            let view = session.cell_view(pos);
            let x = layout.grid_x + col as f64 * layout.cell;
            let y = layout.grid_y + row as f64 * layout.cell;

            let bg = if view.blank {
                &theme.blank_bg
            } else if view.selected {
                &theme.selected_bg
            } else if view.in_active_word {
                &theme.active_bg
            } else if view.in_solved_word {
                &theme.solved_bg
            } else {
                &theme.cell_bg
            };
            ctx.set_fill_style_str(&bg.as_css());
            ctx.fill_rect(x, y, layout.cell, layout.cell);

            ctx.set_stroke_style_str(&theme.grid_lines.as_css());
            ctx.set_line_width(1.0);
            ctx.stroke_rect(x, y, layout.cell, layout.cell);

            if view.blank {
                continue;
            }

            if let Some(number) = view.number {
                ctx.set_font(&mono_font(layout.cell * 0.26));
                ctx.set_text_align("left");
                ctx.set_text_baseline("top");
                ctx.set_fill_style_str(&theme.number_text.as_css());
                let _ = ctx.fill_text(&number.to_string(), x + 3.0, y + 2.0);
            }

            if let Some(letter) = view.letter {
                ctx.set_font(&mono_font(layout.cell * 0.55));
                ctx.set_text_align("center");
                ctx.set_text_baseline("middle");
                ctx.set_fill_style_str(&theme.letter_text.as_css());
                let _ = ctx.fill_text(
                    &letter.to_string(),
                    x + layout.cell / 2.0,
                    y + layout.cell / 2.0 + 1.0,
                );
            }
        }
    }
}

fn render_clues(
    ctx: &CanvasRenderingContext2d,
    session: &Session,
    theme: &Theme,
    layout: &Layout,
) {
    ctx.set_text_align("left");
    ctx.set_text_baseline("middle");

    for direction in [Direction::Across, Direction::Down] {
        let views = session.clue_views(direction);
        let Some(first) = views.first() else { continue };
        let Some(first_y) = layout.clue_row_y(first.word) else {
            continue;
        };

        ctx.set_font(&mono_font(15.0));
        ctx.set_fill_style_str(&theme.title_text.as_css());
        let header = match direction {
            Direction::Across => "ACROSS",
            Direction::Down => "DOWN",
        };
        let _ = ctx.fill_text(
            header,
            layout.clue_x,
            first_y - CLUE_LINE_HEIGHT / 2.0,
        );

        ctx.set_font(&mono_font(13.0));
        for view in &views {
            let Some(top) = layout.clue_row_y(view.word) else {
                continue;
            };
            if view.active {
                ctx.set_fill_style_str(&theme.active_bg.as_css_alpha(0.7));
                ctx.fill_rect(
                    layout.clue_x - 4.0,
                    top,
                    CLUE_PANEL_WIDTH,
                    CLUE_LINE_HEIGHT,
                );
            }
            let color = if view.solved {
                &theme.clue_solved_text
            } else {
                &theme.clue_text
            };
            ctx.set_fill_style_str(&color.as_css());
            let mut text = format!("{}. {}", view.word.num, view.text);
            text.truncate(44);
            let _ = ctx.fill_text(&text, layout.clue_x, top + CLUE_LINE_HEIGHT / 2.0);
        }
    }
}

fn render_home(
    ctx: &CanvasRenderingContext2d,
    state: &GameState,
    theme: &Theme,
    width: u32,
    height: u32,
) {
    let cx = width as f64 / 2.0;
    let cy = height as f64 / 2.0;
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");

    ctx.set_font(&mono_font(34.0));
    ctx.set_fill_style_str(&theme.title_text.as_css());
    let _ = ctx.fill_text("HADRIAN'S CROSSWORD", cx, cy - 90.0);

    ctx.set_font(&mono_font(16.0));
    ctx.set_fill_style_str(&theme.clue_text.as_css());
    let _ = ctx.fill_text(
        "Monuments, towns and footballers of North East England",
        cx,
        cy - 50.0,
    );

    ctx.set_fill_style_str(&theme.info_text.as_css());
    let _ = ctx.fill_text("enter  start game", cx, cy + 10.0);
    let _ = ctx.fill_text("s      settings", cx, cy + 34.0);

    let status = format!(
        "difficulty: {}   sound: {}",
        state.difficulty(),
        if state.sound() { "on" } else { "off" }
    );
    let _ = ctx.fill_text(&status, cx, cy + 90.0);
}

fn render_settings(
    ctx: &CanvasRenderingContext2d,
    state: &GameState,
    theme: &Theme,
    width: u32,
    height: u32,
) {
    let cx = width as f64 / 2.0;
    let cy = height as f64 / 2.0;
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");

    ctx.set_font(&mono_font(26.0));
    ctx.set_fill_style_str(&theme.title_text.as_css());
    let _ = ctx.fill_text("SETTINGS", cx, cy - 90.0);

    ctx.set_font(&mono_font(16.0));
    ctx.set_fill_style_str(&theme.clue_text.as_css());
    let _ = ctx.fill_text(
        &format!("1/2/3  difficulty: {}", state.difficulty()),
        cx,
        cy - 30.0,
    );
    let _ = ctx.fill_text(
        &format!("s      sound: {}", if state.sound() { "on" } else { "off" }),
        cx,
        cy - 6.0,
    );
    let _ = ctx.fill_text("t      toggle theme", cx, cy + 18.0);

    ctx.set_fill_style_str(&theme.info_text.as_css());
    let _ = ctx.fill_text("esc back", cx, cy + 70.0);
}

fn render_solved(
    ctx: &CanvasRenderingContext2d,
    state: &GameState,
    theme: &Theme,
    width: u32,
    height: u32,
) {
    let cx = width as f64 / 2.0;
    let cy = height as f64 / 2.0;
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");

    // Gentle pulse driven by the frame counter
    let pulse = (state.frame() as f64 * 0.08).sin() * 3.0;
    ctx.set_font(&mono_font(32.0 + pulse));
    ctx.set_fill_style_str(&theme.clue_solved_text.as_css());
    let _ = ctx.fill_text("Congratulations!", cx, cy - 50.0);

    ctx.set_font(&mono_font(18.0));
    ctx.set_fill_style_str(&theme.clue_text.as_css());
    let _ = ctx.fill_text(
        &format!("You completed the crossword in {}", state.solve_time()),
        cx,
        cy,
    );

    ctx.set_font(&mono_font(14.0));
    ctx.set_fill_style_str(&theme.info_text.as_css());
    let _ = ctx.fill_text("n new game   esc home", cx, cy + 50.0);
}
