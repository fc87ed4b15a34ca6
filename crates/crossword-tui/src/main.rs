mod app;
mod celebration;
mod render;
mod theme;

use app::App;
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use crossword_core::Difficulty;
use std::io::{self, Write};
use std::time::{Duration, Instant};

/// Terminal crossword game set in North East England
#[derive(Parser)]
#[command(name = "crossword", version)]
struct Args {
    /// Difficulty tier: easy, medium or hard
    #[arg(short, long, default_value = "medium", value_parser = parse_difficulty)]
    difficulty: Difficulty,
    /// Start with the light theme
    #[arg(long)]
    light: bool,
}

fn parse_difficulty(name: &str) -> Result<Difficulty, String> {
    Difficulty::from_name(name).ok_or_else(|| format!("unknown difficulty: {name}"))
}

fn main() -> io::Result<()> {
    let args = Args::parse();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    // Run the app
    let result = run_app(&mut stdout, App::new(args.difficulty, !args.light));

    // Restore terminal
    disable_raw_mode()?;
    execute!(stdout, LeaveAlternateScreen, DisableMouseCapture)?;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
    }

    Ok(())
}

fn run_app(stdout: &mut io::Stdout, mut app: App) -> io::Result<()> {
    let mut last_tick = Instant::now();
    let mut last_second = Instant::now();

    loop {
        let tick_rate = app.tick_rate();

        render::render(stdout, &app)?;
        stdout.flush()?;

        // Handle input with timeout so animations and the clock keep moving
        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout.min(Duration::from_millis(33)))? {
            match event::read()? {
                Event::Key(key) => {
                    // Handle Ctrl+C
                    if key.modifiers.contains(KeyModifiers::CONTROL)
                        && key.code == KeyCode::Char('c')
                    {
                        break;
                    }

                    match app.handle_key(key) {
                        app::AppAction::Continue => {}
                        app::AppAction::Quit => break,
                    }
                }
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                _ => {}
            }
        }

        // Tick animations
        if last_tick.elapsed() >= tick_rate {
            app.tick();
            last_tick = Instant::now();
        }

        // One-second game clock
        if last_second.elapsed() >= Duration::from_secs(1) {
            app.tick_second();
            last_second = Instant::now();
        }
    }

    Ok(())
}
