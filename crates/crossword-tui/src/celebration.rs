//! Confetti animation for the solved screen

use crossterm::style::Color;
use rand::Rng;

/// A single confetti particle
#[derive(Clone)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub ch: char,
    pub color: Color,
}

impl Particle {
    pub fn is_visible(&self, width: u16, height: u16) -> bool {
        self.x >= 0.0 && self.x < width as f32 && self.y >= 0.0 && self.y < height as f32
    }
}

/// Confetti characters
const CONFETTI_CHARS: &[char] = &['*', '✦', '✧', '◆', '◇', '○', '●', '▲'];

fn random_bright_color() -> Color {
    let mut rng = rand::thread_rng();
    match rng.gen_range(0..7) {
        0 => Color::Red,
        1 => Color::Green,
        2 => Color::Yellow,
        3 => Color::Blue,
        4 => Color::Magenta,
        5 => Color::Cyan,
        _ => Color::White,
    }
}

/// The solved-screen confetti state
pub struct Celebration {
    particles: Vec<Particle>,
    frame: u32,
}

impl Default for Celebration {
    fn default() -> Self {
        Self::new()
    }
}

impl Celebration {
    pub fn new() -> Self {
        Self {
            particles: Vec::new(),
            frame: 0,
        }
    }

    pub fn reset(&mut self) {
        self.particles.clear();
        self.frame = 0;
    }

    /// Advance one animation frame: drop fresh particles from the top
    /// every other frame, drift the rest down, cull what left the screen
    pub fn update(&mut self, width: u16, height: u16) {
        self.frame = self.frame.wrapping_add(1);
        let mut rng = rand::thread_rng();

        if self.frame % 2 == 0 {
            for _ in 0..4 {
                self.particles.push(Particle {
                    x: rng.gen_range(0.0..width.max(1) as f32),
                    y: 0.0,
                    vx: rng.gen_range(-0.4..0.4),
                    vy: rng.gen_range(0.3..0.9),
                    ch: CONFETTI_CHARS[rng.gen_range(0..CONFETTI_CHARS.len())],
                    color: random_bright_color(),
                });
            }
        }

        for p in &mut self.particles {
            p.x += p.vx;
            p.y += p.vy;
        }
        self.particles.retain(|p| p.is_visible(width, height));
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }
}
