//! WebAssembly crossword game
//!
//! Browser build of the crossword with a canvas UI. The hosting page
//! forwards keyboard and mouse events, drives `tick` from
//! requestAnimationFrame for animations, drives `tick_second` from a
//! one-second interval for the game clock, and clears that interval when
//! it tears the game down.

use crossword_core::Difficulty;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlElement, KeyboardEvent, MouseEvent};

mod audio;
mod game;
mod render;
mod theme;

// WASM tests require wasm-pack test to run
#[cfg(all(test, target_arch = "wasm32"))]
mod tests;

pub use game::GameState;
pub use theme::Theme;

// Initialize panic hook for better error messages
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// The main WASM game controller
#[wasm_bindgen]
pub struct CrosswordGame {
    state: GameState,
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    theme: Theme,
    dark_theme: bool,
    width: u32,
    height: u32,
    dpr: f64, // Device pixel ratio for crisp rendering
}

#[wasm_bindgen]
impl CrosswordGame {
    /// Create a new game attached to a canvas element
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str) -> Result<CrosswordGame, JsValue> {
        let document = web_sys::window()
            .ok_or("No window")?
            .document()
            .ok_or("No document")?;

        let canvas = document
            .get_element_by_id(canvas_id)
            .ok_or("Canvas not found")?
            .dyn_into::<HtmlCanvasElement>()?;

        let ctx = canvas
            .get_context("2d")?
            .ok_or("Failed to get 2d context")?
            .dyn_into::<CanvasRenderingContext2d>()?;

        // Get device pixel ratio for crisp rendering on high-DPI displays
        let dpr = web_sys::window()
            .map(|w| w.device_pixel_ratio())
            .unwrap_or(1.0);

        let width = 1000;
        let height = 700;

        // Set actual canvas resolution (scaled by dpr)
        canvas.set_width((width as f64 * dpr) as u32);
        canvas.set_height((height as f64 * dpr) as u32);

        // Set CSS display size (logical pixels)
        let html_element: &HtmlElement = canvas.as_ref();
        let style = html_element.style();
        let _ = style.set_property("width", &format!("{}px", width));
        let _ = style.set_property("height", &format!("{}px", height));

        // Scale context to account for dpr
        let _ = ctx.scale(dpr, dpr);

        let game = CrosswordGame {
            state: GameState::new(),
            canvas,
            ctx,
            theme: Theme::dark(),
            dark_theme: true,
            width,
            height,
            dpr,
        };

        game.render();
        Ok(game)
    }

    /// Handle keyboard input
    #[wasm_bindgen]
    pub fn handle_key(&mut self, event: &KeyboardEvent) {
        self.state.handle_key(&event.key());
        self.after_input();
    }

    /// Handle a canvas click
    #[wasm_bindgen]
    pub fn handle_click(&mut self, event: &MouseEvent) {
        let layout = self
            .state
            .session()
            .map(|session| render::Layout::compute(self.width, self.height, session));
        if let Some(layout) = layout {
            self.state
                .handle_click(event.offset_x() as f64, event.offset_y() as f64, &layout);
        }
        self.after_input();
    }

    /// Animation update (call from requestAnimationFrame)
    #[wasm_bindgen]
    pub fn tick(&mut self) {
        self.state.tick();
        self.render();
    }

    /// Game clock tick (call from a one-second interval)
    #[wasm_bindgen]
    pub fn tick_second(&mut self) {
        self.state.tick_second();
        self.render();
    }

    /// Start a new game with specified difficulty
    #[wasm_bindgen]
    pub fn new_game(&mut self, difficulty: &str) {
        if let Some(difficulty) = Difficulty::from_name(difficulty) {
            self.state.set_difficulty(difficulty);
        }
        self.state.start_game();
        self.render();
    }

    /// End the current session and return to the home screen
    #[wasm_bindgen]
    pub fn end_session(&mut self) {
        self.state.leave_game();
        self.render();
    }

    /// Set the color theme
    #[wasm_bindgen]
    pub fn set_theme(&mut self, theme_name: &str) {
        self.dark_theme = theme_name != "light";
        self.theme = if self.dark_theme {
            Theme::dark()
        } else {
            Theme::light()
        };
        self.render();
    }

    /// Enable or disable the completion chime
    #[wasm_bindgen]
    pub fn set_sound(&mut self, enabled: bool) {
        self.state.set_sound(enabled);
    }

    /// Get current game state as JSON
    #[wasm_bindgen]
    pub fn state_json(&self) -> String {
        serde_json::to_string(&self.state.snapshot()).unwrap_or_default()
    }

    /// Check if the puzzle is complete
    #[wasm_bindgen]
    pub fn is_complete(&self) -> bool {
        self.state.is_complete()
    }

    /// Get formatted elapsed time
    #[wasm_bindgen]
    pub fn elapsed_string(&self) -> String {
        self.state.elapsed_string()
    }

    /// Get current difficulty
    #[wasm_bindgen]
    pub fn difficulty(&self) -> String {
        self.state.difficulty().to_string()
    }

    /// Resize the game canvas
    #[wasm_bindgen]
    pub fn resize(&mut self, width: u32, height: u32) {
        let width = width.max(640);
        let height = height.max(480);

        self.width = width;
        self.height = height;

        // Update dpr in case it changed (e.g., moving to different monitor)
        self.dpr = web_sys::window()
            .map(|w| w.device_pixel_ratio())
            .unwrap_or(1.0);

        self.canvas.set_width((width as f64 * self.dpr) as u32);
        self.canvas.set_height((height as f64 * self.dpr) as u32);

        let html_element: &HtmlElement = self.canvas.as_ref();
        let style = html_element.style();
        let _ = style.set_property("width", &format!("{}px", width));
        let _ = style.set_property("height", &format!("{}px", height));

        let _ = self.ctx.reset_transform();
        let _ = self.ctx.scale(self.dpr, self.dpr);

        self.render();
    }

    fn after_input(&mut self) {
        if self.state.take_theme_toggle() {
            let name = if self.dark_theme { "light" } else { "dark" };
            self.set_theme(name);
            return;
        }
        if self.state.take_chime() {
            audio::play_success_chime();
        }
        self.render();
    }

    /// Render the game to canvas
    fn render(&self) {
        render::render_game(&self.ctx, &self.state, &self.theme, self.width, self.height);
    }
}
