//! Completion chime via Web Audio
//!
//! Unsupported or blocked audio must never affect game state, so every
//! failure is swallowed.

use wasm_bindgen::JsValue;
use web_sys::{AudioContext, OscillatorType};

/// Rising three-note melody played when the puzzle is solved
pub fn play_success_chime() {
    let _ = try_play();
}

fn try_play() -> Result<(), JsValue> {
    let ctx = AudioContext::new()?;
    let oscillator = ctx.create_oscillator()?;
    let gain = ctx.create_gain()?;

    oscillator.connect_with_audio_node(&gain)?;
    gain.connect_with_audio_node(&ctx.destination())?;

    oscillator.set_type(OscillatorType::Sine);
    gain.gain().set_value(0.1);

    let now = ctx.current_time();
    oscillator.frequency().set_value_at_time(600.0, now)?;
    oscillator.frequency().set_value_at_time(800.0, now + 0.15)?;
    oscillator.frequency().set_value_at_time(1000.0, now + 0.3)?;

    oscillator.start()?;
    oscillator.stop_with_when(now + 0.5)?;
    Ok(())
}
