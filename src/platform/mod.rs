//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Input events (DOM key names to game keys)
//! - Time/ticks (wall-clock frame deltas to fixed simulation ticks)

use crate::consts::*;
use crate::sim::Key;

/// Map a DOM `KeyboardEvent.key` (or `.code`) value to a game key.
/// Anything unrecognized is ignored.
pub fn key_from_dom(name: &str) -> Option<Key> {
    match name {
        "ArrowUp" | "Up" => Some(Key::Up),
        "ArrowDown" | "Down" => Some(Key::Down),
        "ArrowLeft" | "Left" => Some(Key::Left),
        "ArrowRight" | "Right" => Some(Key::Right),
        " " | "Space" | "Spacebar" | "Enter" => Some(Key::Action),
        "Escape" | "Esc" => Some(Key::Menu),
        _ => None,
    }
}

/// Turns variable frame deltas into whole simulation ticks
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    accumulator: f32,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one frame's delta (seconds) and get the number of ticks to run
    pub fn ticks_for(&mut self, dt: f32) -> u32 {
        let dt = if dt.is_finite() { dt.clamp(0.0, MAX_FRAME_DT) } else { 0.0 };
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= TICK_DT && substeps < MAX_SUBSTEPS {
            self.accumulator -= TICK_DT;
            substeps += 1;
        }
        substeps
    }

    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}
