//! A running game as a host loop sees it
//!
//! Owns the state, the input latch and the seeded random source, and turns
//! wall-clock frames into simulation ticks.

use rand_pcg::Pcg32;
use serde::Serialize;

use crate::platform::{FrameClock, key_from_dom};
use crate::settings::Settings;
use crate::sim::{self, GameEvent, GameState, Hud, InputLatch, RngState};

/// What the presentation layer receives each frame
#[derive(Serialize)]
struct Snapshot<'a> {
    state: &'a GameState,
    hud: Hud,
    commentary: Option<&'static str>,
}

pub struct Session {
    state: GameState,
    input: InputLatch,
    rng: Pcg32,
    clock: FrameClock,
}

impl Session {
    pub fn new(settings: &Settings, seed: u64) -> Self {
        Self {
            state: settings.new_state(seed),
            input: InputLatch::new(),
            rng: RngState::new(seed).to_rng(),
            clock: FrameClock::new(),
        }
    }

    /// Press a key by its DOM name; returns whether the game uses it
    pub fn key_down(&mut self, name: &str) -> bool {
        match key_from_dom(name) {
            Some(key) => {
                self.input.key_down(key);
                true
            }
            None => false,
        }
    }

    pub fn key_up(&mut self, name: &str) -> bool {
        match key_from_dom(name) {
            Some(key) => {
                self.input.key_up(key);
                true
            }
            None => false,
        }
    }

    /// Release every key (window lost focus)
    pub fn release_all(&mut self) {
        self.input.clear();
    }

    /// Feed one rendered frame's delta in seconds; returns ticks run
    pub fn frame(&mut self, dt: f32) -> u32 {
        let ticks = self.clock.ticks_for(dt);
        self.advance(ticks);
        ticks
    }

    pub fn advance(&mut self, ticks: u32) {
        sim::advance(&mut self.state, &mut self.input, &mut self.rng, ticks);
    }

    /// Same as pressing Action on the welcome screen
    pub fn start(&mut self) {
        self.state.start();
        self.input.clear();
    }

    /// Same as pressing Escape. The random source carries on, so a
    /// restart deals a fresh sequence of spawns.
    pub fn reset_to_menu(&mut self) {
        self.state.reset_to_menu();
        self.input.clear();
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.state.drain_events()
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn hud(&self) -> Hud {
        self.state.hud()
    }

    /// JSON for the page's draw hook
    pub fn snapshot_json(&self) -> Option<String> {
        let snapshot = Snapshot {
            state: &self.state,
            hud: self.state.hud(),
            commentary: self.state.commentary.text(),
        };
        match serde_json::to_string(&snapshot) {
            Ok(json) => Some(json),
            Err(e) => {
                log::warn!("Failed to serialize snapshot: {}", e);
                None
            }
        }
    }
}
