//! Keyboard input latch
//!
//! Key handlers write held state here between frames; the tick reads it.
//! One-shot actions (lane change, jump, start) are consumed with [`InputLatch::take`]
//! so a held key fires once, while continuous movement polls [`InputLatch::is_held`].

use serde::{Deserialize, Serialize};

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    /// Space/Enter: start, restart, jump
    Action,
    /// Escape: back to the welcome screen
    Menu,
}

impl Key {
    fn index(self) -> usize {
        match self {
            Key::Up => 0,
            Key::Down => 1,
            Key::Left => 2,
            Key::Right => 3,
            Key::Action => 4,
            Key::Menu => 5,
        }
    }
}

/// Held/latched state of every recognized key
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputLatch {
    held: [bool; 6],
}

impl InputLatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, key: Key) {
        self.held[key.index()] = true;
    }

    pub fn key_up(&mut self, key: Key) {
        self.held[key.index()] = false;
    }

    /// Level-triggered read
    pub fn is_held(&self, key: Key) -> bool {
        self.held[key.index()]
    }

    /// Edge-triggered read: returns the latched value and clears it
    pub fn take(&mut self, key: Key) -> bool {
        std::mem::take(&mut self.held[key.index()])
    }

    /// Consume whichever of `keys` is latched; true if any was
    pub fn take_any(&mut self, keys: &[Key]) -> bool {
        keys.iter().fold(false, |any, &k| self.take(k) || any)
    }

    pub fn clear(&mut self) {
        self.held = [false; 6];
    }
}
