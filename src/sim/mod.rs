//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Tick-counted pacing only
//! - Injected randomness only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod commentary;
pub mod input;
pub mod rng;
pub mod state;
pub mod tick;

pub use collision::{Rect, in_window, lane_contact, rects_collide};
pub use commentary::Commentary;
pub use input::{InputLatch, Key};
pub use rng::{RngState, SpawnSource};
pub use state::{
    Coin, DepthPursuer, GameEvent, GamePhase, GameState, Hud, Hunter, Obstacle, Player, Pursuer,
    Slot,
};
pub use tick::{advance, tick};
