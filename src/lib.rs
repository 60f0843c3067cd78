//! Dino Run - a lane-runner chase game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (kinematics, pursuit, spawning, collisions)
//! - `session`: Owns a run and converts wall time into simulation ticks
//! - `platform`: Browser/native differences (key names, frame pacing)
//! - `audio`: Sound cues for simulation events
//! - `tuning`: Data-driven game balance
//! - `settings`: Player-facing configuration

pub mod audio;
pub mod platform;
pub mod session;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use session::Session;
pub use settings::Settings;
pub use tuning::{Tuning, Variant};

/// Game configuration constants
pub mod consts {
    /// Simulation rate the frame-locked balance numbers assume
    pub const TICK_RATE: u32 = 60;
    /// Seconds per simulation tick
    pub const TICK_DT: f32 = 1.0 / TICK_RATE as f32;
    /// Maximum ticks per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame delta accepted before clamping (tab switches etc.)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Arena dimensions (canvas pixels)
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;
}
