//! Game settings and preferences
//!
//! Supplied by the host as JSON; every field is optional.

use serde::{Deserialize, Serialize};

use crate::sim::GameState;
use crate::tuning::{Tuning, Variant};

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Which game to play
    pub variant: Variant,
    /// Fixed run seed; a fresh one is drawn from the clock when absent
    pub seed: Option<u64>,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    pub muted: bool,
    /// Mute when window loses focus
    pub mute_on_blur: bool,

    // === Companion ===
    /// Show the sideline companion's lines
    pub commentary: bool,

    /// Balance numbers
    pub tuning: Tuning,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            variant: Variant::Chaser,
            seed: None,

            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
            mute_on_blur: true,

            commentary: true,

            tuning: Tuning::default(),
        }
    }
}

impl Settings {
    /// Parse settings JSON; volumes are clamped into range
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut settings: Settings = serde_json::from_str(json)?;
        settings.master_volume = settings.master_volume.clamp(0.0, 1.0);
        settings.sfx_volume = settings.sfx_volume.clamp(0.0, 1.0);
        Ok(settings)
    }

    /// Parse settings JSON, falling back to defaults on error
    pub fn from_json_or_default(json: &str) -> Self {
        match Self::from_json(json) {
            Ok(settings) => {
                log::info!("Loaded settings ({})", settings.variant.as_str());
                settings
            }
            Err(e) => {
                log::warn!("Ignoring malformed settings: {}", e);
                Self::default()
            }
        }
    }

    /// Seed to use: the configured one, else `fallback`
    pub fn seed_or(&self, fallback: u64) -> u64 {
        self.seed.unwrap_or(fallback)
    }

    /// Fresh welcome-screen state for these settings
    pub fn new_state(&self, seed: u64) -> GameState {
        GameState::new(seed, self.variant, self.tuning.clone()).with_commentary(self.commentary)
    }
}
