//! Audio system using Web Audio API
//!
//! Procedurally generated sound effects - no external files needed!
//! Native builds keep the same API but stay silent.

use crate::settings::Settings;
use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Run started
    Start,
    /// Player left the ground
    Jump,
    /// Coin picked up
    Coin,
    /// Player tripped over a limb
    Trip,
    /// Companion started talking
    Commentary,
    /// Run ended
    GameOver,
}

/// A single oscillator sweep
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    pub start_hz: f32,
    pub end_hz: f32,
    pub duration_ms: u32,
    /// Peak gain before volume scaling
    pub gain: f32,
}

impl SoundEffect {
    /// Sound for a simulation event, if it has one
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::Started => Some(Self::Start),
            GameEvent::Jumped => Some(Self::Jump),
            GameEvent::CoinCollected => Some(Self::Coin),
            GameEvent::Tripped => Some(Self::Trip),
            GameEvent::Commentary(_) => Some(Self::Commentary),
            GameEvent::Caught | GameEvent::Crashed => Some(Self::GameOver),
            GameEvent::Recovered | GameEvent::ObstacleDodged => None,
        }
    }

    pub fn tone(self) -> Tone {
        let (start_hz, end_hz, duration_ms, gain) = match self {
            Self::Start => (800.0, 800.0, 80, 0.2),
            Self::Jump => (400.0, 800.0, 100, 0.3),
            Self::Coin => (800.0, 1200.0, 150, 0.3),
            Self::Trip => (220.0, 330.0, 400, 0.3),
            Self::Commentary => (600.0, 900.0, 150, 0.2),
            Self::GameOver => (440.0, 110.0, 600, 0.35),
        };
        Tone {
            start_hz,
            end_hz,
            duration_ms,
            gain,
        }
    }
}

/// Audio manager for the game
pub struct AudioManager {
    #[cfg(target_arch = "wasm32")]
    ctx: Option<web_sys::AudioContext>,
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioManager {
    pub fn new() -> Self {
        // Try to create audio context (may fail if not in secure context)
        #[cfg(target_arch = "wasm32")]
        let ctx = {
            let ctx = web_sys::AudioContext::new().ok();
            if ctx.is_none() {
                log::warn!("Failed to create AudioContext - audio disabled");
            }
            ctx
        };
        Self {
            #[cfg(target_arch = "wasm32")]
            ctx,
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }

    /// Manager with volumes taken from settings
    pub fn from_settings(settings: &Settings) -> Self {
        let mut audio = Self::new();
        audio.set_master_volume(settings.master_volume);
        audio.set_sfx_volume(settings.sfx_volume);
        audio.set_muted(settings.muted);
        audio
    }

    /// Resume audio context (required after user gesture)
    pub fn resume(&self) {
        #[cfg(target_arch = "wasm32")]
        if let Some(ctx) = &self.ctx {
            let _ = ctx.resume();
        }
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Get effective volume
    pub fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Play the sound for each event that has one
    pub fn play_events(&self, events: &[GameEvent]) {
        for effect in events.iter().filter_map(SoundEffect::for_event) {
            self.play(effect);
        }
    }

    /// Play a sound effect
    pub fn play(&self, effect: SoundEffect) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }

        #[cfg(target_arch = "wasm32")]
        {
            let Some(ctx) = &self.ctx else { return };

            // Resume context if suspended (browsers require user gesture)
            if ctx.state() == web_sys::AudioContextState::Suspended {
                let _ = ctx.resume();
            }

            let osc_type = match effect {
                SoundEffect::Trip | SoundEffect::GameOver => web_sys::OscillatorType::Square,
                _ => web_sys::OscillatorType::Sine,
            };
            if play_tone(ctx, effect.tone(), osc_type, vol).is_none() {
                log::debug!("Could not play {:?}", effect);
            }
        }

        #[cfg(not(target_arch = "wasm32"))]
        log::trace!("(silent) {:?} at volume {:.2}", effect, vol);
    }
}

/// Oscillator sweep with an exponential gain decay
#[cfg(target_arch = "wasm32")]
fn play_tone(
    ctx: &web_sys::AudioContext,
    tone: Tone,
    osc_type: web_sys::OscillatorType,
    vol: f32,
) -> Option<()> {
    let osc = ctx.create_oscillator().ok()?;
    let gain = ctx.create_gain().ok()?;

    osc.set_type(osc_type);
    osc.connect_with_audio_node(&gain).ok()?;
    gain.connect_with_audio_node(&ctx.destination()).ok()?;

    let t = ctx.current_time();
    let end = t + f64::from(tone.duration_ms) / 1000.0;

    osc.frequency().set_value_at_time(tone.start_hz, t).ok()?;
    if tone.end_hz != tone.start_hz {
        osc.frequency()
            .exponential_ramp_to_value_at_time(tone.end_hz, end)
            .ok()?;
    }
    gain.gain().set_value_at_time(vol * tone.gain, t).ok()?;
    gain.gain()
        .exponential_ramp_to_value_at_time(0.01, end)
        .ok()?;

    osc.start().ok()?;
    osc.stop_with_when(end + 0.02).ok()?;
    Some(())
}
