//! Sideline companion that shouts encouragement during a run
//!
//! Purely presentational state, but it is timed in ticks and picks lines with
//! the run's random source, so it lives with the simulation.

use serde::{Deserialize, Serialize};

use super::rng::SpawnSource;

/// Lines the companion can say
pub const LINES: &[&str] = &[
    "RUN! They're right behind you!",
    "Faster, faster!",
    "Jump those logs!",
    "Whoa, big jump!",
    "Don't look back!",
    "Nice moves!",
    "Grab those coins!",
    "Phew, that was close!",
    "Keep going!",
    "The dinosaurs are hungry!",
    "You've got this!",
    "Up and over!",
    "Here we go!",
    "Watch your step!",
    "Almost there!",
    "Off you go!",
];

/// Ticks a line stays on screen
pub const DISPLAY_TICKS: u32 = 120;
/// Ticks between the start of a run and the opening line
pub const OPENING_DELAY_TICKS: u32 = 12;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commentary {
    /// Companion drawn at all (true while a run is on screen)
    pub visible: bool,
    /// Index into [`LINES`] of the line being shown
    pub message: Option<usize>,
    /// Ticks until the current line disappears
    pub ticks_left: u32,
    /// Ticks until a scheduled line is requested (0 = nothing scheduled)
    pending: u32,
    /// Lines are suppressed entirely when false
    enabled: bool,
}

impl Commentary {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            ..Self::default()
        }
    }

    /// Show the companion and schedule the opening line
    pub fn begin_run(&mut self) {
        *self = Self::new(self.enabled);
        self.visible = true;
        self.pending = OPENING_DELAY_TICKS;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_showing(&self) -> bool {
        self.message.is_some()
    }

    pub fn text(&self) -> Option<&'static str> {
        self.message.and_then(|i| LINES.get(i).copied())
    }

    /// Start a new line unless one is already up. Returns the line index.
    pub fn request(&mut self, rng: &mut impl SpawnSource) -> Option<usize> {
        if !self.enabled || self.is_showing() {
            return None;
        }
        let index = rng.index(LINES.len());
        self.message = Some(index);
        self.ticks_left = DISPLAY_TICKS;
        self.visible = true;
        Some(index)
    }

    /// Count down the current line and fire a scheduled one
    pub fn tick(&mut self, rng: &mut impl SpawnSource) -> Option<usize> {
        if self.ticks_left > 0 {
            self.ticks_left -= 1;
            if self.ticks_left == 0 {
                self.message = None;
            }
        }
        if self.pending > 0 {
            self.pending -= 1;
            if self.pending == 0 {
                return self.request(rng);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::rng::Scripted;

    #[test]
    fn test_opening_line_after_delay() {
        let mut c = Commentary::new(true);
        let mut rng = Scripted::new(&[0.0]);
        c.begin_run();
        assert!(c.visible);
        for _ in 0..OPENING_DELAY_TICKS - 1 {
            assert_eq!(c.tick(&mut rng), None);
        }
        assert_eq!(c.tick(&mut rng), Some(0));
        assert_eq!(c.text(), Some(LINES[0]));
    }

    #[test]
    fn test_line_expires() {
        let mut c = Commentary::new(true);
        let mut rng = Scripted::new(&[0.5]);
        assert!(c.request(&mut rng).is_some());
        for _ in 0..DISPLAY_TICKS {
            assert!(c.is_showing());
            c.tick(&mut rng);
        }
        assert!(!c.is_showing());
    }

    #[test]
    fn test_no_interrupt_while_showing() {
        let mut c = Commentary::new(true);
        let mut rng = Scripted::new(&[0.0, 0.99]);
        assert_eq!(c.request(&mut rng), Some(0));
        assert_eq!(c.request(&mut rng), None);
        assert_eq!(c.message, Some(0));
    }

    #[test]
    fn test_disabled_stays_quiet() {
        let mut c = Commentary::new(false);
        let mut rng = Scripted::new(&[0.0]);
        c.begin_run();
        assert!(!c.is_enabled());
        for _ in 0..OPENING_DELAY_TICKS * 2 {
            assert_eq!(c.tick(&mut rng), None);
        }
        assert_eq!(c.request(&mut rng), None);
    }
}
