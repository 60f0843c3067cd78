//! Data-driven game balance
//!
//! Every number the simulation reads lives here so both variants run through
//! one core. Defaults are the classic browser game's numbers.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Which flavour of the game a run uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Variant {
    /// Three-lane perspective runner chased by depth-tracked dinosaurs
    #[default]
    Chaser,
    /// Top-down dodger with falling obstacles and a bouncing hunter
    Dodge,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Chaser => "Chaser",
            Variant::Dodge => "Dodge",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "chaser" | "lanes" => Some(Variant::Chaser),
            "dodge" | "free" => Some(Variant::Dodge),
            _ => None,
        }
    }
}

/// Starting placement of one depth-tracked pursuer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PursuerStart {
    /// Lateral screen position
    pub x: f32,
    /// Remaining distance to the player
    pub z: f32,
    pub base_speed: f32,
    pub size: Vec2,
}

/// Lane runner balance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChaserTuning {
    /// Ticks per metre of displayed distance
    pub score_divisor: u64,
    pub base_speed: f32,
    /// Ticks for scroll speed to gain one unit
    pub speed_ramp: f32,

    pub lane_count: usize,
    pub start_lane: usize,
    pub player_size: Vec2,
    pub ground_y: f32,
    pub jump_power: f32,
    pub gravity: f32,
    /// Player must be below this line (larger y) to trip
    pub trip_height: f32,
    pub stun_ticks: u32,
    /// Gravity multiplier while tumbling
    pub tumble_gravity: f32,
    /// Upward velocity given on recovering from a stun
    pub recovery_kick: f32,

    pub pursuers: Vec<PursuerStart>,
    /// Ticks for a pursuer's speed factor to gain one unit
    pub pursuer_ramp: f32,
    pub boost_running: f32,
    pub boost_stunned: f32,
    /// Ticks for the global pursuit multiplier to gain 1.0
    pub pursuit_ramp: f32,
    pub catch_distance: f32,
    pub lateral_cap: f32,
    pub lateral_factor: f32,
    pub lateral_target_offset: f32,

    pub path_amplitude: f32,
    pub path_rate: f32,

    pub spawn_start: u64,
    pub spawn_floor: u64,
    pub spawn_decay: u64,
    /// Fraction of spawns that are obstacles rather than coins
    pub obstacle_chance: f32,
    pub spawn_depth: f32,
    pub removal_depth: f32,
    /// Open depth interval where an obstacle trips the player
    pub trip_window: (f32, f32),
    /// Open depth interval where a coin is collected
    pub coin_window: (f32, f32),
}

impl Default for ChaserTuning {
    fn default() -> Self {
        Self {
            score_divisor: 20,
            base_speed: 5.0,
            speed_ramp: 400.0,

            lane_count: 3,
            start_lane: 1,
            player_size: Vec2::new(40.0, 60.0),
            ground_y: 320.0,
            jump_power: 14.0,
            gravity: 0.6,
            trip_height: 300.0,
            stun_ticks: 90,
            tumble_gravity: 0.5,
            recovery_kick: 6.0,

            pursuers: vec![
                PursuerStart {
                    x: 50.0,
                    z: 420.0,
                    base_speed: 2.8,
                    size: Vec2::new(60.0, 60.0),
                },
                PursuerStart {
                    x: 250.0,
                    z: 520.0,
                    base_speed: 2.6,
                    size: Vec2::new(70.0, 65.0),
                },
            ],
            pursuer_ramp: 800.0,
            boost_running: 0.6,
            boost_stunned: 2.4,
            pursuit_ramp: 20_000.0,
            catch_distance: 40.0,
            lateral_cap: 2.5,
            lateral_factor: 0.5,
            lateral_target_offset: 80.0,

            path_amplitude: 30.0,
            path_rate: 0.005,

            spawn_start: 80,
            spawn_floor: 30,
            spawn_decay: 60,
            obstacle_chance: 0.7,
            spawn_depth: 500.0,
            removal_depth: -50.0,
            trip_window: (-30.0, 30.0),
            coin_window: (360.0, 400.0),
        }
    }
}

/// Top-down dodger balance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DodgeTuning {
    pub score_divisor: u64,
    pub base_speed: f32,
    pub speed_ramp: f32,

    pub player_size: Vec2,
    pub start_x: f32,
    /// Resting y of the player's top edge
    pub ground_y: f32,
    pub move_speed: f32,

    pub obstacle_size: Vec2,
    pub coin_size: Vec2,

    pub hunter_pos: Vec2,
    pub hunter_size: Vec2,
    pub hunter_speed: f32,
    pub hunter_ramp: f32,

    pub spawn_start: u64,
    pub spawn_floor: u64,
    pub spawn_decay: u64,
    pub obstacle_chance: f32,
}

impl Default for DodgeTuning {
    fn default() -> Self {
        Self {
            score_divisor: 10,
            base_speed: 3.0,
            speed_ramp: 400.0,

            player_size: Vec2::new(40.0, 60.0),
            start_x: 380.0,
            ground_y: 520.0,
            move_speed: 6.0,

            obstacle_size: Vec2::new(40.0, 40.0),
            coin_size: Vec2::new(20.0, 20.0),

            hunter_pos: Vec2::new(100.0, 100.0),
            hunter_size: Vec2::new(50.0, 50.0),
            hunter_speed: 2.0,
            hunter_ramp: 800.0,

            spawn_start: 60,
            spawn_floor: 20,
            spawn_decay: 100,
            obstacle_chance: 0.7,
        }
    }
}

/// Balance for both variants
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub chaser: ChaserTuning,
    pub dodge: DodgeTuning,
}

impl Tuning {
    /// Displayed distance after `ticks` of play
    pub fn score(&self, variant: Variant, ticks: u64) -> u64 {
        let divisor = match variant {
            Variant::Chaser => self.chaser.score_divisor,
            Variant::Dodge => self.dodge.score_divisor,
        };
        ticks / divisor.max(1)
    }

    /// Global scroll speed after `ticks` of play
    pub fn scroll_speed(&self, variant: Variant, ticks: u64) -> f32 {
        let (base, ramp) = match variant {
            Variant::Chaser => (self.chaser.base_speed, self.chaser.speed_ramp),
            Variant::Dodge => (self.dodge.base_speed, self.dodge.speed_ramp),
        };
        base + ticks as f32 / ramp
    }

    /// Ticks between spawns after `ticks` of play
    pub fn spawn_interval(&self, variant: Variant, ticks: u64) -> u64 {
        let (start, floor, decay) = match variant {
            Variant::Chaser => (
                self.chaser.spawn_start,
                self.chaser.spawn_floor,
                self.chaser.spawn_decay,
            ),
            Variant::Dodge => (
                self.dodge.spawn_start,
                self.dodge.spawn_floor,
                self.dodge.spawn_decay,
            ),
        };
        start.saturating_sub(ticks / decay.max(1)).max(floor)
    }

    /// Chance that a spawn is an obstacle rather than a coin
    pub fn obstacle_chance(&self, variant: Variant) -> f32 {
        match variant {
            Variant::Chaser => self.chaser.obstacle_chance,
            Variant::Dodge => self.dodge.obstacle_chance,
        }
    }
}
