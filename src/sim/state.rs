//! Game state and core simulation types
//!
//! Everything the presentation layer reads lives here. The state is plain
//! data: it is owned by the caller and threaded through [`super::tick`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::commentary::Commentary;
use crate::consts::*;
use crate::tuning::{ChaserTuning, DodgeTuning, PursuerStart, Tuning, Variant};

/// Coarse lifecycle of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, waiting for the action key
    Welcome,
    /// Active gameplay
    Playing,
    /// Run ended, waiting for restart or menu
    GameOver,
}

/// Something the presentation or audio layer may want to react to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Started,
    Jumped,
    Tripped,
    Recovered,
    CoinCollected,
    ObstacleDodged,
    /// A pursuer reached the player
    Caught,
    /// The player ran into an obstacle
    Crashed,
    /// The companion started a line (index into the line table)
    Commentary(usize),
}

/// Lateral placement of an entity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Slot {
    /// Discrete lane index
    Lane(usize),
    /// Free x coordinate of the left edge
    Column(f32),
}

impl Slot {
    pub fn lane(&self) -> Option<usize> {
        match *self {
            Slot::Lane(lane) => Some(lane),
            Slot::Column(_) => None,
        }
    }

    pub fn column(&self) -> Option<f32> {
        match *self {
            Slot::Lane(_) => None,
            Slot::Column(x) => Some(x),
        }
    }
}

/// A tree limb (runner) or falling block (dodger)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    pub slot: Slot,
    /// Position along the scroll axis: depth z for lanes, top edge y for columns
    pub depth: f32,
}

impl Obstacle {
    /// Screen rectangle for column-placed obstacles
    pub fn rect(&self, size: Vec2) -> Option<Rect> {
        self.slot
            .column()
            .map(|x| Rect::from_pos_size(Vec2::new(x, self.depth), size))
    }
}

/// A collectible coin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coin {
    pub id: u32,
    pub slot: Slot,
    pub depth: f32,
    pub collected: bool,
}

impl Coin {
    pub fn rect(&self, size: Vec2) -> Option<Rect> {
        self.slot
            .column()
            .map(|x| Rect::from_pos_size(Vec2::new(x, self.depth), size))
    }
}

/// The runner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Current lane (lane runner only)
    pub lane: usize,
    /// Left edge (dodger only)
    pub x: f32,
    /// Top edge; larger is lower, never below the ground line
    pub y: f32,
    pub size: Vec2,
    pub vel_y: f32,
    pub airborne: bool,
    pub stunned: bool,
    pub stun_timer: u32,
}

impl Player {
    pub fn runner(c: &ChaserTuning) -> Self {
        Self {
            lane: c.start_lane.min(c.lane_count.saturating_sub(1)),
            x: 0.0,
            y: c.ground_y,
            size: c.player_size,
            vel_y: 0.0,
            airborne: false,
            stunned: false,
            stun_timer: 0,
        }
    }

    pub fn dodger(d: &DodgeTuning) -> Self {
        Self {
            lane: 0,
            x: d.start_x.clamp(0.0, (ARENA_WIDTH - d.player_size.x).max(0.0)),
            y: d.ground_y,
            size: d.player_size,
            vel_y: 0.0,
            airborne: false,
            stunned: false,
            stun_timer: 0,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(Vec2::new(self.x, self.y), self.size)
    }

    /// Move one lane left (`-1`) or right (`+1`), staying on the path
    pub fn step_lane(&mut self, delta: isize, lane_count: usize) {
        let max = lane_count.saturating_sub(1);
        self.lane = self.lane.saturating_add_signed(delta).min(max);
    }

    /// Slide horizontally, clamped to `[0, max_x]`
    pub fn slide(&mut self, dx: f32, max_x: f32) {
        self.x = (self.x + dx).clamp(0.0, max_x.max(0.0));
    }

    /// Launch upward; ignored while airborne
    pub fn jump(&mut self, power: f32) -> bool {
        if self.airborne {
            return false;
        }
        self.vel_y = -power;
        self.airborne = true;
        true
    }

    /// Integrate gravity and land on the ground line. Returns true on touchdown.
    pub fn fall(&mut self, gravity: f32, ground: f32) -> bool {
        self.vel_y += gravity;
        self.y += self.vel_y;
        if self.y >= ground {
            let landed = self.airborne;
            self.y = ground;
            self.vel_y = 0.0;
            self.airborne = false;
            return landed;
        }
        false
    }

    pub fn stun(&mut self, ticks: u32) {
        self.stunned = true;
        self.stun_timer = ticks;
    }

    /// One tick of the trip tumble. Returns true when control comes back.
    pub fn tumble(&mut self, gravity: f32, ground: f32, kick: f32) -> bool {
        self.stun_timer = self.stun_timer.saturating_sub(1);
        self.vel_y += gravity;
        self.y += self.vel_y;
        if self.y > ground {
            self.y = ground;
            self.vel_y = 0.0;
            self.airborne = false;
        }
        if self.stun_timer == 0 {
            self.stunned = false;
            self.vel_y = -kick;
            self.airborne = true;
            return true;
        }
        false
    }
}

/// A dinosaur closing in from behind the camera
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepthPursuer {
    /// Lateral screen position
    pub x: f32,
    /// Remaining distance to the player
    pub z: f32,
    pub base_speed: f32,
    pub size: Vec2,
}

impl From<&PursuerStart> for DepthPursuer {
    fn from(start: &PursuerStart) -> Self {
        Self {
            x: start.x,
            z: start.z,
            base_speed: start.base_speed,
            size: start.size,
        }
    }
}

impl DepthPursuer {
    /// Speed factor before boosts; grows with elapsed ticks
    pub fn speed_factor(&self, ticks: f32, c: &ChaserTuning) -> f32 {
        self.base_speed + ticks / c.pursuer_ramp
    }

    /// Close the gap and drift toward `target_x`
    pub fn advance(&mut self, ticks: f32, player_stunned: bool, target_x: f32, c: &ChaserTuning) {
        let factor = self.speed_factor(ticks, c);
        let boost = if player_stunned {
            c.boost_stunned
        } else {
            c.boost_running
        };
        self.z -= (factor + boost) * (1.0 + ticks / c.pursuit_ramp);

        let step = (factor * c.lateral_factor).min(c.lateral_cap);
        self.x += (target_x - self.x).clamp(-step, step);
    }
}

/// On-screen hunter bouncing around the arena
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hunter {
    pub rect: Rect,
    /// Unit travel direction
    pub dir: Vec2,
}

impl Hunter {
    pub fn new(d: &DodgeTuning) -> Self {
        Self {
            rect: Rect::from_pos_size(d.hunter_pos, d.hunter_size),
            dir: Vec2::ONE.normalize(),
        }
    }

    /// Move by `speed` and reflect off the arena walls
    pub fn advance(&mut self, speed: f32, bounds: Vec2) {
        self.rect.pos += self.dir * speed;
        let max = (bounds - self.rect.size).max(Vec2::ZERO);
        if self.rect.pos.x < 0.0 {
            self.rect.pos.x = 0.0;
            self.dir.x = self.dir.x.abs();
        } else if self.rect.pos.x > max.x {
            self.rect.pos.x = max.x;
            self.dir.x = -self.dir.x.abs();
        }
        if self.rect.pos.y < 0.0 {
            self.rect.pos.y = 0.0;
            self.dir.y = self.dir.y.abs();
        } else if self.rect.pos.y > max.y {
            self.rect.pos.y = max.y;
            self.dir.y = -self.dir.y.abs();
        }
    }
}

/// Whatever is chasing the player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Pursuer {
    Depth(DepthPursuer),
    Hunter(Hunter),
}

/// Numbers a HUD shows; formatting is left to the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hud {
    pub phase: GamePhase,
    /// Distance run (metres)
    pub distance: u64,
    pub coins: u32,
    pub dodged: u32,
    pub speed: f32,
    /// Gap to the closest pursuer
    pub nearest_pursuer: u32,
    /// Whole seconds survived
    pub seconds: u64,
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub variant: Variant,
    pub tuning: Tuning,
    pub phase: GamePhase,
    /// Simulation tick counter for the current run
    pub time_ticks: u64,
    /// Displayed distance, derived from `time_ticks`
    pub score: u64,
    /// Current scroll speed
    pub speed: f32,
    /// Accumulated scroll, for background parallax
    pub scroll_offset: f32,
    /// Lateral path curve (lane runner, cosmetic)
    pub path_offset: f32,
    pub coins_collected: u32,
    pub obstacles_dodged: u32,
    pub player: Player,
    pub pursuers: Vec<Pursuer>,
    /// Active obstacles (spawn order)
    pub obstacles: Vec<Obstacle>,
    /// Active coins (spawn order)
    pub coins: Vec<Coin>,
    pub commentary: Commentary,
    /// Ticks since the last spawn
    pub since_spawn: u64,
    /// Events raised since the last drain
    pub events: Vec<GameEvent>,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Fresh state on the welcome screen
    pub fn new(seed: u64, variant: Variant, tuning: Tuning) -> Self {
        let player = Self::initial_player(variant, &tuning);
        let pursuers = Self::initial_pursuers(variant, &tuning);
        Self {
            seed,
            variant,
            tuning,
            phase: GamePhase::Welcome,
            time_ticks: 0,
            score: 0,
            speed: 0.0,
            scroll_offset: 0.0,
            path_offset: 0.0,
            coins_collected: 0,
            obstacles_dodged: 0,
            player,
            pursuers,
            obstacles: Vec::new(),
            coins: Vec::new(),
            commentary: Commentary::new(true),
            since_spawn: 0,
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Disable or enable the companion's lines
    pub fn with_commentary(mut self, enabled: bool) -> Self {
        self.commentary = Commentary::new(enabled);
        self
    }

    fn initial_player(variant: Variant, tuning: &Tuning) -> Player {
        match variant {
            Variant::Chaser => Player::runner(&tuning.chaser),
            Variant::Dodge => Player::dodger(&tuning.dodge),
        }
    }

    fn initial_pursuers(variant: Variant, tuning: &Tuning) -> Vec<Pursuer> {
        match variant {
            Variant::Chaser => tuning
                .chaser
                .pursuers
                .iter()
                .map(|p| Pursuer::Depth(p.into()))
                .collect(),
            Variant::Dodge => vec![Pursuer::Hunter(Hunter::new(&tuning.dodge))],
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Reinitialize everything a run touches and enter `phase`
    fn reset(&mut self, phase: GamePhase) {
        self.phase = phase;
        self.time_ticks = 0;
        self.score = 0;
        self.speed = match phase {
            GamePhase::Playing => self.tuning.scroll_speed(self.variant, 0),
            _ => 0.0,
        };
        self.scroll_offset = 0.0;
        self.path_offset = 0.0;
        self.coins_collected = 0;
        self.obstacles_dodged = 0;
        self.player = Self::initial_player(self.variant, &self.tuning);
        self.pursuers = Self::initial_pursuers(self.variant, &self.tuning);
        self.obstacles.clear();
        self.coins.clear();
        self.commentary = Commentary::new(self.commentary.is_enabled());
        self.since_spawn = 0;
        self.events.clear();
        self.next_id = 1;
    }

    /// Begin (or restart) a run
    pub fn start(&mut self) {
        self.reset(GamePhase::Playing);
        self.commentary.begin_run();
        self.events.push(GameEvent::Started);
        log::info!("{} run started (seed {})", self.variant.as_str(), self.seed);
    }

    /// Abandon whatever is happening and show the welcome screen
    pub fn reset_to_menu(&mut self) {
        if self.phase != GamePhase::Welcome {
            log::info!("Returning to menu");
        }
        self.reset(GamePhase::Welcome);
    }

    /// End the run
    pub fn finish(&mut self, cause: GameEvent) {
        self.phase = GamePhase::GameOver;
        self.events.push(cause);
        log::info!(
            "Run over ({:?}) after {} ticks: distance {}, coins {}, dodged {}",
            cause,
            self.time_ticks,
            self.score,
            self.coins_collected,
            self.obstacles_dodged
        );
    }

    pub fn spawn_obstacle(&mut self, slot: Slot, depth: f32) -> u32 {
        let id = self.next_entity_id();
        self.obstacles.push(Obstacle { id, slot, depth });
        id
    }

    pub fn spawn_coin(&mut self, slot: Slot, depth: f32) -> u32 {
        let id = self.next_entity_id();
        self.coins.push(Coin {
            id,
            slot,
            depth,
            collected: false,
        });
        id
    }

    /// Take the events raised since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Gap to the closest pursuer: whole depth units for dinosaurs, pixels
    /// between centers for the hunter
    pub fn nearest_pursuer(&self) -> u32 {
        let player_center = self.player.rect().center();
        self.pursuers
            .iter()
            .map(|p| match p {
                Pursuer::Depth(d) => d.z.floor().max(0.0) as u32,
                Pursuer::Hunter(h) => h.rect.center().distance(player_center).floor() as u32,
            })
            .min()
            .unwrap_or(0)
    }

    pub fn hud(&self) -> Hud {
        Hud {
            phase: self.phase,
            distance: self.score,
            coins: self.coins_collected,
            dodged: self.obstacles_dodged,
            speed: self.speed,
            nearest_pursuer: self.nearest_pursuer(),
            seconds: self.time_ticks / TICK_RATE as u64,
        }
    }
}
