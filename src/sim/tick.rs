//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically. One call to
//! [`tick`] is one unit of game time; [`advance`] runs an explicit count.

use glam::Vec2;

use super::collision::{in_window, lane_contact, rects_collide};
use super::input::{InputLatch, Key};
use super::rng::SpawnSource;
use super::state::{GameEvent, GamePhase, GameState, Pursuer, Slot};
use crate::consts::*;
use crate::tuning::Variant;

/// Run `ticks` simulation ticks back to back
pub fn advance(
    state: &mut GameState,
    input: &mut InputLatch,
    rng: &mut impl SpawnSource,
    ticks: u32,
) {
    for _ in 0..ticks {
        tick(state, input, rng);
    }
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, input: &mut InputLatch, rng: &mut impl SpawnSource) {
    // Escape works from anywhere
    if input.take(Key::Menu) {
        state.reset_to_menu();
        input.clear();
        return;
    }

    match state.phase {
        GamePhase::Welcome | GamePhase::GameOver => {
            if input.take(Key::Action) {
                state.start();
                // The start key must not also count as a jump
                input.clear();
            }
            return;
        }
        GamePhase::Playing => {}
    }

    state.time_ticks += 1;
    let t = state.time_ticks;
    state.score = state.tuning.score(state.variant, t);
    state.speed = state.tuning.scroll_speed(state.variant, t);
    state.scroll_offset += state.speed;

    if advance_pursuers(state) {
        end_run(state, input, GameEvent::Caught);
        return;
    }

    match state.variant {
        Variant::Chaser => {
            update_runner(state, input);
            let c = &state.tuning.chaser;
            state.path_offset = c.path_amplitude * (t as f32 * c.path_rate).sin();
        }
        Variant::Dodge => update_dodger(state, input),
    }

    spawn(state, rng);
    scroll_entities(state);

    let ended = match state.variant {
        Variant::Chaser => {
            resolve_runner_collisions(state);
            None
        }
        Variant::Dodge => resolve_dodger_collisions(state),
    };
    if let Some(cause) = ended {
        end_run(state, input, cause);
        return;
    }

    if let Some(line) = state.commentary.tick(rng) {
        state.events.push(GameEvent::Commentary(line));
    }
}

fn end_run(state: &mut GameState, input: &mut InputLatch, cause: GameEvent) {
    state.finish(cause);
    // A jump still latched from the last moment of the run must not restart it
    input.clear();
}

/// Move every pursuer; true if one of them got the player
fn advance_pursuers(state: &mut GameState) -> bool {
    let t = state.time_ticks as f32;
    match state.variant {
        Variant::Chaser => {
            let c = &state.tuning.chaser;
            let stunned = state.player.stunned;
            let target_x = ARENA_WIDTH / 2.0 + state.path_offset - c.lateral_target_offset;
            let mut caught = false;
            for pursuer in &mut state.pursuers {
                if let Pursuer::Depth(dino) = pursuer {
                    dino.advance(t, stunned, target_x, c);
                    caught |= dino.z <= c.catch_distance;
                }
            }
            caught
        }
        Variant::Dodge => {
            let d = &state.tuning.dodge;
            let speed = d.hunter_speed + t / d.hunter_ramp;
            let player = state.player.rect();
            let bounds = Vec2::new(ARENA_WIDTH, ARENA_HEIGHT);
            let mut caught = false;
            for pursuer in &mut state.pursuers {
                if let Pursuer::Hunter(hunter) = pursuer {
                    hunter.advance(speed, bounds);
                    caught |= rects_collide(&hunter.rect, &player);
                }
            }
            caught
        }
    }
}

/// Lane runner controls: one-shot lane changes and jumps, or the stun tumble
fn update_runner(state: &mut GameState, input: &mut InputLatch) {
    let c = &state.tuning.chaser;
    let player = &mut state.player;

    if player.stunned {
        // No buffering through a stun
        input.take_any(&[Key::Left, Key::Right, Key::Up, Key::Action]);
        if player.tumble(c.gravity * c.tumble_gravity, c.ground_y, c.recovery_kick) {
            log::debug!("Recovered from trip at tick {}", state.time_ticks);
            state.events.push(GameEvent::Recovered);
        }
        return;
    }

    if input.take(Key::Left) {
        player.step_lane(-1, c.lane_count);
    }
    if input.take(Key::Right) {
        player.step_lane(1, c.lane_count);
    }
    // A press while airborne stays latched and fires on landing
    if !player.airborne && input.take_any(&[Key::Up, Key::Action]) && player.jump(c.jump_power) {
        state.events.push(GameEvent::Jumped);
    }

    player.fall(c.gravity, c.ground_y);
}

/// Dodger controls: continuous horizontal movement while a key is held
fn update_dodger(state: &mut GameState, input: &mut InputLatch) {
    let d = &state.tuning.dodge;
    let mut dx = 0.0;
    if input.is_held(Key::Left) {
        dx -= d.move_speed;
    }
    if input.is_held(Key::Right) {
        dx += d.move_speed;
    }
    state.player.slide(dx, ARENA_WIDTH - state.player.size.x);
    // Nothing else is bound in this mode
    input.take_any(&[Key::Up, Key::Down, Key::Action]);
}

/// Spawn an obstacle or coin once the interval has elapsed
fn spawn(state: &mut GameState, rng: &mut impl SpawnSource) {
    state.since_spawn += 1;
    let interval = state.tuning.spawn_interval(state.variant, state.time_ticks);
    if state.since_spawn < interval {
        return;
    }
    state.since_spawn = 0;

    let obstacle = rng.unit() < state.tuning.obstacle_chance(state.variant);
    let (slot, depth) = match state.variant {
        Variant::Chaser => {
            let c = &state.tuning.chaser;
            (Slot::Lane(rng.index(c.lane_count)), c.spawn_depth)
        }
        Variant::Dodge => {
            let d = &state.tuning.dodge;
            let size = if obstacle { d.obstacle_size } else { d.coin_size };
            (Slot::Column(rng.range(0.0, ARENA_WIDTH - size.x)), -size.y)
        }
    };

    if obstacle {
        state.spawn_obstacle(slot, depth);
    } else {
        state.spawn_coin(slot, depth);
    }
}

/// Scroll obstacles and coins by the current speed and drop the expired ones
fn scroll_entities(state: &mut GameState) {
    let speed = state.speed;
    match state.variant {
        Variant::Chaser => {
            let limit = state.tuning.chaser.removal_depth;
            for obstacle in &mut state.obstacles {
                obstacle.depth -= speed;
            }
            for coin in &mut state.coins {
                coin.depth -= speed;
            }
            state.obstacles.retain(|o| o.depth >= limit);
            state.coins.retain(|c| c.depth >= limit);
        }
        Variant::Dodge => {
            for obstacle in &mut state.obstacles {
                obstacle.depth += speed;
            }
            for coin in &mut state.coins {
                coin.depth += speed;
            }
            let before = state.obstacles.len();
            state.obstacles.retain(|o| o.depth <= ARENA_HEIGHT);
            let dodged = before - state.obstacles.len();
            state.obstacles_dodged += dodged as u32;
            state
                .events
                .extend(std::iter::repeat_n(GameEvent::ObstacleDodged, dodged));
            state.coins.retain(|c| c.depth <= ARENA_HEIGHT);
        }
    }
}

/// Trips and coin pickups for the lane runner
fn resolve_runner_collisions(state: &mut GameState) {
    let c = &state.tuning.chaser;
    let player = &mut state.player;

    // Only a player low enough to catch a foot can trip, and only once per stun
    if !player.stunned && player.y > c.trip_height {
        let hit = state.obstacles.iter().position(|o| {
            o.slot
                .lane()
                .is_some_and(|lane| lane_contact(lane, o.depth, player.lane, c.trip_window))
        });
        if let Some(index) = hit {
            let obstacle = state.obstacles.remove(index);
            player.stun(c.stun_ticks);
            log::debug!(
                "Tripped over obstacle {} in lane {} at tick {}",
                obstacle.id,
                player.lane,
                state.time_ticks
            );
            state.events.push(GameEvent::Tripped);
        }
    }

    let lane = player.lane;
    for coin in &mut state.coins {
        if !coin.collected && coin.slot.lane() == Some(lane) && in_window(coin.depth, c.coin_window) {
            coin.collected = true;
            state.coins_collected += 1;
            state.events.push(GameEvent::CoinCollected);
        }
    }
    state.coins.retain(|coin| !coin.collected);
}

/// Rectangle contacts for the dodger; the run-ending event if any
fn resolve_dodger_collisions(state: &mut GameState) -> Option<GameEvent> {
    let d = &state.tuning.dodge;
    let player = state.player.rect();

    // The player may have slid into the hunter this tick
    let caught = state.pursuers.iter().any(|p| match p {
        Pursuer::Hunter(h) => rects_collide(&h.rect, &player),
        Pursuer::Depth(_) => false,
    });
    if caught {
        return Some(GameEvent::Caught);
    }

    let crashed = state
        .obstacles
        .iter()
        .filter_map(|o| o.rect(d.obstacle_size))
        .any(|r| rects_collide(&player, &r));

    for coin in &mut state.coins {
        let touching = coin
            .rect(d.coin_size)
            .is_some_and(|r| rects_collide(&player, &r));
        if !coin.collected && touching {
            coin.collected = true;
            state.coins_collected += 1;
            state.events.push(GameEvent::CoinCollected);
        }
    }
    state.coins.retain(|coin| !coin.collected);

    crashed.then_some(GameEvent::Crashed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::rng::Scripted;
    use crate::tuning::Tuning;

    /// Every spawn is a coin at the far left
    fn quiet_rng() -> Scripted {
        Scripted::new(&[0.95, 0.0])
    }

    /// A running game with the companion muted so scripted draws line up
    fn playing(variant: Variant) -> (GameState, InputLatch, Scripted) {
        let mut state = GameState::new(12345, variant, Tuning::default()).with_commentary(false);
        state.start();
        state.drain_events();
        (state, InputLatch::new(), quiet_rng())
    }

    /// Park the dinosaurs far away so long scenarios are not cut short
    fn hold_off_pursuers(state: &mut GameState) {
        for p in &mut state.pursuers {
            if let Pursuer::Depth(d) = p {
                d.z = 1.0e6;
            }
        }
    }

    fn hunter_rect(state: &GameState) -> crate::sim::Rect {
        match &state.pursuers[0] {
            Pursuer::Hunter(h) => h.rect,
            Pursuer::Depth(_) => panic!("dodger runs have a hunter"),
        }
    }

    #[test]
    fn test_tick_welcome_to_playing() {
        let mut state = GameState::new(1, Variant::Chaser, Tuning::default());
        let mut input = InputLatch::new();
        let mut rng = quiet_rng();

        // Tick without start - should stay on the welcome screen
        tick(&mut state, &mut input, &mut rng);
        assert_eq!(state.phase, GamePhase::Welcome);
        assert_eq!(state.time_ticks, 0);

        input.key_down(Key::Action);
        tick(&mut state, &mut input, &mut rng);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(input, InputLatch::new());

        // The start key did not turn into a jump
        tick(&mut state, &mut input, &mut rng);
        assert!(!state.player.airborne);
        assert_eq!(state.time_ticks, 1);
    }

    #[test]
    fn test_menu_from_anywhere() {
        let (mut state, mut input, mut rng) = playing(Variant::Chaser);
        advance(&mut state, &mut input, &mut rng, 10);
        input.key_down(Key::Menu);
        tick(&mut state, &mut input, &mut rng);
        assert_eq!(state.phase, GamePhase::Welcome);
        assert_eq!(state.time_ticks, 0);
    }

    #[test]
    fn test_score_tracks_ticks() {
        let (mut state, mut input, mut rng) = playing(Variant::Chaser);
        hold_off_pursuers(&mut state);
        advance(&mut state, &mut input, &mut rng, 59);
        assert_eq!(state.score, 2);
        tick(&mut state, &mut input, &mut rng);
        assert_eq!(state.score, 3);
        assert_eq!(state.hud().seconds, 1);
    }

    #[test]
    fn test_lane_change_is_one_shot() {
        let (mut state, mut input, mut rng) = playing(Variant::Chaser);
        input.key_down(Key::Left);
        advance(&mut state, &mut input, &mut rng, 5);
        assert_eq!(state.player.lane, 0);
        input.key_down(Key::Right);
        tick(&mut state, &mut input, &mut rng);
        assert_eq!(state.player.lane, 1);
    }

    #[test]
    fn test_jump_fires_once_per_press() {
        let (mut state, mut input, mut rng) = playing(Variant::Chaser);
        input.key_down(Key::Up);
        tick(&mut state, &mut input, &mut rng);
        assert!(state.player.airborne);
        assert!(state.player.vel_y < 0.0);
        assert_eq!(state.drain_events(), vec![GameEvent::Jumped]);

        // Ride out the whole arc without pressing again
        advance(&mut state, &mut input, &mut rng, 60);
        assert!(!state.player.airborne);
        assert_eq!(state.player.y, state.tuning.chaser.ground_y);
        assert!(!state.drain_events().contains(&GameEvent::Jumped));
    }

    #[test]
    fn test_stun_recovery_scenario() {
        let (mut state, mut input, mut rng) = playing(Variant::Chaser);
        hold_off_pursuers(&mut state);
        let stun = state.tuning.chaser.stun_ticks;
        state.player.stun(stun);

        advance(&mut state, &mut input, &mut rng, stun - 1);
        assert!(state.player.stunned);
        tick(&mut state, &mut input, &mut rng);
        assert!(!state.player.stunned);
        assert_eq!(state.player.vel_y, -6.0);
        assert!(state.drain_events().contains(&GameEvent::Recovered));
    }

    #[test]
    fn test_input_ignored_while_stunned() {
        let (mut state, mut input, mut rng) = playing(Variant::Chaser);
        hold_off_pursuers(&mut state);
        state.player.stun(10);
        input.key_down(Key::Left);
        input.key_down(Key::Up);
        tick(&mut state, &mut input, &mut rng);
        assert_eq!(state.player.lane, 1);
        assert_eq!(input, InputLatch::new());
    }

    #[test]
    fn test_trip_scenario() {
        let (mut state, mut input, mut rng) = playing(Variant::Chaser);
        hold_off_pursuers(&mut state);
        let id = state.spawn_obstacle(Slot::Lane(1), 80.0);

        let mut trips = 0;
        for _ in 0..40 {
            tick(&mut state, &mut input, &mut rng);
            trips += state
                .drain_events()
                .iter()
                .filter(|e| **e == GameEvent::Tripped)
                .count();
        }
        assert_eq!(trips, 1);
        assert!(state.player.stunned);
        assert!(state.obstacles.iter().all(|o| o.id != id));
    }

    #[test]
    fn test_jumping_clears_obstacle() {
        let (mut state, mut input, mut rng) = playing(Variant::Chaser);
        hold_off_pursuers(&mut state);
        // Reaches the trip window in about six ticks, mid-jump
        state.spawn_obstacle(Slot::Lane(1), 55.0);
        input.key_down(Key::Up);
        advance(&mut state, &mut input, &mut rng, 25);
        assert!(!state.player.stunned);
    }

    #[test]
    fn test_other_lane_does_not_trip() {
        let (mut state, mut input, mut rng) = playing(Variant::Chaser);
        hold_off_pursuers(&mut state);
        state.spawn_obstacle(Slot::Lane(0), 40.0);
        advance(&mut state, &mut input, &mut rng, 30);
        assert!(!state.player.stunned);
    }

    #[test]
    fn test_coin_scenario() {
        let (mut state, mut input, mut rng) = playing(Variant::Chaser);
        hold_off_pursuers(&mut state);
        let id = state.spawn_coin(Slot::Lane(1), 450.0);

        let mut collected = 0;
        for _ in 0..40 {
            tick(&mut state, &mut input, &mut rng);
            collected += state
                .drain_events()
                .iter()
                .filter(|e| **e == GameEvent::CoinCollected)
                .count();
        }
        assert_eq!(collected, 1);
        assert_eq!(state.coins_collected, 1);
        assert!(state.coins.iter().all(|c| c.id != id));
    }

    #[test]
    fn test_entities_expire_behind_player() {
        let (mut state, mut input, mut rng) = playing(Variant::Chaser);
        hold_off_pursuers(&mut state);
        state.spawn_obstacle(Slot::Lane(0), -45.0);
        state.spawn_coin(Slot::Lane(2), -45.0);
        tick(&mut state, &mut input, &mut rng);
        assert!(state.obstacles.is_empty());
        assert!(state.coins.is_empty());
    }

    #[test]
    fn test_pursuers_catch_idle_player() {
        let (mut state, mut input, mut rng) = playing(Variant::Chaser);
        let mut ticks = 0;
        while state.phase == GamePhase::Playing {
            tick(&mut state, &mut input, &mut rng);
            ticks += 1;
            assert!(ticks < 1000, "never caught");
        }
        assert_eq!(state.phase, GamePhase::GameOver);
        assert!(state.drain_events().contains(&GameEvent::Caught));
        assert!(state.pursuers.iter().any(|p| match p {
            Pursuer::Depth(d) => d.z <= 40.0,
            Pursuer::Hunter(_) => false,
        }));
    }

    #[test]
    fn test_game_over_waits_for_restart() {
        let (mut state, mut input, mut rng) = playing(Variant::Chaser);
        state.finish(GameEvent::Caught);
        let frozen = state.clone();
        advance(&mut state, &mut input, &mut rng, 10);
        assert_eq!(state, frozen);

        input.key_down(Key::Action);
        tick(&mut state, &mut input, &mut rng);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.time_ticks, 0);
    }

    #[test]
    fn test_spawn_cadence() {
        let (mut state, mut input, _) = playing(Variant::Chaser);
        hold_off_pursuers(&mut state);
        // 0.1 -> obstacle, then lane pick 0.5 -> lane 1
        let mut rng = Scripted::new(&[0.1, 0.5]);
        // Interval drops to 79 at tick 60, so the first spawn lands on tick 79
        advance(&mut state, &mut input, &mut rng, 78);
        assert!(state.obstacles.is_empty());
        tick(&mut state, &mut input, &mut rng);
        assert_eq!(state.obstacles.len(), 1);
        assert_eq!(state.obstacles[0].slot, Slot::Lane(1));
        // Spawned this tick at 500, then scrolled once
        let expected = 500.0 - state.speed;
        assert!((state.obstacles[0].depth - expected).abs() < 1e-3);
    }

    #[test]
    fn test_coin_spawn_on_high_roll() {
        let (mut state, mut input, _) = playing(Variant::Chaser);
        hold_off_pursuers(&mut state);
        let mut rng = Scripted::new(&[0.8, 0.0]);
        advance(&mut state, &mut input, &mut rng, 80);
        assert_eq!(state.coins.len(), 1);
        assert_eq!(state.coins[0].slot, Slot::Lane(0));
        assert!(state.obstacles.is_empty());
    }

    #[test]
    fn test_path_offset_curves() {
        let (mut state, mut input, mut rng) = playing(Variant::Chaser);
        hold_off_pursuers(&mut state);
        advance(&mut state, &mut input, &mut rng, 100);
        let expected = 30.0 * (100.0f32 * 0.005).sin();
        assert!((state.path_offset - expected).abs() < 1e-4);
    }

    #[test]
    fn test_commentary_opening_line() {
        let mut state = GameState::new(5, Variant::Chaser, Tuning::default());
        let (mut input, mut rng) = (InputLatch::new(), quiet_rng());
        state.start();
        advance(&mut state, &mut input, &mut rng, 12);
        assert!(
            state
                .drain_events()
                .iter()
                .any(|e| matches!(e, GameEvent::Commentary(_)))
        );
        assert!(state.commentary.is_showing());
    }

    #[test]
    fn test_dodger_moves_while_held() {
        let (mut state, mut input, mut rng) = playing(Variant::Dodge);
        let start = state.player.x;
        input.key_down(Key::Left);
        advance(&mut state, &mut input, &mut rng, 3);
        assert_eq!(state.player.x, start - 18.0);
        input.key_up(Key::Left);
        tick(&mut state, &mut input, &mut rng);
        assert_eq!(state.player.x, start - 18.0);
    }

    #[test]
    fn test_dodger_clamps_to_arena() {
        let (mut state, mut input, mut rng) = playing(Variant::Dodge);
        input.key_down(Key::Right);
        advance(&mut state, &mut input, &mut rng, 200);
        if state.phase == GamePhase::Playing {
            assert_eq!(state.player.x, ARENA_WIDTH - state.player.size.x);
        }
        assert!(state.player.x <= ARENA_WIDTH - state.player.size.x);
    }

    #[test]
    fn test_dodger_crash_on_overlap() {
        let (mut state, mut input, mut rng) = playing(Variant::Dodge);
        let x = state.player.x;
        state.spawn_obstacle(Slot::Column(x), state.player.y);
        tick(&mut state, &mut input, &mut rng);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert!(state.drain_events().contains(&GameEvent::Crashed));
    }

    #[test]
    fn test_dodger_counts_dodged() {
        let (mut state, mut input, mut rng) = playing(Variant::Dodge);
        state.spawn_obstacle(Slot::Column(0.0), ARENA_HEIGHT - 1.0);
        tick(&mut state, &mut input, &mut rng);
        assert!(state.obstacles.is_empty());
        assert_eq!(state.obstacles_dodged, 1);
        assert!(state.drain_events().contains(&GameEvent::ObstacleDodged));
    }

    #[test]
    fn test_dodger_collects_coin() {
        let (mut state, mut input, mut rng) = playing(Variant::Dodge);
        let x = state.player.x + 10.0;
        state.spawn_coin(Slot::Column(x), state.player.y);
        tick(&mut state, &mut input, &mut rng);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.coins_collected, 1);
        assert!(state.coins.is_empty());
    }

    #[test]
    fn test_hunter_catches_player() {
        let (mut state, mut input, mut rng) = playing(Variant::Dodge);
        let target = state.player.rect().pos;
        if let Pursuer::Hunter(h) = &mut state.pursuers[0] {
            h.rect.pos = target - Vec2::new(0.0, 30.0);
        }
        tick(&mut state, &mut input, &mut rng);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert!(state.drain_events().contains(&GameEvent::Caught));
    }

    #[test]
    fn test_player_sliding_into_hunter_is_caught() {
        let (mut state, mut input, mut rng) = playing(Variant::Dodge);
        // Just right of the player and drifting up, clear of it until the slide
        if let Pursuer::Hunter(h) = &mut state.pursuers[0] {
            h.rect.pos = Vec2::new(421.0, 473.0);
            h.dir = Vec2::new(0.0, -1.0);
        }
        assert!(!rects_collide(&hunter_rect(&state), &state.player.rect()));

        input.key_down(Key::Right);
        tick(&mut state, &mut input, &mut rng);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert!(state.drain_events().contains(&GameEvent::Caught));
    }

    #[test]
    fn test_trip_does_not_interrupt_companion() {
        let mut state = GameState::new(5, Variant::Chaser, Tuning::default());
        state.start();
        state.drain_events();
        hold_off_pursuers(&mut state);
        let (mut input, mut rng) = (InputLatch::new(), quiet_rng());
        state.spawn_obstacle(Slot::Lane(state.player.lane), 34.0);

        tick(&mut state, &mut input, &mut rng);
        let events = state.drain_events();
        assert!(events.contains(&GameEvent::Tripped));
        assert!(!events.iter().any(|e| matches!(e, GameEvent::Commentary(_))));
        assert!(!state.commentary.is_showing());
    }

    #[test]
    fn test_determinism() {
        // Two states with same seed should produce identical results
        use crate::sim::rng::RngState;
        let mut a = GameState::new(99999, Variant::Chaser, Tuning::default());
        let mut b = a.clone();
        let (mut ia, mut ib) = (InputLatch::new(), InputLatch::new());
        let mut ra = RngState::new(99999).to_rng();
        let mut rb = RngState::new(99999).to_rng();

        for i in 0..400u32 {
            let keys: &[Key] = match i % 37 {
                0 => &[Key::Action],
                5 => &[Key::Left],
                11 => &[Key::Up],
                19 => &[Key::Right],
                _ => &[],
            };
            for &k in keys {
                ia.key_down(k);
                ib.key_down(k);
            }
            tick(&mut a, &mut ia, &mut ra);
            tick(&mut b, &mut ib, &mut rb);
        }

        assert_eq!(a, b);
    }
}
