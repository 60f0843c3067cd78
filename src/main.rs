//! Dino Run entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;

    use dino_run::audio::AudioManager;
    use dino_run::consts::*;
    use dino_run::{Session, Settings};

    // The page owns drawing; it registers `window.presentDinoRun(json)` and may
    // put a settings JSON string in `window.dinoRunSettings`
    #[wasm_bindgen(inline_js = "
        export function present(json) {
            if (typeof window.presentDinoRun === 'function') {
                window.presentDinoRun(json);
                return true;
            }
            return false;
        }

        export function settings_json() {
            const s = window.dinoRunSettings;
            if (typeof s === 'string') return s;
            if (s && typeof s === 'object') return JSON.stringify(s);
            return null;
        }
    ")]
    extern "C" {
        fn present(json: &str) -> bool;
        fn settings_json() -> Option<String>;
    }

    /// Game instance holding all state
    struct Game {
        session: Session,
        audio: AudioManager,
        last_time: f64,
        mute_on_blur: bool,
        muted: bool,
        warned_no_presenter: bool,
    }

    impl Game {
        fn new(settings: &Settings, seed: u64) -> Self {
            Self {
                session: Session::new(settings, seed),
                audio: AudioManager::from_settings(settings),
                last_time: 0.0,
                mute_on_blur: settings.mute_on_blur,
                muted: settings.muted,
                warned_no_presenter: false,
            }
        }

        fn update(&mut self, dt: f32) {
            self.session.frame(dt);
            let events = self.session.drain_events();
            self.audio.play_events(&events);
        }

        fn render(&mut self) {
            let Some(json) = self.session.snapshot_json() else {
                return;
            };
            if !present(&json) && !self.warned_no_presenter {
                log::warn!("window.presentDinoRun is not defined - nothing will be drawn");
                self.warned_no_presenter = true;
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::warn_1(&format!("Logger init failed: {}", e).into());
        }

        log::info!("Dino Run starting...");

        let settings = settings_json()
            .map(|json| Settings::from_json_or_default(&json))
            .unwrap_or_default();
        let seed = settings.seed_or(js_sys::Date::now() as u64);
        let game = Rc::new(RefCell::new(Game::new(&settings, seed)));

        log::info!(
            "Game initialized ({}) with seed: {}",
            settings.variant.as_str(),
            seed
        );

        setup_input_handlers(game.clone());
        setup_focus_handlers(game.clone());

        // Start game loop
        request_animation_frame(game);

        log::info!("Dino Run running!");
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            log::warn!("No window - keyboard input disabled");
            return;
        };

        // Key down
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                let mut g = game.borrow_mut();
                if g.session.key_down(&event.key()) {
                    // Keep arrows and space from scrolling the page
                    event.prevent_default();
                    // Browsers only allow audio after a gesture
                    g.audio.resume();
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                if game.borrow_mut().session.key_up(&event.key()) {
                    event.prevent_default();
                }
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_focus_handlers(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(document) = window.document() else {
            return;
        };

        // Visibility change (tab switch, minimize): held keys never get their keyup
        {
            let game = game.clone();
            let document_clone = document.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                if document_clone.visibility_state() == web_sys::VisibilityState::Hidden {
                    game.borrow_mut().session.release_all();
                    log::info!("Released keys (tab hidden)");
                }
            });
            let _ = document.add_event_listener_with_callback(
                "visibilitychange",
                closure.as_ref().unchecked_ref(),
            );
            closure.forget();
        }

        // Window blur (click outside)
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                let mut g = game.borrow_mut();
                g.session.release_all();
                if g.mute_on_blur {
                    g.audio.set_muted(true);
                }
            });
            let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Window focus restores the configured mute state
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                let mut g = game.borrow_mut();
                let muted = g.muted;
                g.audio.set_muted(muted);
            });
            let _ =
                window.add_event_listener_with_callback("focus", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();

            // Calculate delta time
            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) / 1000.0) as f32
            } else {
                TICK_DT
            };
            g.last_time = time;

            g.update(dt);
            g.render();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use dino_run::{Settings, Variant};

    env_logger::init();
    log::info!("Dino Run (native) starting...");
    log::info!("Native mode runs a headless autopilot - serve the wasm build to play");

    // Arguments: an optional variant name and an optional settings file
    let mut variants = vec![Variant::Chaser, Variant::Dodge];
    let mut settings = Settings::default();
    for arg in std::env::args().skip(1) {
        if let Some(variant) = Variant::from_str(&arg) {
            variants = vec![variant];
            continue;
        }
        match std::fs::read_to_string(&arg) {
            Ok(json) => settings = Settings::from_json_or_default(&json),
            Err(e) => log::warn!("Could not read settings from {}: {}", arg, e),
        }
    }
    let seed = settings.seed_or(0xD1_0005);

    for variant in variants {
        let settings = Settings {
            variant,
            ..settings.clone()
        };
        autopilot::run(&settings, seed);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Plays a run without a human, for smoke testing the simulation
#[cfg(not(target_arch = "wasm32"))]
mod autopilot {
    use dino_run::consts::*;
    use dino_run::sim::{GamePhase, GameState, Pursuer};
    use dino_run::{Session, Settings, Variant};

    /// Give up after two minutes of game time
    const MAX_TICKS: u32 = TICK_RATE * 120;

    pub fn run(settings: &Settings, seed: u64) {
        let mut session = Session::new(settings, seed);
        session.start();

        let mut ticks = 0;
        while session.state().phase == GamePhase::Playing && ticks < MAX_TICKS {
            steer(&mut session);
            session.advance(1);
            ticks += 1;
            for event in session.drain_events() {
                log::debug!("tick {}: {:?}", ticks, event);
            }
        }

        let hud = session.hud();
        log::info!(
            "{}: {:?} after {}s, distance {}, coins {}, dodged {}",
            settings.variant.as_str(),
            hud.phase,
            hud.seconds,
            hud.distance,
            hud.coins,
            hud.dodged
        );
    }

    fn steer(session: &mut Session) {
        let state = session.state();
        let (jump, left, right) = match state.variant {
            Variant::Chaser => (should_jump(state), false, false),
            Variant::Dodge => {
                let dir = dodge_direction(state);
                (false, dir < 0.0, dir > 0.0)
            }
        };

        if jump {
            session.key_down(" ");
            session.key_up(" ");
        }
        for (held, key) in [(left, "ArrowLeft"), (right, "ArrowRight")] {
            if held {
                session.key_down(key);
            } else {
                session.key_up(key);
            }
        }
    }

    /// Jump when a limb in our lane is a few ticks from the trip window
    fn should_jump(state: &GameState) -> bool {
        let c = &state.tuning.chaser;
        let player = &state.player;
        if player.airborne || player.stunned {
            return false;
        }
        let lead = state.speed * 4.0;
        state.obstacles.iter().any(|o| {
            o.slot.lane() == Some(player.lane)
                && o.depth > c.trip_window.1
                && o.depth <= c.trip_window.1 + lead
        })
    }

    /// Sideways push away from the nearest threat above the player
    fn dodge_direction(state: &GameState) -> f32 {
        let player = state.player.rect();
        let center = player.center().x;

        let falling = state
            .obstacles
            .iter()
            .filter_map(|o| o.rect(state.tuning.dodge.obstacle_size))
            .filter(|r| r.max().y > player.pos.y - 150.0 && r.pos.y < player.max().y)
            .filter(|r| r.max().x > player.pos.x - 10.0 && r.pos.x < player.max().x + 10.0)
            .map(|r| r.center().x);
        let hunters = state.pursuers.iter().filter_map(|p| match p {
            Pursuer::Hunter(h) if h.rect.center().distance(player.center()) < 150.0 => {
                Some(h.rect.center().x)
            }
            _ => None,
        });

        let Some(threat) = falling.chain(hunters).min_by(|a, b| {
            (a - center).abs().total_cmp(&(b - center).abs())
        }) else {
            return 0.0;
        };

        // Run away, unless a wall is in the way
        let away = if threat > center { -1.0 } else { 1.0 };
        let blocked = (away < 0.0 && player.pos.x <= 0.0)
            || (away > 0.0 && player.max().x >= ARENA_WIDTH);
        if blocked { -away } else { away }
    }
}
