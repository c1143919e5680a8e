//! Endless Jumper entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlElement, KeyboardEvent};

    use endless_jumper::audio::{AudioManager, SoundEffect};
    use endless_jumper::consts::*;
    use endless_jumper::platform::{dispatch_key, dom};
    use endless_jumper::renderer::{CanvasRenderState, FrameOptions};
    use endless_jumper::sim::{GameEvent, GameState, InputState, KeyTransition, tick};
    use endless_jumper::{HighScore, Settings, WebError, leaderboard};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        render_state: CanvasRenderState,
        audio: AudioManager,
        settings: Settings,
        high_score: HighScore,
        accumulator: f32,
        last_time: f64,
        input: InputState,
    }

    impl Game {
        fn new(seed: u64, settings: Settings, render_state: CanvasRenderState) -> Self {
            let high_score = HighScore::load();
            let mut audio = AudioManager::new();
            audio.set_muted(!settings.jump_sound);
            Self {
                state: GameState::with_rules(seed, high_score.best, settings.rules()),
                render_state,
                audio,
                settings,
                high_score,
                accumulator: 0.0,
                last_time: 0.0,
                input: InputState::default(),
            }
        }

        /// Run simulation ticks for this frame
        fn update(&mut self, dt: f32) {
            let ticks = self
                .settings
                .frame_pacing
                .ticks_for(&mut self.accumulator, dt);
            for _ in 0..ticks {
                if self.state.is_over() {
                    break;
                }
                self.step();
            }
        }

        fn step(&mut self) {
            let events = tick(&mut self.state, &self.input);
            for event in events {
                self.handle_event(event);
            }
        }

        fn handle_event(&mut self, event: GameEvent) {
            match event {
                GameEvent::Jumped => self.audio.play(SoundEffect::Jump),
                GameEvent::Landed { platform_id, score } => {
                    log::debug!("Landed on platform {} (score {})", platform_id, score);
                }
                GameEvent::GameOver {
                    score,
                    new_high_score,
                    ..
                } => {
                    if new_high_score && self.high_score.record(score) {
                        self.high_score.save();
                        log::info!("New high score: {}", score);
                    }
                    if let Err(e) = show_game_over_popup(score) {
                        log::error!("Failed to show game over popup: {}", e);
                    }
                }
            }
        }

        /// Render the current frame
        fn render(&self) {
            self.render_state.render(&self.state);
        }
    }

    /// Fill in the final score and reveal the popup
    fn show_game_over_popup(score: u32) -> Result<(), WebError> {
        dom::element("finalScore")?.set_text_content(Some(&score.to_string()));
        let popup: HtmlElement = dom::element_as("popup")?;
        popup.style().set_property("display", "flex")?;
        Ok(())
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Endless Jumper starting...");

        let settings = Settings::load();
        let options = FrameOptions {
            trail: settings.trail,
        };
        let render_state = match CanvasRenderState::new("gameCanvas", options) {
            Ok(r) => r,
            Err(e) => {
                log::error!("Cannot start without a canvas: {}", e);
                return;
            }
        };

        // Leaderboard loads in the background; failures never stop the game
        wasm_bindgen_futures::spawn_local(leaderboard::load_and_render());

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(seed, settings, render_state)));
        log::info!("Game initialized with seed: {}", seed);

        setup_input_handlers(game.clone());
        setup_restart_button();

        // Start game loop
        request_animation_frame(game);

        log::info!("Endless Jumper running!");
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };

        for (event_name, transition) in [
            ("keydown", KeyTransition::Pressed),
            ("keyup", KeyTransition::Released),
        ] {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                dispatch_key(&mut g.input, &event.key(), transition);
            });
            let _ = window
                .add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Window blur: keyup never arrives, so release everything
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                game.borrow_mut().input.clear();
                log::info!("Input released (window blur)");
            });
            let _ =
                window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
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
                SIM_DT
            };
            g.last_time = time;

            g.update(dt);

            // The loop ends by not rescheduling; the last drawn frame stays up
            if g.state.is_over() {
                return;
            }
            g.render();
        }

        request_animation_frame(game);
    }

    fn setup_restart_button() {
        let Ok(btn) = dom::element("refreshButton") else {
            log::warn!("No restart button on the page");
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
            // A full reload recreates every piece of state
            if let Some(window) = web_sys::window() {
                let _ = window.location().reload();
            }
        });
        let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use endless_jumper::Settings;
    use endless_jumper::sim::{GameEvent, GameState};

    env_logger::init();
    log::info!("Endless Jumper (native) starting...");
    log::info!("Native mode runs a headless autopilot session - use `trunk serve` to play");

    let args = headless::Args::parse(std::env::args().skip(1));
    let settings = if args.classic {
        Settings::classic()
    } else {
        Settings::default()
    };
    let mut state = GameState::with_rules(args.seed, 0, settings.rules());
    log::info!("Seed {} with {:?}", args.seed, state.rules);

    for _ in 0..args.max_ticks {
        let input = headless::autopilot(&state);
        for event in endless_jumper::sim::tick(&mut state, &input) {
            match event {
                GameEvent::Landed { platform_id, score } => {
                    log::debug!("Landed on platform {} (score {})", platform_id, score)
                }
                GameEvent::GameOver { score, .. } => log::info!("Run ended with score {}", score),
                GameEvent::Jumped => {}
            }
        }
        if state.is_over() {
            break;
        }
    }

    println!(
        "ticks={} score={} platforms={} x={:.0}",
        state.time_ticks,
        state.score,
        state.platforms.len(),
        state.player.pos.x
    );
    if args.json {
        match serde_json::to_string_pretty(&state) {
            Ok(json) => println!("{}", json),
            Err(e) => log::error!("Failed to serialize state: {}", e),
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use endless_jumper::sim::{GameState, InputState};

    /// `endless-jumper [seed] [max-ticks] [--classic] [--json]`
    pub struct Args {
        pub seed: u64,
        pub max_ticks: u64,
        pub classic: bool,
        pub json: bool,
    }

    impl Args {
        pub fn parse(args: impl Iterator<Item = String>) -> Self {
            let mut parsed = Self {
                seed: 12345,
                max_ticks: 60 * 60,
                classic: false,
                json: false,
            };
            let mut positional = 0;
            for arg in args {
                match arg.as_str() {
                    "--classic" => parsed.classic = true,
                    "--json" => parsed.json = true,
                    other => {
                        let Ok(value) = other.parse::<u64>() else {
                            log::warn!("Ignoring argument `{}`", other);
                            continue;
                        };
                        match positional {
                            0 => parsed.seed = value,
                            1 => parsed.max_ticks = value,
                            _ => log::warn!("Ignoring extra argument `{}`", other),
                        }
                        positional += 1;
                    }
                }
            }
            parsed
        }
    }

    /// Run right and jump off the end of whatever platform we stand on
    pub fn autopilot(state: &GameState) -> InputState {
        let player = &state.player;
        let standing_on = state.platforms.iter().find(|p| {
            player.grounded
                && (p.pos.y - player.bottom()).abs() < 0.5
                && player.pos.x + player.size.x > p.pos.x
                && player.pos.x < p.pos.x + p.size.x
        });
        let near_edge = standing_on
            .map(|p| player.pos.x + player.size.x >= p.pos.x + p.size.x - 10.0)
            .unwrap_or(false);

        InputState {
            left: false,
            right: true,
            jump: near_edge,
        }
    }
}
