//! Pong entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::KeyboardEvent;

    use pong::audio::AudioManager;
    use pong::consts::*;
    use pong::platform::web::{TextOverlay, canvas, settings_block};
    use pong::platform::{FrameClock, Keyboard};
    use pong::renderer::{RenderState, shapes};
    use pong::sim::{GameState, tick};
    use pong::ui::{self, DrawCommand};
    use pong::{Settings, StartupError};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        render_state: RenderState,
        overlay: TextOverlay,
        audio: AudioManager,
        keyboard: Keyboard,
        clock: FrameClock,
        settings: Settings,
        /// Set when the page is being unloaded
        closing: bool,
    }

    impl Game {
        /// One animation frame: maybe tick, then draw
        fn frame(&mut self, time: f64) {
            let Some(dt) = self.clock.advance(time) else {
                return;
            };

            let input = self.keyboard.snapshot();
            tick(&mut self.state, &input, dt);
            self.keyboard.end_tick();

            for cue in self.state.cues() {
                self.audio.play(cue);
            }

            let fps = self.settings.show_fps.then(|| self.clock.fps());
            let frame = ui::compose(&self.state, &self.overlay, fps);
            self.render(&frame);
        }

        /// Render the current frame
        fn render(&mut self, frame: &[DrawCommand]) {
            let vertices = shapes::frame_vertices(frame);
            match self.render_state.render(&vertices) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    let (w, h) = self.render_state.size;
                    self.render_state.resize(w, h);
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("Out of memory!");
                }
                Err(e) => log::warn!("Render error: {:?}", e),
            }
            self.overlay.draw(frame);
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::error_1(&format!("logger init failed: {e}").into());
        }

        log::info!("{WINDOW_TITLE} starting...");

        match start().await {
            Ok(game) => {
                request_animation_frame(game);
                log::info!("{WINDOW_TITLE} running!");
            }
            Err(e) => log::error!("Startup failed: {e}"),
        }
    }

    async fn start() -> Result<Rc<RefCell<Game>>, StartupError> {
        let window = web_sys::window().ok_or(StartupError::NoWindow)?;
        let document = window.document().ok_or(StartupError::NoDocument)?;
        document.set_title(WINDOW_TITLE);

        // Hide loading indicator
        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        let settings = Settings::from_page_block(
            settings_block(&document, Settings::ELEMENT_ID).as_deref(),
        );

        let game_canvas = canvas(&document, "canvas")?;
        game_canvas.set_width(SCREEN_WIDTH as u32);
        game_canvas.set_height(SCREEN_HEIGHT as u32);
        let overlay = TextOverlay::new(&canvas(&document, "overlay")?, "overlay")?;

        // Initialize WebGPU, WebGL2 as fallback
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(game_canvas))
            .map_err(StartupError::CreateSurface)?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(StartupError::RequestAdapter)?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state =
            RenderState::new(surface, &adapter, SCREEN_WIDTH as u32, SCREEN_HEIGHT as u32)
                .await?;

        // Serve directions are seeded once per page load
        let seed = js_sys::Date::now() as u64;
        log::info!("Game initialized with seed: {}", seed);

        let game = Rc::new(RefCell::new(Game {
            state: GameState::new(seed),
            render_state,
            overlay,
            audio: AudioManager::new(settings.clone()),
            keyboard: Keyboard::new(),
            clock: FrameClock::default(),
            settings,
            closing: false,
        }));

        setup_input_handlers(game.clone());
        setup_lifecycle_handlers(game.clone());

        Ok(game)
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };

        // Key down
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                if g.keyboard.key_down(&event.code(), event.repeat()) {
                    // Keep arrow keys from scrolling the page
                    event.prevent_default();
                    g.audio.resume();
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if game.borrow_mut().keyboard.key_up(&event.code()) {
                    event.prevent_default();
                }
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_lifecycle_handlers(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };

        // Window blur: key-ups will never arrive, drop held keys
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                game.borrow_mut().keyboard.release_all();
                log::debug!("Released keys (window blur)");
            });
            let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Page unload is the close request
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                game.borrow_mut().closing = true;
                log::info!("Close requested");
            });
            let _ = window
                .add_event_listener_with_callback("beforeunload", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        let closing = {
            let mut g = game.borrow_mut();
            g.frame(time);
            g.closing
        };

        if !closing {
            request_animation_frame(game);
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
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("{} (native) starting...", pong::consts::WINDOW_TITLE);
    log::info!("No native window - run with `trunk serve` to play; simulating a headless match");

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default();
    let score = headless_match(seed);
    println!("Final score {} - {}", score.left, score.right);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Run one match with idle paddles, confirming every serve, until the win
/// screen shows up.
#[cfg(not(target_arch = "wasm32"))]
fn headless_match(seed: u64) -> pong::sim::Score {
    use pong::consts::TARGET_FPS;
    use pong::sim::{GamePhase, GameState, TickInput, tick};

    // Ten simulated minutes is far more than any idle match takes
    const MAX_TICKS: u64 = TARGET_FPS as u64 * 600;

    let dt = 1.0 / TARGET_FPS as f32;
    let mut state = GameState::new(seed);
    log::info!("Headless match with seed: {}", state.seed);

    while state.time_ticks < MAX_TICKS {
        let input = TickInput {
            confirm: state.phase == GamePhase::ServeUpdate,
            ..Default::default()
        };
        tick(&mut state, &input, dt);

        for event in &state.events {
            log::debug!("tick {}: {:?}", state.time_ticks, event);
        }
        if state.phase == GamePhase::EndUpdate {
            log::info!(
                "Player {} wins after {} ticks",
                state.score.leader().player_number(),
                state.time_ticks
            );
            break;
        }
    }

    state.score
}
