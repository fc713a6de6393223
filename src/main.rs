//! Ropebox entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::collections::HashSet;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent, MouseEvent};

    use ropebox::Settings;
    use ropebox::consts::*;
    use ropebox::math;
    use ropebox::render::draw;
    use ropebox::sim::{GameState, TickInput, tick};

    /// Pressed-key set and the intents derived from it
    #[derive(Default)]
    struct KeySet {
        pressed: HashSet<String>,
    }

    impl KeySet {
        fn set_down(&mut self, key: &str) {
            self.pressed.insert(key.to_string());
        }

        fn set_up(&mut self, key: &str) {
            self.pressed.remove(key);
        }

        fn is_pressed(&self, key: &str) -> bool {
            self.pressed.contains(key)
        }

        /// Movement-direction vector: fixed magnitude per active axis.
        /// Left/right only; the vertical keys feed the jump intent.
        fn movement_direction(&self) -> Vec2 {
            let mut x = 0.0;
            if self.is_pressed("a") || self.is_pressed("ArrowLeft") {
                x -= MOVE_SPEED;
            }
            if self.is_pressed("d") || self.is_pressed("ArrowRight") {
                x += MOVE_SPEED;
            }
            Vec2::new(x, 0.0)
        }

        fn jump_intent(&self) -> bool {
            self.is_pressed("w") || self.is_pressed("ArrowUp")
        }
    }

    /// App instance holding all state
    struct App {
        state: GameState,
        settings: Settings,
        ctx: CanvasRenderingContext2d,
        keys: KeySet,
        /// Latest cursor position in canvas pixels
        cursor: Option<Vec2>,
        accumulator: f32,
        last_time: f64,
        // FPS tracking
        frame_times: [f64; 60],
        frame_index: usize,
        fps: u32,
    }

    impl App {
        fn new(ctx: CanvasRenderingContext2d) -> Self {
            Self {
                state: GameState::new(),
                settings: Settings::load(),
                ctx,
                keys: KeySet::default(),
                cursor: None,
                accumulator: 0.0,
                last_time: 0.0,
                frame_times: [0.0; 60],
                frame_index: 0,
                fps: 0,
            }
        }

        /// Run simulation ticks for the elapsed frame time
        fn update(&mut self, dt: f32, time: f64) {
            let dt = dt.min(0.25);
            self.accumulator += dt;

            // Snapshot the input once; every substep this frame sees the
            // same intents
            let input = TickInput {
                movement: self.keys.movement_direction(),
                jump: self.keys.jump_intent(),
            };

            let mut substeps = 0;
            while self.accumulator >= TICK_DT && substeps < MAX_SUBSTEPS {
                tick(&mut self.state, &input, TICK_DT);
                self.accumulator -= TICK_DT;
                substeps += 1;
            }

            // Track frame times for FPS
            self.frame_times[self.frame_index] = time;
            self.frame_index = (self.frame_index + 1) % 60;

            let oldest_time = self.frame_times[self.frame_index];
            if oldest_time > 0.0 {
                let elapsed = time - oldest_time;
                if elapsed > 0.0 {
                    self.fps = (60000.0 / elapsed).round() as u32;
                }
            }
        }

        /// Render the current frame
        fn render(&self) {
            draw::draw(&self.ctx, &self.state, &self.settings, self.cursor);
        }

        /// Update HUD elements in the DOM
        fn update_hud(&self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            if let Some(el) = document.get_element_by_id("hud-fps") {
                let text = if self.settings.show_fps {
                    format!("{} FPS", self.fps)
                } else {
                    String::new()
                };
                el.set_text_content(Some(&text));
            }
        }

        /// Spawn a rope projectile toward the clicked point
        fn spawn_rope(&mut self, cursor: Vec2) {
            let aim = cursor - Vec2::splat(VIEWPORT_SIZE / 2.0);
            let dir = match math::normalized(aim) {
                Ok(dir) => dir,
                Err(_) => {
                    log::debug!("Ignoring spawn with a zero-length aim vector");
                    return;
                }
            };
            let origin = self.state.player().pos + dir * PROJECTILE_SPAWN_OFFSET;
            let id = self.state.spawn_projectile(
                origin,
                dir * PROJECTILE_SPEED,
                Vec2::splat(PROJECTILE_SIZE),
            );
            log::debug!("Spawned rope part {id}");
        }

        /// Settings hotkeys; persisted immediately
        fn toggle_setting(&mut self, key: &str) {
            match key {
                "o" => self.settings.outline_objects = !self.settings.outline_objects,
                "f" => self.settings.show_fps = !self.settings.show_fps,
                "l" => self.settings.show_aim_line = !self.settings.show_aim_line,
                _ => return,
            }
            self.settings.save();
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Ropebox starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");
        canvas.set_width(VIEWPORT_SIZE as u32);
        canvas.set_height(VIEWPORT_SIZE as u32);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .expect("failed to get 2d context")
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        let app = Rc::new(RefCell::new(App::new(ctx)));
        setup_input_handlers(&canvas, app.clone());

        request_animation_frame(app);

        log::info!("Ropebox running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, app: Rc<RefCell<App>>) {
        let window = web_sys::window().expect("no window");

        // Keyboard state
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut a = app.borrow_mut();
                let key = event.key();
                if !a.keys.is_pressed(&key) {
                    a.keys.set_down(&key);
                    a.toggle_setting(&key);
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                app.borrow_mut().keys.set_up(&event.key());
            });
            let _ =
                window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Cursor tracking for the aim overlay
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                app.borrow_mut().cursor = Some(Vec2::new(
                    event.offset_x() as f32,
                    event.offset_y() as f32,
                ));
            });
            let _ = canvas
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Click to spawn a rope projectile
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let cursor = Vec2::new(event.offset_x() as f32, event.offset_y() as f32);
                app.borrow_mut().spawn_rope(cursor);
            });
            let _ = canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let window = web_sys::window().expect("no window");
        let closure = Closure::once(move |time: f64| {
            frame_loop(app, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn frame_loop(app: Rc<RefCell<App>>, time: f64) {
        {
            let mut a = app.borrow_mut();

            let dt = if a.last_time > 0.0 {
                ((time - a.last_time) / 1000.0) as f32
            } else {
                TICK_DT
            };
            a.last_time = time;

            a.update(dt, time);
            a.render();
            a.update_hud();
        }

        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_app::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Ropebox (native) starting...");
    log::info!("Native mode is headless - run with `trunk serve` for the web version");

    println!("\nRunning physics smoke test...");
    smoke_test_landing();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn smoke_test_landing() {
    use ropebox::consts::TICK_DT;
    use ropebox::sim::{GameState, TickInput, tick};

    let mut state = GameState::new();
    for _ in 0..60 {
        tick(&mut state, &TickInput::default(), TICK_DT);
    }
    let player = state.player();
    assert!(
        player.player.is_some_and(|p| p.on_surface),
        "player should settle on the floor row"
    );
    println!(
        "✓ Player settled at ({:.1}, {:.1})",
        player.pos.x, player.pos.y
    );
}
