//! Bubble Pop entry point
//!
//! Handles platform-specific initialization and runs the frame loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlElement, MouseEvent};

    use bubble_pop::input::{PointerEvent, SurfaceRect, handle_pointer};
    use bubble_pop::sim::{Bounds, SimState, tick_with_fps};
    use bubble_pop::{PlatformError, SimConfig};

    const CANVAS_ID: &str = "canvas";
    const CONTAINER_SELECTOR: &str = ".canvas-container";

    /// App instance holding all state
    struct App {
        state: SimState,
        ctx: CanvasRenderingContext2d,
        // FPS tracking
        frame_times: [f64; 60],
        frame_index: usize,
        fps: u32,
    }

    impl App {
        fn new(state: SimState, ctx: CanvasRenderingContext2d) -> Self {
            Self {
                state,
                ctx,
                frame_times: [0.0; 60],
                frame_index: 0,
                fps: 0,
            }
        }

        /// Track frame times and derive FPS over the last 60 frames
        fn track_fps(&mut self, time: f64) {
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

        /// Run one simulation frame into the canvas
        fn frame(&mut self, time: f64) {
            self.track_fps(time);
            let fps = (self.fps > 0).then_some(self.fps);
            tick_with_fps(&mut self.state, &mut self.ctx, fps);
        }
    }

    fn canvas_rect(canvas: &HtmlCanvasElement) -> SurfaceRect {
        let rect = canvas.get_bounding_client_rect();
        SurfaceRect {
            left: rect.left() as f32,
            top: rect.top() as f32,
        }
    }

    /// Config JSON from the canvas `data-config` attribute, if any
    fn load_config(canvas: &HtmlCanvasElement) -> SimConfig {
        match canvas.get_attribute("data-config") {
            Some(json) => SimConfig::from_json_or_default(&json),
            None => SimConfig::default(),
        }
    }

    pub fn run() -> Result<(), PlatformError> {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::warn_1(&format!("logger init failed: {}", e).into());
        }

        log::info!("Bubble Pop starting...");

        let window = web_sys::window().ok_or(PlatformError::NoWindow)?;
        let document = window.document().ok_or(PlatformError::NoDocument)?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id(CANVAS_ID)
            .ok_or(PlatformError::MissingElement(CANVAS_ID))?
            .dyn_into()
            .map_err(|_| PlatformError::NotACanvas(CANVAS_ID))?;

        let config = load_config(&canvas);

        // Size once from the viewport; resizes are not tracked
        let window_height = window.inner_height()?.as_f64().unwrap_or(0.0) as f32;
        let container = document
            .query_selector(CONTAINER_SELECTOR)?
            .and_then(|el| match el.dyn_into::<HtmlElement>() {
                Ok(el) => Some(el),
                Err(_) => {
                    log::warn!("{} is not an HTML element, using window width", CONTAINER_SELECTOR);
                    None
                }
            });
        let window_width = window.inner_width()?.as_f64().unwrap_or(0.0) as f32;
        let bounds = Bounds::from_viewport(
            container.map(|el| el.offset_width() as f32),
            window_width,
            window_height,
            config.height_fraction,
        );
        canvas.set_width(bounds.width as u32);
        canvas.set_height(bounds.height as u32);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or(PlatformError::NoContext)?
            .dyn_into()
            .map_err(|_| PlatformError::NoContext)?;

        let seed = config.seed.unwrap_or_else(|| js_sys::Date::now() as u64);
        let state = SimState::new(seed, bounds, config);
        log::info!(
            "Simulation initialized with seed {} ({}x{})",
            seed,
            bounds.width,
            bounds.height
        );

        let app = Rc::new(RefCell::new(App::new(state, ctx)));

        setup_input_handlers(&canvas, app.clone())?;

        request_animation_frame(app);

        log::info!("Bubble Pop running!");
        Ok(())
    }

    fn setup_input_handlers(
        canvas: &HtmlCanvasElement,
        app: Rc<RefCell<App>>,
    ) -> Result<(), PlatformError> {
        // Mouse move - highlight hovered particles
        {
            let app = app.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let rect = canvas_rect(&canvas_clone);
                let pointer = PointerEvent::moved(event.client_x() as f32, event.client_y() as f32);
                handle_pointer(&mut app.borrow_mut().state, pointer, rect);
            });
            canvas.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Click - fade particles under the pointer
        {
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let rect = canvas_rect(&canvas_clone);
                let pointer = PointerEvent::clicked(event.client_x() as f32, event.client_y() as f32);
                handle_pointer(&mut app.borrow_mut().state, pointer, rect);
            });
            canvas.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            log::error!("Window gone, stopping frame loop");
            return;
        };
        let closure = Closure::once(move |time: f64| {
            frame_loop(app, time);
        });
        if let Err(e) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {:?}", e);
        }
        closure.forget();
    }

    fn frame_loop(app: Rc<RefCell<App>>, time: f64) {
        app.borrow_mut().frame(time);
        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_app::run().map_err(|e| {
        log::error!("Startup failed: {}", e);
        JsValue::from_str(&e.to_string())
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Bubble Pop (native) starting...");
    log::info!("Native mode runs headless - serve the wasm build for the canvas version");

    let config = match std::env::args().nth(1) {
        Some(path) => match bubble_pop::SimConfig::from_file(&path) {
            Ok(config) => {
                log::info!("Loaded config from {}", path);
                config
            }
            Err(e) => {
                log::warn!("Ignoring config {}: {}", path, e);
                bubble_pop::SimConfig::default()
            }
        },
        None => bubble_pop::SimConfig::default(),
    };

    headless::run(config);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use bubble_pop::SimConfig;
    use bubble_pop::input::{PointerEvent, SurfaceRect, handle_pointer};
    use bubble_pop::render::RecordingSurface;
    use bubble_pop::sim::{Bounds, SimState, tick};

    /// Viewport the headless demo pretends to have
    const VIEWPORT: (f32, f32) = (1280.0, 900.0);
    /// Frames between scripted clicks
    const CLICK_INTERVAL: u32 = 15;

    /// Drive the simulation without a screen, clicking a particle now and
    /// then so the level mechanic gets exercised
    pub fn run(config: SimConfig) {
        let seed = config.seed.unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or(0)
        });
        let frames = config.headless_frames;
        let bounds = Bounds::from_viewport(None, VIEWPORT.0, VIEWPORT.1, config.height_fraction);
        let mut state = SimState::new(seed, bounds, config);
        let mut surface = RecordingSurface::new();
        let mut circles_drawn = 0;

        log::info!("Running {} frames with seed {}", frames, seed);

        for frame in 0..frames {
            if frame % CLICK_INTERVAL == 0 {
                let target = state.particles.iter().find(|p| !p.fading).map(|p| p.pos);
                if let Some(pos) = target {
                    handle_pointer(&mut state, PointerEvent::moved(pos.x, pos.y), SurfaceRect::default());
                    handle_pointer(&mut state, PointerEvent::clicked(pos.x, pos.y), SurfaceRect::default());
                }
            }

            surface.clear();
            tick(&mut state, &mut surface);
            circles_drawn += surface.circle_count();
        }

        log::info!(
            "Done: frame {}, level {}, {} live, {} drawn in total",
            state.frame,
            state.level,
            state.particles.len(),
            circles_drawn
        );
        for line in surface.texts() {
            println!("{}", line);
        }
    }
}
