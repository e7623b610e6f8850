//! Browser runtime: canvas lookup, asset loading, the animation-frame loop
//! and the click listener. All gameplay decisions live in `session`.

use glam::DVec2;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, MouseEvent, window};

use crate::assets::load_game_images;
use crate::clock::{FrameClock, performance_now};
use crate::config::GameConfig;
use crate::error::GameError;
use crate::render::{CanvasSurface, SceneAssets, draw_frame};
use crate::session::{ClickOutcome, GameSession};

/// Runtime state shared by the frame callback and the click handler.
struct GameState {
    session: GameSession,
    rng: SmallRng,
    clock: FrameClock,
    surface: CanvasSurface,
    assets: SceneAssets,
    // Draw errors repeat every frame; report the first one only.
    draw_error_reported: bool,
}

thread_local! {
    static GAME_STATE: RefCell<Option<GameState>> = const { RefCell::new(None) };
    // Set from the first line of `start` until it returns, across the asset await.
    static STARTING: Cell<bool> = const { Cell::new(false) };
}

/// Holds the start slot while a `start` call is in flight.
struct StartReservation;

impl StartReservation {
    fn acquire() -> Result<Self, GameError> {
        if STARTING.get() || GAME_STATE.with(|s| s.borrow().is_some()) {
            return Err(GameError::AlreadyStarted);
        }
        STARTING.set(true);
        Ok(StartReservation)
    }
}

impl Drop for StartReservation {
    fn drop(&mut self) {
        STARTING.set(false);
    }
}

/// Start the game. Only one game runs per page: a second call, even one
/// made while the first is still loading images, fails with
/// `GameError::AlreadyStarted`.
pub async fn start(mut config: GameConfig) -> Result<(), GameError> {
    config.validate()?;
    let _reservation = StartReservation::acquire()?;

    let win = window().ok_or(GameError::NoWindow)?;
    let doc = win.document().ok_or(GameError::NoDocument)?;
    let canvas = find_or_create_canvas(&doc, &mut config)?;
    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or(GameError::NoContext)?
        .dyn_into()
        .map_err(|_| GameError::NoContext)?;

    // The loop only starts once both images have settled, so the tile width
    // is known before the first scroll computation.
    let images = load_game_images(&config.sprite_url, &config.background_url).await?;
    let surface = CanvasSurface::new(ctx, images.sprite, images.background);
    let assets = surface.scene_assets();
    if assets.tile_width <= 0.0 {
        return Err(GameError::InvalidTileWidth(assets.tile_width));
    }

    let mut rng = SmallRng::from_entropy();
    let mut session = GameSession::new(config);
    session.start(&mut rng);

    console_log!(
        "bat-chase: started on {}x{} canvas (tile {}x{}, sprite loaded: {})",
        session.config.canvas_width,
        session.config.canvas_height,
        assets.tile_width,
        assets.tile_height,
        assets.sprite_loaded
    );

    GAME_STATE.with(|s| {
        s.replace(Some(GameState {
            session,
            rng,
            clock: FrameClock::new(),
            surface,
            assets,
            draw_error_reported: false,
        }))
    });

    install_click_listener(&canvas)?;
    start_frame_loop();
    Ok(())
}

/// Reuse the page's canvas (adopting its size) or create one at the
/// configured size.
fn find_or_create_canvas(
    doc: &Document,
    config: &mut GameConfig,
) -> Result<HtmlCanvasElement, GameError> {
    if let Some(el) = doc.get_element_by_id(&config.canvas_id) {
        let canvas: HtmlCanvasElement = el
            .dyn_into()
            .map_err(|_| GameError::CanvasNotFound(config.canvas_id.clone()))?;
        if canvas.width() > 0 && canvas.height() > 0 {
            config.canvas_width = f64::from(canvas.width());
            config.canvas_height = f64::from(canvas.height());
        }
        return Ok(canvas);
    }
    let canvas: HtmlCanvasElement = doc
        .create_element("canvas")?
        .dyn_into()
        .map_err(|_| GameError::CanvasNotFound(config.canvas_id.clone()))?;
    canvas.set_id(&config.canvas_id);
    canvas.set_width(config.canvas_width as u32);
    canvas.set_height(config.canvas_height as u32);
    doc.body().ok_or(GameError::NoDocument)?.append_child(&canvas)?;
    Ok(canvas)
}

fn install_click_listener(canvas: &HtmlCanvasElement) -> Result<(), GameError> {
    let target_canvas = canvas.clone();
    let closure = Closure::wrap(Box::new(move |evt: MouseEvent| {
        let point = click_position(&target_canvas, &evt);
        let now = performance_now();
        GAME_STATE.with(|cell| {
            if let Some(state) = cell.borrow_mut().as_mut() {
                let outcome = state.session.click(point.x, point.y, now, &mut state.rng);
                if let ClickOutcome::Hit { score } = outcome {
                    console_log!(
                        "hit: score {} speed {} interval {}ms",
                        score,
                        state.session.target.speed,
                        state.session.target.direction_interval_ms
                    );
                }
            }
        });
    }) as Box<dyn FnMut(_)>);
    canvas.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Canvas-local position of a mouse event.
pub fn click_position(canvas: &HtmlCanvasElement, evt: &MouseEvent) -> DVec2 {
    let rect = canvas.get_bounding_client_rect();
    to_canvas_space(
        f64::from(evt.client_x()),
        f64::from(evt.client_y()),
        rect.left(),
        rect.top(),
    )
}

/// Client coordinates minus the canvas' top-left corner.
pub fn to_canvas_space(client_x: f64, client_y: f64, left: f64, top: f64) -> DVec2 {
    DVec2::new(client_x - left, client_y - top)
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

fn start_frame_loop() {
    let f: FrameCallback = Rc::new(RefCell::new(None));
    let g = f.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move |ts: f64| {
        GAME_STATE.with(|state_cell| {
            if let Some(state) = state_cell.borrow_mut().as_mut() {
                game_tick(state, ts);
            }
        });
        request_frame(&f);
    }) as Box<dyn FnMut(f64)>));
    request_frame(&g);
}

fn request_frame(cb: &FrameCallback) {
    if let (Some(w), Some(closure)) = (window(), cb.borrow().as_ref()) {
        let _ = w.request_animation_frame(closure.as_ref().unchecked_ref());
    }
}

fn game_tick(state: &mut GameState, ts: f64) {
    let tick = state.clock.advance(ts);
    state.session.tick(tick.now, &mut state.rng);
    if let Err(err) = draw_frame(&mut state.surface, &state.session, &state.assets) {
        if !state.draw_error_reported {
            console_warn!("frame {}: {}", tick.frame, err);
            state.draw_error_reported = true;
        }
    }
}
