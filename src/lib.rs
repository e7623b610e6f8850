//! Bat Chase core crate.
//!
//! A single sprite bounces over a scrolling city skyline; clicking it scores a
//! point and makes it faster and more erratic. Gameplay (`target`,
//! `background`, `session`) is plain Rust and runs natively under
//! `cargo test`; `game`, `assets` and the canvas half of `render` are the
//! browser glue exposed through `start_game()`.

use wasm_bindgen::prelude::*;

#[macro_use]
mod log;

pub mod assets;
pub mod background;
pub mod clock;
pub mod config;
pub mod error;
pub mod game;
pub mod render;
pub mod session;
pub mod target;

pub use background::{BackgroundScroll, TileDraw, visible_offset};
pub use clock::{FrameClock, FrameTick};
pub use config::{GameConfig, Params};
pub use error::GameError;
pub use render::{ImageId, SceneAssets, Surface, draw_frame};
pub use session::{ClickOutcome, GameSession, is_hit};
pub use target::{Bounds, MotionEvents, Target};

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

// -----------------------------------------------------------------------------
// Entrypoints
// -----------------------------------------------------------------------------

/// Load both images, then start the frame loop on `#gameCanvas`.
#[wasm_bindgen]
pub async fn start_game() -> Result<(), JsValue> {
    game::start(GameConfig::default()).await?;
    Ok(())
}

/// Like `start_game`, with a JSON object overriding any `GameConfig` field.
#[cfg(feature = "serde_json")]
#[wasm_bindgen]
pub async fn start_game_with_config(config_json: String) -> Result<(), JsValue> {
    let config = GameConfig::from_json(&config_json)?;
    game::start(config).await?;
    Ok(())
}
