use crate::error::GameError;

/// Game tuning parameters.
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Canvas
    pub const CANVAS_ID: &'static str = "gameCanvas";
    pub const CANVAS_WIDTH: f64 = 800.0;
    pub const CANVAS_HEIGHT: f64 = 600.0;

    // Assets
    pub const SPRITE_URL: &'static str = "btmn.png";
    pub const BACKGROUND_URL: &'static str = "gtm.png";

    // Target
    pub const INITIAL_SPEED: f64 = 3.0;
    pub const INITIAL_DX: f64 = 3.0;
    pub const INITIAL_DY: f64 = 3.0;
    pub const SPEED_STEP: f64 = 0.5;
    pub const HALF_EXTENT: f64 = 20.0;
    pub const SPRITE_SIZE: f64 = 40.0;
    pub const FALLBACK_RADIUS: f64 = 20.0;
    pub const FALLBACK_COLOR: &'static str = "#0095dd";

    // Direction-change timer (ms)
    pub const DIRECTION_INTERVAL_MS: u32 = 2000;
    pub const DIRECTION_INTERVAL_STEP_MS: u32 = 100;
    pub const DIRECTION_INTERVAL_MIN_MS: u32 = 500;

    // Background
    pub const BG_SPEED_FACTOR: f64 = 0.5;
    pub const STAR_COUNT: u32 = 50;
    pub const STAR_COLOR: &'static str = "#ffffff";
    pub const SKY_TOP: &'static str = "#0c1445";
    pub const SKY_BOTTOM: &'static str = "#1a1a2e";

    // Score overlay
    pub const SCORE_LABEL: &'static str = "Score: ";
    pub const SCORE_FONT: &'static str = "20px Arial";
    pub const SCORE_COLOR: &'static str = "#fff";
    pub const SCORE_X: f64 = 10.0;
    pub const SCORE_Y: f64 = 25.0;
}

/// Game configuration. Every field falls back to its [`Params`] value.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize), serde(default))]
pub struct GameConfig {
    pub canvas_id: String,
    pub canvas_width: f64,
    pub canvas_height: f64,
    pub sprite_url: String,
    pub background_url: String,
    pub initial_speed: f64,
    pub initial_dx: f64,
    pub initial_dy: f64,
    pub speed_step: f64,
    /// Hit and bounce half-extent. Independent of `sprite_size`.
    pub half_extent: f64,
    pub sprite_size: f64,
    pub fallback_radius: f64,
    pub fallback_color: String,
    pub direction_interval_ms: u32,
    pub direction_interval_step_ms: u32,
    pub direction_interval_min_ms: u32,
    pub bg_speed_factor: f64,
    pub star_count: u32,
    pub star_color: String,
    pub sky_top: String,
    pub sky_bottom: String,
    pub score_label: String,
    pub score_font: String,
    pub score_color: String,
    pub score_x: f64,
    pub score_y: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            canvas_id: Params::CANVAS_ID.to_string(),
            canvas_width: Params::CANVAS_WIDTH,
            canvas_height: Params::CANVAS_HEIGHT,
            sprite_url: Params::SPRITE_URL.to_string(),
            background_url: Params::BACKGROUND_URL.to_string(),
            initial_speed: Params::INITIAL_SPEED,
            initial_dx: Params::INITIAL_DX,
            initial_dy: Params::INITIAL_DY,
            speed_step: Params::SPEED_STEP,
            half_extent: Params::HALF_EXTENT,
            sprite_size: Params::SPRITE_SIZE,
            fallback_radius: Params::FALLBACK_RADIUS,
            fallback_color: Params::FALLBACK_COLOR.to_string(),
            direction_interval_ms: Params::DIRECTION_INTERVAL_MS,
            direction_interval_step_ms: Params::DIRECTION_INTERVAL_STEP_MS,
            direction_interval_min_ms: Params::DIRECTION_INTERVAL_MIN_MS,
            bg_speed_factor: Params::BG_SPEED_FACTOR,
            star_count: Params::STAR_COUNT,
            star_color: Params::STAR_COLOR.to_string(),
            sky_top: Params::SKY_TOP.to_string(),
            sky_bottom: Params::SKY_BOTTOM.to_string(),
            score_label: Params::SCORE_LABEL.to_string(),
            score_font: Params::SCORE_FONT.to_string(),
            score_color: Params::SCORE_COLOR.to_string(),
            score_x: Params::SCORE_X,
            score_y: Params::SCORE_Y,
        }
    }
}

impl GameConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a (possibly partial) JSON override on top of the defaults.
    #[cfg(feature = "serde_json")]
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), GameError> {
        let positive = [
            ("canvas_width", self.canvas_width),
            ("canvas_height", self.canvas_height),
            ("initial_speed", self.initial_speed),
            ("half_extent", self.half_extent),
            ("sprite_size", self.sprite_size),
            ("fallback_radius", self.fallback_radius),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(GameError::InvalidConfig(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }
        // The canvas element only takes whole pixels; bounds must match it.
        for (name, value) in [
            ("canvas_width", self.canvas_width),
            ("canvas_height", self.canvas_height),
        ] {
            if value.fract() != 0.0 || value > f64::from(u32::MAX) {
                return Err(GameError::InvalidConfig(format!(
                    "{name} must be a whole number of pixels, got {value}"
                )));
            }
        }
        if !(self.speed_step.is_finite() && self.speed_step >= 0.0) {
            return Err(GameError::InvalidConfig(format!(
                "speed_step must not be negative, got {}",
                self.speed_step
            )));
        }
        if !self.bg_speed_factor.is_finite() {
            return Err(GameError::InvalidConfig(
                "bg_speed_factor must be finite".to_string(),
            ));
        }
        if self.direction_interval_min_ms == 0 {
            return Err(GameError::InvalidConfig(
                "direction_interval_min_ms must be positive".to_string(),
            ));
        }
        if self.direction_interval_ms < self.direction_interval_min_ms {
            return Err(GameError::InvalidConfig(format!(
                "direction_interval_ms ({}) is below the floor ({})",
                self.direction_interval_ms, self.direction_interval_min_ms
            )));
        }
        Ok(())
    }
}
