//! The bouncing target: per-frame motion, wall reflection and the
//! direction-change timer.
//!
//! Motion is integrated per frame (`pos += vel`), not per elapsed
//! millisecond, so displacement depends on the display refresh rate.

use glam::DVec2;
use rand::Rng;
use std::f64::consts::TAU;

use crate::config::GameConfig;

/// Axis-aligned play area the target bounces inside.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
    /// Collision half-extent, fixed regardless of the drawn sprite size.
    pub half_extent: f64,
}

impl Bounds {
    pub fn from_config(config: &GameConfig) -> Self {
        Self {
            width: config.canvas_width,
            height: config.canvas_height,
            half_extent: config.half_extent,
        }
    }
}

/// What happened to the target during one frame.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MotionEvents {
    pub bounced_x: bool,
    pub bounced_y: bool,
    pub redirected: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Target {
    pub pos: DVec2,
    pub vel: DVec2,
    pub speed: f64,
    pub direction_interval_ms: u32,
    /// Set lazily on the first frame.
    pub last_direction_change: Option<f64>,
}

impl Target {
    pub fn new(pos: DVec2, vel: DVec2, speed: f64, direction_interval_ms: u32) -> Self {
        Self {
            pos,
            vel,
            speed,
            direction_interval_ms,
            last_direction_change: None,
        }
    }

    /// Target at the canvas centre with the configured starting velocity.
    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(
            DVec2::new(config.canvas_width / 2.0, config.canvas_height / 2.0),
            DVec2::new(config.initial_dx, config.initial_dy),
            config.initial_speed,
            config.direction_interval_ms,
        )
    }

    /// Pick a uniformly random heading in `[0, 2π)` at the current speed.
    pub fn randomize_direction<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let angle = rng.gen_range(0.0..TAU);
        self.set_heading(angle);
    }

    pub fn set_heading(&mut self, angle: f64) {
        self.vel = DVec2::from_angle(angle) * self.speed;
    }

    pub fn integrate(&mut self) {
        self.pos += self.vel;
    }

    /// Flip the velocity component of every axis whose box pokes past a
    /// canvas edge. The position is left where it is.
    pub fn reflect_walls(&mut self, bounds: &Bounds) -> (bool, bool) {
        let h = bounds.half_extent;
        let bounce_x = self.pos.x + h > bounds.width || self.pos.x - h < 0.0;
        let bounce_y = self.pos.y + h > bounds.height || self.pos.y - h < 0.0;
        if bounce_x {
            self.vel.x = -self.vel.x;
        }
        if bounce_y {
            self.vel.y = -self.vel.y;
        }
        (bounce_x, bounce_y)
    }

    /// Advance the direction-change timer. Returns `true` when the heading
    /// was randomized this frame.
    pub fn tick_timer<R: Rng + ?Sized>(&mut self, now: f64, rng: &mut R) -> bool {
        let last = *self.last_direction_change.get_or_insert(now);
        let elapsed = now - last;
        if elapsed > f64::from(self.direction_interval_ms) {
            self.randomize_direction(rng);
            self.last_direction_change = Some(now);
            true
        } else {
            false
        }
    }

    /// One frame: integrate, reflect, then run the timer.
    pub fn step<R: Rng + ?Sized>(
        &mut self,
        now: f64,
        bounds: &Bounds,
        rng: &mut R,
    ) -> MotionEvents {
        self.integrate();
        let (bounced_x, bounced_y) = self.reflect_walls(bounds);
        let redirected = self.tick_timer(now, rng);
        MotionEvents {
            bounced_x,
            bounced_y,
            redirected,
        }
    }

    /// Apply the speed-up that follows a successful hit. The interval never
    /// drops below `min_ms`.
    pub fn speed_up(&mut self, speed_step: f64, interval_step_ms: u32, min_ms: u32) {
        self.speed += speed_step;
        self.direction_interval_ms = self
            .direction_interval_ms
            .saturating_sub(interval_step_ms)
            .max(min_ms);
    }
}
