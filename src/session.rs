//! One game session: the target, the scrolling backdrop and the score,
//! owned together and handed explicitly to each update.

use glam::DVec2;
use rand::Rng;

use crate::background::BackgroundScroll;
use crate::config::GameConfig;
use crate::target::{Bounds, MotionEvents, Target};

/// Result of a click on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    Hit { score: u32 },
    Miss,
}

/// Strict box test: a click exactly on the edge is a miss.
pub fn is_hit(click: DVec2, center: DVec2, half_extent: f64) -> bool {
    click.x > center.x - half_extent
        && click.x < center.x + half_extent
        && click.y > center.y - half_extent
        && click.y < center.y + half_extent
}

#[derive(Debug, Clone)]
pub struct GameSession {
    pub config: GameConfig,
    pub target: Target,
    pub background: BackgroundScroll,
    pub score: u32,
}

impl GameSession {
    pub fn new(config: GameConfig) -> Self {
        let target = Target::from_config(&config);
        Self {
            config,
            target,
            background: BackgroundScroll::new(),
            score: 0,
        }
    }

    /// Initial heading pick made once before the first frame.
    pub fn start<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.target.randomize_direction(rng);
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::from_config(&self.config)
    }

    /// Per-frame update: move the target, then scroll the backdrop from its
    /// resulting horizontal velocity.
    pub fn tick<R: Rng + ?Sized>(&mut self, now: f64, rng: &mut R) -> MotionEvents {
        let bounds = self.bounds();
        let events = self.target.step(now, &bounds, rng);
        self.background
            .advance(self.target.vel.x, self.config.bg_speed_factor);
        events
    }

    /// Handle a click in canvas-local coordinates at time `now`.
    pub fn click<R: Rng + ?Sized>(
        &mut self,
        x: f64,
        y: f64,
        now: f64,
        rng: &mut R,
    ) -> ClickOutcome {
        if !is_hit(DVec2::new(x, y), self.target.pos, self.config.half_extent) {
            return ClickOutcome::Miss;
        }
        self.score += 1;
        self.target.speed_up(
            self.config.speed_step,
            self.config.direction_interval_step_ms,
            self.config.direction_interval_min_ms,
        );
        self.target.randomize_direction(rng);
        self.target.last_direction_change = Some(now);
        ClickOutcome::Hit { score: self.score }
    }
}
