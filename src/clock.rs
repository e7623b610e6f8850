//! Frame clock: turns the timestamps handed to the animation-frame callback
//! into a monotonic sequence of ticks.

/// One frame as seen by the update step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTick {
    /// Milliseconds on the `performance.now()` timeline.
    pub now: f64,
    /// Zero-based frame index.
    pub frame: u64,
}

#[derive(Debug, Default, Clone)]
pub struct FrameClock {
    last: Option<f64>,
    frames: u64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new frame. A timestamp earlier than the previous one is
    /// clamped to the previous value so time never runs backwards.
    pub fn advance(&mut self, ts: f64) -> FrameTick {
        let now = match self.last {
            Some(prev) if ts < prev || ts.is_nan() => prev,
            _ => ts,
        };
        let tick = FrameTick {
            now,
            frame: self.frames,
        };
        self.last = Some(now);
        self.frames += 1;
        tick
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn last(&self) -> Option<f64> {
        self.last
    }
}

/// Milliseconds on the same timeline as animation-frame timestamps.
pub fn performance_now() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}
