//! Frame timing
//!
//! Turns host timestamps (milliseconds, e.g. from `requestAnimationFrame` or
//! `Instant`) into per-frame deltas in seconds.

/// Derives frame deltas from timestamps, dropping degenerate frames
#[derive(Debug, Clone)]
pub struct FrameClock {
    last_ms: Option<f64>,
    max_dt: f32,
}

impl FrameClock {
    /// `max_dt` is the longest delta (seconds) still considered a real frame
    pub fn new(max_dt: f32) -> Self {
        Self {
            last_ms: None,
            max_dt,
        }
    }

    /// Record a timestamp and return the delta since the previous one
    ///
    /// Returns `None` for the first frame and for deltas that are
    /// non-positive or longer than `max_dt`. The timestamp is remembered
    /// either way, so only that one frame is skipped.
    pub fn advance(&mut self, now_ms: f64) -> Option<f32> {
        let last = self.last_ms.replace(now_ms)?;
        let dt = ((now_ms - last) / 1000.0) as f32;

        if !dt.is_finite() || dt <= 0.0 || dt > self.max_dt {
            log::debug!("Dropping frame with dt={}s", dt);
            return None;
        }

        Some(dt)
    }

    /// Forget the last timestamp (e.g. after resuming from background)
    pub fn reset(&mut self) {
        self.last_ms = None;
    }
}
