//! Fixed-interval rate limiter with last-value-wins semantics.
//!
//! Timestamps are seconds as `f64`, the same clock egui reports as
//! `InputState::time`, so callers and tests pass time in explicitly.

/// Lets at most one value through per interval.
///
/// The first value after a quiet period passes immediately. Values submitted
/// inside the window overwrite a single pending slot; the slot is delivered by
/// the next [`submit`](Self::submit) or [`poll`](Self::poll) after the window.
#[derive(Debug, Clone)]
pub struct Throttle<T> {
    interval: f64,
    last_fire: Option<f64>,
    pending: Option<T>,
}

impl<T> Throttle<T> {
    /// Creates a throttle with the given interval in seconds.
    pub fn new(interval: f64) -> Self {
        Self {
            interval: interval.max(0.0),
            last_fire: None,
            pending: None,
        }
    }

    pub fn interval(&self) -> f64 {
        self.interval
    }

    /// Returns true if a value is waiting for the window to pass.
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Offers a value at time `now`.
    ///
    /// # Returns
    /// The value to apply now, if the window allows one
    pub fn submit(&mut self, now: f64, value: T) -> Option<T> {
        if self.window_open(now) {
            self.last_fire = Some(now);
            self.pending = None;
            Some(value)
        } else {
            self.pending = Some(value);
            None
        }
    }

    /// Releases the pending value once the window has passed.
    pub fn poll(&mut self, now: f64) -> Option<T> {
        if self.pending.is_some() && self.window_open(now) {
            self.last_fire = Some(now);
            self.pending.take()
        } else {
            None
        }
    }

    /// Drops the pending value and forgets the last fire time.
    pub fn reset(&mut self) {
        self.last_fire = None;
        self.pending = None;
    }

    fn window_open(&self, now: f64) -> bool {
        self.last_fire.map_or(true, |last| now - last >= self.interval)
    }
}
