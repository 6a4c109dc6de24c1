//! Canonical time/duration state of the timeline.
//!
//! [`TimelineClock`] is the only place `time` and `duration` are mutated. Both
//! setters quantize first and clamp second, and `set_duration` re-clamps
//! `time` before returning, so no caller can observe `time > duration`.

use crate::config::TimelineConfig;
use crate::quantize::{round_to_ten, TIME_QUANTUM};

/// Bounds enforced by the clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockBounds {
    pub min_time: i64,
    pub min_duration: i64,
    pub max_duration: i64,
    /// Arrow key and spinner step, a multiple of [`TIME_QUANTUM`]
    pub step: i64,
}

impl Default for ClockBounds {
    fn default() -> Self {
        Self::from_config(&TimelineConfig::default())
    }
}

impl ClockBounds {
    pub fn from_config(config: &TimelineConfig) -> Self {
        Self {
            min_time: config.min_time,
            min_duration: config.min_duration,
            max_duration: config.max_duration,
            step: config.time_step.max(TIME_QUANTUM),
        }
    }
}

/// Snapshot of the validated timeline state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineState {
    /// Playhead position in ms
    pub time: i64,
    /// Timeline length in ms
    pub duration: i64,
}

/// Owner of `time` and `duration`.
///
/// Invariants after every call:
/// - `min_time <= time <= duration`
/// - `min_duration <= duration <= max_duration`
/// - both values are multiples of [`TIME_QUANTUM`]
#[derive(Debug, Clone)]
pub struct TimelineClock {
    state: TimelineState,
    bounds: ClockBounds,
}

impl Default for TimelineClock {
    fn default() -> Self {
        Self::new()
    }
}

impl TimelineClock {
    /// Creates a clock at `time = 0`, `duration = 2000`.
    pub fn new() -> Self {
        Self::from_config(&TimelineConfig::default())
    }

    /// Creates a clock from a configuration, validating its initial values.
    pub fn from_config(config: &TimelineConfig) -> Self {
        let config = config.clone().validated();
        let bounds = ClockBounds::from_config(&config);
        let mut clock = Self {
            state: TimelineState {
                time: bounds.min_time,
                duration: bounds.max_duration,
            },
            bounds,
        };
        clock.set_duration(config.initial_duration as f64);
        clock.set_time(config.initial_time as f64);
        clock
    }

    // ===== Queries =====

    /// Current playhead position in ms.
    pub fn time(&self) -> i64 {
        self.state.time
    }

    /// Current timeline length in ms.
    pub fn duration(&self) -> i64 {
        self.state.duration
    }

    /// Both values at once.
    pub fn state(&self) -> TimelineState {
        self.state
    }

    pub fn bounds(&self) -> ClockBounds {
        self.bounds
    }

    // ===== Mutations =====

    /// Sets the playhead position.
    ///
    /// The request is quantized, then clamped into `[min_time, duration]`.
    /// NaN and infinities are ignored.
    ///
    /// # Returns
    /// `true` if the stored time changed
    pub fn set_time(&mut self, requested: f64) -> bool {
        let Some(quantized) = round_to_ten(requested) else {
            log::debug!("Ignoring non-finite time request {requested}");
            return false;
        };
        let time = quantized.clamp(self.bounds.min_time, self.state.duration);

        if time == self.state.time {
            return false;
        }
        log::debug!("Time {} -> {} (requested {requested})", self.state.time, time);
        self.state.time = time;
        true
    }

    /// Sets the timeline length and re-clamps the playhead into it.
    ///
    /// The request is quantized, then clamped into `[min_duration, max_duration]`.
    /// NaN and infinities are ignored.
    ///
    /// # Returns
    /// `true` if either stored value changed
    pub fn set_duration(&mut self, requested: f64) -> bool {
        let Some(quantized) = round_to_ten(requested) else {
            log::debug!("Ignoring non-finite duration request {requested}");
            return false;
        };
        let duration = quantized.clamp(self.bounds.min_duration, self.bounds.max_duration);
        let time = self.state.time.clamp(self.bounds.min_time, duration);

        let changed = duration != self.state.duration || time != self.state.time;
        if changed {
            log::debug!(
                "Duration {} -> {} (requested {requested}), time {} -> {}",
                self.state.duration,
                duration,
                self.state.time,
                time
            );
        }
        self.state = TimelineState { time, duration };
        changed
    }
}
