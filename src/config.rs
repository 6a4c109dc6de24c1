//! Timeline configuration: bounds, steps and layout metrics.
//!
//! Stored as JSON (either a file given on the command line or the eframe
//! settings store). Missing fields fall back to their defaults.

use serde::{Deserialize, Serialize};

use crate::quantize::{align_down, align_up, TIME_QUANTUM};

/// Static configuration of a timeline widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineConfig {
    /// Playhead position on startup, in ms
    pub initial_time: i64,
    /// Timeline length on startup, in ms
    pub initial_duration: i64,
    /// Lowest allowed time, in ms
    pub min_time: i64,
    /// Shortest allowed duration, in ms
    pub min_duration: i64,
    /// Longest allowed duration, in ms
    pub max_duration: i64,
    /// Step used by arrow keys and spinner buttons, in ms
    pub time_step: i64,
    /// Inset on both sides of the ruler bar and keyframe segments, in px
    pub horizontal_padding: f32,
    /// Width of the play controls / track label column, in px
    pub controls_column_width: f32,
    /// Height of the play controls / ruler row, in px
    pub header_height: f32,
    /// Height of one track row, in px
    pub track_row_height: f32,
    /// Minimum spacing between two ruler drag updates, in ms
    pub drag_throttle_ms: u64,
    /// Labels of the static track rows
    pub track_labels: Vec<String>,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            initial_time: 0,
            initial_duration: 2000,
            min_time: 0,
            min_duration: 100,
            max_duration: 6000,
            time_step: 10,
            horizontal_padding: 16.0,
            controls_column_width: 300.0,
            header_height: 40.0,
            track_row_height: 40.0,
            drag_throttle_ms: 10,
            track_labels: ('A'..='J').map(|c| format!("Track {c}")).collect(),
        }
    }
}

impl TimelineConfig {
    /// Returns a copy with inconsistent values repaired.
    ///
    /// Swapped duration bounds are reordered, the step and the bounds are
    /// aligned to [`TIME_QUANTUM`] (lower bounds up, upper bounds down),
    /// negative metrics become 0, and the initial values are pulled into range.
    pub fn validated(mut self) -> Self {
        self.time_step = align_up(self.time_step.max(1), TIME_QUANTUM);
        self.min_time = align_up(self.min_time.max(0), TIME_QUANTUM);
        if self.min_duration > self.max_duration {
            std::mem::swap(&mut self.min_duration, &mut self.max_duration);
        }
        self.min_duration = align_up(self.min_duration.max(self.min_time), TIME_QUANTUM);
        self.max_duration = align_down(self.max_duration, TIME_QUANTUM).max(self.min_duration);
        self.initial_duration = self.initial_duration.clamp(self.min_duration, self.max_duration);
        self.initial_time = self.initial_time.clamp(self.min_time, self.initial_duration);
        self.horizontal_padding = self.horizontal_padding.max(0.0);
        self.controls_column_width = self.controls_column_width.max(0.0);
        self.header_height = self.header_height.max(0.0);
        self.track_row_height = self.track_row_height.max(1.0);
        self
    }

    /// Parses a configuration from JSON and validates it.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str::<Self>(json).map(Self::validated)
    }

    /// Drag throttle interval in seconds, the unit egui reports input time in.
    pub fn drag_throttle_secs(&self) -> f64 {
        self.drag_throttle_ms as f64 / 1000.0
    }
}
