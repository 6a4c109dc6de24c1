//! The composed timeline: clock, fields, scroll relay, ruler drag and playhead.
//!
//! [`Timeline`] is what a renderer talks to. Every gesture goes through one of
//! its methods, and every method leaves the fields, the clock and the
//! playhead consistent before returning.

use crate::clock::TimelineClock;
use crate::config::TimelineConfig;
use crate::number_input::{EditEvent, NumberInput};
use crate::play_controls::{ControlField, PlayControls};
use crate::playhead::{project_playhead, PlayheadInputs, PlayheadProjection};
use crate::ruler::{RulerGeometry, RulerPointerTracker};
use crate::scroll_coupler::{Pane, PaneHandles, RelayOutcome, ScrollCoupler, ScrollOffset};

/// Addressable parts of the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimelinePart {
    Timeline,
    PlayControls,
    CurrentTimeInput,
    DurationInput,
    Ruler,
    RulerBar,
    TrackList,
    KeyframeList,
    Segment,
    Playhead,
}

impl TimelinePart {
    /// Stable identifier an external harness can look the part up by.
    pub fn test_id(self) -> &'static str {
        match self {
            TimelinePart::Timeline => "timeline",
            TimelinePart::PlayControls => "play-controls",
            TimelinePart::CurrentTimeInput => ControlField::CurrentTime.test_id(),
            TimelinePart::DurationInput => ControlField::Duration.test_id(),
            TimelinePart::Ruler => "ruler",
            TimelinePart::RulerBar => "ruler-bar",
            TimelinePart::TrackList => "track-list",
            TimelinePart::KeyframeList => "keyframe-list",
            TimelinePart::Segment => "segment",
            TimelinePart::Playhead => "playhead",
        }
    }
}

impl From<Pane> for TimelinePart {
    fn from(pane: Pane) -> Self {
        match pane {
            Pane::Ruler => TimelinePart::Ruler,
            Pane::TrackList => TimelinePart::TrackList,
            Pane::KeyframeList => TimelinePart::KeyframeList,
        }
    }
}

/// Headless timeline widget state.
#[derive(Debug, Clone)]
pub struct Timeline {
    config: TimelineConfig,
    clock: TimelineClock,
    controls: PlayControls,
    coupler: ScrollCoupler,
    ruler: RulerPointerTracker,
    viewport_width: f32,
    mounted: bool,
}

impl Default for Timeline {
    fn default() -> Self {
        Self::new(TimelineConfig::default())
    }
}

impl Timeline {
    pub fn new(config: TimelineConfig) -> Self {
        let config = config.validated();
        let clock = TimelineClock::from_config(&config);
        let controls = PlayControls::new(&clock);
        let ruler = RulerPointerTracker::new(config.drag_throttle_secs());

        Self {
            config,
            clock,
            controls,
            coupler: ScrollCoupler::new(),
            ruler,
            viewport_width: 0.0,
            mounted: false,
        }
    }

    // ===== Queries =====

    pub fn config(&self) -> &TimelineConfig {
        &self.config
    }

    pub fn clock(&self) -> &TimelineClock {
        &self.clock
    }

    pub fn controls(&self) -> &PlayControls {
        &self.controls
    }

    pub fn coupler(&self) -> &ScrollCoupler {
        &self.coupler
    }

    pub fn time(&self) -> i64 {
        self.clock.time()
    }

    pub fn duration(&self) -> i64 {
        self.clock.duration()
    }

    /// Width of the ruler bar and of each keyframe segment (1ms = 1px).
    pub fn bar_width(&self) -> f32 {
        self.clock.duration() as f32
    }

    /// Visible width of the scrollable column.
    pub fn viewport_width(&self) -> f32 {
        self.viewport_width
    }

    /// Returns true while the ruler is being dragged.
    pub fn is_dragging_ruler(&self) -> bool {
        self.ruler.is_dragging()
    }

    /// Where the playhead is and whether it shows.
    pub fn playhead(&self) -> PlayheadProjection {
        project_playhead(PlayheadInputs {
            time: self.clock.time(),
            scroll_left: self.coupler.scroll_left(),
            viewport_width: self.viewport_width,
            horizontal_padding: self.config.horizontal_padding,
            controls_column_width: self.config.controls_column_width,
        })
    }

    // ===== Lifecycle =====

    /// First-frame setup: schedules one sync of all panes to offset zero.
    ///
    /// # Returns
    /// `true` the first time it is called
    pub fn mount(&mut self) -> bool {
        if self.mounted {
            return false;
        }
        self.mounted = true;
        self.coupler.schedule_sync(ScrollOffset::default());
        log::debug!("Timeline mounted ({}ms)", self.clock.duration());
        true
    }

    /// Resize notification with the width of the whole timeline.
    pub fn set_root_width(&mut self, width: f32) {
        self.set_viewport_width(width - self.config.controls_column_width);
    }

    /// Resize notification with the width of the scrollable column.
    pub fn set_viewport_width(&mut self, width: f32) {
        let width = width.max(0.0);
        if width != self.viewport_width {
            log::trace!("Viewport width {} -> {}", self.viewport_width, width);
            self.viewport_width = width;
        }
    }

    /// Paint boundary: advances the scroll relay and flushes held-back drag updates.
    pub fn on_frame(&mut self, panes: &mut dyn PaneHandles, now: f64) {
        self.coupler.on_frame(panes);
        if self.ruler.poll(&mut self.clock, now).is_some() {
            self.controls.sync(&self.clock);
        }
    }

    // ===== Gestures =====

    /// Routes a field interaction.
    pub fn handle_input(&mut self, field: ControlField, event: EditEvent) -> bool {
        self.controls.handle(&mut self.clock, field, event)
    }

    /// Gives a field's renderer mutable access, e.g. to consume select-all requests.
    pub fn input_mut(&mut self, field: ControlField) -> &mut NumberInput {
        self.controls.input_mut(field)
    }

    /// A pane reported a new scroll offset.
    pub fn on_scroll(&mut self, pane: Pane, offset: ScrollOffset) -> RelayOutcome {
        self.coupler.on_scroll(pane, offset)
    }

    pub fn ruler_pointer_down(&mut self, client_x: f32, geometry: Option<RulerGeometry>) -> i64 {
        let time = self.ruler.pointer_down(&mut self.clock, client_x, geometry);
        self.controls.sync(&self.clock);
        time
    }

    pub fn ruler_pointer_move(&mut self, client_x: f32, geometry: Option<RulerGeometry>, now: f64) -> Option<i64> {
        let submitted = self.ruler.pointer_move(&mut self.clock, client_x, geometry, now);
        if submitted.is_some() {
            self.controls.sync(&self.clock);
        }
        submitted
    }

    pub fn ruler_pointer_up(&mut self) -> bool {
        self.ruler.pointer_up()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_part_ids() {
        assert_eq!(TimelinePart::CurrentTimeInput.test_id(), "current-time-input");
        assert_eq!(TimelinePart::from(Pane::KeyframeList).test_id(), "keyframe-list");
    }

    #[test]
    fn test_mount_once() {
        let mut timeline = Timeline::default();
        assert!(timeline.mount());
        assert!(timeline.coupler().is_relaying());
        assert!(!timeline.mount());
    }

    #[test]
    fn test_root_width_excludes_controls_column() {
        let mut timeline = Timeline::default();
        timeline.set_root_width(1200.0);
        assert_eq!(timeline.viewport_width(), 900.0);
        timeline.set_root_width(200.0);
        assert_eq!(timeline.viewport_width(), 0.0);
    }

    #[test]
    fn test_ruler_press_updates_time_field() {
        let mut timeline = Timeline::default();
        timeline.ruler_pointer_down(216.0, Some(RulerGeometry::new(16.0)));
        assert_eq!(timeline.time(), 200);
        assert_eq!(timeline.controls().input(ControlField::CurrentTime).displayed_text(), "200");
        assert!(timeline.ruler_pointer_up());
    }
}
