//! Per-pane scroll state backed by egui scroll areas.
//!
//! egui owns the real offset of each `ScrollArea`. A [`PaneScroll`] remembers
//! the last offset it observed and queues offsets the scroll coupler wants
//! written, which are handed to the scroll area on its next `show`.

use egui::ScrollArea;
use rtimeline::{Pane, PaneHandles, ScrollHandle, ScrollOffset};

/// Scroll state of one pane.
#[derive(Debug, Clone, Default)]
pub struct PaneScroll {
    /// Offset observed after the last `show`
    observed: Option<ScrollOffset>,
    /// Horizontal offset to force on the next `show`
    requested_left: Option<u32>,
    /// Vertical offset to force on the next `show`
    requested_top: Option<u32>,
}

impl PaneScroll {
    /// Horizontal offset queued for the next `show`.
    #[cfg(test)]
    pub fn pending_left(&self) -> Option<u32> {
        self.requested_left
    }

    /// Vertical offset queued for the next `show`.
    #[cfg(test)]
    pub fn pending_top(&self) -> Option<u32> {
        self.requested_top
    }

    /// Applies queued writes to a scroll area about to be shown.
    pub fn apply(&mut self, mut area: ScrollArea) -> ScrollArea {
        if let Some(left) = self.requested_left.take() {
            area = area.horizontal_scroll_offset(left as f32);
        }
        if let Some(top) = self.requested_top.take() {
            area = area.vertical_scroll_offset(top as f32);
        }
        area
    }

    /// Records the offset egui reports after `show`.
    ///
    /// # Returns
    /// The new offset if it differs from the previous observation
    pub fn observe(&mut self, offset: egui::Vec2) -> Option<ScrollOffset> {
        let offset = ScrollOffset::new(to_px(offset.x), to_px(offset.y));
        let previous = self.observed.replace(offset);
        (previous != Some(offset)).then_some(offset)
    }
}

impl ScrollHandle for PaneScroll {
    fn set_scroll_left(&mut self, px: u32) {
        self.requested_left = Some(px);
    }

    fn set_scroll_top(&mut self, px: u32) {
        self.requested_top = Some(px);
    }
}

/// The three panes of the timeline.
#[derive(Debug, Clone, Default)]
pub struct PaneScrollSet {
    pub ruler: PaneScroll,
    pub track_list: PaneScroll,
    pub keyframe_list: PaneScroll,
}

impl PaneScrollSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_mut(&mut self, pane: Pane) -> &mut PaneScroll {
        match pane {
            Pane::Ruler => &mut self.ruler,
            Pane::TrackList => &mut self.track_list,
            Pane::KeyframeList => &mut self.keyframe_list,
        }
    }
}

impl PaneHandles for PaneScrollSet {
    fn pane_mut(&mut self, pane: Pane) -> Option<&mut dyn ScrollHandle> {
        Some(self.get_mut(pane))
    }
}

/// Rounds a float offset to whole pixels; negative overscroll counts as 0.
fn to_px(value: f32) -> u32 {
    value.max(0.0).round() as u32
}
