//! Centralized application state for the timeline viewer.
//!
//! The headless [`Timeline`] owns every rule about time, duration and scroll
//! coupling. The components next to it only hold what egui needs to render
//! it: per-pane scroll handles, the last ruler layout and the theme.

use rtimeline::{Timeline, TimelineConfig};
use crate::state::{InteractionState, PaneScrollSet, ThemeState};

/// Main application state composed of focused state components.
pub struct AppState {
    // ===== Focused State Components =====
    /// The timeline widget core
    pub timeline: Timeline,

    /// egui-backed scroll handles of the three panes
    pub panes: PaneScrollSet,

    /// Layout facts captured during rendering
    pub interaction: InteractionState,

    /// Theme and styling state
    pub theme: ThemeState,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(TimelineConfig::default(), ThemeState::new())
    }
}

impl AppState {
    /// Creates a new application state from a configuration and theme.
    pub fn new(config: TimelineConfig, theme: ThemeState) -> Self {
        Self {
            timeline: Timeline::new(config),
            panes: PaneScrollSet::new(),
            interaction: InteractionState::new(),
            theme,
        }
    }

    /// Creates a new AppState with a specific theme loaded from storage.
    pub fn with_theme(config: TimelineConfig, theme_name: String) -> Self {
        Self::new(config, ThemeState::with_theme(theme_name))
    }

    // ===== High-Level Coordination Methods =====

    /// Frame boundary: mounts the timeline once, then advances the scroll
    /// relay and flushes throttled ruler updates.
    ///
    /// # Arguments
    /// * `now` - egui input time in seconds
    pub fn begin_frame(&mut self, now: f64) {
        self.timeline.mount();
        self.timeline.on_frame(&mut self.panes, now);
    }

    /// Returns true while the core is waiting on a future frame.
    pub fn needs_repaint(&self) -> bool {
        self.timeline.coupler().is_relaying() || self.timeline.is_dragging_ruler()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rtimeline::{Pane, ScrollOffset};

    #[test]
    fn test_first_frame_syncs_panes_to_zero() {
        let mut state = AppState::default();
        state.begin_frame(0.0);
        // Writes go out on the mount frame, the guard is released one frame later
        assert_eq!(state.panes.keyframe_list.pending_left(), Some(0));
        assert_eq!(state.panes.keyframe_list.pending_top(), Some(0));
        assert!(state.needs_repaint());

        state.begin_frame(0.016);
        assert!(!state.needs_repaint());
    }

    #[test]
    fn test_keyframe_scroll_reaches_ruler_handle() {
        let mut state = AppState::default();
        for frame in 0..3 {
            state.begin_frame(frame as f64 * 0.016);
        }
        // Rendering hands the mount sync to the scroll areas
        let _ = state.panes.ruler.apply(egui::ScrollArea::horizontal());
        let _ = state.panes.track_list.apply(egui::ScrollArea::vertical());

        state.timeline.on_scroll(Pane::KeyframeList, ScrollOffset::new(150, 0));
        assert_eq!(state.panes.ruler.pending_left(), None);
        state.begin_frame(0.048);

        assert_eq!(state.panes.ruler.pending_left(), Some(150));
        assert_eq!(state.panes.track_list.pending_top(), Some(0));
        assert_eq!(state.timeline.coupler().scroll_left(), 150);
    }
}
