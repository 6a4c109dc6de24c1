//! Playhead position and visibility.
//!
//! Pure derivation from the clock and the horizontal scroll offset; nothing
//! here is cached between frames.

/// Width of the playhead marker line in px. The marker is centered on its position.
pub const MARKER_WIDTH: f32 = 2.0;

/// Inputs of one projection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayheadInputs {
    /// Current time in ms (1ms = 1px)
    pub time: i64,
    /// Horizontal offset of the ruler/keyframe pane group
    pub scroll_left: u32,
    /// Visible width of the scrollable column
    pub viewport_width: f32,
    /// Inset between the column's left edge and time zero
    pub horizontal_padding: f32,
    /// Width of the fixed column left of the scrollable one
    pub controls_column_width: f32,
}

/// Where the playhead goes, relative to the timeline's left edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayheadProjection {
    /// Fixed anchor: controls column plus padding
    pub anchor_x: f32,
    /// Translation from the anchor: `time - scroll_left`
    pub offset_x: f32,
    /// Hidden playheads are not drawn and not hit-testable
    pub visible: bool,
}

impl PlayheadProjection {
    /// Center of the marker, given the timeline's left edge on screen.
    pub fn center_x(&self, timeline_left: f32) -> f32 {
        timeline_left + self.anchor_x + self.offset_x
    }

    /// Left edge of the marker line.
    pub fn marker_left(&self, timeline_left: f32) -> f32 {
        self.center_x(timeline_left) - MARKER_WIDTH / 2.0
    }

    /// Translation of the marker's left edge from the anchor.
    pub fn marker_translate_x(&self) -> f32 {
        self.offset_x - MARKER_WIDTH / 2.0
    }
}

/// Projects the playhead for the given inputs.
///
/// Visible iff `0 <= time + padding - scroll_left <= viewport_width`.
pub fn project_playhead(inputs: PlayheadInputs) -> PlayheadProjection {
    let offset_x = inputs.time as f32 - inputs.scroll_left as f32;
    let from_column_edge = offset_x + inputs.horizontal_padding;

    PlayheadProjection {
        anchor_x: inputs.controls_column_width + inputs.horizontal_padding,
        offset_x,
        visible: from_column_edge >= 0.0 && from_column_edge <= inputs.viewport_width,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(time: i64, scroll_left: u32, viewport_width: f32) -> PlayheadInputs {
        PlayheadInputs {
            time,
            scroll_left,
            viewport_width,
            horizontal_padding: 16.0,
            controls_column_width: 300.0,
        }
    }

    #[test]
    fn test_offset_follows_scroll() {
        let at_zero = project_playhead(inputs(500, 0, 900.0));
        let at_100 = project_playhead(inputs(500, 100, 900.0));
        let at_200 = project_playhead(inputs(500, 200, 900.0));

        assert_eq!(at_zero.offset_x, 500.0);
        assert_eq!(at_100.offset_x, at_zero.offset_x - 100.0);
        assert_eq!(at_200.offset_x, at_zero.offset_x - 200.0);
        assert_eq!(at_zero.anchor_x, 316.0);
    }

    #[test]
    fn test_marker_is_centered() {
        let projection = project_playhead(inputs(400, 0, 900.0));
        assert_eq!(projection.marker_translate_x(), 399.0);
        assert_eq!(projection.center_x(10.0), 726.0);
        assert_eq!(projection.marker_left(10.0), 725.0);
    }

    #[test]
    fn test_visibility_lower_boundary() {
        // time + 16 - scroll_left == 0
        assert!(project_playhead(inputs(0, 16, 500.0)).visible);
        assert!(!project_playhead(inputs(0, 17, 500.0)).visible);
    }

    #[test]
    fn test_visibility_upper_boundary() {
        // time + 16 - scroll_left == W
        assert!(project_playhead(inputs(484, 0, 500.0)).visible);
        assert!(!project_playhead(inputs(490, 0, 500.0)).visible);
        assert!(project_playhead(inputs(584, 100, 500.0)).visible);
    }

    #[test]
    fn test_hidden_when_scrolled_far_away() {
        assert!(project_playhead(inputs(0, 0, 900.0)).visible);
        assert!(!project_playhead(inputs(0, 2000, 900.0)).visible);
    }

    #[test]
    fn test_zero_width_viewport() {
        assert!(!project_playhead(inputs(100, 0, 0.0)).visible);
        assert!(project_playhead(inputs(0, 16, 0.0)).visible);
    }
}
