//! Playhead overlay.
//!
//! Drawn after the panes so it sits on top of them. A hidden playhead is
//! neither painted nor allocated, so it cannot be hovered or hit.

use egui::{Sense, WidgetInfo};
use rtimeline::playhead::MARKER_WIDTH;
use rtimeline::{TimelinePalette, TimelinePart};
use crate::app::AppState;

/// Size of the triangular head above the line
const HEAD_SIZE: f32 = 5.0;

/// Renders the playhead over the scrollable column of the timeline.
///
/// # Arguments
/// * `ui` - UI covering the whole timeline
/// * `state` - Application state
/// * `timeline_rect` - Screen rect of the timeline
/// * `palette` - Colors of the current theme
pub fn render_playhead(
    ui: &mut egui::Ui,
    state: &AppState,
    timeline_rect: egui::Rect,
    palette: &TimelinePalette,
) {
    let projection = state.timeline.playhead();
    if !projection.visible {
        return;
    }

    let marker_left = projection.marker_left(timeline_rect.left());
    let marker_rect = egui::Rect::from_min_max(
        egui::pos2(marker_left, timeline_rect.top()),
        egui::pos2(marker_left + MARKER_WIDTH, timeline_rect.bottom()),
    );

    // Clip to the scrollable column so the head never covers the controls
    let column_left = timeline_rect.left() + state.timeline.config().controls_column_width;
    let clip = egui::Rect::from_min_max(egui::pos2(column_left, timeline_rect.top()), timeline_rect.max);
    let painter = ui.painter_at(clip);

    painter.rect_filled(marker_rect, 0.0, palette.playhead);
    let center_x = marker_rect.center().x;
    painter.add(egui::Shape::convex_polygon(
        vec![
            egui::pos2(center_x - HEAD_SIZE, timeline_rect.top()),
            egui::pos2(center_x + HEAD_SIZE, timeline_rect.top()),
            egui::pos2(center_x, timeline_rect.top() + HEAD_SIZE),
        ],
        palette.playhead,
        egui::Stroke::NONE,
    ));

    let time = state.timeline.time();
    let response = ui.interact(marker_rect, egui::Id::new(TimelinePart::Playhead.test_id()), Sense::hover());
    response.widget_info(|| WidgetInfo::slider(true, time as f64, "Playhead"));
}
