//! Keyframe pane: one segment per track, scrollable on both axes.

use egui::{ScrollArea, Sense};
use rtimeline::{Pane, TimelinePalette, TimelinePart};
use crate::app::AppState;
use crate::ui::ruler_panel::{RULER_BAR_HEIGHT, WITHOUT_DRAG};

/// Renders the keyframe segments and reports the pane's scroll offset.
pub fn render_keyframe_list(ui: &mut egui::Ui, state: &mut AppState, palette: &TimelinePalette) {
    let config = state.timeline.config();
    let padding = config.horizontal_padding;
    let row_height = config.track_row_height;
    let segment_count = config.track_labels.len();
    let segment_width = state.timeline.bar_width();
    let segment_top = ((row_height - RULER_BAR_HEIGHT) / 2.0).max(0.0);

    let area = ScrollArea::both()
        .id_salt(TimelinePart::KeyframeList.test_id())
        .auto_shrink([false; 2])
        .scroll_source(WITHOUT_DRAG);

    let output = state.panes.keyframe_list.apply(area).show(ui, |ui| {
        ui.spacing_mut().item_spacing = egui::Vec2::ZERO;
        for _ in 0..segment_count {
            let (row_rect, _) = ui.allocate_exact_size(
                egui::vec2(segment_width + padding * 2.0, row_height),
                Sense::hover(),
            );
            let segment_rect = egui::Rect::from_min_size(
                row_rect.left_top() + egui::vec2(padding, segment_top),
                egui::vec2(segment_width, RULER_BAR_HEIGHT.min(row_height)),
            );
            ui.painter().rect_filled(segment_rect, 6.0, palette.segment);
        }
    });

    if let Some(offset) = state.panes.keyframe_list.observe(output.state.offset) {
        let outcome = state.timeline.on_scroll(Pane::KeyframeList, offset);
        log::trace!("Keyframe list scrolled to {offset:?}: {outcome:?}");
    }
}
