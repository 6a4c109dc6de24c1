//! Track list pane: static labelled rows, vertically scrollable.

use egui::scroll_area::ScrollBarVisibility;
use egui::{ScrollArea, Sense};
use rtimeline::{Pane, TimelinePalette, TimelinePart};
use crate::app::AppState;

/// Renders the track labels and reports the pane's scroll offset.
pub fn render_track_list(ui: &mut egui::Ui, state: &mut AppState, palette: &TimelinePalette) {
    let row_height = state.timeline.config().track_row_height;
    let labels = &state.timeline.config().track_labels;

    let area = ScrollArea::vertical()
        .id_salt(TimelinePart::TrackList.test_id())
        .auto_shrink([false; 2])
        .scroll_bar_visibility(ScrollBarVisibility::AlwaysHidden);

    let output = state.panes.track_list.apply(area).show(ui, |ui| {
        ui.spacing_mut().item_spacing = egui::Vec2::ZERO;
        for label in labels {
            let (row_rect, _) = ui.allocate_exact_size(
                egui::vec2(ui.available_width(), row_height),
                Sense::hover(),
            );
            ui.painter().text(
                row_rect.left_top() + egui::vec2(8.0, 8.0),
                egui::Align2::LEFT_TOP,
                label,
                egui::TextStyle::Body.resolve(ui.style()),
                palette.text,
            );
        }
    });

    if let Some(offset) = state.panes.track_list.observe(output.state.offset) {
        let outcome = state.timeline.on_scroll(Pane::TrackList, offset);
        log::trace!("Track list scrolled to {offset:?}: {outcome:?}");
    }
}
