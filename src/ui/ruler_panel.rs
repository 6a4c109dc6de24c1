//! Ruler pane: a horizontally scrollable bar as wide as the duration.
//!
//! The bar senses presses; the drag itself is tracked window-wide by
//! [`crate::ui::input::ruler_input_handler`].

use egui::scroll_area::{ScrollBarVisibility, ScrollSource};
use egui::{ScrollArea, Sense, WidgetInfo};
use rtimeline::{Pane, TimelinePalette, TimelinePart};
use crate::app::AppState;

/// Height of the ruler bar
pub const RULER_BAR_HEIGHT: f32 = 24.0;

/// Scroll bar and wheel only; a press on the content belongs to the ruler drag
pub const WITHOUT_DRAG: ScrollSource = ScrollSource {
    drag: false,
    ..ScrollSource::ALL
};

/// Renders the ruler pane and reports its scroll offset to the timeline.
///
/// # Arguments
/// * `ui` - UI sized to the ruler cell
/// * `state` - Mutable reference to application state
/// * `palette` - Colors of the current theme
///
/// # Returns
/// The response of the ruler bar
pub fn render_ruler(ui: &mut egui::Ui, state: &mut AppState, palette: &TimelinePalette) -> egui::Response {
    let padding = state.timeline.config().horizontal_padding;
    let bar_width = state.timeline.bar_width();
    let time = state.timeline.time();
    let bar_top = ((ui.available_height() - RULER_BAR_HEIGHT) / 2.0).max(0.0);

    let area = ScrollArea::horizontal()
        .id_salt(TimelinePart::Ruler.test_id())
        .auto_shrink([false; 2])
        .scroll_source(WITHOUT_DRAG)
        .scroll_bar_visibility(ScrollBarVisibility::AlwaysHidden);

    let output = state.panes.ruler.apply(area).show(ui, |ui| {
        ui.spacing_mut().item_spacing = egui::Vec2::ZERO;
        ui.add_space(bar_top);
        ui.horizontal(|ui| {
            ui.add_space(padding);
            let (bar_rect, response) = ui.allocate_exact_size(
                egui::vec2(bar_width, RULER_BAR_HEIGHT),
                Sense::click_and_drag(),
            );
            ui.painter().rect_filled(bar_rect, 6.0, palette.ruler_bar);
            ui.add_space(padding);

            response.widget_info(|| WidgetInfo::slider(true, time as f64, "Timeline Ruler"));
            response
        })
        .inner
    });

    if let Some(offset) = state.panes.ruler.observe(output.state.offset) {
        let outcome = state.timeline.on_scroll(Pane::Ruler, offset);
        log::trace!("Ruler scrolled to {offset:?}: {outcome:?}");
    }

    state.interaction.set_ruler_bar_rect(output.inner.rect);
    output.inner
}
