//! Play controls cell: current time and duration fields.

use crate::ui::number_input_widget::render_number_input;
use rtimeline::{ControlField, Timeline};

const FIELD_WIDTH: f32 = 56.0;

/// Renders "Current [time] - [duration] Duration" in the top-left cell.
///
/// # Returns
/// `true` if time or duration changed
pub fn render_play_controls(ui: &mut egui::Ui, timeline: &mut Timeline) -> bool {
    let mut changed = false;

    ui.horizontal_centered(|ui| {
        ui.add_space(8.0);
        ui.label("Current");
        changed |= render_number_input(ui, timeline, ControlField::CurrentTime, FIELD_WIDTH);
        ui.label("-");
        changed |= render_number_input(ui, timeline, ControlField::Duration, FIELD_WIDTH);
        ui.label("Duration");
    });

    changed
}
