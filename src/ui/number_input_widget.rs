//! Text field bound to a [`NumberInput`] editor.
//!
//! egui reports focus, edits and key presses; this module turns them into
//! [`EditEvent`]s and lets the timeline decide what the field shows.

use egui::text::{CCursor, CCursorRange};
use egui::{Key, Modifiers};
use rtimeline::{ControlField, EditEvent, StepDirection, StepSource, Timeline};

/// Renders one numeric field with its spinner buttons.
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `timeline` - Timeline owning the field's editor
/// * `field` - Which field to render
/// * `width` - Width of the text area
///
/// # Returns
/// `true` if the timeline changed this frame
pub fn render_number_input(
    ui: &mut egui::Ui,
    timeline: &mut Timeline,
    field: ControlField,
    width: f32,
) -> bool {
    let id = egui::Id::new(field.test_id());
    let mut changed = false;

    // Arrow keys step instead of moving the text cursor
    if ui.memory(|m| m.has_focus(id)) {
        let (up, down) = ui.input_mut(|i| {
            (
                i.consume_key(Modifiers::NONE, Key::ArrowUp),
                i.consume_key(Modifiers::NONE, Key::ArrowDown),
            )
        });
        if up {
            changed |= step(timeline, field, StepDirection::Up, StepSource::ArrowKey);
        }
        if down {
            changed |= step(timeline, field, StepDirection::Down, StepSource::ArrowKey);
        }
    }

    let escape_pressed = ui.input(|i| i.key_pressed(Key::Escape));
    let enter_pressed = ui.input(|i| i.key_pressed(Key::Enter));

    let mut text = timeline.controls().input(field).displayed_text().to_string();
    let mut output = egui::TextEdit::singleline(&mut text)
        .id(id)
        .desired_width(width)
        .show(ui);
    let response = output.response.clone();

    if response.gained_focus() {
        changed |= timeline.handle_input(field, EditEvent::Focus);
    }
    if response.changed() {
        changed |= timeline.handle_input(field, EditEvent::Typed(text));
    }
    if response.lost_focus() {
        let event = if escape_pressed {
            EditEvent::Escape
        } else if enter_pressed {
            EditEvent::Enter
        } else {
            EditEvent::Blur
        };
        changed |= timeline.handle_input(field, event);
    }

    ui.vertical(|ui| {
        ui.spacing_mut().item_spacing.y = 0.0;
        if ui.small_button("▲").clicked() {
            changed |= step(timeline, field, StepDirection::Up, StepSource::Spinner);
        }
        if ui.small_button("▼").clicked() {
            changed |= step(timeline, field, StepDirection::Down, StepSource::Spinner);
        }
    });

    // Select the whole value after focus or a step, like a native number field
    if timeline.input_mut(field).take_select_all() {
        let len = timeline.controls().input(field).displayed_text().chars().count();
        output
            .state
            .cursor
            .set_char_range(Some(CCursorRange::two(CCursor::new(0), CCursor::new(len))));
        output.state.store(ui.ctx(), id);
    }

    changed
}

fn step(timeline: &mut Timeline, field: ControlField, direction: StepDirection, source: StepSource) -> bool {
    timeline.handle_input(field, EditEvent::Step { direction, source })
}
