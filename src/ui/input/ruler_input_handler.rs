//! Ruler drag input handling.
//!
//! A primary press on the ruler bar starts a drag session. While it lasts,
//! pointer movement anywhere in the window moves the playhead, and a release
//! anywhere ends it, so the drag survives the pointer leaving the bar or
//! passing over the playhead.

use rtimeline::RulerGeometry;
use crate::app::AppState;

/// Result of ruler input handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RulerInputResult {
    /// No interaction occurred
    None,
    /// A drag session started and the time jumped to the pointer
    DragStarted(i64),
    /// The time followed the pointer
    TimeUpdated(i64),
    /// The drag session ended
    DragEnded,
}

/// Handles ruler press, window-wide move and release for this frame.
///
/// # Arguments
/// * `ctx` - The egui context for input access
/// * `bar_response` - Response of the ruler bar rendered this frame
/// * `state` - Application state holding the timeline and ruler geometry
///
/// # Returns
/// The result of input handling
pub fn handle_ruler_input(
    ctx: &egui::Context,
    bar_response: &egui::Response,
    state: &mut AppState,
) -> RulerInputResult {
    let geometry: Option<RulerGeometry> = state.interaction.ruler_geometry();
    let (pressed, released, primary_down, moving, pointer_x, now) = ctx.input(|i| {
        (
            i.pointer.primary_pressed(),
            i.pointer.primary_released(),
            i.pointer.primary_down(),
            i.pointer.is_moving(),
            i.pointer.interact_pos().map(|pos| pos.x),
            i.time,
        )
    });

    let mut result = RulerInputResult::None;

    if pressed && bar_response.contains_pointer() {
        if let Some(x) = pointer_x {
            let time = state.timeline.ruler_pointer_down(x, geometry);
            result = RulerInputResult::DragStarted(time);
        }
    } else if state.timeline.is_dragging_ruler() && moving {
        if let Some(x) = pointer_x {
            if let Some(time) = state.timeline.ruler_pointer_move(x, geometry, now) {
                result = RulerInputResult::TimeUpdated(time);
            }
        }
    }

    // A release outside the window only shows up as the button no longer being down
    if (released || !primary_down) && state.timeline.ruler_pointer_up() {
        result = RulerInputResult::DragEnded;
    }

    result
}
