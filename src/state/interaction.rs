//! Pointer interaction state.
//!
//! The ruler tracker itself lives in the timeline core; this keeps the
//! per-frame layout facts it needs from the renderer.

use rtimeline::RulerGeometry;

/// Layout facts captured while rendering, used by input handling.
#[derive(Debug, Clone, Default)]
pub struct InteractionState {
    /// Position of the ruler bar, `None` until it has been laid out
    ruler_geometry: Option<RulerGeometry>,
}

impl InteractionState {
    pub fn new() -> Self {
        Self::default()
    }

    // ===== Queries =====

    /// Returns the ruler bar geometry from the last frame, if any.
    pub fn ruler_geometry(&self) -> Option<RulerGeometry> {
        self.ruler_geometry
    }

    // ===== Mutations =====

    pub fn set_ruler_bar_rect(&mut self, bar_rect: egui::Rect) {
        self.ruler_geometry = Some(RulerGeometry::new(bar_rect.left()));
    }
}
