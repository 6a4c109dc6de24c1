//! Headless numeric input field with a two-stage edit model.
//!
//! The text shown in the field ([`EditBuffer::displayed_text`]) and the value
//! owned by the caller are kept apart. Text only becomes a value through a
//! commit (blur, Enter, arrow key, spinner button); Escape throws the text
//! away. The owner's value always wins: [`NumberInput::sync`] resets the text
//! whenever the owner reports a value the field did not produce itself.

use crate::quantize::{clamp_optional, quantize};
use crate::strings::{parse_numeric, sanitize_input};

/// Limits and steps applied by one input field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputBounds {
    pub min: Option<i64>,
    pub max: Option<i64>,
    /// Amount added or removed by one arrow key / spinner press
    pub step: i64,
    /// Committed values are rounded to a multiple of this (1 = nearest integer)
    pub rounding: i64,
}

impl Default for InputBounds {
    fn default() -> Self {
        Self {
            min: None,
            max: None,
            step: 1,
            rounding: 1,
        }
    }
}

impl InputBounds {
    /// Bounds with a lower and upper limit and a step, rounding to integers.
    pub fn new(min: i64, max: i64, step: i64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
            step,
            rounding: 1,
        }
    }

    /// Rounds committed values to multiples of `rounding` instead of integers.
    pub fn with_rounding(mut self, rounding: i64) -> Self {
        self.rounding = rounding.max(1);
        self
    }
}

/// Direction of a discrete step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepDirection {
    Up,
    Down,
}

/// What produced a discrete step. Both behave the same; kept for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepSource {
    ArrowKey,
    Spinner,
}

/// One interaction with the field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditEvent {
    /// The field gained focus
    Focus,
    /// Free typing; carries the full raw text now in the field
    Typed(String),
    /// Enter was pressed
    Enter,
    /// The field lost focus
    Blur,
    /// Escape was pressed
    Escape,
    /// Arrow key or spinner button
    Step { direction: StepDirection, source: StepSource },
}

/// Transient text state of a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditBuffer {
    /// Raw, possibly partial text the user sees
    pub displayed_text: String,
    /// Last value received from the owner
    pub committed_value: i64,
}

impl EditBuffer {
    pub fn new(value: i64) -> Self {
        Self {
            displayed_text: value.to_string(),
            committed_value: value,
        }
    }

    /// Drops any edit and shows the committed value again.
    pub fn revert(&mut self) {
        self.displayed_text = self.committed_value.to_string();
    }
}

/// A constrained integer field.
///
/// Feed owner values through [`sync`](Self::sync) and user interactions through
/// [`handle`](Self::handle); a returned `Some(value)` is a commit the owner
/// should apply.
#[derive(Debug, Clone)]
pub struct NumberInput {
    buffer: EditBuffer,
    bounds: InputBounds,
    focused: bool,
    /// Set by Enter/Escape so the blur that follows does not commit again.
    /// Any further editing clears it.
    suppress_blur: bool,
    /// Text was rewritten by a commit; the next sync must overwrite it even
    /// if the owner's value did not move
    resync_pending: bool,
    select_all_pending: bool,
}

impl NumberInput {
    pub fn new(value: i64, bounds: InputBounds) -> Self {
        Self {
            buffer: EditBuffer::new(value),
            bounds,
            focused: false,
            suppress_blur: false,
            resync_pending: false,
            select_all_pending: false,
        }
    }

    // ===== Queries =====

    /// Text currently shown in the field.
    pub fn displayed_text(&self) -> &str {
        &self.buffer.displayed_text
    }

    /// Last value received from the owner.
    pub fn committed_value(&self) -> i64 {
        self.buffer.committed_value
    }

    pub fn buffer(&self) -> &EditBuffer {
        &self.buffer
    }

    pub fn bounds(&self) -> InputBounds {
        self.bounds
    }

    /// Returns true while the field has focus.
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Returns true once after focus was gained or a step committed, telling
    /// the renderer to select the whole text.
    pub fn take_select_all(&mut self) -> bool {
        std::mem::take(&mut self.select_all_pending)
    }

    // ===== Owner side =====

    /// Replaces the limits, e.g. when the time field's max follows the duration.
    pub fn set_bounds(&mut self, bounds: InputBounds) {
        self.bounds = bounds;
    }

    /// Reports the owner's current value.
    ///
    /// The text is reset when the value changed from outside, or when the
    /// last commit rewrote the text and must be reconciled with the owner.
    pub fn sync(&mut self, value: i64) {
        if value != self.buffer.committed_value || self.resync_pending {
            self.buffer.committed_value = value;
            self.buffer.revert();
            self.resync_pending = false;
        }
    }

    // ===== User side =====

    /// Applies one interaction.
    ///
    /// # Returns
    /// `Some(value)` when the interaction commits a value different from the
    /// owner's current one
    pub fn handle(&mut self, event: EditEvent) -> Option<i64> {
        match event {
            EditEvent::Focus => {
                self.focused = true;
                self.suppress_blur = false;
                self.select_all_pending = true;
                None
            }
            EditEvent::Typed(raw) => {
                self.focused = true;
                self.suppress_blur = false;
                self.buffer.displayed_text = sanitize_input(&raw);
                None
            }
            EditEvent::Enter => {
                self.focused = false;
                self.suppress_blur = true;
                let text = self.buffer.displayed_text.clone();
                self.commit(&text)
            }
            EditEvent::Blur => {
                self.focused = false;
                if std::mem::take(&mut self.suppress_blur) {
                    return None;
                }
                let text = self.buffer.displayed_text.clone();
                self.commit(&text)
            }
            EditEvent::Escape => {
                self.focused = false;
                self.suppress_blur = true;
                self.buffer.revert();
                log::trace!("Edit discarded, back to {}", self.buffer.committed_value);
                None
            }
            EditEvent::Step { direction, source } => {
                self.focused = true;
                self.suppress_blur = false;
                let result = self.step(direction, source);
                self.select_all_pending = true;
                result
            }
        }
    }

    /// Moves the displayed number by one step and commits it immediately.
    fn step(&mut self, direction: StepDirection, source: StepSource) -> Option<i64> {
        let base = parse_numeric(&sanitize_input(&self.buffer.displayed_text))
            .unwrap_or(self.buffer.committed_value as f64);
        let delta = match direction {
            StepDirection::Up => self.bounds.step,
            StepDirection::Down => -self.bounds.step,
        };
        let stepped = (base + delta as f64).to_string();
        log::trace!("{source:?} step {direction:?}: {base} -> {stepped}");

        self.buffer.displayed_text = stepped.clone();
        self.commit(&stepped)
    }

    /// Runs the commit pipeline: sanitize, parse, round, clamp, compare.
    fn commit(&mut self, text: &str) -> Option<i64> {
        let number = match parse_numeric(&sanitize_input(text)) {
            Ok(number) => number,
            Err(err) => {
                log::debug!("Reverting to {}: {err}", self.buffer.committed_value);
                self.buffer.revert();
                return None;
            }
        };

        let rounded = quantize(number, self.bounds.rounding)?;
        let value = clamp_optional(rounded, self.bounds.min, self.bounds.max);
        self.buffer.displayed_text = value.to_string();

        if value == self.buffer.committed_value {
            return None;
        }
        log::debug!("Committing {value} (typed {text:?})");
        self.resync_pending = true;
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn time_input(value: i64) -> NumberInput {
        NumberInput::new(value, InputBounds::new(0, 2000, 10))
    }

    fn up() -> EditEvent {
        EditEvent::Step { direction: StepDirection::Up, source: StepSource::ArrowKey }
    }

    fn down() -> EditEvent {
        EditEvent::Step { direction: StepDirection::Down, source: StepSource::ArrowKey }
    }

    #[test]
    fn test_displays_initial_value() {
        let input = time_input(2000);
        assert_eq!(input.displayed_text(), "2000");
        assert_eq!(input.committed_value(), 2000);
    }

    #[test]
    fn test_typing_does_not_commit() {
        let mut input = time_input(2000);
        input.handle(EditEvent::Focus);
        for text in ["", "1", "15", "150", "1500"] {
            assert_eq!(input.handle(EditEvent::Typed(text.to_string())), None);
        }
        assert_eq!(input.displayed_text(), "1500");
        assert_eq!(input.committed_value(), 2000);
    }

    #[test]
    fn test_typing_sanitizes() {
        let mut input = time_input(0);
        input.handle(EditEvent::Typed("00120".to_string()));
        assert_eq!(input.displayed_text(), "120");
        input.handle(EditEvent::Typed("12a".to_string()));
        assert_eq!(input.displayed_text(), "12");
    }

    #[test]
    fn test_blur_commits() {
        let mut input = time_input(2000);
        input.handle(EditEvent::Focus);
        input.handle(EditEvent::Typed("1500".to_string()));
        assert_eq!(input.handle(EditEvent::Blur), Some(1500));
        assert!(!input.is_focused());
    }

    #[test]
    fn test_enter_commits_once() {
        let mut input = time_input(2000);
        input.handle(EditEvent::Focus);
        input.handle(EditEvent::Typed("1500".to_string()));
        assert_eq!(input.handle(EditEvent::Enter), Some(1500));
        assert_eq!(input.handle(EditEvent::Blur), None);
    }

    #[test]
    fn test_blur_commits_after_editing_again_past_enter() {
        let mut input = time_input(500);
        input.handle(EditEvent::Typed("600".to_string()));
        assert_eq!(input.handle(EditEvent::Enter), Some(600));
        input.sync(600);

        input.handle(EditEvent::Typed("700".to_string()));
        assert_eq!(input.handle(EditEvent::Blur), Some(700));
    }

    #[test]
    fn test_blur_commits_after_editing_again_past_escape() {
        let mut input = time_input(500);
        input.handle(EditEvent::Typed("600".to_string()));
        assert_eq!(input.handle(EditEvent::Escape), None);

        input.handle(EditEvent::Typed("700".to_string()));
        assert_eq!(input.handle(EditEvent::Blur), Some(700));
        assert_eq!(input.displayed_text(), "700");
    }

    #[test]
    fn test_blur_after_step_past_enter_is_not_swallowed() {
        let mut input = time_input(500);
        input.handle(EditEvent::Typed("600".to_string()));
        input.handle(EditEvent::Enter);
        input.sync(600);

        assert_eq!(input.handle(up()), Some(610));
        input.sync(610);
        input.handle(EditEvent::Typed("900".to_string()));
        assert_eq!(input.handle(EditEvent::Blur), Some(900));
    }

    #[test]
    fn test_escape_reverts_without_commit() {
        let mut input = time_input(2000);
        input.handle(EditEvent::Focus);
        input.handle(EditEvent::Typed("1500".to_string()));
        assert_eq!(input.handle(EditEvent::Escape), None);
        assert_eq!(input.handle(EditEvent::Blur), None);
        assert_eq!(input.displayed_text(), "2000");
        assert_eq!(input.committed_value(), 2000);
    }

    #[test]
    fn test_arrow_keys_step_from_displayed_text() {
        let mut input = time_input(1990);
        input.handle(EditEvent::Focus);
        assert_eq!(input.handle(up()), Some(2000));

        let mut input = time_input(2000);
        input.handle(EditEvent::Typed("500".to_string()));
        assert_eq!(input.handle(down()), Some(490));
    }

    #[test]
    fn test_spinner_behaves_like_arrow_keys() {
        let mut input = time_input(1000);
        let spin = EditEvent::Step { direction: StepDirection::Up, source: StepSource::Spinner };
        assert_eq!(input.handle(spin), Some(1010));
        assert!(input.take_select_all());
        assert!(!input.take_select_all());
    }

    #[test]
    fn test_step_is_clamped() {
        let mut input = time_input(2000);
        assert_eq!(input.handle(up()), None);
        assert_eq!(input.displayed_text(), "2000");

        let mut input = time_input(0);
        assert_eq!(input.handle(down()), None);
        assert_eq!(input.displayed_text(), "0");
    }

    #[test]
    fn test_step_from_unparseable_text_uses_committed_value() {
        let mut input = time_input(100);
        input.handle(EditEvent::Typed("-".to_string()));
        assert_eq!(input.handle(up()), Some(110));
    }

    #[test]
    fn test_invalid_text_reverts() {
        let mut input = time_input(700);
        input.handle(EditEvent::Typed("".to_string()));
        assert_eq!(input.handle(EditEvent::Blur), None);
        assert_eq!(input.displayed_text(), "700");

        input.handle(EditEvent::Focus);
        input.handle(EditEvent::Typed("1.2.3".to_string()));
        assert_eq!(input.handle(EditEvent::Enter), None);
        assert_eq!(input.displayed_text(), "700");
    }

    #[test]
    fn test_out_of_range_is_clamped() {
        let mut input = time_input(700);
        input.handle(EditEvent::Typed("9999".to_string()));
        assert_eq!(input.handle(EditEvent::Enter), Some(2000));

        let mut input = time_input(700);
        input.handle(EditEvent::Typed("-50".to_string()));
        assert_eq!(input.handle(EditEvent::Enter), Some(0));
    }

    #[test]
    fn test_rounds_to_integer_by_default() {
        let mut input = time_input(0);
        input.handle(EditEvent::Typed("12.5".to_string()));
        assert_eq!(input.handle(EditEvent::Enter), Some(13));
    }

    #[test]
    fn test_rounding_step() {
        let bounds = InputBounds::new(100, 6000, 10).with_rounding(10);
        let mut input = NumberInput::new(2000, bounds);
        input.handle(EditEvent::Typed("375".to_string()));
        assert_eq!(input.handle(EditEvent::Enter), Some(380));
    }

    #[test]
    fn test_unchanged_commit_resyncs_text() {
        let mut input = time_input(1500);
        input.handle(EditEvent::Typed("01500".to_string()));
        assert_eq!(input.handle(EditEvent::Blur), None);
        assert_eq!(input.displayed_text(), "1500");
    }

    #[test]
    fn test_external_change_resets_text() {
        let mut input = time_input(1500);
        input.handle(EditEvent::Typed("12".to_string()));
        input.sync(800);
        assert_eq!(input.displayed_text(), "800");
        assert_eq!(input.committed_value(), 800);
    }

    #[test]
    fn test_sync_after_commit_follows_owner() {
        let mut input = time_input(1000);
        input.handle(EditEvent::Typed("1800".to_string()));
        assert_eq!(input.handle(EditEvent::Enter), Some(1800));

        // Owner refused the change.
        input.sync(1000);
        assert_eq!(input.displayed_text(), "1000");
    }

    #[test]
    fn test_focus_requests_select_all() {
        let mut input = time_input(0);
        assert!(!input.take_select_all());
        input.handle(EditEvent::Focus);
        assert!(input.is_focused());
        assert!(input.take_select_all());
    }
}
