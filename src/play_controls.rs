//! The current-time and duration fields, wired to the clock.

use crate::clock::TimelineClock;
use crate::number_input::{EditEvent, InputBounds, NumberInput};
use crate::quantize::TIME_QUANTUM;

/// Which of the two fields an event belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlField {
    CurrentTime,
    Duration,
}

impl ControlField {
    /// Stable identifier of the field's widget.
    pub fn test_id(self) -> &'static str {
        match self {
            ControlField::CurrentTime => "current-time-input",
            ControlField::Duration => "duration-input",
        }
    }
}

/// Both numeric fields of the timeline.
///
/// The time field's upper bound follows the current duration; both fields
/// round to [`TIME_QUANTUM`] before committing.
#[derive(Debug, Clone)]
pub struct PlayControls {
    time_input: NumberInput,
    duration_input: NumberInput,
}

impl PlayControls {
    pub fn new(clock: &TimelineClock) -> Self {
        Self {
            time_input: NumberInput::new(clock.time(), time_bounds(clock)),
            duration_input: NumberInput::new(clock.duration(), duration_bounds(clock)),
        }
    }

    pub fn input(&self, field: ControlField) -> &NumberInput {
        match field {
            ControlField::CurrentTime => &self.time_input,
            ControlField::Duration => &self.duration_input,
        }
    }

    pub fn input_mut(&mut self, field: ControlField) -> &mut NumberInput {
        match field {
            ControlField::CurrentTime => &mut self.time_input,
            ControlField::Duration => &mut self.duration_input,
        }
    }

    /// Pulls the clock's values and bounds into both fields.
    pub fn sync(&mut self, clock: &TimelineClock) {
        self.time_input.set_bounds(time_bounds(clock));
        self.time_input.sync(clock.time());
        self.duration_input.set_bounds(duration_bounds(clock));
        self.duration_input.sync(clock.duration());
    }

    /// Routes one interaction to a field and applies its commit to the clock.
    ///
    /// # Returns
    /// `true` if the clock changed
    pub fn handle(&mut self, clock: &mut TimelineClock, field: ControlField, event: EditEvent) -> bool {
        self.sync(clock);

        let changed = match self.input_mut(field).handle(event) {
            Some(value) => match field {
                ControlField::CurrentTime => clock.set_time(value as f64),
                ControlField::Duration => clock.set_duration(value as f64),
            },
            None => false,
        };

        self.sync(clock);
        changed
    }
}

fn time_bounds(clock: &TimelineClock) -> InputBounds {
    let bounds = clock.bounds();
    InputBounds::new(bounds.min_time, clock.duration(), bounds.step).with_rounding(TIME_QUANTUM)
}

fn duration_bounds(clock: &TimelineClock) -> InputBounds {
    let bounds = clock.bounds();
    InputBounds::new(bounds.min_duration, bounds.max_duration, bounds.step).with_rounding(TIME_QUANTUM)
}
