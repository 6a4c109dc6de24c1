pub mod quantize;
pub mod strings;
pub mod error;
pub mod config;
pub mod clock;
pub mod number_input;
pub mod play_controls;
pub mod scroll_coupler;
pub mod throttle;
pub mod ruler;
pub mod playhead;
pub mod timeline;
pub mod theme;

// Export the validated clock
pub use clock::{TimelineClock, TimelineState, ClockBounds};

// Export numeric editing
pub use number_input::{
    NumberInput, EditBuffer, EditEvent, InputBounds,
    StepDirection, StepSource
};
pub use play_controls::{PlayControls, ControlField};
pub use strings::{sanitize_input, parse_numeric};
pub use error::InputError;

// Export scroll coupling
pub use scroll_coupler::{
    ScrollCoupler, Pane, Axis, ScrollOffset, ScrollHandle,
    PaneHandles, ScrollWrite, RelayOutcome
};

// Export pointer tracking and playhead projection
pub use throttle::Throttle;
pub use ruler::{RulerPointerTracker, RulerGeometry};
pub use playhead::{project_playhead, PlayheadInputs, PlayheadProjection};

// Export the composed widget and its configuration
pub use timeline::{Timeline, TimelinePart};
pub use config::TimelineConfig;

// Export theme support
pub use theme::{Theme, TimelinePalette, ThemeManager, hex_to_color32, with_alpha};
