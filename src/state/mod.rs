//! State management modules for the timeline viewer.
//!
//! This module contains state-only logic (no UI concerns):
//! - Pane scroll state (observed offsets, queued writes)
//! - Interaction state (ruler layout used by pointer handling)
//! - Theme state (theme manager, current theme)

mod pane_scroll;
mod interaction;
mod theme_state;

pub use pane_scroll::{PaneScroll, PaneScrollSet};
pub use interaction::InteractionState;
pub use theme_state::ThemeState;
