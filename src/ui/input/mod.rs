//! Input handling subsystem for UI interactions.
//!
//! This module contains pointer handling that spans more than one widget:
//! - Ruler drag (press on the bar, move and release anywhere)

pub mod ruler_input_handler;
