//! UI panel rendering subsystem
//!
//! This module contains all UI rendering logic for the timeline viewer:
//! - Header panel (title, theme selector)
//! - Play controls (current time and duration fields)
//! - Number input widget (text field bound to a numeric editor)
//! - Ruler, track list and keyframe panes
//! - Playhead overlay
//! - Panel manager (panel orchestration and layout)
//! - Input handling (ruler drag)

pub mod header;
pub mod play_controls;
pub mod number_input_widget;
pub mod ruler_panel;
pub mod track_list;
pub mod keyframe_panel;
pub mod playhead;
pub mod panel_manager;
pub mod input;
