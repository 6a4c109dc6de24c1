//! Application-level modules for the timeline viewer.
//!
//! This module contains centralized state plus the coordinators that load
//! and persist preferences.

mod app_state;
mod theme_coordinator;
pub mod settings_coordinator;

pub use app_state::AppState;
pub use theme_coordinator::ThemeCoordinator;
pub use settings_coordinator::SettingsCoordinator;
