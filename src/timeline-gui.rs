//! Timeline GUI Application
//!
//! Interactive timeline built on the `rtimeline` core with the egui framework:
//! - Current time and duration fields with keyboard and spinner stepping
//! - Ruler drag to move the playhead, throttled while dragging
//! - Ruler, track list and keyframe panes that scroll together
//! - Playhead that follows time and horizontal scroll
//! - Dark and Light themes with persistent preference
//!
//! The application is built with a modular architecture:
//! - `app/` - Application state and preference coordination
//! - `state/` - egui-facing state (pane scroll handles, ruler layout, theme)
//! - `ui/` - Panel rendering and input handling
//!
//! Usage: `timeline-gui [config.json]`

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe::egui;
use std::path::PathBuf;

mod app;
mod state;
mod ui;

use app::settings_coordinator::CONFIG_KEY;
use app::{AppState, SettingsCoordinator, ThemeCoordinator};
use ui::panel_manager::{PanelInteraction, PanelManager};

/// Main application entry point that initializes and launches the timeline GUI.
fn main() -> eframe::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .filter_module("egui", log::LevelFilter::Info)
        .format_timestamp_millis()
        .init();

    // Optional JSON config file as the first argument
    let config_path = std::env::args().nth(1).map(PathBuf::from);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_title("Timeline"),
        ..Default::default()
    };

    eframe::run_native(
        "Timeline",
        options,
        Box::new(move |cc| Ok(Box::new(TimelineApp::new(cc, config_path)))),
    )
}

/// The timeline application.
///
/// Rendering is delegated to `PanelManager`; `ThemeCoordinator` and
/// `SettingsCoordinator` handle preferences.
struct TimelineApp {
    /// Centralized application state
    state: AppState,
}

impl TimelineApp {
    /// Creates the application with its configuration and theme resolved from
    /// the command line and persistent storage.
    fn new(cc: &eframe::CreationContext, config_path: Option<PathBuf>) -> Self {
        let theme_name = ThemeCoordinator::load_theme_from_storage(cc.storage);
        let config = SettingsCoordinator::resolve_config(config_path.as_deref(), cc.storage);
        log::debug!("Starting with theme {theme_name} and config {config:?}");

        Self {
            state: AppState::with_theme(config, theme_name),
        }
    }

    fn handle_panel_interaction(&mut self, interaction: PanelInteraction) {
        match interaction {
            PanelInteraction::ThemeChanged(name) => log::debug!("Theme selection: {name}"),
            PanelInteraction::TimelineChanged => log::trace!(
                "Timeline at {}ms of {}ms",
                self.state.timeline.time(),
                self.state.timeline.duration()
            ),
        }
    }
}

impl eframe::App for TimelineApp {
    /// Called when the app is being shut down - ensures preferences are saved.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        ThemeCoordinator::save_theme_to_storage(storage, self.state.theme.current_theme_name());
        SettingsCoordinator::save_setting(storage, CONFIG_KEY, self.state.timeline.config());
    }

    /// Main update loop.
    ///
    /// 1. Advance the timeline core to this frame (scroll relay, throttled drag)
    /// 2. Apply theme
    /// 3. Render all panels via PanelManager
    /// 4. Keep repainting while the core waits on a later frame
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = ctx.input(|i| i.time);
        self.state.begin_frame(now);

        ThemeCoordinator::apply_current_theme(ctx, &self.state);

        if let Some(interaction) = PanelManager::render_all_panels(ctx, &mut self.state) {
            self.handle_panel_interaction(interaction);
        }

        if self.state.needs_repaint() {
            ctx.request_repaint();
        }
    }
}
