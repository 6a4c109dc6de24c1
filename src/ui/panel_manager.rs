//! Panel orchestration and layout management.
//!
//! Lays out the page and the timeline grid: a fixed-height timeline at the
//! bottom of the window, split into a controls column and a scrollable
//! column, each with a header row and a body row.

use crate::app::AppState;
use crate::ui::input::ruler_input_handler::{self, RulerInputResult};
use crate::ui::{header, keyframe_panel, play_controls, playhead, ruler_panel, track_list};
use egui::UiBuilder;

/// Height of the timeline panel
const TIMELINE_HEIGHT: f32 = 300.0;

/// Result of panel interactions that need to be handled by the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelInteraction {
    /// The theme selection changed
    ThemeChanged(String),
    /// Time or duration changed through a field or the ruler
    TimelineChanged,
}

/// Screen rects of the four timeline cells.
struct TimelineCells {
    controls: egui::Rect,
    ruler: egui::Rect,
    track_list: egui::Rect,
    keyframe_list: egui::Rect,
}

impl TimelineCells {
    fn split(rect: egui::Rect, column_width: f32, header_height: f32) -> Self {
        let column_x = (rect.left() + column_width).min(rect.right());
        let header_y = (rect.top() + header_height).min(rect.bottom());

        Self {
            controls: egui::Rect::from_min_max(rect.min, egui::pos2(column_x, header_y)),
            ruler: egui::Rect::from_min_max(egui::pos2(column_x, rect.top()), egui::pos2(rect.right(), header_y)),
            track_list: egui::Rect::from_min_max(egui::pos2(rect.left(), header_y), egui::pos2(column_x, rect.bottom())),
            keyframe_list: egui::Rect::from_min_max(egui::pos2(column_x, header_y), rect.max),
        }
    }
}

/// Manages the layout and rendering of all UI panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders all panels in the application window.
    ///
    /// This is the main entry point for rendering the entire UI, called from
    /// the eframe::App::update() implementation.
    pub fn render_all_panels(ctx: &egui::Context, state: &mut AppState) -> Option<PanelInteraction> {
        let mut interaction: Option<PanelInteraction> = None;

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            if let Some(header::HeaderInteraction::ThemeChanged(name)) = header::render_header(ui, state) {
                interaction = Some(PanelInteraction::ThemeChanged(name));
            }
        });

        let palette = state.theme.current_theme().colors.clone();
        let timeline_frame = egui::Frame::default()
            .fill(palette.timeline_background)
            .stroke(egui::Stroke::new(2.0, palette.border));

        egui::TopBottomPanel::bottom("timeline")
            .exact_height(TIMELINE_HEIGHT)
            .resizable(false)
            .frame(timeline_frame)
            .show(ctx, |ui| {
                if Self::render_timeline(ui, state, &palette) {
                    interaction = Some(PanelInteraction::TimelineChanged);
                }
            });

        egui::CentralPanel::default()
            .frame(egui::Frame::default().inner_margin(egui::Margin::same(40)).fill(palette.page_background))
            .show(ctx, |ui| {
                ui.heading("Phase Timeline");
                ui.add_space(16.0);
                ui.colored_label(
                    palette.text_dim,
                    "Drag the ruler or edit the fields to move the playhead. \
                     Scroll the ruler, tracks or keyframes and the other panes follow.",
                );
            });

        interaction
    }

    /// Renders the timeline grid and its playhead.
    ///
    /// # Returns
    /// `true` if time or duration changed
    fn render_timeline(ui: &mut egui::Ui, state: &mut AppState, palette: &rtimeline::TimelinePalette) -> bool {
        let timeline_rect = ui.max_rect();
        state.timeline.set_root_width(timeline_rect.width());

        let config = state.timeline.config();
        let cells = TimelineCells::split(timeline_rect, config.controls_column_width, config.header_height);
        let mut changed = false;

        ui.scope_builder(UiBuilder::new().max_rect(cells.controls), |ui| {
            changed |= play_controls::render_play_controls(ui, &mut state.timeline);
        });

        let bar_response = ui
            .scope_builder(UiBuilder::new().max_rect(cells.ruler), |ui| {
                ruler_panel::render_ruler(ui, state, palette)
            })
            .inner;

        ui.scope_builder(UiBuilder::new().max_rect(cells.track_list), |ui| {
            track_list::render_track_list(ui, state, palette);
        });

        ui.scope_builder(UiBuilder::new().max_rect(cells.keyframe_list), |ui| {
            keyframe_panel::render_keyframe_list(ui, state, palette);
        });

        // Grid lines between the cells
        let painter = ui.painter();
        let border = egui::Stroke::new(1.0, palette.border);
        painter.hline(timeline_rect.x_range(), cells.controls.bottom(), border);
        painter.vline(cells.controls.right(), timeline_rect.y_range(), border);

        match ruler_input_handler::handle_ruler_input(ui.ctx(), &bar_response, state) {
            RulerInputResult::DragStarted(time) | RulerInputResult::TimeUpdated(time) => {
                log::trace!("Ruler moved playhead to {time}");
                changed = true;
            }
            RulerInputResult::DragEnded | RulerInputResult::None => {}
        }

        playhead::render_playhead(ui, state, timeline_rect, palette);
        changed
    }
}
