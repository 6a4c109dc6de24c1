//! Header panel UI rendering
//!
//! Handles the top bar with the application title and theme selector.

use crate::app::AppState;

/// Result of user interaction with the header panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderInteraction {
    /// User picked a different theme
    ThemeChanged(String),
}

/// Renders the application header.
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Mutable reference to application state
///
/// # Returns
/// * `Option<HeaderInteraction>` - User interaction result
pub fn render_header(ui: &mut egui::Ui, state: &mut AppState) -> Option<HeaderInteraction> {
    let mut interaction = None;

    ui.horizontal(|ui| {
        ui.strong("Timeline");

        // Push theme selector to the right
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let old_theme = state.theme.current_theme_name().to_string();
            let mut current_theme = old_theme.clone();
            egui::ComboBox::from_id_salt("theme_selector")
                .selected_text(&current_theme)
                .show_ui(ui, |ui| {
                    for theme_name in state.theme.theme_manager().list_themes() {
                        ui.selectable_value(
                            &mut current_theme,
                            theme_name.to_string(),
                            theme_name
                        );
                    }
                });

            if old_theme != current_theme {
                state.theme.set_theme(current_theme.clone());
                interaction = Some(HeaderInteraction::ThemeChanged(current_theme));
                ui.ctx().request_repaint();
            }

            ui.label("Theme:");
        });
    });

    interaction
}
