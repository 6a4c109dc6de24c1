//! Color palettes for the timeline widget.
//!
//! Two built-in themes (Dark, Light) and a small manager that looks them up by
//! name and applies them to egui visuals.
//!
//! # Examples
//!
//! ```
//! use rtimeline::theme::ThemeManager;
//!
//! let manager = ThemeManager::new();
//! let dark = manager.get_theme("Dark").unwrap();
//! println!("Playhead color: {:?}", dark.colors.playhead);
//! ```

use egui::Color32;
use std::collections::HashMap;

/// Colors of every timeline element.
#[derive(Debug, Clone)]
pub struct TimelinePalette {
    // Surfaces
    pub page_background: Color32,
    pub timeline_background: Color32,
    pub input_background: Color32,
    pub border: Color32,

    // Text
    pub text: Color32,
    pub text_dim: Color32,

    // Timeline elements
    pub ruler_bar: Color32,
    pub segment: Color32,
    pub playhead: Color32,
    pub selection: Color32,
}

/// A named palette.
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub dark: bool,
    pub colors: TimelinePalette,
}

/// Registry of the built-in themes.
pub struct ThemeManager {
    themes: HashMap<String, Theme>,
    default_theme: Theme,
}

impl ThemeManager {
    pub const DEFAULT_THEME: &'static str = "Dark";

    /// Creates a manager with all built-in themes.
    pub fn new() -> Self {
        let default_theme = dark_theme();
        let mut themes = HashMap::new();
        for theme in [default_theme.clone(), light_theme()] {
            themes.insert(theme.name.clone(), theme);
        }
        Self { themes, default_theme }
    }

    /// Retrieves a theme by name.
    pub fn get_theme(&self, name: &str) -> Option<&Theme> {
        self.themes.get(name)
    }

    /// Retrieves a theme by name, falling back to the default one.
    pub fn theme_or_default(&self, name: &str) -> &Theme {
        self.themes.get(name).unwrap_or(&self.default_theme)
    }

    /// Sorted names of all themes.
    pub fn list_themes(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.themes.keys().map(|s| s.as_str()).collect();
        names.sort();
        names
    }

    /// Builds egui visuals for a theme.
    pub fn visuals(&self, theme: &Theme) -> egui::Visuals {
        let colors = &theme.colors;
        let mut visuals = if theme.dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };

        visuals.panel_fill = colors.page_background;
        visuals.window_fill = colors.timeline_background;
        visuals.extreme_bg_color = colors.input_background;
        visuals.override_text_color = Some(colors.text);
        visuals.selection.bg_fill = colors.selection;
        visuals.widgets.noninteractive.bg_stroke.color = colors.border;
        visuals.widgets.inactive.bg_fill = colors.input_background;
        visuals
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}

fn dark_theme() -> Theme {
    Theme {
        name: "Dark".to_string(),
        dark: true,
        colors: TimelinePalette {
            page_background: hex_to_color32("#111827"),
            timeline_background: hex_to_color32("#1f2937"),
            input_background: hex_to_color32("#374151"),
            border: hex_to_color32("#374151"),

            text: hex_to_color32("#f9fafb"),
            text_dim: hex_to_color32("#d1d5db"),

            ruler_bar: with_alpha(Color32::WHITE, 64),
            segment: with_alpha(Color32::WHITE, 26),
            playhead: hex_to_color32("#ca8a04"),
            selection: hex_to_color32("#1d4ed8"),
        },
    }
}

fn light_theme() -> Theme {
    Theme {
        name: "Light".to_string(),
        dark: false,
        colors: TimelinePalette {
            page_background: hex_to_color32("#f3f4f6"),
            timeline_background: hex_to_color32("#ffffff"),
            input_background: hex_to_color32("#e5e7eb"),
            border: hex_to_color32("#d1d5db"),

            text: hex_to_color32("#111827"),
            text_dim: hex_to_color32("#4b5563"),

            ruler_bar: with_alpha(Color32::BLACK, 48),
            segment: with_alpha(Color32::BLACK, 20),
            playhead: hex_to_color32("#a16207"),
            selection: hex_to_color32("#93c5fd"),
        },
    }
}

/// Converts a hex color string (like "#1f2937") to Color32
pub fn hex_to_color32(hex: &str) -> Color32 {
    let hex = hex.trim_start_matches('#');

    if hex.len() == 6 {
        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(0);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(0);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(0);
        Color32::from_rgb(r, g, b)
    } else {
        Color32::from_rgb(0, 0, 0) // Fallback to black
    }
}

/// Translucent version of a color; `alpha` is the coverage, 0-255.
pub fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_to_color32() {
        assert_eq!(hex_to_color32("#ca8a04"), Color32::from_rgb(0xca, 0x8a, 0x04));
        assert_eq!(hex_to_color32("bogus"), Color32::from_rgb(0, 0, 0));
    }

    #[test]
    fn test_builtin_themes() {
        let manager = ThemeManager::new();
        assert_eq!(manager.list_themes(), vec!["Dark", "Light"]);
        assert!(manager.get_theme("Dark").unwrap().dark);
        assert!(!manager.get_theme("Light").unwrap().dark);
    }

    #[test]
    fn test_unknown_theme_falls_back() {
        let manager = ThemeManager::new();
        assert_eq!(manager.theme_or_default("Dracula").name, "Dark");
        assert_eq!(manager.theme_or_default("Light").name, "Light");
        assert_eq!(manager.theme_or_default("").name, ThemeManager::DEFAULT_THEME);
    }
}
