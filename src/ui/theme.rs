use std::fs;

use ratatui::style::Color;
use rust_embed::Embed;
use serde::{Deserialize, Serialize};

use crate::game::feedback::Feedback;

#[derive(Embed)]
#[folder = "assets/themes/"]
struct ThemeAssets;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ThemeColors {
    pub bg: String,
    pub fg: String,
    pub text_pending: String,
    pub accent: String,
    pub border: String,
    pub header_bg: String,
    pub header_fg: String,
    pub tile_fg: String,
    pub tile_exact: String,
    pub tile_present: String,
    pub tile_absent: String,
    pub tile_empty: String,
    pub key_unused: String,
    pub key_pressed: String,
    pub error: String,
    pub success: String,
}

impl Theme {
    pub fn load(name: &str) -> Option<Self> {
        // User themes shadow bundled ones
        if let Some(config_dir) = dirs::config_dir() {
            let user_theme_path = config_dir
                .join("wordly")
                .join("themes")
                .join(format!("{name}.toml"));
            if let Ok(content) = fs::read_to_string(&user_theme_path) {
                match toml::from_str::<Theme>(&content) {
                    Ok(theme) => return Some(theme),
                    Err(err) => tracing::warn!(
                        path = %user_theme_path.display(),
                        error = %err,
                        "ignoring unparsable user theme"
                    ),
                }
            }
        }

        let filename = format!("{name}.toml");
        let file = ThemeAssets::get(&filename)?;
        let content = std::str::from_utf8(file.data.as_ref()).ok()?;
        toml::from_str::<Theme>(content).ok()
    }

    pub fn available_themes() -> Vec<String> {
        let mut names: Vec<String> = ThemeAssets::iter()
            .filter_map(|f| f.strip_suffix(".toml").map(|n| n.to_string()))
            .collect();
        names.sort();
        names
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::load("catppuccin-mocha").unwrap_or_else(|| Self {
            name: "default".to_string(),
            colors: ThemeColors::default(),
        })
    }
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            bg: "#1e1e2e".to_string(),
            fg: "#cdd6f4".to_string(),
            text_pending: "#585b70".to_string(),
            accent: "#89b4fa".to_string(),
            border: "#45475a".to_string(),
            header_bg: "#313244".to_string(),
            header_fg: "#cdd6f4".to_string(),
            tile_fg: "#1e1e2e".to_string(),
            tile_exact: "#a6e3a1".to_string(),
            tile_present: "#f9e2af".to_string(),
            tile_absent: "#585b70".to_string(),
            tile_empty: "#313244".to_string(),
            key_unused: "#45475a".to_string(),
            key_pressed: "#f5e0dc".to_string(),
            error: "#f38ba8".to_string(),
            success: "#a6e3a1".to_string(),
        }
    }
}

impl ThemeColors {
    pub fn parse_color(hex: &str) -> Color {
        let hex = hex.trim_start_matches('#');
        if hex.len() == 6 && hex.is_ascii() {
            if let (Ok(r), Ok(g), Ok(b)) = (
                u8::from_str_radix(&hex[0..2], 16),
                u8::from_str_radix(&hex[2..4], 16),
                u8::from_str_radix(&hex[4..6], 16),
            ) {
                return Color::Rgb(r, g, b);
            }
        }
        Color::White
    }

    pub fn bg(&self) -> Color { Self::parse_color(&self.bg) }
    pub fn fg(&self) -> Color { Self::parse_color(&self.fg) }
    pub fn text_pending(&self) -> Color { Self::parse_color(&self.text_pending) }
    pub fn accent(&self) -> Color { Self::parse_color(&self.accent) }
    pub fn border(&self) -> Color { Self::parse_color(&self.border) }
    pub fn header_bg(&self) -> Color { Self::parse_color(&self.header_bg) }
    pub fn header_fg(&self) -> Color { Self::parse_color(&self.header_fg) }
    pub fn tile_fg(&self) -> Color { Self::parse_color(&self.tile_fg) }
    pub fn tile_empty(&self) -> Color { Self::parse_color(&self.tile_empty) }
    pub fn key_unused(&self) -> Color { Self::parse_color(&self.key_unused) }
    pub fn key_pressed(&self) -> Color { Self::parse_color(&self.key_pressed) }
    pub fn error(&self) -> Color { Self::parse_color(&self.error) }
    pub fn success(&self) -> Color { Self::parse_color(&self.success) }

    /// Background for a board tile or keyboard key with the given feedback.
    pub fn feedback(&self, feedback: Feedback) -> Color {
        match feedback {
            Feedback::Exact => Self::parse_color(&self.tile_exact),
            Feedback::Present => Self::parse_color(&self.tile_present),
            Feedback::Absent => Self::parse_color(&self.tile_absent),
            Feedback::Unfilled => self.tile_empty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color() {
        assert_eq!(ThemeColors::parse_color("#a6e3a1"), Color::Rgb(0xa6, 0xe3, 0xa1));
        assert_eq!(ThemeColors::parse_color("538d4e"), Color::Rgb(0x53, 0x8d, 0x4e));
        assert_eq!(ThemeColors::parse_color("#zzz"), Color::White);
    }

    #[test]
    fn test_parse_color_non_ascii_falls_back() {
        // Six bytes, but not six hex digits.
        assert_eq!(ThemeColors::parse_color("#a\u{e9}\u{e9}b"), Color::White);
        assert_eq!(ThemeColors::parse_color("\u{1f600}ab"), Color::White);
    }

    #[test]
    fn test_bundled_themes_parse() {
        let names = Theme::available_themes();
        assert!(names.contains(&"catppuccin-mocha".to_string()));
        assert!(names.contains(&"classic".to_string()));
        for name in names {
            assert!(Theme::load(&name).is_some(), "{name}");
        }
    }

    #[test]
    fn test_theme_file_with_extra_keys_parses() {
        let content = r##"
name = "old"

[colors]
bg = "#000000"
fg = "#ffffff"
text_pending = "#777777"
accent = "#0000ff"
border = "#333333"
border_focused = "#0000ff"
header_bg = "#111111"
header_fg = "#eeeeee"
tile_fg = "#ffffff"
tile_exact = "#00ff00"
tile_present = "#ffff00"
tile_absent = "#444444"
tile_empty = "#222222"
key_unused = "#555555"
key_pressed = "#999999"
error = "#ff0000"
success = "#00ff00"
"##;
        let theme: Theme = toml::from_str(content).unwrap();
        assert_eq!(theme.colors.border(), Color::Rgb(0x33, 0x33, 0x33));
    }

    #[test]
    fn test_unknown_theme() {
        assert!(Theme::load("no-such-theme").is_none());
    }

    #[test]
    fn test_feedback_colors_distinct() {
        let colors = ThemeColors::default();
        let exact = colors.feedback(Feedback::Exact);
        let present = colors.feedback(Feedback::Present);
        let absent = colors.feedback(Feedback::Absent);
        assert_ne!(exact, present);
        assert_ne!(present, absent);
        assert_eq!(colors.feedback(Feedback::Unfilled), colors.tile_empty());
    }
}
