//! Demo chrome theme, loadable from JSON.

use serde::{Deserialize, Serialize};

/// Color representation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Converts to iced Color.
    pub fn to_iced(&self) -> iced::Color {
        iced::Color::from_rgba(self.r, self.g, self.b, self.a)
    }
}

/// Colors for the demo window chrome (the panels carry their own).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub editor_background: Color,
    pub editor_text: Color,
    pub toolbar_background: Color,
    pub button: Color,
    pub button_hover: Color,
    pub button_label: Color,
    pub border: Color,
}

impl Theme {
    /// The default dark theme.
    pub fn dark() -> Self {
        Self {
            name: "Gutter Dark".to_string(),
            editor_background: Color::rgb(0.10, 0.10, 0.12),
            editor_text: Color::rgb(0.9, 0.9, 0.9),
            toolbar_background: Color::rgb(0.13, 0.13, 0.13),
            button: Color::rgb(0.24, 0.24, 0.26),
            button_hover: Color::rgb(0.30, 0.30, 0.33),
            button_label: Color::rgb(0.92, 0.92, 0.92),
            border: Color::rgb(0.25, 0.25, 0.28),
        }
    }

    /// Loads a theme from a JSON file.
    pub fn load(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }

    /// Saves the theme to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        std::fs::write(path, content)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_round_trips_through_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("theme.json");

        let theme = Theme::dark();
        theme.save(&path).unwrap();
        let loaded = Theme::load(&path).unwrap();

        assert_eq!(loaded, theme);
    }

    #[test]
    fn test_load_rejects_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("theme.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(Theme::load(&path).is_err());
    }
}
