use crate::caption::Rgb;
use ratatui::style::Color;

/// Colors for the editing screen chrome. Caption screens use the preset
/// colors instead.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub accent: Color,
    pub dimmed: Color,
    pub button: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::midnight()
    }
}

impl Theme {
    pub fn midnight() -> Self {
        Self {
            background: Color::Rgb(26, 27, 38), // #1A1B26
            text: Color::Rgb(230, 230, 230),
            accent: Color::Rgb(247, 118, 142), // #F7768E
            dimmed: Color::Rgb(100, 110, 150),
            button: Color::Rgb(211, 211, 211), // LightGray
        }
    }

    pub fn current() -> Self {
        Self::midnight()
    }
}

pub fn to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

/// Convenience access to current theme colors
pub mod colors {
    use super::Theme;
    use ratatui::style::Color;

    pub fn background() -> Color {
        Theme::current().background
    }
    pub fn text() -> Color {
        Theme::current().text
    }
    pub fn accent() -> Color {
        Theme::current().accent
    }
    pub fn dimmed() -> Color {
        Theme::current().dimmed
    }
    pub fn button() -> Color {
        Theme::current().button
    }
}
