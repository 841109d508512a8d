use crate::caption::preset::{ColorPreset, Rgb, PRESETS};
use crate::engine::config::{CaptionSettings, DEFAULT_CAPTION_TEXT};

/// Presentation attributes; the rotator never looks inside.
#[derive(Debug, Clone, PartialEq)]
pub struct CaptionStyle {
    pub color: Rgb,
    pub font_size_pt: f32,
    pub bold: bool,
}

/// Everything that identifies one rotation run. Any field change restarts
/// the rotator.
#[derive(Debug, Clone, PartialEq)]
pub struct CaptionConfig {
    pub text: String,
    pub interval_ms: u64,
    pub style: CaptionStyle,
    pub background_color: Rgb,
}

impl CaptionConfig {
    pub fn with_preset(mut self, preset: &ColorPreset) -> Self {
        self.style.color = preset.foreground;
        self.background_color = preset.background;
        self
    }
}

impl Default for CaptionConfig {
    fn default() -> Self {
        let warning = &PRESETS[0];
        Self {
            text: DEFAULT_CAPTION_TEXT.to_string(),
            interval_ms: 1000,
            style: CaptionStyle {
                color: warning.foreground,
                font_size_pt: 150.0,
                bold: true,
            },
            background_color: warning.background,
        }
    }
}

impl From<&CaptionSettings> for CaptionConfig {
    fn from(settings: &CaptionSettings) -> Self {
        let defaults = CaptionConfig::default();
        Self {
            text: settings.text.clone(),
            interval_ms: settings.interval_ms,
            style: CaptionStyle {
                font_size_pt: settings.font_size_pt,
                bold: settings.bold,
                ..defaults.style
            },
            ..defaults
        }
    }
}
