use crate::app::mode::AppMode;
use crate::app::state::{DisplayState, Orientation};
use crate::caption::Rgb;

/// Read-only snapshot handed to the view layer
#[derive(Debug, Clone, PartialEq)]
pub struct RenderState {
    pub mode: AppMode,
    pub text: String,
    pub visible_chunk: Option<String>,
    pub foreground: Rgb,
    pub background: Rgb,
    pub bold: bool,
    pub font_size_pt: f32,
    pub font_size_range: (f32, f32),
    pub preset_index: usize,
    pub overlay_visible: bool,
    pub orientation: Orientation,
    pub status: Option<String>,
}

impl RenderState {
    pub fn from_display_state(
        mode: AppMode,
        state: &DisplayState,
        visible_chunk: Option<String>,
        font_size_range: (f32, f32),
        status: Option<String>,
    ) -> Self {
        let config = state.config();
        Self {
            mode,
            text: config.text.clone(),
            visible_chunk,
            foreground: config.style.color,
            background: config.background_color,
            bold: config.style.bold,
            font_size_pt: state.font_size_pt(),
            font_size_range,
            preset_index: state.color_preset_index(),
            overlay_visible: state.is_overlay_visible(),
            orientation: state.orientation(),
            status,
        }
    }

    /// Position of the font size inside its range, 0.0 to 1.0
    pub fn font_size_ratio(&self) -> f64 {
        let (min, max) = self.font_size_range;
        if max <= min {
            return 0.0;
        }
        (((self.font_size_pt - min) / (max - min)) as f64).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_size_ratio() {
        let state = DisplayState::default();
        let mut render = RenderState::from_display_state(
            AppMode::Preview,
            &state,
            None,
            (80.0, 500.0),
            None,
        );
        render.font_size_pt = 290.0;
        assert!((render.font_size_ratio() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_font_size_ratio_degenerate_range() {
        let state = DisplayState::default();
        let render = RenderState::from_display_state(
            AppMode::Preview,
            &state,
            None,
            (100.0, 100.0),
            None,
        );
        assert_eq!(render.font_size_ratio(), 0.0);
    }
}
