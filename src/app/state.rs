use crate::caption::{CaptionConfig, DEFAULT_PRESET_INDEX};

/// Screen orientation requested from the platform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Portrait,
    Landscape,
}

/// UI state snapshot. Only `DisplayStateStore` mutates it.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayState {
    pub(super) config: CaptionConfig,
    pub(super) color_preset_index: usize,
    pub(super) is_fullscreen_active: bool,
    pub(super) is_overlay_visible: bool,
    pub(super) is_preview_active: bool,
    pub(super) font_size_pt: f32,
    pub(super) orientation: Orientation,
}

impl DisplayState {
    pub fn config(&self) -> &CaptionConfig {
        &self.config
    }

    pub fn text(&self) -> &str {
        &self.config.text
    }

    pub fn color_preset_index(&self) -> usize {
        self.color_preset_index
    }

    pub fn is_fullscreen_active(&self) -> bool {
        self.is_fullscreen_active
    }

    pub fn is_overlay_visible(&self) -> bool {
        self.is_overlay_visible
    }

    pub fn is_preview_active(&self) -> bool {
        self.is_preview_active
    }

    pub fn font_size_pt(&self) -> f32 {
        self.font_size_pt
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }
}

impl Default for DisplayState {
    fn default() -> Self {
        let config = CaptionConfig::default();
        Self {
            font_size_pt: config.style.font_size_pt,
            config,
            color_preset_index: DEFAULT_PRESET_INDEX,
            is_fullscreen_active: false,
            is_overlay_visible: false,
            is_preview_active: false,
            orientation: Orientation::Portrait,
        }
    }
}
