// Configuration for the caption engine and terminal front end.
// Defaults match the stock warning screen: "关闭远光灯", 1 s per chunk, 150 pt.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_CAPTION_TEXT: &str = "关闭远光灯";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("config serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Startup caption settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptionSettings {
    pub text: String,

    /// Milliseconds between chunk advances (must be >= 1)
    pub interval_ms: u64,

    pub font_size_pt: f32,

    pub bold: bool,

    /// Index into the color preset table (0 = Warning)
    pub preset: usize,

    /// Font used to draw the large caption; system fonts are tried when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_path: Option<PathBuf>,
}

impl Default for CaptionSettings {
    fn default() -> Self {
        Self {
            text: DEFAULT_CAPTION_TEXT.to_string(),
            interval_ms: 1000,
            font_size_pt: 150.0,
            bold: true,
            preset: 0,
            font_path: None,
        }
    }
}

/// Bounds and step sizes for user adjustments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Limits {
    pub font_size_min: f32,
    pub font_size_max: f32,

    /// Font size change per Up/Down press in preview
    pub font_size_step: f32,

    /// How long the "end" overlay stays up after a tap
    pub overlay_ms: u64,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            font_size_min: 80.0,
            font_size_max: 500.0,
            font_size_step: 10.0,
            overlay_ms: 3000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub caption: CaptionSettings,
    pub limits: Limits,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(path, toml_str)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.caption.interval_ms == 0 {
            return Err(ConfigError::Invalid(
                "caption.interval_ms must be at least 1".to_string(),
            ));
        }
        let limits = &self.limits;
        if !limits.font_size_min.is_finite()
            || !limits.font_size_max.is_finite()
            || limits.font_size_min > limits.font_size_max
        {
            return Err(ConfigError::Invalid(format!(
                "limits.font_size_min ({}) must not exceed limits.font_size_max ({})",
                limits.font_size_min, limits.font_size_max
            )));
        }
        if limits.font_size_step <= 0.0 {
            return Err(ConfigError::Invalid(
                "limits.font_size_step must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
