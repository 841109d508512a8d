use crate::engine::CaptionError;
use std::fmt;

/// 24-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0x00, 0x00, 0x00);
    pub const WHITE: Rgb = Rgb(0xFF, 0xFF, 0xFF);

    pub const fn from_hex(hex: u32) -> Self {
        Rgb((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

/// Named foreground/background pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPreset {
    pub name: &'static str,
    /// Label shown in the picker
    pub label: &'static str,
    pub foreground: Rgb,
    pub background: Rgb,
}

pub const PRESETS: [ColorPreset; 5] = [
    ColorPreset {
        name: "Warning",
        label: "警告",
        foreground: Rgb::from_hex(0xFFFF00),
        background: Rgb::from_hex(0x000000),
    },
    ColorPreset {
        name: "InfoScreen",
        label: "信息屏",
        foreground: Rgb::from_hex(0xFFFFFF),
        background: Rgb::from_hex(0x000080),
    },
    ColorPreset {
        name: "Emergency",
        label: "紧急",
        foreground: Rgb::from_hex(0xFF0000),
        background: Rgb::from_hex(0xFFFFFF),
    },
    ColorPreset {
        name: "Safety",
        label: "安全",
        foreground: Rgb::from_hex(0xFFA500),
        background: Rgb::from_hex(0x000000),
    },
    ColorPreset {
        name: "Evacuation",
        label: "逃生",
        foreground: Rgb::from_hex(0x00FF00),
        background: Rgb::from_hex(0x333333),
    },
];

pub const DEFAULT_PRESET_INDEX: usize = 0;

pub fn presets() -> &'static [ColorPreset] {
    &PRESETS
}

pub fn preset(index: usize) -> Result<&'static ColorPreset, CaptionError> {
    PRESETS.get(index).ok_or(CaptionError::OutOfRange {
        index,
        len: PRESETS.len(),
    })
}
