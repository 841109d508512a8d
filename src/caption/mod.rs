pub mod chunk;
pub mod model;
pub mod preset;
pub mod rotator;

pub use chunk::{chunk_text, join_chunks, Chunk};
pub use model::{CaptionConfig, CaptionStyle};
pub use preset::{preset, presets, ColorPreset, Rgb, DEFAULT_PRESET_INDEX};
pub use rotator::CaptionRotator;
