//! Large caption text drawn with half-block cells
//!
//! The terminal controls its own font, so a caption "at 300 pt" is produced
//! by rasterizing the chunk with ab_glyph into a 1-bit bitmap and painting
//! two bitmap rows per cell with `▀`, `▄` and `█`. When no font is available
//! (or it lacks a glyph) the caption falls back to a plain text line.

use ab_glyph::{point, Font, FontVec, PxScale, ScaleFont};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::Widget,
};
use std::path::Path;

/// Points of font size per terminal row of caption height.
pub const POINTS_PER_ROW: f32 = 20.0;

const SYSTEM_FONT_PATHS: &[&str] = &[
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Bold.ttc",
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/truetype/wqy/wqy-microhei.ttc",
    "/usr/share/fonts/truetype/wqy/wqy-zenhei.ttc",
    "/System/Library/Fonts/PingFang.ttc",
    "C:\\Windows\\Fonts\\msyh.ttc",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
];

/// 1-bit raster of a line of text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    width: usize,
    height: usize,
    pixels: Vec<bool>,
}

impl Bitmap {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![false; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height && self.pixels[y * self.width + x]
    }

    pub fn set(&mut self, x: usize, y: usize) {
        if x < self.width && y < self.height {
            self.pixels[y * self.width + x] = true;
        }
    }
}

/// Something that can turn a line of text into pixels `px_height` tall.
pub trait GlyphSource {
    /// Returns None when any character can't be drawn.
    fn rasterize(&self, text: &str, px_height: u32) -> Option<Bitmap>;
}

/// ab_glyph-backed glyph source
pub struct FontGlyphs {
    font: FontVec,
}

impl FontGlyphs {
    pub fn from_bytes(bytes: Vec<u8>) -> Option<Self> {
        FontVec::try_from_vec_and_index(bytes, 0)
            .ok()
            .map(|font| Self { font })
    }

    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Option<Self> {
        std::fs::read(path).ok().and_then(Self::from_bytes)
    }

    /// Configured path first, then well-known system fonts.
    pub fn discover(configured: Option<&Path>) -> Option<Self> {
        if let Some(path) = configured {
            match Self::load_from_path(path) {
                Some(glyphs) => return Some(glyphs),
                None => log::warn!("could not load font {}", path.display()),
            }
        }
        SYSTEM_FONT_PATHS.iter().find_map(|path| {
            let glyphs = Self::load_from_path(path)?;
            log::info!("caption font: {path}");
            Some(glyphs)
        })
    }
}

impl GlyphSource for FontGlyphs {
    fn rasterize(&self, text: &str, px_height: u32) -> Option<Bitmap> {
        if text.is_empty() || px_height == 0 {
            return None;
        }
        let scale = PxScale::from(px_height as f32);
        let scaled = self.font.as_scaled(scale);

        let mut glyphs = Vec::new();
        let mut caret = 0.0f32;
        for c in text.chars() {
            let id = self.font.glyph_id(c);
            if id.0 == 0 && !c.is_whitespace() {
                return None;
            }
            glyphs.push(id.with_scale_and_position(scale, point(caret, scaled.ascent())));
            caret += scaled.h_advance(id);
        }

        let mut bitmap = Bitmap::new(caret.ceil().max(1.0) as usize, px_height as usize);
        for glyph in glyphs {
            let Some(outlined) = self.font.outline_glyph(glyph) else {
                continue;
            };
            let bounds = outlined.px_bounds();
            outlined.draw(|x, y, coverage| {
                if coverage >= 0.5 {
                    let px = bounds.min.x + x as f32;
                    let py = bounds.min.y + y as f32;
                    if px >= 0.0 && py >= 0.0 {
                        bitmap.set(px as usize, py as usize);
                    }
                }
            });
        }
        Some(bitmap)
    }
}

/// Caption height in rows for a font size, limited to what fits.
pub fn caption_rows(font_size_pt: f32, max_rows: u16) -> u16 {
    if max_rows == 0 {
        return 0;
    }
    let rows = (font_size_pt / POINTS_PER_ROW).round();
    if rows.is_nan() {
        return 1;
    }
    (rows.max(1.0) as u16).min(max_rows)
}

/// Two bitmap rows per cell row.
pub fn bitmap_to_lines(bitmap: &Bitmap, style: Style) -> Vec<Line<'static>> {
    (0..bitmap.height().div_ceil(2))
        .map(|row| {
            let cells: String = (0..bitmap.width())
                .map(|x| {
                    match (bitmap.get(x, row * 2), bitmap.get(x, row * 2 + 1)) {
                        (true, true) => '█',
                        (true, false) => '▀',
                        (false, true) => '▄',
                        (false, false) => ' ',
                    }
                })
                .collect();
            Line::styled(cells, style)
        })
        .collect()
}

/// Caption chunk sized by font size, centered in its area
pub struct BigCaption<'a> {
    pub text: &'a str,
    pub font_size_pt: f32,
    pub foreground: Color,
    pub background: Color,
    pub bold: bool,
    pub glyphs: Option<&'a dyn GlyphSource>,
}

impl BigCaption<'_> {
    fn style(&self) -> Style {
        let style = Style::default().fg(self.foreground).bg(self.background);
        if self.bold {
            style.add_modifier(Modifier::BOLD)
        } else {
            style
        }
    }

    /// Rasterizes at the height the font size asks for, shrinking once if
    /// the result is wider than the area.
    fn raster(&self, area: Rect) -> Option<Bitmap> {
        let glyphs = self.glyphs?;
        let rows = caption_rows(self.font_size_pt, area.height);
        if rows == 0 || self.text.is_empty() {
            return None;
        }
        let px = u32::from(rows) * 2;
        let bitmap = glyphs.rasterize(self.text, px)?;
        let width = area.width as usize;
        if bitmap.width() <= width {
            return Some(bitmap);
        }
        let fitted = (px as usize * width / bitmap.width()).max(2) as u32;
        glyphs
            .rasterize(self.text, fitted)
            .filter(|b| b.width() <= width)
    }
}

impl Widget for BigCaption<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(self.background));
        if area.is_empty() {
            return;
        }

        let Some(bitmap) = self.raster(area) else {
            let line = Line::styled(self.text.to_string(), self.style());
            let y = area.y + area.height / 2;
            let width = line.width().min(area.width as usize) as u16;
            let x = area.x + (area.width - width) / 2;
            buf.set_line(x, y, &line, width);
            return;
        };

        let lines = bitmap_to_lines(&bitmap, self.style());
        let height = (lines.len() as u16).min(area.height);
        let width = bitmap.width() as u16;
        let top = area.y + (area.height - height) / 2;
        let left = area.x + area.width.saturating_sub(width) / 2;
        for (i, line) in lines.iter().take(height as usize).enumerate() {
            buf.set_line(left, top + i as u16, line, width);
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Draws every character as a solid square `px_height` wide.
    pub(crate) struct SolidGlyphs;

    impl GlyphSource for SolidGlyphs {
        fn rasterize(&self, text: &str, px_height: u32) -> Option<Bitmap> {
            let side = px_height as usize;
            let mut bitmap = Bitmap::new(side * text.chars().count(), side);
            for y in 0..bitmap.height() {
                for x in 0..bitmap.width() {
                    bitmap.set(x, y);
                }
            }
            Some(bitmap)
        }
    }

    #[test]
    fn test_caption_rows_tracks_font_size() {
        assert_eq!(caption_rows(80.0, 100), 4);
        assert_eq!(caption_rows(150.0, 100), 8);
        assert_eq!(caption_rows(500.0, 100), 25);
    }

    #[test]
    fn test_caption_rows_limited_by_area() {
        assert_eq!(caption_rows(500.0, 10), 10);
        assert_eq!(caption_rows(5.0, 10), 1);
        assert_eq!(caption_rows(150.0, 0), 0);
    }

    #[test]
    fn test_bitmap_to_lines_half_blocks() {
        let mut bitmap = Bitmap::new(3, 2);
        bitmap.set(0, 0);
        bitmap.set(0, 1);
        bitmap.set(1, 0);
        bitmap.set(2, 1);
        let lines = bitmap_to_lines(&bitmap, Style::default());
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].to_string(), "█▀▄");
    }

    #[test]
    fn test_wide_caption_is_shrunk_to_fit() {
        let caption = BigCaption {
            text: "关闭",
            font_size_pt: 500.0,
            foreground: Color::Yellow,
            background: Color::Black,
            bold: true,
            glyphs: Some(&SolidGlyphs),
        };
        let area = Rect::new(0, 0, 40, 30);
        let bitmap = caption.raster(area).unwrap();
        assert!(bitmap.width() <= 40);
        assert_eq!(bitmap.height(), 20);
    }

    #[test]
    fn test_missing_font_file() {
        assert!(FontGlyphs::load_from_path("/nonexistent/font.ttf").is_none());
    }
}
