//! Label font loading with a built-in bitmap fallback
//!
//! The generator prefers a TrueType font from disk. When that is missing or
//! unreadable it draws labels with a small 5x7 bitmap font compiled into the
//! binary, so labels always render.

use ab_glyph::{Font, FontVec, PxScale, ScaleFont};
use anyhow::{Context, Result};
use image::{Rgba, RgbaImage};
use imageproc::drawing::{draw_text_mut, text_size};
use log::debug;
use std::fs;
use std::path::Path;

/// Bitmap glyph cell, in font units
const GLYPH_WIDTH: u32 = 5;
const GLYPH_HEIGHT: u32 = 7;
/// Each bitmap font unit becomes this many pixels
const BITMAP_SCALE: u32 = 2;
const BITMAP_ADVANCE: u32 = (GLYPH_WIDTH + 1) * BITMAP_SCALE;

/// Font used to draw sprite labels
pub enum LabelFont {
    Outline { font: FontVec, scale: PxScale },
    Bitmap,
}

impl LabelFont {
    /// Load a TrueType/OpenType font at the given pixel size
    pub fn load(path: &Path, size: f32) -> Result<Self> {
        let bytes =
            fs::read(path).with_context(|| format!("Failed to read font {}", path.display()))?;
        let font = FontVec::try_from_vec(bytes)
            .with_context(|| format!("Invalid font data in {}", path.display()))?;
        Ok(LabelFont::Outline {
            font,
            scale: PxScale::from(size),
        })
    }

    /// Load the font, or fall back to the built-in bitmap font on any failure
    pub fn load_or_fallback(path: &Path, size: f32) -> Self {
        match Self::load(path, size) {
            Ok(font) => {
                debug!("Using label font {}", path.display());
                font
            }
            Err(e) => {
                debug!("{:#}; using built-in bitmap font", e);
                LabelFont::Bitmap
            }
        }
    }

    pub fn is_bitmap(&self) -> bool {
        matches!(self, LabelFont::Bitmap)
    }

    /// Height of one text line in pixels
    pub fn line_height(&self) -> u32 {
        match self {
            LabelFont::Outline { font, scale } => font.as_scaled(*scale).height().ceil() as u32,
            LabelFont::Bitmap => GLYPH_HEIGHT * BITMAP_SCALE,
        }
    }

    /// Width of a single line of text in pixels
    pub fn line_width(&self, text: &str) -> u32 {
        match self {
            LabelFont::Outline { font, scale } => text_size(*scale, font, text).0,
            LabelFont::Bitmap => {
                let chars = text.chars().count() as u32;
                // no gap after the last glyph
                (chars * BITMAP_ADVANCE).saturating_sub(BITMAP_SCALE)
            }
        }
    }

    /// Draw one line with its top-left corner at (x, y)
    pub fn draw_line(&self, img: &mut RgbaImage, color: Rgba<u8>, x: i32, y: i32, text: &str) {
        match self {
            LabelFont::Outline { font, scale } => {
                draw_text_mut(img, color, x, y, *scale, font, text);
            }
            LabelFont::Bitmap => {
                for (i, c) in text.chars().enumerate() {
                    let gx = x + (i as u32 * BITMAP_ADVANCE) as i32;
                    draw_bitmap_glyph(img, color, gx, y, glyph_rows(c));
                }
            }
        }
    }
}

fn draw_bitmap_glyph(img: &mut RgbaImage, color: Rgba<u8>, x: i32, y: i32, rows: [u8; 7]) {
    for (row, bits) in rows.iter().enumerate() {
        for col in 0..GLYPH_WIDTH {
            if bits & (1 << (GLYPH_WIDTH - 1 - col)) == 0 {
                continue;
            }
            for dy in 0..BITMAP_SCALE {
                for dx in 0..BITMAP_SCALE {
                    let px = x + (col * BITMAP_SCALE + dx) as i32;
                    let py = y + (row as u32 * BITMAP_SCALE + dy) as i32;
                    if px >= 0 && py >= 0 && (px as u32) < img.width() && (py as u32) < img.height()
                    {
                        img.put_pixel(px as u32, py as u32, color);
                    }
                }
            }
        }
    }
}

// 5x7 glyphs, one byte per row, bit 4 is the leftmost column

const UPPER: [[u8; 7]; 26] = [
    [0x0E, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11], // A
    [0x1E, 0x11, 0x11, 0x1E, 0x11, 0x11, 0x1E], // B
    [0x0E, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0E], // C
    [0x1C, 0x12, 0x11, 0x11, 0x11, 0x12, 0x1C], // D
    [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x1F], // E
    [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x10], // F
    [0x0E, 0x11, 0x10, 0x17, 0x11, 0x11, 0x0F], // G
    [0x11, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11], // H
    [0x0E, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E], // I
    [0x07, 0x02, 0x02, 0x02, 0x02, 0x12, 0x0C], // J
    [0x11, 0x12, 0x14, 0x18, 0x14, 0x12, 0x11], // K
    [0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1F], // L
    [0x11, 0x1B, 0x15, 0x15, 0x11, 0x11, 0x11], // M
    [0x11, 0x11, 0x19, 0x15, 0x13, 0x11, 0x11], // N
    [0x0E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E], // O
    [0x1E, 0x11, 0x11, 0x1E, 0x10, 0x10, 0x10], // P
    [0x0E, 0x11, 0x11, 0x11, 0x15, 0x12, 0x0D], // Q
    [0x1E, 0x11, 0x11, 0x1E, 0x14, 0x12, 0x11], // R
    [0x0F, 0x10, 0x10, 0x0E, 0x01, 0x01, 0x1E], // S
    [0x1F, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04], // T
    [0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E], // U
    [0x11, 0x11, 0x11, 0x11, 0x11, 0x0A, 0x04], // V
    [0x11, 0x11, 0x11, 0x15, 0x15, 0x15, 0x0A], // W
    [0x11, 0x11, 0x0A, 0x04, 0x0A, 0x11, 0x11], // X
    [0x11, 0x11, 0x0A, 0x04, 0x04, 0x04, 0x04], // Y
    [0x1F, 0x01, 0x02, 0x04, 0x08, 0x10, 0x1F], // Z
];

const LOWER: [[u8; 7]; 26] = [
    [0x00, 0x00, 0x0E, 0x01, 0x0F, 0x11, 0x0F], // a
    [0x10, 0x10, 0x16, 0x19, 0x11, 0x11, 0x1E], // b
    [0x00, 0x00, 0x0E, 0x10, 0x10, 0x11, 0x0E], // c
    [0x01, 0x01, 0x0D, 0x13, 0x11, 0x11, 0x0F], // d
    [0x00, 0x00, 0x0E, 0x11, 0x1F, 0x10, 0x0E], // e
    [0x06, 0x09, 0x08, 0x1C, 0x08, 0x08, 0x08], // f
    [0x00, 0x0F, 0x11, 0x11, 0x0F, 0x01, 0x0E], // g
    [0x10, 0x10, 0x16, 0x19, 0x11, 0x11, 0x11], // h
    [0x04, 0x00, 0x0C, 0x04, 0x04, 0x04, 0x0E], // i
    [0x02, 0x00, 0x06, 0x02, 0x02, 0x12, 0x0C], // j
    [0x10, 0x10, 0x12, 0x14, 0x18, 0x14, 0x12], // k
    [0x0C, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E], // l
    [0x00, 0x00, 0x1A, 0x15, 0x15, 0x11, 0x11], // m
    [0x00, 0x00, 0x16, 0x19, 0x11, 0x11, 0x11], // n
    [0x00, 0x00, 0x0E, 0x11, 0x11, 0x11, 0x0E], // o
    [0x00, 0x00, 0x1E, 0x11, 0x1E, 0x10, 0x10], // p
    [0x00, 0x00, 0x0D, 0x13, 0x0F, 0x01, 0x01], // q
    [0x00, 0x00, 0x16, 0x19, 0x10, 0x10, 0x10], // r
    [0x00, 0x00, 0x0E, 0x10, 0x0E, 0x01, 0x1E], // s
    [0x08, 0x08, 0x1C, 0x08, 0x08, 0x09, 0x06], // t
    [0x00, 0x00, 0x11, 0x11, 0x11, 0x13, 0x0D], // u
    [0x00, 0x00, 0x11, 0x11, 0x11, 0x0A, 0x04], // v
    [0x00, 0x00, 0x11, 0x11, 0x15, 0x15, 0x0A], // w
    [0x00, 0x00, 0x11, 0x0A, 0x04, 0x0A, 0x11], // x
    [0x00, 0x00, 0x11, 0x11, 0x0F, 0x01, 0x0E], // y
    [0x00, 0x00, 0x1F, 0x02, 0x04, 0x08, 0x1F], // z
];

const DIGITS: [[u8; 7]; 10] = [
    [0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E],
    [0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E],
    [0x0E, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1F],
    [0x1F, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0E],
    [0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02],
    [0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E],
    [0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E],
    [0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08],
    [0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E],
    [0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C],
];

const UNKNOWN: [u8; 7] = [0x1F, 0x11, 0x11, 0x11, 0x11, 0x11, 0x1F];

fn glyph_rows(c: char) -> [u8; 7] {
    match c {
        'A'..='Z' => UPPER[(c as u8 - b'A') as usize],
        'a'..='z' => LOWER[(c as u8 - b'a') as usize],
        '0'..='9' => DIGITS[(c as u8 - b'0') as usize],
        ' ' => [0; 7],
        '-' => [0x00, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x00],
        '_' => [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x1F],
        '.' => [0x00, 0x00, 0x00, 0x00, 0x00, 0x0C, 0x0C],
        _ => UNKNOWN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_font_falls_back_to_bitmap() {
        let font = LabelFont::load_or_fallback(Path::new("/nonexistent/NoSuchFont.ttf"), 16.0);
        assert!(font.is_bitmap());
        assert!(font.line_width("Forest") > 0);
        assert!(font.line_height() > 0);
    }

    #[test]
    fn invalid_font_data_falls_back_to_bitmap() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.ttf");
        fs::write(&path, b"not a font").unwrap();
        assert!(LabelFont::load(&path, 16.0).is_err());
        assert!(LabelFont::load_or_fallback(&path, 16.0).is_bitmap());
    }

    #[test]
    fn bitmap_width_grows_with_text() {
        let font = LabelFont::Bitmap;
        assert_eq!(font.line_width(""), 0);
        assert_eq!(font.line_width("A"), GLYPH_WIDTH * BITMAP_SCALE);
        assert!(font.line_width("Mountain") > font.line_width("Tiny"));
    }

    #[test]
    fn bitmap_glyphs_draw_inside_their_cell_and_clip_at_edges() {
        let mut img = RgbaImage::new(32, 32);
        let black = Rgba([0, 0, 0, 255]);
        LabelFont::Bitmap.draw_line(&mut img, black, 0, 0, "H");
        // H has a full-width crossbar on row 3
        for col in 0..GLYPH_WIDTH * BITMAP_SCALE {
            assert_eq!(*img.get_pixel(col, 3 * BITMAP_SCALE), black);
        }
        assert_eq!(img.get_pixel(GLYPH_WIDTH * BITMAP_SCALE, 0)[3], 0);

        // partially off-canvas text must not panic
        LabelFont::Bitmap.draw_line(&mut img, black, 28, 28, "Wide text");
        LabelFont::Bitmap.draw_line(&mut img, black, -8, -8, "W");
    }
}
