//! Text labels near the bottom edge of a sprite

use image::{Rgba, RgbaImage};

use super::draw::filled_rect;
use super::font::LabelFont;
use crate::constants::{
    LABEL_BACKGROUND, LABEL_BOTTOM_MARGIN, LABEL_LINE_SPACING, LABEL_PADDING, LABEL_TEXT,
};

/// Measured size of a (possibly multi-line) label
pub fn measure(font: &LabelFont, text: &str) -> (u32, u32) {
    let lines: Vec<&str> = text.lines().collect();
    if lines.is_empty() {
        return (0, 0);
    }
    let width = lines.iter().map(|l| font.line_width(l)).max().unwrap_or(0);
    let height = lines.len() as u32 * font.line_height()
        + (lines.len() as u32 - 1) * LABEL_LINE_SPACING;
    (width, height)
}

/// Draw `text` as a horizontally centered block, `LABEL_BOTTOM_MARGIN` above
/// the bottom edge, on a translucent white box padded by `LABEL_PADDING`.
/// Lines inside the block are left-aligned.
pub fn draw_label(img: &mut RgbaImage, font: &LabelFont, text: &str) {
    if text.trim().is_empty() {
        return;
    }
    let (text_w, text_h) = measure(font, text);
    let (canvas_w, canvas_h) = img.dimensions();

    let text_x = (canvas_w as i32 - text_w as i32) / 2;
    let text_y = canvas_h as i32 - text_h as i32 - LABEL_BOTTOM_MARGIN;

    filled_rect(
        img,
        [
            text_x - LABEL_PADDING,
            text_y - LABEL_PADDING,
            text_x + text_w as i32 + LABEL_PADDING,
            text_y + text_h as i32 + LABEL_PADDING,
        ],
        Rgba(LABEL_BACKGROUND),
    );

    let step = (font.line_height() + LABEL_LINE_SPACING) as i32;
    for (i, line) in text.lines().enumerate() {
        font.draw_line(img, Rgba(LABEL_TEXT), text_x, text_y + i as i32 * step, line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::SPRITE_SIZE;

    #[test]
    fn two_lines_are_taller_than_one() {
        let font = LabelFont::Bitmap;
        let (w1, h1) = measure(&font, "Forest");
        let (w2, h2) = measure(&font, "Forest\nMedium");
        assert_eq!(w1, w2);
        assert_eq!(h2, 2 * h1 + LABEL_LINE_SPACING);
        assert_eq!(measure(&font, ""), (0, 0));
    }

    #[test]
    fn label_box_sits_above_bottom_margin() {
        let mut img = RgbaImage::new(SPRITE_SIZE, SPRITE_SIZE);
        let font = LabelFont::Bitmap;
        draw_label(&mut img, &font, "HealingAura");

        let (_, h) = measure(&font, "HealingAura");
        let top = SPRITE_SIZE as i32 - h as i32 - LABEL_BOTTOM_MARGIN - LABEL_PADDING;
        let bottom = SPRITE_SIZE as i32 - LABEL_BOTTOM_MARGIN + LABEL_PADDING;

        let center = SPRITE_SIZE / 2;
        // above and below the box stay transparent
        assert_eq!(img.get_pixel(center, (top - 1) as u32)[3], 0);
        assert_eq!(img.get_pixel(center, (bottom + 1) as u32)[3], 0);
        // box corner carries the translucent background
        let (w, _) = measure(&font, "HealingAura");
        let left = (SPRITE_SIZE as i32 - w as i32) / 2 - LABEL_PADDING;
        assert_eq!(*img.get_pixel(left as u32, top as u32), Rgba(LABEL_BACKGROUND));
    }

    #[test]
    fn lines_share_the_block_left_edge() {
        let mut img = RgbaImage::new(SPRITE_SIZE, SPRITE_SIZE);
        let font = LabelFont::Bitmap;
        draw_label(&mut img, &font, "Ocean\nTiny");

        let (w, h) = measure(&font, "Ocean\nTiny");
        let text_x = (SPRITE_SIZE as i32 - w as i32) / 2;
        let text_y = SPRITE_SIZE as i32 - h as i32 - LABEL_BOTTOM_MARGIN;
        let step = (font.line_height() + LABEL_LINE_SPACING) as i32;

        let leftmost_text = |top: i32| -> Option<u32> {
            (0..SPRITE_SIZE).find(|&x| {
                (top..top + font.line_height() as i32)
                    .any(|y| *img.get_pixel(x, y as u32) == Rgba(LABEL_TEXT))
            })
        };
        // the shorter second line is not shifted right
        assert_eq!(leftmost_text(text_y), Some(text_x as u32));
        assert_eq!(leftmost_text(text_y + step), Some(text_x as u32));
    }
}
