//! Skeleton body sprites: one per habitat x size class

use image::{Rgba, RgbaImage};

use super::draw::{BBox, filled_ellipse};
use super::font::LabelFont;
use super::label::draw_label;
use crate::catalog::Rgb;
use crate::constants::{EYE_COLOR, SKELETON_BASE_SIZE, SPRITE_SIZE, TRANSPARENT};

/// Pixel layout of a skeleton body at a given scale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkeletonLayout {
    pub body: BBox,
    pub head: BBox,
    pub left_eye: BBox,
    pub right_eye: BBox,
}

impl SkeletonLayout {
    pub fn for_scale(scale: f64) -> Self {
        let size = SPRITE_SIZE as i32;
        let base = (SKELETON_BASE_SIZE * scale) as i32;
        let offset = (size - base) / 2;
        let mid_x = offset + base / 2;

        let head = base / 3;
        let eye = head / 5;
        let eye_y = offset + head / 3;
        let eye_box = |center_x: i32| -> BBox {
            [
                center_x - eye / 2,
                eye_y,
                center_x + eye / 2,
                eye_y + eye,
            ]
        };

        Self {
            body: [offset, offset + base / 4, offset + base, offset + base],
            head: [mid_x - head / 2, offset, mid_x + head / 2, offset + head],
            left_eye: eye_box(mid_x - head / 4),
            right_eye: eye_box(mid_x + head / 4),
        }
    }
}

/// Render a skeleton sprite: body and head ellipses, two eyes, and a
/// "habitat / size" label.
pub fn render_skeleton(
    font: &LabelFont,
    habitat: &str,
    size_class: &str,
    color: Rgb,
    scale: f64,
) -> RgbaImage {
    let mut img = RgbaImage::from_pixel(SPRITE_SIZE, SPRITE_SIZE, Rgba(TRANSPARENT));
    let fill = Rgba([color[0], color[1], color[2], 255]);
    let layout = SkeletonLayout::for_scale(scale);

    filled_ellipse(&mut img, layout.body, fill);
    filled_ellipse(&mut img, layout.head, fill);
    filled_ellipse(&mut img, layout.left_eye, Rgba(EYE_COLOR));
    filled_ellipse(&mut img, layout.right_eye, Rgba(EYE_COLOR));

    draw_label(&mut img, font, &format!("{}\n{}", habitat, size_class));
    img
}
