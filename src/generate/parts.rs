//! Part sprites: one shape per `ShapeKind`, labeled with the part name

use image::{Rgba, RgbaImage};

use super::draw::{filled_polygon, filled_rect, ring, thick_polyline, upper_half_disc};
use super::font::LabelFont;
use super::label::draw_label;
use crate::catalog::{PartDefinition, Rgb, ShapeKind};
use crate::constants::{PART_MARGIN, SPRITE_SIZE, TRANSPARENT};

const HEXAGON_RADIUS: f32 = 80.0;
const BOLT_WIDTH: f32 = 10.0;
const AURA_WIDTH: f32 = 15.0;
const SPIKE_COUNT: i32 = 5;

/// Render a part sprite for a catalog entry
pub fn render_part_sprite(font: &LabelFont, part: &PartDefinition) -> RgbaImage {
    render_part(font, &part.name, part.color, part.shape)
}

/// Render a shape in `color` with `label` underneath
pub fn render_part(font: &LabelFont, label: &str, color: Rgb, shape: ShapeKind) -> RgbaImage {
    let mut img = RgbaImage::from_pixel(SPRITE_SIZE, SPRITE_SIZE, Rgba(TRANSPARENT));
    let fill = Rgba([color[0], color[1], color[2], 255]);
    draw_shape(&mut img, shape, fill);
    draw_label(&mut img, font, label);
    img
}

fn draw_shape(img: &mut RgbaImage, shape: ShapeKind, fill: Rgba<u8>) {
    let s = SPRITE_SIZE as i32;
    let half = s / 2;
    let m = PART_MARGIN;

    match shape {
        ShapeKind::Wings => {
            filled_polygon(img, &[(half, half), (s - m, m), (s - m, s - m)], fill);
        }
        ShapeKind::Tail => {
            filled_polygon(
                img,
                &[
                    (m, half - 30),
                    (s - m, half - 10),
                    (s - m, half + 10),
                    (m, half + 30),
                ],
                fill,
            );
        }
        ShapeKind::Armor => {
            let points: Vec<(i32, i32)> = (0..6)
                .map(|i| {
                    let angle = (i as f32 * 60.0).to_radians();
                    (
                        (half as f32 + HEXAGON_RADIUS * angle.cos()).round() as i32,
                        (half as f32 + HEXAGON_RADIUS * angle.sin()).round() as i32,
                    )
                })
                .collect();
            filled_polygon(img, &points, fill);
        }
        ShapeKind::Horns => {
            filled_polygon(img, &[(half - 40, half), (half - 60, m), (half - 20, m)], fill);
            filled_polygon(img, &[(half + 40, half), (half + 20, m), (half + 60, m)], fill);
        }
        ShapeKind::Spikes => {
            for i in 0..SPIKE_COUNT {
                let x = 30 + i * 40;
                filled_polygon(img, &[(x, half - 40), (x - 15, half), (x + 15, half)], fill);
            }
        }
        ShapeKind::Bolt => {
            thick_polyline(
                img,
                &[
                    (half, m),
                    (half + 30, half - 30),
                    (half, half),
                    (half + 30, half + 30),
                    (half, s - m),
                ],
                BOLT_WIDTH,
                fill,
            );
        }
        ShapeKind::Cloak => {
            upper_half_disc(img, [m, half - 80, s - m, half + 80], fill);
        }
        ShapeKind::Aura => {
            ring(img, [40, 40, s - 40, s - 40], AURA_WIDTH, fill);
        }
        ShapeKind::Block => {
            filled_rect(img, [60, 60, s - 60, s - 60], fill);
        }
    }
}
