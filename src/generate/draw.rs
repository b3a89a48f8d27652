//! Primitive drawing helpers on RGBA canvases
//!
//! Boxes are inclusive `[x0, y0, x1, y1]` pixel bounds. Shapes overwrite the
//! pixels they cover; nothing is alpha-blended.

use image::{Rgba, RgbaImage};
use imageproc::drawing::{
    draw_filled_circle_mut, draw_filled_ellipse_mut, draw_filled_rect_mut, draw_polygon_mut,
};
use imageproc::point::Point;
use imageproc::rect::Rect;

/// Inclusive pixel bounds
pub type BBox = [i32; 4];

/// Filled ellipse inscribed in a bounding box
pub fn filled_ellipse(img: &mut RgbaImage, bbox: BBox, color: Rgba<u8>) {
    let [x0, y0, x1, y1] = bbox;
    if x1 < x0 || y1 < y0 {
        return;
    }
    let center = ((x0 + x1) / 2, (y0 + y1) / 2);
    draw_filled_ellipse_mut(img, center, (x1 - x0) / 2, (y1 - y0) / 2, color);
}

pub fn filled_rect(img: &mut RgbaImage, bbox: BBox, color: Rgba<u8>) {
    let [x0, y0, x1, y1] = bbox;
    if x1 < x0 || y1 < y0 {
        return;
    }
    let rect = Rect::at(x0, y0).of_size((x1 - x0 + 1) as u32, (y1 - y0 + 1) as u32);
    draw_filled_rect_mut(img, rect, color);
}

/// Filled polygon; the outline is closed implicitly
pub fn filled_polygon(img: &mut RgbaImage, points: &[(i32, i32)], color: Rgba<u8>) {
    let mut poly: Vec<Point<i32>> = points.iter().map(|&(x, y)| Point::new(x, y)).collect();
    // draw_polygon_mut rejects an explicitly closed outline
    while poly.len() > 1 && poly.first() == poly.last() {
        poly.pop();
    }
    if poly.len() < 3 {
        return;
    }
    draw_polygon_mut(img, &poly, color);
}

/// Polyline with square-sided segments and round joints
pub fn thick_polyline(img: &mut RgbaImage, points: &[(i32, i32)], width: f32, color: Rgba<u8>) {
    let half = width / 2.0;

    for pair in points.windows(2) {
        let (ax, ay) = (pair[0].0 as f32, pair[0].1 as f32);
        let (bx, by) = (pair[1].0 as f32, pair[1].1 as f32);
        let len = ((bx - ax).powi(2) + (by - ay).powi(2)).sqrt();
        if len < f32::EPSILON {
            continue;
        }
        // Unit normal scaled to half the stroke width
        let nx = -(by - ay) / len * half;
        let ny = (bx - ax) / len * half;

        let quad = [
            ((ax + nx).round() as i32, (ay + ny).round() as i32),
            ((bx + nx).round() as i32, (by + ny).round() as i32),
            ((bx - nx).round() as i32, (by - ny).round() as i32),
            ((ax - nx).round() as i32, (ay - ny).round() as i32),
        ];
        filled_polygon(img, &quad, color);
    }

    let radius = (half - 0.5).max(0.0).round() as i32;
    if points.len() > 2 {
        for &joint in &points[1..points.len() - 1] {
            draw_filled_circle_mut(img, joint, radius, color);
        }
    }
}

/// Ellipse geometry measured at pixel centers
struct EllipseFrame {
    cx: f32,
    cy: f32,
    rx: f32,
    ry: f32,
}

impl EllipseFrame {
    fn new(bbox: BBox) -> Self {
        let [x0, y0, x1, y1] = bbox;
        Self {
            cx: (x0 + x1 + 1) as f32 / 2.0,
            cy: (y0 + y1 + 1) as f32 / 2.0,
            rx: (x1 - x0 + 1) as f32 / 2.0,
            ry: (y1 - y0 + 1) as f32 / 2.0,
        }
    }

    /// Normalized ellipse equation value for a pixel center shrunk by `inset`
    fn norm(&self, x: u32, y: u32, inset: f32) -> f32 {
        let rx = self.rx - inset;
        let ry = self.ry - inset;
        if rx <= 0.0 || ry <= 0.0 {
            return f32::INFINITY;
        }
        let dx = (x as f32 + 0.5 - self.cx) / rx;
        let dy = (y as f32 + 0.5 - self.cy) / ry;
        dx * dx + dy * dy
    }
}

/// Unfilled elliptical ring of the given width, drawn inward from the box
pub fn ring(img: &mut RgbaImage, bbox: BBox, width: f32, color: Rgba<u8>) {
    let frame = EllipseFrame::new(bbox);
    let (w, h) = img.dimensions();

    for y in 0..h {
        for x in 0..w {
            let outer = frame.norm(x, y, 0.0);
            let inner = frame.norm(x, y, width);
            if outer <= 1.0 && inner > 1.0 {
                img.put_pixel(x, y, color);
            }
        }
    }
}

/// Upper half of a filled ellipse (the 180°-360° pie slice, y pointing down)
pub fn upper_half_disc(img: &mut RgbaImage, bbox: BBox, color: Rgba<u8>) {
    let frame = EllipseFrame::new(bbox);
    let (w, h) = img.dimensions();

    for y in 0..h {
        if y as f32 + 0.5 > frame.cy {
            break;
        }
        for x in 0..w {
            if frame.norm(x, y, 0.0) <= 1.0 {
                img.put_pixel(x, y, color);
            }
        }
    }
}
