//! Fixed-size RGBA raster with pixel-art drawing primitives
//!
//! Boxes are inclusive `[x0, y0, x1, y1]` corners, so `rect(0, 0, 31, 31)`
//! covers a whole 32x32 tile. Anything outside the canvas is clipped.
//! Drawing replaces pixels: a fill with alpha 50 leaves alpha 50 behind,
//! whatever was there before.

use image::{ImageFormat, ImageResult, Rgba, RgbaImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_line_segment_mut, draw_polygon_mut};
use imageproc::point::Point;
use imageproc::rect::Rect;
use std::io::Cursor;

/// RGBA color (R, G, B, A)
pub type Color = [u8; 4];

pub const TRANSPARENT: Color = [0, 0, 0, 0];

/// Lighten (positive delta) or darken an RGB color, alpha untouched.
pub fn shade(color: Color, delta: i16) -> Color {
    let ch = |c: u8| (c as i16 + delta).clamp(0, 255) as u8;
    [ch(color[0]), ch(color[1]), ch(color[2]), color[3]]
}

#[derive(Debug, Clone)]
pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    /// Opaque background canvas.
    pub fn filled(width: u32, height: u32, color: Color) -> Self {
        Self {
            image: RgbaImage::from_pixel(width, height, Rgba(color)),
        }
    }

    /// Fully transparent canvas.
    pub fn transparent(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::from_pixel(width, height, Rgba(TRANSPARENT)),
        }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    /// Pixel at (x, y). Panics when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Color {
        self.image.get_pixel(x, y).0
    }

    pub fn as_image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    pub fn encode_png(&self) -> ImageResult<Vec<u8>> {
        let mut buf = Cursor::new(Vec::new());
        self.image.write_to(&mut buf, ImageFormat::Png)?;
        Ok(buf.into_inner())
    }

    fn put(&mut self, x: i32, y: i32, color: Color) {
        if x >= 0 && y >= 0 && (x as u32) < self.image.width() && (y as u32) < self.image.height() {
            self.image.put_pixel(x as u32, y as u32, Rgba(color));
        }
    }

    /// Set every in-bounds pixel of the box that satisfies `inside`.
    fn fill_where(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color, inside: impl Fn(i32, i32) -> bool) {
        let xs = x0.max(0)..=x1.min(self.image.width() as i32 - 1);
        for y in y0.max(0)..=y1.min(self.image.height() as i32 - 1) {
            for x in xs.clone() {
                if inside(x, y) {
                    self.put(x, y, color);
                }
            }
        }
    }

    pub fn point(&mut self, x: i32, y: i32, color: Color) {
        self.put(x, y, color);
    }

    pub fn rect(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, fill: Color) {
        if x1 < x0 || y1 < y0 {
            return;
        }
        let rect = Rect::at(x0, y0).of_size((x1 - x0 + 1) as u32, (y1 - y0 + 1) as u32);
        draw_filled_rect_mut(&mut self.image, rect, Rgba(fill));
    }

    /// Outline drawn inward from the box edge, `width` pixels thick.
    pub fn rect_outline(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color, width: i32) {
        for i in 0..width {
            let (l, t, r, b) = (x0 + i, y0 + i, x1 - i, y1 - i);
            if r < l || b < t {
                break;
            }
            self.rect(l, t, r, t, color);
            self.rect(l, b, r, b, color);
            self.rect(l, t, l, b, color);
            self.rect(r, t, r, b, color);
        }
    }

    pub fn rounded_rect(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, radius: i32, fill: Color) {
        self.fill_where(x0, y0, x1, y1, fill, |x, y| {
            in_rounded_rect(x0, y0, x1, y1, radius, x, y)
        });
    }

    pub fn rounded_rect_outline(
        &mut self,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        radius: i32,
        color: Color,
        width: i32,
    ) {
        let inner_radius = (radius - width).max(0);
        self.fill_where(x0, y0, x1, y1, color, |x, y| {
            in_rounded_rect(x0, y0, x1, y1, radius, x, y)
                && !in_rounded_rect(x0 + width, y0 + width, x1 - width, y1 - width, inner_radius, x, y)
        });
    }

    /// Ellipse inscribed in the box.
    pub fn ellipse(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, fill: Color) {
        self.fill_where(x0, y0, x1, y1, fill, |x, y| in_ellipse(x0, y0, x1, y1, x, y));
    }

    pub fn ellipse_outline(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color, width: i32) {
        self.fill_where(x0, y0, x1, y1, color, |x, y| {
            in_ellipse(x0, y0, x1, y1, x, y)
                && !in_ellipse(x0 + width, y0 + width, x1 - width, y1 - width, x, y)
        });
    }

    /// Part of an elliptical ring between two angles in degrees.
    ///
    /// 0 degrees points right and angles grow clockwise on screen, so
    /// `arc(.., 0.0, 180.0, ..)` traces the lower half.
    pub fn arc(
        &mut self,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        start_deg: f32,
        end_deg: f32,
        color: Color,
        width: i32,
    ) {
        let cx = (x0 + x1) as f32 / 2.0;
        let cy = (y0 + y1) as f32 / 2.0;
        self.fill_where(x0, y0, x1, y1, color, |x, y| {
            if !in_ellipse(x0, y0, x1, y1, x, y)
                || in_ellipse(x0 + width, y0 + width, x1 - width, y1 - width, x, y)
            {
                return false;
            }
            let angle = (y as f32 - cy).atan2(x as f32 - cx).to_degrees().rem_euclid(360.0);
            angle >= start_deg && angle <= end_deg
        });
    }

    /// Straight segment. Wider lines stack parallel 1-px segments across the
    /// minor axis so the stroke is exactly `width` pixels thick.
    pub fn line(&mut self, from: (i32, i32), to: (i32, i32), color: Color, width: i32) {
        let mostly_horizontal = (to.0 - from.0).abs() >= (to.1 - from.1).abs();
        let first = -((width.max(1) - 1) / 2);
        for k in 0..width.max(1) {
            let off = first + k;
            let (dx, dy) = if mostly_horizontal { (0, off) } else { (off, 0) };
            draw_line_segment_mut(
                &mut self.image,
                ((from.0 + dx) as f32, (from.1 + dy) as f32),
                ((to.0 + dx) as f32, (to.1 + dy) as f32),
                Rgba(color),
            );
        }
    }

    /// Filled polygon, edges included.
    pub fn polygon(&mut self, vertices: &[(i32, i32)], fill: Color) {
        let mut points: Vec<Point<i32>> = vertices.iter().map(|&(x, y)| Point::new(x, y)).collect();
        if points.len() > 1 && points.first() == points.last() {
            points.pop();
        }
        if points.len() < 3 {
            return;
        }
        draw_polygon_mut(&mut self.image, &points, Rgba(fill));
    }
}

fn in_ellipse(x0: i32, y0: i32, x1: i32, y1: i32, x: i32, y: i32) -> bool {
    if x1 < x0 || y1 < y0 {
        return false;
    }
    let cx = (x0 + x1) as f32 / 2.0;
    let cy = (y0 + y1) as f32 / 2.0;
    let rx = (x1 - x0) as f32 / 2.0 + 0.5;
    let ry = (y1 - y0) as f32 / 2.0 + 0.5;
    let nx = (x as f32 - cx) / rx;
    let ny = (y as f32 - cy) / ry;
    nx * nx + ny * ny <= 1.0
}

fn in_rounded_rect(x0: i32, y0: i32, x1: i32, y1: i32, radius: i32, x: i32, y: i32) -> bool {
    if x < x0 || x > x1 || y < y0 || y > y1 {
        return false;
    }
    let r = radius.min((x1 - x0) / 2).min((y1 - y0) / 2).max(0);
    let dx = if x < x0 + r {
        x0 + r - x
    } else if x > x1 - r {
        x - (x1 - r)
    } else {
        0
    };
    let dy = if y < y0 + r {
        y0 + r - y
    } else if y > y1 - r {
        y - (y1 - r)
    } else {
        0
    };
    dx * dx + dy * dy <= r * r + r
}
