//! UI chrome: buttons and panels

use crate::canvas::{Canvas, Color};
use crate::variation::Variation;

pub const BUTTON_SIZE: (u32, u32) = (64, 32);
pub const PANEL_SIZE: (u32, u32) = (128, 128);

/// (base, shadow) per style bucket: blue, green, amber
const BUTTON_COLORS: [(Color, Color); 3] = [
    ([100, 150, 200, 255], [70, 110, 150, 255]),
    ([120, 180, 120, 255], [80, 140, 80, 255]),
    ([200, 160, 100, 255], [160, 120, 70, 255]),
];
const HIGHLIGHT: Color = [255, 255, 255, 50];

pub fn button(variation: Variation) -> Canvas {
    let (w, h) = BUTTON_SIZE;
    let mut img = Canvas::transparent(w, h);
    let (base, shadow) = BUTTON_COLORS[variation.bucket(3) as usize];

    img.rounded_rect(2, 2, 62, 30, 6, base);
    img.rounded_rect_outline(2, 2, 62, 30, 6, shadow, 2);
    img.rounded_rect(4, 4, 60, 14, 4, HIGHLIGHT);

    img
}

const BEVEL: Color = [255, 255, 255, 30];

/// Translucent dialog panel. Warm wood for the first style, slate otherwise.
pub fn panel(variation: Variation) -> Canvas {
    let (w, h) = PANEL_SIZE;
    let mut img = Canvas::transparent(w, h);
    let (base, border): (Color, Color) = if variation.bucket(3) == 0 {
        ([60, 50, 45, 230], [120, 100, 80, 255])
    } else {
        ([45, 55, 65, 230], [100, 120, 140, 255])
    };

    img.rounded_rect(0, 0, 127, 127, 8, base);
    img.rounded_rect_outline(0, 0, 127, 127, 8, border, 3);
    img.rounded_rect_outline(6, 6, 121, 121, 6, BEVEL, 1);

    img
}
