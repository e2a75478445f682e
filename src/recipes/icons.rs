//! HUD icons (32x32, transparent)

use crate::canvas::{Canvas, Color};
use crate::variation::Variation;

pub const ICON_SIZE: u32 = 32;

const GOLD: Color = [255, 200, 50, 255];
const GOLD_DARK: Color = [200, 150, 30, 255];
const GOLD_LIGHT: Color = [255, 230, 120, 255];

/// 5x7 dollar sign, one string per row.
const DOLLAR_GLYPH: [&str; 7] = [
    "..#..", //
    ".####", //
    "#.#..", //
    ".###.", //
    "..#.#", //
    "####.", //
    "..#..", //
];
const GLYPH_ORIGIN: (i32, i32) = (14, 12);

/// Gold coin stamped with a `$`. Variation is accepted; coins come in one color.
pub fn coin(_variation: Variation) -> Canvas {
    let mut img = Canvas::transparent(ICON_SIZE, ICON_SIZE);

    img.ellipse(4, 4, 28, 28, GOLD);
    img.ellipse_outline(4, 4, 28, 28, GOLD_DARK, 2);
    img.ellipse(10, 10, 22, 22, GOLD_LIGHT);

    let (ox, oy) = GLYPH_ORIGIN;
    for (dy, row) in DOLLAR_GLYPH.iter().enumerate() {
        for (dx, cell) in row.bytes().enumerate() {
            if cell == b'#' {
                img.point(ox + dx as i32, oy + dy as i32, GOLD_DARK);
            }
        }
    }

    img
}

/// Filled heart as (first_x, last_x) spans for rows 6..=19.
const HEART_ROWS: [&[(i32, i32)]; 14] = [
    &[(8, 9), (22, 23)],
    &[(7, 10), (21, 24)],
    &[(6, 11), (20, 25)],
    &[(6, 12), (19, 25)],
    &[(6, 13), (18, 25)],
    &[(7, 14), (17, 24)],
    &[(8, 23)],
    &[(9, 22)],
    &[(10, 21)],
    &[(11, 20)],
    &[(12, 19)],
    &[(13, 18)],
    &[(14, 17)],
    &[(15, 16)],
];
const HEART_TOP: i32 = 6;

/// Pixel heart: crimson for the first style, rose otherwise.
pub fn heart(variation: Variation) -> Canvas {
    let mut img = Canvas::transparent(ICON_SIZE, ICON_SIZE);
    let color: Color = if variation.bucket(3) == 0 {
        [220, 80, 100, 255]
    } else {
        [255, 150, 150, 255]
    };

    for (i, spans) in HEART_ROWS.iter().enumerate() {
        let y = HEART_TOP + i as i32;
        for &(x0, x1) in spans.iter() {
            img.rect(x0, y, x1, y, color);
        }
    }

    img
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opaque_count(img: &Canvas) -> usize {
        img.as_image().pixels().filter(|p| p.0[3] != 0).count()
    }

    #[test]
    fn icons_are_32px_with_clear_corners() {
        for n in [0, 1, 2, 3, 4] {
            for img in [coin(Variation::new(n)), heart(Variation::new(n))] {
                assert_eq!(img.dimensions(), (32, 32));
                for (x, y) in [(0, 0), (31, 0), (0, 31), (31, 31)] {
                    assert_eq!(img.pixel(x, y)[3], 0);
                }
            }
        }
    }

    #[test]
    fn coin_has_rim_face_and_glyph() {
        let img = coin(Variation::new(1));
        assert_eq!(img.pixel(4, 16), GOLD_DARK);
        assert_eq!(img.pixel(8, 16), GOLD);
        assert_eq!(img.pixel(11, 16), GOLD_LIGHT);
        // glyph stem
        assert_eq!(img.pixel(16, 12), GOLD_DARK);
        assert_eq!(img.pixel(16, 18), GOLD_DARK);
    }

    #[test]
    fn heart_matches_pixel_map() {
        let img = heart(Variation::new(1));
        let expected: usize = HEART_ROWS
            .iter()
            .flat_map(|spans| spans.iter())
            .map(|&(a, b)| (b - a + 1) as usize)
            .sum();
        assert_eq!(opaque_count(&img), expected);
        assert_eq!(img.pixel(15, 19), [220, 80, 100, 255]);
        assert_eq!(img.pixel(15, 7)[3], 0);
    }

    #[test]
    fn heart_color_wraps() {
        assert_eq!(heart(Variation::new(2)).pixel(15, 12), [255, 150, 150, 255]);
        assert_eq!(heart(Variation::new(3)).pixel(15, 12), [255, 150, 150, 255]);
        assert_eq!(heart(Variation::new(4)).pixel(15, 12), [220, 80, 100, 255]);
    }
}
