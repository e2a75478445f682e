//! Furniture sprites (64x64, transparent, top-down)

use crate::canvas::{Canvas, Color, shade};
use crate::variation::Variation;
use rand::Rng;
use rand::seq::SliceRandom;
use std::f32::consts::PI;

pub const FURNITURE_SIZE: u32 = 64;

fn blank() -> Canvas {
    Canvas::transparent(FURNITURE_SIZE, FURNITURE_SIZE)
}

/// (main, shadow) per style bucket: blue, terracotta, green
const SOFA_COLORS: [(Color, Color); 3] = [
    ([100, 150, 200, 255], [70, 110, 150, 255]),
    ([200, 120, 100, 255], [160, 90, 70, 255]),
    ([120, 180, 120, 255], [80, 140, 80, 255]),
];

pub fn sofa(variation: Variation) -> Canvas {
    let mut img = blank();
    let (main, shadow) = SOFA_COLORS[variation.bucket(3) as usize];
    let cushion = shade(main, 15);

    // back, seat, armrests
    img.rounded_rect(8, 4, 56, 20, 4, shadow);
    img.rounded_rect(8, 16, 56, 48, 3, main);
    img.rounded_rect(4, 16, 12, 44, 2, shadow);
    img.rounded_rect(52, 16, 60, 44, 2, shadow);

    img.rect(14, 22, 30, 42, cushion);
    img.rect(34, 22, 50, 42, cushion);

    img
}

const POT: Color = [180, 100, 60, 255];
const LEAVES: [Color; 3] = [[80, 160, 80, 255], [100, 180, 100, 255], [60, 140, 60, 255]];

/// Potted plant: round leafy, tall fan or spiky. `big` raises the pot and foliage.
pub fn plant(variation: Variation, big: bool) -> Canvas {
    let mut img = blank();

    let (pot_x, pot_y) = (24, if big { 44 } else { 48 });
    let (pot_w, pot_h) = (16, if big { 14 } else { 12 });
    img.polygon(
        &[
            (pot_x, pot_y),
            (pot_x + pot_w, pot_y),
            (pot_x + pot_w - 2, pot_y + pot_h),
            (pot_x + 2, pot_y + pot_h),
        ],
        POT,
    );

    let (cx, cy) = (32, if big { 36 } else { 38 });

    match variation.bucket(3) {
        0 => {
            for i in 0..8 {
                let rad = (i as f32 * 45.0).to_radians();
                let lx = cx + (12.0 * rad.cos()) as i32;
                let ly = cy + (10.0 * rad.sin()) as i32;
                img.ellipse(lx - 6, ly - 6, lx + 6, ly + 6, LEAVES[i % 3]);
            }
            img.ellipse(cx - 8, cy - 8, cx + 8, cy + 8, LEAVES[1]);
        }
        1 => {
            for i in 0..5usize {
                let offset = (i as i32 - 2) * 8;
                let lift = offset.abs() / 2;
                img.ellipse(
                    cx + offset - 5,
                    cy - 8 - lift,
                    cx + offset + 5,
                    cy + 2 - lift,
                    LEAVES[i % 3],
                );
            }
        }
        _ => {
            for i in 0..12 {
                let rad = i as f32 * PI / 6.0;
                let end = (cx + (15.0 * rad.cos()) as i32, cy + (12.0 * rad.sin()) as i32);
                img.line((cx, cy), end, LEAVES[i % 3], 3);
            }
            img.ellipse(cx - 6, cy - 6, cx + 6, cy + 6, LEAVES[0]);
        }
    }

    img
}

const TV_FRAME: Color = [40, 40, 40, 255];
const TV_BEZEL: Color = [20, 20, 20, 255];

pub fn tv(variation: Variation) -> Canvas {
    let mut img = blank();
    let bucket = variation.bucket(3);
    let screen = if bucket == 0 { [20, 20, 40, 255] } else { [30, 30, 50, 255] };

    img.rect(12, 8, 52, 40, TV_FRAME);
    img.rect_outline(12, 8, 52, 40, TV_BEZEL, 2);
    img.rect(16, 12, 48, 36, screen);

    // stand and foot
    img.rect(26, 40, 38, 52, [60, 60, 60, 255]);
    img.ellipse(22, 48, 42, 58, [80, 80, 80, 255]);

    if bucket == 1 {
        img.rect(18, 14, 30, 24, [100, 100, 150, 100]);
    }

    img
}

const SHELF_WOOD: Color = [140, 100, 60, 255];
const SHELF_WOOD_DARK: Color = [110, 75, 45, 255];
const BOOKS: [Color; 6] = [
    [200, 80, 80, 255],
    [80, 120, 200, 255],
    [200, 180, 80, 255],
    [120, 180, 120, 255],
    [180, 120, 180, 255],
    [120, 120, 120, 255],
];
const SHELF_ROWS: [i32; 3] = [16, 28, 40];

/// Bookshelf with randomly sized and colored books. Variation is accepted;
/// the look comes from the rng.
pub fn bookshelf<R: Rng + ?Sized>(_variation: Variation, rng: &mut R) -> Canvas {
    let mut img = blank();

    img.rect(8, 8, 56, 52, SHELF_WOOD);
    img.rect_outline(8, 8, 56, 52, SHELF_WOOD_DARK, 2);

    for shelf_y in SHELF_ROWS {
        img.line((10, shelf_y), (54, shelf_y), SHELF_WOOD_DARK, 2);

        let mut x = 12;
        while x < 50 {
            let book_w = *[4, 5, 6].choose(rng).unwrap_or(&5);
            if x + book_w > 52 {
                break;
            }
            let color = *BOOKS.choose(rng).unwrap_or(&BOOKS[0]);
            img.rect(x, shelf_y - 10, x + book_w, shelf_y, color);
            img.rect_outline(x, shelf_y - 10, x + book_w, shelf_y, shade(color, -30), 1);
            x += book_w + 1;
        }
    }

    img
}

/// Dining table (rectangular, four legs) or round coffee table.
pub fn table(variation: Variation, dining: bool) -> Canvas {
    let mut img = blank();

    if dining {
        let top: Color = [160, 120, 80, 255];
        let dark: Color = [130, 95, 60, 255];
        img.rect(8, 16, 56, 48, top);
        img.rect_outline(8, 16, 56, 48, dark, 2);
        for (x, y) in [(10, 18), (50, 18), (10, 42), (50, 42)] {
            img.rect(x, y, x + 4, y + 4, dark);
        }
    } else {
        let (top, dark): (Color, Color) = if variation.bucket(3) == 0 {
            ([100, 80, 60, 255], [75, 60, 45, 255])
        } else {
            ([140, 140, 140, 255], [100, 100, 100, 255])
        };
        img.ellipse(12, 20, 52, 44, top);
        img.ellipse_outline(12, 20, 52, 44, dark, 2);
        img.ellipse(26, 32, 38, 40, dark);
    }

    img
}

pub fn lamp(variation: Variation) -> Canvas {
    let mut img = blank();
    let (base, shade_color): (Color, Color) = if variation.bucket(3) == 0 {
        ([80, 80, 80, 255], [255, 240, 200, 255])
    } else {
        ([160, 140, 100, 255], [240, 220, 255, 255])
    };

    img.ellipse(24, 52, 40, 60, base);
    img.rect(30, 24, 34, 54, [100, 100, 100, 255]);

    img.ellipse(16, 12, 48, 32, shade_color);
    img.ellipse_outline(16, 12, 48, 32, [200, 180, 150, 255], 2);
    img.ellipse(20, 16, 44, 28, [255, 250, 220, 255]);

    img
}

/// (blanket, pillow) per style bucket: blue, pink, green
const BEDDING: [(Color, Color); 3] = [
    ([100, 150, 200, 255], [255, 255, 255, 255]),
    ([200, 120, 140, 255], [255, 240, 240, 255]),
    ([140, 180, 120, 255], [245, 255, 245, 255]),
];

pub fn bed(variation: Variation) -> Canvas {
    let mut img = blank();
    let (blanket, pillow) = BEDDING[variation.bucket(3) as usize];

    img.rect(8, 8, 56, 56, [120, 80, 50, 255]);
    img.rect_outline(8, 8, 56, 56, [90, 60, 35, 255], 2);
    img.rect(12, 12, 52, 52, [240, 240, 240, 255]);
    img.rect(12, 28, 52, 52, blanket);

    img.ellipse(18, 14, 46, 26, pillow);
    img.ellipse_outline(18, 14, 46, 26, [220, 220, 220, 255], 1);

    img
}

/// (base, pattern, accent) per style bucket: persian red, teal, beige
const RUG_COLORS: [(Color, Color, Color); 3] = [
    ([180, 120, 80, 255], [140, 90, 60, 255], [200, 180, 100, 255]),
    ([100, 140, 120, 255], [70, 100, 90, 255], [150, 200, 180, 255]),
    ([160, 160, 140, 255], [130, 130, 110, 255], [200, 200, 180, 255]),
];

pub fn rug(variation: Variation) -> Canvas {
    let mut img = blank();
    let bucket = variation.bucket(3);
    let (base, pattern, accent) = RUG_COLORS[bucket as usize];

    img.rect(4, 8, 60, 56, base);
    img.rect_outline(4, 8, 60, 56, pattern, 2);

    match bucket {
        0 => {
            // medallion inside a border
            img.ellipse(24, 24, 40, 40, accent);
            img.ellipse_outline(24, 24, 40, 40, pattern, 1);
            img.rect_outline(8, 12, 56, 52, pattern, 2);
        }
        1 => {
            for i in 0..4 {
                let x = 12 + i * 12;
                img.rect(x, 16, x + 8, 48, pattern);
                img.rect(x + 2, 20, x + 6, 44, accent);
            }
        }
        _ => {
            img.rect_outline(10, 14, 54, 50, accent, 2);
            img.rect_outline(16, 20, 48, 44, pattern, 1);
        }
    }

    img
}
