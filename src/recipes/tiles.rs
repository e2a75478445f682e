//! Floor and wall tiles (32x32, opaque)

use crate::canvas::{Canvas, Color, shade};
use crate::variation::Variation;
use rand::Rng;

pub const TILE_SIZE: u32 = 32;

const WOOD_BASE: Color = [139, 90, 43, 255];
const PLANKS: [Color; 3] = [[160, 110, 60, 255], [140, 95, 50, 255], [150, 100, 55, 255]];
const PLANK_SEAM: Color = [100, 60, 30, 255];
const WOOD_GRAIN: Color = [120, 80, 40, 255];

const CARPETS: [Color; 3] = [[180, 130, 100, 255], [160, 110, 130, 255], [140, 120, 90, 255]];

const TILE_BASE: Color = [220, 220, 210, 255];
const TILES: [Color; 3] = [[200, 200, 190, 255], [180, 180, 170, 255], [210, 210, 200, 255]];
const GROUT: Color = [150, 150, 140, 255];

const BRICK_BASE: Color = [160, 100, 80, 255];
const BRICKS: [Color; 3] = [[170, 110, 90, 255], [150, 95, 75, 255], [180, 120, 100, 255]];
const MORTAR: Color = [130, 80, 60, 255];

const PAINTS: [Color; 4] = [
    [255, 230, 200, 255], // warm cream
    [230, 240, 255, 255], // soft blue
    [255, 220, 230, 255], // soft pink
    [240, 255, 220, 255], // sage green
];

/// Wooden planks in 8px rows with a few random grain marks.
pub fn floor_wood<R: Rng + ?Sized>(variation: Variation, rng: &mut R) -> Canvas {
    let mut img = Canvas::filled(TILE_SIZE, TILE_SIZE, WOOD_BASE);

    for row in 0..4 {
        let y = row * 8;
        let color = PLANKS[variation.offset(row as u32).index(PLANKS.len())];
        img.rect(0, y, 31, y + 7, color);
        img.line((0, y), (31, y), PLANK_SEAM, 1);
    }

    for _ in 0..5 {
        let x = rng.gen_range(2..=30);
        let y = rng.gen_range(2..=30);
        img.point(x, y, WOOD_GRAIN);
    }

    img
}

/// Carpet with one of three weave patterns: diamonds, stripes or dots.
pub fn floor_carpet(variation: Variation) -> Canvas {
    let base = CARPETS[variation.index(CARPETS.len())];
    let pattern = shade(base, -20);
    let mut img = Canvas::filled(TILE_SIZE, TILE_SIZE, base);

    match variation.bucket(3) {
        0 => {
            for y in (0..32).step_by(8) {
                for x in (0..32).step_by(8) {
                    if (x + y) % 16 == 0 {
                        img.rect(x + 2, y + 2, x + 6, y + 6, pattern);
                    }
                }
            }
        }
        1 => {
            for x in (0..32).step_by(4) {
                img.rect(x, 0, x + 2, 31, pattern);
            }
        }
        _ => {
            for y in (4..32).step_by(8) {
                for x in (4..32).step_by(8) {
                    img.ellipse(x - 2, y - 2, x + 2, y + 2, pattern);
                }
            }
        }
    }

    img
}

/// 16px ceramic tiles with grout lines.
pub fn floor_tiles(variation: Variation) -> Canvas {
    let mut img = Canvas::filled(TILE_SIZE, TILE_SIZE, TILE_BASE);

    for y in (0..32).step_by(16) {
        for x in (0..32).step_by(16) {
            let cell = ((x + y) / 16) as u32;
            let color = TILES[variation.offset(cell).index(TILES.len())];
            img.rect(x, y, x + 15, y + 15, color);
            img.rect_outline(x, y, x + 15, y + 15, GROUT, 1);
        }
    }

    img
}

/// Running-bond brick. Variation is accepted but every style is the same wall.
pub fn wall_brick(_variation: Variation) -> Canvas {
    let mut img = Canvas::filled(TILE_SIZE, TILE_SIZE, BRICK_BASE);
    let brick_height: i32 = 8;

    for y in (0i32..32).step_by(brick_height as usize) {
        let offset = (y / brick_height % 2) * 8;
        for x in (-8i32..32).step_by(16) {
            let color = BRICKS[(x + y).rem_euclid(BRICKS.len() as i32) as usize];
            let left = x + offset;
            img.rect(left + 1, y + 1, left + 14, y + brick_height - 1, color);
            img.rect_outline(left, y, left + 15, y + brick_height - 1, MORTAR, 1);
        }
    }

    img
}

/// Flat paint with subtle random speckles.
pub fn wall_paint<R: Rng + ?Sized>(variation: Variation, rng: &mut R) -> Canvas {
    let base = PAINTS[variation.index(PAINTS.len())];
    let speckle = shade(base, -10);
    let mut img = Canvas::filled(TILE_SIZE, TILE_SIZE, base);

    for _ in 0..20 {
        let x = rng.gen_range(0..=31);
        let y = rng.gen_range(0..=31);
        img.point(x, y, speckle);
    }

    img
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn variations() -> impl Iterator<Item = Variation> {
        [0, 1, 2, 3, 4, 17].into_iter().map(Variation::new)
    }

    fn all_tiles(v: Variation, rng: &mut StdRng) -> Vec<Canvas> {
        vec![
            floor_wood(v, rng),
            floor_carpet(v),
            floor_tiles(v),
            wall_brick(v),
            wall_paint(v, rng),
        ]
    }

    #[test]
    fn tiles_are_32px_and_fully_opaque() {
        let mut rng = StdRng::seed_from_u64(7);
        for v in variations() {
            for tile in all_tiles(v, &mut rng) {
                assert_eq!(tile.dimensions(), (32, 32));
                assert!(tile.as_image().pixels().all(|p| p.0[3] == 255), "transparent pixel at {v}");
            }
        }
    }

    #[test]
    fn wood_rows_rotate_with_variation() {
        let mut rng = StdRng::seed_from_u64(1);
        let v1 = floor_wood(Variation::new(1), &mut rng);
        // row 0 picks PLANKS[1], seam on the top edge
        assert_eq!(v1.pixel(5, 0), PLANK_SEAM);
        assert_eq!(v1.pixel(0, 1), PLANKS[1]);
        assert_eq!(v1.pixel(0, 9), PLANKS[2]);
        let v2 = floor_wood(Variation::new(2), &mut rng);
        assert_eq!(v2.pixel(0, 1), PLANKS[2]);
    }

    #[test]
    fn carpet_patterns_differ_by_bucket() {
        let diamonds = floor_carpet(Variation::new(1));
        let stripes = floor_carpet(Variation::new(2));
        let dots = floor_carpet(Variation::new(3));

        let base1 = CARPETS[1];
        assert_eq!(diamonds.pixel(0, 0), base1);
        assert_eq!(diamonds.pixel(4, 4), shade(base1, -20));
        assert_eq!(diamonds.pixel(12, 4), base1);

        let base2 = CARPETS[2];
        assert_eq!(stripes.pixel(1, 10), shade(base2, -20));
        assert_eq!(stripes.pixel(3, 10), base2);

        let base0 = CARPETS[0];
        assert_eq!(dots.pixel(4, 4), shade(base0, -20));
        assert_eq!(dots.pixel(0, 0), base0);
    }

    #[test]
    fn carpet_wraps_out_of_range() {
        // 4 lands in the diamond bucket with the same base as variation 1
        assert_eq!(
            floor_carpet(Variation::new(4)).as_image().as_raw(),
            floor_carpet(Variation::new(1)).as_image().as_raw()
        );
    }

    #[test]
    fn grout_frames_each_tile() {
        let img = floor_tiles(Variation::new(1));
        assert_eq!(img.pixel(0, 0), GROUT);
        assert_eq!(img.pixel(15, 8), GROUT);
        assert_eq!(img.pixel(16, 8), GROUT);
        assert_eq!(img.pixel(8, 8), TILES[1]);
        assert_eq!(img.pixel(24, 8), TILES[2]);
        assert_eq!(img.pixel(24, 24), TILES[0]);
    }

    #[test]
    fn brick_is_deterministic_and_offset() {
        let a = wall_brick(Variation::new(1));
        let b = wall_brick(Variation::new(1));
        assert_eq!(a.as_image().as_raw(), b.as_image().as_raw());
        // vertical joints sit at x=8 on even rows and x=16 on odd rows
        assert_eq!(a.pixel(8, 4), MORTAR);
        assert_eq!(a.pixel(16, 12), MORTAR);
        assert_eq!(a.pixel(0, 0), MORTAR);
        assert_eq!(a.pixel(3, 3), BRICKS[1]);
    }

    #[test]
    fn brick_colors_follow_course_position() {
        let img = wall_brick(Variation::new(2));
        // color comes from the brick's unshifted x plus the course y; even courses start at x=-8
        assert_eq!(img.pixel(3, 3), BRICKS[(-8i32).rem_euclid(3) as usize]);
        assert_eq!(img.pixel(12, 3), BRICKS[(8 % 3) as usize]);
        assert_eq!(img.pixel(4, 11), BRICKS[0]);
        assert_eq!(img.pixel(20, 11), BRICKS[((8 + 8) % 3) as usize]);
    }

    #[test]
    fn paint_picks_from_four_colors() {
        let mut rng = StdRng::seed_from_u64(3);
        let img = wall_paint(Variation::new(1), &mut rng);
        let base = PAINTS[1];
        let speckle = shade(base, -10);
        assert!(img.as_image().pixels().all(|p| p.0 == base || p.0 == speckle));
        assert!(img.as_image().pixels().any(|p| p.0 == speckle));
    }

    #[test]
    fn random_tiles_repeat_under_same_seed() {
        let v = Variation::new(2);
        let a = floor_wood(v, &mut StdRng::seed_from_u64(42));
        let b = floor_wood(v, &mut StdRng::seed_from_u64(42));
        assert_eq!(a.as_image().as_raw(), b.as_image().as_raw());
        let a = wall_paint(v, &mut StdRng::seed_from_u64(42));
        let b = wall_paint(v, &mut StdRng::seed_from_u64(42));
        assert_eq!(a.as_image().as_raw(), b.as_image().as_raw());
    }
}
