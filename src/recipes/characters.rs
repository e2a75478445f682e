//! Character sprite sheets
//!
//! Each sheet is 128x48: four 32x48 frames packed left to right in the order
//! down, left, right, up. Every frame repeats the same body layout; only the
//! elements that show which way the character faces move between frames.

use crate::canvas::{Canvas, Color};
use crate::variation::Variation;

pub const FRAME_WIDTH: u32 = 32;
pub const FRAME_HEIGHT: u32 = 48;
pub const SHEET_WIDTH: u32 = FRAME_WIDTH * 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facing {
    Down,
    Left,
    Right,
    Up,
}

impl Facing {
    /// Frame order on the sheet.
    pub const ALL: [Facing; 4] = [Facing::Down, Facing::Left, Facing::Right, Facing::Up];

    pub fn slot(self) -> u32 {
        match self {
            Facing::Down => 0,
            Facing::Left => 1,
            Facing::Right => 2,
            Facing::Up => 3,
        }
    }

    /// Horizontal center of this frame on the sheet.
    pub fn center_x(self) -> i32 {
        (self.slot() * FRAME_WIDTH + FRAME_WIDTH / 2) as i32
    }

    fn is_side(self) -> bool {
        matches!(self, Facing::Left | Facing::Right)
    }
}

fn sheet() -> Canvas {
    Canvas::transparent(SHEET_WIDTH, FRAME_HEIGHT)
}

const SKIN: Color = [255, 220, 180, 255];
const PANTS: Color = [60, 60, 80, 255];
const HAIR: Color = [80, 60, 40, 255];
const SHIRTS: [Color; 3] = [[100, 150, 200, 255], [200, 100, 100, 255], [100, 180, 100, 255]];

/// Human walk sheet. Variation picks the shirt color.
pub fn human(variation: Variation) -> Canvas {
    let mut img = sheet();
    let shirt = SHIRTS[variation.bucket(3) as usize];

    for facing in Facing::ALL {
        let cx = facing.center_x();

        // legs spread wider in profile
        let (outer, inner) = if facing.is_side() { (6, 2) } else { (5, 1) };
        img.rect(cx - outer, 32, cx - inner, 46, PANTS);
        img.rect(cx + inner, 32, cx + outer, 46, PANTS);

        img.rect(cx - 7, 18, cx + 7, 34, shirt);

        match facing {
            Facing::Left => img.rect(cx - 9, 20, cx - 5, 32, SKIN),
            Facing::Right => img.rect(cx + 5, 20, cx + 9, 32, SKIN),
            _ => {
                img.rect(cx - 9, 20, cx - 5, 32, SKIN);
                img.rect(cx + 5, 20, cx + 9, 32, SKIN);
            }
        }

        img.ellipse(cx - 6, 8, cx + 6, 20, SKIN);

        if facing == Facing::Up {
            img.ellipse(cx - 6, 6, cx + 6, 14, HAIR);
        } else {
            img.arc(cx - 6, 6, cx + 6, 16, 0.0, 180.0, HAIR, 3);
        }
    }

    img
}

const SHELL: Color = [220, 80, 60, 255];
const SHELL_DARK: Color = [180, 60, 40, 255];
const EYE_WHITE: Color = [255, 255, 255, 255];
const PUPIL: Color = [0, 0, 0, 255];

/// Lobster agent sheet. Variation is accepted; lobsters come in one color.
pub fn lobster(_variation: Variation) -> Canvas {
    let mut img = sheet();

    for facing in Facing::ALL {
        let cx = facing.center_x();

        // tail and carapace
        img.ellipse(cx - 8, 20, cx + 8, 44, SHELL);
        img.ellipse(cx - 6, 16, cx + 6, 28, SHELL_DARK);

        match facing {
            Facing::Left => {
                img.ellipse(cx - 14, 24, cx - 6, 32, SHELL);
                img.ellipse(cx + 2, 28, cx + 6, 36, SHELL_DARK);
            }
            Facing::Right => {
                img.ellipse(cx + 6, 24, cx + 14, 32, SHELL);
                img.ellipse(cx - 6, 28, cx - 2, 36, SHELL_DARK);
            }
            _ => {
                img.ellipse(cx - 12, 24, cx - 4, 32, SHELL);
                img.ellipse(cx + 4, 24, cx + 12, 32, SHELL);
            }
        }

        if facing != Facing::Up {
            img.ellipse(cx - 4, 12, cx - 1, 16, EYE_WHITE);
            img.ellipse(cx + 1, 12, cx + 4, 16, EYE_WHITE);
            img.point(cx - 2, 14, PUPIL);
            img.point(cx + 2, 14, PUPIL);
        }

        img.line((cx - 3, 10), (cx - 6, 4), SHELL_DARK, 1);
        img.line((cx + 3, 10), (cx + 6, 4), SHELL_DARK, 1);
    }

    img
}

const CHASSIS: Color = [180, 180, 190, 255];
const CHASSIS_DARK: Color = [140, 140, 150, 255];
const TRACK: Color = [80, 80, 80, 255];
const BEACON: Color = [255, 100, 100, 255];

/// Robot agent sheet. The first style has a cyan visor, the others amber.
pub fn robot(variation: Variation) -> Canvas {
    let mut img = sheet();
    let accent: Color = if variation.bucket(3) == 0 {
        [100, 200, 255, 255]
    } else {
        [255, 200, 100, 255]
    };

    for facing in Facing::ALL {
        let cx = facing.center_x();

        img.rounded_rect(cx - 8, 38, cx + 8, 46, 2, TRACK);

        img.rounded_rect(cx - 8, 20, cx + 8, 40, 3, CHASSIS);
        img.rounded_rect_outline(cx - 8, 20, cx + 8, 40, 3, CHASSIS_DARK, 1);

        img.rounded_rect(cx - 6, 10, cx + 6, 22, 2, CHASSIS);
        img.rounded_rect_outline(cx - 6, 10, cx + 6, 22, 2, CHASSIS_DARK, 1);

        match facing {
            Facing::Left => img.rect(cx - 5, 14, cx - 1, 18, accent),
            Facing::Right => img.rect(cx + 1, 14, cx + 5, 18, accent),
            _ => img.rect(cx - 4, 14, cx + 4, 18, accent),
        }

        img.line((cx, 10), (cx, 4), CHASSIS_DARK, 2);
        img.ellipse(cx - 2, 2, cx + 2, 6, BEACON);
    }

    img
}
