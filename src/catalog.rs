//! Asset catalog
//!
//! The full list of files the generator produces, built once as ordered
//! descriptors so the batch runner can stay a plain render-and-write loop.
//! Building the catalog rejects duplicate filenames up front.

use crate::canvas::Canvas;
use crate::error::{GenerateError, Result};
use crate::recipes::{characters, furniture, icons, tiles, ui};
use crate::variation::Variation;
use rand::RngCore;
use std::collections::HashSet;

/// Shared signature every catalog entry renders through.
pub type Recipe = fn(Variation, &mut dyn RngCore) -> Canvas;

/// Numbered variations written for every kind.
pub const VARIATIONS: [u32; 3] = [1, 2, 3];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetGroup {
    Tiles,
    Furniture,
    Characters,
    Ui,
    Icons,
}

impl AssetGroup {
    /// Write order.
    pub const ALL: [AssetGroup; 5] = [
        AssetGroup::Tiles,
        AssetGroup::Furniture,
        AssetGroup::Characters,
        AssetGroup::Ui,
        AssetGroup::Icons,
    ];

    pub fn heading(self) -> &'static str {
        match self {
            AssetGroup::Tiles => "Floor & Wall Tiles",
            AssetGroup::Furniture => "Furniture Sprites",
            AssetGroup::Characters => "Character Sprites",
            AssetGroup::Ui => "UI Elements",
            AssetGroup::Icons => "Icons",
        }
    }
}

/// One drawable kind of asset and how its files are named.
#[derive(Debug, Clone, Copy)]
pub struct AssetKind {
    pub name: &'static str,
    pub group: AssetGroup,
    pub size: (u32, u32),
    /// Added to each numbered variation before rendering. The "fancy" sofa
    /// and the big plant render one style ahead of their file number.
    pub variation_offset: u32,
    pub recipe: Recipe,
}

impl AssetKind {
    fn new(name: &'static str, group: AssetGroup, size: (u32, u32), recipe: Recipe) -> Self {
        Self {
            name,
            group,
            size,
            variation_offset: 0,
            recipe,
        }
    }

    fn with_offset(mut self, offset: u32) -> Self {
        self.variation_offset = offset;
        self
    }

    /// Variation used for the unsuffixed `<kind>.png`.
    pub fn default_variation(&self) -> Variation {
        Variation::new(1).offset(self.variation_offset)
    }

    fn numbered(&self, n: u32) -> AssetDescriptor {
        self.descriptor(format!("{}_v{}.png", self.name, n), Variation::new(n).offset(self.variation_offset))
    }

    fn default_file(&self) -> AssetDescriptor {
        self.descriptor(format!("{}.png", self.name), self.default_variation())
    }

    fn descriptor(&self, filename: String, variation: Variation) -> AssetDescriptor {
        AssetDescriptor {
            kind: self.name,
            group: self.group,
            variation,
            filename,
            size: self.size,
            recipe: self.recipe,
        }
    }
}

/// Every kind the game reads, in write order within each group.
pub fn standard_kinds() -> Vec<AssetKind> {
    use AssetGroup::*;

    let tile = (tiles::TILE_SIZE, tiles::TILE_SIZE);
    let piece = (furniture::FURNITURE_SIZE, furniture::FURNITURE_SIZE);
    let sheet = (characters::SHEET_WIDTH, characters::FRAME_HEIGHT);
    let icon = (icons::ICON_SIZE, icons::ICON_SIZE);

    vec![
        AssetKind::new("floor_wood", Tiles, tile, |v, rng| tiles::floor_wood(v, rng)),
        AssetKind::new("floor_carpet", Tiles, tile, |v, _| tiles::floor_carpet(v)),
        AssetKind::new("floor_tiles", Tiles, tile, |v, _| tiles::floor_tiles(v)),
        AssetKind::new("wall_brick", Tiles, tile, |v, _| tiles::wall_brick(v)),
        AssetKind::new("wall_paint", Tiles, tile, |v, rng| tiles::wall_paint(v, rng)),
        AssetKind::new("sofa", Furniture, piece, |v, _| furniture::sofa(v)),
        AssetKind::new("sofa_fancy", Furniture, piece, |v, _| furniture::sofa(v)).with_offset(1),
        AssetKind::new("plant", Furniture, piece, |v, _| furniture::plant(v, false)),
        AssetKind::new("plant_big", Furniture, piece, |v, _| furniture::plant(v, true)).with_offset(1),
        AssetKind::new("tv", Furniture, piece, |v, _| furniture::tv(v)),
        AssetKind::new("bookshelf", Furniture, piece, |v, rng| furniture::bookshelf(v, rng)),
        AssetKind::new("coffee_table", Furniture, piece, |v, _| furniture::table(v, false)),
        AssetKind::new("dining_table", Furniture, piece, |v, _| furniture::table(v, true)),
        AssetKind::new("lamp", Furniture, piece, |v, _| furniture::lamp(v)),
        AssetKind::new("bed", Furniture, piece, |v, _| furniture::bed(v)),
        AssetKind::new("rug", Furniture, piece, |v, _| furniture::rug(v)),
        AssetKind::new("human_walk", Characters, sheet, |v, _| characters::human(v)),
        AssetKind::new("agent_lobster", Characters, sheet, |v, _| characters::lobster(v)),
        AssetKind::new("agent_robot", Characters, sheet, |v, _| characters::robot(v)),
        AssetKind::new("button", Ui, ui::BUTTON_SIZE, |v, _| ui::button(v)),
        AssetKind::new("panel", Ui, ui::PANEL_SIZE, |v, _| ui::panel(v)),
        AssetKind::new("coin_icon", Icons, icon, |v, _| icons::coin(v)),
        AssetKind::new("heart_icon", Icons, icon, |v, _| icons::heart(v)),
    ]
}

/// A single file to write.
#[derive(Debug, Clone)]
pub struct AssetDescriptor {
    pub kind: &'static str,
    pub group: AssetGroup,
    pub variation: Variation,
    pub filename: String,
    pub size: (u32, u32),
    pub recipe: Recipe,
}

impl AssetDescriptor {
    pub fn render(&self, rng: &mut dyn RngCore) -> Canvas {
        (self.recipe)(self.variation, rng)
    }
}

#[derive(Debug, Clone)]
pub struct Catalog {
    descriptors: Vec<AssetDescriptor>,
}

impl Catalog {
    /// The catalog the game expects.
    pub fn standard() -> Result<Self> {
        Self::from_kinds(&standard_kinds())
    }

    /// Per group: numbered files (variation ascending, kinds in table order),
    /// then one default file per kind.
    pub fn from_kinds(kinds: &[AssetKind]) -> Result<Self> {
        let mut descriptors = Vec::with_capacity(kinds.len() * (VARIATIONS.len() + 1));

        for group in AssetGroup::ALL {
            let members: Vec<&AssetKind> = kinds.iter().filter(|k| k.group == group).collect();
            for n in VARIATIONS {
                descriptors.extend(members.iter().map(|k| k.numbered(n)));
            }
            descriptors.extend(members.iter().map(|k| k.default_file()));
        }

        Self::from_descriptors(descriptors)
    }

    pub fn from_descriptors(descriptors: Vec<AssetDescriptor>) -> Result<Self> {
        {
            let mut seen = HashSet::with_capacity(descriptors.len());
            for d in &descriptors {
                if !seen.insert(d.filename.as_str()) {
                    return Err(GenerateError::DuplicateFilename(d.filename.clone()));
                }
            }
        }
        Ok(Self { descriptors })
    }

    pub fn descriptors(&self) -> &[AssetDescriptor] {
        &self.descriptors
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AssetDescriptor> {
        self.descriptors.iter()
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    pub fn find(&self, filename: &str) -> Option<&AssetDescriptor> {
        self.descriptors.iter().find(|d| d.filename == filename)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a AssetDescriptor;
    type IntoIter = std::slice::Iter<'a, AssetDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.descriptors.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn standard_catalog_has_four_files_per_kind() {
        let catalog = Catalog::standard().unwrap();
        assert_eq!(standard_kinds().len(), 23);
        assert_eq!(catalog.len(), 23 * 4);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn filenames_follow_both_patterns() {
        let catalog = Catalog::standard().unwrap();
        for kind in standard_kinds() {
            for n in VARIATIONS {
                let name = format!("{}_v{}.png", kind.name, n);
                assert!(catalog.find(&name).is_some(), "missing {name}");
            }
            assert!(catalog.find(&format!("{}.png", kind.name)).is_some());
        }
    }

    #[test]
    fn groups_are_written_in_order() {
        let catalog = Catalog::standard().unwrap();
        let order: Vec<AssetGroup> = catalog.iter().map(|d| d.group).collect();
        let rank = |g: AssetGroup| AssetGroup::ALL.iter().position(|&x| x == g).unwrap();
        assert!(order.windows(2).all(|w| rank(w[0]) <= rank(w[1])));

        let first: Vec<&str> = catalog.iter().take(6).map(|d| d.filename.as_str()).collect();
        assert_eq!(
            first,
            vec![
                "floor_wood_v1.png",
                "floor_carpet_v1.png",
                "floor_tiles_v1.png",
                "wall_brick_v1.png",
                "wall_paint_v1.png",
                "floor_wood_v2.png",
            ]
        );
        // defaults close out each group
        let tiles: Vec<&AssetDescriptor> = catalog.iter().filter(|d| d.group == AssetGroup::Tiles).collect();
        assert_eq!(tiles.last().unwrap().filename, "wall_paint.png");
    }

    #[test]
    fn offset_kinds_render_one_style_ahead() {
        let catalog = Catalog::standard().unwrap();
        let variation = |name: &str| catalog.find(name).unwrap().variation.get();
        assert_eq!(variation("sofa_v1.png"), 1);
        assert_eq!(variation("sofa.png"), 1);
        assert_eq!(variation("sofa_fancy_v1.png"), 2);
        assert_eq!(variation("sofa_fancy_v3.png"), 4);
        assert_eq!(variation("sofa_fancy.png"), 2);
        assert_eq!(variation("plant_big.png"), 2);
        assert_eq!(variation("tv.png"), 1);

        let fancy = catalog.find("sofa_fancy_v2.png").unwrap();
        assert_eq!(fancy.kind, "sofa_fancy");
        assert_eq!(fancy.group, AssetGroup::Furniture);
    }

    #[test]
    fn offset_third_files_wrap_to_the_first_style() {
        let catalog = Catalog::standard().unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        let mut raster = |name: &str| catalog.find(name).unwrap().render(&mut rng).into_image().into_raw();
        assert_eq!(raster("sofa_fancy_v3.png"), raster("sofa_v1.png"));
        assert_eq!(raster("plant_big_v3.png"), furniture::plant(Variation::new(1), true).into_image().into_raw());
    }

    #[test]
    fn every_recipe_keeps_its_kind_size() {
        let mut rng = StdRng::seed_from_u64(2024);
        for kind in standard_kinds() {
            for n in [0, 1, 2, 3, 4, 1000] {
                let img = (kind.recipe)(Variation::new(n), &mut rng);
                assert_eq!(img.dimensions(), kind.size, "{} v{n}", kind.name);
            }
        }
    }

    #[test]
    fn background_matches_group() {
        let mut rng = StdRng::seed_from_u64(8);
        let catalog = Catalog::standard().unwrap();
        for d in &catalog {
            let img = d.render(&mut rng);
            if d.group == AssetGroup::Tiles {
                assert!(img.as_image().pixels().all(|p| p.0[3] == 255), "{} has holes", d.filename);
            } else {
                let (w, h) = img.dimensions();
                for (x, y) in [(0, 0), (w - 1, 0), (0, h - 1), (w - 1, h - 1)] {
                    assert_eq!(img.pixel(x, y)[3], 0, "{} corner ({x}, {y})", d.filename);
                }
            }
        }
    }

    #[test]
    fn duplicate_filenames_are_rejected() {
        let kinds = standard_kinds();
        let mut twice = vec![kinds[0], kinds[1]];
        twice.push(kinds[0]);
        match Catalog::from_kinds(&twice) {
            Err(GenerateError::DuplicateFilename(name)) => assert_eq!(name, "floor_wood_v1.png"),
            other => panic!("expected duplicate error, got {other:?}"),
        }
    }
}
