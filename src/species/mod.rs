//! Species silhouettes and per-species anchor points.
//!
//! Each species has one pure drawing function that maps a palette to a
//! [`PixelGrid`] of [`GRID_SIZE`] cells. Drawing is a fixed sequence of
//! primitives ending in a `dark` outline pass; later primitives overwrite
//! earlier ones, so the order inside each function is significant.

mod cephalopods;
mod crustaceans;
mod fish;

use crate::grid::{PixelGrid, GRID_SIZE};
use crate::models::{PaletteColors, Species};

/// Top-left positions of the left and right eye templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EyeAnchors {
    pub left: (i32, i32),
    pub right: (i32, i32),
}

/// Eye anchor used for species missing from [`EYE_ANCHORS`].
pub const DEFAULT_EYE_ANCHORS: EyeAnchors = EyeAnchors { left: (10, 10), right: (17, 10) };

/// Accessory anchor used for species missing from [`HEAD_TOPS`].
pub const DEFAULT_HEAD_TOP: (i32, i32) = (13, 4);

/// Eye positions per species.
pub const EYE_ANCHORS: &[(Species, EyeAnchors)] = &[
    (Species::Lobster, EyeAnchors { left: (10, 11), right: (17, 11) }),
    (Species::Squid, EyeAnchors { left: (10, 10), right: (17, 10) }),
    (Species::Octopus, EyeAnchors { left: (10, 8), right: (17, 8) }),
    (Species::Shrimp, EyeAnchors { left: (13, 7), right: (18, 7) }),
    (Species::HermitCrab, EyeAnchors { left: (22, 14), right: (26, 14) }),
    (Species::Nautilus, EyeAnchors { left: (23, 13), right: (23, 13) }),
    (Species::Pufferfish, EyeAnchors { left: (10, 12), right: (17, 12) }),
];

/// Top-of-head positions that accessory offsets are relative to.
pub const HEAD_TOPS: &[(Species, (i32, i32))] = &[
    (Species::Lobster, (13, 4)),
    (Species::Squid, (13, 2)),
    (Species::Octopus, (13, 1)),
    (Species::Shrimp, (13, 4)),
    (Species::HermitCrab, (19, 8)),
    (Species::Nautilus, (20, 6)),
    (Species::Pufferfish, (13, 4)),
];

/// Side-profile species that only show one eye.
pub const SINGLE_EYED: &[Species] = &[Species::Nautilus];

/// Eye anchors for a species, falling back to [`DEFAULT_EYE_ANCHORS`].
pub fn eye_anchors(species: Species) -> EyeAnchors {
    EYE_ANCHORS
        .iter()
        .find(|(s, _)| *s == species)
        .map_or(DEFAULT_EYE_ANCHORS, |(_, anchors)| *anchors)
}

/// Head-top anchor for a species, falling back to [`DEFAULT_HEAD_TOP`].
pub fn head_top(species: Species) -> (i32, i32) {
    HEAD_TOPS
        .iter()
        .find(|(s, _)| *s == species)
        .map_or(DEFAULT_HEAD_TOP, |(_, top)| *top)
}

/// Whether only the left eye is drawn for this species.
pub fn is_single_eyed(species: Species) -> bool {
    SINGLE_EYED.contains(&species)
}

/// Draw the base silhouette of a species.
pub fn draw(species: Species, palette: &PaletteColors) -> PixelGrid {
    let mut grid = PixelGrid::new(GRID_SIZE);
    match species {
        Species::Lobster => crustaceans::draw_lobster(&mut grid, palette),
        Species::Squid => cephalopods::draw_squid(&mut grid, palette),
        Species::Octopus => cephalopods::draw_octopus(&mut grid, palette),
        Species::Shrimp => crustaceans::draw_shrimp(&mut grid, palette),
        Species::HermitCrab => crustaceans::draw_hermit_crab(&mut grid, palette),
        Species::Nautilus => cephalopods::draw_nautilus(&mut grid, palette),
        Species::Pufferfish => fish::draw_pufferfish(&mut grid, palette),
    }
    grid.add_outline(palette.dark);
    grid
}
