//! Data model types for avatar traits.
//!
//! Everything here is immutable value data. The catalog owns one instance of
//! each eye style, pattern, and accessory; a generated avatar refers to them
//! by name in its [`TraitRecord`].

use image::Rgba;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::color::{parse_color_lenient, BLACK, WHITE};
use crate::grid::Cell;

/// Name of the "no effect" pattern and accessory.
pub const NONE_TRAIT: &str = "none";

/// A sea creature species. The wire name is camelCase (`hermitCrab`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Species {
    Lobster,
    Squid,
    Octopus,
    Shrimp,
    HermitCrab,
    Nautilus,
    Pufferfish,
}

impl Species {
    /// Master species list, in selection order.
    pub const ALL: [Species; 7] = [
        Species::Lobster,
        Species::Squid,
        Species::Octopus,
        Species::Shrimp,
        Species::HermitCrab,
        Species::Nautilus,
        Species::Pufferfish,
    ];

    /// Wire name of the species.
    pub fn name(self) -> &'static str {
        match self {
            Species::Lobster => "lobster",
            Species::Squid => "squid",
            Species::Octopus => "octopus",
            Species::Shrimp => "shrimp",
            Species::HermitCrab => "hermitCrab",
            Species::Nautilus => "nautilus",
            Species::Pufferfish => "pufferfish",
        }
    }

    /// All wire names, in selection order.
    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|s| s.name()).collect()
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a species name is not in the master list
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown species '{0}'")]
pub struct UnknownSpecies(pub String);

impl FromStr for Species {
    type Err = UnknownSpecies;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Species::ALL
            .iter()
            .copied()
            .find(|species| species.name() == s)
            .ok_or_else(|| UnknownSpecies(s.to_string()))
    }
}

/// Four named colors applied to a species silhouette.
///
/// Stored as hex strings so a [`TraitRecord`] carries the exact values.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Palette {
    pub body: String,
    pub accent: String,
    pub dark: String,
    pub light: String,
}

impl Palette {
    pub fn new(body: &str, accent: &str, dark: &str, light: &str) -> Self {
        Self {
            body: body.to_string(),
            accent: accent.to_string(),
            dark: dark.to_string(),
            light: light.to_string(),
        }
    }

    /// Parse the hex strings into drawing colors.
    ///
    /// Invalid entries become magenta rather than failing.
    pub fn colors(&self) -> PaletteColors {
        PaletteColors {
            body: parse_color_lenient(&self.body),
            accent: parse_color_lenient(&self.accent),
            dark: parse_color_lenient(&self.dark),
            light: parse_color_lenient(&self.light),
        }
    }
}

/// A palette resolved to RGBA values, ready for drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteColors {
    pub body: Rgba<u8>,
    pub accent: Rgba<u8>,
    pub dark: Rgba<u8>,
    pub light: Rgba<u8>,
}

/// One cell of an eye template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EyeCell {
    /// Leaves the face untouched
    Clear,
    /// Opaque white (`W`)
    White,
    /// Opaque black (`B`)
    Black,
    /// Placeholder resolved to the avatar's iris color (`C`)
    Iris,
}

impl EyeCell {
    /// Resolve this code against an iris color.
    pub fn resolve(self, iris: Rgba<u8>) -> Cell {
        match self {
            EyeCell::Clear => None,
            EyeCell::White => Some(WHITE),
            EyeCell::Black => Some(BLACK),
            EyeCell::Iris => Some(iris),
        }
    }
}

/// A named eye template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EyeStyle {
    pub name: &'static str,
    pub pattern: &'static [&'static [EyeCell]],
}

impl EyeStyle {
    /// Resolve the template into drawable cells.
    pub fn resolve(&self, iris: Rgba<u8>) -> Vec<Vec<Cell>> {
        self.pattern
            .iter()
            .map(|row| row.iter().map(|cell| cell.resolve(iris)).collect())
            .collect()
    }
}

/// Where a body pattern applies the accent color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternShape {
    /// Clean look, no cells
    Plain,
    /// Explicit `(x, y)` cells
    Spots(&'static [(i32, i32)]),
    /// Horizontal bands: each listed row, columns `start_x..start_x + width`
    Bands { rows: &'static [i32], start_x: i32, width: i32 },
}

/// A named body pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BodyPattern {
    pub name: &'static str,
    pub shape: PatternShape,
}

impl BodyPattern {
    /// Target cells of the pattern, in application order.
    pub fn cells(&self) -> Vec<(i32, i32)> {
        match &self.shape {
            PatternShape::Plain => Vec::new(),
            PatternShape::Spots(offsets) => offsets.to_vec(),
            PatternShape::Bands { rows, start_x, width } => rows
                .iter()
                .flat_map(|&y| (*start_x..start_x + width).map(move |x| (x, y)))
                .collect(),
        }
    }
}

/// A named accessory with literal colors and an anchor displacement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accessory {
    pub name: &'static str,
    pub template: Vec<Vec<Cell>>,
    pub offset_x: i32,
    pub offset_y: i32,
}

impl Accessory {
    /// True when drawing this accessory has no visual effect.
    pub fn is_empty(&self) -> bool {
        self.name == NONE_TRAIT || self.template.iter().all(|row| row.is_empty())
    }
}

/// The six resolved traits of one avatar.
///
/// This is the persisted identity: two avatars with equal records render to
/// identical grids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraitRecord {
    pub species: Species,
    pub palette: Palette,
    pub eye_style: String,
    pub pattern: String,
    pub accessory: String,
    pub iris_color: String,
}
