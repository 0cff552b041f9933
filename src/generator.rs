//! Avatar composition: traits in, layered grid and image out.
//!
//! Layers are drawn in a fixed order and later layers overwrite earlier ones:
//!
//! 1. species silhouette (outlined with the palette's `dark` color)
//! 2. body pattern, tinting only cells the silhouette already covers
//! 3. eyes at the species' anchors
//! 4. accessory at the species' head-top anchor plus its own offset
//!
//! Malformed trait input never fails: problems come back as [`Warning`]s and
//! the avatar is skipped.

use image::RgbaImage;
use std::path::Path;
use thiserror::Error;

use crate::catalog::Catalog;
use crate::color::parse_color_lenient;
use crate::grid::{PixelGrid, GRID_SIZE};
use crate::models::{Species, TraitRecord};
use crate::output::{self, OutputError};
use crate::selector::{
    select, strip_hex_prefix, RandomPicker, SeedPicker, Selection, TraitPicker, TraitSlot,
};
use crate::species;
use crate::suggest::{format_suggestion, suggest};

/// Pixels per grid cell in exported images
pub const DEFAULT_PIXEL_SCALE: u32 = 8;

/// A warning generated during generation
#[derive(Debug, Clone, PartialEq)]
pub struct Warning {
    pub message: String,
}

impl Warning {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

/// Error returned when a trait record does not match its seed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerifyError {
    #[error("trait '{field}' mismatch: seed gives '{expected}', record has '{actual}'")]
    Mismatch { field: &'static str, expected: String, actual: String },
}

/// One generated avatar.
#[derive(Debug, Clone)]
pub struct Avatar {
    /// Final composited grid
    pub grid: PixelGrid,
    /// Grid scaled up with nearest-neighbor sampling
    pub image: RgbaImage,
    /// The six traits the avatar was drawn from
    pub traits: TraitRecord,
}

impl Avatar {
    /// Losslessly encoded PNG bytes of [`Avatar::image`].
    pub fn to_png_bytes(&self) -> Result<Vec<u8>, OutputError> {
        output::encode_png(&self.image)
    }

    /// The image as a `data:image/png;base64,...` URL.
    pub fn to_data_url(&self) -> Result<String, OutputError> {
        output::to_data_url(&self.image)
    }

    /// Write the image to `path` as PNG.
    pub fn save_png(&self, path: &Path) -> Result<(), OutputError> {
        output::save_png(&self.image, path)
    }
}

/// Composes avatars from the shared catalog.
///
/// Holds no mutable state, so one generator can serve any number of threads.
#[derive(Debug, Clone, Copy)]
pub struct AvatarGenerator<'a> {
    catalog: &'a Catalog,
    pixel_scale: u32,
}

impl Default for AvatarGenerator<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl AvatarGenerator<'static> {
    /// Generator over the process-wide catalog at the default scale.
    pub fn new() -> Self {
        Self::with_catalog(Catalog::global())
    }
}

impl<'a> AvatarGenerator<'a> {
    pub fn with_catalog(catalog: &'a Catalog) -> Self {
        Self { catalog, pixel_scale: DEFAULT_PIXEL_SCALE }
    }

    /// Set the exported image scale, clamped to `1..=MAX_PIXEL_SCALE`.
    pub fn with_pixel_scale(mut self, scale: u32) -> Self {
        self.pixel_scale = scale.clamp(1, output::MAX_PIXEL_SCALE);
        self
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    pub fn pixel_scale(&self) -> u32 {
        self.pixel_scale
    }

    /// Avatar with every trait drawn from the thread-local random generator.
    pub fn generate_random(&self) -> Avatar {
        self.generate_with(&mut RandomPicker::thread(), None)
    }

    /// Random avatar of the named species.
    ///
    /// An unknown name produces no avatar and a warning (with a suggestion
    /// when the name is close to a real species).
    pub fn generate(&self, species_name: &str) -> (Option<Avatar>, Vec<Warning>) {
        match species_name.parse::<Species>() {
            Ok(species) => (Some(self.generate_species(species)), Vec::new()),
            Err(err) => (None, vec![unknown_species_warning(&err.0)]),
        }
    }

    /// Random avatar of a known species.
    pub fn generate_species(&self, species: Species) -> Avatar {
        self.generate_with(&mut RandomPicker::thread(), Some(species))
    }

    /// Avatar fully determined by a hex seed.
    ///
    /// ```
    /// use crustal::generator::AvatarGenerator;
    ///
    /// let generator = AvatarGenerator::new();
    /// let a = generator.generate_from_seed("0x7f3a9c21be04");
    /// let b = generator.generate_from_seed("0x7f3a9c21be04");
    /// assert_eq!(a.traits, b.traits);
    /// assert_eq!(a.grid, b.grid);
    /// ```
    pub fn generate_from_seed(&self, seed: &str) -> Avatar {
        self.generate_with(&mut SeedPicker::new(seed), None)
    }

    /// Avatar whose traits come from `picker`; `species` pins the species.
    pub fn generate_with(&self, picker: &mut impl TraitPicker, species: Option<Species>) -> Avatar {
        let selection = select(self.catalog, picker, species);
        self.finish(&selection)
    }

    /// Re-render an avatar from a persisted trait record.
    ///
    /// Trait names missing from the catalog produce warnings and no avatar.
    /// Palette and iris colors are taken from the record as-is; invalid hex
    /// values render magenta.
    pub fn render_traits(&self, record: &TraitRecord) -> (Option<Avatar>, Vec<Warning>) {
        let mut warnings = Vec::new();

        let eye_style = self.catalog.eye_style(&record.eye_style);
        if eye_style.is_none() {
            warnings.push(unknown_trait_warning(
                "eye style",
                &record.eye_style,
                &self.catalog.eye_style_names(),
            ));
        }
        let pattern = self.catalog.pattern(&record.pattern);
        if pattern.is_none() {
            warnings.push(unknown_trait_warning(
                "pattern",
                &record.pattern,
                &self.catalog.pattern_names(),
            ));
        }
        let accessory = self.catalog.accessory(&record.accessory);
        if accessory.is_none() {
            warnings.push(unknown_trait_warning(
                "accessory",
                &record.accessory,
                &self.catalog.accessory_names(),
            ));
        }

        match (eye_style, pattern, accessory) {
            (Some(eye_style), Some(pattern), Some(accessory)) => {
                let selection = Selection {
                    species: record.species,
                    palette: &record.palette,
                    eye_style,
                    pattern,
                    accessory,
                    iris_color: &record.iris_color,
                };
                (Some(self.finish(&selection)), warnings)
            }
            _ => (None, warnings),
        }
    }

    /// Check that `record` is exactly what `seed` generates.
    pub fn verify(&self, seed: &str, record: &TraitRecord) -> Result<(), VerifyError> {
        let expected = select(self.catalog, &mut SeedPicker::new(seed), None).record();

        let fields: [(&'static str, String, String); 9] = [
            ("species", expected.species.to_string(), record.species.to_string()),
            ("palette.body", expected.palette.body, record.palette.body.clone()),
            ("palette.accent", expected.palette.accent, record.palette.accent.clone()),
            ("palette.dark", expected.palette.dark, record.palette.dark.clone()),
            ("palette.light", expected.palette.light, record.palette.light.clone()),
            ("eyeStyle", expected.eye_style, record.eye_style.clone()),
            ("pattern", expected.pattern, record.pattern.clone()),
            ("accessory", expected.accessory, record.accessory.clone()),
            ("irisColor", expected.iris_color, record.iris_color.clone()),
        ];

        match fields.into_iter().find(|(_, expected, actual)| expected != actual) {
            Some((field, expected, actual)) => {
                Err(VerifyError::Mismatch { field, expected, actual })
            }
            None => Ok(()),
        }
    }

    fn finish(&self, selection: &Selection<'_>) -> Avatar {
        let grid = compose(selection);
        let image = output::rasterize(&grid, self.pixel_scale);
        Avatar { grid, image, traits: selection.record() }
    }
}

/// Draw all layers of a selection onto a fresh grid.
pub fn compose(selection: &Selection<'_>) -> PixelGrid {
    let colors = selection.palette.colors();

    let mut base = species::draw(selection.species, &colors);
    apply_pattern(&mut base, selection);

    let mut grid = PixelGrid::new(GRID_SIZE);
    grid.draw_grid(&base, 0, 0);

    let iris = parse_color_lenient(selection.iris_color);
    let eye = selection.eye_style.resolve(iris);
    let anchors = species::eye_anchors(selection.species);
    grid.draw_template(&eye, anchors.left.0, anchors.left.1);
    if !species::is_single_eyed(selection.species) {
        grid.draw_template(&eye, anchors.right.0, anchors.right.1);
    }

    let accessory = selection.accessory;
    if !accessory.is_empty() {
        let (head_x, head_y) = species::head_top(selection.species);
        grid.draw_template(
            &accessory.template,
            head_x + accessory.offset_x,
            head_y + accessory.offset_y,
        );
    }

    grid
}

/// Tint the pattern's cells with the accent color where the base is opaque.
fn apply_pattern(base: &mut PixelGrid, selection: &Selection<'_>) {
    let accent = parse_color_lenient(&selection.palette.accent);
    for (x, y) in selection.pattern.cells() {
        base.tint(x, y, accent);
    }
}

/// Warnings for seeds that generate, but probably not the avatar intended.
///
/// Seeds with fewer than six digits select the first entry of every list,
/// and non-hex characters cut their chunk short.
pub fn check_seed(seed: &str) -> Vec<Warning> {
    let hex = strip_hex_prefix(seed);
    let mut warnings = Vec::new();

    if hex.chars().count() < TraitSlot::ORDER.len() {
        warnings.push(Warning::new(format!(
            "Seed '{}' has fewer than {} digits; every trait uses its first entry",
            seed,
            TraitSlot::ORDER.len()
        )));
    }
    if let Some(c) = hex.chars().find(|c| !c.is_ascii_hexdigit()) {
        warnings.push(Warning::new(format!(
            "Seed '{}' contains non-hex character '{}'",
            seed, c
        )));
    }

    warnings
}

fn unknown_species_warning(name: &str) -> Warning {
    unknown_trait_warning("species", name, &Species::names())
}

fn unknown_trait_warning(kind: &str, name: &str, candidates: &[&str]) -> Warning {
    let mut message = format!("Unknown {} '{}'", kind, name);
    if let Some(hint) = format_suggestion(&suggest(name, candidates, 3)) {
        message.push_str(". ");
        message.push_str(&hint);
    }
    Warning::new(message)
}
