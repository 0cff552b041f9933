//! Trait catalog: the static tables every avatar is assembled from.
//!
//! The catalog is built once per process and never mutated afterwards, so any
//! number of concurrent generations can share it by reference.

pub mod features;
pub mod palettes;

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::models::{Accessory, BodyPattern, EyeStyle, Palette, Species};

static GLOBAL: OnceLock<Catalog> = OnceLock::new();

/// Read-only trait tables.
#[derive(Debug, Clone)]
pub struct Catalog {
    species: Vec<Species>,
    palettes: HashMap<Species, Vec<Palette>>,
    eye_styles: Vec<EyeStyle>,
    patterns: Vec<BodyPattern>,
    accessories: Vec<Accessory>,
    iris_colors: Vec<String>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    /// Build the catalog from the built-in tables.
    pub fn new() -> Self {
        Self {
            species: Species::ALL.to_vec(),
            palettes: Species::ALL
                .iter()
                .map(|&species| (species, palettes::palettes_for(species)))
                .collect(),
            eye_styles: features::EYE_STYLES.to_vec(),
            patterns: features::BODY_PATTERNS.to_vec(),
            accessories: features::accessories(),
            iris_colors: features::IRIS_COLORS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// The process-wide catalog, built on first use.
    pub fn global() -> &'static Catalog {
        GLOBAL.get_or_init(Catalog::new)
    }

    /// Master species list, in selection order.
    pub fn species(&self) -> &[Species] {
        &self.species
    }

    /// Candidate palettes for a species.
    pub fn palettes(&self, species: Species) -> &[Palette] {
        self.palettes.get(&species).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn eye_styles(&self) -> &[EyeStyle] {
        &self.eye_styles
    }

    pub fn patterns(&self) -> &[BodyPattern] {
        &self.patterns
    }

    pub fn accessories(&self) -> &[Accessory] {
        &self.accessories
    }

    pub fn iris_colors(&self) -> &[String] {
        &self.iris_colors
    }

    /// Look up an eye style by name.
    pub fn eye_style(&self, name: &str) -> Option<&EyeStyle> {
        self.eye_styles.iter().find(|e| e.name == name)
    }

    /// Look up a body pattern by name.
    pub fn pattern(&self, name: &str) -> Option<&BodyPattern> {
        self.patterns.iter().find(|p| p.name == name)
    }

    /// Look up an accessory by name.
    pub fn accessory(&self, name: &str) -> Option<&Accessory> {
        self.accessories.iter().find(|a| a.name == name)
    }

    /// Names of every eye style, in selection order.
    pub fn eye_style_names(&self) -> Vec<&'static str> {
        self.eye_styles.iter().map(|e| e.name).collect()
    }

    /// Names of every body pattern, in selection order.
    pub fn pattern_names(&self) -> Vec<&'static str> {
        self.patterns.iter().map(|p| p.name).collect()
    }

    /// Names of every accessory, in selection order.
    pub fn accessory_names(&self) -> Vec<&'static str> {
        self.accessories.iter().map(|a| a.name).collect()
    }

    /// Number of distinct trait combinations the catalog can produce.
    pub fn combinations(&self) -> u64 {
        let palettes: u64 = self.species.iter().map(|&s| self.palettes(s).len() as u64).sum();
        palettes
            * self.eye_styles.len() as u64
            * self.patterns.len() as u64
            * self.accessories.len() as u64
            * self.iris_colors.len() as u64
    }
}
