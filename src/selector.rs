//! Trait selection from a hex seed or a random source.
//!
//! Both modes go through [`select`]; they differ only in the [`TraitPicker`]
//! that turns a candidate list length into an index.
//!
//! # Seed format
//!
//! An optional lowercase `0x` prefix is stripped, then the remaining characters
//! are split into six equal contiguous chunks (the remainder is ignored).
//! Each chunk is read as base 16 from its leading hex digits; a chunk with no
//! leading hex digit (including an empty chunk) counts as zero. The chunk for
//! a slot, taken modulo the candidate count, is the selected index.
//!
//! ```
//! use crustal::catalog::Catalog;
//! use crustal::selector::{select, SeedPicker};
//!
//! let catalog = Catalog::global();
//! let a = select(catalog, &mut SeedPicker::new("0xdeadbeefcafe"), None);
//! let b = select(catalog, &mut SeedPicker::new("0xdeadbeefcafe"), None);
//! assert_eq!(a.record(), b.record());
//! ```

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

use crate::catalog::Catalog;
use crate::models::{Accessory, BodyPattern, EyeStyle, Palette, Species, TraitRecord};

/// One randomizable axis of avatar identity, in seed chunk order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TraitSlot {
    Species,
    Palette,
    EyeStyle,
    Pattern,
    Accessory,
    IrisColor,
}

impl TraitSlot {
    /// Slots in the order seed chunks are assigned.
    pub const ORDER: [TraitSlot; 6] = [
        TraitSlot::Species,
        TraitSlot::Palette,
        TraitSlot::EyeStyle,
        TraitSlot::Pattern,
        TraitSlot::Accessory,
        TraitSlot::IrisColor,
    ];

    /// Position of this slot in [`TraitSlot::ORDER`].
    pub fn position(self) -> usize {
        match self {
            TraitSlot::Species => 0,
            TraitSlot::Palette => 1,
            TraitSlot::EyeStyle => 2,
            TraitSlot::Pattern => 3,
            TraitSlot::Accessory => 4,
            TraitSlot::IrisColor => 5,
        }
    }
}

/// Source of trait indices.
pub trait TraitPicker {
    /// Pick an index in `0..len` for `slot`. `len` is never zero.
    fn pick(&mut self, slot: TraitSlot, len: usize) -> usize;
}

/// The seed without its `0x` prefix. An uppercase `0X` is kept, so it
/// becomes part of the first chunk.
pub fn strip_hex_prefix(seed: &str) -> &str {
    seed.strip_prefix("0x").unwrap_or(seed)
}

/// A seed split into one hex chunk per [`TraitSlot`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedChunks {
    chunks: Vec<Vec<u8>>,
}

impl SeedChunks {
    /// Split a seed into six chunks of leading hex digit values.
    pub fn parse(seed: &str) -> Self {
        let chars: Vec<char> = strip_hex_prefix(seed).chars().collect();
        let count = TraitSlot::ORDER.len();
        let size = chars.len() / count;

        let chunks = (0..count)
            .map(|i| {
                chars[i * size..(i + 1) * size]
                    .iter()
                    .map_while(|c| c.to_digit(16).map(|d| d as u8))
                    .collect()
            })
            .collect();
        Self { chunks }
    }

    /// Digits that count toward a slot's value, most significant first.
    pub fn digits(&self, slot: TraitSlot) -> &[u8] {
        self.chunks.get(slot.position()).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The chunk value modulo `len`, exact for chunks of any length.
    pub fn index(&self, slot: TraitSlot, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        let len = len as u64;
        let rem = self
            .digits(slot)
            .iter()
            .fold(0u64, |acc, &d| (acc * 16 + u64::from(d)) % len);
        rem as usize
    }

    /// The chunk value, when it fits in a `u64`.
    pub fn value(&self, slot: TraitSlot) -> Option<u64> {
        self.digits(slot)
            .iter()
            .try_fold(0u64, |acc, &d| acc.checked_mul(16)?.checked_add(u64::from(d)))
    }
}

/// Picks indices from a hex seed.
#[derive(Debug, Clone)]
pub struct SeedPicker {
    chunks: SeedChunks,
}

impl SeedPicker {
    pub fn new(seed: &str) -> Self {
        Self { chunks: SeedChunks::parse(seed) }
    }

    pub fn chunks(&self) -> &SeedChunks {
        &self.chunks
    }
}

impl TraitPicker for SeedPicker {
    fn pick(&mut self, slot: TraitSlot, len: usize) -> usize {
        self.chunks.index(slot, len)
    }
}

/// Picks indices uniformly from a random number generator.
#[derive(Debug, Clone)]
pub struct RandomPicker<R> {
    rng: R,
}

impl<R: Rng> RandomPicker<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomPicker<ThreadRng> {
    /// Picker backed by the thread-local generator.
    pub fn thread() -> Self {
        Self::new(rand::thread_rng())
    }
}

impl RandomPicker<StdRng> {
    /// Reproducible picker for tests and replays.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> TraitPicker for RandomPicker<R> {
    fn pick(&mut self, _slot: TraitSlot, len: usize) -> usize {
        self.rng.gen_range(0..len.max(1))
    }
}

impl<P: TraitPicker + ?Sized> TraitPicker for &mut P {
    fn pick(&mut self, slot: TraitSlot, len: usize) -> usize {
        (**self).pick(slot, len)
    }
}

/// Concrete traits chosen for one avatar, borrowed from the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection<'a> {
    pub species: Species,
    pub palette: &'a Palette,
    pub eye_style: &'a EyeStyle,
    pub pattern: &'a BodyPattern,
    pub accessory: &'a Accessory,
    pub iris_color: &'a str,
}

impl Selection<'_> {
    /// Owned trait record for this selection.
    pub fn record(&self) -> TraitRecord {
        TraitRecord {
            species: self.species,
            palette: self.palette.clone(),
            eye_style: self.eye_style.name.to_string(),
            pattern: self.pattern.name.to_string(),
            accessory: self.accessory.name.to_string(),
            iris_color: self.iris_color.to_string(),
        }
    }
}

fn pick_from<'a, T>(picker: &mut impl TraitPicker, slot: TraitSlot, items: &'a [T]) -> &'a T {
    &items[picker.pick(slot, items.len()) % items.len()]
}

/// Select all six traits, in [`TraitSlot::ORDER`].
///
/// When `species` is given the species slot is not consulted.
///
/// # Panics
///
/// Panics if a candidate list is empty. The built-in catalog has no empty
/// lists.
pub fn select<'a>(
    catalog: &'a Catalog,
    picker: &mut impl TraitPicker,
    species: Option<Species>,
) -> Selection<'a> {
    let species = match species {
        Some(species) => species,
        None => *pick_from(picker, TraitSlot::Species, catalog.species()),
    };
    Selection {
        species,
        palette: pick_from(picker, TraitSlot::Palette, catalog.palettes(species)),
        eye_style: pick_from(picker, TraitSlot::EyeStyle, catalog.eye_styles()),
        pattern: pick_from(picker, TraitSlot::Pattern, catalog.patterns()),
        accessory: pick_from(picker, TraitSlot::Accessory, catalog.accessories()),
        iris_color: pick_from(picker, TraitSlot::IrisColor, catalog.iris_colors()).as_str(),
    }
}
