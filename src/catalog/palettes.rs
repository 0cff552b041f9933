//! Per-species color palettes.
//!
//! Each entry is `[body, accent, dark, light]`. Every species has exactly
//! [`PALETTES_PER_SPECIES`] candidates and the order is part of the seed
//! contract: reordering changes which palette a seed selects.

use crate::models::{Palette, Species};

/// Number of candidate palettes for every species.
pub const PALETTES_PER_SPECIES: usize = 5;

type PaletteRow = [&'static str; 4];

const LOBSTER: [PaletteRow; PALETTES_PER_SPECIES] = [
    ["#c0392b", "#e74c3c", "#7b241c", "#f1948a"],
    ["#d35400", "#e67e22", "#873600", "#f0b27a"],
    ["#922b21", "#cb4335", "#641e16", "#d98880"],
    ["#b03a2e", "#ec7063", "#78281f", "#f5b7b1"],
    ["#a04000", "#dc7633", "#6e2c00", "#f8c471"],
];

const SQUID: [PaletteRow; PALETTES_PER_SPECIES] = [
    ["#8e44ad", "#a569bd", "#6c3483", "#d2b4de"],
    ["#2980b9", "#5dade2", "#1a5276", "#aed6f1"],
    ["#c0392b", "#e74c3c", "#922b21", "#f5b7b1"],
    ["#1abc9c", "#48c9b0", "#0e6655", "#a3e4d7"],
    ["#2c3e50", "#5d6d7e", "#1b2631", "#aeb6bf"],
];

const OCTOPUS: [PaletteRow; PALETTES_PER_SPECIES] = [
    ["#e74c3c", "#f1948a", "#922b21", "#fadbd8"],
    ["#9b59b6", "#c39bd3", "#6c3483", "#e8daef"],
    ["#e67e22", "#f0b27a", "#a04000", "#fdebd0"],
    ["#2ecc71", "#82e0aa", "#1e8449", "#d5f5e3"],
    ["#3498db", "#85c1e9", "#1f618d", "#d6eaf8"],
];

const SHRIMP: [PaletteRow; PALETTES_PER_SPECIES] = [
    ["#f1948a", "#f5b7b1", "#c0392b", "#fadbd8"],
    ["#f0b27a", "#f8c471", "#d35400", "#fdebd0"],
    ["#e74c3c", "#ec7063", "#922b21", "#f5b7b1"],
    ["#eb984e", "#f5cba7", "#af601a", "#fae5d3"],
    ["#d4ac0d", "#f4d03f", "#9a7d0a", "#fcf3cf"],
];

const HERMIT_CRAB: [PaletteRow; PALETTES_PER_SPECIES] = [
    ["#dc7633", "#eb984e", "#935116", "#f5cba7"],
    ["#839192", "#aab7b8", "#515a5a", "#d5dbdb"],
    ["#b9770e", "#d4ac0d", "#7d5109", "#f9e79f"],
    ["#a04000", "#d35400", "#6e2c00", "#f0b27a"],
    ["#7b7d7d", "#b2babb", "#4d5656", "#d5d8dc"],
];

const NAUTILUS: [PaletteRow; PALETTES_PER_SPECIES] = [
    ["#d4ac0d", "#f4d03f", "#9a7d0a", "#fcf3cf"],
    ["#e67e22", "#f0b27a", "#a04000", "#fdebd0"],
    ["#af601a", "#dc7633", "#784212", "#f5cba7"],
    ["#b7950b", "#d4ac0d", "#7d6608", "#f9e79f"],
    ["#ca6f1e", "#eb984e", "#8e4e0e", "#fad7a0"],
];

const PUFFERFISH: [PaletteRow; PALETTES_PER_SPECIES] = [
    ["#f4d03f", "#f9e79f", "#b7950b", "#fcf3cf"],
    ["#5dade2", "#aed6f1", "#2e86c1", "#d6eaf8"],
    ["#58d68d", "#abebc6", "#28b463", "#d5f5e3"],
    ["#f1948a", "#f5b7b1", "#e74c3c", "#fadbd8"],
    ["#bb8fce", "#d7bde2", "#8e44ad", "#ebdef0"],
];

fn rows(species: Species) -> &'static [PaletteRow; PALETTES_PER_SPECIES] {
    match species {
        Species::Lobster => &LOBSTER,
        Species::Squid => &SQUID,
        Species::Octopus => &OCTOPUS,
        Species::Shrimp => &SHRIMP,
        Species::HermitCrab => &HERMIT_CRAB,
        Species::Nautilus => &NAUTILUS,
        Species::Pufferfish => &PUFFERFISH,
    }
}

/// Build the ordered palette list for a species.
pub fn palettes_for(species: Species) -> Vec<Palette> {
    rows(species)
        .iter()
        .map(|[body, accent, dark, light]| Palette::new(body, accent, dark, light))
        .collect()
}
