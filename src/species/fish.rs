//! Pufferfish.

use crate::grid::PixelGrid;
use crate::models::PaletteColors;

/// Spike tips around the puffed body. Each gets a dark base one step inward.
const SPIKES: [(i32, i32); 14] = [
    (15, 2),
    (8, 4),
    (22, 4),
    (4, 8),
    (26, 8),
    (3, 14),
    (27, 14),
    (4, 20),
    (26, 20),
    (8, 24),
    (22, 24),
    (12, 26),
    (18, 26),
    (15, 27),
];

/// Body center the spikes point away from.
const CENTER: (i32, i32) = (15, 15);

/// Round spiky body with fins and a small "o" mouth.
pub(super) fn draw_pufferfish(grid: &mut PixelGrid, p: &PaletteColors) {
    grid.fill_circle(CENTER.0, CENTER.1, 11.0, p.body);
    grid.fill_ellipse(15, 19, 8.0, 5.0, p.light);

    for (sx, sy) in SPIKES {
        grid.set(sx, sy, p.accent);
        let dx = (CENTER.0 - sx).signum();
        let dy = (CENTER.1 - sy).signum();
        grid.set(sx + dx, sy + dy, p.dark);
    }

    // Dorsal fin
    grid.set(15, 3, p.accent);
    grid.set(16, 3, p.accent);
    grid.set(15, 4, p.body);

    // Side fins
    grid.fill_rect(3, 13, 2, 3, p.accent);
    grid.fill_rect(27, 13, 2, 3, p.accent);

    // Tail fin
    grid.fill_rect(14, 27, 3, 2, p.accent);
    grid.set(15, 29, p.body);

    // Mouth
    for (x, y) in [(14, 18), (15, 18), (13, 19), (16, 19), (14, 20), (15, 20)] {
        grid.set(x, y, p.dark);
    }
}
