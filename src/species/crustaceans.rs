//! Lobster, shrimp, and hermit crab.

use crate::color::{BLACK, WHITE};
use crate::grid::PixelGrid;
use crate::models::PaletteColors;

/// Tall oval head, two big claws, antennae, and stubby legs.
pub(super) fn draw_lobster(grid: &mut PixelGrid, p: &PaletteColors) {
    grid.fill_ellipse(15, 14, 9.0, 11.0, p.body);
    grid.fill_ellipse(15, 16, 5.0, 6.0, p.light);

    // Shell segments
    for x in 8..=22 {
        grid.tint(x, 10, p.dark);
        grid.tint(x, 18, p.dark);
    }

    // Left claw with pincers
    grid.fill_ellipse(5, 10, 4.0, 3.0, p.body);
    grid.fill_ellipse(5, 10, 2.0, 1.0, p.accent);
    grid.fill_rect(2, 7, 2, 2, p.dark);
    grid.fill_rect(6, 7, 2, 2, p.dark);

    // Right claw with pincers
    grid.fill_ellipse(25, 10, 4.0, 3.0, p.body);
    grid.fill_ellipse(25, 10, 2.0, 1.0, p.accent);
    grid.fill_rect(24, 7, 2, 2, p.dark);
    grid.fill_rect(28, 7, 2, 2, p.dark);

    // Antennae
    for (x, y) in [(12, 2), (11, 1), (10, 0), (18, 2), (19, 1), (20, 0)] {
        grid.set(x, y, p.accent);
    }
    grid.set(12, 3, p.dark);
    grid.set(18, 3, p.dark);

    // Legs
    for i in 0..3 {
        let lx = 9 + i * 3;
        grid.set(lx, 26, p.dark);
        grid.set(lx, 27, p.dark);
        grid.set(lx + 1, 26, p.dark);
    }
}

/// Curled body, fanned tail, long antennae, and small front claws.
pub(super) fn draw_shrimp(grid: &mut PixelGrid, p: &PaletteColors) {
    // C-shaped body from overlapping ellipses
    grid.fill_ellipse(15, 10, 7.0, 6.0, p.body);
    grid.fill_ellipse(13, 16, 6.0, 5.0, p.body);
    grid.fill_ellipse(15, 12, 4.0, 3.0, p.light);

    // Tail fan
    grid.fill_rect(7, 20, 3, 2, p.accent);
    grid.fill_rect(10, 21, 3, 2, p.body);
    grid.fill_rect(5, 21, 3, 2, p.accent);
    grid.set(6, 22, p.dark);
    grid.set(12, 22, p.dark);

    // Segments
    for x in 9..=19 {
        grid.tint(x, 8, p.dark);
        grid.tint(x, 13, p.dark);
    }

    // Antennae
    for (x, y) in [(18, 4), (19, 3), (20, 2), (21, 1), (22, 0)] {
        grid.set(x, y, p.accent);
    }
    for (x, y) in [(20, 4), (22, 3), (24, 2), (25, 1)] {
        grid.set(x, y, p.accent);
    }

    // Front claws
    grid.fill_rect(20, 8, 3, 2, p.body);
    grid.fill_rect(23, 7, 2, 2, p.accent);
    grid.fill_rect(20, 11, 3, 2, p.body);
    grid.fill_rect(23, 11, 2, 2, p.accent);

    // Legs
    for i in 0..4 {
        grid.set(10 + i * 2, 18, p.dark);
        grid.set(10 + i * 2, 19, p.dark);
    }
}

/// Spiral shell with the crab peeking out at the bottom right.
pub(super) fn draw_hermit_crab(grid: &mut PixelGrid, p: &PaletteColors) {
    // Shell
    grid.fill_circle(14, 12, 9.0, p.accent);
    grid.fill_circle(14, 12, 6.0, p.body);
    grid.fill_circle(14, 11, 3.0, p.dark);

    // Carve and rebuild the spiral
    grid.clear_circle(14, 12, 7.0);
    grid.fill_circle(14, 12, 9.0, p.accent);
    grid.fill_circle(16, 11, 5.0, p.body);
    grid.fill_circle(18, 10, 3.0, p.light);
    grid.fill_circle(19, 9, 1.0, p.accent);

    // Body in the shell opening
    grid.fill_ellipse(20, 18, 5.0, 4.0, p.body);
    grid.fill_ellipse(20, 19, 3.0, 2.0, p.light);

    // Eye stalks
    for x in [23, 26] {
        grid.set(x, 13, p.dark);
        grid.set(x, 12, p.body);
        grid.set(x, 11, p.body);
        grid.set(x + 1, 10, WHITE);
        grid.set(x, 10, BLACK);
    }

    // Claws
    grid.fill_rect(24, 17, 3, 2, p.body);
    grid.fill_rect(27, 16, 2, 2, p.accent);
    grid.fill_rect(24, 21, 3, 2, p.body);
    grid.fill_rect(27, 21, 2, 2, p.accent);

    // Legs
    for i in 0..3 {
        grid.set(18 + i * 2, 23, p.dark);
        grid.set(18 + i * 2, 24, p.dark);
    }
}
