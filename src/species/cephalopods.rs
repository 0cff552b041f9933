//! Squid, octopus, and nautilus.

use std::f64::consts::PI;

use crate::color::{BLACK, WHITE};
use crate::grid::PixelGrid;
use crate::models::PaletteColors;

/// Round half toward positive infinity.
fn round_half_up(v: f64) -> i32 {
    (v + 0.5).floor() as i32
}

/// Six chamber marks on the shell ring of radius `r`, a sixth of a turn
/// apart. The angle is accumulated step by step.
fn chamber_marks(r: f64) -> Vec<(i32, i32)> {
    let mut angle = 0.0_f64;
    let mut marks = Vec::with_capacity(6);
    for _ in 0..6 {
        let x = round_half_up(15.0 + r * angle.cos());
        let y = round_half_up(14.0 + r * angle.sin());
        marks.push((x, y));
        angle += PI / 3.0;
    }
    marks
}

/// Torpedo mantle with side fins and eight trailing tentacles.
pub(super) fn draw_squid(grid: &mut PixelGrid, p: &PaletteColors) {
    grid.fill_ellipse(15, 12, 8.0, 10.0, p.body);

    // Pointed mantle tip
    grid.fill_rect(13, 1, 5, 4, p.body);
    grid.fill_rect(14, 0, 3, 2, p.accent);

    // Fins
    for (x, y) in [(5, 8), (4, 9), (4, 10), (5, 11), (25, 8), (26, 9), (26, 10), (25, 11)] {
        grid.set(x, y, p.accent);
    }
    for (x, y) in [(5, 9), (5, 10), (25, 9), (25, 10)] {
        grid.set(x, y, p.body);
    }

    grid.fill_ellipse(15, 14, 4.0, 5.0, p.light);

    // Tentacles, alternating a one-cell wave
    for i in 0..8 {
        let tx = 9 + i * 2;
        let wave = i % 2;
        grid.set(tx, 23, p.body);
        grid.set(tx + wave, 24, p.body);
        grid.set(tx, 25, p.accent);
        grid.set(tx + wave, 26, p.accent);
        grid.set(tx, 27, p.body);
        if i % 3 == 0 {
            grid.set(tx + wave, 28, p.accent);
            grid.set(tx, 29, p.body);
        }
    }
}

/// Bulbous head with eight tentacles curling outward.
pub(super) fn draw_octopus(grid: &mut PixelGrid, p: &PaletteColors) {
    grid.fill_circle(15, 10, 10.0, p.body);
    grid.fill_circle(15, 11, 6.0, p.light);

    // Bulges on top of the head
    grid.fill_circle(10, 5, 3.0, p.accent);
    grid.fill_circle(20, 5, 3.0, p.accent);

    for (i, tx) in [5, 8, 11, 14, 17, 20, 23, 26].into_iter().enumerate() {
        let curl = if i % 2 == 0 { 1 } else { -1 };
        grid.set(tx, 20, p.body);
        grid.set(tx, 21, p.body);
        grid.set(tx + curl, 22, p.body);
        grid.set(tx + curl, 23, p.accent);
        grid.set(tx + curl * 2, 24, p.accent);

        // Suction cups
        if i % 2 == 0 {
            grid.set(tx, 22, p.light);
            grid.set(tx + curl * 2, 23, p.light);
        }
    }
}

/// Coiled chambered shell seen from the side, tentacles at the opening.
pub(super) fn draw_nautilus(grid: &mut PixelGrid, p: &PaletteColors) {
    // Shell from shrinking, drifting circles
    grid.fill_circle(15, 14, 11.0, p.accent);
    grid.fill_circle(15, 14, 9.0, p.body);
    grid.fill_circle(14, 13, 7.0, p.accent);
    grid.fill_circle(14, 13, 5.0, p.body);
    grid.fill_circle(13, 12, 3.0, p.accent);
    grid.fill_circle(13, 12, 1.0, p.dark);

    for r in [3.0, 6.0, 9.0] {
        for (x, y) in chamber_marks(r) {
            grid.tint(x, y, p.dark);
        }
    }

    // Shell opening
    grid.fill_ellipse(24, 16, 4.0, 6.0, p.light);
    grid.fill_ellipse(24, 16, 2.0, 4.0, p.body);

    // Tentacles
    for i in 0..5 {
        let ty = 12 + i * 2;
        grid.set(27, ty, p.body);
        grid.set(28, ty, p.accent);
        grid.set(29, ty, p.body);
        if i % 2 == 0 {
            grid.set(30, ty, p.accent);
        }
    }

    grid.set(26, 14, WHITE);
    grid.set(27, 14, BLACK);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chamber_marks_one_per_sixth_turn() {
        assert_eq!(
            chamber_marks(3.0),
            vec![(18, 14), (17, 17), (14, 17), (12, 14), (13, 11), (16, 11)]
        );
        assert_eq!(
            chamber_marks(9.0),
            vec![(24, 14), (20, 22), (11, 22), (6, 14), (10, 6), (19, 6)]
        );
        for r in [3.0, 6.0, 9.0] {
            assert_eq!(chamber_marks(r).len(), 6);
        }
    }
}
