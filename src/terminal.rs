//! Terminal preview of avatars using 24-bit ANSI colors
//!
//! Grids are drawn with the upper half block (`▀`), so each line of text
//! shows two rows of cells and a 32x32 avatar fits in 16 lines.

use image::Rgba;

use crate::color::parse_color_lenient;
use crate::grid::PixelGrid;
use crate::models::TraitRecord;

/// ANSI escape sequence to reset all formatting
pub const ANSI_RESET: &str = "\x1b[0m";

/// Background used for transparent cells
const TRANSPARENT_BG: &str = "\x1b[48;5;236m";
const TRANSPARENT_FG: &str = "\x1b[38;5;236m";

/// Convert RGBA color to ANSI 24-bit background escape sequence.
///
/// Transparent colors (alpha = 0) are rendered as a dark gray background
/// to visually distinguish them from opaque colors.
///
/// ```
/// use crustal::terminal::color_to_ansi_bg;
/// use image::Rgba;
///
/// assert_eq!(color_to_ansi_bg(Rgba([255, 0, 0, 255])), "\x1b[48;2;255;0;0m");
/// assert_eq!(color_to_ansi_bg(Rgba([0, 0, 0, 0])), "\x1b[48;5;236m");
/// ```
pub fn color_to_ansi_bg(rgba: Rgba<u8>) -> String {
    if rgba[3] == 0 {
        TRANSPARENT_BG.to_string()
    } else {
        format!("\x1b[48;2;{};{};{}m", rgba[0], rgba[1], rgba[2])
    }
}

/// Convert RGBA color to ANSI 24-bit foreground escape sequence.
pub fn color_to_ansi_fg(rgba: Rgba<u8>) -> String {
    if rgba[3] == 0 {
        TRANSPARENT_FG.to_string()
    } else {
        format!("\x1b[38;2;{};{};{}m", rgba[0], rgba[1], rgba[2])
    }
}

/// Render a grid as ANSI half blocks, two cell rows per line.
pub fn render_grid_ansi(grid: &PixelGrid) -> String {
    let size = grid.size() as i32;
    let transparent = Rgba([0, 0, 0, 0]);
    let mut output = String::new();

    for y in (0..size).step_by(2) {
        for x in 0..size {
            let top = grid.get(x, y).unwrap_or(transparent);
            let bottom = grid.get(x, y + 1).unwrap_or(transparent);
            output.push_str(&color_to_ansi_fg(top));
            output.push_str(&color_to_ansi_bg(bottom));
            output.push('▀');
        }
        output.push_str(ANSI_RESET);
        output.push('\n');
    }

    output
}

/// Trait listing with a color swatch for each color-valued trait.
pub fn render_traits(traits: &TraitRecord) -> String {
    let swatch = |hex: &str| {
        format!("{}  {} {}", color_to_ansi_bg(parse_color_lenient(hex)), ANSI_RESET, hex)
    };

    let mut output = String::new();
    output.push_str(&format!("  species   {}\n", traits.species));
    output.push_str(&format!("  body      {}\n", swatch(&traits.palette.body)));
    output.push_str(&format!("  accent    {}\n", swatch(&traits.palette.accent)));
    output.push_str(&format!("  dark      {}\n", swatch(&traits.palette.dark)));
    output.push_str(&format!("  light     {}\n", swatch(&traits.palette.light)));
    output.push_str(&format!("  eyes      {}\n", traits.eye_style));
    output.push_str(&format!("  iris      {}\n", swatch(&traits.iris_color)));
    output.push_str(&format!("  pattern   {}\n", traits.pattern));
    output.push_str(&format!("  accessory {}\n", traits.accessory));
    output
}
