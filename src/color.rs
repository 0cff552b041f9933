//! Hex color parsing and formatting
//!
//! Catalog colors, palettes, and iris colors are all stored as CSS hex
//! strings (`#RGB` or `#RRGGBB`). The renderer works on `image::Rgba<u8>`.

use image::Rgba;
use thiserror::Error;

/// Magenta color used for colors that fail to parse
pub const MAGENTA: Rgba<u8> = Rgba([255, 0, 255, 255]);

/// Opaque white, the `W` eye code
pub const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Opaque black, the `B` eye code
pub const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Error type for color parsing failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// Input string was empty
    #[error("empty color string")]
    Empty,
    /// Input string doesn't start with '#'
    #[error("color must start with '#'")]
    MissingHash,
    /// Invalid length (must be 3, 4, 6, or 8 hex chars after #)
    #[error("invalid color length {0}, expected 3, 4, 6, or 8")]
    InvalidLength(usize),
    /// Contains non-hex characters
    #[error("invalid hex character '{0}'")]
    InvalidHex(char),
}

/// Parse a hex color string into an RGBA color.
///
/// - `#RGB` - 3-digit hex, each digit is doubled (e.g., `#333` -> `#333333`)
/// - `#RGBA` - 4-digit hex, each digit is doubled
/// - `#RRGGBB` - 6-digit hex, alpha defaults to 255 (opaque)
/// - `#RRGGBBAA` - 8-digit hex, explicit alpha channel
///
/// # Examples
///
/// ```
/// use crustal::color::parse_color;
///
/// let red = parse_color("#F00").unwrap();
/// assert_eq!(red, image::Rgba([255, 0, 0, 255]));
///
/// let gold = parse_color("#ffd700").unwrap();
/// assert_eq!(gold, image::Rgba([255, 215, 0, 255]));
/// ```
///
/// # Errors
///
/// Returns `ColorError` if the input is empty, lacks the `#`, has the wrong
/// length, or contains a non-hex character.
pub fn parse_color(s: &str) -> Result<Rgba<u8>, ColorError> {
    if s.is_empty() {
        return Err(ColorError::Empty);
    }
    let hex = s.strip_prefix('#').ok_or(ColorError::MissingHash)?;

    let digits = hex
        .chars()
        .map(|c| c.to_digit(16).map(|d| d as u8).ok_or(ColorError::InvalidHex(c)))
        .collect::<Result<Vec<u8>, _>>()?;

    match digits.as_slice() {
        [r, g, b] => Ok(Rgba([r * 17, g * 17, b * 17, 255])),
        [r, g, b, a] => Ok(Rgba([r * 17, g * 17, b * 17, a * 17])),
        [r1, r2, g1, g2, b1, b2] => Ok(Rgba([r1 * 16 + r2, g1 * 16 + g2, b1 * 16 + b2, 255])),
        [r1, r2, g1, g2, b1, b2, a1, a2] => {
            Ok(Rgba([r1 * 16 + r2, g1 * 16 + g2, b1 * 16 + b2, a1 * 16 + a2]))
        }
        _ => Err(ColorError::InvalidLength(digits.len())),
    }
}

/// Parse a color, falling back to magenta when it is invalid.
pub fn parse_color_lenient(s: &str) -> Rgba<u8> {
    parse_color(s).unwrap_or(MAGENTA)
}
