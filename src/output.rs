//! PNG output and file path generation

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use image::codecs::png::PngEncoder;
use image::imageops::FilterType;
use image::{ImageEncoder, RgbaImage};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::grid::PixelGrid;
use crate::selector::strip_hex_prefix;

/// Largest integer scale factor applied to an image
pub const MAX_PIXEL_SCALE: u32 = 64;

/// Prefix of a PNG data URL
pub const DATA_URL_PREFIX: &str = "data:image/png;base64,";

/// Error type for output operations
#[derive(Debug, Error)]
pub enum OutputError {
    /// IO error during file operations
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// Image encoding error
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

/// Scale image by integer factor using nearest-neighbor interpolation.
///
/// This preserves crisp pixel edges for pixel art. A factor of 0 or 1
/// returns the image unchanged; factors above [`MAX_PIXEL_SCALE`] are
/// clamped to it. Dimensions that would overflow `u32` saturate.
pub fn scale_image(image: RgbaImage, factor: u32) -> RgbaImage {
    let factor = factor.min(MAX_PIXEL_SCALE);
    if factor <= 1 {
        return image;
    }
    let (w, h) = image.dimensions();
    image::imageops::resize(
        &image,
        w.saturating_mul(factor),
        h.saturating_mul(factor),
        FilterType::Nearest,
    )
}

/// Rasterize a grid with each cell expanded to a `scale x scale` block.
///
/// The result is `(grid size * scale)` pixels per side; transparent cells
/// stay fully transparent.
pub fn rasterize(grid: &PixelGrid, scale: u32) -> RgbaImage {
    scale_image(grid.to_image(), scale)
}

/// Encode an image as PNG bytes.
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>, OutputError> {
    let mut bytes = Vec::new();
    PngEncoder::new(&mut bytes).write_image(
        image.as_raw(),
        image.width(),
        image.height(),
        image::ColorType::Rgba8,
    )?;
    Ok(bytes)
}

/// Encode an image as a `data:image/png;base64,...` URL.
pub fn to_data_url(image: &RgbaImage) -> Result<String, OutputError> {
    let bytes = encode_png(image)?;
    Ok(format!("{}{}", DATA_URL_PREFIX, STANDARD.encode(bytes)))
}

/// Save an RGBA image to a PNG file, creating parent directories.
pub fn save_png(image: &RgbaImage, path: &Path) -> Result<(), OutputError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }

    std::fs::write(path, encode_png(image)?)?;
    Ok(())
}

/// File stem for an avatar: the seed without its `0x` prefix, or the species.
pub fn avatar_stem(seed: Option<&str>, species: &str) -> String {
    match seed {
        Some(seed) => {
            let safe: String = strip_hex_prefix(seed)
                .chars()
                .filter(|c| c.is_ascii_alphanumeric())
                .take(64)
                .collect();
            if safe.is_empty() {
                species.to_string()
            } else {
                format!("{}_{}", species, safe)
            }
        }
        None => species.to_string(),
    }
}

/// Generate the output path for an avatar PNG.
///
/// | `-o` argument     | Output                 |
/// |-------------------|------------------------|
/// | none              | `{default_dir}/{stem}.png` |
/// | `avatar.png`      | `avatar.png`           |
/// | `dir/` or a dir   | `dir/{stem}.png`       |
pub fn generate_output_path(stem: &str, output_arg: Option<&Path>, default_dir: &Path) -> PathBuf {
    match output_arg {
        Some(output) => {
            let is_dir = output.as_os_str().to_string_lossy().ends_with('/') || output.is_dir();
            if is_dir {
                output.join(format!("{}.png", stem))
            } else {
                output.to_path_buf()
            }
        }
        None => default_dir.join(format!("{}.png", stem)),
    }
}

/// Path of the trait record written next to a PNG (`x.png` -> `x.json`).
pub fn traits_path(png_path: &Path) -> PathBuf {
    png_path.with_extension("json")
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);

    #[test]
    fn test_scale_image_factor_one() {
        let image = RgbaImage::from_pixel(2, 2, RED);
        let scaled = scale_image(image.clone(), 1);
        assert_eq!(scaled, image);
    }

    #[test]
    fn test_rasterize_clamps_scale() {
        let image = rasterize(&PixelGrid::new(32), u32::MAX / 16);
        assert_eq!(image.dimensions(), (32 * MAX_PIXEL_SCALE, 32 * MAX_PIXEL_SCALE));
    }

    #[test]
    fn test_rasterize_blocks() {
        let mut grid = PixelGrid::new(4);
        grid.set(1, 2, RED);
        let image = rasterize(&grid, 8);
        assert_eq!(image.dimensions(), (32, 32));
        for y in 16..24 {
            for x in 8..16 {
                assert_eq!(*image.get_pixel(x, y), RED);
            }
        }
        assert_eq!(image.get_pixel(7, 16)[3], 0);
        assert_eq!(image.get_pixel(16, 16)[3], 0);
        assert_eq!(image.get_pixel(8, 24)[3], 0);
    }

    #[test]
    fn test_encode_png_signature() {
        let image = RgbaImage::from_pixel(3, 3, RED);
        let bytes = encode_png(&image).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");

        let decoded = image::load_from_memory(&bytes).unwrap().to_rgba8();
        assert_eq!(decoded, image);
    }

    #[test]
    fn test_data_url() {
        let image = RgbaImage::from_pixel(1, 1, RED);
        let url = to_data_url(&image).unwrap();
        assert!(url.starts_with(DATA_URL_PREFIX));
        let bytes = STANDARD.decode(&url[DATA_URL_PREFIX.len()..]).unwrap();
        assert_eq!(bytes, encode_png(&image).unwrap());
    }

    #[test]
    fn test_save_png_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/deeper/a.png");
        save_png(&RgbaImage::from_pixel(2, 2, RED), &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_avatar_stem() {
        assert_eq!(avatar_stem(Some("0xABcd12"), "squid"), "squid_ABcd12");
        assert_eq!(avatar_stem(Some("../x"), "squid"), "squid_x");
        assert_eq!(avatar_stem(Some("0x"), "lobster"), "lobster");
        assert_eq!(avatar_stem(Some("0Xab"), "squid"), "squid_0Xab");
        assert_eq!(avatar_stem(None, "nautilus"), "nautilus");
    }

    #[test]
    fn test_generate_output_path() {
        let default_dir = Path::new("avatars");
        assert_eq!(
            generate_output_path("squid", None, default_dir),
            PathBuf::from("avatars/squid.png")
        );
        assert_eq!(
            generate_output_path("squid", Some(Path::new("me.png")), default_dir),
            PathBuf::from("me.png")
        );
        assert_eq!(
            generate_output_path("squid", Some(Path::new("out/")), default_dir),
            PathBuf::from("out/squid.png")
        );
    }

    #[test]
    fn test_traits_path() {
        assert_eq!(traits_path(Path::new("out/a.png")), PathBuf::from("out/a.json"));
    }
}
