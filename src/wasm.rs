//! WASM API module for browser/JS interop
//!
//! Exposes seeded and random avatar generation to the browser game. Images
//! come back as PNG bytes, a data URL ready for an `<img>` or texture
//! loader, and raw RGBA pixels; traits come back as JSON.

use wasm_bindgen::prelude::*;

use crate::generator::{check_seed, Avatar, AvatarGenerator, DEFAULT_PIXEL_SCALE};
use crate::models::TraitRecord;

/// Initialize panic hook for better error messages in WASM
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    #[cfg(feature = "wasm")]
    console_error_panic_hook::set_once();
}

/// A generated avatar, or nothing plus warnings.
#[wasm_bindgen]
pub struct AvatarResult {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
    png: Vec<u8>,
    data_url: String,
    traits_json: String,
    warnings: Vec<String>,
}

#[wasm_bindgen]
impl AvatarResult {
    /// Width of the image in pixels (0 when nothing was generated)
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height of the image in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA pixel data (4 bytes per pixel)
    #[wasm_bindgen(getter)]
    pub fn pixels(&self) -> Vec<u8> {
        self.pixels.clone()
    }

    /// PNG-encoded image
    #[wasm_bindgen(getter)]
    pub fn png(&self) -> Vec<u8> {
        self.png.clone()
    }

    /// `data:image/png;base64,...` URL of the image
    #[wasm_bindgen(getter, js_name = dataUrl)]
    pub fn data_url(&self) -> String {
        self.data_url.clone()
    }

    /// Trait record as JSON (empty when nothing was generated)
    #[wasm_bindgen(getter, js_name = traitsJson)]
    pub fn traits_json(&self) -> String {
        self.traits_json.clone()
    }

    /// Any warnings generated along the way
    #[wasm_bindgen(getter)]
    pub fn warnings(&self) -> Vec<String> {
        self.warnings.clone()
    }
}

impl AvatarResult {
    fn empty(warnings: Vec<String>) -> Self {
        Self {
            width: 0,
            height: 0,
            pixels: Vec::new(),
            png: Vec::new(),
            data_url: String::new(),
            traits_json: String::new(),
            warnings,
        }
    }

    fn from_avatar(avatar: Avatar, mut warnings: Vec<String>) -> Self {
        let png = avatar.to_png_bytes().unwrap_or_else(|e| {
            warnings.push(format!("PNG encoding failed: {}", e));
            Vec::new()
        });
        let data_url = avatar.to_data_url().unwrap_or_default();
        let traits_json = serde_json::to_string(&avatar.traits).unwrap_or_default();

        Self {
            width: avatar.image.width(),
            height: avatar.image.height(),
            pixels: avatar.image.into_raw(),
            png,
            data_url,
            traits_json,
            warnings,
        }
    }
}

fn generator(scale: u32) -> AvatarGenerator<'static> {
    let scale = if scale == 0 { DEFAULT_PIXEL_SCALE } else { scale };
    AvatarGenerator::new().with_pixel_scale(scale)
}

/// Generate the avatar for a hex seed. A `scale` of 0 uses the default (8);
/// larger scales are capped at 64.
#[wasm_bindgen(js_name = generateFromSeed)]
pub fn generate_from_seed(seed: &str, scale: u32) -> AvatarResult {
    let warnings = check_seed(seed).into_iter().map(|w| w.message).collect();
    AvatarResult::from_avatar(generator(scale).generate_from_seed(seed), warnings)
}

/// Generate a random avatar, optionally of a named species.
///
/// An unknown species yields an empty result with a warning.
#[wasm_bindgen(js_name = generateRandom)]
pub fn generate_random(species: Option<String>, scale: u32) -> AvatarResult {
    let generator = generator(scale);
    match species {
        None => AvatarResult::from_avatar(generator.generate_random(), Vec::new()),
        Some(name) => {
            let (avatar, warnings) = generator.generate(&name);
            let warnings = warnings.into_iter().map(|w| w.message).collect();
            match avatar {
                Some(avatar) => AvatarResult::from_avatar(avatar, warnings),
                None => AvatarResult::empty(warnings),
            }
        }
    }
}

/// Re-render an avatar from trait record JSON.
#[wasm_bindgen(js_name = renderTraits)]
pub fn render_traits(traits_json: &str, scale: u32) -> AvatarResult {
    let record: TraitRecord = match serde_json::from_str(traits_json) {
        Ok(record) => record,
        Err(e) => return AvatarResult::empty(vec![format!("Invalid trait record: {}", e)]),
    };
    let (avatar, warnings) = generator(scale).render_traits(&record);
    let warnings = warnings.into_iter().map(|w| w.message).collect();
    match avatar {
        Some(avatar) => AvatarResult::from_avatar(avatar, warnings),
        None => AvatarResult::empty(warnings),
    }
}

/// True when the trait record JSON is exactly what `seed` generates.
#[wasm_bindgen(js_name = verifyTraits)]
pub fn verify_traits(seed: &str, traits_json: &str) -> bool {
    serde_json::from_str::<TraitRecord>(traits_json)
        .map(|record| generator(1).verify(seed, &record).is_ok())
        .unwrap_or(false)
}

/// Species names in selection order.
#[wasm_bindgen(js_name = listSpecies)]
pub fn list_species() -> Vec<String> {
    crate::models::Species::names().into_iter().map(String::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_from_seed() {
        let result = generate_from_seed("0x7f3a9c21be04", 0);
        assert_eq!(result.width(), 256);
        assert_eq!(result.height(), 256);
        assert_eq!(result.pixels().len(), 256 * 256 * 4);
        assert_eq!(&result.png()[0..4], &[0x89, 0x50, 0x4E, 0x47]);
        assert!(result.data_url().starts_with("data:image/png;base64,"));
        assert!(result.warnings().is_empty());

        let record: TraitRecord = serde_json::from_str(&result.traits_json()).unwrap();
        assert!(verify_traits("0x7f3a9c21be04", &result.traits_json()));
        assert_eq!(render_traits(&result.traits_json(), 0).pixels(), result.pixels());
        assert_eq!(record, AvatarGenerator::new().generate_from_seed("0x7f3a9c21be04").traits);
    }

    #[test]
    fn test_generate_from_seed_scale() {
        let result = generate_from_seed("0x7f3a9c21be04", 1);
        assert_eq!((result.width(), result.height()), (32, 32));
    }

    #[test]
    fn test_generate_from_seed_huge_scale_is_clamped() {
        let result = generate_from_seed("0x7f3a9c21be04", u32::MAX);
        assert_eq!(result.width(), 32 * crate::output::MAX_PIXEL_SCALE);
    }

    #[test]
    fn test_generate_random_unknown_species() {
        let result = generate_random(Some("kraken".to_string()), 0);
        assert_eq!(result.width(), 0);
        assert!(result.png().is_empty());
        assert!(result.warnings()[0].contains("Unknown species 'kraken'"));
    }

    #[test]
    fn test_generate_random_species() {
        let result = generate_random(Some("pufferfish".to_string()), 2);
        assert_eq!(result.width(), 64);
        assert!(result.traits_json().contains("\"species\":\"pufferfish\""));
    }

    #[test]
    fn test_render_traits_invalid_json() {
        let result = render_traits("{not json", 0);
        assert_eq!(result.width(), 0);
        assert!(result.warnings()[0].starts_with("Invalid trait record"));
    }

    #[test]
    fn test_verify_traits_rejects_mismatch() {
        let result = generate_from_seed("0x000000000000", 1);
        assert!(!verify_traits("0x010000000000", &result.traits_json()));
        assert!(!verify_traits("0x000000000000", "[]"));
    }

    #[test]
    fn test_list_species() {
        assert_eq!(list_species().len(), 7);
        assert_eq!(list_species()[4], "hermitCrab");
    }
}
