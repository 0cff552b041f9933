//! Configuration schema types for `crustal.toml`
//!
//! Every section and field is optional; a missing file behaves like an empty
//! one.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::generator::DEFAULT_PIXEL_SCALE;
use crate::output::MAX_PIXEL_SCALE;

/// Largest accepted pixel scale
pub const MAX_SCALE: u32 = MAX_PIXEL_SCALE;

/// Image rendering settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Pixels per grid cell in exported images
    #[serde(default = "default_scale")]
    pub scale: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self { scale: default_scale() }
    }
}

fn default_scale() -> u32 {
    DEFAULT_PIXEL_SCALE
}

/// Output file settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory used when no `-o` is given
    #[serde(default = "default_dir")]
    pub dir: PathBuf,
    /// Write the trait record as JSON next to each PNG
    #[serde(default = "default_true")]
    pub traits: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { dir: default_dir(), traits: true }
    }
}

fn default_dir() -> PathBuf {
    PathBuf::from("avatars")
}

fn default_true() -> bool {
    true
}

/// Generation behavior
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateConfig {
    /// Treat warnings (unknown species, unknown trait names) as errors
    #[serde(default)]
    pub strict: bool,
}

/// Root configuration structure for `crustal.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrustalConfig {
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub generate: GenerateConfig,
}

/// Configuration validation error
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigValidationError {
    /// Path to the invalid field (e.g., "render.scale")
    pub field: String,
    /// Error message
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "crustal.toml: '{}' {}", self.field, self.message)
    }
}

impl CrustalConfig {
    /// Validate the configuration and return any errors
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut errors = Vec::new();

        if self.render.scale == 0 || self.render.scale > MAX_SCALE {
            errors.push(ConfigValidationError {
                field: "render.scale".to_string(),
                message: format!("must be between 1 and {}", MAX_SCALE),
            });
        }

        if self.output.dir.as_os_str().is_empty() {
            errors.push(ConfigValidationError {
                field: "output.dir".to_string(),
                message: "must be a non-empty path".to_string(),
            });
        }

        errors
    }

    /// Check if validation passed
    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_parse() {
        let config: CrustalConfig = toml::from_str("").unwrap();
        assert_eq!(config, CrustalConfig::default());
        assert_eq!(config.render.scale, 8);
        assert_eq!(config.output.dir, PathBuf::from("avatars"));
        assert!(config.output.traits);
        assert!(!config.generate.strict);
    }

    #[test]
    fn test_full_config_parse() {
        let toml = r#"
[render]
scale = 4

[output]
dir = "out/avatars"
traits = false

[generate]
strict = true
"#;
        let config: CrustalConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.render.scale, 4);
        assert_eq!(config.output.dir, PathBuf::from("out/avatars"));
        assert!(!config.output.traits);
        assert!(config.generate.strict);
        assert!(config.is_valid());
    }

    #[test]
    fn test_partial_section_keeps_defaults() {
        let config: CrustalConfig = toml::from_str("[output]\ntraits = false\n").unwrap();
        assert_eq!(config.output.dir, PathBuf::from("avatars"));
        assert_eq!(config.render.scale, 8);
    }

    #[test]
    fn test_validate_scale_range() {
        let mut config = CrustalConfig::default();
        config.render.scale = 0;
        let errors = config.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "render.scale");

        config.render.scale = MAX_SCALE + 1;
        assert!(!config.is_valid());

        config.render.scale = MAX_SCALE;
        assert!(config.is_valid());
    }

    #[test]
    fn test_validate_empty_dir() {
        let mut config = CrustalConfig::default();
        config.output.dir = PathBuf::new();
        let errors = config.validate();
        assert_eq!(errors[0].to_string(), "crustal.toml: 'output.dir' must be a non-empty path");
    }

    #[test]
    fn test_unknown_field_type_is_error() {
        assert!(toml::from_str::<CrustalConfig>("[render]\nscale = \"big\"\n").is_err());
    }
}
