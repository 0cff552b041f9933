//! Configuration loading and discovery for `crustal.toml`

use super::schema::CrustalConfig;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the project configuration file
pub const CONFIG_FILE_NAME: &str = "crustal.toml";

/// Configuration loading error
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// File I/O error
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error
    #[error("Failed to parse crustal.toml: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error
    #[error("Config validation failed:\n{}", .0.iter().map(|e| format!("  - {}", e)).collect::<Vec<_>>().join("\n"))]
    Validation(Vec<String>),
}

/// CLI arguments that can override config values
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    /// Override output directory
    pub out: Option<PathBuf>,
    /// Override pixel scale
    pub scale: Option<u32>,
    /// Override trait JSON output
    pub traits: Option<bool>,
    /// Enable strict mode
    pub strict: Option<bool>,
}

/// Find crustal.toml by walking up from the current working directory.
///
/// Search order:
/// 1. Walk up from current directory looking for crustal.toml
/// 2. Check XDG_CONFIG_HOME/crustal/crustal.toml (or ~/.config/crustal/crustal.toml)
pub fn find_config() -> Option<PathBuf> {
    if let Ok(cwd) = env::current_dir() {
        if let Some(path) = find_config_from(cwd) {
            return Some(path);
        }
    }

    find_xdg_config()
}

/// Find crustal.toml in the XDG config directory.
pub fn find_xdg_config() -> Option<PathBuf> {
    let xdg_config = env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|_| env::var("HOME").map(|h| PathBuf::from(h).join(".config")))
        .ok()?;

    let config_path = xdg_config.join("crustal").join(CONFIG_FILE_NAME);
    if config_path.exists() {
        Some(config_path)
    } else {
        None
    }
}

/// Find crustal.toml by walking up from a specific directory.
pub fn find_config_from(start: PathBuf) -> Option<PathBuf> {
    let mut current = start;

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Load configuration from a crustal.toml file.
///
/// If a path is provided, loads from that file. Otherwise, uses `find_config()`
/// to locate the config file. If no config file is found, returns the
/// default configuration.
pub fn load_config(path: Option<&Path>) -> Result<CrustalConfig, ConfigError> {
    let config_path = match path {
        Some(p) => Some(p.to_path_buf()),
        None => find_config(),
    };

    match config_path {
        Some(p) => load_config_file(&p),
        None => Ok(CrustalConfig::default()),
    }
}

fn load_config_file(path: &Path) -> Result<CrustalConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    let config: CrustalConfig = toml::from_str(&contents)?;

    let errors = config.validate();
    if !errors.is_empty() {
        return Err(ConfigError::Validation(errors.into_iter().map(|e| e.to_string()).collect()));
    }

    Ok(config)
}

/// Merge CLI overrides into a configuration.
///
/// CLI arguments take precedence over config file values.
pub fn merge_cli_overrides(config: &mut CrustalConfig, overrides: &CliOverrides) {
    if let Some(ref out) = overrides.out {
        config.output.dir = out.clone();
    }

    if let Some(scale) = overrides.scale {
        config.render.scale = scale;
    }

    if let Some(traits) = overrides.traits {
        config.output.traits = traits;
    }

    if let Some(strict) = overrides.strict {
        config.generate.strict = strict;
    }
}
