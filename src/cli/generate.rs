//! Generate and show command implementations

use std::path::Path;
use std::process::ExitCode;

use crate::batch::save_avatar;
use crate::config::CrustalConfig;
use crate::generator::{check_seed, Avatar, AvatarGenerator, Warning};
use crate::output::{avatar_stem, generate_output_path};
use crate::terminal::{render_grid_ansi, render_traits};

use super::{report_warnings, EXIT_ERROR, EXIT_SUCCESS};

/// Produce one avatar from a species name, a seed, or neither (random).
fn produce(
    generator: &AvatarGenerator<'_>,
    species: Option<&str>,
    seed: Option<&str>,
) -> (Option<Avatar>, Vec<Warning>) {
    match (species, seed) {
        (Some(name), _) => generator.generate(name),
        (None, Some(seed)) => (Some(generator.generate_from_seed(seed)), check_seed(seed)),
        (None, None) => (Some(generator.generate_random()), Vec::new()),
    }
}

/// Execute the generate command
pub fn run_generate(
    config: &CrustalConfig,
    species: Option<&str>,
    seed: Option<&str>,
    output: Option<&Path>,
    print_traits: bool,
    show: bool,
) -> ExitCode {
    let generator = AvatarGenerator::new().with_pixel_scale(config.render.scale);
    let strict = config.generate.strict;

    let (avatar, warnings) = produce(&generator, species, seed);
    if report_warnings(&warnings, strict) {
        return ExitCode::from(EXIT_ERROR);
    }
    let Some(avatar) = avatar else {
        eprintln!("Error: No avatar generated");
        return ExitCode::from(EXIT_ERROR);
    };

    let stem = avatar_stem(seed, avatar.traits.species.name());
    let output_path = generate_output_path(&stem, output, &config.output.dir);
    if let Err(e) = save_avatar(&avatar, &output_path, config.output.traits) {
        eprintln!("Error: Failed to save '{}': {}", output_path.display(), e);
        return ExitCode::from(EXIT_ERROR);
    }
    println!("Saved: {}", output_path.display());

    if print_traits {
        match serde_json::to_string_pretty(&avatar.traits) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error: Failed to serialize traits: {}", e);
                return ExitCode::from(EXIT_ERROR);
            }
        }
    }

    if show {
        print!("{}", render_grid_ansi(&avatar.grid));
        print!("{}", render_traits(&avatar.traits));
    }

    ExitCode::from(EXIT_SUCCESS)
}

/// Execute the show command - display an avatar with colored terminal output
pub fn run_show(config: &CrustalConfig, species: Option<&str>, seed: Option<&str>) -> ExitCode {
    let generator = AvatarGenerator::new();

    let (avatar, warnings) = produce(&generator, species, seed);
    if report_warnings(&warnings, config.generate.strict) {
        return ExitCode::from(EXIT_ERROR);
    }
    let Some(avatar) = avatar else {
        eprintln!("Error: No avatar generated");
        return ExitCode::from(EXIT_ERROR);
    };

    print!("{}", render_grid_ansi(&avatar.grid));
    print!("{}", render_traits(&avatar.traits));
    ExitCode::from(EXIT_SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Species;

    #[test]
    fn test_produce_species() {
        let generator = AvatarGenerator::new();
        let (avatar, warnings) = produce(&generator, Some("squid"), None);
        assert!(warnings.is_empty());
        assert_eq!(avatar.unwrap().traits.species, Species::Squid);
    }

    #[test]
    fn test_produce_unknown_species() {
        let generator = AvatarGenerator::new();
        let (avatar, warnings) = produce(&generator, Some("crab"), None);
        assert!(avatar.is_none());
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn test_produce_seed_warns_on_short_seed() {
        let generator = AvatarGenerator::new();
        let (avatar, warnings) = produce(&generator, None, Some("0x12"));
        assert_eq!(avatar.unwrap().traits.species, Species::Lobster);
        assert_eq!(warnings.len(), 1);
    }
}
