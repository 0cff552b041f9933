//! Command-line interface implementation
//!
//! This module provides the CLI entry point and dispatches to submodules
//! for specific command implementations.

mod batch;
mod catalog;
mod generate;
mod verify;

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::config::{load_config, merge_cli_overrides, CliOverrides, CrustalConfig, MAX_SCALE};
use crate::generator::Warning;

pub use catalog::CatalogAction;

/// Process exit codes
pub(crate) const EXIT_SUCCESS: u8 = 0;
pub(crate) const EXIT_ERROR: u8 = 1;
pub(crate) const EXIT_INVALID_ARGS: u8 = 2;

/// Crustal Wars - deterministic pixel-art avatar generator
#[derive(Parser)]
#[command(name = "crustal")]
#[command(about = "Crustal Wars - generate deterministic pixel-art sea creature avatars")]
#[command(version)]
pub struct Cli {
    /// Path to crustal.toml (default: search upward from the current directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate one avatar and save it as PNG
    Generate {
        /// Species to generate (random traits otherwise)
        #[arg(long, conflicts_with = "seed")]
        species: Option<String>,

        /// Hex seed (e.g. a transaction hash) that fixes every trait
        #[arg(long)]
        seed: Option<String>,

        /// Output file or directory.
        /// If omitted: {output.dir}/{species}[_{seed}].png
        /// If directory (ends with /): dir/{species}[_{seed}].png
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Pixels per grid cell (1-64, default from config or 8)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=MAX_SCALE as i64))]
        scale: Option<u32>,

        /// Print the trait record as JSON on stdout
        #[arg(long)]
        traits: bool,

        /// Do not write the trait record JSON next to the PNG
        #[arg(long)]
        no_traits_file: bool,

        /// Also preview the avatar in the terminal
        #[arg(long)]
        show: bool,

        /// Strict mode: treat warnings as errors
        #[arg(long)]
        strict: bool,
    },

    /// Generate one avatar per seed, in parallel
    Batch {
        /// File with one seed per line ('-' or omitted reads stdin)
        seeds: Option<PathBuf>,

        /// Output directory
        #[arg(short, long)]
        output: PathBuf,

        /// Pixels per grid cell (1-64, default from config or 8)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=MAX_SCALE as i64))]
        scale: Option<u32>,

        /// Number of worker threads (default: all cores)
        #[arg(long)]
        jobs: Option<usize>,

        /// Do not write trait record JSON files
        #[arg(long)]
        no_traits_file: bool,
    },

    /// Check that a saved trait record matches its seed
    Verify {
        /// Hex seed the record claims to come from
        #[arg(long)]
        seed: String,

        /// Trait record JSON file ('-' reads stdin)
        traits: PathBuf,
    },

    /// Preview an avatar in the terminal
    Show {
        /// Species to preview (random traits otherwise)
        #[arg(long, conflicts_with = "seed")]
        species: Option<String>,

        /// Hex seed that fixes every trait
        #[arg(long)]
        seed: Option<String>,
    },

    /// List catalog entries
    Catalog {
        #[command(subcommand)]
        action: Option<CatalogAction>,
    },
}

/// Run the CLI application
pub fn run() -> ExitCode {
    let cli = Cli::parse();
    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Generate {
            species,
            seed,
            output,
            scale,
            traits,
            no_traits_file,
            show,
            strict,
        } => {
            let overrides = CliOverrides {
                scale,
                traits: no_traits_file.then_some(false),
                strict: strict.then_some(true),
                ..Default::default()
            };
            let config = match resolve_config(config_path, &overrides) {
                Ok(config) => config,
                Err(code) => return code,
            };
            generate::run_generate(
                &config,
                species.as_deref(),
                seed.as_deref(),
                output.as_deref(),
                traits,
                show,
            )
        }
        Commands::Batch { seeds, output, scale, jobs, no_traits_file } => {
            let overrides = CliOverrides {
                out: Some(output),
                scale,
                traits: no_traits_file.then_some(false),
                ..Default::default()
            };
            let config = match resolve_config(config_path, &overrides) {
                Ok(config) => config,
                Err(code) => return code,
            };
            batch::run_batch(&config, seeds.as_deref(), jobs)
        }
        Commands::Verify { seed, traits } => verify::run_verify(&seed, &traits),
        Commands::Show { species, seed } => {
            let config = match resolve_config(config_path, &CliOverrides::default()) {
                Ok(config) => config,
                Err(code) => return code,
            };
            generate::run_show(&config, species.as_deref(), seed.as_deref())
        }
        Commands::Catalog { action } => catalog::run_catalog(action),
    }
}

/// Load crustal.toml (explicit path or discovered) and apply CLI overrides.
fn resolve_config(path: Option<&Path>, overrides: &CliOverrides) -> Result<CrustalConfig, ExitCode> {
    match load_config(path) {
        Ok(mut config) => {
            merge_cli_overrides(&mut config, overrides);
            Ok(config)
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            Err(ExitCode::from(EXIT_ERROR))
        }
    }
}

/// Print warnings to stderr. Returns true when strict mode turns them into
/// a failure.
pub(crate) fn report_warnings(warnings: &[Warning], strict: bool) -> bool {
    let label = if strict { "Error" } else { "Warning" };
    for warning in warnings {
        eprintln!("{}: {}", label, warning.message);
    }
    strict && !warnings.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_generate_with_seed() {
        let cli = Cli::try_parse_from([
            "crustal", "generate", "--seed", "0xabc123def456", "--scale", "4", "-o", "me.png",
        ])
        .unwrap();
        match cli.command {
            Commands::Generate { seed, scale, output, species, .. } => {
                assert_eq!(seed.as_deref(), Some("0xabc123def456"));
                assert_eq!(scale, Some(4));
                assert_eq!(output, Some(PathBuf::from("me.png")));
                assert!(species.is_none());
            }
            _ => panic!("expected generate"),
        }
    }

    #[test]
    fn test_parse_species_and_seed_conflict() {
        let result =
            Cli::try_parse_from(["crustal", "generate", "--species", "squid", "--seed", "0x01"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_scale_out_of_range() {
        assert!(Cli::try_parse_from(["crustal", "generate", "--scale", "0"]).is_err());
        assert!(Cli::try_parse_from(["crustal", "generate", "--scale", "65"]).is_err());
    }

    #[test]
    fn test_parse_catalog_palettes() {
        let cli = Cli::try_parse_from(["crustal", "catalog", "palettes", "squid"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Catalog { action: Some(CatalogAction::Palettes { .. }) }
        ));
    }

    #[test]
    fn test_report_warnings_strict() {
        let warnings = vec![Warning::new("Unknown species 'crab'")];
        assert!(!report_warnings(&warnings, false));
        assert!(report_warnings(&warnings, true));
        assert!(!report_warnings(&[], true));
    }
}
