//! Catalog command implementation

use clap::Subcommand;
use std::process::ExitCode;

use crate::catalog::Catalog;
use crate::models::Species;
use crate::suggest::{format_suggestion, suggest};

use super::{EXIT_ERROR, EXIT_SUCCESS};

#[derive(Subcommand)]
pub enum CatalogAction {
    /// List species in selection order
    Species,
    /// List eye styles
    Eyes,
    /// List body patterns
    Patterns,
    /// List accessories
    Accessories,
    /// List iris colors
    Iris,
    /// Show the palettes of one species
    Palettes {
        /// Species name (e.g. hermitCrab)
        species: String,
    },
}

/// Execute the catalog command
pub fn run_catalog(action: Option<CatalogAction>) -> ExitCode {
    let catalog = Catalog::global();

    match action {
        None => {
            println!("Species:     {}", Species::names().join(", "));
            println!("Eyes:        {}", catalog.eye_style_names().join(", "));
            println!("Patterns:    {}", catalog.pattern_names().join(", "));
            println!("Accessories: {}", catalog.accessory_names().join(", "));
            println!("Iris colors: {}", catalog.iris_colors().join(", "));
            println!();
            println!("{} possible avatars", catalog.combinations());
        }
        Some(CatalogAction::Species) => print_list(&Species::names()),
        Some(CatalogAction::Eyes) => print_list(&catalog.eye_style_names()),
        Some(CatalogAction::Patterns) => print_list(&catalog.pattern_names()),
        Some(CatalogAction::Accessories) => print_list(&catalog.accessory_names()),
        Some(CatalogAction::Iris) => {
            let colors: Vec<&str> = catalog.iris_colors().iter().map(String::as_str).collect();
            print_list(&colors);
        }
        Some(CatalogAction::Palettes { species }) => {
            let species = match species.parse::<Species>() {
                Ok(species) => species,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    if let Some(hint) = format_suggestion(&suggest(&e.0, &Species::names(), 3)) {
                        eprintln!("{}", hint);
                    }
                    return ExitCode::from(EXIT_ERROR);
                }
            };
            println!("Palettes for {}:", species);
            for (i, palette) in catalog.palettes(species).iter().enumerate() {
                println!(
                    "  {}: body {}  accent {}  dark {}  light {}",
                    i, palette.body, palette.accent, palette.dark, palette.light
                );
            }
        }
    }

    ExitCode::from(EXIT_SUCCESS)
}

fn print_list(names: &[&str]) {
    for (i, name) in names.iter().enumerate() {
        println!("  {}: {}", i, name);
    }
}
