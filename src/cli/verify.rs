//! Verify command implementation

use std::fs;
use std::io::{self, Read};
use std::path::Path;
use std::process::ExitCode;

use crate::generator::AvatarGenerator;
use crate::models::TraitRecord;

use super::{EXIT_ERROR, EXIT_INVALID_ARGS, EXIT_SUCCESS};

/// Execute the verify command
pub fn run_verify(seed: &str, traits_path: &Path) -> ExitCode {
    let contents = if traits_path == Path::new("-") {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf).map(|_| buf)
    } else {
        fs::read_to_string(traits_path)
    };
    let contents = match contents {
        Ok(contents) => contents,
        Err(e) => {
            eprintln!("Error: Cannot read '{}': {}", traits_path.display(), e);
            return ExitCode::from(EXIT_INVALID_ARGS);
        }
    };

    let record: TraitRecord = match serde_json::from_str(&contents) {
        Ok(record) => record,
        Err(e) => {
            eprintln!("Error: Invalid trait record '{}': {}", traits_path.display(), e);
            return ExitCode::from(EXIT_INVALID_ARGS);
        }
    };

    match AvatarGenerator::new().verify(seed, &record) {
        Ok(()) => {
            println!("OK: traits match seed {}", seed);
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}
