//! Batch command implementation

use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;
use std::process::ExitCode;

use crate::batch::{read_seeds, write_all};
use crate::config::CrustalConfig;
use crate::generator::{check_seed, AvatarGenerator};

use super::{report_warnings, EXIT_ERROR, EXIT_INVALID_ARGS, EXIT_SUCCESS};

/// Execute the batch command
pub fn run_batch(config: &CrustalConfig, seeds_file: Option<&Path>, jobs: Option<usize>) -> ExitCode {
    let seeds = match seeds_file {
        Some(path) if path != Path::new("-") => match File::open(path) {
            Ok(file) => read_seeds(BufReader::new(file)),
            Err(e) => {
                eprintln!("Error: Cannot open seeds file '{}': {}", path.display(), e);
                return ExitCode::from(EXIT_INVALID_ARGS);
            }
        },
        _ => read_seeds(io::stdin().lock()),
    };
    let seeds = match seeds {
        Ok(seeds) => seeds,
        Err(e) => {
            eprintln!("Error: Failed to read seeds: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };
    if seeds.is_empty() {
        eprintln!("Error: No seeds given");
        return ExitCode::from(EXIT_INVALID_ARGS);
    }

    let warnings: Vec<_> = seeds.iter().flat_map(|seed| check_seed(seed)).collect();
    if report_warnings(&warnings, config.generate.strict) {
        return ExitCode::from(EXIT_ERROR);
    }

    let pool = match rayon::ThreadPoolBuilder::new().num_threads(jobs.unwrap_or(0)).build() {
        Ok(pool) => pool,
        Err(e) => {
            eprintln!("Error: Failed to start worker pool: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let generator = AvatarGenerator::new().with_pixel_scale(config.render.scale);
    let dir = &config.output.dir;
    let items = pool.install(|| write_all(&generator, &seeds, dir, config.output.traits));

    let mut failed = 0;
    for item in &items {
        match &item.result {
            Ok(()) => println!("Saved: {}", item.png_path.display()),
            Err(e) => {
                eprintln!("Error: seed '{}': {}", item.seed, e);
                failed += 1;
            }
        }
    }

    if failed > 0 {
        eprintln!("Error: {} of {} avatars failed", failed, items.len());
        return ExitCode::from(EXIT_ERROR);
    }
    ExitCode::from(EXIT_SUCCESS)
}
