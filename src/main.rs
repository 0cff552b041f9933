//! Crustal Wars - command-line avatar generator

use std::process::ExitCode;

use crustal::cli;

fn main() -> ExitCode {
    cli::run()
}
