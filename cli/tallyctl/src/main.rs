//! tallyctl (tally) - CLI for tally identifiers
//!
//! Generates successive identifiers and inspects existing ones for scripts
//! that hand out license keys, ticket numbers and similar labels.

use std::process::ExitCode;

use clap::Parser;

mod commands;
mod config;
mod error;
mod logging;
mod output;

use commands::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error::print_error(&e);
            ExitCode::from(error::exit_code(&e))
        }
    }
}
