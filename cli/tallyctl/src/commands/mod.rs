//! CLI commands.

mod check;
mod decode;
mod encode;
mod next;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tally_id::Identifier;
use tracing::debug;

use crate::config::Config;
use crate::error::CliError;
use crate::logging;
use crate::output::OutputFormat;

/// tally - Generate and inspect sequential identifiers like `B1-Z9`.
#[derive(Debug, Parser)]
#[command(name = "tally")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format (table or json).
    #[arg(long, global = true, env = "TALLY_FORMAT")]
    format: Option<String>,

    /// Log level (off, error, warn, info, debug, trace).
    #[arg(long, global = true, env = "TALLY_LOG_LEVEL")]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print the identifiers that follow an identifier.
    Next(next::NextCommand),

    /// Check that an identifier is well-formed.
    Check(check::CheckCommand),

    /// Show the pieces of an identifier and their values.
    Decode(decode::DecodeCommand),

    /// Print the identifier at a position in counting order.
    Encode(encode::EncodeCommand),

    /// Show CLI version.
    Version,
}

impl Cli {
    /// Run the CLI command.
    pub fn run(self) -> Result<()> {
        let config = Config::resolve(self.format.as_deref(), self.log_level.as_deref())?;
        logging::init(&config.log_level);
        debug!(format = ?config.format, log_level = %config.log_level, "Configuration loaded");

        let ctx = CommandContext {
            format: config.format,
        };

        match self.command {
            Commands::Next(cmd) => cmd.run(&ctx),
            Commands::Check(cmd) => cmd.run(&ctx),
            Commands::Decode(cmd) => cmd.run(&ctx),
            Commands::Encode(cmd) => cmd.run(&ctx),
            Commands::Version => {
                println!("tally {}", env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

/// Shared command context.
pub struct CommandContext {
    pub format: OutputFormat,
}

/// Parse an identifier argument, keeping the input for error reporting.
fn parse_identifier(input: &str) -> Result<Identifier, CliError> {
    let id = Identifier::parse(input).map_err(|e| CliError::identifier(input, e))?;
    debug!(identifier = %id, pieces = id.piece_count(), "Parsed identifier");
    Ok(id)
}
