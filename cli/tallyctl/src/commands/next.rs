//! Next command: print successive identifiers.

use std::io::{self, Write};
use std::iter::Take;

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tally_id::{IdError, Identifier, OverflowCause, Successors};
use tracing::debug;

use crate::error::CliError;
use crate::output::{print_single, OutputFormat};

use super::{parse_identifier, CommandContext};

/// Largest count printed as JSON; the array is built in memory.
const MAX_JSON_COUNT: usize = 100_000;

/// Print the identifiers that follow an identifier.
#[derive(Debug, Args)]
pub struct NextCommand {
    /// Identifier to start from (not printed).
    identifier: String,

    /// Number of identifiers to print.
    #[arg(short = 'n', long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    count: u32,
}

#[derive(Debug, Serialize)]
struct NextView {
    from: Identifier,
    next: Vec<Identifier>,
}

impl NextCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let start = parse_identifier(&self.identifier)?;
        let count = self.count as usize;
        let ids =
            following(start, count).map_err(|e| CliError::identifier(&self.identifier, e))?;
        debug!(from = %start, count, "Generating identifiers");

        match ctx.format {
            OutputFormat::Json => {
                if count > MAX_JSON_COUNT {
                    return Err(CliError::TooManyForJson {
                        count,
                        max: MAX_JSON_COUNT,
                    }
                    .into());
                }
                print_single(&NextView {
                    from: start,
                    next: ids.collect(),
                });
            }
            OutputFormat::Table => {
                let mut out = io::stdout().lock();
                for id in ids {
                    writeln!(out, "{id}")?;
                }
                out.flush()?;
            }
        }

        Ok(())
    }
}

/// The `count` identifiers after `start`, or an overflow if fewer remain.
///
/// Nothing is generated until the iterator is consumed.
fn following(start: Identifier, count: usize) -> Result<Take<Successors>, IdError> {
    let remaining = Identifier::MAX.ordinal() - start.ordinal();
    if remaining < count as u128 {
        return Err(IdError::Overflow(OverflowCause::Exhausted));
    }
    Ok(start.successors().take(count))
}
