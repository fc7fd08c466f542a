//! Check command: validate an identifier.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tally_id::{Identifier, Status};

use crate::output::{print_single, print_success, OutputFormat};

use super::{parse_identifier, CommandContext};

/// Check that an identifier is well-formed.
#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Identifier to check.
    identifier: String,
}

#[derive(Debug, Serialize)]
struct CheckView {
    identifier: Identifier,
    status: Status,
    pieces: usize,
    /// Decimal string; ordinals exceed the range of JSON numbers.
    ordinal: String,
    is_last: bool,
}

impl CheckView {
    fn new(id: Identifier) -> Self {
        Self {
            identifier: id,
            status: Status::Success,
            pieces: id.piece_count(),
            ordinal: id.ordinal().to_string(),
            is_last: id == Identifier::MAX,
        }
    }
}

impl CheckCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let view = CheckView::new(parse_identifier(&self.identifier)?);

        match ctx.format {
            OutputFormat::Json => print_single(&view),
            OutputFormat::Table => print_success(&format!(
                "{} ({} pieces, ordinal {})",
                view.identifier, view.pieces, view.ordinal
            )),
        }

        Ok(())
    }
}
