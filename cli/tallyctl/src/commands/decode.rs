//! Decode command: show the pieces of an identifier.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;
use tally_id::Identifier;

use crate::output::print_output;

use super::{parse_identifier, CommandContext};

/// Show the pieces of an identifier and their values.
#[derive(Debug, Args)]
pub struct DecodeCommand {
    /// Identifier to decode.
    identifier: String,
}

#[derive(Debug, Serialize, Tabled)]
struct PieceRow {
    #[tabled(rename = "POSITION")]
    position: usize,
    #[tabled(rename = "PIECE")]
    piece: String,
    #[tabled(rename = "LETTER")]
    letter: char,
    #[tabled(rename = "DIGIT")]
    digit: char,
    #[tabled(rename = "VALUE")]
    value: u8,
}

/// Rows for each piece, most-significant first. Position 0 is the
/// least-significant piece.
fn piece_rows(id: &Identifier) -> Vec<PieceRow> {
    let count = id.piece_count();
    id.pieces()
        .enumerate()
        .map(|(i, piece)| PieceRow {
            position: count - 1 - i,
            piece: piece.to_string(),
            letter: piece.letter(),
            digit: piece.digit(),
            value: piece.value(),
        })
        .collect()
}

impl DecodeCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let id = parse_identifier(&self.identifier)?;
        print_output(&piece_rows(&id), ctx.format);
        Ok(())
    }
}
