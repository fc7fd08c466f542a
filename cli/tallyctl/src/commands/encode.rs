//! Encode command: identifier from an ordinal.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tally_id::Identifier;
use tracing::debug;

use crate::error::CliError;
use crate::output::{print_single, OutputFormat};

use super::CommandContext;

/// Print the identifier at a position in counting order (`B1` is 1).
#[derive(Debug, Args)]
pub struct EncodeCommand {
    /// Position in counting order, starting at 1.
    ordinal: String,
}

#[derive(Debug, Serialize)]
struct EncodeView {
    ordinal: String,
    identifier: Identifier,
}

/// Parse a decimal ordinal and look up its identifier.
fn encode(raw: &str) -> Result<EncodeView, CliError> {
    let ordinal: u128 = raw
        .trim()
        .parse()
        .map_err(|_| CliError::InvalidOrdinal(raw.to_string()))?;
    let identifier = Identifier::from_ordinal(ordinal).map_err(|e| CliError::identifier(raw, e))?;
    Ok(EncodeView {
        ordinal: ordinal.to_string(),
        identifier,
    })
}

impl EncodeCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let view = encode(&self.ordinal)?;
        debug!(ordinal = %view.ordinal, identifier = %view.identifier, "Encoded ordinal");

        match ctx.format {
            OutputFormat::Json => print_single(&view),
            OutputFormat::Table => println!("{}", view.identifier),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("1", "B1")]
    #[case("10", "C1")]
    #[case("225", "Z9")]
    #[case("226", "B1-B1")]
    #[case(" 451 ", "B2-B1")]
    fn encodes_ordinals(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(encode(raw).unwrap().identifier.to_string(), expected);
    }

    #[rstest]
    #[case("0")]
    #[case("-1")]
    #[case("abc")]
    #[case("")]
    fn rejects_bad_ordinals(#[case] raw: &str) {
        assert!(encode(raw).is_err());
    }

    #[test]
    fn too_large_ordinal_is_overflow() {
        let max = Identifier::MAX.ordinal();
        let err = encode(&(max + 1).to_string()).unwrap_err();
        assert!(matches!(
            err,
            CliError::Identifier { source, .. } if source.is_overflow()
        ));
    }
}
