//! Error handling and display for the CLI.

use colored::Colorize;
use tally_id::{Fault, IdError, OverflowCause, Status};
use thiserror::Error;

/// Exit code for malformed identifiers.
const EXIT_WRONG_SEQUENCE: u8 = 2;

/// Exit code for identifiers that ran out of pieces.
const EXIT_OVERFLOW: u8 = 3;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Unknown output format '{0}' (expected 'table' or 'json')")]
    UnknownFormat(String),

    #[error("Unknown log level '{0}'")]
    InvalidLogLevel(String),

    #[error("Invalid ordinal '{0}': expected a positive integer")]
    InvalidOrdinal(String),

    #[error("Cannot print {count} identifiers as JSON (at most {max}); use table output")]
    TooManyForJson { count: usize, max: usize },

    #[error("Identifier {input}: {source}")]
    Identifier {
        input: String,
        #[source]
        source: IdError,
    },
}

impl CliError {
    /// Wrap an identifier error with the input that caused it.
    pub fn identifier(input: impl Into<String>, source: IdError) -> Self {
        Self::Identifier {
            input: input.into(),
            source,
        }
    }
}

/// Find the identifier error behind `err`, if any.
fn id_error(err: &anyhow::Error) -> Option<&IdError> {
    match err.downcast_ref::<CliError>() {
        Some(CliError::Identifier { source, .. }) => Some(source),
        _ => err.downcast_ref::<IdError>(),
    }
}

/// Map an error onto the process exit code.
///
/// Identifier failures keep the status taxonomy: 2 for a malformed
/// identifier, 3 for overflow. Everything else exits with 1.
pub fn exit_code(err: &anyhow::Error) -> u8 {
    match id_error(err).map(IdError::status) {
        Some(Status::WrongSequence) => EXIT_WRONG_SEQUENCE,
        Some(Status::Overflow) => EXIT_OVERFLOW,
        _ => 1,
    }
}

/// Print an error in a user-friendly format.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {}", "Error:".red().bold(), err);

    if let Some(hint) = id_error(err).and_then(hint) {
        eprintln!("\n{}", format!("Hint: {hint}").yellow());
    }
}

fn hint(err: &IdError) -> Option<&'static str> {
    match err {
        IdError::WrongSequence {
            fault: Fault::BadLetter(c),
            ..
        } if c.is_ascii_lowercase() => Some("Identifiers use uppercase letters, e.g. `B1-C2`."),
        IdError::WrongSequence {
            fault: Fault::BadLetter('A') | Fault::BadDigit('0'),
            ..
        } => Some("Pieces run from B1 to Z9; 'A' and '0' are not used."),
        IdError::WrongSequence {
            fault: Fault::TrailingSeparator,
            ..
        } => Some("Remove the trailing dash."),
        IdError::Overflow(OverflowCause::Exhausted) => {
            Some("This is the last identifier; no further identifiers can be issued.")
        }
        IdError::Overflow(OverflowCause::TooManyPieces { .. }) => {
            Some("Identifiers have at most 10 pieces.")
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_follow_status() {
        let wrong = anyhow::Error::from(CliError::identifier(
            "B0",
            IdError::WrongSequence {
                position: 1,
                fault: Fault::BadDigit('0'),
            },
        ));
        assert_eq!(exit_code(&wrong), EXIT_WRONG_SEQUENCE);

        let overflow = anyhow::Error::from(IdError::Overflow(OverflowCause::Exhausted));
        assert_eq!(exit_code(&overflow), EXIT_OVERFLOW);

        let other = anyhow::Error::from(CliError::UnknownFormat("yaml".into()));
        assert_eq!(exit_code(&other), 1);
    }

    #[test]
    fn hints_for_common_mistakes() {
        let lower = IdError::WrongSequence {
            position: 0,
            fault: Fault::BadLetter('b'),
        };
        assert!(hint(&lower).unwrap().contains("uppercase"));
        assert!(hint(&IdError::ZeroOrdinal).is_none());
    }
}
