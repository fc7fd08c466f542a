//! # tally-id
//!
//! Human-readable sequential identifiers such as `B1`, `C7-Z9` or
//! `Z9-B1-B1`, used for license keys, ticket numbers and similar labels.
//!
//! ## Format
//!
//! An identifier is 1 to 10 dash-separated pieces. Each piece is a letter
//! in `B..=Z` followed by a digit in `1..=9`, giving 225 pieces numbered in
//! counting order (`B1` = 1, `B9` = 9, `C1` = 10, `Z9` = 225). The leftmost
//! piece is the most significant.
//!
//! Identifiers count in bijective base 225: there is no zero piece, so
//! `Z9` is followed by `B1-B1` and every identifier has exactly one
//! successor until `Z9-Z9-Z9-Z9-Z9-Z9-Z9-Z9-Z9-Z9`.
//!
//! ## Pipeline
//!
//! [`increment`] runs validate → decode → increment → encode:
//!
//! ```
//! assert_eq!(tally_id::increment("B1-Z9").unwrap(), "B2-B1");
//! assert_eq!(tally_id::increment("Z9").unwrap(), "B1-B1");
//! assert!(tally_id::increment("B1-").unwrap_err().is_wrong_sequence());
//! ```

mod digits;
mod error;
mod identifier;
mod piece;
mod validate;

pub use digits::DigitArray;
pub use error::{Fault, IdError, OverflowCause};
pub use identifier::{Identifier, Successors};
pub use piece::{
    Piece, DIGIT_COUNT, FIRST_DIGIT, FIRST_LETTER, LAST_DIGIT, LAST_LETTER, LETTER_COUNT, RADIX,
};
pub use validate::validate;

/// Maximum number of pieces in an identifier.
pub const MAX_PIECES: usize = 10;

/// Length of the longest identifier: ten pieces and nine dashes.
pub const MAX_ENCODED_LEN: usize = MAX_PIECES * 2 + (MAX_PIECES - 1);

/// Outcome of an increment, as a flat status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Success,
    WrongSequence,
    Overflow,
}

impl Status {
    /// Returns the status of a pipeline result.
    pub fn of<T>(result: &Result<T, IdError>) -> Self {
        match result {
            Ok(_) => Status::Success,
            Err(err) => err.status(),
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Status::Success => "success",
            Status::WrongSequence => "wrong_sequence",
            Status::Overflow => "overflow",
        };
        f.write_str(s)
    }
}

/// Returns the identifier that follows `identifier`.
///
/// Malformed input is `WrongSequence`. Input with more than [`MAX_PIECES`]
/// pieces, or input whose successor would need an extra piece, is
/// `Overflow`. Nothing is produced on error.
pub fn increment(identifier: &str) -> Result<String, IdError> {
    validate(identifier)?;
    let mut digits = DigitArray::decode(identifier);
    digits.increment()?;
    Ok(digits.encode())
}
