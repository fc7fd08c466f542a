//! Error types for identifier validation and arithmetic.

use thiserror::Error;

/// What was wrong at the offending position of a malformed identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fault {
    /// The input contained no pieces at all.
    Empty,
    /// The first character of a piece is outside `B..=Z`.
    BadLetter(char),
    /// The second character of a piece is outside `1..=9`.
    BadDigit(char),
    /// The input ended after the first character of a piece.
    MissingDigit,
    /// A piece is followed by something other than `-` or the end of input.
    BadSeparator(char),
    /// The input ends with a dash.
    TrailingSeparator,
}

impl std::fmt::Display for Fault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Fault::Empty => write!(f, "identifier is empty"),
            Fault::BadLetter(c) => write!(f, "expected a letter B-Z, got {c:?}"),
            Fault::BadDigit(c) => write!(f, "expected a digit 1-9, got {c:?}"),
            Fault::MissingDigit => write!(f, "piece is missing its digit"),
            Fault::BadSeparator(c) => write!(f, "expected '-' or end of input, got {c:?}"),
            Fault::TrailingSeparator => write!(f, "identifier ends with a dash"),
        }
    }
}

/// Why an identifier does not fit in the available pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverflowCause {
    /// The input already has more pieces than allowed.
    TooManyPieces { count: usize },
    /// Incrementing would need a piece beyond the maximum.
    Exhausted,
}

impl std::fmt::Display for OverflowCause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OverflowCause::TooManyPieces { count } => write!(
                f,
                "{count} pieces given, at most {} allowed",
                crate::MAX_PIECES
            ),
            OverflowCause::Exhausted => write!(f, "no identifier follows the maximum"),
        }
    }
}

/// Errors that can occur when validating, parsing or incrementing identifiers.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum IdError {
    /// The input is not a well-formed identifier.
    #[error("malformed identifier at byte {position}: {fault}")]
    WrongSequence { position: usize, fault: Fault },

    /// The identifier does not fit in the maximum piece count.
    #[error("identifier overflow: {0}")]
    Overflow(OverflowCause),

    /// Ordinal zero has no identifier.
    #[error("ordinal 0 has no identifier; ordinals start at 1")]
    ZeroOrdinal,
}

impl IdError {
    pub(crate) const fn wrong(position: usize, fault: Fault) -> Self {
        IdError::WrongSequence { position, fault }
    }

    /// Returns true if the input was structurally malformed.
    pub fn is_wrong_sequence(&self) -> bool {
        matches!(self, IdError::WrongSequence { .. })
    }

    /// Returns true if the identifier ran out of pieces.
    pub fn is_overflow(&self) -> bool {
        matches!(self, IdError::Overflow(_))
    }

    /// Maps the error onto the flat status taxonomy.
    ///
    /// `ZeroOrdinal` only arises outside the increment pipeline and is
    /// reported as a malformed sequence.
    pub fn status(&self) -> crate::Status {
        match self {
            IdError::Overflow(_) => crate::Status::Overflow,
            IdError::WrongSequence { .. } | IdError::ZeroOrdinal => crate::Status::WrongSequence,
        }
    }
}
