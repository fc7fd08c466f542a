//! Structural validation of identifier strings.

use crate::error::{Fault, IdError, OverflowCause};
use crate::piece::{is_digit, is_letter};
use crate::MAX_PIECES;

/// Checks that `input` is a well-formed identifier and returns its piece count.
///
/// The whole string is checked character by character before the piece
/// count is considered, so a malformed string is always `WrongSequence`
/// even if it is also too long. A well-formed string with more than
/// [`MAX_PIECES`] pieces is `Overflow`.
pub fn validate(input: &str) -> Result<usize, IdError> {
    let mut chars = input.char_indices();
    let mut pieces = 0;

    while let Some((pos, letter)) = chars.next() {
        if !is_letter(letter) {
            return Err(IdError::wrong(pos, Fault::BadLetter(letter)));
        }

        let Some((pos, digit)) = chars.next() else {
            return Err(IdError::wrong(input.len(), Fault::MissingDigit));
        };
        if !is_digit(digit) {
            return Err(IdError::wrong(pos, Fault::BadDigit(digit)));
        }
        pieces += 1;

        match chars.next() {
            None => return check_count(pieces),
            Some((_, '-')) => {}
            Some((pos, other)) => return Err(IdError::wrong(pos, Fault::BadSeparator(other))),
        }
    }

    // Only reached at the very start or right after a dash.
    if pieces == 0 {
        Err(IdError::wrong(0, Fault::Empty))
    } else {
        Err(IdError::wrong(input.len() - 1, Fault::TrailingSeparator))
    }
}

fn check_count(pieces: usize) -> Result<usize, IdError> {
    if pieces > MAX_PIECES {
        return Err(IdError::Overflow(OverflowCause::TooManyPieces { count: pieces }));
    }
    Ok(pieces)
}
