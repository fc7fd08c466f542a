//! Single two-character pieces and the alphabet they are drawn from.
//!
//! A piece is one digit of the bijective base-225 counter: a letter in
//! `B..=Z` followed by a digit in `1..=9`. Pieces are numbered in counting
//! order, `"B1"` = 1 through `"Z9"` = 225.

use crate::error::{Fault, IdError};

/// First letter a piece may start with.
pub const FIRST_LETTER: char = 'B';
/// Last letter a piece may start with.
pub const LAST_LETTER: char = 'Z';
/// First digit a piece may end with.
pub const FIRST_DIGIT: char = '1';
/// Last digit a piece may end with.
pub const LAST_DIGIT: char = '9';

/// Number of letters in the alphabet.
pub const LETTER_COUNT: u8 = LAST_LETTER as u8 - FIRST_LETTER as u8 + 1;
/// Number of digits in the alphabet.
pub const DIGIT_COUNT: u8 = LAST_DIGIT as u8 - FIRST_DIGIT as u8 + 1;
/// Number of distinct pieces, and the radix of the counter.
pub const RADIX: u8 = LETTER_COUNT * DIGIT_COUNT;

pub(crate) fn is_letter(c: char) -> bool {
    (FIRST_LETTER..=LAST_LETTER).contains(&c)
}

pub(crate) fn is_digit(c: char) -> bool {
    (FIRST_DIGIT..=LAST_DIGIT).contains(&c)
}

/// One digit of an identifier, valued 1..=225.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Piece(pub(crate) u8);

impl Piece {
    /// `"B1"`, value 1.
    pub const MIN: Self = Self(1);
    /// `"Z9"`, value 225.
    pub const MAX: Self = Self(RADIX);

    /// Creates a piece from its value. Returns `None` outside `1..=225`.
    #[must_use]
    pub const fn from_value(value: u8) -> Option<Self> {
        if value >= 1 && value <= RADIX {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Creates a piece from its letter and digit.
    #[must_use]
    pub fn from_chars(letter: char, digit: char) -> Option<Self> {
        if !is_letter(letter) || !is_digit(digit) {
            return None;
        }
        Some(Self(value_of(letter as u8, digit as u8)))
    }

    /// Returns the value of this piece, 1..=225.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }

    /// Returns the letter of this piece.
    #[must_use]
    pub const fn letter(&self) -> char {
        ((self.0 - 1) / DIGIT_COUNT + FIRST_LETTER as u8) as char
    }

    /// Returns the digit of this piece.
    #[must_use]
    pub const fn digit(&self) -> char {
        ((self.0 - 1) % DIGIT_COUNT + FIRST_DIGIT as u8) as char
    }

    /// Returns true for `"Z9"`.
    #[must_use]
    pub const fn is_max(&self) -> bool {
        self.0 == RADIX
    }
}

/// Forward map from an already-checked letter and digit byte to 1..=225.
pub(crate) const fn value_of(letter: u8, digit: u8) -> u8 {
    DIGIT_COUNT * (letter - FIRST_LETTER as u8) + (digit - FIRST_DIGIT as u8 + 1)
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.letter(), self.digit())
    }
}

impl std::str::FromStr for Piece {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.char_indices();
        let Some((_, letter)) = chars.next() else {
            return Err(IdError::wrong(0, Fault::Empty));
        };
        if !is_letter(letter) {
            return Err(IdError::wrong(0, Fault::BadLetter(letter)));
        }
        let Some((pos, digit)) = chars.next() else {
            return Err(IdError::wrong(1, Fault::MissingDigit));
        };
        if !is_digit(digit) {
            return Err(IdError::wrong(pos, Fault::BadDigit(digit)));
        }
        if let Some((pos, extra)) = chars.next() {
            return Err(IdError::wrong(pos, Fault::BadSeparator(extra)));
        }
        Ok(Self(value_of(letter as u8, digit as u8)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabet_sizes() {
        assert_eq!(LETTER_COUNT, 25);
        assert_eq!(DIGIT_COUNT, 9);
        assert_eq!(RADIX, 225);
    }

    #[test]
    fn test_counting_order() {
        let cases = [("B1", 1), ("B2", 2), ("B9", 9), ("C1", 10), ("Z9", 225)];
        for (text, value) in cases {
            let piece: Piece = text.parse().unwrap();
            assert_eq!(piece.value(), value, "{text}");
            assert_eq!(piece.to_string(), text);
        }
    }

    #[test]
    fn test_every_value_maps_back() {
        for value in 1..=RADIX {
            let piece = Piece::from_value(value).unwrap();
            let again = Piece::from_chars(piece.letter(), piece.digit()).unwrap();
            assert_eq!(piece, again);
        }
    }

    #[test]
    fn test_from_value_bounds() {
        assert_eq!(Piece::from_value(0), None);
        assert_eq!(Piece::from_value(226), None);
        assert_eq!(Piece::from_value(1), Some(Piece::MIN));
        assert_eq!(Piece::from_value(225), Some(Piece::MAX));
        assert!(Piece::MAX.is_max());
        assert!(!Piece::MIN.is_max());
    }

    #[test]
    fn test_from_chars_rejects_out_of_range() {
        assert_eq!(Piece::from_chars('A', '1'), None);
        assert_eq!(Piece::from_chars('B', '0'), None);
        assert_eq!(Piece::from_chars('b', '1'), None);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "".parse::<Piece>().unwrap_err(),
            IdError::wrong(0, Fault::Empty)
        );
        assert_eq!(
            "A1".parse::<Piece>().unwrap_err(),
            IdError::wrong(0, Fault::BadLetter('A'))
        );
        assert_eq!(
            "B".parse::<Piece>().unwrap_err(),
            IdError::wrong(1, Fault::MissingDigit)
        );
        assert_eq!(
            "B0".parse::<Piece>().unwrap_err(),
            IdError::wrong(1, Fault::BadDigit('0'))
        );
        assert_eq!(
            "B1-".parse::<Piece>().unwrap_err(),
            IdError::wrong(2, Fault::BadSeparator('-'))
        );
    }
}
