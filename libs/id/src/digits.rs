//! Mixed-radix digit arrays: decoding, incrementing and encoding.
//!
//! A [`DigitArray`] holds up to [`MAX_PIECES`] piece values right-aligned
//! in a fixed buffer, most-significant first, together with an explicit
//! occupied length. Slots in front of the occupied tail are always zero, so
//! the derived ordering on the buffer is the counting order.

use std::fmt;

use crate::error::{IdError, OverflowCause};
use crate::piece::{Piece, RADIX};
use crate::MAX_PIECES;

/// Fixed-size, right-aligned array of piece values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DigitArray {
    slots: [u8; MAX_PIECES],
    len: usize,
}

impl DigitArray {
    /// Decodes a validated identifier into its piece values.
    ///
    /// Pieces keep their left-to-right order and occupy the end of the
    /// buffer. No validation is performed; decoding stops quietly at the
    /// first chunk that is not a piece, or once the buffer is full.
    #[must_use]
    pub fn decode(input: &str) -> Self {
        let mut values = [0u8; MAX_PIECES];
        let mut len = 0;

        for chunk in input.as_bytes().chunks(3) {
            if len == MAX_PIECES {
                break;
            }
            let [letter, digit, ..] = *chunk else {
                break;
            };
            let Some(piece) = Piece::from_chars(letter as char, digit as char) else {
                break;
            };
            values[len] = piece.value();
            len += 1;
        }

        let mut slots = [0u8; MAX_PIECES];
        slots[MAX_PIECES - len..].copy_from_slice(&values[..len]);
        Self { slots, len }
    }

    pub(crate) const fn from_raw(slots: [u8; MAX_PIECES], len: usize) -> Self {
        Self { slots, len }
    }

    /// Builds an array from pieces given most-significant first.
    pub fn from_pieces(pieces: &[Piece]) -> Result<Self, IdError> {
        if pieces.len() > MAX_PIECES {
            return Err(IdError::Overflow(OverflowCause::TooManyPieces {
                count: pieces.len(),
            }));
        }

        let mut slots = [0u8; MAX_PIECES];
        let start = MAX_PIECES - pieces.len();
        for (slot, piece) in slots[start..].iter_mut().zip(pieces) {
            *slot = piece.value();
        }
        Ok(Self {
            slots,
            len: pieces.len(),
        })
    }

    /// Returns the occupied piece values, most-significant first.
    #[must_use]
    pub fn digits(&self) -> &[u8] {
        &self.slots[MAX_PIECES - self.len..]
    }

    /// Returns the number of occupied pieces.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if no pieces are occupied.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns true if every slot is occupied.
    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.len == MAX_PIECES
    }

    /// Iterates over the occupied pieces, most-significant first.
    pub fn pieces(&self) -> impl Iterator<Item = Piece> + '_ {
        self.digits().iter().map(|&value| Piece(value))
    }

    /// Adds one, carrying from the least-significant piece leftwards.
    ///
    /// When every piece is `"Z9"` a new most-significant `"B1"` is
    /// prepended. If the array is already full this fails with
    /// [`OverflowCause::Exhausted`] and `self` is left unchanged.
    pub fn increment(&mut self) -> Result<(), IdError> {
        let mut next = *self;
        let start = MAX_PIECES - next.len;
        let mut carry = true;

        for slot in next.slots[start..].iter_mut().rev() {
            *slot += 1;
            if *slot > RADIX {
                *slot -= RADIX;
            } else {
                carry = false;
                break;
            }
        }

        if carry {
            if next.is_full() {
                return Err(IdError::Overflow(OverflowCause::Exhausted));
            }
            next.len += 1;
            next.slots[MAX_PIECES - next.len] = Piece::MIN.value();
        }

        *self = next;
        Ok(())
    }

    /// Writes the dash-separated identifier form to `out`.
    pub fn write_to<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        for (i, piece) in self.pieces().enumerate() {
            if i > 0 {
                out.write_char('-')?;
            }
            out.write_char(piece.letter())?;
            out.write_char(piece.digit())?;
        }
        Ok(())
    }

    /// Encodes the array as a dash-separated identifier.
    #[must_use]
    pub fn encode(&self) -> String {
        self.to_string()
    }

    /// Returns the position of this array in counting order, `"B1"` being 1.
    ///
    /// The empty array has ordinal 0.
    #[must_use]
    pub fn to_ordinal(&self) -> u128 {
        self.digits()
            .iter()
            .fold(0u128, |acc, &d| acc * u128::from(RADIX) + u128::from(d))
    }

    /// Builds the array at position `ordinal` in counting order.
    pub fn from_ordinal(ordinal: u128) -> Result<Self, IdError> {
        if ordinal == 0 {
            return Err(IdError::ZeroOrdinal);
        }

        let radix = u128::from(RADIX);
        let mut slots = [0u8; MAX_PIECES];
        let mut remaining = ordinal;
        let mut len = 0;

        while remaining > 0 {
            let digit = match remaining % radix {
                0 => radix,
                r => r,
            };
            remaining = (remaining - digit) / radix;
            len += 1;
            if len <= MAX_PIECES {
                // digit is in 1..=225
                slots[MAX_PIECES - len] = digit as u8;
            }
        }

        if len > MAX_PIECES {
            return Err(IdError::Overflow(OverflowCause::TooManyPieces { count: len }));
        }
        Ok(Self { slots, len })
    }
}

impl fmt::Display for DigitArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_to(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn incremented(input: &str) -> Result<String, IdError> {
        let mut digits = DigitArray::decode(input);
        digits.increment()?;
        Ok(digits.encode())
    }

    #[test]
    fn test_decode_right_aligns() {
        let digits = DigitArray::decode("B2-C1");
        assert_eq!(digits.len(), 2);
        assert_eq!(digits.digits(), &[2, 10]);
        assert_eq!(digits.slots, [0, 0, 0, 0, 0, 0, 0, 0, 2, 10]);
    }

    #[test]
    fn test_decode_full() {
        let digits = DigitArray::decode("Z9-Z9-Z9-Z9-Z9-Z9-Z9-Z9-Z9-Z9");
        assert!(digits.is_full());
        assert!(digits.digits().iter().all(|&d| d == RADIX));
    }

    #[test]
    fn test_decode_stops_at_garbage() {
        assert!(DigitArray::decode("").is_empty());
        assert_eq!(DigitArray::decode("B1-x").digits(), &[1]);
        assert_eq!(DigitArray::decode("B1-Z").digits(), &[1]);
    }

    #[test]
    fn test_increment_within_piece() {
        assert_eq!(incremented("B1").unwrap(), "B2");
        assert_eq!(incremented("Z4").unwrap(), "Z5");
        assert_eq!(incremented("B9").unwrap(), "C1");
    }

    #[test]
    fn test_increment_carries() {
        assert_eq!(incremented("Z9").unwrap(), "B1-B1");
        assert_eq!(incremented("B1-Z9").unwrap(), "B2-B1");
        assert_eq!(incremented("Z9-Z9").unwrap(), "B1-B1-B1");
        assert_eq!(incremented("C3-Z9-Z9").unwrap(), "C4-B1-B1");
    }

    #[test]
    fn test_increment_grows_to_full() {
        assert_eq!(
            incremented("Z9-Z9-Z9-Z9-Z9-Z9-Z9-Z9-Z9").unwrap(),
            "B1-B1-B1-B1-B1-B1-B1-B1-B1-B1"
        );
    }

    #[test]
    fn test_increment_overflow_leaves_array_unchanged() {
        let mut digits = DigitArray::decode("Z9-Z9-Z9-Z9-Z9-Z9-Z9-Z9-Z9-Z9");
        let before = digits;
        assert_eq!(
            digits.increment(),
            Err(IdError::Overflow(OverflowCause::Exhausted))
        );
        assert_eq!(digits, before);
    }

    #[test]
    fn test_increment_empty_yields_first() {
        let mut digits = DigitArray::default();
        digits.increment().unwrap();
        assert_eq!(digits.encode(), "B1");
    }

    #[test]
    fn test_encode_has_no_trailing_dash() {
        let digits = DigitArray::decode("B1-C2-D3");
        assert_eq!(digits.encode(), "B1-C2-D3");
        assert_eq!(digits.to_string(), "B1-C2-D3");
        assert_eq!(DigitArray::default().encode(), "");
    }

    #[test]
    fn test_encode_full_array() {
        let digits = DigitArray::decode("Z8-Z9-Z9-Z9-Z9-Z9-Z9-Z9-Z9-B1");
        let encoded = digits.encode();
        assert_eq!(encoded, "Z8-Z9-Z9-Z9-Z9-Z9-Z9-Z9-Z9-B1");
        assert_eq!(encoded.len(), crate::MAX_ENCODED_LEN);
        assert_eq!(encoded, digits.to_string());
    }

    #[test]
    fn test_from_pieces() {
        let digits = DigitArray::from_pieces(&[Piece::MAX, Piece::MIN]).unwrap();
        assert_eq!(digits.encode(), "Z9-B1");
        assert_eq!(
            DigitArray::from_pieces(&[Piece::MIN; 11]),
            Err(IdError::Overflow(OverflowCause::TooManyPieces { count: 11 }))
        );
    }

    #[test]
    fn test_ordinals() {
        assert_eq!(DigitArray::decode("B1").to_ordinal(), 1);
        assert_eq!(DigitArray::decode("Z9").to_ordinal(), 225);
        assert_eq!(DigitArray::decode("B1-B1").to_ordinal(), 226);
        assert_eq!(DigitArray::from_ordinal(226).unwrap().encode(), "B1-B1");
        assert_eq!(DigitArray::from_ordinal(225).unwrap().encode(), "Z9");
        assert_eq!(DigitArray::from_ordinal(0), Err(IdError::ZeroOrdinal));
    }

    #[test]
    fn test_ordinal_beyond_max() {
        let max = DigitArray::decode("Z9-Z9-Z9-Z9-Z9-Z9-Z9-Z9-Z9-Z9").to_ordinal();
        assert!(DigitArray::from_ordinal(max).is_ok());
        assert_eq!(
            DigitArray::from_ordinal(max + 1),
            Err(IdError::Overflow(OverflowCause::TooManyPieces { count: 11 }))
        );
        assert!(DigitArray::from_ordinal(u128::MAX).unwrap_err().is_overflow());
    }

    #[test]
    fn test_ordering_is_counting_order() {
        let a = DigitArray::decode("Z9");
        let b = DigitArray::decode("B1-B1");
        let c = DigitArray::decode("B1-B2");
        assert!(a < b);
        assert!(b < c);
    }
}
