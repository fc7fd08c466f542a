//! The validated identifier type.

use crate::digits::DigitArray;
use crate::error::IdError;
use crate::piece::Piece;
use crate::validate::validate;
use crate::MAX_PIECES;

/// A well-formed identifier of 1..=10 pieces.
///
/// Identifiers order by counting order: every identifier sorts before its
/// successor, and shorter identifiers sort before longer ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Identifier(DigitArray);

impl Identifier {
    /// The first identifier, `"B1"`.
    pub const FIRST: Self = Self::repeat(Piece::MIN, 1);

    /// The last identifier, ten `"Z9"` pieces.
    pub const MAX: Self = Self::repeat(Piece::MAX, MAX_PIECES);

    const fn repeat(piece: Piece, count: usize) -> Self {
        let mut slots = [0u8; MAX_PIECES];
        let mut i = MAX_PIECES - count;
        while i < MAX_PIECES {
            slots[i] = piece.value();
            i += 1;
        }
        Self(DigitArray::from_raw(slots, count))
    }

    /// Parses an identifier such as `"B1-Z9"`.
    pub fn parse(s: &str) -> Result<Self, IdError> {
        validate(s)?;
        Ok(Self(DigitArray::decode(s)))
    }

    /// Builds an identifier from pieces given most-significant first.
    pub fn from_pieces(pieces: &[Piece]) -> Result<Self, IdError> {
        if pieces.is_empty() {
            return Err(IdError::wrong(0, crate::Fault::Empty));
        }
        DigitArray::from_pieces(pieces).map(Self)
    }

    /// Returns the identifier at position `ordinal` in counting order.
    pub fn from_ordinal(ordinal: u128) -> Result<Self, IdError> {
        DigitArray::from_ordinal(ordinal).map(Self)
    }

    /// Returns the position of this identifier in counting order, `"B1"` being 1.
    #[must_use]
    pub fn ordinal(&self) -> u128 {
        self.0.to_ordinal()
    }

    /// Returns the identifier that follows this one.
    pub fn next(&self) -> Result<Self, IdError> {
        let mut digits = self.0;
        digits.increment()?;
        Ok(Self(digits))
    }

    /// Iterates over the identifiers following this one, in order.
    ///
    /// The iterator ends after [`Identifier::MAX`].
    #[must_use]
    pub fn successors(&self) -> Successors {
        Successors {
            current: Some(*self),
        }
    }

    /// Returns the number of pieces.
    #[must_use]
    pub const fn piece_count(&self) -> usize {
        self.0.len()
    }

    /// Iterates over the pieces, most-significant first.
    pub fn pieces(&self) -> impl Iterator<Item = Piece> + '_ {
        self.0.pieces()
    }

    /// Returns the underlying digit array.
    #[must_use]
    pub const fn digits(&self) -> &DigitArray {
        &self.0
    }
}

impl Default for Identifier {
    fn default() -> Self {
        Self::FIRST
    }
}

impl std::fmt::Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.write_to(f)
    }
}

impl std::str::FromStr for Identifier {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<DigitArray> for Identifier {
    type Error = IdError;

    fn try_from(digits: DigitArray) -> Result<Self, Self::Error> {
        if digits.is_empty() {
            return Err(IdError::wrong(0, crate::Fault::Empty));
        }
        Ok(Self(digits))
    }
}

impl From<Identifier> for DigitArray {
    fn from(id: Identifier) -> Self {
        id.0
    }
}

impl serde::Serialize for Identifier {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for Identifier {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// Iterator over the identifiers following a starting identifier.
///
/// Created by [`Identifier::successors`].
#[derive(Debug, Clone)]
pub struct Successors {
    current: Option<Identifier>,
}

impl Iterator for Successors {
    type Item = Identifier;

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.current?.next().ok();
        self.current = next;
        next
    }
}

impl std::iter::FusedIterator for Successors {}
