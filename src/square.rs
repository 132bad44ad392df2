// This file is part of the chess-arbiter library.
// Copyright (C) 2026 The chess-arbiter developers
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <http://www.gnu.org/licenses/>.

use std::{
    error::Error,
    fmt::{self, Write as _},
    str::FromStr,
};

/// A square, given by zero-based file `x` and rank `y`.
///
/// Squares are not tied to a board size. Whether a square lies on a
/// particular board is answered by [`Board::contains()`](crate::Board::contains).
///
/// Squares use algebraic notation with repeated letters beyond the 26th
/// file:
///
/// ```
/// use chess_arbiter::Square;
///
/// assert_eq!(Square::from_algebraic("a1")?, Square::new(0, 0));
/// assert_eq!(Square::from_algebraic("b2")?, Square::new(1, 1));
/// assert_eq!(Square::from_algebraic("aa1")?, Square::new(26, 0));
/// assert_eq!(Square::from_algebraic("aaa1")?, Square::new(52, 0));
/// assert_eq!(Square::new(51, 98).to_string(), "zz99");
/// # Ok::<_, chess_arbiter::ParseSquareError>(())
/// ```
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
pub struct Square {
    pub x: u32,
    pub y: u32,
}

impl Square {
    #[inline]
    pub const fn new(x: u32, y: u32) -> Square {
        Square { x, y }
    }

    /// Moves the square by the given deltas, or `None` if a coordinate
    /// would become negative.
    #[inline]
    pub fn offset(self, dx: i32, dy: i32) -> Option<Square> {
        Some(Square {
            x: self.x.checked_add_signed(dx)?,
            y: self.y.checked_add_signed(dy)?,
        })
    }

    /// Signed deltas `(dx, dy)` from `self` to `other`.
    #[inline]
    pub fn delta(self, other: Square) -> (i64, i64) {
        (
            i64::from(other.x) - i64::from(self.x),
            i64::from(other.y) - i64::from(self.y),
        )
    }

    /// Whether `other` lies on the same file, rank or diagonal.
    pub fn is_aligned(self, other: Square) -> bool {
        let (dx, dy) = self.delta(other);
        dx == 0 || dy == 0 || dx.abs() == dy.abs()
    }

    /// Parses algebraic notation, such as `e4` or `bb12`.
    ///
    /// Letters are case-insensitive. Multi-letter files must repeat a single
    /// letter: `a`..`z` are files 0 to 25, `aa`..`zz` are files 26 to 51,
    /// and so on.
    ///
    /// # Errors
    ///
    /// Returns [`ParseSquareError`] if the text does not start with letters,
    /// the letters are not all identical, no rank digits follow, anything
    /// follows the rank, or the rank is zero, has a leading zero or
    /// overflows.
    pub fn from_algebraic(s: &str) -> Result<Square, ParseSquareError> {
        Square::from_ascii(s.as_bytes())
    }

    /// Like [`Square::from_algebraic()`], but from ASCII bytes.
    pub fn from_ascii(s: &[u8]) -> Result<Square, ParseSquareError> {
        let num_letters = s.iter().take_while(|ch| ch.is_ascii_alphabetic()).count();
        let (letters, rest) = s.split_at(num_letters);

        let letter = match letters.first() {
            Some(ch) => ch.to_ascii_lowercase(),
            None => return Err(ParseSquareError::NoLetters),
        };
        if letters.iter().any(|ch| ch.to_ascii_lowercase() != letter) {
            return Err(ParseSquareError::MixedLetters);
        }

        let num_digits = rest.iter().take_while(|ch| ch.is_ascii_digit()).count();
        let (digits, trailing) = rest.split_at(num_digits);

        if digits.is_empty() {
            return Err(ParseSquareError::NoDigits);
        }
        if !trailing.is_empty() {
            return Err(ParseSquareError::TrailingText);
        }
        if digits[0] == b'0' {
            return Err(ParseSquareError::InvalidRank);
        }

        let rank: u64 = btoi::btou(digits).map_err(|_| ParseSquareError::InvalidRank)?;
        let y = u32::try_from(rank - 1).map_err(|_| ParseSquareError::InvalidRank)?;

        let x = (num_letters as u64 - 1)
            .checked_mul(26)
            .and_then(|x| x.checked_add(u64::from(letter - b'a')))
            .and_then(|x| u32::try_from(x).ok())
            .ok_or(ParseSquareError::InvalidFile)?;

        Ok(Square::new(x, y))
    }

    /// Formats the square in algebraic notation.
    pub fn to_algebraic(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = char::from(b'a' + (self.x % 26) as u8);
        for _ in 0..=self.x / 26 {
            f.write_char(letter)?;
        }
        write!(f, "{}", u64::from(self.y) + 1)
    }
}

/// Error when parsing an invalid square in algebraic notation.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ParseSquareError {
    /// The text does not start with a file letter.
    NoLetters,
    /// A multi-letter file uses different letters, like `ab5`.
    MixedLetters,
    /// No rank digits follow the file letters.
    NoDigits,
    /// Text follows the rank digits, like `a1b`.
    TrailingText,
    /// The rank is zero, has a leading zero, or overflows.
    InvalidRank,
    /// The file overflows.
    InvalidFile,
}

impl fmt::Display for ParseSquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ParseSquareError::NoLetters => "invalid position: no letters found",
            ParseSquareError::MixedLetters => {
                "invalid position: multi-letter positions must be repeats (e.g. a1, aa1, aaa1)"
            }
            ParseSquareError::NoDigits => "invalid position: no number found",
            ParseSquareError::TrailingText => {
                "invalid position: anything after the number is not allowed"
            }
            ParseSquareError::InvalidRank => "invalid position: rank out of range",
            ParseSquareError::InvalidFile => "invalid position: file out of range",
        })
    }
}

impl Error for ParseSquareError {}

impl FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Square, ParseSquareError> {
        Square::from_algebraic(s)
    }
}

#[cfg(feature = "arbitrary")]
impl<'a> arbitrary::Arbitrary<'a> for Square {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Square> {
        Ok(Square::new(
            u32::from(u.arbitrary::<u8>()?),
            u32::from(u.arbitrary::<u8>()?),
        ))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Square {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Square {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct SquareVisitor;

        impl serde::de::Visitor<'_> for SquareVisitor {
            type Value = Square;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("square in algebraic notation")
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Square::from_algebraic(value).map_err(serde::de::Error::custom)
            }
        }

        deserializer.deserialize_str(SquareVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_algebraic() {
        assert_eq!(Square::from_algebraic("a1"), Ok(Square::new(0, 0)));
        assert_eq!(Square::from_algebraic("b2"), Ok(Square::new(1, 1)));
        assert_eq!(Square::from_algebraic("z18"), Ok(Square::new(25, 17)));
        assert_eq!(Square::from_algebraic("aa1"), Ok(Square::new(26, 0)));
        assert_eq!(Square::from_algebraic("zz99"), Ok(Square::new(51, 98)));
        assert_eq!(Square::from_algebraic("aaa1"), Ok(Square::new(52, 0)));
        assert_eq!(Square::from_algebraic("A1"), Ok(Square::new(0, 0)));
        assert_eq!(Square::from_algebraic("AA5"), Ok(Square::new(26, 4)));
        assert_eq!(Square::from_algebraic("aA5"), Ok(Square::new(26, 4)));
    }

    #[test]
    fn test_invalid_algebraic() {
        assert_eq!(Square::from_algebraic(""), Err(ParseSquareError::NoLetters));
        assert_eq!(Square::from_algebraic("1"), Err(ParseSquareError::NoLetters));
        assert_eq!(Square::from_algebraic("a"), Err(ParseSquareError::NoDigits));
        assert_eq!(Square::from_algebraic("ab5"), Err(ParseSquareError::MixedLetters));
        assert_eq!(Square::from_algebraic("a1b"), Err(ParseSquareError::TrailingText));
        assert_eq!(Square::from_algebraic("a0"), Err(ParseSquareError::InvalidRank));
        assert_eq!(Square::from_algebraic("a01"), Err(ParseSquareError::InvalidRank));
        assert_eq!(
            Square::from_algebraic("a99999999999999999999999"),
            Err(ParseSquareError::InvalidRank)
        );
    }

    #[test]
    fn test_roundtrip() {
        for x in (0..200).chain([26 * 40 + 7]) {
            for y in (0..20).chain([u32::MAX]) {
                let square = Square::new(x, y);
                assert_eq!(Square::from_algebraic(&square.to_algebraic()), Ok(square));
            }
        }
    }

    #[test]
    fn test_offset() {
        assert_eq!(Square::new(0, 0).offset(-1, 0), None);
        assert_eq!(Square::new(3, 4).offset(-1, 2), Some(Square::new(2, 6)));
    }

    #[test]
    fn test_is_aligned() {
        assert!(Square::new(0, 0).is_aligned(Square::new(5, 5)));
        assert!(!Square::new(0, 0).is_aligned(Square::new(1, 2)));
    }
}
