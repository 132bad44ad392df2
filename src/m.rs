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

use std::{error::Error, fmt, str::FromStr};

use bitflags::bitflags;

use crate::square::{ParseSquareError, Square};

/// A move from one square to another.
///
/// Moves are plain coordinate pairs. Castling is written as the two-square
/// king move, en passant as the diagonal pawn move.
///
/// # Examples
///
/// ```
/// use chess_arbiter::{Move, Square};
///
/// let m: Move = "e2e4".parse()?;
/// assert_eq!(m, Move::new(Square::new(4, 1), Square::new(4, 3)));
/// assert_eq!(m.to_string(), "e2e4");
/// # Ok::<_, chess_arbiter::ParseMoveError>(())
/// ```
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    #[inline]
    pub const fn new(from: Square, to: Square) -> Move {
        Move { from, to }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

/// Error when parsing an invalid move.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct ParseMoveError {
    square: ParseSquareError,
}

impl fmt::Display for ParseMoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid move: {}", self.square)
    }
}

impl Error for ParseMoveError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.square)
    }
}

impl From<ParseSquareError> for ParseMoveError {
    fn from(square: ParseSquareError) -> ParseMoveError {
        ParseMoveError { square }
    }
}

impl Move {
    pub fn from_ascii(s: &[u8]) -> Result<Move, ParseMoveError> {
        let letters = s.iter().take_while(|ch| ch.is_ascii_alphabetic()).count();
        let digits = s[letters..]
            .iter()
            .take_while(|ch| ch.is_ascii_digit())
            .count();
        let (from, to) = s.split_at(letters + digits);
        Ok(Move {
            from: Square::from_ascii(from)?,
            to: Square::from_ascii(to)?,
        })
    }
}

impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Move, ParseMoveError> {
        Move::from_ascii(s.as_bytes())
    }
}

bitflags! {
    /// Side effects of [`Board::apply_move()`](crate::Board::apply_move).
    #[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
    pub struct MoveEffects: u8 {
        /// A piece was removed from the destination square.
        const CAPTURE = 1;
        /// The pawn beside the destination was captured en passant.
        const EN_PASSANT = 1 << 1;
        /// The king castled and the rook was relocated.
        const CASTLE = 1 << 2;
        /// A pawn advanced two squares, opening the en-passant window.
        const DOUBLE_STEP = 1 << 3;
        /// A pawn reached its last rank and awaits
        /// [`Board::promote()`](crate::Board::promote).
        const PROMOTION = 1 << 4;
    }
}

impl MoveEffects {
    /// Whether a piece was captured, including en passant.
    pub fn is_capture(self) -> bool {
        self.intersects(MoveEffects::CAPTURE | MoveEffects::EN_PASSANT)
    }
}
