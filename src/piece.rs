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

use std::fmt;

use crate::{color::Color, role::Role, square::Square};

/// A piece with [`Color`] and [`Role`].
#[allow(missing_docs)]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct Piece {
    pub color: Color,
    pub role: Role,
}

impl Piece {
    pub const fn new(role: Role, color: Color) -> Piece {
        Piece { color, role }
    }

    /// The FEN letter of the piece: uppercase for White, lowercase for Black.
    pub fn char(self) -> char {
        self.color.fold(self.role.upper_char(), self.role.char())
    }

    pub fn from_char(ch: char) -> Option<Piece> {
        Role::from_char(ch).map(|role| role.of(Color::from_white(ch.is_ascii_uppercase())))
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.color, self.role)
    }
}

/// Identity of a piece on a particular [`Board`](crate::Board).
///
/// Identities are unique per board lineage: a snapshot keeps the identities
/// of the board it was taken from, and promotion assigns a fresh one.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
pub struct PieceId(pub(crate) u32);

/// A piece owned by a board, together with its square and history.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub struct PlacedPiece {
    pub(crate) piece: Piece,
    pub(crate) square: Square,
    pub(crate) moved: bool,
    pub(crate) id: PieceId,
}

impl PlacedPiece {
    #[inline]
    pub fn piece(&self) -> Piece {
        self.piece
    }

    #[inline]
    pub fn role(&self) -> Role {
        self.piece.role
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.piece.color
    }

    #[inline]
    pub fn square(&self) -> Square {
        self.square
    }

    /// Whether the piece has made a move since it was placed. Promoted pieces
    /// count as moved.
    #[inline]
    pub fn has_moved(&self) -> bool {
        self.moved
    }

    #[inline]
    pub fn id(&self) -> PieceId {
        self.id
    }

    #[inline]
    pub fn is(&self, role: Role) -> bool {
        self.piece.role == role
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_piece_char() {
        assert_eq!(Role::Queen.of(Color::White).char(), 'Q');
        assert_eq!(Role::Knight.of(Color::Black).char(), 'n');
        assert_eq!(Piece::from_char('K'), Some(Role::King.of(Color::White)));
        assert_eq!(Piece::from_char('p'), Some(Role::Pawn.of(Color::Black)));
        assert_eq!(Piece::from_char('x'), None);
    }
}
