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

use std::{error::Error, fmt};

use crate::{role::ParseRoleError, square::Square};

/// Error when a square lies outside the board.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct OutOfBounds {
    pub square: Square,
}

impl fmt::Display for OutOfBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "square {} ({}, {}) is outside the board",
            self.square, self.square.x, self.square.y
        )
    }
}

impl Error for OutOfBounds {}

/// Reason a move was rejected by [`validate()`](crate::legality::validate).
///
/// The variants are listed in the order the checks are performed. The first
/// failing check determines the error.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum MoveError {
    /// The origin or destination lies outside the board.
    OutOfBounds,
    /// The origin square is empty.
    NoPieceAtSource,
    /// The origin square holds an opponent's piece.
    NotYourPiece,
    /// The destination holds a piece of the moving side.
    FriendlyCapture,
    /// The piece kind cannot reach the destination.
    IllegalPieceMove,
    /// A square between origin and destination is occupied.
    PathBlocked,
    /// The move would leave the mover's king in check.
    SelfCheck,
    /// Castling while in check, through an attacked square, or after the
    /// king or rook has moved.
    CastleThroughCheck,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MoveError::OutOfBounds => "square is outside the board",
            MoveError::NoPieceAtSource => "no piece at that position",
            MoveError::NotYourPiece => "that is not your piece",
            MoveError::FriendlyCapture => "cannot capture your own piece",
            MoveError::IllegalPieceMove => "piece cannot move like that",
            MoveError::PathBlocked => "path is blocked by other pieces",
            MoveError::SelfCheck => "move would leave king in check",
            MoveError::CastleThroughCheck => "cannot castle out of, through or without rights",
        })
    }
}

impl Error for MoveError {}

impl From<OutOfBounds> for MoveError {
    fn from(_: OutOfBounds) -> MoveError {
        MoveError::OutOfBounds
    }
}

/// Error when promoting a piece.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum InvalidPromotion {
    /// The square does not hold a pawn (or lies outside the board).
    NotAPawn,
    /// Pawns promote only to queen, rook, bishop or knight.
    InvalidRole,
}

impl fmt::Display for InvalidPromotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            InvalidPromotion::NotAPawn => "only pawns can be promoted",
            InvalidPromotion::InvalidRole => "invalid promotion piece kind",
        })
    }
}

impl Error for InvalidPromotion {}

impl From<ParseRoleError> for InvalidPromotion {
    fn from(_: ParseRoleError) -> InvalidPromotion {
        InvalidPromotion::InvalidRole
    }
}

impl From<OutOfBounds> for InvalidPromotion {
    fn from(_: OutOfBounds) -> InvalidPromotion {
        InvalidPromotion::NotAPawn
    }
}
