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

//! Move validation.
//!
//! [`validate()`] runs a fixed sequence of checks and reports the first one
//! that fails:
//!
//! 1. Both squares are on the board ([`MoveError::OutOfBounds`]).
//! 2. The origin holds a piece of the moving side
//!    ([`MoveError::NoPieceAtSource`], [`MoveError::NotYourPiece`]).
//! 3. The destination is empty or holds an opponent's piece
//!    ([`MoveError::FriendlyCapture`]).
//! 4. The piece can move like that ([`MoveError::IllegalPieceMove`]). An
//!    attempt to castle after the king or rook has moved is reported as
//!    [`MoveError::CastleThroughCheck`].
//! 5. No piece stands in the way, unless a knight is jumping
//!    ([`MoveError::PathBlocked`]).
//! 6. The own king is not in check after the move ([`MoveError::SelfCheck`]).
//! 7. When castling, the king is not in check and does not cross an attacked
//!    square ([`MoveError::CastleThroughCheck`]).
//!
//! # Examples
//!
//! ```
//! use chess_arbiter::{legality, Board, Color, MoveError, Square};
//!
//! let board = Board::standard();
//! let e2 = Square::new(4, 1);
//!
//! assert_eq!(legality::validate(&board, Color::White, e2, Square::new(4, 3)), Ok(()));
//! assert_eq!(
//!     legality::validate(&board, Color::Black, e2, Square::new(4, 3)),
//!     Err(MoveError::NotYourPiece)
//! );
//! assert_eq!(
//!     legality::validate(&board, Color::White, e2, Square::new(4, 4)),
//!     Err(MoveError::IllegalPieceMove)
//! );
//! ```

use crate::{
    board::Board,
    check,
    color::Color,
    errors::MoveError,
    m::Move,
    movegen,
    piece::PlacedPiece,
    role::Role,
    square::Square,
};

/// Validates moving the piece on `from` to `to` for `side`.
///
/// The board is never modified.
///
/// # Errors
///
/// Returns the [`MoveError`] of the first failed check.
pub fn validate(board: &Board, side: Color, from: Square, to: Square) -> Result<(), MoveError> {
    if !board.contains(from) || !board.contains(to) {
        return Err(MoveError::OutOfBounds);
    }

    let piece = board.piece_at(from).ok_or(MoveError::NoPieceAtSource)?;
    if piece.color() != side {
        return Err(MoveError::NotYourPiece);
    }

    if board
        .piece_at(to)
        .is_some_and(|occupant| occupant.color() == side)
    {
        return Err(MoveError::FriendlyCapture);
    }

    if !movegen::is_geometrically_valid(board, &piece, to) {
        return Err(if lost_castling_rights(board, &piece, to) {
            MoveError::CastleThroughCheck
        } else {
            MoveError::IllegalPieceMove
        });
    }

    if !piece.is(Role::Knight) && !board.path_clear(from, to) {
        return Err(MoveError::PathBlocked);
    }

    if check::would_cause_check(board, &piece, to) {
        return Err(MoveError::SelfCheck);
    }

    if movegen::is_castling_attempt(&piece, to) && !check::castling_is_safe(board, &piece, to) {
        return Err(MoveError::CastleThroughCheck);
    }

    Ok(())
}

fn lost_castling_rights(board: &Board, king: &PlacedPiece, to: Square) -> bool {
    movegen::castling_partner(board, king, to)
        .is_some_and(|rook| king.has_moved() || rook.has_moved())
}

/// Tests if [`validate()`] accepts the move.
pub fn is_legal(board: &Board, side: Color, from: Square, to: Square) -> bool {
    validate(board, side, from, to).is_ok()
}

/// All legal destinations of `piece`.
///
/// # Examples
///
/// ```
/// use chess_arbiter::{legality, Board, Square};
///
/// let board = Board::standard();
/// let pawn = board.piece_at(Square::new(4, 1)).expect("pawn on e2");
/// assert_eq!(legality::legal_moves(&board, &pawn).len(), 2);
/// ```
pub fn legal_moves(board: &Board, piece: &PlacedPiece) -> Vec<Square> {
    movegen::pseudo_legal_destinations(board, piece)
        .into_iter()
        .filter(|&to| is_legal(board, piece.color(), piece.square(), to))
        .collect()
}

/// All legal moves of `side`, piece by piece in rank order.
pub fn legal_moves_of(board: &Board, side: Color) -> Vec<Move> {
    board
        .pieces_of(side)
        .flat_map(|piece| {
            legal_moves(board, &piece)
                .into_iter()
                .map(move |to| Move::new(piece.square(), to))
        })
        .collect()
}
