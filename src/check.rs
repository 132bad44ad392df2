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

//! Check, checkmate and stalemate detection.
//!
//! Hypothetical moves are evaluated on [snapshots](Board::snapshot), so none
//! of these functions change the board they are given.
//!
//! # Examples
//!
//! ```
//! use chess_arbiter::{check, Board, Color};
//!
//! // Fool's mate.
//! let board = Board::from_board_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR")?;
//! assert!(check::in_check(&board, Color::White));
//! assert!(check::is_checkmate(&board, Color::White));
//! assert!(!check::is_checkmate(&board, Color::Black));
//! # Ok::<_, chess_arbiter::fen::ParseFenError>(())
//! ```

use crate::{board::Board, color::Color, movegen, piece::PlacedPiece, square::Square};

/// Tests if the king of `side` is attacked. A side without a king is never
/// in check.
pub fn in_check(board: &Board, side: Color) -> bool {
    board
        .find_king(side)
        .is_some_and(|king| board.is_attacked(&king))
}

fn in_check_after(board: &Board, piece: &PlacedPiece, to: Square) -> bool {
    let mut snapshot = board.snapshot();
    match snapshot.apply_move(piece.square(), to) {
        Ok(_) => in_check(&snapshot, piece.color()),
        Err(_) => in_check(board, piece.color()),
    }
}

/// Tests if moving `piece` to `to` leaves its side out of check.
pub fn would_resolve_check(board: &Board, piece: &PlacedPiece, to: Square) -> bool {
    !in_check_after(board, piece, to)
}

/// Tests if moving `piece` to `to` leaves its side in check.
pub fn would_cause_check(board: &Board, piece: &PlacedPiece, to: Square) -> bool {
    in_check_after(board, piece, to)
}

/// For a castling move of `king` to `to`: tests that the king is not in
/// check and would not be in check on the square it crosses.
pub(crate) fn castling_is_safe(board: &Board, king: &PlacedPiece, to: Square) -> bool {
    let dir = if to.x > king.square().x { 1 } else { -1 };
    !in_check(board, king.color())
        && king
            .square()
            .offset(dir, 0)
            .is_some_and(|crossed| !would_cause_check(board, king, crossed))
}

/// Candidate moves for `side`: pseudo-legal destinations, without castling
/// moves that start in check or cross an attacked square.
fn candidates(board: &Board, side: Color) -> impl Iterator<Item = (PlacedPiece, Square)> + '_ {
    board.pieces_of(side).flat_map(move |piece| {
        movegen::pseudo_legal_destinations(board, &piece)
            .into_iter()
            .filter(move |&to| {
                !movegen::is_castling_attempt(&piece, to) || castling_is_safe(board, &piece, to)
            })
            .map(move |to| (piece, to))
    })
}

/// Tests if `side` is in check and no move gets it out of check.
pub fn is_checkmate(board: &Board, side: Color) -> bool {
    in_check(board, side)
        && !candidates(board, side).any(|(piece, to)| would_resolve_check(board, &piece, to))
}

/// Tests if `side` is not in check but every move would put it in check.
/// This includes the case where `side` has no moves at all.
pub fn is_stalemate(board: &Board, side: Color) -> bool {
    !in_check(board, side)
        && candidates(board, side).all(|(piece, to)| would_cause_check(board, &piece, to))
}
