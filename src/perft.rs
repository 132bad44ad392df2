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

//! Count legal move paths.
//!
//! # Examples
//!
//! ```
//! use chess_arbiter::{perft::perft, Board, Color};
//!
//! let board = Board::standard();
//! assert_eq!(perft(&board, Color::White, 1), 20);
//! assert_eq!(perft(&board, Color::White, 2), 400);
//! ```

use crate::{board::Board, color::Color, legality, m::Move, role::Role};

/// Plays `m` on a copy of the board. A pawn reaching its last rank gives one
/// child per promotion role.
fn children(board: &Board, m: Move) -> Vec<Board> {
    let mut child = board.snapshot();
    if child.apply_move(m.from, m.to).is_err() {
        return Vec::new();
    }

    if child.can_promote(m.to) {
        Role::PROMOTIONS
            .iter()
            .filter_map(|&role| {
                let mut promoted = child.snapshot();
                promoted.promote(m.to, role).ok().map(|_| promoted)
            })
            .collect()
    } else {
        vec![child]
    }
}

/// Counts legal move paths of a given length, with `side` to move.
///
/// Every promotion counts once for each of queen, rook, bishop and knight.
/// Paths ending in mate or stalemate before `depth` are not counted. Useful
/// for comparing, testing and debugging move generation correctness and
/// performance.
pub fn perft(board: &Board, side: Color, depth: u8) -> u64 {
    if depth < 1 {
        return 1;
    }

    legality::legal_moves_of(board, side)
        .into_iter()
        .flat_map(|m| children(board, m))
        .map(|child| perft(&child, !side, depth - 1))
        .sum()
}

/// Like [`perft()`], but reports the count below each legal move.
pub fn divide(board: &Board, side: Color, depth: u8) -> Vec<(Move, u64)> {
    if depth < 1 {
        return Vec::new();
    }

    legality::legal_moves_of(board, side)
        .into_iter()
        .map(|m| {
            let nodes: u64 = children(board, m)
                .iter()
                .map(|child| perft(child, !side, depth - 1))
                .sum();
            (m, nodes)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_promotions_count_four_times() {
        let board = Board::from_board_fen("8/P6k/8/8/8/8/8/K7").expect("valid fen");
        // a7-a8 with four roles plus three king moves.
        assert_eq!(perft(&board, Color::White, 1), 7);
    }

    #[test]
    fn test_divide_sums_to_perft() {
        let board = Board::standard();
        let divided = divide(&board, Color::White, 2);
        assert_eq!(divided.len(), 20);
        assert!(divided.iter().all(|&(_, nodes)| nodes == 20));
        assert_eq!(divided.iter().map(|&(_, nodes)| nodes).sum::<u64>(), 400);
    }

    #[test]
    fn test_depth_zero() {
        assert_eq!(perft(&Board::standard(), Color::Black, 0), 1);
        assert!(divide(&Board::standard(), Color::Black, 0).is_empty());
    }
}
