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

//! Piece movement rules.
//!
//! Everything here looks only at piece geometry and board occupancy. Whether
//! a move would expose the king is decided in [`legality`](crate::legality).

use arrayvec::ArrayVec;

use crate::{board::Board, piece::PlacedPiece, role::Role, square::Square};

const ORTHOGONAL: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const DIAGONAL: [(i32, i32); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
const KING_STEPS: [(i32, i32); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];
const KNIGHT_STEPS: [(i32, i32); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

/// Tests if `piece` may land on `to`: the square is empty or holds an
/// opponent's piece.
fn can_land(board: &Board, piece: &PlacedPiece, to: Square) -> bool {
    board
        .piece_at(to)
        .is_none_or(|occupant| occupant.color() != piece.color())
}

fn is_enemy(board: &Board, piece: &PlacedPiece, to: Square) -> bool {
    board
        .piece_at(to)
        .is_some_and(|occupant| occupant.color() != piece.color())
}

trait Stepper {
    const STEPS: &'static [(i32, i32)];

    fn targets(board: &Board, from: Square) -> ArrayVec<Square, 8> {
        Self::STEPS
            .iter()
            .filter_map(|&(dx, dy)| from.offset(dx, dy))
            .filter(|&to| board.contains(to))
            .collect()
    }

    fn gen_destinations(board: &Board, piece: &PlacedPiece, destinations: &mut Vec<Square>) {
        destinations.extend(
            Self::targets(board, piece.square())
                .into_iter()
                .filter(|&to| can_land(board, piece, to)),
        );
    }

    fn reaches(from: Square, to: Square) -> bool {
        let (dx, dy) = from.delta(to);
        Self::STEPS
            .iter()
            .any(|&(sx, sy)| i64::from(sx) == dx && i64::from(sy) == dy)
    }
}

trait Slider {
    const DIRECTIONS: &'static [(i32, i32)];

    fn gen_destinations(board: &Board, piece: &PlacedPiece, destinations: &mut Vec<Square>) {
        for &(dx, dy) in Self::DIRECTIONS {
            let mut to = piece.square();
            while let Some(next) = to.offset(dx, dy).filter(|&sq| board.contains(sq)) {
                to = next;
                match board.piece_at(to) {
                    None => destinations.push(to),
                    Some(occupant) => {
                        if occupant.color() != piece.color() {
                            destinations.push(to);
                        }
                        break;
                    }
                }
            }
        }
    }

    /// Shape only. Blockers are ignored.
    fn reaches(from: Square, to: Square) -> bool {
        if from == to || !from.is_aligned(to) {
            return false;
        }
        let (dx, dy) = from.delta(to);
        Self::DIRECTIONS
            .iter()
            .any(|&(sx, sy)| i64::from(sx) == dx.signum() && i64::from(sy) == dy.signum())
    }
}

struct KingTag {}
struct KnightTag {}
struct BishopTag {}
struct RookTag {}
struct QueenTag {}

impl Stepper for KingTag {
    const STEPS: &'static [(i32, i32)] = &KING_STEPS;
}

impl Stepper for KnightTag {
    const STEPS: &'static [(i32, i32)] = &KNIGHT_STEPS;
}

impl Slider for BishopTag {
    const DIRECTIONS: &'static [(i32, i32)] = &DIAGONAL;
}

impl Slider for RookTag {
    const DIRECTIONS: &'static [(i32, i32)] = &ORTHOGONAL;
}

impl Slider for QueenTag {
    const DIRECTIONS: &'static [(i32, i32)] = &KING_STEPS;
}

/// Squares a piece could move to, considering piece geometry, blockers and
/// the special moves the current board allows (double step, en passant and
/// castling). Squares held by friendly pieces are never included.
///
/// This does not consider whether the move would leave the own king in
/// check.
///
/// # Examples
///
/// ```
/// use chess_arbiter::{movegen, Board, Square};
///
/// let board = Board::standard();
/// let knight = board.piece_at(Square::new(1, 0)).expect("knight on b1");
///
/// let mut destinations = movegen::pseudo_legal_destinations(&board, &knight);
/// destinations.sort();
/// assert_eq!(destinations, [Square::new(0, 2), Square::new(2, 2)]);
/// ```
pub fn pseudo_legal_destinations(board: &Board, piece: &PlacedPiece) -> Vec<Square> {
    let mut destinations = Vec::new();
    match piece.role() {
        Role::Pawn => gen_pawn_destinations(board, piece, &mut destinations),
        Role::Knight => KnightTag::gen_destinations(board, piece, &mut destinations),
        Role::Bishop => BishopTag::gen_destinations(board, piece, &mut destinations),
        Role::Rook => RookTag::gen_destinations(board, piece, &mut destinations),
        Role::Queen => QueenTag::gen_destinations(board, piece, &mut destinations),
        Role::King => {
            KingTag::gen_destinations(board, piece, &mut destinations);
            gen_castling_destinations(board, piece, &mut destinations);
        }
    }
    destinations
}

/// Tests if the piece's movement rules allow it to go to `to`.
///
/// For sliders and double steps only the shape of the move is checked. Use
/// [`Board::path_clear()`] for the squares in between. Pawn moves depend on
/// the occupancy of the destination, and castling requires an unmoved king
/// with an unmoved rook as the first piece on that side.
///
/// The color of a piece on `to` is not considered, except that pawns
/// capture only opponents.
pub fn is_geometrically_valid(board: &Board, piece: &PlacedPiece, to: Square) -> bool {
    let from = piece.square();
    if from == to || !board.contains(to) {
        return false;
    }

    match piece.role() {
        Role::Pawn => pawn_reaches(board, piece, to),
        Role::Knight => KnightTag::reaches(from, to),
        Role::Bishop => BishopTag::reaches(from, to),
        Role::Rook => RookTag::reaches(from, to),
        Role::Queen => QueenTag::reaches(from, to),
        Role::King => KingTag::reaches(from, to) || can_castle(board, piece, to),
    }
}

/// Tests if moving `piece` to `to` has the shape of a castling move: a king
/// going two squares along its rank.
pub(crate) fn is_castling_attempt(piece: &PlacedPiece, to: Square) -> bool {
    let from = piece.square();
    piece.is(Role::King) && from.y == to.y && from.x.abs_diff(to.x) == 2
}

/// The rook the king would castle with when going to `to`, regardless of
/// whether either piece has moved.
pub(crate) fn castling_partner(
    board: &Board,
    king: &PlacedPiece,
    to: Square,
) -> Option<PlacedPiece> {
    if !is_castling_attempt(king, to) {
        return None;
    }
    board.castling_rook(king, if to.x > king.square().x { 1 } else { -1 })
}

fn can_castle(board: &Board, king: &PlacedPiece, to: Square) -> bool {
    !king.has_moved()
        && castling_partner(board, king, to).is_some_and(|rook| {
            !rook.has_moved() && rook.square().x.abs_diff(king.square().x) >= 3
        })
}

fn gen_castling_destinations(board: &Board, king: &PlacedPiece, destinations: &mut Vec<Square>) {
    if king.has_moved() {
        return;
    }
    for dx in [-2, 2] {
        if let Some(to) = king.square().offset(dx, 0) {
            if board.contains(to) && can_castle(board, king, to) {
                destinations.push(to);
            }
        }
    }
}

fn can_double_step(board: &Board, pawn: &PlacedPiece) -> bool {
    !pawn.has_moved() && pawn.square().y == pawn.color().pawn_rank(board.height())
}

fn pawn_reaches(board: &Board, pawn: &PlacedPiece, to: Square) -> bool {
    let (dx, dy) = pawn.square().delta(to);
    let forward = i64::from(pawn.color().forward());

    if dx == 0 && dy == forward {
        !board.is_occupied(to)
    } else if dx == 0 && dy == 2 * forward {
        !board.is_occupied(to) && can_double_step(board, pawn)
    } else if dx.abs() == 1 && dy == forward {
        is_enemy(board, pawn, to) || board.en_passant_capture(pawn, to).is_some()
    } else {
        false
    }
}

fn gen_pawn_destinations(board: &Board, pawn: &PlacedPiece, destinations: &mut Vec<Square>) {
    let from = pawn.square();
    let forward = pawn.color().forward();
    let on_board = |sq: &Square| board.contains(*sq);

    if let Some(ahead) = from.offset(0, forward).filter(on_board) {
        if !board.is_occupied(ahead) {
            destinations.push(ahead);

            if can_double_step(board, pawn) {
                if let Some(two_ahead) = ahead.offset(0, forward).filter(on_board) {
                    if !board.is_occupied(two_ahead) {
                        destinations.push(two_ahead);
                    }
                }
            }
        }
    }

    for dx in [-1, 1] {
        if let Some(to) = from.offset(dx, forward).filter(on_board) {
            if is_enemy(board, pawn, to) || board.en_passant_capture(pawn, to).is_some() {
                destinations.push(to);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    fn sq(s: &str) -> Square {
        s.parse().expect("valid square")
    }

    fn sorted(mut squares: Vec<Square>) -> Vec<Square> {
        squares.sort();
        squares
    }

    fn squares(names: &[&str]) -> Vec<Square> {
        sorted(names.iter().map(|name| sq(name)).collect())
    }

    fn destinations_of(board: &Board, square: &str) -> Vec<Square> {
        let piece = board.piece_at(sq(square)).expect("piece");
        sorted(pseudo_legal_destinations(board, &piece))
    }

    #[test]
    fn test_starting_position() {
        let board = Board::standard();
        let total: usize = board
            .pieces_of(Color::White)
            .map(|piece| pseudo_legal_destinations(&board, &piece).len())
            .sum();
        assert_eq!(total, 20);

        assert_eq!(destinations_of(&board, "e2"), squares(&["e3", "e4"]));
        assert_eq!(destinations_of(&board, "g8"), squares(&["f6", "h6"]));
        assert!(destinations_of(&board, "a1").is_empty());
        assert!(destinations_of(&board, "e1").is_empty());
    }

    #[test]
    fn test_sliders_stop_at_blockers() {
        let mut board = Board::new(8, 8);
        board.place(Color::White.queen(), sq("d4")).expect("on board");
        assert_eq!(destinations_of(&board, "d4").len(), 27);

        board.place(Color::White.pawn(), sq("d6")).expect("on board");
        board.place(Color::Black.pawn(), sq("f6")).expect("on board");
        let destinations = destinations_of(&board, "d4");
        assert!(destinations.contains(&sq("d5")));
        assert!(!destinations.contains(&sq("d6")));
        assert!(!destinations.contains(&sq("d7")));
        assert!(destinations.contains(&sq("f6")));
        assert!(!destinations.contains(&sq("g7")));
    }

    #[test]
    fn test_steppers_in_corner() {
        let mut board = Board::new(8, 8);
        board.place(Color::White.knight(), sq("a1")).expect("on board");
        board.place(Color::Black.king(), sq("h8")).expect("on board");
        assert_eq!(destinations_of(&board, "a1"), squares(&["b3", "c2"]));
        assert_eq!(destinations_of(&board, "h8"), squares(&["g8", "g7", "h7"]));
    }

    #[test]
    fn test_pawn_moves() {
        let mut board = Board::new(8, 8);
        board.place(Color::White.pawn(), sq("b2")).expect("on board");
        board.place(Color::Black.knight(), sq("c3")).expect("on board");
        board.place(Color::White.rook(), sq("a3")).expect("on board");
        assert_eq!(destinations_of(&board, "b2"), squares(&["b3", "b4", "c3"]));

        board.place(Color::Black.pawn(), sq("b4")).expect("on board");
        assert_eq!(destinations_of(&board, "b2"), squares(&["b3", "c3"]));

        board.place(Color::Black.pawn(), sq("b3")).expect("on board");
        assert_eq!(destinations_of(&board, "b2"), squares(&["c3"]));
    }

    #[test]
    fn test_pawn_double_step_needs_start_rank() {
        let mut board = Board::new(8, 8);
        board.place(Color::White.pawn(), sq("e3")).expect("on board");
        board.place(Color::Black.pawn(), sq("e7")).expect("on board");
        assert_eq!(destinations_of(&board, "e3"), squares(&["e4"]));
        assert_eq!(destinations_of(&board, "e7"), squares(&["e6", "e5"]));

        let pawn = board.piece_at(sq("e3")).expect("pawn");
        assert!(!is_geometrically_valid(&board, &pawn, sq("e5")));
    }

    #[test]
    fn test_en_passant_destination() {
        let mut board = Board::new(8, 8);
        board.place(Color::White.pawn(), sq("e5")).expect("on board");
        board.place(Color::Black.pawn(), sq("d7")).expect("on board");
        board.place(Color::Black.pawn(), sq("f6")).expect("on board");
        assert_eq!(destinations_of(&board, "e5"), squares(&["e6", "f6"]));

        board.apply_move(sq("d7"), sq("d5")).expect("on board");
        assert_eq!(destinations_of(&board, "e5"), squares(&["d6", "e6", "f6"]));

        let pawn = board.piece_at(sq("e5")).expect("pawn");
        assert!(is_geometrically_valid(&board, &pawn, sq("d6")));
    }

    #[test]
    fn test_en_passant_needs_the_pawn_that_moved() {
        let mut board = Board::new(8, 8);
        board.place(Color::White.pawn(), sq("e5")).expect("on board");
        board.place(Color::Black.pawn(), sq("d7")).expect("on board");
        board.apply_move(sq("d7"), sq("d5")).expect("on board");
        board.place(Color::Black.pawn(), sq("d5")).expect("on board");

        assert_eq!(destinations_of(&board, "e5"), squares(&["e6"]));
        let pawn = board.piece_at(sq("e5")).expect("pawn");
        assert!(!is_geometrically_valid(&board, &pawn, sq("d6")));
    }

    #[test]
    fn test_castling_destinations() {
        let mut board = Board::new(8, 8);
        board.place(Color::White.king(), sq("e1")).expect("on board");
        board.place(Color::White.rook(), sq("a1")).expect("on board");
        board.place(Color::White.rook(), sq("h1")).expect("on board");
        let destinations = destinations_of(&board, "e1");
        assert!(destinations.contains(&sq("c1")));
        assert!(destinations.contains(&sq("g1")));

        board.place(Color::White.knight(), sq("b1")).expect("on board");
        let destinations = destinations_of(&board, "e1");
        assert!(!destinations.contains(&sq("c1")));
        assert!(destinations.contains(&sq("g1")));

        // An enemy rook is no castling partner.
        board.place(Color::Black.rook(), sq("h1")).expect("on board");
        assert!(!destinations_of(&board, "e1").contains(&sq("g1")));
    }

    #[test]
    fn test_castling_requires_unmoved_pieces() {
        let mut board = Board::new(8, 8);
        board.place(Color::White.king(), sq("e1")).expect("on board");
        board.place(Color::White.rook(), sq("h1")).expect("on board");
        board.apply_move(sq("h1"), sq("h2")).expect("on board");
        board.apply_move(sq("h2"), sq("h1")).expect("on board");

        let king = board.piece_at(sq("e1")).expect("king");
        assert!(!is_geometrically_valid(&board, &king, sq("g1")));
        assert!(castling_partner(&board, &king, sq("g1")).is_some());
    }

    #[test]
    fn test_geometry_ignores_blockers() {
        let board = Board::standard();
        let rook = board.piece_at(sq("a1")).expect("rook");
        assert!(is_geometrically_valid(&board, &rook, sq("a5")));
        assert!(!is_geometrically_valid(&board, &rook, sq("b2")));
        assert!(!is_geometrically_valid(&board, &rook, sq("a1")));

        let bishop = board.piece_at(sq("c1")).expect("bishop");
        assert!(is_geometrically_valid(&board, &bishop, sq("h6")));
        assert!(!is_geometrically_valid(&board, &bishop, sq("c3")));

        let knight = board.piece_at(sq("g1")).expect("knight");
        assert!(is_geometrically_valid(&board, &knight, sq("f3")));
        assert!(!is_geometrically_valid(&board, &knight, sq("g3")));

        let pawn = board.piece_at(sq("d2")).expect("pawn");
        assert!(is_geometrically_valid(&board, &pawn, sq("d4")));
        assert!(!is_geometrically_valid(&board, &pawn, sq("e3")));
        assert!(!is_geometrically_valid(&board, &pawn, sq("d1")));
    }

    #[test]
    fn test_small_board() {
        let mut board = Board::new(3, 3);
        board.place(Color::White.pawn(), sq("b2")).expect("on board");
        board.place(Color::Black.pawn(), sq("b3")).expect("on board");
        assert!(destinations_of(&board, "b2").is_empty());
        assert!(destinations_of(&board, "b3").is_empty());
    }
}
