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

//! The board: piece placement, move history and raw mutation.
//!
//! # Examples
//!
//! ```
//! use chess_arbiter::{Board, Color, MoveEffects, Role, Square};
//!
//! let mut board = Board::new(8, 8);
//! board.place(Role::Pawn.of(Color::White), Square::new(4, 4))?;
//! board.place(Role::Pawn.of(Color::Black), Square::new(3, 6))?;
//!
//! // Double step opens the en passant window ...
//! board.apply_move(Square::new(3, 6), Square::new(3, 4))?;
//!
//! // ... and the capture removes the pawn beside the destination.
//! let effects = board.apply_move(Square::new(4, 4), Square::new(3, 5))?;
//! assert_eq!(effects, MoveEffects::EN_PASSANT);
//! assert!(board.piece_at(Square::new(3, 4)).is_none());
//! # Ok::<_, chess_arbiter::OutOfBounds>(())
//! ```

use std::fmt::{self, Write as _};

use crate::{
    color::Color,
    errors::{InvalidPromotion, OutOfBounds},
    m::MoveEffects,
    movegen,
    piece::{Piece, PieceId, PlacedPiece},
    role::Role,
    square::Square,
};

/// The most recent move made on a board.
///
/// Only the immediately preceding move is remembered. It is what makes an
/// en passant capture possible.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct LastMove {
    /// Identity of the piece that moved.
    pub piece: PieceId,
    pub from: Square,
    pub to: Square,
}

/// Piece placement on a `width` x `height` grid.
///
/// The board owns every piece. [`Board::apply_move()`] performs moves
/// without any legality checks; see [`legality`](crate::legality) for
/// validation.
///
/// Cloning a board (see [`Board::snapshot()`]) yields a fully independent
/// copy.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Board {
    width: u32,
    height: u32,
    squares: Vec<Option<PlacedPiece>>,
    last_move: Option<LastMove>,
    next_id: u32,
}

impl Board {
    /// Largest number of squares a board may have.
    pub const MAX_SQUARES: u64 = 1 << 20;

    /// Creates an empty board.
    ///
    /// # Panics
    ///
    /// Panics if `width * height` exceeds [`Board::MAX_SQUARES`].
    pub fn new(width: u32, height: u32) -> Board {
        assert!(Board::fits(width, height), "board of {width}x{height} squares is too large");
        Board {
            width,
            height,
            squares: vec![None; width as usize * height as usize],
            last_move: None,
            next_id: 0,
        }
    }

    /// Whether a board with the given extents stays within
    /// [`Board::MAX_SQUARES`].
    pub fn fits(width: u32, height: u32) -> bool {
        u64::from(width)
            .checked_mul(u64::from(height))
            .is_some_and(|squares| squares <= Board::MAX_SQUARES)
    }

    /// The standard 8x8 starting position.
    pub fn standard() -> Board {
        const BACKRANK: [Role; 8] = [
            Role::Rook,
            Role::Knight,
            Role::Bishop,
            Role::Queen,
            Role::King,
            Role::Bishop,
            Role::Knight,
            Role::Rook,
        ];

        let mut board = Board::new(8, 8);
        for color in Color::ALL {
            let backrank = color.fold(0, 7);
            let pawn_rank = color.pawn_rank(8);
            for (x, role) in (0..).zip(BACKRANK) {
                board.put(role.of(color), Square::new(x, backrank), false);
                board.put(Role::Pawn.of(color), Square::new(x, pawn_rank), false);
            }
        }
        board
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Whether the square lies on the board.
    #[inline]
    pub fn contains(&self, square: Square) -> bool {
        square.x < self.width && square.y < self.height
    }

    #[inline]
    fn index(&self, square: Square) -> Option<usize> {
        self.contains(square)
            .then(|| square.y as usize * self.width as usize + square.x as usize)
    }

    fn index_or_err(&self, square: Square) -> Result<usize, OutOfBounds> {
        self.index(square).ok_or(OutOfBounds { square })
    }

    fn fresh_id(&mut self) -> PieceId {
        let id = PieceId(self.next_id);
        self.next_id += 1;
        id
    }

    fn put(&mut self, piece: Piece, square: Square, moved: bool) -> PieceId {
        let id = self.fresh_id();
        if let Some(index) = self.index(square) {
            self.squares[index] = Some(PlacedPiece {
                piece,
                square,
                moved,
                id,
            });
        }
        id
    }

    /// Places a new, unmoved piece, replacing any occupant. Bypasses move
    /// tracking, so it is meant for setting up positions.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfBounds`] if the square is not on the board.
    pub fn place(&mut self, piece: Piece, square: Square) -> Result<PieceId, OutOfBounds> {
        self.index_or_err(square)?;
        Ok(self.put(piece, square, false))
    }

    /// Gets the piece on a square.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfBounds`] if the square is not on the board.
    pub fn get(&self, square: Square) -> Result<Option<PlacedPiece>, OutOfBounds> {
        Ok(self.squares[self.index_or_err(square)?])
    }

    /// Gets the piece on a square, or `None` if the square is empty or off
    /// the board.
    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<PlacedPiece> {
        self.index(square).and_then(|index| self.squares[index])
    }

    /// Whether the square is on the board and occupied.
    #[inline]
    pub fn is_occupied(&self, square: Square) -> bool {
        self.piece_at(square).is_some()
    }

    /// Removes and returns the piece on a square.
    pub fn remove_piece_at(&mut self, square: Square) -> Option<PlacedPiece> {
        self.index(square).and_then(|index| self.squares[index].take())
    }

    /// The move that was made last, if any.
    #[inline]
    pub fn last_move(&self) -> Option<LastMove> {
        self.last_move
    }

    /// Iterates over all pieces, rank by rank.
    pub fn pieces(&self) -> impl Iterator<Item = PlacedPiece> + '_ {
        self.squares.iter().flatten().copied()
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = PlacedPiece> + '_ {
        self.pieces().filter(move |p| p.color() == color)
    }

    pub fn pieces_not_of(&self, color: Color) -> impl Iterator<Item = PlacedPiece> + '_ {
        self.pieces().filter(move |p| p.color() != color)
    }

    /// Finds the king of the given color. If there are several, the first one
    /// in rank order.
    pub fn find_king(&self, color: Color) -> Option<PlacedPiece> {
        self.pieces_of(color).find(|p| p.is(Role::King))
    }

    /// Creates an independent copy for evaluating hypothetical moves.
    #[inline]
    pub fn snapshot(&self) -> Board {
        self.clone()
    }

    /// Tests if any piece of the opposite color could move to the square of
    /// `target`, considering only piece geometry and occupancy.
    pub fn is_attacked(&self, target: &PlacedPiece) -> bool {
        self.is_square_attacked(target.square(), !target.color())
    }

    /// Tests if any piece of color `by` has `square` among its
    /// [pseudo-legal destinations](movegen::pseudo_legal_destinations).
    pub fn is_square_attacked(&self, square: Square, by: Color) -> bool {
        self.pieces_of(by)
            .any(|attacker| movegen::pseudo_legal_destinations(self, &attacker).contains(&square))
    }

    /// Tests that all squares strictly between `from` and `to` are empty.
    ///
    /// The squares must lie on a common file, rank or diagonal. Other
    /// deltas (such as knight jumps) have no path and yield `false`.
    pub fn path_clear(&self, from: Square, to: Square) -> bool {
        let (dx, dy) = from.delta(to);
        if !from.is_aligned(to) {
            return false;
        }

        let (sx, sy) = (dx.signum(), dy.signum());
        let steps = dx.abs().max(dy.abs());
        (1..steps).all(|i| {
            let x = i64::from(from.x) + sx * i;
            let y = i64::from(from.y) + sy * i;
            match (u32::try_from(x), u32::try_from(y)) {
                (Ok(x), Ok(y)) => !self.is_occupied(Square::new(x, y)),
                _ => true,
            }
        })
    }

    /// If a pawn on `from` moving to `to` would capture en passant, returns
    /// the square of the captured pawn.
    ///
    /// The captured pawn must be the piece that made the last move, and that
    /// move must have been a two-square advance.
    pub(crate) fn en_passant_capture(&self, pawn: &PlacedPiece, to: Square) -> Option<Square> {
        let from = pawn.square();
        if !pawn.is(Role::Pawn) || from.x.abs_diff(to.x) != 1 || self.is_occupied(to) {
            return None;
        }
        if from.offset(0, pawn.color().forward())?.y != to.y {
            return None;
        }

        let beside = Square::new(to.x, from.y);
        let victim = self.piece_at(beside)?;
        let last = self.last_move?;
        (victim.is(Role::Pawn)
            && victim.color() != pawn.color()
            && victim.id() == last.piece
            && last.to == beside
            && last.from.y.abs_diff(beside.y) == 2)
            .then_some(beside)
    }

    /// Scans from `king` along its rank in direction `dir` and returns the
    /// first piece found, if it is a rook of the same color.
    pub(crate) fn castling_rook(&self, king: &PlacedPiece, dir: i32) -> Option<PlacedPiece> {
        let mut square = king.square();
        loop {
            square = square.offset(dir, 0)?;
            if !self.contains(square) {
                return None;
            }
            if let Some(piece) = self.piece_at(square) {
                return (piece.is(Role::Rook) && piece.color() == king.color()).then_some(piece);
            }
        }
    }

    /// Moves the occupant of `from` to `to` without checking legality.
    ///
    /// Any piece on `to` is captured. The moved piece is marked as moved and
    /// the move is remembered as the [last move](Board::last_move). Special
    /// moves are completed:
    ///
    /// * A pawn moving diagonally onto an empty square inside the en passant
    ///   window removes the pawn beside its destination.
    /// * A king moving two squares along its rank takes the rook it is
    ///   castling with to the square it crossed.
    ///
    /// An empty origin leaves the board unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfBounds`] if either square is not on the board.
    pub fn apply_move(&mut self, from: Square, to: Square) -> Result<MoveEffects, OutOfBounds> {
        let from_index = self.index_or_err(from)?;
        let to_index = self.index_or_err(to)?;

        let mut moving = match self.squares[from_index] {
            Some(piece) if from != to => piece,
            _ => return Ok(MoveEffects::empty()),
        };

        let mut effects = MoveEffects::empty();

        match moving.role() {
            Role::Pawn => {
                if let Some(captured) = self.en_passant_capture(&moving, to) {
                    self.remove_piece_at(captured);
                    effects |= MoveEffects::EN_PASSANT;
                }
                if from.y.abs_diff(to.y) == 2 {
                    effects |= MoveEffects::DOUBLE_STEP;
                }
                if to.y == moving.color().last_rank(self.height) {
                    effects |= MoveEffects::PROMOTION;
                }
            }
            Role::King if from.y == to.y && from.x.abs_diff(to.x) == 2 => {
                let dir = if to.x > from.x { 1 } else { -1 };
                if let Some(mut rook) = self.castling_rook(&moving, dir) {
                    // The crossed square lies between two on-board squares.
                    let rook_to = Square::new(from.x.wrapping_add_signed(dir), from.y);
                    self.remove_piece_at(rook.square());
                    rook.square = rook_to;
                    rook.moved = true;
                    if let Some(index) = self.index(rook_to) {
                        self.squares[index] = Some(rook);
                    }
                    effects |= MoveEffects::CASTLE;
                }
            }
            _ => (),
        }

        if self.squares[to_index].is_some() {
            effects |= MoveEffects::CAPTURE;
        }

        self.squares[from_index] = None;
        moving.square = to;
        moving.moved = true;
        self.squares[to_index] = Some(moving);

        self.last_move = Some(LastMove {
            piece: moving.id(),
            from,
            to,
        });

        Ok(effects)
    }

    /// Whether the square holds a pawn standing on its last rank.
    pub fn can_promote(&self, square: Square) -> bool {
        self.piece_at(square).is_some_and(|piece| {
            piece.is(Role::Pawn) && square.y == piece.color().last_rank(self.height)
        })
    }

    /// Replaces the pawn on `square` with a new piece of the given kind. The
    /// new piece counts as moved and gets a fresh identity.
    ///
    /// The pawn does not need to stand on its last rank, see
    /// [`Board::can_promote()`].
    ///
    /// # Errors
    ///
    /// Returns [`InvalidPromotion`] if the square does not hold a pawn, or if
    /// `role` is not a queen, rook, bishop or knight. The board is unchanged
    /// in that case.
    pub fn promote(&mut self, square: Square, role: Role) -> Result<PieceId, InvalidPromotion> {
        let pawn = match self.piece_at(square) {
            Some(piece) if piece.is(Role::Pawn) => piece,
            _ => return Err(InvalidPromotion::NotAPawn),
        };
        if !role.is_promotion_target() {
            return Err(InvalidPromotion::InvalidRole);
        }

        Ok(self.put(role.of(pawn.color()), square, true))
    }
}

impl Default for Board {
    /// An empty 8x8 board.
    fn default() -> Board {
        Board::new(8, 8)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in (0..self.height).rev() {
            for x in 0..self.width {
                f.write_char(
                    self.piece_at(Square::new(x, y))
                        .map_or('.', |piece| piece.piece().char()),
                )?;
                f.write_char(if x + 1 < self.width { ' ' } else { '\n' })?;
            }
        }
        Ok(())
    }
}
