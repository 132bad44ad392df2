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

//! A library for validating chess moves on boards of any size.
//!
//! The board owns its pieces and remembers which of them have moved and
//! what the last move was, so that castling and en passant follow the usual
//! rules. Validation never modifies the board: hypothetical moves are tried
//! on snapshots.
//!
//! # Examples
//!
//! Validate and play moves:
//!
//! ```
//! use chess_arbiter::{legality, Board, Color, MoveError, Square};
//!
//! let mut board = Board::standard();
//!
//! // 1. e4
//! let (e2, e4) = ("e2".parse::<Square>()?, "e4".parse::<Square>()?);
//! legality::validate(&board, Color::White, e2, e4)?;
//! board.apply_move(e2, e4)?;
//!
//! // The bishop on f1 is free now.
//! let bishop = board.piece_at("f1".parse()?).expect("bishop");
//! assert_eq!(legality::legal_moves(&board, &bishop).len(), 5);
//! # Ok::<_, Box<dyn std::error::Error>>(())
//! ```
//!
//! Detect game end conditions:
//!
//! ```
//! use chess_arbiter::{check, Board, Color};
//!
//! let board = Board::standard();
//! assert!(!check::in_check(&board, Color::White));
//! assert!(!check::is_checkmate(&board, Color::White));
//! assert!(!check::is_stalemate(&board, Color::White));
//! ```
//!
//! Or let [`Game`] keep track of the side to move and the outcome.
//!
//! Boards can be set up from the piece placement part of [FEN](fen).
//!
//! # Feature flags
//!
//! * `serde`: Implements [`serde::Serialize`](https://docs.rs/serde/1/serde/trait.Serialize.html)
//!   and [`serde::Deserialize`](https://docs.rs/serde/1/serde/trait.Deserialize.html) for
//!   [`Square`] (in algebraic notation), [`Color`] and [`Role`].
//! * `arbitrary`: Implements
//!   [`arbitrary::Arbitrary`](https://docs.rs/arbitrary/1/arbitrary/trait.Arbitrary.html)
//!   for fuzzing.

#![doc(html_root_url = "https://docs.rs/chess-arbiter/0.1.0")]
#![forbid(unsafe_code)]
#![warn(missing_debug_implementations)]
#![cfg_attr(docs_rs, feature(doc_auto_cfg))]

mod board;
mod color;
mod errors;
mod game;
mod m;
mod piece;
mod role;
mod square;

pub mod check;
pub mod fen;
pub mod legality;
pub mod movegen;
pub mod perft;

pub use board::{Board, LastMove};
pub use color::{Color, ParseColorError};
pub use errors::{InvalidPromotion, MoveError, OutOfBounds};
pub use game::{Game, Outcome, PlayError, Status};
pub use m::{Move, MoveEffects, ParseMoveError};
pub use piece::{Piece, PieceId, PlacedPiece};
pub use role::{ParseRoleError, Role};
pub use square::{ParseSquareError, Square};
