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

//! Parse and write the piece placement field of FEN.
//!
//! Ranks are listed from the top rank (highest y) down, separated by `/`.
//! Pieces are given by their letter, uppercase for White, and runs of empty
//! squares by their decimal length. Runs may have more than one digit, so
//! boards wider than 9 files can be described.
//!
//! # Examples
//!
//! ```
//! use chess_arbiter::{Board, Square};
//!
//! let board = Board::from_board_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR")?;
//! assert_eq!(board.board_fen(), Board::standard().board_fen());
//!
//! let wide: Board = "12/k10K".parse()?;
//! assert_eq!((wide.width(), wide.height()), (12, 2));
//! assert!(wide.piece_at(Square::new(11, 0)).is_some());
//! assert_eq!(wide.board_fen(), "12/k10K");
//! # Ok::<_, chess_arbiter::fen::ParseFenError>(())
//! ```

use std::{error::Error, fmt, str::FromStr};

use crate::{board::Board, piece::Piece, square::Square};

/// Error when parsing an invalid board FEN.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseFenError {
    /// The FEN or one of its ranks is empty.
    Empty,
    /// A rank does not have as many files as the first rank.
    RankLength { rank: u32 },
    /// Unknown piece letter.
    InvalidPiece { ch: char },
    /// A run of empty squares is zero, has a leading zero, or is too long.
    InvalidEmptyRun,
    /// The board would have more than [`Board::MAX_SQUARES`] squares.
    TooLarge,
}

impl fmt::Display for ParseFenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseFenError::Empty => f.write_str("empty board fen or rank"),
            ParseFenError::RankLength { rank } => {
                write!(f, "rank {} has a different length than the top rank", rank + 1)
            }
            ParseFenError::InvalidPiece { ch } => write!(f, "invalid piece in board fen: {ch:?}"),
            ParseFenError::InvalidEmptyRun => f.write_str("invalid run of empty squares"),
            ParseFenError::TooLarge => f.write_str("board fen describes too many squares"),
        }
    }
}

impl Error for ParseFenError {}

/// Parses one rank into its pieces by file, returning the number of files.
fn parse_rank(
    rank: &[u8],
    y: u32,
    pieces: &mut Vec<(Piece, Square)>,
) -> Result<u32, ParseFenError> {
    if rank.is_empty() {
        return Err(ParseFenError::Empty);
    }

    let mut x: u32 = 0;
    let mut i = 0;
    while i < rank.len() {
        let ch = rank[i];
        if ch.is_ascii_digit() {
            let len = rank[i..].iter().take_while(|c| c.is_ascii_digit()).count();
            let digits = &rank[i..i + len];
            if digits[0] == b'0' {
                return Err(ParseFenError::InvalidEmptyRun);
            }
            let run: u32 = btoi::btou(digits).map_err(|_| ParseFenError::InvalidEmptyRun)?;
            x = x.checked_add(run).ok_or(ParseFenError::InvalidEmptyRun)?;
            i += len;
        } else {
            let piece = Piece::from_char(char::from(ch))
                .ok_or(ParseFenError::InvalidPiece { ch: char::from(ch) })?;
            pieces.push((piece, Square::new(x, y)));
            x = x.checked_add(1).ok_or(ParseFenError::InvalidEmptyRun)?;
            i += 1;
        }
    }
    Ok(x)
}

impl Board {
    /// Parses the piece placement field of FEN. The board extents follow
    /// from the number of ranks and the length of the top rank. All pieces
    /// are unmoved and there is no last move.
    ///
    /// # Errors
    ///
    /// Returns [`ParseFenError`] if the text is empty, contains unknown
    /// letters or malformed runs, the ranks differ in length, or the board
    /// would exceed [`Board::MAX_SQUARES`].
    pub fn from_board_fen(fen: &str) -> Result<Board, ParseFenError> {
        Board::from_ascii_board_fen(fen.as_bytes())
    }

    pub fn from_ascii_board_fen(fen: &[u8]) -> Result<Board, ParseFenError> {
        if fen.is_empty() {
            return Err(ParseFenError::Empty);
        }

        let ranks: Vec<&[u8]> = fen.split(|&ch| ch == b'/').collect();
        let height = u32::try_from(ranks.len()).map_err(|_| ParseFenError::Empty)?;

        let mut pieces = Vec::new();
        let mut width = None;
        for (y, rank) in (0..height).rev().zip(ranks) {
            let len = parse_rank(rank, y, &mut pieces)?;
            match width {
                None => width = Some(len),
                Some(width) if width != len => return Err(ParseFenError::RankLength { rank: y }),
                Some(_) => (),
            }
        }

        let width = width.unwrap_or(0);
        if !Board::fits(width, height) {
            return Err(ParseFenError::TooLarge);
        }

        let mut board = Board::new(width, height);
        for (piece, square) in pieces {
            board
                .place(piece, square)
                .map_err(|_| ParseFenError::RankLength { rank: square.y })?;
        }
        Ok(board)
    }

    /// Writes the piece placement field of FEN.
    pub fn board_fen(&self) -> String {
        let mut fen = String::with_capacity(self.width() as usize * self.height() as usize);

        for y in (0..self.height()).rev() {
            let mut empty: u32 = 0;

            for x in 0..self.width() {
                match self.piece_at(Square::new(x, y)) {
                    Some(piece) => {
                        if empty > 0 {
                            fen.push_str(&empty.to_string());
                            empty = 0;
                        }
                        fen.push(piece.piece().char());
                    }
                    None => empty += 1,
                }
            }

            if empty > 0 {
                fen.push_str(&empty.to_string());
            }
            if y > 0 {
                fen.push('/');
            }
        }

        fen
    }
}

impl FromStr for Board {
    type Err = ParseFenError;

    fn from_str(fen: &str) -> Result<Board, ParseFenError> {
        Board::from_board_fen(fen)
    }
}
