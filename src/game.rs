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

//! A game of chess: a board and the side to move.
//!
//! # Examples
//!
//! ```
//! use chess_arbiter::{Color, Game, Outcome, Square, Status};
//!
//! let mut game = Game::new();
//!
//! for m in ["f2f3", "e7e5", "g2g4", "d8h4"] {
//!     let m: chess_arbiter::Move = m.parse()?;
//!     game.play(m.from, m.to, None)?;
//! }
//!
//! assert_eq!(game.status(), Status::Checkmate);
//! assert_eq!(game.outcome(), Some(Outcome::Decisive { winner: Color::Black }));
//! # Ok::<_, Box<dyn std::error::Error>>(())
//! ```

use std::{error::Error, fmt};

use tracing::{debug, info, trace};

use crate::{
    board::Board,
    check,
    color::Color,
    errors::{InvalidPromotion, MoveError},
    legality,
    m::MoveEffects,
    role::Role,
    square::Square,
};

/// Outcome of a game.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    Decisive { winner: Color },
    Draw,
}

impl Outcome {
    pub fn winner(self) -> Option<Color> {
        match self {
            Outcome::Decisive { winner } => Some(winner),
            Outcome::Draw => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match *self {
            Outcome::Decisive {
                winner: Color::White,
            } => "1-0",
            Outcome::Decisive {
                winner: Color::Black,
            } => "0-1",
            Outcome::Draw => "1/2-1/2",
        })
    }
}

/// State of the side to move.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Status {
    Ongoing,
    Check,
    Checkmate,
    Stalemate,
}

/// Error when trying to play a move.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PlayError {
    /// The move was rejected by [`legality::validate()`].
    Illegal(MoveError),
    /// The requested promotion role is not allowed.
    Promotion(InvalidPromotion),
    /// The game has already ended.
    GameOver(Outcome),
}

impl fmt::Display for PlayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayError::Illegal(err) => write!(f, "illegal move: {err}"),
            PlayError::Promotion(err) => write!(f, "invalid promotion: {err}"),
            PlayError::GameOver(outcome) => write!(f, "game is over ({outcome})"),
        }
    }
}

impl Error for PlayError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            PlayError::Illegal(err) => Some(err),
            PlayError::Promotion(err) => Some(err),
            PlayError::GameOver(_) => None,
        }
    }
}

impl From<MoveError> for PlayError {
    fn from(err: MoveError) -> PlayError {
        PlayError::Illegal(err)
    }
}

impl From<InvalidPromotion> for PlayError {
    fn from(err: InvalidPromotion) -> PlayError {
        PlayError::Promotion(err)
    }
}

/// A board with the side to move. Only legal moves can be played.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Game {
    board: Board,
    turn: Color,
}

impl Default for Game {
    fn default() -> Game {
        Game::new()
    }
}

impl Game {
    /// The standard starting position with White to move.
    pub fn new() -> Game {
        Game::from_board(Board::standard(), Color::White)
    }

    pub fn from_board(board: Board, turn: Color) -> Game {
        Game { board, turn }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn into_board(self) -> Board {
        self.board
    }

    /// Legal destinations of the piece on `from`, if it belongs to the side
    /// to move.
    pub fn legal_moves(&self, from: Square) -> Vec<Square> {
        self.board
            .piece_at(from)
            .filter(|piece| piece.color() == self.turn)
            .map_or_else(Vec::new, |piece| legality::legal_moves(&self.board, &piece))
    }

    pub fn is_legal(&self, from: Square, to: Square) -> bool {
        legality::is_legal(&self.board, self.turn, from, to)
    }

    pub fn status(&self) -> Status {
        if check::is_checkmate(&self.board, self.turn) {
            Status::Checkmate
        } else if check::in_check(&self.board, self.turn) {
            Status::Check
        } else if check::is_stalemate(&self.board, self.turn) {
            Status::Stalemate
        } else {
            Status::Ongoing
        }
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self.status() {
            Status::Checkmate => Some(Outcome::Decisive { winner: !self.turn }),
            Status::Stalemate => Some(Outcome::Draw),
            Status::Ongoing | Status::Check => None,
        }
    }

    /// Plays a move for the side to move.
    ///
    /// A pawn reaching its last rank is promoted to `promotion`, or to a
    /// queen if none is given. `promotion` is ignored for other moves.
    ///
    /// # Errors
    ///
    /// Returns [`PlayError`] if the game is over, the promotion role is not
    /// allowed or the move is illegal. The game is unchanged in that case.
    pub fn play(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<Role>,
    ) -> Result<MoveEffects, PlayError> {
        if let Some(outcome) = self.outcome() {
            trace!(%from, %to, %outcome, "move after game end");
            return Err(PlayError::GameOver(outcome));
        }

        if promotion.is_some_and(|role| !role.is_promotion_target()) {
            trace!(%from, %to, ?promotion, "invalid promotion role");
            return Err(PlayError::Promotion(InvalidPromotion::InvalidRole));
        }

        if let Err(err) = legality::validate(&self.board, self.turn, from, to) {
            trace!(turn = %self.turn, %from, %to, %err, "rejected move");
            return Err(err.into());
        }

        let effects = self.board.apply_move(from, to).map_err(MoveError::from)?;

        if effects.contains(MoveEffects::PROMOTION) {
            let role = promotion.unwrap_or(Role::Queen);
            self.board.promote(to, role)?;
            debug!(turn = %self.turn, square = %to, %role, "promoted");
        }

        debug!(turn = %self.turn, %from, %to, ?effects, "played");
        self.turn = !self.turn;

        if let Some(outcome) = self.outcome() {
            info!(%outcome, "game over");
        }

        Ok(effects)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().expect("valid square")
    }

    fn play(game: &mut Game, from: &str, to: &str) -> Result<MoveEffects, PlayError> {
        game.play(sq(from), sq(to), None)
    }

    #[test]
    fn test_turns_alternate() {
        let mut game = Game::new();
        assert_eq!(game.turn(), Color::White);
        assert_eq!(
            play(&mut game, "e7", "e5"),
            Err(PlayError::Illegal(MoveError::NotYourPiece))
        );
        assert_eq!(play(&mut game, "e2", "e4"), Ok(MoveEffects::DOUBLE_STEP));
        assert_eq!(game.turn(), Color::Black);
        assert_eq!(
            play(&mut game, "e4", "e5"),
            Err(PlayError::Illegal(MoveError::NotYourPiece))
        );
        assert!(game.legal_moves(sq("d2")).is_empty());
        assert_eq!(game.legal_moves(sq("d7")).len(), 2);
    }

    #[test]
    fn test_rejected_move_leaves_game_unchanged() {
        let mut game = Game::new();
        let before = game.clone();
        assert!(play(&mut game, "e2", "e5").is_err());
        assert!(game.play(sq("e2"), sq("e4"), Some(Role::King)).is_err());
        assert_eq!(game, before);
    }

    #[test]
    fn test_promotion() {
        let board = Board::from_board_fen("k7/4P3/8/8/8/8/8/4K3").expect("valid fen");

        let mut game = Game::from_board(board.clone(), Color::White);
        let effects = play(&mut game, "e7", "e8").expect("legal");
        assert!(effects.contains(MoveEffects::PROMOTION));
        let queen = game.board().piece_at(sq("e8")).expect("promoted");
        assert_eq!(queen.piece(), Color::White.queen());
        assert!(queen.has_moved());

        let mut game = Game::from_board(board, Color::White);
        game.play(sq("e7"), sq("e8"), Some(Role::Knight))
            .expect("legal");
        assert_eq!(
            game.board().piece_at(sq("e8")).map(|p| p.role()),
            Some(Role::Knight)
        );
    }

    #[test]
    fn test_status() {
        let board = Board::from_board_fen("4k3/8/8/8/8/8/8/4K2R").expect("valid fen");
        let mut game = Game::from_board(board, Color::White);
        assert_eq!(game.status(), Status::Ongoing);
        play(&mut game, "h1", "h8").expect("legal");
        assert_eq!(game.status(), Status::Check);
        assert_eq!(game.outcome(), None);

        let board = Board::from_board_fen("7k/5Q2/6K1/8/8/8/8/8").expect("valid fen");
        let game = Game::from_board(board, Color::Black);
        assert_eq!(game.status(), Status::Stalemate);
        assert_eq!(game.outcome(), Some(Outcome::Draw));
    }

    #[test]
    fn test_game_over() {
        let mut game = Game::new();
        for (from, to) in [("f2", "f3"), ("e7", "e5"), ("g2", "g4"), ("d8", "h4")] {
            play(&mut game, from, to).expect("legal");
        }
        let outcome = Outcome::Decisive {
            winner: Color::Black,
        };
        assert_eq!(game.outcome(), Some(outcome));
        assert_eq!(outcome.to_string(), "0-1");
        assert_eq!(play(&mut game, "a2", "a3"), Err(PlayError::GameOver(outcome)));
    }

    #[test]
    fn test_play_error_source() {
        let err = PlayError::from(MoveError::SelfCheck);
        assert!(err.source().is_some());
        assert_eq!(err.to_string(), "illegal move: move would leave king in check");
        assert!(PlayError::GameOver(Outcome::Draw).source().is_none());
    }
}
