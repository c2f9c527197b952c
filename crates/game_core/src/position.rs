//! Board facade over `cozy_chess`.
//!
//! Wraps `cozy_chess::Board` so the rest of the workspace works with one
//! immutable `Position` type: parse a FEN, enumerate moves, apply one, read
//! the outcome. `apply` returns a fresh position; nothing mutates in place.

use cozy_chess::{Board, Color, Piece, Square};

use crate::error::PlayError;
use crate::moves::LegalMove;
use crate::status::{EndMethod, Outcome};

/// An immutable snapshot of one board position.
#[derive(Clone, Debug)]
pub struct Position {
    board: Board,
}

impl Position {
    /// The standard initial position.
    pub fn startpos() -> Self {
        Self {
            board: Board::default(),
        }
    }

    /// Parses a FEN string. Leading/trailing whitespace is tolerated.
    pub fn from_fen(fen: &str) -> Result<Self, PlayError> {
        let board = fen
            .trim()
            .parse::<Board>()
            .map_err(|e| PlayError::InvalidFen(format!("{e:?}")))?;
        Ok(Self { board })
    }

    /// Serializes the position back to FEN.
    pub fn fen(&self) -> String {
        self.board.to_string()
    }

    pub fn side_to_move(&self) -> Color {
        self.board.side_to_move()
    }

    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        self.board.piece_on(sq)
    }

    pub fn king(&self, color: Color) -> Square {
        self.board.king(color)
    }

    /// Whether the side to move is currently in check.
    pub fn in_check(&self) -> bool {
        !self.board.checkers().is_empty()
    }

    /// Access to the underlying rules-engine board, for attack lookups.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Applies a legal move and returns the resulting position.
    pub fn apply(&self, mv: &LegalMove) -> Result<Position, PlayError> {
        let mut board = self.board.clone();
        board
            .try_play(mv.raw())
            .map_err(|_| PlayError::IllegalMove(mv.to_string()))?;
        Ok(Self { board })
    }

    /// Derives the game outcome for this position.
    ///
    /// Derived explicitly rather than from `Board::status` so that draw
    /// methods stay distinguishable: checkmate and stalemate come from the
    /// legal-move count plus the check state, the fifty-move rule from the
    /// halfmove clock. Threefold repetition needs game history, which a
    /// single position does not carry, and is left to the caller.
    pub fn outcome(&self) -> Outcome {
        let has_moves = self.board.generate_moves(|_| true);
        if !has_moves {
            if self.in_check() {
                // Side to move is checkmated
                return match self.board.side_to_move() {
                    Color::White => Outcome::BlackWins(EndMethod::Checkmate),
                    Color::Black => Outcome::WhiteWins(EndMethod::Checkmate),
                };
            }
            return Outcome::Draw(EndMethod::Stalemate);
        }
        if self.board.halfmove_clock() >= 100 {
            return Outcome::Draw(EndMethod::FiftyMoveRule);
        }
        Outcome::None
    }
}

#[cfg(test)]
#[path = "position_tests.rs"]
mod position_tests;
