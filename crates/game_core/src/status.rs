//! Game-status classification.
//!
//! Status is derived, never stored: every query recomputes it from the
//! position, its outcome, and the legal-move list.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::attacks::is_attacked_by;
use crate::moves::LegalMove;
use crate::position::Position;

/// How a decisive outcome was reached.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EndMethod {
    Checkmate,
    Stalemate,
    FiftyMoveRule,
}

/// Decisive result of a position, if any.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    None,
    WhiteWins(EndMethod),
    BlackWins(EndMethod),
    Draw(EndMethod),
}

impl Outcome {
    pub fn is_decisive(&self) -> bool {
        !matches!(self, Outcome::None)
    }

    /// Winner label for the caller-facing report: `"white"`, `"black"`,
    /// `"draw"`, or empty while the game is running.
    pub fn winner_label(&self) -> &'static str {
        match self {
            Outcome::WhiteWins(_) => "white",
            Outcome::BlackWins(_) => "black",
            Outcome::Draw(_) => "draw",
            Outcome::None => "",
        }
    }
}

/// Reported game state after a move or on a status query.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    Ongoing,
    Check,
    Checkmate,
    Draw,
    WhiteWins,
    BlackWins,
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GameStatus::Ongoing => "ongoing",
            GameStatus::Check => "check",
            GameStatus::Checkmate => "checkmate",
            GameStatus::Draw => "draw",
            GameStatus::WhiteWins => "white_wins",
            GameStatus::BlackWins => "black_wins",
        };
        f.write_str(s)
    }
}

/// Classifies the game state from position + outcome + legal-move list.
///
/// Checkmate takes precedence over the generic win labels. A non-decisive
/// outcome with an empty move list would mean the rules engine broke its
/// own invariant (stalemate/checkmate must be reported as decisive); the
/// classifier does not resolve that and reports the position as ongoing.
pub fn classify(pos: &Position, outcome: Outcome, moves: &[LegalMove]) -> GameStatus {
    match outcome {
        Outcome::WhiteWins(EndMethod::Checkmate) | Outcome::BlackWins(EndMethod::Checkmate) => {
            GameStatus::Checkmate
        }
        Outcome::WhiteWins(_) => GameStatus::WhiteWins,
        Outcome::BlackWins(_) => GameStatus::BlackWins,
        Outcome::Draw(_) => GameStatus::Draw,
        Outcome::None => {
            if moves.is_empty() {
                return GameStatus::Ongoing;
            }
            let stm = pos.side_to_move();
            if is_attacked_by(pos.board(), pos.king(stm), !stm) {
                GameStatus::Check
            } else {
                GameStatus::Ongoing
            }
        }
    }
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod status_tests;
