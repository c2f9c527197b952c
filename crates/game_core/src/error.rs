use thiserror::Error;

/// Errors from position handling and move selection.
///
/// All variants are terminal for the current request; nothing here is
/// retried internally.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlayError {
    #[error("invalid FEN notation: {0}")]
    InvalidFen(String),

    /// The position has no legal moves. Callers map this to a terminal
    /// game state instead of surfacing it to the user.
    #[error("no legal moves available")]
    NoLegalMoves,

    #[error("game is already finished")]
    GameFinished,

    #[error("illegal move: {0}")]
    IllegalMove(String),
}
