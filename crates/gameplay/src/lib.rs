//! Turn orchestration over the move-resolution core.
//!
//! One request in, one concrete move and reclassified game status out.
//! AI turns run profile → scorer → selector; human/voice turns run the
//! hint resolver. Either way the chosen move is applied through the rules
//! engine and the resulting position is classified for reporting. All
//! errors are terminal for the request; retry policy belongs to callers.

pub mod config;

pub use config::{ProfileOverride, ProfilesConfig};

use game_core::{classify, legal_moves, GameStatus, LegalMove, PlayError, Position};
use heuristic_engine::{HeuristicEngine, StrategyProfile};
use move_resolver::{resolve, MoveHint, ResolveError};
use rand::Rng;
use serde::Serialize;
use thiserror::Error;
use tracing::info;

/// Caller-facing result of one resolved turn.
#[derive(Clone, Debug, Serialize)]
pub struct TurnReport {
    /// Coordinate notation of the move that was played; empty for pure
    /// status queries.
    #[serde(rename = "move")]
    pub mv: String,
    pub new_fen: String,
    pub status: GameStatus,
    /// `"white"`, `"black"`, `"draw"`, or empty while the game runs.
    pub winner: String,
    pub is_game_end: bool,
}

#[derive(Debug, Error)]
pub enum GameplayError {
    #[error(transparent)]
    Play(#[from] PlayError),
    #[error(transparent)]
    Resolve(#[from] ResolveError),
}

/// Plays one AI turn at the named difficulty tier.
pub fn engine_turn(fen: &str, tier: &str) -> Result<TurnReport, GameplayError> {
    engine_turn_with(fen, StrategyProfile::for_tier(tier), &mut rand::thread_rng())
}

/// Plays one AI turn with an explicit profile and random source.
pub fn engine_turn_with<R: Rng>(
    fen: &str,
    profile: StrategyProfile,
    rng: &mut R,
) -> Result<TurnReport, GameplayError> {
    let pos = parse_live_position(fen)?;
    let moves = legal_moves(&pos);
    let engine = HeuristicEngine::new(profile);
    let mv = engine.select_with(&pos, &moves, rng)?;
    finish_turn(&pos, mv)
}

/// Plays one human/voice turn from an interpreter hint.
pub fn player_turn(fen: &str, hint: &MoveHint) -> Result<TurnReport, GameplayError> {
    let pos = parse_live_position(fen)?;
    let moves = legal_moves(&pos);
    let mv = resolve(hint, &moves)?;
    finish_turn(&pos, mv)
}

/// Classifies a position without playing a move.
pub fn status_report(fen: &str) -> Result<TurnReport, GameplayError> {
    let pos = Position::from_fen(fen)?;
    let outcome = pos.outcome();
    let moves = legal_moves(&pos);
    let status = classify(&pos, outcome, &moves);

    Ok(TurnReport {
        mv: String::new(),
        new_fen: pos.fen(),
        status,
        winner: outcome.winner_label().to_string(),
        is_game_end: outcome.is_decisive(),
    })
}

fn parse_live_position(fen: &str) -> Result<Position, GameplayError> {
    let pos = Position::from_fen(fen)?;
    if pos.outcome().is_decisive() {
        return Err(PlayError::GameFinished.into());
    }
    Ok(pos)
}

fn finish_turn(pos: &Position, mv: LegalMove) -> Result<TurnReport, GameplayError> {
    let next = pos.apply(&mv)?;
    let outcome = next.outcome();
    let next_moves = legal_moves(&next);
    let status = classify(&next, outcome, &next_moves);
    info!(mv = %mv, %status, "turn resolved");

    Ok(TurnReport {
        mv: mv.uci(),
        new_fen: next.fen(),
        status,
        winner: outcome.winner_label().to_string(),
        is_game_end: outcome.is_decisive(),
    })
}
