//! Heuristic move-selection engine.
//!
//! A single-ply scorer over already-enumerated legal moves; difficulty
//! comes from the strategy profile's weights and randomness, not from
//! search. The profile decides how often the engine explores randomly,
//! whether it chases captures and the center, and whether it avoids
//! hanging its queen or rooks.

pub mod score;
pub mod strategy;

pub use score::{jitter, score_move, EXTENDED_CENTER};
pub use strategy::StrategyProfile;

use game_core::{Engine, LegalMove, PlayError, Position};
use rand::Rng;
use tracing::debug;

/// Profile-driven move chooser.
///
/// Holds no random state of its own: every selection call either receives
/// a generator or draws a fresh thread-local one, so concurrent requests
/// never share a generator.
#[derive(Clone, Copy, Debug)]
pub struct HeuristicEngine {
    profile: StrategyProfile,
}

impl HeuristicEngine {
    pub fn new(profile: StrategyProfile) -> Self {
        Self { profile }
    }

    pub fn for_tier(tier: &str) -> Self {
        Self::new(StrategyProfile::for_tier(tier))
    }

    pub fn profile(&self) -> &StrategyProfile {
        &self.profile
    }

    /// Selects one move with a thread-local random source.
    pub fn select(&self, pos: &Position, moves: &[LegalMove]) -> Result<LegalMove, PlayError> {
        self.select_with(pos, moves, &mut rand::thread_rng())
    }

    /// Selects one move, drawing all randomness from `rng`.
    ///
    /// Fails only when `moves` is empty; the caller maps that to a
    /// terminal game state rather than a user-facing error.
    pub fn select_with<R: Rng>(
        &self,
        pos: &Position,
        moves: &[LegalMove],
        rng: &mut R,
    ) -> Result<LegalMove, PlayError> {
        if moves.is_empty() {
            return Err(PlayError::NoLegalMoves);
        }
        let profile = self.profile;

        // Low-skill tiers sometimes play a uniformly random move regardless
        // of position quality, bypassing scoring entirely.
        if profile.random_factor > 0.3 && rng.gen::<f64>() < profile.random_factor {
            let pick = moves[rng.gen_range(0..moves.len())];
            debug!(mv = %pick, "exploration branch picked a random move");
            return Ok(pick);
        }

        let mut scored = Vec::with_capacity(moves.len());
        for mv in moves {
            let score = score_move(pos, mv, &profile) + jitter(rng, profile.random_factor);
            scored.push((mv, score));
        }

        let best = scored.iter().map(|&(_, s)| s).fold(i32::MIN, i32::max);
        let tied: Vec<&LegalMove> = scored
            .iter()
            .filter(|&&(_, s)| s == best)
            .map(|&(mv, _)| mv)
            .collect();

        let pick = if tied.len() > 1 && rng.gen::<f64>() < profile.random_factor {
            tied[rng.gen_range(0..tied.len())]
        } else {
            // Fixed tie-break: first tied move in the rules engine's
            // enumeration order
            tied[0]
        };
        debug!(mv = %pick, score = best, ties = tied.len(), "selected move");
        Ok(*pick)
    }
}

impl Engine for HeuristicEngine {
    fn choose_move(&mut self, pos: &Position, moves: &[LegalMove]) -> Result<LegalMove, PlayError> {
        self.select(pos, moves)
    }

    fn name(&self) -> &str {
        "Heuristic v1.0"
    }
}
