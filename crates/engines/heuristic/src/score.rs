//! Single-ply move scoring.
//!
//! All bonuses are cumulative; a capturing, center-landing, checking move
//! collects every applicable term. `score_move` itself is deterministic:
//! the random jitter lives in [`jitter`] so tests can exercise scoring
//! without a random source.

use game_core::{is_attacked_by, BitBoard, LegalMove, Piece, Position};
use rand::Rng;

use crate::strategy::StrategyProfile;

const CAPTURE_BASE: i32 = 50;
const CENTER_BONUS: i32 = 20;
const CHECK_BONUS: i32 = 30;
const MATE_BONUS: i32 = 1000;
const QUEEN_EXPOSURE_PENALTY: i32 = 80;
const ROOK_EXPOSURE_PENALTY: i32 = 40;
const CASTLE_BONUS: i32 = 25;
const PROMOTION_BONUS: i32 = 80;

/// The four true-center squares plus the surrounding ring: c3..f6.
pub const EXTENDED_CENTER: BitBoard = BitBoard(0x0000_3C3C_3C3C_0000);

fn victim_bonus(victim: Piece) -> i32 {
    match victim {
        Piece::Queen => 90,
        Piece::Rook => 50,
        Piece::Bishop | Piece::Knight => 30,
        _ => 10,
    }
}

/// Scores one legal move for the given position and profile.
///
/// The mate bonus dominates every other combination of terms, so a mating
/// move always wins selection when one exists.
pub fn score_move(pos: &Position, mv: &LegalMove, profile: &StrategyProfile) -> i32 {
    let mut score = 0;

    if profile.prefer_captures {
        if let Some(victim) = mv.captured {
            score += CAPTURE_BASE + victim_bonus(victim);
        }
    }

    if profile.prefer_center && EXTENDED_CENTER.has(mv.to) {
        score += CENTER_BONUS;
    }

    if mv.gives_check {
        score += CHECK_BONUS;
    }
    if mv.gives_mate {
        score += MATE_BONUS;
    }

    // Shallow hanging-piece check: queens and rooks only, no recapture
    // analysis, evaluated before the move is played.
    if profile.avoid_blunders && matches!(mv.piece, Piece::Queen | Piece::Rook) {
        if is_attacked_by(pos.board(), mv.to, !mv.color) {
            score -= match mv.piece {
                Piece::Queen => QUEEN_EXPOSURE_PENALTY,
                _ => ROOK_EXPOSURE_PENALTY,
            };
        }
    }

    if mv.is_castle() {
        score += CASTLE_BONUS;
    }
    if mv.promotion.is_some() {
        score += PROMOTION_BONUS;
    }

    score
}

/// Random scoring jitter: `floor(uniform[0, 20) * random_factor)`.
///
/// A fresh draw on every call; pass a seeded generator to pin it down.
pub fn jitter<R: Rng>(rng: &mut R, random_factor: f64) -> i32 {
    if random_factor <= 0.0 {
        return 0;
    }
    (rng.gen_range(0..20) as f64 * random_factor) as i32
}

#[cfg(test)]
#[path = "score_tests.rs"]
mod score_tests;
