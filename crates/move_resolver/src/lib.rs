//! Move disambiguation for externally-interpreted move requests.
//!
//! Upstream interpreters (speech, free text, vision) are unreliable and may
//! fill any subset of the hint fields. Resolution degrades gracefully
//! through layered fallbacks instead of demanding perfect structured input:
//! exact square pair first, then notation, then destination-only with
//! origin narrowing. The first rule that matches wins.

use game_core::LegalMove;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Structured move hint produced by the upstream interpreter.
///
/// Field names mirror the interpreter's JSON contract. Absent, null, and
/// whitespace-only strings are all treated as "not provided".
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MoveHint {
    pub is_valid_request: bool,
    pub from_square: Option<String>,
    pub to_square: Option<String>,
    pub move_notation: Option<String>,
    pub confidence: i32,
    pub explanation: String,
}

impl MoveHint {
    /// Hint with only a destination square, the weakest usable input.
    pub fn destination(square: &str) -> Self {
        Self {
            is_valid_request: true,
            to_square: Some(square.to_string()),
            ..Self::default()
        }
    }

    /// Hint carrying an exact origin/destination pair.
    pub fn squares(from: &str, to: &str) -> Self {
        Self {
            is_valid_request: true,
            from_square: Some(from.to_string()),
            to_square: Some(to.to_string()),
            ..Self::default()
        }
    }

    /// Hint carrying only textual notation.
    pub fn notation(notation: &str) -> Self {
        Self {
            is_valid_request: true,
            move_notation: Some(notation.to_string()),
            ..Self::default()
        }
    }
}

/// Terminal resolution failures; the surrounding layer decides whether to
/// try another strategy before giving up.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
    #[error("move not found or illegal")]
    MoveNotFound,

    /// Carries the contested destination so the user can be asked which
    /// piece they meant.
    #[error("ambiguous move to {to}, please specify which piece")]
    AmbiguousMove { to: String },

    /// The interpreter itself rejected the request; its explanation is
    /// passed through untouched.
    #[error("invalid move request: {0}")]
    InvalidHint(String),
}

fn field(value: &Option<String>) -> Option<String> {
    let trimmed = value.as_deref()?.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_ascii_lowercase())
    }
}

/// Resolves a hint against the legal-move list for the current position.
///
/// Resolution order (first success wins):
/// 1. exact origin/destination pair, case-insensitive
/// 2. notation equal to the move's coordinate form, with or without `x`
/// 3. destination-only, narrowed by origin when several moves land there
pub fn resolve(hint: &MoveHint, moves: &[LegalMove]) -> Result<LegalMove, ResolveError> {
    if !hint.is_valid_request {
        return Err(ResolveError::InvalidHint(hint.explanation.clone()));
    }

    let from = field(&hint.from_square);
    let to = field(&hint.to_square);
    let notation = field(&hint.move_notation);

    if let (Some(from), Some(to)) = (&from, &to) {
        if let Some(mv) = moves
            .iter()
            .find(|m| m.from.to_string() == *from && m.to.to_string() == *to)
        {
            debug!(mv = %mv, "resolved by square pair");
            return Ok(*mv);
        }
    }

    if let Some(notation) = &notation {
        // Interpreters disagree on the capture marker, so match both forms
        let bare = notation.replace('x', "");
        if let Some(mv) = moves
            .iter()
            .find(|m| {
                let uci = m.uci();
                uci == *notation || uci == bare
            })
        {
            debug!(mv = %mv, "resolved by notation");
            return Ok(*mv);
        }
    }

    if let Some(to) = &to {
        let candidates: Vec<&LegalMove> =
            moves.iter().filter(|m| m.to.to_string() == *to).collect();

        if candidates.len() == 1 {
            debug!(mv = %candidates[0], "resolved by unique destination");
            return Ok(*candidates[0]);
        }
        if candidates.len() > 1 {
            if let Some(from) = &from {
                if let Some(mv) = candidates.iter().find(|m| m.from.to_string() == *from) {
                    debug!(mv = %mv, "resolved by destination plus origin");
                    return Ok(**mv);
                }
            }
            return Err(ResolveError::AmbiguousMove { to: to.clone() });
        }
    }

    Err(ResolveError::MoveNotFound)
}
