//! Difficulty tiers and their heuristic weights.

/// Heuristic weights for one difficulty tier.
///
/// `depth` is informational only: this engine scores single-ply and never
/// searches. One immutable profile is built per request.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrategyProfile {
    pub depth: u8,
    /// Probability-style knob in [0, 1] feeding the selector's random
    /// branches and the scoring jitter.
    pub random_factor: f64,
    pub prefer_captures: bool,
    pub prefer_center: bool,
    pub avoid_blunders: bool,
}

impl StrategyProfile {
    pub fn easy() -> Self {
        Self {
            depth: 1,
            random_factor: 0.4,
            prefer_captures: false,
            prefer_center: false,
            avoid_blunders: false,
        }
    }

    pub fn medium() -> Self {
        Self {
            depth: 2,
            random_factor: 0.2,
            prefer_captures: true,
            prefer_center: true,
            avoid_blunders: true,
        }
    }

    pub fn hard() -> Self {
        Self {
            depth: 3,
            random_factor: 0.05,
            prefer_captures: true,
            prefer_center: true,
            avoid_blunders: true,
        }
    }

    /// Case-insensitive tier lookup. Unrecognized names fall back to
    /// medium rather than erroring.
    pub fn for_tier(tier: &str) -> Self {
        match tier.to_ascii_lowercase().as_str() {
            "easy" => Self::easy(),
            "medium" => Self::medium(),
            "hard" => Self::hard(),
            _ => Self::medium(),
        }
    }
}

#[cfg(test)]
#[path = "strategy_tests.rs"]
mod strategy_tests;
