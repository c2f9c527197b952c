//! TOML overrides for the built-in difficulty tiers.
//!
//! Deployments tune tier behavior without a rebuild: any field left out of
//! the file keeps the built-in value.
//!
//! ```toml
//! [hard]
//! random_factor = 0.0
//!
//! [easy]
//! prefer_captures = true
//! ```

use heuristic_engine::StrategyProfile;
use serde::Deserialize;

/// Per-tier overrides, layered over the built-in tier table.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct ProfilesConfig {
    pub easy: Option<ProfileOverride>,
    pub medium: Option<ProfileOverride>,
    pub hard: Option<ProfileOverride>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct ProfileOverride {
    pub depth: Option<u8>,
    pub random_factor: Option<f64>,
    pub prefer_captures: Option<bool>,
    pub prefer_center: Option<bool>,
    pub avoid_blunders: Option<bool>,
}

impl ProfileOverride {
    fn apply(&self, mut base: StrategyProfile) -> StrategyProfile {
        if let Some(depth) = self.depth {
            base.depth = depth;
        }
        if let Some(random_factor) = self.random_factor {
            base.random_factor = random_factor;
        }
        if let Some(prefer_captures) = self.prefer_captures {
            base.prefer_captures = prefer_captures;
        }
        if let Some(prefer_center) = self.prefer_center {
            base.prefer_center = prefer_center;
        }
        if let Some(avoid_blunders) = self.avoid_blunders {
            base.avoid_blunders = avoid_blunders;
        }
        base
    }
}

impl ProfilesConfig {
    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Profile for a tier, with this config's overrides applied. Unknown
    /// tier names fall back to medium, as everywhere else.
    pub fn profile_for(&self, tier: &str) -> StrategyProfile {
        let base = StrategyProfile::for_tier(tier);
        let overrides = match tier.to_ascii_lowercase().as_str() {
            "easy" => &self.easy,
            "hard" => &self.hard,
            _ => &self.medium,
        };
        match overrides {
            Some(o) => o.apply(base),
            None => base,
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
