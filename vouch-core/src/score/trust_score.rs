use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use super::TrustCategory;

/// Trust score clamped to [0.0, 10.0].
/// Represents how much a given viewer should trust a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TrustScore(f64);

impl TrustScore {
    /// Upper bound of the score scale.
    pub const MAX: f64 = 10.0;
    /// Minimum score for any token reward.
    pub const REWARD_THRESHOLD: f64 = 0.25;

    /// Create a new TrustScore, clamping to [0.0, 10.0].
    pub fn new(value: f64) -> Self {
        Self(value.clamp(0.0, Self::MAX))
    }

    /// Get the raw f64 value.
    pub fn value(self) -> f64 {
        self.0
    }

    /// Check if the score clears the reward qualification threshold.
    pub fn meets_reward_threshold(self) -> bool {
        self.0 >= Self::REWARD_THRESHOLD
    }

    /// Discrete trust band for this score.
    pub fn category(self) -> TrustCategory {
        TrustCategory::from_score(self.0)
    }
}

impl fmt::Display for TrustScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl From<f64> for TrustScore {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<TrustScore> for f64 {
    fn from(s: TrustScore) -> Self {
        s.0
    }
}
