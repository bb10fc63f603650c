use serde::{Deserialize, Serialize};

use super::defaults;

/// Which combination formula the trust engine applies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreFormula {
    /// Multi-factor formula: social, taste, and context blended, then
    /// scaled by quality and recency.
    #[default]
    Canonical,
    /// Social-proximity-only fallback for deployments without taste or
    /// context inputs. Never mixed with the canonical formula.
    LegacySocial,
}

/// Trust engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrustConfig {
    pub formula: ScoreFormula,
    /// BFS depth bound for social distance queries.
    pub max_depth: u32,
    /// Fall back to stored preferences when taste signals are missing
    /// or below the confidence gate.
    pub preference_fallback: bool,
}

impl Default for TrustConfig {
    fn default() -> Self {
        Self {
            formula: ScoreFormula::default(),
            max_depth: defaults::DEFAULT_MAX_SOCIAL_DEPTH,
            preference_fallback: defaults::DEFAULT_PREFERENCE_FALLBACK,
        }
    }
}
