use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::defaults;

/// Reward calculator configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RewardConfig {
    /// Minimum trust score (0–10 scale) for any reward.
    pub min_trust_threshold: f64,
    /// Hard ceiling on the total reward for one action.
    pub max_reward_per_post: f64,
    /// Ceiling on the trust multiplier.
    pub max_trust_multiplier: f64,
    /// Ceiling on summed endorsement bonuses.
    pub max_social_bonus: f64,
    /// Fraction of the total paid to the acting user; the rest is
    /// split across endorsers.
    pub primary_share: f64,
    /// Distribution entries below this amount are dropped.
    pub dust_threshold: f64,
    /// Additive quality bonus per content category slug.
    pub category_bonuses: HashMap<String, f64>,
}

impl Default for RewardConfig {
    fn default() -> Self {
        Self {
            min_trust_threshold: defaults::DEFAULT_MIN_TRUST_THRESHOLD,
            max_reward_per_post: defaults::DEFAULT_MAX_REWARD_PER_POST,
            max_trust_multiplier: defaults::DEFAULT_MAX_TRUST_MULTIPLIER,
            max_social_bonus: defaults::DEFAULT_MAX_SOCIAL_BONUS,
            primary_share: defaults::DEFAULT_PRIMARY_SHARE,
            dust_threshold: defaults::DEFAULT_DUST_THRESHOLD,
            category_bonuses: HashMap::from([
                ("travel".to_string(), defaults::DEFAULT_TRAVEL_BONUS),
                ("restaurant".to_string(), defaults::DEFAULT_RESTAURANT_BONUS),
            ]),
        }
    }
}
