use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::ids::{ActionId, UserId};
use crate::models::SocialPath;

/// What a token reward is paid for. Derived from the action type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum RewardType {
    CreationBonus,
    InteractionReward,
    CurationShare,
    ReferralBonus,
    SpamBounty,
}

/// A planned token transfer to one recipient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TokenReward {
    pub recipient_user_id: UserId,
    pub amount: f64,
    pub reward_type: RewardType,
    pub source_action_id: ActionId,
    pub calculated_at: DateTime<Utc>,
    /// Endorsement trail justifying a curation share, when one exists.
    pub social_path: Option<SocialPath>,
}

/// A cap that fired during reward calculation.
/// Serializes as its reason string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum AppliedCap {
    #[serde(rename = "Does not meet trust threshold")]
    BelowTrustThreshold,
    #[serde(rename = "Reward capped at maximum per post")]
    MaxRewardPerPost,
    #[serde(rename = "Social bonuses capped at maximum")]
    SocialBonusCeiling,
}

impl AppliedCap {
    /// The reason string reported to the host.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::BelowTrustThreshold => "Does not meet trust threshold",
            Self::MaxRewardPerPost => "Reward capped at maximum per post",
            Self::SocialBonusCeiling => "Social bonuses capped at maximum",
        }
    }
}

impl fmt::Display for AppliedCap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Record of cap application for anti-gaming audit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CapReport {
    pub applied_caps: Vec<AppliedCap>,
    /// Reward before caps.
    pub original_amount: f64,
    /// Reward after caps.
    pub final_amount: f64,
}

/// Factor-by-factor reward composition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RewardBreakdown {
    pub base_reward: f64,
    /// Trust multiplier applied to the base. Range: 0.0 – 3.0.
    pub trust_multiplier: f64,
    /// Summed endorsement bonuses. Range: 0.0 – 2.0.
    pub social_bonuses: f64,
    pub quality_bonus: f64,
    pub recency_bonus: f64,
    pub caps: CapReport,
}

/// Projected effect of a distribution on the emission pool.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PoolImpact {
    /// Tokens this distribution draws from the pool.
    pub tokens_from_pool: f64,
    /// Pool balance after the distribution.
    pub remaining_pool: f64,
    /// Whether this distribution crosses the next halving threshold.
    pub trigger_halving: bool,
}

/// Full output of a reward calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RewardCalculationResult {
    pub total_reward: f64,
    pub breakdown: RewardBreakdown,
    pub distribution_plan: Vec<TokenReward>,
    pub pool_impact: PoolImpact,
}
