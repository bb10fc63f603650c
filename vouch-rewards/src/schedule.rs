//! Base reward schedule.

use vouch_core::constants::SCORE_SCALE;
use vouch_core::models::RewardType;
use vouch_core::social::ActionType;

/// Base token amount for an action, before multipliers and bonuses.
/// Referrals pay double; unrecognised actions pay nothing.
pub fn base_reward(action_type: ActionType) -> f64 {
    match action_type {
        ActionType::RecommendationCreated => 1.0,
        ActionType::UpvoteReceived => 1.0,
        ActionType::ListCreated => 1.0,
        ActionType::ReferralCompleted => 2.0,
        ActionType::SpamReported => 1.0,
        ActionType::Unknown => 0.0,
    }
}

/// Ledger category for an action's rewards. Unrecognised actions
/// have none and cannot be distributed.
pub fn reward_type_for(action_type: ActionType) -> Option<RewardType> {
    match action_type {
        ActionType::RecommendationCreated => Some(RewardType::CreationBonus),
        ActionType::UpvoteReceived => Some(RewardType::InteractionReward),
        ActionType::ListCreated => Some(RewardType::CurationShare),
        ActionType::ReferralCompleted => Some(RewardType::ReferralBonus),
        ActionType::SpamReported => Some(RewardType::SpamBounty),
        ActionType::Unknown => None,
    }
}

/// Trust multiplier: linear in the 0–10 trust score, capped at
/// `max_multiplier` so out-of-range scores cannot amplify further.
///
/// Range: 0.0 – `max_multiplier`.
pub fn trust_multiplier(trust_score: f64, max_multiplier: f64) -> f64 {
    ((trust_score / SCORE_SCALE) * max_multiplier).min(max_multiplier)
}
