//! Splitting a reward between the actor and their endorsers.

use chrono::{DateTime, Utc};

use vouch_core::constants::endorsement_weight;
use vouch_core::models::{PathHop, RewardType, SocialPath, TokenReward};
use vouch_core::social::{RewardableAction, SocialEndorsement};

/// Build the transfer plan for a computed total.
///
/// The actor keeps `primary_share` of the total; positive endorsers
/// split the remainder pro rata by endorsement weight, which is zero
/// at hop 0, so actors listed among their own endorsers take nothing
/// from the pot. Entries below `dust_threshold` are dropped, not
/// reallocated, so the plan never sums to more than `total`. With no
/// eligible endorsers the actor keeps everything.
pub fn build_plan(
    action: &RewardableAction,
    reward_type: RewardType,
    total: f64,
    primary_share: f64,
    dust_threshold: f64,
    calculated_at: DateTime<Utc>,
) -> Vec<TokenReward> {
    if total <= 0.0 {
        return Vec::new();
    }

    let endorsers: Vec<&SocialEndorsement> = action
        .social_connections
        .iter()
        .filter(|endorsement| {
            endorsement.interaction.is_positive()
                && endorsement_weight(endorsement.social_distance) > 0.0
        })
        .collect();
    let weight_total: f64 = endorsers
        .iter()
        .map(|endorsement| endorsement_weight(endorsement.social_distance))
        .sum();

    let (primary_amount, endorser_pot) = if endorsers.is_empty() || weight_total <= f64::EPSILON {
        (total, 0.0)
    } else {
        (total * primary_share, total * (1.0 - primary_share))
    };

    let mut plan = Vec::new();
    if primary_amount >= dust_threshold {
        plan.push(TokenReward {
            recipient_user_id: action.user_id.clone(),
            amount: primary_amount,
            reward_type,
            source_action_id: action.action_id.clone(),
            calculated_at,
            social_path: None,
        });
    }

    for endorsement in endorsers {
        let weight = endorsement_weight(endorsement.social_distance);
        let amount = endorser_pot * weight / weight_total;
        if amount < dust_threshold {
            continue;
        }
        plan.push(TokenReward {
            recipient_user_id: endorsement.user_id.clone(),
            amount,
            reward_type,
            source_action_id: action.action_id.clone(),
            calculated_at,
            social_path: Some(endorsement_path(endorsement)),
        });
    }

    plan
}

/// Single-hop trail recording where the endorser sat relative to the
/// actor when the reward was earned.
fn endorsement_path(endorsement: &SocialEndorsement) -> SocialPath {
    SocialPath {
        hops: vec![PathHop {
            user_id: endorsement.user_id.clone(),
            distance: endorsement.social_distance,
            weight: endorsement_weight(endorsement.social_distance),
        }],
    }
}
