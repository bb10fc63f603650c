//! Social, quality, and recency bonuses.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};

use vouch_core::constants::endorsement_weight;
use vouch_core::social::{ActionMetadata, SocialEndorsement};

/// Freshness bonus inside 24 hours.
const SAME_DAY_BONUS: f64 = 0.2;
/// Freshness bonus inside 7 days.
const SAME_WEEK_BONUS: f64 = 0.1;

/// Distance-weighted endorsement bonus and whether the ceiling bound
/// it. Positive interactions only: downvotes affect trust scoring,
/// never payouts. Self-endorsements carry no weight.
pub fn social_bonus(endorsements: &[SocialEndorsement], ceiling: f64) -> (f64, bool) {
    let raw: f64 = endorsements
        .iter()
        .filter(|endorsement| endorsement.interaction.is_positive())
        .map(|endorsement| {
            endorsement_weight(endorsement.social_distance) * endorsement.interaction.value()
        })
        .sum();

    if raw > ceiling {
        (ceiling, true)
    } else {
        (raw, false)
    }
}

/// Category quality bonus, scaled by the host's optional per-action
/// multiplier. Uncategorised actions earn nothing here.
pub fn quality_bonus(metadata: &ActionMetadata, category_bonuses: &HashMap<String, f64>) -> f64 {
    let base = metadata
        .category
        .as_deref()
        .and_then(|category| category_bonuses.get(category).copied())
        .unwrap_or(0.0);
    base * metadata.reward_multiplier.unwrap_or(1.0)
}

/// Freshness bonus: +0.2 for actions inside 24 hours, +0.1 inside
/// 7 days, nothing after that.
pub fn recency_bonus(action_time: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    let age = now - action_time;
    if age <= Duration::hours(24) {
        SAME_DAY_BONUS
    } else if age <= Duration::days(7) {
        SAME_WEEK_BONUS
    } else {
        0.0
    }
}
