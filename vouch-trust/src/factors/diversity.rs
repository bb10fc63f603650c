//! Endorsement diversity bonus.

use std::collections::HashSet;

use vouch_core::ids::UserId;
use vouch_core::social::{InteractionKind, UserInteraction};

/// Per-unique-endorser increment, capped.
const ENDORSER_STEP: f64 = 0.05;
const MAX_ENDORSER_BONUS: f64 = 0.3;

/// Per-distinct-distance increment, capped.
const DISTANCE_STEP: f64 = 0.1;
const MAX_DISTANCE_BONUS: f64 = 0.2;

/// Per-distinct-interaction-kind increment, capped.
const KIND_STEP: f64 = 0.05;
const MAX_KIND_BONUS: f64 = 0.15;

/// Endorsement diversity bonus. Breadth of support counts three
/// ways: how many people engaged, how many distance bands they span,
/// and how many kinds of engagement they used. Each axis saturates
/// so one crowd cannot max the bonus alone.
///
/// Range: 0.0 – 0.65.
pub fn calculate(interactions: &[UserInteraction]) -> f64 {
    if interactions.is_empty() {
        return 0.0;
    }

    let endorsers: HashSet<&UserId> = interactions.iter().map(|i| &i.user_id).collect();
    let distances: HashSet<u32> = interactions.iter().map(|i| i.social_distance).collect();
    let kinds: HashSet<InteractionKind> = interactions.iter().map(|i| i.interaction).collect();

    let endorser_bonus = (endorsers.len() as f64 * ENDORSER_STEP).min(MAX_ENDORSER_BONUS);
    let distance_bonus = (distances.len() as f64 * DISTANCE_STEP).min(MAX_DISTANCE_BONUS);
    let kind_bonus = (kinds.len() as f64 * KIND_STEP).min(MAX_KIND_BONUS);

    endorser_bonus + distance_bonus + kind_bonus
}
