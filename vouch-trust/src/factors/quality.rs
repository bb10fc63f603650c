//! Engagement quality factor.

use vouch_core::constants::distance_weight;
use vouch_core::social::UserInteraction;

/// Neutral quality for content with no usable engagement.
pub const NEUTRAL_QUALITY: f64 = 0.5;

/// Engagement quality factor: the distance-weighted mean of
/// interaction values, `Σ(value × weight) / Σ(weight)`, clamped to
/// [0, 1].
///
/// Content with no interactions reads 0.5: unproven, not distrusted.
/// Interactions from beyond the network carry zero weight and drop
/// out; if every interaction drops out the factor is neutral too.
///
/// Range: 0.0 – 1.0.
pub fn calculate(interactions: &[UserInteraction]) -> f64 {
    if interactions.is_empty() {
        return NEUTRAL_QUALITY;
    }

    let mut weighted_sum = 0.0;
    let mut weight_total = 0.0;
    for interaction in interactions {
        let weight = distance_weight(interaction.social_distance);
        weighted_sum += interaction.interaction.value() * weight;
        weight_total += weight;
    }

    if weight_total <= f64::EPSILON {
        return NEUTRAL_QUALITY;
    }
    (weighted_sum / weight_total).clamp(0.0, 1.0)
}
