//! Composite confidence: how much signal stood behind a score.

use vouch_core::score::Confidence;
use vouch_graph::SocialDistance;

/// Input weights: social proximity 30%, taste 50%, interaction
/// volume 15%, path directness 5%.
const SOCIAL_WEIGHT: f64 = 0.3;
const TASTE_WEIGHT: f64 = 0.5;
const VOLUME_WEIGHT: f64 = 0.15;
const PATH_WEIGHT: f64 = 0.05;

/// Volume saturation: 0.1 per interaction, capped at 0.8.
const VOLUME_STEP: f64 = 0.1;
const VOLUME_CAP: f64 = 0.8;

/// Composite confidence for one trust evaluation.
///
/// `social × 0.3 + taste_confidence × 0.5 + min(n × 0.1, 0.8) × 0.15
/// + (1 / path_len) × 0.05`, clamped to [0.1, 1.0] by
/// [`Confidence::new`]. Self and direct paths count as length 1; the
/// path term is zero beyond the network.
pub fn calculate(
    social: f64,
    taste_confidence: f64,
    interaction_count: usize,
    distance: SocialDistance,
) -> Confidence {
    let volume = (interaction_count as f64 * VOLUME_STEP).min(VOLUME_CAP);
    let path_term = match distance {
        SocialDistance::Hops(hops) => 1.0 / f64::from(hops.max(1)),
        SocialDistance::BeyondNetwork => 0.0,
    };

    Confidence::new(
        SOCIAL_WEIGHT * social
            + TASTE_WEIGHT * taste_confidence
            + VOLUME_WEIGHT * volume
            + PATH_WEIGHT * path_term,
    )
}
