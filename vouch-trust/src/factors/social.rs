//! Social proximity factor.

use vouch_graph::SocialDistance;

/// Reinforcement bounds from the author's track record.
const MIN_REINFORCEMENT: f64 = 0.8;
const REINFORCEMENT_SPAN: f64 = 0.4;

/// Social proximity factor.
///
/// Self-authored content is fully trusted: the factor is exactly 1.0
/// and reinforcement does not apply. Otherwise the distance-band
/// weight is scaled by the author's reinforcement factor and the
/// product clamped so proximity never exceeds full trust.
///
/// Range: 0.0 – 1.0.
pub fn calculate(distance: SocialDistance, author_positive_ratio: Option<f64>) -> f64 {
    if distance == SocialDistance::Hops(0) {
        return 1.0;
    }
    let weight = distance.weight();
    if weight == 0.0 {
        return 0.0;
    }
    (weight * reinforcement(author_positive_ratio)).min(1.0)
}

/// Reinforcement from the author's historical positive-feedback
/// ratio: 0.0 maps to 0.8, 1.0 maps to 1.2. Authors with no history
/// are neutral.
///
/// Range: 0.8 – 1.2.
pub fn reinforcement(author_positive_ratio: Option<f64>) -> f64 {
    match author_positive_ratio {
        Some(ratio) => MIN_REINFORCEMENT + ratio.clamp(0.0, 1.0) * REINFORCEMENT_SPAN,
        None => 1.0,
    }
}
