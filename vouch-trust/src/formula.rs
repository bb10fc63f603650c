//! Trust combination formulas.

use vouch_core::config::{ScoreFormula, TrustConfig};
use vouch_core::constants::{
    CONTEXTUAL_FACTOR_WEIGHT, QUALITY_FLOOR, SCORE_SCALE, SOCIAL_FACTOR_WEIGHT,
    TASTE_FACTOR_WEIGHT,
};
use vouch_core::models::TrustBreakdown;
use vouch_graph::SocialDistance;

use crate::factors;
use crate::query::TrustQuery;

/// One full factor evaluation.
#[derive(Debug, Clone)]
pub struct TrustComputation {
    /// Combined score on the 0–10 scale.
    pub final_score: f64,
    /// The six factor values that produced it.
    pub breakdown: TrustBreakdown,
    /// Confidence contributed by whichever taste path was taken.
    pub taste_confidence: f64,
}

/// Evaluate every factor and combine them.
///
/// ```text
/// base       = social × 0.3 + taste × 0.5 + context × 0.2
/// multiplier = max(0.5, quality + diversity)
/// final      = clamp(base × multiplier × recency × 10, 0, 10)
/// ```
///
/// The legacy formula replaces the blended base with the social
/// factor alone; everything downstream of the base is unchanged. The
/// breakdown always records all six factors, whichever formula ran.
pub fn compute(
    query: &TrustQuery<'_>,
    distance: SocialDistance,
    config: &TrustConfig,
) -> TrustComputation {
    let social = factors::social::calculate(distance, query.author_positive_ratio);
    let taste = factors::taste::calculate(
        query.content,
        query.taste,
        query.preferences,
        config.preference_fallback,
    );
    let contextual = factors::contextual::calculate(query.context);
    let quality = factors::quality::calculate(query.interactions);
    let recency =
        factors::recency::calculate(query.content.created_at, query.interactions, query.now);
    let diversity = factors::diversity::calculate(query.interactions);

    let base = match config.formula {
        ScoreFormula::Canonical => {
            SOCIAL_FACTOR_WEIGHT * social
                + TASTE_FACTOR_WEIGHT * taste.score
                + CONTEXTUAL_FACTOR_WEIGHT * contextual
        }
        ScoreFormula::LegacySocial => social,
    };
    let multiplier = (quality + diversity).max(QUALITY_FLOOR);
    let final_score = (base * multiplier * recency * SCORE_SCALE).clamp(0.0, SCORE_SCALE);

    TrustComputation {
        final_score,
        breakdown: TrustBreakdown {
            social_trust_weight: social,
            taste_alignment_weight: taste.score,
            contextual_match_weight: contextual,
            quality_signals: quality,
            recency_factor: recency,
            diversity_bonus: diversity,
        },
        taste_confidence: taste.confidence,
    }
}
