//! Taste alignment factor.

use vouch_core::social::{ContentMetadata, TasteSignals, UserPreferences};

/// Blend weights for precomputed taste signals.
const SIMILARITY_WEIGHT: f64 = 0.7;
const CUISINE_WEIGHT: f64 = 0.2;
const CORRELATION_WEIGHT: f64 = 0.1;

/// Minimum signal confidence before the precomputed blend is used.
pub const MIN_SIGNAL_CONFIDENCE: f64 = 0.3;

/// Confidence attributed to a preference-matched fallback.
const FALLBACK_CONFIDENCE: f64 = 0.5;
/// Confidence attributed to the neutral default.
const DEFAULT_CONFIDENCE: f64 = 0.3;

/// Neutral alignment when nothing is known about the evaluator.
const NEUTRAL_ALIGNMENT: f64 = 0.5;

/// A taste evaluation: the factor value plus how much confidence the
/// signal path behind it deserves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TasteAlignment {
    pub score: f64,
    pub confidence: f64,
}

/// Taste alignment factor.
///
/// Three tiers, best signal first:
/// 1. Precomputed signals with confidence ≥ 0.3 blend similarity,
///    cuisine affinity, and rating correlation.
/// 2. The evaluator's stored category/tag affinities, averaged over
///    whichever match the content (when fallback is enabled).
/// 3. Neutral 0.5 when nothing is known.
///
/// Range: 0.0 – 1.0.
pub fn calculate(
    content: &ContentMetadata,
    signals: Option<&TasteSignals>,
    preferences: Option<&UserPreferences>,
    preference_fallback: bool,
) -> TasteAlignment {
    if let Some(signals) = signals {
        if signals.confidence >= MIN_SIGNAL_CONFIDENCE {
            let score = SIMILARITY_WEIGHT * signals.similarity
                + CUISINE_WEIGHT * signals.cuisine_boost
                + CORRELATION_WEIGHT * signals.correlation_boost;
            return TasteAlignment {
                score: score.clamp(0.0, 1.0),
                confidence: signals.confidence.clamp(0.0, 1.0),
            };
        }
    }

    if preference_fallback {
        if let Some(prefs) = preferences {
            if let Some(score) = preference_score(content, prefs) {
                return TasteAlignment {
                    score,
                    confidence: FALLBACK_CONFIDENCE,
                };
            }
        }
    }

    TasteAlignment {
        score: NEUTRAL_ALIGNMENT,
        confidence: DEFAULT_CONFIDENCE,
    }
}

/// Mean of the affinities matching the content's category and tags.
/// `None` when no stored affinity matches at all.
fn preference_score(content: &ContentMetadata, prefs: &UserPreferences) -> Option<f64> {
    let mut sum = 0.0;
    let mut matched = 0usize;

    if let Some(&affinity) = prefs.category_affinity.get(&content.category) {
        sum += affinity;
        matched += 1;
    }
    for tag in &content.tags {
        if let Some(&affinity) = prefs.tag_affinity.get(tag) {
            sum += affinity;
            matched += 1;
        }
    }

    if matched == 0 {
        None
    } else {
        Some((sum / matched as f64).clamp(0.0, 1.0))
    }
}
