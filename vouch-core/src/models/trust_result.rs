use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::SocialPath;
use crate::score::{Confidence, ConfidenceLevel, TrustScore};

/// Per-factor contributions to a trust score.
///
/// Social, taste, and context are the weighted formula inputs; quality,
/// recency, and diversity are the multiplier components.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TrustBreakdown {
    /// Social proximity factor. 1.0 for self-authored content.
    pub social_trust_weight: f64,
    /// Taste alignment factor. Range: 0.0 – 1.0.
    pub taste_alignment_weight: f64,
    /// Contextual match factor. Range: 0.0 – 1.0.
    pub contextual_match_weight: f64,
    /// Engagement quality multiplier input. Range: 0.0 – 1.0.
    pub quality_signals: f64,
    /// Recency multiplier. Range: 0.0 – 1.0.
    pub recency_factor: f64,
    /// Endorsement diversity bonus. Range: 0.0 – 0.65.
    pub diversity_bonus: f64,
}

/// Full output of a trust evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TrustScoreResult {
    pub final_score: TrustScore,
    pub breakdown: TrustBreakdown,
    /// Shortest follow path from evaluator to author, when one exists
    /// within the depth bound.
    pub social_path: Option<SocialPath>,
    pub confidence: Confidence,
    pub confidence_level: ConfidenceLevel,
    /// Human-readable account of the dominant factors.
    pub explanation: String,
}
