use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Precomputed taste correlation between an evaluator and a piece of
/// content, produced by the host's taste pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TasteSignals {
    /// Overall taste similarity. Range: 0.0 – 1.0.
    pub similarity: f64,
    /// Shared-cuisine affinity boost. Range: 0.0 – 1.0.
    pub cuisine_boost: f64,
    /// Rating-correlation boost. Range: 0.0 – 1.0.
    pub correlation_boost: f64,
    /// Confidence in these signals. Below 0.3 the engine ignores them
    /// and falls back to stored preferences.
    pub confidence: f64,
}

/// Per-dimension context match for a recommendation.
/// Absent dimensions read as 0.5 neutral.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(default)]
pub struct ContextualSignals {
    pub occasion_match: Option<f64>,
    pub temporal_match: Option<f64>,
    pub party_size_match: Option<f64>,
    pub price_match: Option<f64>,
    pub location_match: Option<f64>,
}
