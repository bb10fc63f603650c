//! Inputs for one trust evaluation.

use chrono::{DateTime, Utc};

use vouch_core::ids::UserId;
use vouch_core::social::{
    ContentMetadata, ContextualSignals, TasteSignals, UserInteraction, UserPreferences,
};

/// Everything needed to score one recommendation for one evaluator.
///
/// Fields borrow from host-owned stores; the engine never fetches
/// data itself. `now` is explicit so scoring stays deterministic and
/// batch items share a single evaluation instant.
#[derive(Debug, Clone, Copy)]
pub struct TrustQuery<'a> {
    /// The viewing user the score is computed for.
    pub evaluator: &'a UserId,
    /// The recommendation being scored.
    pub content: &'a ContentMetadata,
    /// Engagement events recorded against the content, with each
    /// event's social distance already resolved for the evaluator.
    pub interactions: &'a [UserInteraction],
    /// The author's historical positive-feedback ratio in [0, 1],
    /// when the host tracks one.
    pub author_positive_ratio: Option<f64>,
    /// Precomputed taste correlation between evaluator and author.
    pub taste: Option<&'a TasteSignals>,
    /// Match signals for the evaluator's current context.
    pub context: Option<&'a ContextualSignals>,
    /// The evaluator's stored category and tag affinities.
    pub preferences: Option<&'a UserPreferences>,
    /// Evaluation timestamp.
    pub now: DateTime<Utc>,
}
