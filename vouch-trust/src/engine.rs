//! Trust scoring engine.

use rayon::prelude::*;
use tracing::{debug, instrument};

use vouch_core::config::TrustConfig;
use vouch_core::models::TrustScoreResult;
use vouch_core::score::{TrustCategory, TrustScore};
use vouch_graph::SocialGraphIndex;

use crate::confidence;
use crate::explanation;
use crate::formula;
use crate::query::TrustQuery;

/// Scores recommendations against a follow graph using the
/// configured combination formula.
///
/// The engine holds only configuration. Graph and query data are
/// borrowed per call, so one engine can serve any number of
/// evaluators concurrently.
pub struct TrustScoreEngine {
    config: TrustConfig,
}

impl TrustScoreEngine {
    /// Engine with the default configuration.
    pub fn new() -> Self {
        Self {
            config: TrustConfig::default(),
        }
    }

    /// Engine with a custom configuration.
    pub fn with_config(config: TrustConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TrustConfig {
        &self.config
    }

    /// Score one recommendation for one evaluator.
    ///
    /// Never fails: missing signals fall back to their neutral
    /// values, and content from outside the network simply scores
    /// low with low confidence.
    #[instrument(skip(self, graph, query))]
    pub fn score(&self, graph: &SocialGraphIndex, query: &TrustQuery<'_>) -> TrustScoreResult {
        let author = &query.content.author_id;
        let distance = graph.distance(query.evaluator, author, self.config.max_depth);
        let computation = formula::compute(query, distance, &self.config);

        let social_path = graph.path(query.evaluator, author, self.config.max_depth);
        let confidence = confidence::calculate(
            computation.breakdown.social_trust_weight,
            computation.taste_confidence,
            query.interactions.len(),
            distance,
        );
        let explanation =
            explanation::render(computation.final_score, distance, &computation.breakdown);

        debug!(
            evaluator = %query.evaluator,
            content = %query.content.content_id,
            score = computation.final_score,
            confidence = confidence.value(),
            ?distance,
            "scored recommendation"
        );

        TrustScoreResult {
            final_score: TrustScore::new(computation.final_score),
            breakdown: computation.breakdown,
            social_path,
            confidence,
            confidence_level: confidence.level(),
            explanation,
        }
    }

    /// Score a batch in parallel. Each item is scored independently;
    /// results keep the input order.
    pub fn score_batch(
        &self,
        graph: &SocialGraphIndex,
        queries: &[TrustQuery<'_>],
    ) -> Vec<TrustScoreResult> {
        queries
            .par_iter()
            .map(|query| self.score(graph, query))
            .collect()
    }

    /// Discrete trust band for a score.
    pub fn trust_category(&self, score: TrustScore) -> TrustCategory {
        score.category()
    }

    /// Whether a score clears the reward qualification threshold.
    pub fn meets_trust_threshold(&self, score: TrustScore) -> bool {
        score.meets_reward_threshold()
    }
}

impl Default for TrustScoreEngine {
    fn default() -> Self {
        Self::new()
    }
}
