//! # vouch-trust
//!
//! Multi-factor trust scoring for social recommendations.
//!
//! A score blends six factors: social proximity, taste alignment,
//! contextual match, engagement quality, recency, and endorsement
//! diversity. The result is a 0–10 trust score with a per-factor
//! breakdown, a confidence estimate, and a one-line explanation.
//!
//! Scoring is pure: every input, including the evaluation timestamp,
//! arrives through [`TrustQuery`], so the same query always produces
//! the same result.

pub mod confidence;
pub mod engine;
pub mod explanation;
pub mod factors;
pub mod formula;
pub mod query;

pub use engine::TrustScoreEngine;
pub use formula::TrustComputation;
pub use query::TrustQuery;
