//! # vouch-core
//!
//! Foundation crate for the Vouch trust and rewards system.
//! Defines all input records, result models, score newtypes, errors,
//! config, and constants. Every other crate in the workspace depends
//! on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod ids;
pub mod models;
pub mod score;
pub mod social;

// Re-export the most commonly used types at the crate root.
pub use config::{EmissionConfig, RewardConfig, ScoreFormula, TrustConfig, VouchConfig};
pub use errors::{VouchError, VouchResult};
pub use ids::{ActionId, ContentId, UserId};
pub use score::{Confidence, ConfidenceLevel, TrustCategory, TrustScore};
