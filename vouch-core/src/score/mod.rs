pub mod category;
pub mod confidence;
pub mod trust_score;

pub use category::TrustCategory;
pub use confidence::{Confidence, ConfidenceLevel};
pub use trust_score::TrustScore;
