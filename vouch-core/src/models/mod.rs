//! Result models returned to the host platform.

pub mod emission;
pub mod reward;
pub mod social_path;
pub mod trust_result;

pub use emission::EmissionPoolState;
pub use reward::{
    AppliedCap, CapReport, PoolImpact, RewardBreakdown, RewardCalculationResult, RewardType,
    TokenReward,
};
pub use social_path::{PathHop, SocialPath};
pub use trust_result::{TrustBreakdown, TrustScoreResult};
