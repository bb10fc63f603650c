//! Configuration for the trust engine, reward calculator, and
//! emission pool. All structs deserialize with `#[serde(default)]` so
//! hosts override only what they need.

pub mod defaults;
pub mod emission_config;
pub mod reward_config;
pub mod trust_config;

pub use emission_config::EmissionConfig;
pub use reward_config::RewardConfig;
pub use trust_config::{ScoreFormula, TrustConfig};

use serde::{Deserialize, Serialize};

/// Aggregate configuration for the full subsystem.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VouchConfig {
    pub trust: TrustConfig,
    pub reward: RewardConfig,
    pub emission: EmissionConfig,
}
