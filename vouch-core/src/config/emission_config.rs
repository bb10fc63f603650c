use serde::{Deserialize, Serialize};

use super::defaults;

/// Emission pool configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmissionConfig {
    /// Total token supply.
    pub total_supply: f64,
    /// Fraction of the supply allocated to the rewards pool.
    pub rewards_fraction: f64,
    /// Fraction of the rewards pool distributed between halvings.
    pub halving_step_fraction: f64,
    /// Emission rate before the first halving.
    pub initial_rate: f64,
}

impl EmissionConfig {
    /// Tokens allocated to the rewards pool.
    pub fn rewards_pool(&self) -> f64 {
        self.total_supply * self.rewards_fraction
    }

    /// Distribution step between halving thresholds.
    pub fn halving_step(&self) -> f64 {
        self.rewards_pool() * self.halving_step_fraction
    }
}

impl Default for EmissionConfig {
    fn default() -> Self {
        Self {
            total_supply: defaults::DEFAULT_TOTAL_SUPPLY,
            rewards_fraction: defaults::DEFAULT_REWARDS_POOL_FRACTION,
            halving_step_fraction: defaults::DEFAULT_HALVING_STEP_FRACTION,
            initial_rate: defaults::DEFAULT_INITIAL_EMISSION_RATE,
        }
    }
}
