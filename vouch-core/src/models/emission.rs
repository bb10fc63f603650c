use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Snapshot of the emission pool ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EmissionPoolState {
    pub total_supply: f64,
    /// Tokens remaining in the rewards pool.
    pub remaining_pool: f64,
    /// Emission rate applied to the next distribution. Halves at each
    /// threshold crossing.
    pub current_emission_rate: f64,
    /// Cumulative tokens distributed. Monotonically non-decreasing.
    pub distributed_tokens: f64,
    pub halving_count: u32,
    /// Cumulative distribution level that triggers the next halving.
    pub next_halving_threshold: f64,
    pub last_updated: DateTime<Utc>,
}
