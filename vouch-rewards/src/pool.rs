//! Fixed-supply emission pool with halving.

use std::sync::Mutex;

use chrono::Utc;
use tracing::{debug, info, instrument};

use vouch_core::config::EmissionConfig;
use vouch_core::errors::RewardError;
use vouch_core::models::{EmissionPoolState, PoolImpact};

/// Thread-safe emission pool ledger.
///
/// Every balance change goes through [`EmissionLedger::distribute`],
/// which checks, deducts, and applies halving under one lock, so
/// concurrent payouts can never overdraw the pool or skip a halving.
/// Reads take snapshots and never block writers for long.
pub struct EmissionLedger {
    state: Mutex<EmissionPoolState>,
    /// Distribution step between halving thresholds, fixed at creation.
    halving_step: f64,
}

impl EmissionLedger {
    /// Ledger with a freshly allocated pool.
    pub fn new(config: &EmissionConfig) -> Self {
        let state = EmissionPoolState {
            total_supply: config.total_supply,
            remaining_pool: config.rewards_pool(),
            current_emission_rate: config.initial_rate,
            distributed_tokens: 0.0,
            halving_count: 0,
            next_halving_threshold: config.halving_step(),
            last_updated: Utc::now(),
        };
        Self {
            state: Mutex::new(state),
            halving_step: config.halving_step(),
        }
    }

    /// Restore a ledger from a persisted snapshot.
    pub fn from_state(state: EmissionPoolState, config: &EmissionConfig) -> Self {
        Self {
            state: Mutex::new(state),
            halving_step: config.halving_step(),
        }
    }

    /// Draw `amount` from the pool.
    ///
    /// Checks and mutation happen under one lock: an exhausted pool
    /// rejects everything, an overdraw rejects without partial
    /// application, and a draw that crosses one or more halving
    /// thresholds halves the emission rate for every threshold it
    /// crosses. The halved rate applies to subsequent rewards, not
    /// the one that triggered it.
    #[instrument(skip(self))]
    pub fn distribute(&self, amount: f64) -> Result<PoolImpact, RewardError> {
        let mut state = self.state.lock().map_err(|_| RewardError::LedgerPoisoned)?;

        if state.remaining_pool <= 0.0 {
            return Err(RewardError::PoolExhausted {
                distributed: state.distributed_tokens,
            });
        }
        if amount > state.remaining_pool {
            return Err(RewardError::InsufficientPool {
                requested: amount,
                available: state.remaining_pool,
            });
        }

        state.remaining_pool -= amount;
        state.distributed_tokens += amount;

        let mut trigger_halving = false;
        while state.distributed_tokens >= state.next_halving_threshold {
            state.halving_count += 1;
            state.current_emission_rate /= 2.0;
            state.next_halving_threshold = f64::from(state.halving_count + 1) * self.halving_step;
            trigger_halving = true;
            info!(
                halving_count = state.halving_count,
                emission_rate = state.current_emission_rate,
                "emission rate halved"
            );
        }
        state.last_updated = Utc::now();

        debug!(
            drawn = amount,
            remaining = state.remaining_pool,
            "pool distribution applied"
        );

        Ok(PoolImpact {
            tokens_from_pool: amount,
            remaining_pool: state.remaining_pool,
            trigger_halving,
        })
    }

    /// Point-in-time copy of the pool state.
    pub fn snapshot(&self) -> Result<EmissionPoolState, RewardError> {
        let state = self.state.lock().map_err(|_| RewardError::LedgerPoisoned)?;
        Ok(state.clone())
    }

    /// Emission rate the next distribution will be priced at.
    pub fn current_rate(&self) -> Result<f64, RewardError> {
        Ok(self.snapshot()?.current_emission_rate)
    }

    /// Whether the pool has nothing left to distribute.
    pub fn is_exhausted(&self) -> Result<bool, RewardError> {
        Ok(self.snapshot()?.remaining_pool <= 0.0)
    }

    /// Tokens still to distribute before the next halving trips.
    pub fn tokens_until_halving(&self) -> Result<f64, RewardError> {
        let state = self.snapshot()?;
        Ok((state.next_halving_threshold - state.distributed_tokens).max(0.0))
    }
}
