//! Reward pricing and settlement.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, instrument, warn};

use vouch_core::config::RewardConfig;
use vouch_core::errors::VouchResult;
use vouch_core::models::{
    AppliedCap, CapReport, EmissionPoolState, PoolImpact, RewardBreakdown,
    RewardCalculationResult,
};
use vouch_core::social::{ActionType, RewardableAction};

use crate::bonuses;
use crate::caps;
use crate::distribution;
use crate::pool::EmissionLedger;
use crate::schedule;

/// Prices rewardable actions and settles them against a shared
/// emission ledger.
///
/// [`calculate`](Self::calculate) and [`estimate`](Self::estimate)
/// price an action against a snapshot of the pool and never mutate
/// it; [`distribute`](Self::distribute) prices and then draws the
/// planned payout in one atomic ledger operation. Each method has an
/// `_at` variant taking an explicit evaluation time; the plain forms
/// evaluate at the current time.
pub struct RewardCalculator {
    config: RewardConfig,
    ledger: Arc<EmissionLedger>,
}

impl RewardCalculator {
    /// Calculator with the default configuration.
    pub fn new(ledger: Arc<EmissionLedger>) -> Self {
        Self {
            config: RewardConfig::default(),
            ledger,
        }
    }

    /// Calculator with a custom configuration.
    pub fn with_config(config: RewardConfig, ledger: Arc<EmissionLedger>) -> Self {
        Self { config, ledger }
    }

    pub fn config(&self) -> &RewardConfig {
        &self.config
    }

    pub fn ledger(&self) -> &EmissionLedger {
        &self.ledger
    }

    /// Whether a trust score clears the configured reward threshold.
    pub fn qualifies_for_reward(&self, trust_score: f64) -> bool {
        trust_score >= self.config.min_trust_threshold
    }

    /// Price an action against the current pool state without
    /// settling anything. The returned pool impact is a projection.
    pub fn calculate(&self, action: &RewardableAction) -> VouchResult<RewardCalculationResult> {
        self.calculate_at(action, Utc::now())
    }

    /// Price an action as of an explicit evaluation time. Recency
    /// tiers and plan timestamps derive from `now`, so pricing at a
    /// pinned time is fully deterministic.
    #[instrument(skip(self, action))]
    pub fn calculate_at(
        &self,
        action: &RewardableAction,
        now: DateTime<Utc>,
    ) -> VouchResult<RewardCalculationResult> {
        let snapshot = self.ledger.snapshot()?;
        Ok(self.price(action, &snapshot, now))
    }

    /// Preview for host UIs. Identical pricing to
    /// [`calculate`](Self::calculate); never touches the pool.
    pub fn estimate(&self, action: &RewardableAction) -> VouchResult<RewardCalculationResult> {
        self.calculate(action)
    }

    /// [`estimate`](Self::estimate) at an explicit evaluation time.
    pub fn estimate_at(
        &self,
        action: &RewardableAction,
        now: DateTime<Utc>,
    ) -> VouchResult<RewardCalculationResult> {
        self.calculate_at(action, now)
    }

    /// Price an action and draw its planned payout from the pool.
    ///
    /// The draw is atomic: either the whole plan total leaves the
    /// pool or, on an exhausted or insufficient pool, nothing does.
    /// Dust the plan dropped is never drawn. Pricing uses the
    /// emission rate at entry.
    pub fn distribute(&self, action: &RewardableAction) -> VouchResult<RewardCalculationResult> {
        self.distribute_at(action, Utc::now())
    }

    /// [`distribute`](Self::distribute) at an explicit evaluation
    /// time.
    #[instrument(skip(self, action))]
    pub fn distribute_at(
        &self,
        action: &RewardableAction,
        now: DateTime<Utc>,
    ) -> VouchResult<RewardCalculationResult> {
        let snapshot = self.ledger.snapshot()?;
        let mut result = self.price(action, &snapshot, now);
        let payable: f64 = result.distribution_plan.iter().map(|reward| reward.amount).sum();
        if payable <= 0.0 {
            return Ok(result);
        }

        let impact = self.ledger.distribute(payable)?;
        result.pool_impact = impact;
        Ok(result)
    }

    /// Shared pricing path. The projected pool impact covers the plan
    /// sum, not the headline total: dust the plan dropped stays in
    /// the pool.
    fn price(
        &self,
        action: &RewardableAction,
        pool: &EmissionPoolState,
        now: DateTime<Utc>,
    ) -> RewardCalculationResult {
        if !self.qualifies_for_reward(action.trust_score) {
            debug!(
                action = %action.action_id,
                trust_score = action.trust_score,
                threshold = self.config.min_trust_threshold,
                "action below trust threshold"
            );
            return Self::zero_result(caps::below_threshold_report(), pool);
        }
        if action.action_type == ActionType::Unknown {
            warn!(action = %action.action_id, "unknown action type earns no reward");
            return Self::zero_result(caps::empty_report(), pool);
        }

        let base = schedule::base_reward(action.action_type);
        let multiplier =
            schedule::trust_multiplier(action.trust_score, self.config.max_trust_multiplier);
        let (social, social_capped) =
            bonuses::social_bonus(&action.social_connections, self.config.max_social_bonus);
        let quality = bonuses::quality_bonus(&action.metadata, &self.config.category_bonuses);
        let recency = bonuses::recency_bonus(action.timestamp, now);

        let mut caps_hit = Vec::new();
        if social_capped {
            caps_hit.push(AppliedCap::SocialBonusCeiling);
            warn!(
                action = %action.action_id,
                ceiling = self.config.max_social_bonus,
                "social bonus ceiling applied"
            );
        }
        let uncapped = base * multiplier * pool.current_emission_rate + social + quality + recency;
        let (total, cap_report) = caps::apply(uncapped, self.config.max_reward_per_post, caps_hit);
        if total < uncapped {
            warn!(
                action = %action.action_id,
                uncapped,
                total,
                "per-post reward cap applied"
            );
        }

        let plan = match schedule::reward_type_for(action.action_type) {
            Some(reward_type) => distribution::build_plan(
                action,
                reward_type,
                total,
                self.config.primary_share,
                self.config.dust_threshold,
                now,
            ),
            None => Vec::new(),
        };
        let planned: f64 = plan.iter().map(|reward| reward.amount).sum();

        debug!(
            action = %action.action_id,
            total,
            base,
            multiplier,
            social,
            recipients = plan.len(),
            "action priced"
        );

        RewardCalculationResult {
            total_reward: total,
            breakdown: RewardBreakdown {
                base_reward: base,
                trust_multiplier: multiplier,
                social_bonuses: social,
                quality_bonus: quality,
                recency_bonus: recency,
                caps: cap_report,
            },
            distribution_plan: plan,
            pool_impact: PoolImpact {
                tokens_from_pool: planned,
                remaining_pool: (pool.remaining_pool - planned).max(0.0),
                trigger_halving: pool.distributed_tokens + planned >= pool.next_halving_threshold,
            },
        }
    }

    /// Result for an action that earns nothing.
    fn zero_result(cap_report: CapReport, pool: &EmissionPoolState) -> RewardCalculationResult {
        RewardCalculationResult {
            total_reward: 0.0,
            breakdown: RewardBreakdown {
                base_reward: 0.0,
                trust_multiplier: 0.0,
                social_bonuses: 0.0,
                quality_bonus: 0.0,
                recency_bonus: 0.0,
                caps: cap_report,
            },
            distribution_plan: Vec::new(),
            pool_impact: PoolImpact {
                tokens_from_pool: 0.0,
                remaining_pool: pool.remaining_pool,
                trigger_halving: false,
            },
        }
    }
}
