//! # vouch-rewards
//!
//! Token rewards for trust-qualified social actions.
//!
//! An action that clears the trust threshold earns a base reward from
//! a fixed schedule, scaled by a trust multiplier and the current
//! emission rate, topped up with social, quality, and recency
//! bonuses, and capped per post. The total splits between the acting
//! user and the endorsers who backed the content.
//!
//! All settlement goes through the [`EmissionLedger`], a fixed-supply
//! pool whose emission rate halves at fixed distribution milestones.
//! Pricing ([`RewardCalculator::calculate`] and
//! [`RewardCalculator::estimate`]) never touches the pool; only
//! [`RewardCalculator::distribute`] draws from it.

pub mod bonuses;
pub mod calculator;
pub mod caps;
pub mod distribution;
pub mod pool;
pub mod schedule;

pub use calculator::RewardCalculator;
pub use pool::EmissionLedger;
