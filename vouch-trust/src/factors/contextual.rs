//! Contextual match factor.

use vouch_core::social::ContextualSignals;

/// Sub-factor weights. Occasion dominates: a romantic-dinner match
/// matters more than being nearby.
const OCCASION_WEIGHT: f64 = 0.35;
const TEMPORAL_WEIGHT: f64 = 0.25;
const PARTY_SIZE_WEIGHT: f64 = 0.20;
const PRICE_WEIGHT: f64 = 0.15;
const LOCATION_WEIGHT: f64 = 0.05;

/// Neutral value for absent sub-signals.
const NEUTRAL: f64 = 0.5;

/// Contextual match factor: weighted average of the five context
/// dimensions. An absent dimension reads as 0.5 so partial context
/// neither punishes nor rewards; no context at all is fully neutral.
///
/// Range: 0.0 – 1.0.
pub fn calculate(signals: Option<&ContextualSignals>) -> f64 {
    let signals = match signals {
        Some(signals) => signals,
        None => return NEUTRAL,
    };
    let value = |signal: Option<f64>| signal.unwrap_or(NEUTRAL).clamp(0.0, 1.0);

    OCCASION_WEIGHT * value(signals.occasion_match)
        + TEMPORAL_WEIGHT * value(signals.temporal_match)
        + PARTY_SIZE_WEIGHT * value(signals.party_size_match)
        + PRICE_WEIGHT * value(signals.price_match)
        + LOCATION_WEIGHT * value(signals.location_match)
}
