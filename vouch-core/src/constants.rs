/// Vouch system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Maximum BFS depth for social distance queries.
pub const MAX_SOCIAL_DEPTH: u32 = 2;

/// Trust weight of a user's own content.
pub const SELF_WEIGHT: f64 = 1.0;
/// Trust weight of content from a direct follow (1 hop).
pub const DIRECT_FOLLOW_WEIGHT: f64 = 0.75;
/// Trust weight of content from the extended network (2 hops).
pub const EXTENDED_NETWORK_WEIGHT: f64 = 0.25;

/// Canonical formula factor weights: social 30%, taste 50%, context 20%.
pub const SOCIAL_FACTOR_WEIGHT: f64 = 0.3;
pub const TASTE_FACTOR_WEIGHT: f64 = 0.5;
pub const CONTEXTUAL_FACTOR_WEIGHT: f64 = 0.2;

/// Half-life of the recency factor, in days.
pub const RECENCY_HALF_LIFE_DAYS: f64 = 30.0;

/// Trust scores are reported on a 0–10 scale.
pub const SCORE_SCALE: f64 = 10.0;

/// Floor applied to the combined quality + diversity multiplier.
pub const QUALITY_FLOOR: f64 = 0.5;

/// Trust weight for a given hop count. Zero beyond the depth bound.
pub fn distance_weight(hops: u32) -> f64 {
    match hops {
        0 => SELF_WEIGHT,
        1 => DIRECT_FOLLOW_WEIGHT,
        2 => EXTENDED_NETWORK_WEIGHT,
        _ => 0.0,
    }
}

/// Reward weight of an endorsement by hop count. Unlike trust
/// weighting there is no hop-0 tier: endorsing your own action earns
/// no bonus and no share of the endorser pot.
pub fn endorsement_weight(hops: u32) -> f64 {
    match hops {
        1 => DIRECT_FOLLOW_WEIGHT,
        2 => EXTENDED_NETWORK_WEIGHT,
        _ => 0.0,
    }
}
