// Single source of truth for all default values.

// --- Trust ---
pub const DEFAULT_MAX_SOCIAL_DEPTH: u32 = 2;
pub const DEFAULT_PREFERENCE_FALLBACK: bool = true;

// --- Rewards ---
pub const DEFAULT_MIN_TRUST_THRESHOLD: f64 = 0.25;
pub const DEFAULT_MAX_REWARD_PER_POST: f64 = 5.0;
pub const DEFAULT_MAX_TRUST_MULTIPLIER: f64 = 3.0;
pub const DEFAULT_MAX_SOCIAL_BONUS: f64 = 2.0;
pub const DEFAULT_PRIMARY_SHARE: f64 = 0.8;
pub const DEFAULT_DUST_THRESHOLD: f64 = 0.01;
pub const DEFAULT_TRAVEL_BONUS: f64 = 0.15;
pub const DEFAULT_RESTAURANT_BONUS: f64 = 0.1;

// --- Emission ---
pub const DEFAULT_TOTAL_SUPPLY: f64 = 10_000_000_000.0;
pub const DEFAULT_REWARDS_POOL_FRACTION: f64 = 0.52;
pub const DEFAULT_HALVING_STEP_FRACTION: f64 = 0.10;
pub const DEFAULT_INITIAL_EMISSION_RATE: f64 = 1.0;
