//! Recency factor.

use chrono::{DateTime, Duration, Utc};

use vouch_core::constants::RECENCY_HALF_LIFE_DAYS;
use vouch_core::social::UserInteraction;

/// Bonus per interaction inside the recent window.
const RECENT_INTERACTION_BONUS: f64 = 0.1;
/// Cap on the summed recent-activity bonus.
const MAX_RECENT_BONUS: f64 = 0.5;
/// Window for the recent-activity bonus.
const RECENT_WINDOW_DAYS: i64 = 7;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Recency factor: exponential decay of content age with a 30-day
/// half-life, `e^(-age_days × ln 2 / 30)`, plus 0.1 per interaction
/// in the last 7 days capped at +0.5. The total is capped at 1.0, so
/// fresh activity can only restore relevance, never amplify it.
///
/// Content timestamped after `now` is treated as age zero.
///
/// Range: 0.0 – 1.0.
pub fn calculate(
    created_at: DateTime<Utc>,
    interactions: &[UserInteraction],
    now: DateTime<Utc>,
) -> f64 {
    let age_days = (now - created_at).num_seconds().max(0) as f64 / SECONDS_PER_DAY;
    let decay = (-age_days * std::f64::consts::LN_2 / RECENCY_HALF_LIFE_DAYS).exp();

    let window_start = now - Duration::days(RECENT_WINDOW_DAYS);
    let recent = interactions
        .iter()
        .filter(|interaction| interaction.timestamp >= window_start)
        .count();
    let bonus = (recent as f64 * RECENT_INTERACTION_BONUS).min(MAX_RECENT_BONUS);

    (decay + bonus).min(1.0)
}
