//! Human-readable scoring explanations.
//!
//! One line per score, built from a category label, a proximity
//! phrase, and whichever factor highlights apply. Hosts surface the
//! line next to the recommendation.

use vouch_core::models::TrustBreakdown;
use vouch_core::score::TrustCategory;
use vouch_graph::SocialDistance;

/// Factor levels worth calling out.
const STRONG_TASTE: f64 = 0.7;
const STRONG_QUALITY: f64 = 0.7;
const STRONG_RECENCY: f64 = 0.8;
const BROAD_DIVERSITY: f64 = 0.3;

/// Phrase for a social proximity band.
pub fn proximity_phrase(distance: SocialDistance) -> &'static str {
    match distance {
        SocialDistance::Hops(0) => "your own recommendation",
        SocialDistance::Hops(1) => "recommended by someone you follow",
        SocialDistance::Hops(_) => "recommended through your extended network",
        SocialDistance::BeyondNetwork => "from outside your network",
    }
}

/// Render the explanation line for a scored recommendation.
pub fn render(score: f64, distance: SocialDistance, breakdown: &TrustBreakdown) -> String {
    let category = TrustCategory::from_score(score);
    let mut line = format!(
        "{} ({:.1}/10): {}",
        category.display_name(),
        score,
        proximity_phrase(distance)
    );

    let mut highlights: Vec<&str> = Vec::new();
    if breakdown.taste_alignment_weight >= STRONG_TASTE {
        highlights.push("strong taste match");
    }
    if breakdown.quality_signals >= STRONG_QUALITY {
        highlights.push("well received");
    }
    if breakdown.recency_factor >= STRONG_RECENCY {
        highlights.push("recent activity");
    }
    if breakdown.diversity_bonus >= BROAD_DIVERSITY {
        highlights.push("endorsed across the network");
    }

    if !highlights.is_empty() {
        line.push_str("; ");
        line.push_str(&highlights.join(", "));
    }
    line
}
