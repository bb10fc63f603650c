use chrono::{Duration, Utc};
use proptest::prelude::*;

use vouch_core::config::{ScoreFormula, TrustConfig};
use vouch_core::ids::{ContentId, UserId};
use vouch_core::social::{ContentMetadata, InteractionKind, TasteSignals, UserInteraction};
use vouch_graph::SocialDistance;
use vouch_trust::{confidence, factors, formula, TrustQuery};

fn make_content(author: &str, age_days: i64) -> ContentMetadata {
    ContentMetadata {
        content_id: ContentId::from("rec-1"),
        author_id: UserId::from(author),
        created_at: Utc::now() - Duration::days(age_days),
        category: "restaurant".to_string(),
        tags: vec![],
    }
}

fn arb_kind() -> impl Strategy<Value = InteractionKind> {
    prop_oneof![
        Just(InteractionKind::Upvote),
        Just(InteractionKind::Save),
        Just(InteractionKind::Share),
        Just(InteractionKind::Downvote),
    ]
}

fn arb_interactions() -> impl Strategy<Value = Vec<UserInteraction>> {
    prop::collection::vec(
        (0u8..12, arb_kind(), 0u32..6, 0i64..120).prop_map(|(user, kind, distance, days_ago)| {
            UserInteraction {
                user_id: UserId::from(format!("u{user}")),
                content_id: ContentId::from("rec-1"),
                interaction: kind,
                timestamp: Utc::now() - Duration::days(days_ago),
                social_distance: distance,
            }
        }),
        0..40,
    )
}

fn arb_distance() -> impl Strategy<Value = SocialDistance> {
    prop_oneof![
        (0u32..4).prop_map(SocialDistance::Hops),
        Just(SocialDistance::BeyondNetwork),
    ]
}

fn arb_formula() -> impl Strategy<Value = ScoreFormula> {
    prop_oneof![Just(ScoreFormula::Canonical), Just(ScoreFormula::LegacySocial)]
}

// ── Final score stays on the 0–10 scale ──────────────────────────────────

proptest! {
    #[test]
    fn score_stays_on_scale(
        interactions in arb_interactions(),
        distance in arb_distance(),
        ratio in proptest::option::of(0.0f64..=1.0),
        similarity in 0.0f64..=1.0,
        signal_confidence in 0.0f64..=1.0,
        age_days in 0i64..720,
        which in arb_formula(),
    ) {
        let content = make_content("bob", age_days);
        let signals = TasteSignals {
            similarity,
            cuisine_boost: similarity,
            correlation_boost: similarity,
            confidence: signal_confidence,
        };
        let evaluator = UserId::from("alice");
        let query = TrustQuery {
            evaluator: &evaluator,
            content: &content,
            interactions: &interactions,
            author_positive_ratio: ratio,
            taste: Some(&signals),
            context: None,
            preferences: None,
            now: Utc::now(),
        };
        let config = TrustConfig { formula: which, ..Default::default() };

        let computation = formula::compute(&query, distance, &config);
        prop_assert!(
            (0.0..=10.0).contains(&computation.final_score),
            "Out of scale: {}",
            computation.final_score
        );
    }
}

// ── Every factor stays in its documented range ───────────────────────────

proptest! {
    #[test]
    fn factors_stay_in_range(
        interactions in arb_interactions(),
        distance in arb_distance(),
        ratio in proptest::option::of(-1.0f64..=2.0),
        age_days in 0i64..720,
    ) {
        let content = make_content("bob", age_days);
        let now = Utc::now();

        let social = factors::social::calculate(distance, ratio);
        prop_assert!((0.0..=1.0).contains(&social), "social: {social}");

        let quality = factors::quality::calculate(&interactions);
        prop_assert!((0.0..=1.0).contains(&quality), "quality: {quality}");

        let recency = factors::recency::calculate(content.created_at, &interactions, now);
        prop_assert!((0.0..=1.0).contains(&recency), "recency: {recency}");

        let diversity = factors::diversity::calculate(&interactions);
        prop_assert!((0.0..=0.65).contains(&diversity), "diversity: {diversity}");
    }
}

// ── Confidence honours its clamp ─────────────────────────────────────────

proptest! {
    #[test]
    fn confidence_honours_clamp(
        social in 0.0f64..=1.0,
        taste in 0.0f64..=1.0,
        count in 0usize..500,
        distance in arb_distance(),
    ) {
        let value = confidence::calculate(social, taste, count, distance).value();
        prop_assert!(
            (0.1..=1.0).contains(&value),
            "Confidence out of clamp: {}",
            value
        );
    }
}

// ── More proximity never hurts the social factor ─────────────────────────

proptest! {
    #[test]
    fn closer_is_never_worse(
        ratio in proptest::option::of(0.0f64..=1.0),
    ) {
        let mut prev = f64::MAX;
        for distance in [
            SocialDistance::Hops(0),
            SocialDistance::Hops(1),
            SocialDistance::Hops(2),
            SocialDistance::BeyondNetwork,
        ] {
            let factor = factors::social::calculate(distance, ratio);
            prop_assert!(
                factor <= prev + f64::EPSILON,
                "Social factor rose with distance: {} then {}",
                prev,
                factor
            );
            prev = factor;
        }
    }
}
