use std::sync::Arc;

use chrono::{Duration, Utc};
use proptest::prelude::*;

use vouch_core::config::EmissionConfig;
use vouch_core::ids::{ActionId, ContentId, UserId};
use vouch_core::models::RewardType;
use vouch_core::social::{
    ActionMetadata, ActionType, InteractionKind, RewardableAction, SocialEndorsement,
};
use vouch_rewards::{bonuses, distribution, schedule, EmissionLedger, RewardCalculator};

fn arb_kind() -> impl Strategy<Value = InteractionKind> {
    prop_oneof![
        Just(InteractionKind::Upvote),
        Just(InteractionKind::Save),
        Just(InteractionKind::Share),
        Just(InteractionKind::Downvote),
    ]
}

fn arb_action_type() -> impl Strategy<Value = ActionType> {
    prop_oneof![
        Just(ActionType::RecommendationCreated),
        Just(ActionType::UpvoteReceived),
        Just(ActionType::ListCreated),
        Just(ActionType::ReferralCompleted),
        Just(ActionType::SpamReported),
        Just(ActionType::Unknown),
    ]
}

fn arb_endorsements() -> impl Strategy<Value = Vec<SocialEndorsement>> {
    prop::collection::vec(
        (0u8..16, 0u32..6, arb_kind()).prop_map(|(user, distance, kind)| SocialEndorsement {
            user_id: UserId::from(format!("u{user}")),
            social_distance: distance,
            interaction: kind,
        }),
        0..24,
    )
}

fn arb_action() -> impl Strategy<Value = RewardableAction> {
    (
        0.0f64..=12.0,
        arb_action_type(),
        arb_endorsements(),
        0i64..40,
        proptest::option::of(prop_oneof![
            Just("travel".to_string()),
            Just("restaurant".to_string()),
            Just("nightlife".to_string()),
        ]),
        proptest::option::of(0.0f64..=3.0),
    )
        .prop_map(
            |(trust_score, action_type, endorsements, age_days, category, multiplier)| {
                RewardableAction {
                    action_id: ActionId::new(),
                    user_id: UserId::from("actor"),
                    content_id: ContentId::from("rec-1"),
                    action_type,
                    trust_score,
                    social_connections: endorsements,
                    timestamp: Utc::now() - Duration::days(age_days),
                    metadata: ActionMetadata {
                        category,
                        reward_multiplier: multiplier,
                    },
                }
            },
        )
}

// ── The per-post cap always holds ────────────────────────────────────────

proptest! {
    #[test]
    fn total_never_exceeds_the_cap(action in arb_action()) {
        let calculator =
            RewardCalculator::new(Arc::new(EmissionLedger::new(&EmissionConfig::default())));
        let result = calculator.calculate(&action).unwrap();
        prop_assert!(
            (0.0..=5.0).contains(&result.total_reward),
            "Total out of bounds: {}",
            result.total_reward
        );
        prop_assert!(
            result.breakdown.caps.final_amount
                <= result.breakdown.caps.original_amount + f64::EPSILON
        );
    }
}

// ── Plans never pay out more than the total ──────────────────────────────

proptest! {
    #[test]
    fn plan_conserves_the_total(
        endorsements in arb_endorsements(),
        total in 0.01f64..=5.0,
    ) {
        let action = RewardableAction {
            action_id: ActionId::new(),
            user_id: UserId::from("actor"),
            content_id: ContentId::from("rec-1"),
            action_type: ActionType::RecommendationCreated,
            trust_score: 8.0,
            social_connections: endorsements,
            timestamp: Utc::now(),
            metadata: ActionMetadata::default(),
        };
        let plan = distribution::build_plan(
            &action,
            RewardType::CreationBonus,
            total,
            0.8,
            0.01,
            Utc::now(),
        );
        let paid: f64 = plan.iter().map(|r| r.amount).sum();
        prop_assert!(
            paid <= total + 1e-9,
            "Plan overpays: {} > {}",
            paid,
            total
        );
        for reward in &plan {
            prop_assert!(reward.amount >= 0.01, "Dust slipped through: {}", reward.amount);
        }
    }
}

// ── Bonus and multiplier bounds ──────────────────────────────────────────

proptest! {
    #[test]
    fn social_bonus_respects_its_ceiling(endorsements in arb_endorsements()) {
        let (bonus, _) = bonuses::social_bonus(&endorsements, 2.0);
        prop_assert!((0.0..=2.0).contains(&bonus), "Bonus out of bounds: {}", bonus);
    }
}

proptest! {
    #[test]
    fn trust_multiplier_stays_bounded(trust in 0.0f64..=12.0) {
        let multiplier = schedule::trust_multiplier(trust, 3.0);
        prop_assert!(
            (0.0..=3.0).contains(&multiplier),
            "Multiplier out of bounds: {}",
            multiplier
        );
    }
}
