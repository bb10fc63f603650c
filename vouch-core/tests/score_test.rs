use vouch_core::constants;
use vouch_core::score::{Confidence, ConfidenceLevel, TrustCategory, TrustScore};

// --- TrustScore ---

#[test]
fn trust_score_clamps_to_scale() {
    assert_eq!(TrustScore::new(12.3).value(), 10.0);
    assert_eq!(TrustScore::new(-1.0).value(), 0.0);
    assert_eq!(TrustScore::new(7.25).value(), 7.25);
}

#[test]
fn trust_score_reward_threshold_boundary() {
    assert!(
        TrustScore::new(0.25).meets_reward_threshold(),
        "0.25 is the inclusive qualification threshold"
    );
    assert!(!TrustScore::new(0.2).meets_reward_threshold());
}

#[test]
fn trust_category_bands() {
    assert_eq!(TrustCategory::from_score(8.6), TrustCategory::HighlyTrusted);
    assert_eq!(TrustCategory::from_score(8.0), TrustCategory::HighlyTrusted);
    assert_eq!(TrustCategory::from_score(7.99), TrustCategory::Trusted);
    assert_eq!(TrustCategory::from_score(6.0), TrustCategory::Trusted);
    assert_eq!(
        TrustCategory::from_score(4.0),
        TrustCategory::ModeratelyTrusted
    );
    assert_eq!(TrustCategory::from_score(2.0), TrustCategory::LowTrust);
    assert_eq!(TrustCategory::from_score(1.99), TrustCategory::Untrusted);
    assert_eq!(TrustCategory::from_score(0.0), TrustCategory::Untrusted);
}

#[test]
fn trust_category_display_names() {
    assert_eq!(
        TrustCategory::HighlyTrusted.display_name(),
        "Highly Trusted"
    );
    assert_eq!(
        TrustCategory::ModeratelyTrusted.display_name(),
        "Moderately Trusted"
    );
    assert_eq!(TrustCategory::LowTrust.to_string(), "Low Trust");
}

#[test]
fn trust_score_category_shortcut_matches_from_score() {
    let score = TrustScore::new(6.4);
    assert_eq!(score.category(), TrustCategory::from_score(6.4));
}

// --- Confidence ---

#[test]
fn confidence_clamps_to_floor_and_ceiling() {
    assert_eq!(Confidence::new(0.0).value(), 0.1);
    assert_eq!(Confidence::new(-2.0).value(), 0.1);
    assert_eq!(Confidence::new(1.5).value(), 1.0);
    assert_eq!(Confidence::new(0.55).value(), 0.55);
}

#[test]
fn confidence_levels_band_at_thresholds() {
    assert_eq!(Confidence::new(0.7).level(), ConfidenceLevel::High);
    assert_eq!(Confidence::new(0.69).level(), ConfidenceLevel::Medium);
    assert_eq!(Confidence::new(0.4).level(), ConfidenceLevel::Medium);
    assert_eq!(Confidence::new(0.39).level(), ConfidenceLevel::Low);
}

#[test]
fn confidence_level_strings() {
    assert_eq!(ConfidenceLevel::High.as_str(), "high");
    assert_eq!(ConfidenceLevel::Medium.as_str(), "medium");
    assert_eq!(ConfidenceLevel::Low.as_str(), "low");
}

// --- Distance weights ---

#[test]
fn distance_weight_table() {
    assert_eq!(constants::distance_weight(0), 1.0);
    assert_eq!(constants::distance_weight(1), 0.75);
    assert_eq!(constants::distance_weight(2), 0.25);
    assert_eq!(constants::distance_weight(3), 0.0);
    assert_eq!(constants::distance_weight(99), 0.0);
}

#[test]
fn endorsement_weight_table_has_no_self_tier() {
    assert_eq!(constants::endorsement_weight(0), 0.0);
    assert_eq!(constants::endorsement_weight(1), 0.75);
    assert_eq!(constants::endorsement_weight(2), 0.25);
    assert_eq!(constants::endorsement_weight(3), 0.0);
}

#[test]
fn canonical_factor_weights_sum_to_one() {
    let sum = constants::SOCIAL_FACTOR_WEIGHT
        + constants::TASTE_FACTOR_WEIGHT
        + constants::CONTEXTUAL_FACTOR_WEIGHT;
    assert!((sum - 1.0).abs() < 1e-12);
}
