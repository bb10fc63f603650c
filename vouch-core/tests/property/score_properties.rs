use proptest::prelude::*;
use vouch_core::constants::distance_weight;
use vouch_core::score::{Confidence, TrustCategory, TrustScore};

proptest! {
    #[test]
    fn trust_score_always_within_scale(raw in -1000.0..1000.0f64) {
        let score = TrustScore::new(raw);
        prop_assert!(score.value() >= 0.0);
        prop_assert!(score.value() <= 10.0);
    }

    #[test]
    fn confidence_always_within_bounds(raw in -10.0..10.0f64) {
        let c = Confidence::new(raw);
        prop_assert!(c.value() >= 0.1);
        prop_assert!(c.value() <= 1.0);
    }

    #[test]
    fn distance_weight_never_increases_with_hops(hops in 0u32..16) {
        prop_assert!(distance_weight(hops) >= distance_weight(hops + 1));
    }

    #[test]
    fn category_banding_never_panics(raw in proptest::num::f64::ANY) {
        let _ = TrustCategory::from_score(raw);
    }
}
