use chrono::Utc;
use proptest::prelude::*;
use vouch_core::ids::UserId;
use vouch_core::social::{ConnectionType, SocialConnection};
use vouch_graph::{SocialDistance, SocialGraphIndex};

fn follow(from: u8, to: u8) -> SocialConnection {
    SocialConnection {
        from_user: UserId::from(format!("u{from}")),
        to_user: UserId::from(format!("u{to}")),
        connection_type: ConnectionType::Follow,
        established_at: Utc::now(),
        trust_weight: 1.0,
    }
}

fn arb_edges() -> impl Strategy<Value = Vec<(u8, u8)>> {
    prop::collection::vec((0u8..12, 0u8..12), 0..40)
}

proptest! {
    #[test]
    fn distance_never_exceeds_the_depth_bound(
        edges in arb_edges(),
        from in 0u8..12,
        to in 0u8..12,
        max_depth in 0u32..5,
    ) {
        let connections: Vec<_> = edges.iter().map(|&(a, b)| follow(a, b)).collect();
        let graph = SocialGraphIndex::build(&connections);
        let d = graph.distance(
            &UserId::from(format!("u{from}")),
            &UserId::from(format!("u{to}")),
            max_depth,
        );
        if let SocialDistance::Hops(h) = d {
            prop_assert!(h <= max_depth || h == 0);
        }
    }

    #[test]
    fn self_distance_is_always_zero(edges in arb_edges(), user in 0u8..12) {
        let connections: Vec<_> = edges.iter().map(|&(a, b)| follow(a, b)).collect();
        let graph = SocialGraphIndex::build(&connections);
        let id = UserId::from(format!("u{user}"));
        prop_assert_eq!(graph.distance(&id, &id, 2), SocialDistance::Hops(0));
    }

    #[test]
    fn path_length_agrees_with_distance(edges in arb_edges(), from in 0u8..12, to in 0u8..12) {
        let connections: Vec<_> = edges.iter().map(|&(a, b)| follow(a, b)).collect();
        let graph = SocialGraphIndex::build(&connections);
        let from_id = UserId::from(format!("u{from}"));
        let to_id = UserId::from(format!("u{to}"));
        let d = graph.distance(&from_id, &to_id, 2);
        let p = graph.path(&from_id, &to_id, 2);
        match d {
            SocialDistance::Hops(h) => {
                let path = p.expect("reachable pair must have a path");
                prop_assert_eq!(path.edge_count() as u32, h);
            }
            SocialDistance::BeyondNetwork => prop_assert!(p.is_none()),
        }
    }

    #[test]
    fn weight_is_monotone_in_distance(h in 0u32..6) {
        prop_assert!(SocialDistance::Hops(h).weight() >= SocialDistance::Hops(h + 1).weight());
        prop_assert!(SocialDistance::Hops(h).weight() >= SocialDistance::BeyondNetwork.weight());
    }
}
