//! Bounded BFS over the follow graph: distance banding and
//! shortest-path reconstruction.

use std::collections::{HashMap, HashSet, VecDeque};

use petgraph::stable_graph::NodeIndex;
use petgraph::Direction;

use vouch_core::constants::distance_weight;
use vouch_core::ids::UserId;
use vouch_core::models::{PathHop, SocialPath};

use crate::distance::SocialDistance;
use crate::index::SocialGraphIndex;

/// BFS distance from `from` to `to`, bounded at `max_depth` hops.
/// Unknown users and unreachable targets read as beyond-network.
pub fn distance(
    graph: &SocialGraphIndex,
    from: &UserId,
    to: &UserId,
    max_depth: u32,
) -> SocialDistance {
    if from == to {
        return SocialDistance::Hops(0);
    }

    let (start, target) = match (graph.get_node(from), graph.get_node(to)) {
        (Some(s), Some(t)) => (s, t),
        _ => return SocialDistance::BeyondNetwork,
    };

    let mut visited = HashSet::new();
    visited.insert(start);

    let mut queue = VecDeque::new();
    queue.push_back((start, 0u32));

    while let Some((current, depth)) = queue.pop_front() {
        if depth >= max_depth {
            continue;
        }

        for neighbor in graph.graph.neighbors_directed(current, Direction::Outgoing) {
            if !visited.insert(neighbor) {
                continue;
            }
            if neighbor == target {
                return SocialDistance::Hops(depth + 1);
            }
            queue.push_back((neighbor, depth + 1));
        }
    }

    SocialDistance::BeyondNetwork
}

/// First shortest path from `from` to `to` within `max_depth`. Hops
/// carry the distance-band weight. `None` when beyond the network.
pub fn path(
    graph: &SocialGraphIndex,
    from: &UserId,
    to: &UserId,
    max_depth: u32,
) -> Option<SocialPath> {
    if from == to {
        return Some(SocialPath {
            hops: vec![PathHop {
                user_id: from.clone(),
                distance: 0,
                weight: distance_weight(0),
            }],
        });
    }

    let start = graph.get_node(from)?;
    let target = graph.get_node(to)?;

    let mut visited = HashSet::new();
    visited.insert(start);

    // First-visit parents; BFS order makes the chain a shortest path.
    let mut parent: HashMap<NodeIndex, NodeIndex> = HashMap::new();

    let mut queue = VecDeque::new();
    queue.push_back((start, 0u32));

    while let Some((current, depth)) = queue.pop_front() {
        if depth >= max_depth {
            continue;
        }

        for neighbor in graph.graph.neighbors_directed(current, Direction::Outgoing) {
            if !visited.insert(neighbor) {
                continue;
            }
            parent.insert(neighbor, current);
            if neighbor == target {
                return Some(reconstruct(graph, &parent, target));
            }
            queue.push_back((neighbor, depth + 1));
        }
    }

    None
}

/// Walk the parent chain back from the target and emit hops in
/// evaluator → author order.
fn reconstruct(
    graph: &SocialGraphIndex,
    parent: &HashMap<NodeIndex, NodeIndex>,
    target: NodeIndex,
) -> SocialPath {
    let mut chain = vec![target];
    let mut current = target;
    while let Some(&prev) = parent.get(&current) {
        chain.push(prev);
        current = prev;
    }
    chain.reverse();

    let hops = chain
        .iter()
        .enumerate()
        .filter_map(|(i, &idx)| {
            graph.graph.node_weight(idx).map(|node| PathHop {
                user_id: node.user_id.clone(),
                distance: i as u32,
                weight: distance_weight(i as u32),
            })
        })
        .collect();

    SocialPath { hops }
}
