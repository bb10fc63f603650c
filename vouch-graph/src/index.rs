//! petgraph::StableGraph wrapper with follow nodes indexed by user id.

use std::collections::HashMap;

use petgraph::stable_graph::{NodeIndex, StableGraph};
use petgraph::{Directed, Direction};

use vouch_core::ids::UserId;
use vouch_core::models::SocialPath;
use vouch_core::social::{ConnectionType, SocialConnection};

use crate::distance::SocialDistance;
use crate::traversal;

/// A node in the social graph, representing a user.
#[derive(Debug, Clone)]
pub struct FollowNode {
    pub user_id: UserId,
}

/// Weight on a follow edge.
#[derive(Debug, Clone)]
pub struct FollowEdge {
    pub connection_type: ConnectionType,
    /// Edge weight supplied by the follow store.
    pub trust_weight: f64,
}

/// The underlying directed graph type.
pub type FollowGraph = StableGraph<FollowNode, FollowEdge, Directed>;

/// Adjacency index over directed follow connections.
///
/// Built once from the host's follow store and queried read-only by
/// the trust engine. Distance queries are bounded BFS; cyclic and
/// malformed graphs produce correct results, never errors.
pub struct SocialGraphIndex {
    /// The petgraph stable graph.
    pub(crate) graph: FollowGraph,
    /// Map from user id → NodeIndex for O(1) lookup.
    node_index: HashMap<UserId, NodeIndex>,
}

impl SocialGraphIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self {
            graph: StableGraph::new(),
            node_index: HashMap::new(),
        }
    }

    /// Build an index from follow connections. O(E).
    /// Self-loops are skipped; parallel edges are kept.
    pub fn build(connections: &[SocialConnection]) -> Self {
        let mut index = Self::new();
        for conn in connections {
            index.add_connection(conn);
        }
        index
    }

    /// Insert one connection, creating endpoints as needed.
    pub fn add_connection(&mut self, conn: &SocialConnection) {
        // A user following themselves carries no proximity signal.
        if conn.from_user == conn.to_user {
            return;
        }
        let from = self.ensure_node(&conn.from_user);
        let to = self.ensure_node(&conn.to_user);
        self.graph.add_edge(
            from,
            to,
            FollowEdge {
                connection_type: conn.connection_type,
                trust_weight: conn.trust_weight,
            },
        );
    }

    /// Get or create the node for a user.
    fn ensure_node(&mut self, user_id: &UserId) -> NodeIndex {
        if let Some(&idx) = self.node_index.get(user_id) {
            return idx;
        }
        let idx = self.graph.add_node(FollowNode {
            user_id: user_id.clone(),
        });
        self.node_index.insert(user_id.clone(), idx);
        idx
    }

    /// Look up a node index by user id.
    pub(crate) fn get_node(&self, user_id: &UserId) -> Option<NodeIndex> {
        self.node_index.get(user_id).copied()
    }

    /// Whether the user appears in the graph.
    pub fn contains(&self, user_id: &UserId) -> bool {
        self.node_index.contains_key(user_id)
    }

    /// Number of outgoing follow edges for the user.
    pub fn follow_count(&self, user_id: &UserId) -> usize {
        match self.get_node(user_id) {
            Some(idx) => self
                .graph
                .neighbors_directed(idx, Direction::Outgoing)
                .count(),
            None => 0,
        }
    }

    /// Number of users.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of follow edges.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Social distance from `from` to `to`, bounded at `max_depth` hops.
    pub fn distance(&self, from: &UserId, to: &UserId, max_depth: u32) -> SocialDistance {
        traversal::distance(self, from, to, max_depth)
    }

    /// First shortest follow path from `from` to `to` within `max_depth`.
    pub fn path(&self, from: &UserId, to: &UserId, max_depth: u32) -> Option<SocialPath> {
        traversal::path(self, from, to, max_depth)
    }
}

impl Default for SocialGraphIndex {
    fn default() -> Self {
        Self::new()
    }
}
