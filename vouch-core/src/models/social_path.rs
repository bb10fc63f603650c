use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::ids::UserId;

/// One user on a social path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PathHop {
    pub user_id: UserId,
    /// Hops from the path start (0 = the evaluator).
    pub distance: u32,
    /// Trust weight of this hop's distance band.
    pub weight: f64,
}

/// Shortest follow path between two users, endpoints inclusive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SocialPath {
    pub hops: Vec<PathHop>,
}

impl SocialPath {
    /// Number of users on the path, endpoints included.
    pub fn len(&self) -> usize {
        self.hops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hops.is_empty()
    }

    /// Edges traversed, one less than users on the path.
    pub fn edge_count(&self) -> usize {
        self.hops.len().saturating_sub(1)
    }
}
