//! # vouch-graph
//!
//! The social proximity engine. Builds an in-memory directed follow
//! graph (`petgraph`) and answers bounded-depth distance and
//! shortest-path queries for trust scoring.

pub mod distance;
pub mod index;
pub mod traversal;

pub use distance::SocialDistance;
pub use index::{FollowEdge, FollowNode, SocialGraphIndex};
