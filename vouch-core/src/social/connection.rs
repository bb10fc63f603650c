use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::ids::UserId;

/// Kind of social connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionType {
    Follow,
    Friend,
}

/// A directed edge in the social graph: `from_user` follows `to_user`.
///
/// Self-loops are tolerated on the wire and skipped when the graph
/// index is built. Parallel edges are kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SocialConnection {
    pub from_user: UserId,
    pub to_user: UserId,
    pub connection_type: ConnectionType,
    /// When the connection was established.
    pub established_at: DateTime<Utc>,
    /// Edge weight supplied by the follow store. Informational;
    /// distance weighting uses the hop table, not this value.
    pub trust_weight: f64,
}
