use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::ids::{ContentId, UserId};

/// Immutable metadata for a recommendation being scored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ContentMetadata {
    pub content_id: ContentId,
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
    /// Category slug, e.g. "restaurant" or "travel".
    pub category: String,
    pub tags: Vec<String>,
}
