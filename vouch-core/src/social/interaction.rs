use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::ids::{ContentId, UserId};

/// How a user engaged with a piece of content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum InteractionKind {
    Upvote,
    Save,
    Share,
    Downvote,
}

impl InteractionKind {
    /// Weight of this interaction in quality and bonus calculations.
    pub fn value(self) -> f64 {
        match self {
            Self::Upvote => 1.0,
            Self::Save => 1.2,
            Self::Share => 1.5,
            Self::Downvote => -0.5,
        }
    }

    pub fn is_positive(self) -> bool {
        !matches!(self, Self::Downvote)
    }
}

/// A single engagement event against a piece of content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct UserInteraction {
    pub user_id: UserId,
    pub content_id: ContentId,
    pub interaction: InteractionKind,
    pub timestamp: DateTime<Utc>,
    /// Hops from the evaluating user, resolved by the engagement log.
    pub social_distance: u32,
}
