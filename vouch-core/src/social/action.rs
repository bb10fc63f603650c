use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::ids::{ActionId, ContentId, UserId};
use crate::social::InteractionKind;

/// Action kinds that can earn token rewards.
///
/// Wire values the calculator does not recognize deserialize to
/// [`ActionType::Unknown`], which earns a zero base reward and a
/// warning log rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ActionType {
    RecommendationCreated,
    /// One batch of ten upvotes received on a recommendation. Batching
    /// happens upstream in the engagement log.
    UpvoteReceived,
    ListCreated,
    ReferralCompleted,
    SpamReported,
    #[serde(other)]
    Unknown,
}

/// An endorsement attached to a rewardable action: a member of the
/// acting user's network who engaged with the content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SocialEndorsement {
    pub user_id: UserId,
    /// Hops from the acting user.
    pub social_distance: u32,
    pub interaction: InteractionKind,
}

/// Optional attributes attached to an action.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(default)]
pub struct ActionMetadata {
    /// Content category, for the per-category quality bonus.
    pub category: Option<String>,
    /// Host-supplied scale applied to the quality bonus.
    pub reward_multiplier: Option<f64>,
}

/// An action event submitted for reward calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RewardableAction {
    pub action_id: ActionId,
    /// The acting user, who receives the primary share.
    pub user_id: UserId,
    pub content_id: ContentId,
    pub action_type: ActionType,
    /// Trust score of the underlying content on the 0–10 scale.
    pub trust_score: f64,
    /// Endorsements from the acting user's network.
    pub social_connections: Vec<SocialEndorsement>,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub metadata: ActionMetadata,
}
