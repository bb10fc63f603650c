//! Input records supplied by the host platform: follow connections,
//! engagement events, content metadata, action events, and the
//! optional taste/context signal bundles.

pub mod action;
pub mod connection;
pub mod content;
pub mod interaction;
pub mod preferences;
pub mod signals;

pub use action::{ActionMetadata, ActionType, RewardableAction, SocialEndorsement};
pub use connection::{ConnectionType, SocialConnection};
pub use content::ContentMetadata;
pub use interaction::{InteractionKind, UserInteraction};
pub use preferences::UserPreferences;
pub use signals::{ContextualSignals, TasteSignals};
