//! Error handling for Vouch.
//! One error enum per subsystem, `thiserror` only.
//!
//! Scoring itself never errors: below-threshold scores produce zero
//! results with a recorded reason, and unreachable users read as
//! beyond-network. Errors are reserved for the emission ledger and
//! serialization boundaries.

pub mod reward_error;

pub use reward_error::RewardError;

/// Top-level error for the workspace.
#[derive(Debug, thiserror::Error)]
pub enum VouchError {
    #[error("reward error: {0}")]
    RewardError(#[from] RewardError),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type VouchResult<T> = Result<T, VouchError>;
