/// Reward and emission ledger errors.
#[derive(Debug, thiserror::Error)]
pub enum RewardError {
    /// The emission pool cannot cover the requested distribution.
    /// Nothing is applied.
    #[error("insufficient pool: requested {requested:.4} tokens, available {available:.4}")]
    InsufficientPool { requested: f64, available: f64 },

    /// The rewards pool has been fully distributed.
    #[error("emission pool exhausted after {distributed:.0} tokens distributed")]
    PoolExhausted { distributed: f64 },

    /// The ledger mutex was poisoned by a panicking writer.
    #[error("emission ledger lock poisoned")]
    LedgerPoisoned,
}
