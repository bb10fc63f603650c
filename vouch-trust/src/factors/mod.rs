//! Individual trust factors.
//!
//! Each factor is a pure function over a slice of the query. The
//! combination formula in [`crate::formula`] owns the weighting;
//! factors only report their own signal.

pub mod contextual;
pub mod diversity;
pub mod quality;
pub mod recency;
pub mod social;
pub mod taste;
