use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

/// Discrete trust band for UI labeling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum TrustCategory {
    HighlyTrusted,
    Trusted,
    ModeratelyTrusted,
    LowTrust,
    Untrusted,
}

impl TrustCategory {
    /// Band a score on the 0–10 scale.
    pub fn from_score(score: f64) -> Self {
        if score >= 8.0 {
            Self::HighlyTrusted
        } else if score >= 6.0 {
            Self::Trusted
        } else if score >= 4.0 {
            Self::ModeratelyTrusted
        } else if score >= 2.0 {
            Self::LowTrust
        } else {
            Self::Untrusted
        }
    }

    /// Human-readable label.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::HighlyTrusted => "Highly Trusted",
            Self::Trusted => "Trusted",
            Self::ModeratelyTrusted => "Moderately Trusted",
            Self::LowTrust => "Low Trust",
            Self::Untrusted => "Untrusted",
        }
    }
}

impl fmt::Display for TrustCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
