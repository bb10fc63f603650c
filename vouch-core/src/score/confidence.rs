use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

/// Confidence in a trust score, clamped to [0.1, 1.0].
/// The floor is 0.1: a score computed from no signals still reports
/// minimal confidence, never zero.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Confidence(f64);

impl Confidence {
    /// Lower bound of the confidence range.
    pub const FLOOR: f64 = 0.1;
    /// High confidence threshold.
    pub const HIGH: f64 = 0.7;
    /// Medium confidence threshold.
    pub const MEDIUM: f64 = 0.4;

    /// Create a new Confidence, clamping to [0.1, 1.0].
    pub fn new(value: f64) -> Self {
        Self(value.clamp(Self::FLOOR, 1.0))
    }

    /// Get the raw f64 value.
    pub fn value(self) -> f64 {
        self.0
    }

    /// Qualitative band for this confidence value.
    pub fn level(self) -> ConfidenceLevel {
        ConfidenceLevel::from_score(self.0)
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}

impl From<f64> for Confidence {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<Confidence> for f64 {
    fn from(c: Confidence) -> Self {
        c.0
    }
}

/// Qualitative confidence banding for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceLevel {
    High,
    Medium,
    Low,
}

impl ConfidenceLevel {
    /// Band a raw confidence value.
    pub fn from_score(value: f64) -> Self {
        if value >= Confidence::HIGH {
            Self::High
        } else if value >= Confidence::MEDIUM {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
