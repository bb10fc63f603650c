use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use ts_rs::TS;

/// Stored evaluator preferences, used for the taste fallback when no
/// precomputed signals exist or their confidence is too low.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(default)]
pub struct UserPreferences {
    /// Affinity per category slug. Range: 0.0 – 1.0 each.
    pub category_affinity: HashMap<String, f64>,
    /// Affinity per tag. Range: 0.0 – 1.0 each.
    pub tag_affinity: HashMap<String, f64>,
}

impl UserPreferences {
    pub fn is_empty(&self) -> bool {
        self.category_affinity.is_empty() && self.tag_affinity.is_empty()
    }
}
