//! Reward caps and their audit trail.

use vouch_core::models::{AppliedCap, CapReport};

/// Apply the per-post ceiling to a computed total. `caps` carries any
/// caps that already fired upstream (the social-bonus ceiling); the
/// report keeps them in application order.
pub fn apply(total: f64, max_reward: f64, mut caps: Vec<AppliedCap>) -> (f64, CapReport) {
    let capped = if total > max_reward {
        caps.push(AppliedCap::MaxRewardPerPost);
        max_reward
    } else {
        total
    };

    let report = CapReport {
        applied_caps: caps,
        original_amount: total,
        final_amount: capped,
    };
    (capped, report)
}

/// Report for an action that never qualified: nothing was computed,
/// nothing is paid, and the reason is recorded for the host.
pub fn below_threshold_report() -> CapReport {
    CapReport {
        applied_caps: vec![AppliedCap::BelowTrustThreshold],
        original_amount: 0.0,
        final_amount: 0.0,
    }
}

/// Report for a zero-value action where no cap fired.
pub fn empty_report() -> CapReport {
    CapReport {
        applied_caps: Vec::new(),
        original_amount: 0.0,
        final_amount: 0.0,
    }
}
