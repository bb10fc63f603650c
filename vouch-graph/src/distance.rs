use vouch_core::constants;

/// Social distance between two users, bounded by the BFS depth limit.
///
/// A user beyond the depth bound contributes zero trust; it is a
/// normal query result, never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SocialDistance {
    /// Reachable in this many hops (0 = same user).
    Hops(u32),
    /// Not reachable within the depth bound.
    BeyondNetwork,
}

impl SocialDistance {
    /// Trust weight for this distance band.
    pub fn weight(self) -> f64 {
        match self {
            Self::Hops(h) => constants::distance_weight(h),
            Self::BeyondNetwork => 0.0,
        }
    }

    pub fn is_within_network(self) -> bool {
        matches!(self, Self::Hops(_))
    }

    /// Raw hop count, if within the network.
    pub fn hops(self) -> Option<u32> {
        match self {
            Self::Hops(h) => Some(h),
            Self::BeyondNetwork => None,
        }
    }
}
