use std::time::Duration;

/// Limits shared by all search algorithms
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchConfig {
    /// Abort after this many frontier expansions
    pub max_expansions: Option<u64>,
    /// Abort once this much wall-clock time has passed
    pub time_limit: Option<Duration>,
}

impl SearchConfig {
    pub fn new(max_expansions: Option<u64>, time_limit: Option<Duration>) -> Self {
        Self {
            max_expansions,
            time_limit,
        }
    }

    pub fn unlimited() -> Self {
        Self::default()
    }

    pub fn is_unlimited(&self) -> bool {
        self.max_expansions.is_none() && self.time_limit.is_none()
    }
}
