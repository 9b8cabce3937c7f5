use crate::pathfinding_config::SearchConfig;
use std::time::{Duration, Instant};

/// Read the clock once every 1024 expansions.
const CLOCK_CHECK_MASK: u64 = 0x3FF;

/// Tracks expansions against the limits in a [`SearchConfig`].
pub(crate) struct SearchBudget {
    max_expansions: Option<u64>,
    deadline: Option<Instant>,
    expansions: u64,
}

impl SearchBudget {
    pub(crate) fn new(config: &SearchConfig, started_at: Instant) -> Self {
        Self {
            max_expansions: config.max_expansions,
            deadline: config
                .time_limit
                .and_then(|limit: Duration| started_at.checked_add(limit)),
            expansions: 0,
        }
    }

    /// Counts one expansion. Returns `false` once the budget is spent.
    pub(crate) fn try_expand(&mut self) -> bool {
        if let Some(max) = self.max_expansions {
            if self.expansions >= max {
                return false;
            }
        }

        if let Some(deadline) = self.deadline {
            if self.expansions & CLOCK_CHECK_MASK == 0 && Instant::now() >= deadline {
                return false;
            }
        }

        self.expansions = self.expansions.wrapping_add(1);
        true
    }

    pub(crate) fn expansions(&self) -> u64 {
        self.expansions
    }
}
