use crate::graph::Distance;
use serde::{Deserialize, Serialize};
use std::{fmt, time::Duration};

/// How a search ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathOutcome {
    /// A route with at least one edge.
    Found,
    /// Source and destination are the same location.
    Trivial,
    /// A name did not resolve, or no route exists.
    NoPath,
    /// A search budget ran out; the path is the best one seen so far.
    Aborted,
}

impl PathOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            PathOutcome::Found => "found",
            PathOutcome::Trivial => "trivial",
            PathOutcome::NoPath => "no_path",
            PathOutcome::Aborted => "aborted",
        }
    }
}

impl fmt::Display for PathOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Route produced by one search, with its weight and computation time.
///
/// An empty path always carries weight 0. A path of two or more locations
/// carries the sum of the edge weights along it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathResult {
    path: Vec<String>,
    total_weight: Distance,
    elapsed: Duration,
    outcome: PathOutcome,
}

impl PathResult {
    pub fn found(path: Vec<String>, total_weight: Distance, elapsed: Duration) -> Self {
        Self {
            path,
            total_weight,
            elapsed,
            outcome: PathOutcome::Found,
        }
    }

    pub fn trivial(location: impl Into<String>, elapsed: Duration) -> Self {
        Self {
            path: vec![location.into()],
            total_weight: 0,
            elapsed,
            outcome: PathOutcome::Trivial,
        }
    }

    pub fn no_path(elapsed: Duration) -> Self {
        Self {
            path: Vec::new(),
            total_weight: 0,
            elapsed,
            outcome: PathOutcome::NoPath,
        }
    }

    /// Budget ran out. `best` is the cheapest complete path seen so far, if any.
    pub fn aborted(best: Option<(Vec<String>, Distance)>, elapsed: Duration) -> Self {
        let (path, total_weight) = best.unwrap_or_default();
        Self {
            path,
            total_weight,
            elapsed,
            outcome: PathOutcome::Aborted,
        }
    }

    pub fn path(&self) -> &[String] {
        &self.path
    }

    pub fn into_path(self) -> Vec<String> {
        self.path
    }

    pub fn total_weight(&self) -> Distance {
        self.total_weight
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }

    pub fn outcome(&self) -> PathOutcome {
        self.outcome
    }

    pub fn is_no_path(&self) -> bool {
        self.path.is_empty()
    }

    /// True when the result is a real route with at least one edge.
    pub fn has_route(&self) -> bool {
        self.path.len() >= 2
    }

    /// Number of edges travelled.
    pub fn stops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

impl fmt::Display for PathResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            return f.write_str("No path found");
        }
        f.write_str(&self.path.join(" -> "))
    }
}
