use crate::graph::Graph;
use crate::pathfinding::{ExhaustiveSearch, PathSearch, ShortestPathSearch, UnguidedSearch};
use crate::pathfinding_config::SearchConfig;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// The three route-finding strategies being compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    /// First route found by depth-first search
    Dfs,
    /// Cheapest route over all simple paths, depth-first with pruning
    DfsShortest,
    #[default]
    Dijkstra,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::Dfs, Algorithm::DfsShortest, Algorithm::Dijkstra];

    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Dfs => "dfs",
            Algorithm::DfsShortest => "dfs-shortest",
            Algorithm::Dijkstra => "dijkstra",
        }
    }

    /// Human readable name used in reports.
    pub fn label(&self) -> &'static str {
        match self {
            Algorithm::Dfs => "DFS",
            Algorithm::DfsShortest => "DFS-Shortest",
            Algorithm::Dijkstra => "Dijkstra",
        }
    }

    /// Whether the strategy always returns a cheapest route.
    pub fn is_optimal(&self) -> bool {
        !matches!(self, Algorithm::Dfs)
    }

    pub fn searcher<'g>(
        &self,
        graph: &'g Graph,
        config: SearchConfig,
    ) -> Box<dyn PathSearch + 'g> {
        match self {
            Algorithm::Dfs => Box::new(UnguidedSearch::with_config(graph, config)),
            Algorithm::DfsShortest => Box::new(ExhaustiveSearch::with_config(graph, config)),
            Algorithm::Dijkstra => Box::new(ShortestPathSearch::with_config(graph, config)),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown algorithm '{0}' (expected dfs, dfs-shortest or dijkstra)")]
pub struct UnknownAlgorithm(pub String);

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "dfs" | "unguided" => Ok(Algorithm::Dfs),
            "dfs-shortest" | "exhaustive" => Ok(Algorithm::DfsShortest),
            "dijkstra" | "shortest" => Ok(Algorithm::Dijkstra),
            _ => Err(UnknownAlgorithm(s.to_string())),
        }
    }
}
