use super::budget::SearchBudget;
use super::result::PathResult;
use super::utils::{path_names, path_weight, reconstruct_path, start_search};
use super::{PathSearch, log_search};
use crate::algorithm::Algorithm;
use crate::graph::Graph;
use crate::pathfinding_config::SearchConfig;
use std::time::Instant;

struct DfsState {
    stack: Vec<usize>,
    visited: Vec<bool>,
    parents: Vec<Option<usize>>,
}

impl DfsState {
    fn new(start: usize, location_count: usize) -> Self {
        let mut visited = vec![false; location_count];
        visited[start] = true;

        Self {
            stack: vec![start],
            visited,
            parents: vec![None; location_count],
        }
    }

    fn visit_neighbor(&mut self, neighbor: usize, current: usize) {
        if !self.visited[neighbor] {
            self.visited[neighbor] = true;
            self.parents[neighbor] = Some(current);
            self.stack.push(neighbor);
        }
    }
}

/// Depth-first search that stops at the first route it reaches.
///
/// Neighbors are pushed in adjacency order onto a LIFO stack, so the last
/// connection added to a location is explored first. The route is whatever
/// that order reaches first and is usually not the cheapest one.
pub struct UnguidedSearch<'g> {
    graph: &'g Graph,
    config: SearchConfig,
}

impl<'g> UnguidedSearch<'g> {
    pub fn new(graph: &'g Graph) -> Self {
        Self::with_config(graph, SearchConfig::default())
    }

    pub fn with_config(graph: &'g Graph, config: SearchConfig) -> Self {
        Self { graph, config }
    }

    pub fn find_path(&self, source: &str, destination: &str) -> PathResult {
        let search_timer = Instant::now();

        let (start, target) = match start_search(self.graph, source, destination, search_timer) {
            Ok(pair) => pair,
            Err(result) => return result,
        };

        let mut budget = SearchBudget::new(&self.config, search_timer);
        let mut dfs_state = DfsState::new(start, self.graph.location_count());

        while let Some(current) = dfs_state.stack.pop() {
            if current == target {
                let indices = reconstruct_path(&dfs_state.parents, target);
                let total_weight = path_weight(self.graph, &indices);
                let path = path_names(self.graph, &indices);
                let result = PathResult::found(path, total_weight, search_timer.elapsed());
                log_search(Algorithm::Dfs, &result, budget.expansions());
                return result;
            }

            if !budget.try_expand() {
                let result = PathResult::aborted(None, search_timer.elapsed());
                log_search(Algorithm::Dfs, &result, budget.expansions());
                return result;
            }

            for edge in self.graph.neighbors(current) {
                dfs_state.visit_neighbor(edge.to, current);
            }
        }

        let result = PathResult::no_path(search_timer.elapsed());
        log_search(Algorithm::Dfs, &result, budget.expansions());
        result
    }
}

impl PathSearch for UnguidedSearch<'_> {
    fn search(&self, source: &str, destination: &str) -> PathResult {
        self.find_path(source, destination)
    }

    fn algorithm(&self) -> Algorithm {
        Algorithm::Dfs
    }
}
