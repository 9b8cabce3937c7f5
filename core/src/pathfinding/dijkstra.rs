use super::budget::SearchBudget;
use super::result::PathResult;
use super::utils::{path_names, reconstruct_path, start_search};
use super::{PathSearch, log_search};
use crate::algorithm::Algorithm;
use crate::graph::{Distance, Graph};
use crate::pathfinding_config::SearchConfig;
use std::{cmp::Ordering, collections::BinaryHeap, time::Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct DijkstraNode {
    distance: Distance,
    location: usize,
}

impl PartialOrd for DijkstraNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DijkstraNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so BinaryHeap pops the smallest distance; ties go to the lower index
        other
            .distance
            .cmp(&self.distance)
            .then_with(|| other.location.cmp(&self.location))
    }
}

struct DijkstraState {
    heap: BinaryHeap<DijkstraNode>,
    /// `None` is an unreached location
    distances: Vec<Option<Distance>>,
    parents: Vec<Option<usize>>,
    finalized: Vec<bool>,
}

impl DijkstraState {
    fn new(start: usize, location_count: usize) -> Self {
        let mut heap = BinaryHeap::new();
        let mut distances = vec![None; location_count];

        heap.push(DijkstraNode {
            distance: 0,
            location: start,
        });
        distances[start] = Some(0);

        Self {
            heap,
            distances,
            parents: vec![None; location_count],
            finalized: vec![false; location_count],
        }
    }

    fn visit_neighbor(
        &mut self,
        neighbor: usize,
        current: usize,
        current_distance: Distance,
        weight: Distance,
    ) {
        if self.finalized[neighbor] {
            return;
        }

        let new_distance = current_distance + weight;
        if let Some(existing) = self.distances[neighbor] {
            if new_distance >= existing {
                return;
            }
        }

        self.distances[neighbor] = Some(new_distance);
        self.parents[neighbor] = Some(current);
        self.heap.push(DijkstraNode {
            distance: new_distance,
            location: neighbor,
        });
    }

    fn route_to(&self, target: usize, graph: &Graph) -> Option<(Vec<String>, Distance)> {
        let distance = self.distances[target]?;
        let indices = reconstruct_path(&self.parents, target);
        Some((path_names(graph, &indices), distance))
    }
}

/// Dijkstra's algorithm with a lazy binary heap.
///
/// Improved distances push a fresh heap entry instead of updating the old one;
/// entries for already finalized locations are skipped when popped.
pub struct ShortestPathSearch<'g> {
    graph: &'g Graph,
    config: SearchConfig,
}

impl<'g> ShortestPathSearch<'g> {
    pub fn new(graph: &'g Graph) -> Self {
        Self::with_config(graph, SearchConfig::default())
    }

    pub fn with_config(graph: &'g Graph, config: SearchConfig) -> Self {
        Self { graph, config }
    }

    pub fn find_shortest_path(&self, source: &str, destination: &str) -> PathResult {
        let search_timer = Instant::now();

        let (start, target) = match start_search(self.graph, source, destination, search_timer) {
            Ok(pair) => pair,
            Err(result) => return result,
        };

        let mut budget = SearchBudget::new(&self.config, search_timer);
        let mut dijkstra_state = DijkstraState::new(start, self.graph.location_count());

        while let Some(DijkstraNode {
            distance,
            location: current,
        }) = dijkstra_state.heap.pop()
        {
            if dijkstra_state.finalized[current] {
                continue;
            }

            if !budget.try_expand() {
                let result = PathResult::aborted(None, search_timer.elapsed());
                log_search(Algorithm::Dijkstra, &result, budget.expansions());
                return result;
            }

            dijkstra_state.finalized[current] = true;
            if current == target {
                break;
            }

            for edge in self.graph.neighbors(current) {
                let weight = Distance::from(edge.weight);
                dijkstra_state.visit_neighbor(edge.to, current, distance, weight);
            }
        }

        let result = match dijkstra_state.route_to(target, self.graph) {
            Some((path, distance)) => PathResult::found(path, distance, search_timer.elapsed()),
            None => PathResult::no_path(search_timer.elapsed()),
        };
        log_search(Algorithm::Dijkstra, &result, budget.expansions());
        result
    }
}

impl PathSearch for ShortestPathSearch<'_> {
    fn search(&self, source: &str, destination: &str) -> PathResult {
        self.find_shortest_path(source, destination)
    }

    fn algorithm(&self) -> Algorithm {
        Algorithm::Dijkstra
    }
}
