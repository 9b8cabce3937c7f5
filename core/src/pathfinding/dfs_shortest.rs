use super::budget::SearchBudget;
use super::result::PathResult;
use super::utils::{path_names, start_search};
use super::{PathSearch, log_search};
use crate::algorithm::Algorithm;
use crate::graph::{Distance, Graph};
use crate::pathfinding_config::SearchConfig;
use std::{rc::Rc, time::Instant};

/// Persistent singly linked path. Sibling branches share their common prefix.
struct PathLink {
    location: usize,
    previous: Option<Rc<PathLink>>,
}

impl PathLink {
    fn root(location: usize) -> Rc<Self> {
        Rc::new(Self {
            location,
            previous: None,
        })
    }

    fn extend(self: &Rc<Self>, location: usize) -> Rc<Self> {
        Rc::new(Self {
            location,
            previous: Some(Rc::clone(self)),
        })
    }

    fn to_indices(&self) -> Vec<usize> {
        let mut indices = vec![self.location];
        let mut link = self.previous.as_deref();
        while let Some(current) = link {
            indices.push(current.location);
            link = current.previous.as_deref();
        }
        indices.reverse();
        indices
    }
}

/// One bit per location, copied whenever a branch splits.
#[derive(Clone)]
struct VisitedSet {
    words: Vec<u64>,
}

impl VisitedSet {
    fn new(location_count: usize) -> Self {
        Self {
            words: vec![0; location_count.div_ceil(64)],
        }
    }

    fn contains(&self, location: usize) -> bool {
        self.words[location / 64] & (1u64 << (location % 64)) != 0
    }

    fn insert(&mut self, location: usize) {
        self.words[location / 64] |= 1u64 << (location % 64);
    }

    fn with(&self, location: usize) -> Self {
        let mut extended = self.clone();
        extended.insert(location);
        extended
    }
}

/// A partial route owned by exactly one branch of the search.
struct Branch {
    location: usize,
    trail: Rc<PathLink>,
    visited: VisitedSet,
    distance: Distance,
}

struct Incumbent {
    trail: Rc<PathLink>,
    distance: Distance,
}

struct DfsShortestState {
    stack: Vec<Branch>,
    best: Option<Incumbent>,
}

impl DfsShortestState {
    fn new(start: usize, location_count: usize) -> Self {
        let mut visited = VisitedSet::new(location_count);
        visited.insert(start);

        Self {
            stack: vec![Branch {
                location: start,
                trail: PathLink::root(start),
                visited,
                distance: 0,
            }],
            best: None,
        }
    }

    fn bound(&self) -> Distance {
        self.best
            .as_ref()
            .map_or(Distance::MAX, |incumbent| incumbent.distance)
    }

    fn offer(&mut self, branch: Branch) {
        if branch.distance < self.bound() {
            self.best = Some(Incumbent {
                trail: branch.trail,
                distance: branch.distance,
            });
        }
    }

    fn branch_out(&mut self, branch: &Branch, graph: &Graph) {
        let bound = self.bound();
        for edge in graph.neighbors(branch.location) {
            if branch.visited.contains(edge.to) {
                continue;
            }

            let distance = branch.distance + Distance::from(edge.weight);
            if distance < bound {
                self.stack.push(Branch {
                    location: edge.to,
                    trail: branch.trail.extend(edge.to),
                    visited: branch.visited.with(edge.to),
                    distance,
                });
            }
        }
    }

    fn best_route(&self, graph: &Graph) -> Option<(Vec<String>, Distance)> {
        self.best.as_ref().map(|incumbent| {
            let indices = incumbent.trail.to_indices();
            (path_names(graph, &indices), incumbent.distance)
        })
    }
}

/// Branch-and-bound depth-first search over every simple path.
///
/// Each branch owns its own trail, visited set and distance. A branch is only
/// extended while its distance stays strictly below the best complete route
/// found so far; with positive weights this never discards the optimum. The
/// worst case is still exponential in the number of simple paths.
pub struct ExhaustiveSearch<'g> {
    graph: &'g Graph,
    config: SearchConfig,
}

impl<'g> ExhaustiveSearch<'g> {
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
        let mut state = DfsShortestState::new(start, self.graph.location_count());

        while let Some(branch) = state.stack.pop() {
            if branch.location == target {
                state.offer(branch);
                continue;
            }

            if !budget.try_expand() {
                let result =
                    PathResult::aborted(state.best_route(self.graph), search_timer.elapsed());
                log_search(Algorithm::DfsShortest, &result, budget.expansions());
                return result;
            }

            state.branch_out(&branch, self.graph);
        }

        let result = match state.best_route(self.graph) {
            Some((path, distance)) => PathResult::found(path, distance, search_timer.elapsed()),
            None => PathResult::no_path(search_timer.elapsed()),
        };
        log_search(Algorithm::DfsShortest, &result, budget.expansions());
        result
    }
}

impl PathSearch for ExhaustiveSearch<'_> {
    fn search(&self, source: &str, destination: &str) -> PathResult {
        self.find_shortest_path(source, destination)
    }

    fn algorithm(&self) -> Algorithm {
        Algorithm::DfsShortest
    }
}
